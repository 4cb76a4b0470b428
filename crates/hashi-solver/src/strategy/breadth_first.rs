use std::collections::VecDeque;

use hashi_core::Puzzle;
use log::trace;

use super::{BoxedStrategy, SolveStrategy};
use crate::{
    SolveResult, SolveStats,
    search::{Node, SearchSpace, is_infeasible, overfills},
};

const NAME: &str = "breadth-first";

/// Explores states in order of increasing bridge count.
///
/// Every state is expanded by placing each of its candidate bridges; children
/// that overfill an island or were already seen are discarded. The first solved
/// child ends the search, so the result uses the fewest extra bridges.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;

impl BreadthFirst {
    /// Creates a new `BreadthFirst` strategy.
    #[must_use]
    pub const fn new() -> Self {
        BreadthFirst
    }
}

impl SolveStrategy for BreadthFirst {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn solve(&self, puzzle: &Puzzle) -> SolveResult {
        let mut stats = SolveStats::default();
        if puzzle.status().is_solved() {
            return SolveResult::solved(puzzle.fast_copy(), stats);
        }
        if is_infeasible(puzzle) {
            return SolveResult::unsolved(puzzle, stats);
        }

        let root = Node::root(puzzle);
        let mut space = SearchSpace::new();
        space.insert(&root.puzzle);
        let mut frontier = VecDeque::from([root]);

        while let Some(node) = frontier.pop_front() {
            stats.expanded += 1;
            for &bridge in &node.candidates {
                let child = node.child(bridge);
                stats.generated += 1;
                if overfills(&child.puzzle, bridge) {
                    stats.pruned += 1;
                    continue;
                }
                if !space.insert(&child.puzzle) {
                    stats.duplicates += 1;
                    continue;
                }
                if child.is_solved() {
                    return SolveResult::solved(child.puzzle, stats);
                }
                frontier.push_back(child);
            }
        }

        trace!("{NAME}: exhausted {} states", space.len());
        SolveResult::unsolved(puzzle, stats)
    }
}
