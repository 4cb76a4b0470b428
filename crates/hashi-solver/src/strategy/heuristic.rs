use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use hashi_core::Puzzle;
use log::trace;

use super::{BoxedStrategy, SolveStrategy};
use crate::{
    SolveResult, SolveStats,
    search::{Node, SearchSpace, is_infeasible, overfills, satisfied_islands},
};

const NAME: &str = "heuristic";

/// Greedy best-first search.
///
/// States with more islands at exactly their required degree are expanded
/// first; ties go to the state generated earliest. Pruning and duplicate
/// detection are the same as [`BreadthFirst`](super::BreadthFirst).
#[derive(Debug, Default, Clone, Copy)]
pub struct Heuristic;

impl Heuristic {
    /// Creates a new `Heuristic` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Heuristic
    }
}

#[derive(Debug)]
struct Entry {
    satisfied: usize,
    sequence: usize,
    node: Node,
}

impl Entry {
    fn key(&self) -> (usize, Reverse<usize>) {
        (self.satisfied, Reverse(self.sequence))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl SolveStrategy for Heuristic {
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
        let mut sequence = 0;
        let mut queue = BinaryHeap::from([Entry {
            satisfied: satisfied_islands(&root.puzzle),
            sequence,
            node: root,
        }]);

        while let Some(Entry { node, .. }) = queue.pop() {
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
                sequence += 1;
                queue.push(Entry {
                    satisfied: satisfied_islands(&child.puzzle),
                    sequence,
                    node: child,
                });
            }
        }

        trace!("{NAME}: exhausted {} states", space.len());
        SolveResult::unsolved(puzzle, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(satisfied: usize, sequence: usize) -> Entry {
        let puzzle: Puzzle = "1.1".parse().unwrap();
        Entry {
            satisfied,
            sequence,
            node: Node::root(&puzzle),
        }
    }

    #[test]
    fn test_entry_order() {
        let mut queue = BinaryHeap::from([entry(1, 0), entry(3, 2), entry(3, 1), entry(2, 3)]);
        let order = std::iter::from_fn(|| queue.pop())
            .map(|entry| (entry.satisfied, entry.sequence))
            .collect::<Vec<_>>();
        assert_eq!(order, vec![(3, 1), (3, 2), (2, 3), (1, 0)]);
    }

    #[test]
    fn test_solves_square() {
        let puzzle: Puzzle = "2.2\n...\n1.1".parse().unwrap();
        let result = Heuristic::new().solve(&puzzle);
        assert!(result.solved);
        assert!(result.puzzle.status().is_solved());
        assert_eq!(result.puzzle.bridges().len(), 3);
    }

    #[test]
    fn test_unsolvable() {
        let puzzle: Puzzle = "3.3".parse().unwrap();
        let result = Heuristic::new().solve(&puzzle);
        assert!(!result.solved);
        assert_eq!(result.puzzle, puzzle);
    }
}
