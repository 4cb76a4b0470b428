use hashi_core::{Bridge, Puzzle};

use super::{BoxedStrategy, SolveStrategy};
use crate::{
    SolveResult, SolveStats,
    search::{Node, is_infeasible, overfills},
};

const NAME: &str = "depth-first";

/// Follows one branch as deep as possible before backtracking.
///
/// The search keeps a single working puzzle and an explicit stack of frames, one
/// per applied bridge; popping a frame removes its bridge again. Each path only
/// extends with candidates at or after the position of the last applied
/// candidate, so every combination of bridges is reached along exactly one path
/// and no state is revisited.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst;

impl DepthFirst {
    /// Creates a new `DepthFirst` strategy.
    #[must_use]
    pub const fn new() -> Self {
        DepthFirst
    }
}

impl SolveStrategy for DepthFirst {
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

        match search(puzzle, None, &mut stats) {
            Outcome::Solved(solution) => SolveResult::solved(solution, stats),
            Outcome::Exhausted | Outcome::CutOff => SolveResult::unsolved(puzzle, stats),
        }
    }
}

/// The result of a (possibly depth-limited) depth-first search.
#[derive(Debug)]
pub(super) enum Outcome {
    Solved(Puzzle),
    /// The whole search space was explored.
    Exhausted,
    /// Some branch was abandoned at the depth limit.
    CutOff,
}

#[derive(Debug)]
struct Frame {
    candidates: Vec<Bridge>,
    next: usize,
}

/// Runs a depth-first search from `puzzle`, adding at most `limit` bridges.
pub(super) fn search(puzzle: &Puzzle, limit: Option<usize>, stats: &mut SolveStats) -> Outcome {
    let Node {
        mut puzzle,
        candidates,
    } = Node::root(puzzle);
    let mut path = vec![];
    let mut stack = vec![Frame {
        candidates,
        next: 0,
    }];
    let mut cut_off = false;
    stats.expanded += 1;

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.candidates.len() {
            stack.pop();
            if let Some(bridge) = path.pop() {
                puzzle.delete_bridge(bridge);
            }
            continue;
        }
        if limit.is_some_and(|limit| path.len() >= limit) {
            cut_off = true;
            frame.next = frame.candidates.len();
            continue;
        }

        let index = frame.next;
        frame.next += 1;
        let bridge = frame.candidates[index];

        puzzle.add_bridge(bridge);
        stats.generated += 1;
        if overfills(&puzzle, bridge) {
            stats.pruned += 1;
            puzzle.delete_bridge(bridge);
            continue;
        }
        if puzzle.status().is_solved() {
            return Outcome::Solved(puzzle);
        }

        let candidates = puzzle.possible_bridges_from(&frame.candidates[index..]);
        stats.expanded += 1;
        path.push(bridge);
        stack.push(Frame {
            candidates,
            next: 0,
        });
    }

    if cut_off {
        Outcome::CutOff
    } else {
        Outcome::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solves_square() {
        let puzzle: Puzzle = "2.2\n...\n1.1".parse().unwrap();
        let result = DepthFirst::new().solve(&puzzle);
        assert!(result.solved);
        assert_eq!(result.puzzle.bridges().len(), 3);
        assert!(puzzle.bridges().is_empty());
    }

    #[test]
    fn test_never_revisits_states() {
        let puzzle: Puzzle = "3.3".parse().unwrap();
        let result = DepthFirst::new().solve(&puzzle);
        assert!(!result.solved);
        // empty, one bridge, two bridges
        assert_eq!(result.stats.expanded(), 3);
        assert_eq!(result.stats.duplicates(), 0);
    }

    #[test]
    fn test_depth_limit_cuts_off() {
        let puzzle: Puzzle = "2.2\n...\n1.1".parse().unwrap();
        let mut stats = SolveStats::default();
        assert!(matches!(
            search(&puzzle, Some(2), &mut stats),
            Outcome::CutOff
        ));

        let mut stats = SolveStats::default();
        assert!(matches!(
            search(&puzzle, Some(3), &mut stats),
            Outcome::Solved(_)
        ));
    }

    #[test]
    fn test_exhausted_without_limit() {
        let puzzle: Puzzle = "1.1\n...\n1.1".parse().unwrap();
        let mut stats = SolveStats::default();
        assert!(matches!(
            search(&puzzle, None, &mut stats),
            Outcome::Exhausted
        ));
    }
}
