use hashi_core::Puzzle;
use log::trace;

use super::{
    BoxedStrategy, SolveStrategy,
    depth_first::{self, Outcome},
};
use crate::{SolveResult, SolveStats, search::is_infeasible};

const NAME: &str = "iterative-deepening";

/// Repeats a depth-limited depth-first search with a growing limit.
///
/// A solution carries half the sum of all required degrees, so the first limit
/// is that total minus the bridges already placed. The limit grows by one while
/// some branch was cut off, until it reaches the configured maximum.
///
/// # Examples
///
/// ```
/// use hashi_core::Puzzle;
/// use hashi_solver::{SolveStrategy as _, strategy::IterativeDeepening};
///
/// let puzzle: Puzzle = "2.2\n...\n1.1".parse()?;
/// assert!(IterativeDeepening::new().solve(&puzzle).solved);
///
/// // Three bridges are needed.
/// let bounded = IterativeDeepening::new().with_max_depth(2);
/// assert!(!bounded.solve(&puzzle).solved);
/// # Ok::<(), hashi_core::ParsePuzzleError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct IterativeDeepening {
    max_depth: Option<usize>,
}

impl IterativeDeepening {
    /// Creates a new `IterativeDeepening` strategy without a depth bound.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: None }
    }

    /// Limits the number of bridges a single search may add.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Returns the depth bound, if any.
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

/// Returns the number of bridges still missing from a solution of `puzzle`.
fn lower_bound(puzzle: &Puzzle) -> usize {
    let required: u32 = puzzle
        .islands()
        .iter()
        .map(|island| island.required_bridges())
        .sum();
    usize::try_from(required / 2)
        .unwrap_or(usize::MAX)
        .saturating_sub(puzzle.bridges().len())
}

impl SolveStrategy for IterativeDeepening {
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

        let mut limit = lower_bound(puzzle);
        loop {
            if self.max_depth.is_some_and(|max| limit > max) {
                trace!("{NAME}: depth bound reached at {limit}");
                break;
            }
            trace!("{NAME}: searching with depth limit {limit}");
            match depth_first::search(puzzle, Some(limit), &mut stats) {
                Outcome::Solved(solution) => return SolveResult::solved(solution, stats),
                Outcome::Exhausted => break,
                Outcome::CutOff => limit += 1,
            }
        }

        SolveResult::unsolved(puzzle, stats)
    }
}

#[cfg(test)]
mod tests {
    use hashi_core::{Bridge, Position};

    use super::*;

    #[test]
    fn test_lower_bound() {
        let mut puzzle: Puzzle = "2.2\n...\n1.1".parse().unwrap();
        assert_eq!(lower_bound(&puzzle), 3);
        puzzle.place_bridge(Bridge::new(Position::new(0, 0), Position::new(2, 0)));
        assert_eq!(lower_bound(&puzzle), 2);
    }

    #[test]
    fn test_solves_square() {
        let puzzle: Puzzle = "2.2\n...\n1.1".parse().unwrap();
        let result = IterativeDeepening::new().solve(&puzzle);
        assert!(result.solved);
        assert_eq!(result.puzzle.bridges().len(), 3);
    }

    #[test]
    fn test_max_depth() {
        let puzzle: Puzzle = "2.2\n...\n1.1".parse().unwrap();
        let strategy = IterativeDeepening::new().with_max_depth(2);
        assert_eq!(strategy.max_depth(), Some(2));

        let result = strategy.solve(&puzzle);
        assert!(!result.solved);
        assert_eq!(result.stats.expanded(), 0);
        assert_eq!(result.puzzle, puzzle);
    }

    #[test]
    fn test_unsolvable_terminates() {
        let puzzle: Puzzle = "1.1\n...\n1.1".parse().unwrap();
        let result = IterativeDeepening::new().solve(&puzzle);
        assert!(!result.solved);
    }
}
