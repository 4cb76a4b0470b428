use hashi_core::Puzzle;
use log::debug;

use crate::{BoxedStrategy, SolveResult};

/// A puzzle paired with the strategy used to solve it.
///
/// The solver keeps its own copy of the puzzle, so later changes to the
/// caller's puzzle do not affect it, and [`solve`](Self::solve) may be called
/// any number of times.
///
/// # Examples
///
/// ```
/// use hashi_core::Puzzle;
/// use hashi_solver::{PuzzleSolver, StrategyKind};
///
/// let puzzle: Puzzle = "2.2\n...\n1.1".parse()?;
/// let solver = PuzzleSolver::new(&puzzle, StrategyKind::Bfs.strategy());
///
/// let result = solver.solve();
/// assert!(result.solved);
/// assert_eq!(result.puzzle.bridges().len(), 3);
/// assert!(solver.puzzle().bridges().is_empty());
/// # Ok::<(), hashi_core::ParsePuzzleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleSolver {
    puzzle: Puzzle,
    strategy: BoxedStrategy,
}

impl PuzzleSolver {
    /// Creates a solver for a copy of `puzzle`.
    #[must_use]
    pub fn new(puzzle: &Puzzle, strategy: BoxedStrategy) -> Self {
        Self {
            puzzle: puzzle.copy(),
            strategy,
        }
    }

    /// Returns the puzzle to solve.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the strategy in use.
    #[must_use]
    pub fn strategy(&self) -> &BoxedStrategy {
        &self.strategy
    }

    /// Runs the strategy on the puzzle.
    #[must_use]
    pub fn solve(&self) -> SolveResult {
        let name = self.strategy.name();
        debug!(
            "{name}: solving {} islands with {} bridges placed",
            self.puzzle.islands().len(),
            self.puzzle.bridges().len()
        );
        let result = self.strategy.solve(&self.puzzle);
        debug!(
            "{name}: {} ({})",
            if result.solved { "solved" } else { "no solution" },
            result.stats
        );
        result
    }
}
