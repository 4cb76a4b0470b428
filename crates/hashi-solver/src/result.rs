use std::fmt::{self, Display};

use hashi_core::Puzzle;

/// Counters collected during a single solve.
///
/// # Examples
///
/// ```
/// use hashi_core::Puzzle;
/// use hashi_solver::{SolveStrategy as _, strategy::BreadthFirst};
///
/// let puzzle: Puzzle = "1.1".parse()?;
/// let result = BreadthFirst::new().solve(&puzzle);
/// assert!(result.solved);
/// assert_eq!(result.stats.expanded(), 1);
/// assert_eq!(result.stats.generated(), 1);
/// # Ok::<(), hashi_core::ParsePuzzleError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub(crate) expanded: usize,
    pub(crate) generated: usize,
    pub(crate) pruned: usize,
    pub(crate) duplicates: usize,
    pub(crate) forced: usize,
}

impl SolveStats {
    /// Returns the number of states whose moves were enumerated.
    #[must_use]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Returns the number of child states created.
    #[must_use]
    pub fn generated(&self) -> usize {
        self.generated
    }

    /// Returns the number of child states discarded as infeasible.
    #[must_use]
    pub fn pruned(&self) -> usize {
        self.pruned
    }

    /// Returns the number of child states discarded as already seen.
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Returns the number of bridges placed by deduction rather than search.
    #[must_use]
    pub fn forced(&self) -> usize {
        self.forced
    }
}

impl Display for SolveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded: {}, generated: {}, pruned: {}, duplicates: {}, forced: {}",
            self.expanded, self.generated, self.pruned, self.duplicates, self.forced
        )
    }
}

/// The outcome of a solve.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The solved puzzle, or a bridge-for-bridge copy of the input if no solution
    /// was found.
    pub puzzle: Puzzle,
    /// Whether `puzzle` is solved.
    pub solved: bool,
    /// Search counters.
    pub stats: SolveStats,
}

impl SolveResult {
    pub(crate) fn solved(puzzle: Puzzle, stats: SolveStats) -> Self {
        debug_assert!(puzzle.status().is_solved());
        Self {
            puzzle,
            solved: true,
            stats,
        }
    }

    pub(crate) fn unsolved(input: &Puzzle, stats: SolveStats) -> Self {
        Self {
            puzzle: input.fast_copy(),
            solved: false,
            stats,
        }
    }
}
