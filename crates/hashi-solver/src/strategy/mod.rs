//! Search strategies.
//!
//! Each strategy implements [`SolveStrategy`]. The set of strategies is closed
//! and enumerated by [`StrategyKind`].

use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use hashi_core::Puzzle;

pub use self::{
    breadth_first::BreadthFirst, depth_first::DepthFirst, heuristic::Heuristic,
    iterative_deepening::IterativeDeepening, smart::Smart,
};
use crate::SolveResult;

mod breadth_first;
mod depth_first;
mod heuristic;
mod iterative_deepening;
mod smart;

/// An algorithm that searches for a bridge assignment.
///
/// Implementations never mutate their input; every explored state is a copy.
/// If the input is already solved it is returned unchanged.
pub trait SolveStrategy: Debug + Send + Sync {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedStrategy;

    /// Searches for a solution of `puzzle`, keeping any bridges already placed.
    ///
    /// Returns `solved: false` with a copy of `puzzle` if the search space is
    /// exhausted without finding a solution.
    fn solve(&self, puzzle: &Puzzle) -> SolveResult;
}

/// A boxed strategy.
pub type BoxedStrategy = Box<dyn SolveStrategy>;

impl Clone for BoxedStrategy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// The available strategies.
///
/// # Examples
///
/// ```
/// use hashi_core::Puzzle;
/// use hashi_solver::StrategyKind;
///
/// let puzzle: Puzzle = "2=2".parse::<Puzzle>()?.without_bridges();
/// for kind in StrategyKind::ALL {
///     let result = kind.strategy().solve(&puzzle);
///     assert!(result.solved, "{kind}");
/// }
/// # Ok::<(), hashi_core::ParsePuzzleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// [`BreadthFirst`].
    Bfs,
    /// [`DepthFirst`].
    Dfs,
    /// [`IterativeDeepening`].
    IterativeDeepening,
    /// [`Heuristic`].
    Heuristic,
    /// [`Smart`].
    Smart,
}

impl StrategyKind {
    /// All strategy kinds.
    pub const ALL: [Self; 5] = [
        Self::Bfs,
        Self::Dfs,
        Self::IterativeDeepening,
        Self::Heuristic,
        Self::Smart,
    ];

    /// Returns the short name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::IterativeDeepening => "ids",
            Self::Heuristic => "heuristic",
            Self::Smart => "smart",
        }
    }

    /// Creates the strategy with its default settings.
    #[must_use]
    pub fn strategy(self) -> BoxedStrategy {
        match self {
            Self::Bfs => Box::new(BreadthFirst::new()),
            Self::Dfs => Box::new(DepthFirst::new()),
            Self::IterativeDeepening => Box::new(IterativeDeepening::new()),
            Self::Heuristic => Box::new(Heuristic::new()),
            Self::Smart => Box::new(Smart::new()),
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error raised when parsing an unknown [`StrategyKind`] name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown strategy: {input:?}")]
pub struct ParseStrategyError {
    input: String,
}

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    /// Parses a short name or a strategy name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(wanted)
                    || kind.strategy().name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ParseStrategyError {
                input: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.name().parse::<StrategyKind>(), Ok(kind));
            assert_eq!(kind.strategy().name().parse::<StrategyKind>(), Ok(kind));
        }
        assert_eq!("BFS".parse::<StrategyKind>(), Ok(StrategyKind::Bfs));
        assert_eq!(
            "iterative-deepening".parse::<StrategyKind>(),
            Ok(StrategyKind::IterativeDeepening)
        );
        assert!("random".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_boxed_strategy_clone() {
        let strategy = StrategyKind::Smart.strategy();
        let cloned = strategy.clone();
        assert_eq!(cloned.name(), strategy.name());
    }

    #[test]
    fn test_strategy_names_are_unique() {
        let mut names = StrategyKind::ALL
            .iter()
            .map(|kind| kind.strategy().name())
            .collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StrategyKind::ALL.len());
    }
}
