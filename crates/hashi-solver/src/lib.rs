//! Search-based solvers for bridge puzzles.
//!
//! # Overview
//!
//! Every solver implements [`SolveStrategy`]: given a puzzle, possibly with some
//! bridges already placed, it searches for a completion and reports a
//! [`SolveResult`] together with [`SolveStats`]. The input is never modified.
//!
//! Five strategies are available, enumerated by [`StrategyKind`]:
//!
//! - [`BreadthFirst`](strategy::BreadthFirst) and
//!   [`Heuristic`](strategy::Heuristic) keep a frontier of puzzle copies and skip
//!   states they have seen before.
//! - [`DepthFirst`](strategy::DepthFirst) and
//!   [`IterativeDeepening`](strategy::IterativeDeepening) backtrack over a single
//!   working puzzle.
//! - [`Smart`](strategy::Smart) applies the rules in [`deduction`] to a fixpoint
//!   and only branches when they get stuck.
//!
//! [`PuzzleSolver`] pairs a puzzle with a strategy and logs each solve.
//!
//! # Examples
//!
//! ```
//! use hashi_core::{Puzzle, PuzzleStatus};
//! use hashi_solver::{PuzzleSolver, StrategyKind};
//!
//! let puzzle: Puzzle = "
//!     2.3.1
//!     .....
//!     3.3..
//! "
//! .parse()?;
//!
//! let solver = PuzzleSolver::new(&puzzle, "smart".parse::<StrategyKind>()?.strategy());
//! let result = solver.solve();
//! assert!(result.solved);
//! assert_eq!(result.puzzle.status(), PuzzleStatus::Solved);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod deduction;
mod deduction_grid;
mod result;
mod search;
mod solver;
pub mod strategy;
pub mod testing;

pub use self::{
    deduction_grid::DeductionGrid,
    result::{SolveResult, SolveStats},
    solver::PuzzleSolver,
    strategy::{BoxedStrategy, ParseStrategyError, SolveStrategy, StrategyKind},
};
