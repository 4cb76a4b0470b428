//! Core data structures for bridge puzzles.
//!
//! A bridge puzzle (also known as Hashiwokakero) places numbered islands on a
//! grid. The player connects them with horizontal and vertical bridges so that:
//!
//! - every island has exactly as many bridges as its number;
//! - at most two bridges join the same pair of islands;
//! - bridges never cross islands or each other;
//! - all islands form a single connected group.
//!
//! # Overview
//!
//! - [`Span`], [`Position`], [`Island`] and [`Bridge`] are immutable value types.
//! - [`Puzzle`] holds the islands and placed bridges, enforces the placement rules
//!   and derives the [`PuzzleStatus`].
//! - [`codec`] reads and writes the binary puzzle format.
//! - Puzzles also implement [`Display`](std::fmt::Display) and
//!   [`FromStr`](std::str::FromStr) for a compact text grid (see [`text`]).
//! - [`sorted`] contains the sorted-vector helpers the puzzle is built on.
//!
//! # Examples
//!
//! ```
//! use hashi_core::{Bridge, Position, Puzzle, PuzzleStatus};
//!
//! let mut puzzle: Puzzle = "
//!     2.2
//!     ...
//!     1.1
//! "
//! .parse()?;
//!
//! let top = Bridge::new(Position::new(0, 0), Position::new(2, 0));
//! let left = Bridge::new(Position::new(0, 0), Position::new(0, 2));
//! let right = Bridge::new(Position::new(2, 0), Position::new(2, 2));
//! for bridge in [top, left, right] {
//!     assert!(puzzle.place_bridge(bridge));
//! }
//! assert_eq!(puzzle.status(), PuzzleStatus::Solved);
//! # Ok::<(), hashi_core::ParsePuzzleError>(())
//! ```

pub mod bridge;
pub mod codec;
pub mod island;
pub mod position;
pub mod puzzle;
pub mod sorted;
pub mod span;
pub mod text;

pub use self::{
    bridge::{Bridge, Orientation},
    codec::LoadError,
    island::Island,
    position::Position,
    puzzle::{InvariantError, MAX_BRIDGE_MULTIPLICITY, Puzzle, PuzzleStatus},
    span::Span,
    text::{MAX_TEXT_CELLS, ParsePuzzleError},
};
