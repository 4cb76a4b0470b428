//! Random bridge puzzle generation.
//!
//! Puzzles are grown as bridge graphs, so every generated puzzle is solvable by
//! construction. Generation is fully determined by a [`PuzzleSeed`] and a
//! [`GeneratorConfig`]. Uniqueness of the solution is not guaranteed.
//!
//! # Examples
//!
//! ```
//! use hashi_core::PuzzleStatus;
//! use hashi_generator::{Difficulty, GeneratorConfig, PuzzleSeed, RandomPuzzleGenerator};
//!
//! let config = GeneratorConfig::for_difficulty(Difficulty::Normal);
//! let seed = PuzzleSeed::from_phrase("daily puzzle");
//! let puzzle = RandomPuzzleGenerator::generate_with_seed(config, seed);
//!
//! assert_eq!(puzzle.problem.status(), PuzzleStatus::Untouched);
//! assert_eq!(puzzle.solution.status(), PuzzleStatus::Solved);
//! assert_eq!(puzzle.problem.islands(), puzzle.solution.islands());
//! ```

mod config;
mod generator;
mod seed;

pub use self::{
    config::{Difficulty, GeneratorConfig, ParseDifficultyError},
    generator::{GeneratedPuzzle, PuzzleGenerator, RandomPuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
