//! Test utilities for deduction implementations.
//!
//! This module provides [`DeductionTester`], a testing harness for verifying
//! that deduction rules find the expected forced bridges.
//!
//! # Example
//!
//! ```
//! use hashi_solver::{deduction::SaturatedIsland, testing::DeductionTester};
//!
//! DeductionTester::from_str(
//!     "
//!     2.2
//!     ",
//! )
//! .find(&SaturatedIsland::new())
//! .assert_island(0, 0)
//! .assert_forced([((0, 0), (2, 0)), ((0, 0), (2, 0))])
//! .apply()
//! .find(&SaturatedIsland::new())
//! .assert_none();
//! ```

use hashi_core::{Bridge, Position, Puzzle};

use crate::{
    DeductionGrid,
    deduction::{Deduction, Forced},
};

/// A test harness for verifying deduction implementations.
///
/// `DeductionTester` keeps a [`DeductionGrid`] and the result of the last
/// search, so that searches, assertions and applications can be chained.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct DeductionTester {
    grid: DeductionGrid,
    found: Option<Forced>,
    name: &'static str,
}

impl DeductionTester {
    /// Creates a new tester from a text grid.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a puzzle.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let puzzle: Puzzle = s.parse().unwrap();
        Self {
            grid: DeductionGrid::new(puzzle),
            found: None,
            name: "",
        }
    }

    /// Runs the deduction on the current grid and remembers its result.
    ///
    /// # Panics
    ///
    /// Panics if the deduction returns a bridge that is not a candidate.
    #[track_caller]
    pub fn find<D>(mut self, deduction: &D) -> Self
    where
        D: Deduction,
    {
        self.name = deduction.name();
        self.found = deduction.find(&self.grid);
        if let Some(forced) = &self.found {
            for bridge in forced.bridges() {
                assert!(
                    self.grid.candidates().contains(bridge),
                    "Expected {} to force only candidates, but {bridge} is not one of {:?}",
                    self.name,
                    self.grid.candidates()
                );
            }
        }
        self
    }

    /// Applies the last forced move to the grid.
    ///
    /// # Panics
    ///
    /// Panics if nothing was found or the move cannot be applied.
    #[track_caller]
    pub fn apply(mut self) -> Self {
        let forced = self
            .found
            .take()
            .unwrap_or_else(|| panic!("Expected {} to find a move to apply", self.name));
        assert!(
            self.grid.apply(&forced),
            "Expected {forced:?} found by {} to apply cleanly",
            self.name
        );
        self
    }

    /// Asserts that the last search found nothing.
    #[track_caller]
    pub fn assert_none(self) -> Self {
        assert!(
            self.found.is_none(),
            "Expected {} to find nothing, but found {:?}",
            self.name,
            self.found
        );
        self
    }

    /// Asserts that the last search found a move around the island at `(x, y)`.
    #[track_caller]
    pub fn assert_island(self, x: i32, y: i32) -> Self {
        let forced = self.expect_found();
        assert_eq!(
            forced.island().position(),
            Position::new(x, y),
            "Expected {} to force around ({x},{y}), but found {forced:?}",
            self.name
        );
        self
    }

    /// Asserts that the last search forced exactly the given bridges, in any
    /// order.
    ///
    /// Each bridge is given by its endpoints; repeat a bridge to expect a
    /// double bridge.
    #[track_caller]
    pub fn assert_forced<I>(self, bridges: I) -> Self
    where
        I: IntoIterator<Item = ((i32, i32), (i32, i32))>,
    {
        let mut expected = bridges
            .into_iter()
            .map(|((x1, y1), (x2, y2))| Bridge::new(Position::new(x1, y1), Position::new(x2, y2)))
            .collect::<Vec<_>>();
        expected.sort_unstable();
        let mut actual = self.expect_found().bridges().to_vec();
        actual.sort_unstable();
        assert_eq!(
            actual, expected,
            "Expected {} to force {expected:?}, but forced {actual:?}",
            self.name
        );
        self
    }

    #[track_caller]
    fn expect_found(&self) -> &Forced {
        self.found
            .as_ref()
            .unwrap_or_else(|| panic!("Expected {} to find a forced move", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deduction::{BoxedDeduction, SaturatedIsland};

    #[derive(Debug)]
    struct NoOpDeduction;

    impl Deduction for NoOpDeduction {
        fn name(&self) -> &'static str {
            "no-op"
        }

        fn clone_box(&self) -> BoxedDeduction {
            Box::new(NoOpDeduction)
        }

        fn find(&self, _grid: &DeductionGrid) -> Option<Forced> {
            None
        }
    }

    #[test]
    fn test_assert_none() {
        DeductionTester::from_str("1.1")
            .find(&NoOpDeduction)
            .assert_none();
    }

    #[test]
    #[should_panic(expected = "Expected no-op to find a forced move")]
    fn test_assert_island_without_move() {
        DeductionTester::from_str("1.1")
            .find(&NoOpDeduction)
            .assert_island(0, 0);
    }

    #[test]
    #[should_panic(expected = "Expected saturated island to force")]
    fn test_assert_forced_mismatch() {
        DeductionTester::from_str("1.1")
            .find(&SaturatedIsland::new())
            .assert_forced([((0, 0), (2, 0)), ((0, 0), (2, 0))]);
    }

    #[test]
    fn test_apply_then_find_again() {
        DeductionTester::from_str("1.1")
            .find(&SaturatedIsland::new())
            .assert_forced([((0, 0), (2, 0))])
            .apply()
            .find(&SaturatedIsland::new())
            .assert_none();
    }
}
