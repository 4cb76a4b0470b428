//! Grid coordinates.

use std::fmt::{self, Display};

/// A coordinate on the puzzle grid.
///
/// Positions order lexicographically by `x`, then `y`. Coordinates may be
/// negative while a puzzle is under construction; finished puzzles are
/// normalized so that every coordinate is non-negative.
///
/// # Examples
///
/// ```
/// use hashi_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.y(), 5);
/// assert!(Position::new(1, 9) < Position::new(2, 0));
/// assert_eq!(pos.offset(-2, 1), Position::new(0, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Creates a position from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x (column) coordinate.
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Returns the y (row) coordinate.
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Returns this position shifted by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
