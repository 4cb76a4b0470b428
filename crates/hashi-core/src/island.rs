//! Puzzle nodes.

use std::fmt::{self, Display};

use crate::Position;

/// An island: a puzzle node that needs an exact number of incident bridges.
///
/// Islands are immutable values. Equality and ordering are lexicographic on
/// `(x, y, required_bridges)`; adjacency queries (such as
/// [`Bridge::has_endpoint`](crate::Bridge::has_endpoint)) only look at the
/// position, so an island whose required degree is being recomputed is still the
/// same node for connectivity purposes.
///
/// # Examples
///
/// ```
/// use hashi_core::{Island, Position};
///
/// let island = Island::new(Position::new(3, 1), 4);
/// assert_eq!(island.x(), 3);
/// assert_eq!(island.required_bridges(), 4);
///
/// let retargeted = island.with_required_bridges(2);
/// assert_eq!(retargeted.position(), island.position());
/// assert_ne!(retargeted, island);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Island {
    position: Position,
    required_bridges: u32,
}

impl Island {
    /// Creates an island at `position` that requires `required_bridges` bridges.
    ///
    /// Valid puzzles use degrees 1 through 8, but this is not enforced.
    #[must_use]
    pub const fn new(position: Position, required_bridges: u32) -> Self {
        Self {
            position,
            required_bridges,
        }
    }

    /// Creates an island from raw coordinates.
    #[must_use]
    pub const fn at(x: i32, y: i32, required_bridges: u32) -> Self {
        Self::new(Position::new(x, y), required_bridges)
    }

    /// Returns the position of this island.
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }

    /// Returns the x coordinate of this island.
    #[must_use]
    pub const fn x(self) -> i32 {
        self.position.x()
    }

    /// Returns the y coordinate of this island.
    #[must_use]
    pub const fn y(self) -> i32 {
        self.position.y()
    }

    /// Returns the number of bridges this island needs in a solved puzzle.
    #[must_use]
    pub const fn required_bridges(self) -> u32 {
        self.required_bridges
    }

    /// Returns a copy of this island at the same position with a new required degree.
    #[must_use]
    pub const fn with_required_bridges(self, required_bridges: u32) -> Self {
        Self::new(self.position, required_bridges)
    }
}

impl Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.position, self.required_bridges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut islands = vec![
            Island::at(1, 0, 2),
            Island::at(0, 3, 1),
            Island::at(0, 1, 4),
            Island::at(0, 1, 3),
        ];
        islands.sort();
        assert_eq!(
            islands,
            vec![
                Island::at(0, 1, 3),
                Island::at(0, 1, 4),
                Island::at(0, 3, 1),
                Island::at(1, 0, 2),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Island::at(2, -1, 3).to_string(), "(2,-1) [3]");
    }
}
