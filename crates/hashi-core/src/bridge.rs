//! Straight connections between islands.

use std::fmt::{self, Display};

use crate::{Island, Position, Span};

/// The orientation of a straight [`Bridge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Orientation {
    /// Both endpoints share a row.
    #[display("horizontal")]
    Horizontal,
    /// Both endpoints share a column.
    #[display("vertical")]
    Vertical,
}

/// A single bridge between two island positions.
///
/// Bridges are unordered pairs canonicalized at construction: the smaller
/// position is always [`first`](Self::first). Equality and ordering compare the
/// canonical pair, so `Bridge::new(a, b) == Bridge::new(b, a)`.
///
/// A doubled bridge is not a separate value: a puzzle holds two equal `Bridge`
/// values instead.
///
/// Geometry queries ([`orientation`](Self::orientation), the spans, and
/// [`intersects`](Self::intersects)) are only meaningful for straight bridges and
/// panic otherwise. Puzzles never contain bridges that are not straight.
///
/// # Examples
///
/// ```
/// use hashi_core::{Bridge, Orientation, Position};
///
/// let a = Position::new(4, 1);
/// let b = Position::new(0, 1);
/// let bridge = Bridge::new(a, b);
///
/// assert_eq!(bridge.first(), b);
/// assert_eq!(bridge, Bridge::new(b, a));
/// assert_eq!(bridge.orientation(), Orientation::Horizontal);
/// assert!(bridge.crosses(Position::new(2, 1)));
/// assert!(!bridge.crosses(a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bridge {
    first: Position,
    second: Position,
}

impl Bridge {
    /// Creates a bridge between two positions, ordering them canonically.
    ///
    /// No geometry check is made here; use [`is_straight`](Self::is_straight)
    /// and [`is_loop`](Self::is_loop) to validate untrusted input.
    #[must_use]
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// Creates a bridge between two islands, ordering them canonically.
    #[must_use]
    pub fn between(a: Island, b: Island) -> Self {
        Self::new(a.position(), b.position())
    }

    /// Returns the smaller endpoint.
    #[must_use]
    pub const fn first(self) -> Position {
        self.first
    }

    /// Returns the larger endpoint.
    #[must_use]
    pub const fn second(self) -> Position {
        self.second
    }

    /// Returns `true` if `position` is one of the endpoints.
    #[must_use]
    pub fn has_endpoint(self, position: Position) -> bool {
        self.first == position || self.second == position
    }

    /// Returns the endpoint opposite to `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not an endpoint of this bridge.
    #[must_use]
    #[track_caller]
    pub fn other_endpoint(self, position: Position) -> Position {
        if self.first == position {
            self.second
        } else if self.second == position {
            self.first
        } else {
            panic!("{position} is not an endpoint of bridge {self}");
        }
    }

    /// Returns `true` if the endpoints share exactly one coordinate.
    #[must_use]
    pub fn is_straight(self) -> bool {
        (self.first.x() == self.second.x()) ^ (self.first.y() == self.second.y())
    }

    /// Returns `true` if both endpoints are the same position.
    #[must_use]
    pub fn is_loop(self) -> bool {
        self.first == self.second
    }

    /// Returns the orientation of this bridge.
    ///
    /// # Panics
    ///
    /// Panics if the bridge is not straight.
    #[must_use]
    #[track_caller]
    pub fn orientation(self) -> Orientation {
        self.assert_straight();
        if self.first.x() == self.second.x() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Returns the span covered along the x axis.
    ///
    /// # Panics
    ///
    /// Panics if the bridge is not straight.
    #[must_use]
    #[track_caller]
    pub fn horizontal_span(self) -> Span {
        self.assert_straight();
        Span::from_values(self.first.x(), self.second.x())
    }

    /// Returns the span covered along the y axis.
    ///
    /// # Panics
    ///
    /// Panics if the bridge is not straight.
    #[must_use]
    #[track_caller]
    pub fn vertical_span(self) -> Span {
        self.assert_straight();
        Span::from_values(self.first.y(), self.second.y())
    }

    /// Returns the distance between the endpoints.
    ///
    /// # Panics
    ///
    /// Panics if the bridge is not straight.
    #[must_use]
    #[track_caller]
    pub fn length(self) -> u32 {
        self.horizontal_span().size() + self.vertical_span().size()
    }

    /// Returns `true` if this bridge physically overlaps `other`.
    ///
    /// Both axis spans must overlap or be identical. This holds for perpendicular
    /// bridges crossing each other, for collinear bridges sharing a stretch, and for
    /// a bridge compared with itself. Bridges that only share an endpoint do not
    /// intersect.
    ///
    /// # Panics
    ///
    /// Panics if either bridge is not straight.
    #[must_use]
    #[track_caller]
    pub fn intersects(self, other: Self) -> bool {
        self.horizontal_span()
            .overlaps_or_equals(other.horizontal_span())
            && self
                .vertical_span()
                .overlaps_or_equals(other.vertical_span())
    }

    /// Returns `true` if this bridge passes directly over `position` without
    /// ending there.
    ///
    /// # Panics
    ///
    /// Panics if the bridge is not straight.
    #[must_use]
    #[track_caller]
    pub fn crosses(self, position: Position) -> bool {
        (self.horizontal_span().contains(position.x()) && self.first.y() == position.y())
            || (self.vertical_span().contains(position.y()) && self.first.x() == position.x())
    }

    /// Returns every position strictly between the endpoints.
    ///
    /// # Panics
    ///
    /// Panics if the bridge is not straight.
    pub fn interior(self) -> impl Iterator<Item = Position> {
        let (dx, dy) = match self.orientation() {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        };
        let first = self.first;
        let length = (self.second.x() - first.x()) + (self.second.y() - first.y());
        (1..length).map(move |step| first.offset(dx * step, dy * step))
    }

    /// Returns this bridge shifted by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.first.offset(dx, dy), self.second.offset(dx, dy))
    }

    #[track_caller]
    fn assert_straight(self) {
        assert!(self.is_straight(), "bridge {self} must be straight");
    }
}

impl Display for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
