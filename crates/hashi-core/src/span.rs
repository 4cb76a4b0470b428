//! Exclusive integer intervals.

use std::fmt::{self, Display};

/// An exclusive range of integers, used to test bridges for overlap and crossing.
///
/// A span is always normalized: `start() <= end()`. Both bounds are exclusive, so
/// the span `(0, 2)` contains only `1`.
///
/// # Examples
///
/// ```
/// use hashi_core::Span;
///
/// let span = Span::from_values(3, -1);
/// assert_eq!((span.start(), span.end()), (-1, 3));
/// assert!(span.contains(0));
/// assert!(!span.contains(3));
/// assert!(span.overlaps(Span::from_values(2, 8)));
/// assert!(!span.overlaps(Span::from_values(3, 8)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: i32,
    end: i32,
}

impl Span {
    /// Creates a span from two bounds given in any order.
    #[must_use]
    pub const fn from_values(a: i32, b: i32) -> Self {
        if a < b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Returns the exclusive lower bound.
    #[must_use]
    pub const fn start(self) -> i32 {
        self.start
    }

    /// Returns the exclusive upper bound.
    #[must_use]
    pub const fn end(self) -> i32 {
        self.end
    }

    /// Returns `true` if `value` lies strictly between the bounds.
    #[must_use]
    pub const fn contains(self, value: i32) -> bool {
        self.start < value && value < self.end
    }

    /// Returns `true` if the interiors of both spans share at least one point.
    ///
    /// Spans that merely touch at an endpoint do not overlap. Identical non-empty
    /// spans always overlap; a zero-length span overlaps only spans that strictly
    /// contain its position.
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        self.end > other.start && self.start < other.end
    }

    /// Returns `true` if the spans overlap or are identical.
    ///
    /// This is the test bridges use along each axis, so that a zero-length span
    /// (the fixed coordinate of a straight bridge) matches itself.
    #[must_use]
    pub fn overlaps_or_equals(self, other: Self) -> bool {
        self.overlaps(other) || self == other
    }

    /// Returns the distance between the bounds.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.end.abs_diff(self.start)
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_from_values_normalizes() {
        assert_eq!(Span::from_values(5, 2), Span::from_values(2, 5));
        assert_eq!(Span::from_values(5, 2).start(), 2);
        assert_eq!(Span::from_values(5, 2).end(), 5);
        assert_eq!(Span::from_values(4, 4).size(), 0);
        assert_eq!(Span::from_values(-3, 4).size(), 7);
    }

    #[test]
    fn test_contains_is_exclusive() {
        let span = Span::from_values(0, 3);
        assert!(!span.contains(0));
        assert!(span.contains(1));
        assert!(span.contains(2));
        assert!(!span.contains(3));
        assert!(!Span::from_values(1, 1).contains(1));
    }

    #[test]
    fn test_overlaps() {
        let s1 = Span::from_values(-1, 1);
        let s2 = Span::from_values(0, 0);
        let s3 = Span::from_values(-2, 0);
        let s4 = Span::from_values(0, 1);

        assert!(s1.overlaps(s1));
        assert!(!s2.overlaps(s2));
        assert!(s3.overlaps(s3));
        assert!(s4.overlaps(s4));

        assert!(s1.overlaps(s2));
        assert!(s1.overlaps(s3));
        assert!(s1.overlaps(s4));
        assert!(!s2.overlaps(s3));
        assert!(!s2.overlaps(s4));
        assert!(!s3.overlaps(s4));
    }

    #[test]
    fn test_overlaps_adjacent_spans() {
        let left = Span::from_values(-1, 0);
        let right = Span::from_values(0, 1);
        let wide = Span::from_values(-1, 1);

        assert!(!left.overlaps(right));
        assert!(left.overlaps(wide));
        assert!(right.overlaps(wide));
    }

    #[test]
    fn test_overlaps_or_equals_matches_empty_span() {
        let point = Span::from_values(2, 2);
        assert!(!point.overlaps(point));
        assert!(point.overlaps_or_equals(point));
        assert!(!point.overlaps_or_equals(Span::from_values(3, 3)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::from_values(4, -2).to_string(), "(-2,4)");
    }

    proptest! {
        #[test]
        fn test_overlaps_symmetric(a in -20..20i32, b in -20..20i32, c in -20..20i32, d in -20..20i32) {
            let s = Span::from_values(a, b);
            let t = Span::from_values(c, d);
            prop_assert_eq!(s.overlaps(t), t.overlaps(s));
            prop_assert_eq!(s.overlaps_or_equals(t), t.overlaps_or_equals(s));
        }

        #[test]
        fn test_non_empty_span_overlaps_itself(a in -20..20i32, b in -20..20i32) {
            let s = Span::from_values(a, b);
            prop_assert_eq!(s.overlaps(s), s.size() > 0);
        }
    }
}
