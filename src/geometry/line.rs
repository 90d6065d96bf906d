use super::Point;

/// A directed segment from `start` to `end`.
///
/// Becomes the [`Line::UNKNOWN`] sentinel if either endpoint is unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    /// The "not a valid line" sentinel.
    pub const UNKNOWN: Self = Self {
        start: Point::UNKNOWN,
        end: Point::UNKNOWN,
    };

    /// Creates a directed line from `start` to `end`.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        if start.is_unknown() || end.is_unknown() {
            return Self::UNKNOWN;
        }
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point {
        &self.end
    }

    /// Returns whether this is the [`Line::UNKNOWN`] sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.start.is_unknown()
    }

    /// Length of the segment, or `None` for the sentinel.
    #[must_use]
    pub fn length(&self) -> Option<f64> {
        self.start.distance_to(&self.end)
    }

    /// Returns the same segment travelled in the opposite direction.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}
