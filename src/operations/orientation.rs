use tracing::trace;

use crate::geometry::{Line, Point};
use crate::math::tolerance::is_zero;
use crate::math::Point2;

/// Which side of a directed line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Counter-clockwise of the direction of travel.
    Left,
    /// Clockwise of the direction of travel.
    Right,
    Collinear,
}

/// Bend direction derived from a [`Side`] classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Clockwise,
    Counterclockwise,
    /// Collinear point or unknown input.
    Unknown,
}

impl From<Side> for TurnDirection {
    fn from(side: Side) -> Self {
        match side {
            Side::Right => TurnDirection::Clockwise,
            Side::Left => TurnDirection::Counterclockwise,
            Side::Collinear => TurnDirection::Unknown,
        }
    }
}

/// Determines the turn direction of a point relative to a directed line.
pub struct LineDirection {
    line: Line,
    point: Point,
}

impl LineDirection {
    /// Creates a new `LineDirection` query.
    #[must_use]
    pub fn new(line: Line, point: Point) -> Self {
        Self { line, point }
    }

    /// Executes the query.
    ///
    /// Returns [`TurnDirection::Unknown`] if the line or the point is unknown,
    /// or if the point is collinear with the line.
    #[must_use]
    pub fn execute(&self) -> TurnDirection {
        let (Some(a), Some(b), Some(c)) = (
            self.line.start().position(),
            self.line.end().position(),
            self.point.position(),
        ) else {
            trace!("unknown line or point, turn direction is unknown");
            return TurnDirection::Unknown;
        };

        find_side(a, b, c).into()
    }
}

/// Classifies `c` against the directed line `a -> b`.
///
/// Vertical and horizontal lines (within tolerance) are resolved by a direct
/// coordinate comparison, so the slope is only computed when the run is
/// non-zero. In the sloped case `c` counts as collinear only if it lies
/// exactly on the line.
#[must_use]
pub fn find_side(a: &Point2, b: &Point2, c: &Point2) -> Side {
    if is_zero(b.x - a.x) {
        trace!(?a, ?b, "vertical line");
        return side_of_vertical_line(a.y, b.x, b.y, c.x);
    }

    if is_zero(b.y - a.y) {
        trace!(?a, ?b, "horizontal line");
        return side_of_horizontal_line(a.x, b.x, b.y, c.y);
    }

    let slope = (b.y - a.y) / (b.x - a.x);
    let y_intercept = a.y - a.x * slope;
    let y_on_line = slope * c.x + y_intercept;
    let rightward = b.x > a.x;

    if c.y > y_on_line {
        if rightward {
            Side::Left
        } else {
            Side::Right
        }
    } else if c.y < y_on_line {
        if rightward {
            Side::Right
        } else {
            Side::Left
        }
    } else {
        Side::Collinear
    }
}

fn side_of_vertical_line(ay: f64, bx: f64, by: f64, cx: f64) -> Side {
    let upward = by > ay;
    if cx < bx {
        if upward {
            Side::Left
        } else {
            Side::Right
        }
    } else if cx > bx {
        if upward {
            Side::Right
        } else {
            Side::Left
        }
    } else {
        Side::Collinear
    }
}

fn side_of_horizontal_line(ax: f64, bx: f64, by: f64, cy: f64) -> Side {
    let rightward = bx > ax;
    if cy < by {
        if rightward {
            Side::Right
        } else {
            Side::Left
        }
    } else if cy > by {
        if rightward {
            Side::Left
        } else {
            Side::Right
        }
    } else {
        Side::Collinear
    }
}
