use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::tolerance::approx_eq;
use crate::math::Point2;

/// A point in the plane, or the [`Point::UNKNOWN`] sentinel.
///
/// Equality compares both coordinates within tolerance. The sentinel equals
/// only itself.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    position: Option<Point2>,
}

impl Point {
    /// The "not a valid point" sentinel.
    pub const UNKNOWN: Self = Self { position: None };

    /// Creates a point without validating its coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Some(Point2::new(x, y)),
        }
    }

    /// Creates a point, rejecting NaN or infinite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if either coordinate is not finite.
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        let x = GeometryError::ensure_finite("x", x)?;
        let y = GeometryError::ensure_finite("y", y)?;
        Ok(Self::new(x, y))
    }

    /// Returns the X coordinate, or NaN for the sentinel.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.map_or(f64::NAN, |p| p.x)
    }

    /// Returns the Y coordinate, or NaN for the sentinel.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.map_or(f64::NAN, |p| p.y)
    }

    /// Returns the underlying position, or `None` for the sentinel.
    #[must_use]
    pub fn position(&self) -> Option<&Point2> {
        self.position.as_ref()
    }

    /// Returns whether this is the [`Point::UNKNOWN`] sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.position.is_none()
    }

    /// Euclidean distance to `other`, or `None` if either point is unknown.
    #[must_use]
    pub fn distance_to(&self, other: &Point) -> Option<f64> {
        match (&self.position, &other.position) {
            (Some(a), Some(b)) => Some(nalgebra::distance(a, b)),
            _ => None,
        }
    }
}

impl From<Point2> for Point {
    fn from(position: Point2) -> Self {
        Self {
            position: Some(position),
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        match (&self.position, &other.position) {
            (Some(a), Some(b)) => approx_eq(a.x, b.x) && approx_eq(a.y, b.y),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.position {
            Some(p) => write!(f, "[{:.2},{:.2}]", p.x, p.y),
            None => f.write_str("Unknown"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ArcgeoError;
    use approx::assert_relative_eq;

    #[test]
    fn coordinates() {
        let p = Point::new(3.0, -4.5);
        assert_relative_eq!(p.x(), 3.0);
        assert_relative_eq!(p.y(), -4.5);
        assert!(!p.is_unknown());
        assert_eq!(p.position(), Some(&Point2::new(3.0, -4.5)));
    }

    #[test]
    fn unknown_is_distinct_from_origin() {
        assert!(Point::UNKNOWN.is_unknown());
        assert_ne!(Point::UNKNOWN, Point::new(0.0, 0.0));
        assert_eq!(Point::UNKNOWN, Point::UNKNOWN);
        assert!(Point::UNKNOWN.x().is_nan());
        assert!(Point::UNKNOWN.position().is_none());
    }

    #[test]
    fn equality_is_tolerant() {
        assert_eq!(Point::new(1.0, 2.0), Point::new(1.0 + 1e-12, 2.0 - 1e-12));
        assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 2.001));
    }

    #[test]
    fn distance() {
        let d = Point::new(3.0, 4.0).distance_to(&Point::new(30.0, 40.0)).unwrap();
        assert_relative_eq!(d, 45.0, epsilon = 1e-12);
        assert!(Point::UNKNOWN.distance_to(&Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn try_new_rejects_non_finite() {
        assert!(Point::try_new(1.0, 2.0).is_ok());
        let err = Point::try_new(f64::NAN, 2.0).unwrap_err();
        assert!(matches!(
            err,
            ArcgeoError::Geometry(GeometryError::NonFinite { parameter: "x", .. })
        ));
        assert!(Point::try_new(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1.0, 2.345).to_string(), "[1.00,2.35]");
        assert_eq!(Point::UNKNOWN.to_string(), "Unknown");
    }
}
