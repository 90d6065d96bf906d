use crate::error::{GeometryError, Result};
use crate::math::tolerance::approx_eq;
use crate::math::Point2;

use super::Point;

/// A circle in the plane, defined by a centre and a non-negative radius.
///
/// The unknown circle carries an explicit flag alongside default-valued
/// fields (origin centre, zero radius), so it is distinct from a genuine
/// zero-radius circle at the origin.
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    centre: Point2,
    radius: f64,
    is_unknown: bool,
}

impl Circle {
    /// Creates a circle centred at `(centre_x, centre_y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if any input is not finite or the radius is negative.
    pub fn new(centre_x: f64, centre_y: f64, radius: f64) -> Result<Self> {
        let centre_x = GeometryError::ensure_finite("centre_x", centre_x)?;
        let centre_y = GeometryError::ensure_finite("centre_y", centre_y)?;
        let radius = GeometryError::ensure_finite("radius", radius)?;
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius(radius).into());
        }

        Ok(Self {
            centre: Point2::new(centre_x, centre_y),
            radius,
            is_unknown: false,
        })
    }

    /// Returns the "not a valid circle" sentinel.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            centre: Point2::origin(),
            radius: 0.0,
            is_unknown: true,
        }
    }

    /// Returns the centre, or [`Point::UNKNOWN`] for the sentinel.
    #[must_use]
    pub fn centre(&self) -> Point {
        if self.is_unknown {
            Point::UNKNOWN
        } else {
            Point::from(self.centre)
        }
    }

    /// Returns the radius. The sentinel reports zero.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns whether this is the unknown sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.is_unknown
    }

    /// Distance between the centres of `self` and `other`.
    pub(crate) fn centre_distance(&self, other: &Circle) -> f64 {
        nalgebra::distance(&self.centre, &other.centre)
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::unknown()
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_unknown, other.is_unknown) {
            (true, true) => true,
            (false, false) => {
                approx_eq(self.centre.x, other.centre.x)
                    && approx_eq(self.centre.y, other.centre.y)
                    && approx_eq(self.radius, other.radius)
            }
            _ => false,
        }
    }
}
