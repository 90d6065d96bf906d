use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::math::tolerance::approx_eq;
use crate::math::TOLERANCE;

const FULL_TURN_DEGREES: f64 = 360.0;

/// A planar angle held in canonical form.
///
/// Known angles are normalized into `[0, 360)` degrees on construction, so
/// `-10°` and `710°` are both stored as `350°`. The distinguished
/// [`Angle::UNKNOWN`] equals only itself and propagates through arithmetic.
///
/// Values within tolerance of a full turn are stored as `0°`, so equality and
/// ordering both compare the stored degrees within tolerance.
#[derive(Debug, Clone, Copy)]
pub struct Angle {
    degrees: Option<f64>,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Self = Self { degrees: Some(0.0) };
    /// A quarter turn.
    pub const DEG_90: Self = Self { degrees: Some(90.0) };
    /// A half turn.
    pub const DEG_180: Self = Self { degrees: Some(180.0) };
    /// Three quarter turns.
    pub const DEG_270: Self = Self { degrees: Some(270.0) };
    /// The "not a valid angle" sentinel.
    pub const UNKNOWN: Self = Self { degrees: None };

    /// Creates an angle from degrees, wrapping into `[0, 360)`.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees: Some(normalize_degrees(degrees)),
        }
    }

    /// Creates an angle from radians, wrapping into `[0, 2π)`.
    #[must_use]
    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees(radians.to_degrees())
    }

    /// Returns the angle in degrees, or NaN for [`Angle::UNKNOWN`].
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.degrees.unwrap_or(f64::NAN)
    }

    /// Returns the angle in radians, or NaN for [`Angle::UNKNOWN`].
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.degrees().to_radians()
    }

    /// Returns whether this is the [`Angle::UNKNOWN`] sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.degrees.is_none()
    }

    /// The same direction measured in the opposite rotation sense:
    /// `normalize(360 - a)`.
    #[must_use]
    pub fn inverse(self) -> Self {
        self.map(|d| FULL_TURN_DEGREES - d)
    }

    /// Re-expresses an angle measured counter-clockwise from the X axis as
    /// one measured counter-clockwise from the Y axis: `normalize(90 - a)`.
    #[must_use]
    pub fn relative_to_y_axis_counterclockwise(self) -> Self {
        self.map(|d| 90.0 - d)
    }

    fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self.degrees {
            Some(d) => Self::from_degrees(f(d)),
            None => Self::UNKNOWN,
        }
    }

    fn zip(self, other: Self, f: impl FnOnce(f64, f64) -> f64) -> Self {
        match (self.degrees, other.degrees) {
            (Some(a), Some(b)) => Self::from_degrees(f(a, b)),
            _ => Self::UNKNOWN,
        }
    }
}

/// Wraps `degrees` into `[0, 360)`, snapping values within tolerance of 360
/// to zero.
fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if wrapped >= FULL_TURN_DEGREES - TOLERANCE {
        0.0
    } else {
        wrapped
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        match (self.degrees, other.degrees) {
            (Some(a), Some(b)) => approx_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.degrees, other.degrees) {
            _ if self == other => Some(Ordering::Equal),
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => None,
        }
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverse()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.degrees {
            Some(d) => write!(f, "{d:.2}°"),
            None => f.write_str("Unknown"),
        }
    }
}
