//! Epsilon-tolerant scalar comparisons.
//!
//! All comparisons use [`TOLERANCE`]. Value types build their equality on
//! these helpers instead of comparing floats directly.
use super::TOLERANCE;

/// Returns `true` if `value` lies strictly within [`TOLERANCE`] of zero.
#[must_use]
pub fn is_zero(value: f64) -> bool {
    value.abs() < TOLERANCE
}

/// Returns `true` if `a` and `b` differ by less than [`TOLERANCE`].
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    is_zero(a - b)
}

/// Returns `true` if `a` exceeds `b` by at least [`TOLERANCE`].
#[must_use]
pub fn definitely_greater(a: f64, b: f64) -> bool {
    a - b >= TOLERANCE
}

/// Returns `true` if `a` is below `b` by at least [`TOLERANCE`].
#[must_use]
pub fn definitely_less(a: f64, b: f64) -> bool {
    b - a >= TOLERANCE
}
