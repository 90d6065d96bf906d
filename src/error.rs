use thiserror::Error;

/// Top-level error type for the arcgeo kernel.
#[derive(Debug, Error)]
pub enum ArcgeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while validating geometric inputs.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("circle radius must not be negative, got {0}")]
    NegativeRadius(f64),

    #[error("{parameter} = {value} is not a finite number")]
    NonFinite {
        parameter: &'static str,
        value: f64,
    },
}

impl GeometryError {
    /// Checks that `value` is finite, naming it `parameter` in the error.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] for NaN or infinite values.
    pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GeometryError::NonFinite { parameter, value }.into())
        }
    }
}

/// Convenience type alias for results using [`ArcgeoError`].
pub type Result<T> = std::result::Result<T, ArcgeoError>;
