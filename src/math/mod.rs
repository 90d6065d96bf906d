pub mod tolerance;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Shared by every distance, coordinate and angle comparison in the crate so
/// that classification boundaries agree between components.
pub const TOLERANCE: f64 = 1e-10;
