mod angle;
mod circle;
mod line;
mod point;

pub use angle::Angle;
pub use circle::Circle;
pub use line::Line;
pub use point::Point;
