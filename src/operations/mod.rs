pub mod bearing;
pub mod circle_pair;
pub mod orientation;
pub mod sweep;

pub use bearing::{BearingCalculator, CentreToPointBearing};
pub use circle_pair::CirclePair;
pub use orientation::{LineDirection, Side, TurnDirection};
pub use sweep::CentreSweep;
