//! Walks through the kernel's calculators for a pair of turning circles.
//!
//! Run with `RUST_LOG=arcgeo=trace cargo run --example tangents` to see the
//! degenerate-branch trace events.
use arcgeo::geometry::{Circle, Line, Point};
use arcgeo::operations::{CentreSweep, CentreToPointBearing, CirclePair, LineDirection};
use tracing_subscriber::EnvFilter;

fn main() -> arcgeo::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let small = Circle::new(3.0, 4.0, 5.0)?;
    let large = Circle::new(30.0, 40.0, 20.0)?;
    let pair = CirclePair::new(small, large);
    println!(
        "distance {:.2}, r0 {:.2}, r1 {:.2}, {} common tangents",
        pair.distance(),
        pair.radius_zero(),
        pair.radius_one(),
        pair.number_of_tangents()
    );

    let centre = small.centre();
    let start = Point::new(3.0, 9.0);
    let end = Point::new(8.0, 4.0);
    let bearing = CentreToPointBearing::new(centre, start);
    println!(
        "start bearing {} (Y ccw {}, Y cw {})",
        bearing.angle_relative_to_x_axis_counterclockwise(),
        bearing.angle_relative_to_y_axis_counterclockwise(),
        bearing.angle_relative_to_y_axis_clockwise()
    );

    let sweep = CentreSweep::new(centre, start, end);
    println!(
        "clockwise sweep from {start} to {end}: {}",
        sweep.radians_between_points_counterclockwise()
    );

    let heading = Line::new(centre, large.centre());
    let turn = LineDirection::new(heading, Point::new(0.0, 40.0)).execute();
    println!("turn towards (0,40): {turn:?}");

    Ok(())
}
