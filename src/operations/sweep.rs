use crate::geometry::{Angle, Point};

use super::bearing::CentreToPointBearing;

/// Angular relationship between a start and an end point around a shared
/// centre.
///
/// The Y-axis bearings reported here belong to the end point. Callers that
/// need a start-relative bearing should build a [`CentreToPointBearing`] for
/// the start point.
#[derive(Debug, Clone, Copy)]
pub struct CentreSweep {
    start: CentreToPointBearing,
    end: CentreToPointBearing,
}

impl CentreSweep {
    /// Creates a sweep of `start_point` to `end_point` around `centre`.
    #[must_use]
    pub fn new(centre: Point, start_point: Point, end_point: Point) -> Self {
        Self {
            start: CentreToPointBearing::new(centre, start_point),
            end: CentreToPointBearing::new(centre, end_point),
        }
    }

    /// Counter-clockwise offset that rotates the end point's bearing onto the
    /// start point's bearing, in `[0, 360)`.
    ///
    /// Equivalently, the clockwise sweep from `start_point` to `end_point`.
    #[must_use]
    pub fn between_points_counterclockwise(
        centre: Point,
        start_point: Point,
        end_point: Point,
    ) -> Angle {
        let start = CentreToPointBearing::new(centre, start_point);
        let end = CentreToPointBearing::new(centre, end_point);
        start.angle_relative_to_x_axis_counterclockwise()
            - end.angle_relative_to_x_axis_counterclockwise()
    }

    /// Returns the shared centre.
    #[must_use]
    pub fn centre(&self) -> &Point {
        self.start.centre()
    }

    /// Returns the start point.
    #[must_use]
    pub fn start_point(&self) -> &Point {
        self.start.point()
    }

    /// Returns the end point.
    #[must_use]
    pub fn end_point(&self) -> &Point {
        self.end.point()
    }

    /// Returns the bearings of the start point.
    #[must_use]
    pub fn start_bearing(&self) -> &CentreToPointBearing {
        &self.start
    }

    /// Returns the bearings of the end point.
    #[must_use]
    pub fn end_bearing(&self) -> &CentreToPointBearing {
        &self.end
    }

    /// End point bearing, counter-clockwise from the Y axis.
    #[must_use]
    pub fn angle_relative_to_y_axis_counterclockwise(&self) -> Angle {
        self.end.angle_relative_to_y_axis_counterclockwise()
    }

    /// End point bearing, clockwise from the Y axis.
    #[must_use]
    pub fn angle_relative_to_y_axis_clockwise(&self) -> Angle {
        self.end.angle_relative_to_y_axis_clockwise()
    }

    /// [`Self::between_points_counterclockwise`] for this sweep's own points.
    #[must_use]
    pub fn radians_between_points_counterclockwise(&self) -> Angle {
        self.start.angle_relative_to_x_axis_counterclockwise()
            - self.end.angle_relative_to_x_axis_counterclockwise()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep() -> CentreSweep {
        CentreSweep::new(Point::new(3.0, 4.0), Point::new(3.0, 6.0), Point::new(5.0, 4.0))
    }

    #[test]
    fn stores_inputs() {
        let s = sweep();
        assert_eq!(*s.centre(), Point::new(3.0, 4.0));
        assert_eq!(*s.start_point(), Point::new(3.0, 6.0));
        assert_eq!(*s.end_point(), Point::new(5.0, 4.0));
    }

    #[test]
    fn y_axis_bearings_follow_end_point() {
        let s = sweep();
        assert_eq!(s.angle_relative_to_y_axis_counterclockwise(), Angle::DEG_90);
        assert_eq!(s.angle_relative_to_y_axis_clockwise(), Angle::DEG_270);
        assert_eq!(
            s.start_bearing().angle_relative_to_y_axis_counterclockwise(),
            Angle::ZERO
        );
    }

    #[test]
    fn between_fresh_points() {
        let angle = CentreSweep::between_points_counterclockwise(
            Point::new(3.0, 4.0),
            Point::new(3.0, 6.0),
            Point::new(1.0, 4.0),
        );
        assert_eq!(angle, Angle::DEG_270);
    }

    #[test]
    fn between_own_points() {
        // start at 90°, end at 0°
        assert_eq!(sweep().radians_between_points_counterclockwise(), Angle::DEG_90);
    }

    #[test]
    fn same_point_is_no_sweep() {
        let c = Point::new(0.0, 0.0);
        let p = Point::new(2.0, 3.0);
        assert_eq!(CentreSweep::between_points_counterclockwise(c, p, p), Angle::ZERO);
    }

    #[test]
    fn offsets_are_complementary() {
        let c = Point::new(-1.0, 2.0);
        let a = Point::new(1.0, 5.0);
        let b = Point::new(-4.0, -1.0);
        let ab = CentreSweep::between_points_counterclockwise(c, a, b);
        let ba = CentreSweep::between_points_counterclockwise(c, b, a);
        assert_eq!(ab + ba, Angle::ZERO);
        assert_eq!(ab, ba.inverse());
    }

    #[test]
    fn unknown_centre_gives_zero() {
        let s = CentreSweep::new(Point::UNKNOWN, Point::new(1.0, 0.0), Point::new(0.0, 1.0));
        assert_eq!(s.radians_between_points_counterclockwise(), Angle::ZERO);
        assert_eq!(s.angle_relative_to_y_axis_clockwise(), Angle::ZERO);
    }
}
