use std::f64::consts::TAU;

use tracing::trace;

use crate::geometry::{Angle, Point};
use crate::math::tolerance::is_zero;
use crate::math::Point2;

/// Bearings of a point as seen from a centre.
///
/// Computed eagerly on construction. If either input is unknown all three
/// bearings are `0°`, not [`Angle::UNKNOWN`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentreToPointBearing {
    centre: Point,
    point: Point,
    relative_to_x_axis_counterclockwise: Angle,
    relative_to_y_axis_counterclockwise: Angle,
    relative_to_y_axis_clockwise: Angle,
}

impl CentreToPointBearing {
    /// Computes the bearings of `point` as seen from `centre`.
    #[must_use]
    pub fn new(centre: Point, point: Point) -> Self {
        let (Some(c), Some(p)) = (centre.position(), point.position()) else {
            trace!(%centre, %point, "unknown centre or point, bearings are zero");
            return Self {
                centre,
                point,
                relative_to_x_axis_counterclockwise: Angle::ZERO,
                relative_to_y_axis_counterclockwise: Angle::ZERO,
                relative_to_y_axis_clockwise: Angle::ZERO,
            };
        };

        let x_ccw = angle_relative_to_x_axis_counterclockwise(c, p);
        let y_ccw = x_ccw.relative_to_y_axis_counterclockwise();

        Self {
            centre,
            point,
            relative_to_x_axis_counterclockwise: x_ccw,
            relative_to_y_axis_counterclockwise: y_ccw,
            relative_to_y_axis_clockwise: y_ccw.inverse(),
        }
    }

    /// Returns the centre.
    #[must_use]
    pub fn centre(&self) -> &Point {
        &self.centre
    }

    /// Returns the point whose bearing was computed.
    #[must_use]
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Bearing measured counter-clockwise from the positive X axis.
    #[must_use]
    pub fn angle_relative_to_x_axis_counterclockwise(&self) -> Angle {
        self.relative_to_x_axis_counterclockwise
    }

    /// Bearing measured counter-clockwise from the positive Y axis.
    #[must_use]
    pub fn angle_relative_to_y_axis_counterclockwise(&self) -> Angle {
        self.relative_to_y_axis_counterclockwise
    }

    /// Inverse of [`Self::angle_relative_to_y_axis_counterclockwise`].
    #[must_use]
    pub fn angle_relative_to_y_axis_clockwise(&self) -> Angle {
        self.relative_to_y_axis_clockwise
    }
}

/// Bearing calculator bound to a fixed centre, re-evaluated on demand.
///
/// Caches the last result and only recomputes when [`Self::calculate`] is
/// given a point that is not within tolerance of the cached one. The point
/// reported by [`Self::bearing`] is always the one most recently passed in. Calls take `&mut self`; sharing one calculator
/// between threads needs external synchronisation.
#[derive(Debug, Clone)]
pub struct BearingCalculator {
    centre: Point,
    cached: Option<CentreToPointBearing>,
}

impl BearingCalculator {
    /// Creates a calculator for `centre` with no point evaluated yet.
    #[must_use]
    pub fn new(centre: Point) -> Self {
        Self {
            centre,
            cached: None,
        }
    }

    /// Returns the centre the bearings are measured from.
    #[must_use]
    pub fn centre(&self) -> &Point {
        &self.centre
    }

    /// The most recent result, or `None` before the first [`Self::calculate`].
    #[must_use]
    pub fn bearing(&self) -> Option<&CentreToPointBearing> {
        self.cached.as_ref()
    }

    /// Computes (or reuses) the bearings of `point` from the centre.
    pub fn calculate(&mut self, point: Point) -> &CentreToPointBearing {
        let hit = matches!(&self.cached, Some(cached) if cached.point == point);
        if hit {
            if let Some(cached) = self.cached.as_mut() {
                cached.point = point;
            }
        } else {
            self.cached = None;
        }

        let centre = self.centre;
        self.cached.get_or_insert_with(|| {
            trace!(%centre, %point, "recomputing bearing");
            CentreToPointBearing::new(centre, point)
        })
    }
}

/// Bearing of `point` from `centre`, counter-clockwise from the positive X
/// axis, in `[0, 360)`.
///
/// Coincident points give `0°`. A point on (or within tolerance of) the
/// vertical or horizontal axis through the centre snaps to the exact
/// multiple of 90°.
#[must_use]
pub fn angle_relative_to_x_axis_counterclockwise(centre: &Point2, point: &Point2) -> Angle {
    let delta = point - centre;
    let (dx_is_zero, dy_is_zero) = (is_zero(delta.x), is_zero(delta.y));

    if dx_is_zero && dy_is_zero {
        trace!(?centre, "point coincides with centre");
        return Angle::ZERO;
    }

    if dx_is_zero {
        trace!(?centre, ?point, "point on vertical axis");
        return if centre.y < point.y {
            Angle::DEG_90
        } else {
            Angle::DEG_270
        };
    }

    if dy_is_zero {
        trace!(?centre, ?point, "point on horizontal axis");
        return if centre.x < point.x {
            Angle::ZERO
        } else {
            Angle::DEG_180
        };
    }

    let mut radians = delta.y.atan2(delta.x);
    if radians < 0.0 {
        radians += TAU;
    }
    Angle::from_radians(radians)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn x_bearing(cx: f64, cy: f64, px: f64, py: f64) -> Angle {
        angle_relative_to_x_axis_counterclockwise(&Point2::new(cx, cy), &Point2::new(px, py))
    }

    #[test]
    fn axis_points_from_origin() {
        assert_eq!(x_bearing(0.0, 0.0, 1.0, 0.0), Angle::ZERO);
        assert_eq!(x_bearing(0.0, 0.0, 0.0, 1.0), Angle::DEG_90);
        assert_eq!(x_bearing(0.0, 0.0, -1.0, 0.0), Angle::DEG_180);
        assert_eq!(x_bearing(0.0, 0.0, 0.0, -1.0), Angle::DEG_270);
    }

    #[test]
    fn quadrants() {
        assert_abs_diff_eq!(x_bearing(0.0, 0.0, 1.0, 1.0).degrees(), 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(x_bearing(0.0, 0.0, -1.0, 1.0).degrees(), 135.0, epsilon = 1e-9);
        assert_abs_diff_eq!(x_bearing(0.0, 0.0, -1.0, -1.0).degrees(), 225.0, epsilon = 1e-9);
        assert_abs_diff_eq!(x_bearing(0.0, 0.0, 1.0, -1.0).degrees(), 315.0, epsilon = 1e-9);
    }

    #[test]
    fn offset_centre() {
        assert_eq!(x_bearing(3.0, 4.0, 3.0, 6.0), Angle::DEG_90);
        assert_eq!(x_bearing(3.0, 4.0, 1.0, 4.0), Angle::DEG_180);
        assert_eq!(x_bearing(3.0, 4.0, 5.0, 4.0), Angle::ZERO);
    }

    #[test]
    fn coincident_points_give_zero() {
        assert_eq!(x_bearing(2.0, 2.0, 2.0, 2.0), Angle::ZERO);
        assert_eq!(x_bearing(2.0, 2.0, 2.0 + 1e-12, 2.0 - 1e-12), Angle::ZERO);
    }

    #[test]
    fn near_axis_snaps_exactly() {
        assert_abs_diff_eq!(x_bearing(0.0, 0.0, 1e-12, 5.0).degrees(), 90.0);
        assert_abs_diff_eq!(x_bearing(0.0, 0.0, -1e-12, -5.0).degrees(), 270.0);
        assert_abs_diff_eq!(x_bearing(0.0, 0.0, -5.0, 1e-12).degrees(), 180.0);
        assert_abs_diff_eq!(x_bearing(0.0, 0.0, 5.0, -1e-12).degrees(), 0.0);
    }

    #[test]
    fn y_axis_bearings() {
        let b = CentreToPointBearing::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert_eq!(b.angle_relative_to_x_axis_counterclockwise(), Angle::ZERO);
        assert_eq!(b.angle_relative_to_y_axis_counterclockwise(), Angle::DEG_90);
        assert_eq!(b.angle_relative_to_y_axis_clockwise(), Angle::DEG_270);

        let b = CentreToPointBearing::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert_abs_diff_eq!(b.angle_relative_to_y_axis_counterclockwise().degrees(), 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.angle_relative_to_y_axis_clockwise().degrees(), 315.0, epsilon = 1e-9);
    }

    #[test]
    fn unknown_inputs_give_zero_not_unknown() {
        for b in [
            CentreToPointBearing::new(Point::UNKNOWN, Point::new(1.0, 0.0)),
            CentreToPointBearing::new(Point::new(1.0, 0.0), Point::UNKNOWN),
        ] {
            assert_eq!(b.angle_relative_to_x_axis_counterclockwise(), Angle::ZERO);
            assert_eq!(b.angle_relative_to_y_axis_counterclockwise(), Angle::ZERO);
            assert_eq!(b.angle_relative_to_y_axis_clockwise(), Angle::ZERO);
        }
    }

    #[test]
    fn calculator_starts_empty() {
        let calc = BearingCalculator::new(Point::new(0.0, 0.0));
        assert!(calc.bearing().is_none());
        assert_eq!(*calc.centre(), Point::new(0.0, 0.0));
    }

    #[test]
    fn calculator_recomputes_for_new_point() {
        let mut calc = BearingCalculator::new(Point::new(3.0, 4.0));
        let first = *calc.calculate(Point::new(3.0, 6.0));
        assert_eq!(first.angle_relative_to_x_axis_counterclockwise(), Angle::DEG_90);

        let second = *calc.calculate(Point::new(1.0, 4.0));
        assert_eq!(second.angle_relative_to_x_axis_counterclockwise(), Angle::DEG_180);
        assert_eq!(*second.point(), Point::new(1.0, 4.0));
        assert_eq!(calc.bearing(), Some(&second));
    }

    #[test]
    fn calculator_reuses_bearing_for_tolerance_equal_point() {
        let mut calc = BearingCalculator::new(Point::new(0.0, 0.0));
        let first = calc
            .calculate(Point::new(1.0, 1.0))
            .angle_relative_to_x_axis_counterclockwise()
            .degrees();

        // A fresh atan2 for the shifted point would differ in the last bits.
        let shifted = Point::new(1.0 + 1e-11, 1.0);
        let fresh = CentreToPointBearing::new(Point::new(0.0, 0.0), shifted)
            .angle_relative_to_x_axis_counterclockwise()
            .degrees();
        assert_ne!(fresh.to_bits(), first.to_bits());

        let reused = *calc.calculate(shifted);
        assert_eq!(
            reused.angle_relative_to_x_axis_counterclockwise().degrees().to_bits(),
            first.to_bits()
        );
        assert_eq!(reused.point().x().to_bits(), (1.0 + 1e-11_f64).to_bits());
        assert_eq!(
            calc.bearing().map(|b| b.point().x().to_bits()),
            Some((1.0 + 1e-11_f64).to_bits())
        );
    }

    #[test]
    fn calculator_reuses_same_point() {
        let mut calc = BearingCalculator::new(Point::new(0.0, 0.0));
        let first = *calc.calculate(Point::new(-1.0, 0.0));
        let again = *calc.calculate(Point::new(-1.0, 0.0));
        assert_eq!(first, again);
        assert_eq!(*again.centre(), Point::new(0.0, 0.0));
    }
}
