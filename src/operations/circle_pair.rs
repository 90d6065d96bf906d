use tracing::debug;

use crate::geometry::Circle;
use crate::math::tolerance::{approx_eq, definitely_greater, definitely_less};

/// Two circles ordered by radius and classified by their common tangents.
///
/// `zero` is the circle with the strictly larger radius; radii equal within
/// tolerance keep the order they were given in. If either input is unknown
/// the pair is unknown: both circles are [`Circle::unknown`], and distance
/// and tangent count are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePair {
    zero: Circle,
    one: Circle,
    distance: f64,
    number_of_tangents: u8,
    is_unknown: bool,
}

impl CirclePair {
    /// Orders and classifies `first` and `second`.
    #[must_use]
    pub fn new(first: Circle, second: Circle) -> Self {
        if first.is_unknown() || second.is_unknown() {
            debug!("circle pair with unknown circle");
            return Self::unknown();
        }

        let (zero, one) = if definitely_greater(second.radius(), first.radius()) {
            (second, first)
        } else {
            (first, second)
        };

        let distance = zero.centre_distance(&one);
        let number_of_tangents = classify_tangents(distance, zero.radius(), one.radius());
        debug!(distance, number_of_tangents, "classified circle pair");

        Self {
            zero,
            one,
            distance,
            number_of_tangents,
            is_unknown: false,
        }
    }

    /// Returns the unknown pair.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            zero: Circle::unknown(),
            one: Circle::unknown(),
            distance: 0.0,
            number_of_tangents: 0,
            is_unknown: true,
        }
    }

    /// The circle with the larger radius.
    #[must_use]
    pub fn zero(&self) -> &Circle {
        &self.zero
    }

    /// The circle with the smaller radius.
    #[must_use]
    pub fn one(&self) -> &Circle {
        &self.one
    }

    /// Returns the radius of [`Self::zero`].
    #[must_use]
    pub fn radius_zero(&self) -> f64 {
        self.zero.radius()
    }

    /// Returns the radius of [`Self::one`].
    #[must_use]
    pub fn radius_one(&self) -> f64 {
        self.one.radius()
    }

    /// Distance between the two centres.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of lines tangent to both circles, in `0..=4`.
    #[must_use]
    pub fn number_of_tangents(&self) -> u8 {
        self.number_of_tangents
    }

    /// Returns whether either input circle was unknown.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.is_unknown
    }
}

/// Counts the common tangents of two circles with radii `r0 >= r1` whose
/// centres are `distance` apart.
///
/// | count | relation |
/// |---|---|
/// | 4 | separated |
/// | 3 | touching externally |
/// | 2 | intersecting at two points |
/// | 1 | touching internally |
/// | 0 | one strictly inside the other |
#[must_use]
pub fn classify_tangents(distance: f64, r0: f64, r1: f64) -> u8 {
    let outer = r0 + r1;
    let inner = r0 - r1;

    if approx_eq(distance, outer) {
        3
    } else if definitely_greater(distance, outer) {
        4
    } else if approx_eq(distance, inner) {
        1
    } else if definitely_less(distance, inner) {
        0
    } else {
        2
    }
}
