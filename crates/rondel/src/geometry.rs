use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use thiserror::Error;

/// An angle as exposed at the configuration boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Display, Deref, From, Into,
)]
#[serde(transparent)]
pub struct Degrees(f64);

crate::impl_angle_newtype!(Degrees);

/// An angle in the engine's internal unit. Degrees never travel past
/// [`Degrees::to_radians`].
#[derive(Debug, Clone, Copy, PartialEq, Display, Deref, From, Into)]
pub struct Radians(f64);

crate::impl_angle_newtype!(Radians);

impl Degrees {
    pub fn to_radians(self) -> Radians {
        Radians((self.0 * PI) / 180.0)
    }
}

impl Radians {
    /// The point on the unit circle at this angle, in SVG coordinates
    /// (clockwise from the positive x-axis, y grows downward).
    pub fn to_point(self) -> Point {
        Point::new(self.0.cos(), self.0.sin())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn angle(self) -> Radians {
        Radians(self.y.atan2(self.x))
    }
}

/// Tight axis-aligned box around the stroked arc on the unit circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Error)]
pub enum SliderConfigError {
    #[error("`min` ({min}) must be less than `max` ({max})")]
    InvertedRange { min: f64, max: f64 },
    #[error("`step` must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("arc length must be within (0, 360] degrees, got {0}")]
    ArcOutOfRange(f64),
}

/// The angular sliver kept free on a nominal full circle, so that both ends
/// of the range stay reachable by pointer.
const FULL_CIRCLE_GAP: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    min: f64,
    max: f64,
    step: f64,
    arc: Radians,
    rotate: Radians,
}

impl SliderConfig {
    pub fn new(
        min: f64,
        max: f64,
        step: f64,
        arc: Degrees,
        rotate: Degrees,
    ) -> Result<Self, SliderConfigError> {
        if min >= max {
            return Err(SliderConfigError::InvertedRange { min, max });
        }
        if step <= 0.0 {
            return Err(SliderConfigError::NonPositiveStep(step));
        }
        if *arc <= 0.0 || *arc > 360.0 {
            return Err(SliderConfigError::ArcOutOfRange(*arc));
        }
        Ok(Self {
            min,
            max,
            step,
            arc: Radians((*arc.to_radians()).min(TAU - FULL_CIRCLE_GAP)),
            rotate: rotate.to_radians(),
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn arc(&self) -> Radians {
        self.arc
    }

    pub fn rotate(&self) -> Radians {
        self.rotate
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Whether an absolute angle lies on the arc, endpoints inclusive.
    /// Handles wraparound past 0°/360° and negative rotations.
    pub fn is_on_arc(&self, angle: Radians) -> bool {
        (*angle - *self.rotate).rem_euclid(TAU) <= *self.arc
    }

    /// Box bounding the arc: each edge reaches the unit-circle extreme when
    /// the arc crosses the matching cardinal direction, and only as far as
    /// the arc's endpoints otherwise.
    pub fn boundaries(&self) -> Boundaries {
        let ends = [self.rotate.to_point(), Radians(*self.rotate + *self.arc).to_point()];
        let reach = |cardinal: f64, axis: fn(Point) -> f64| {
            if self.is_on_arc(Degrees(cardinal).to_radians()) {
                1.0
            } else {
                axis(ends[0]).max(axis(ends[1]))
            }
        };

        let top = reach(270.0, |p| -p.y);
        let bottom = reach(90.0, |p| p.y);
        let left = reach(180.0, |p| -p.x);
        let right = reach(0.0, |p| p.x);

        Boundaries {
            top,
            left,
            width: left + right,
            height: top + bottom,
        }
    }

    pub fn value_to_radians(&self, value: f64) -> Radians {
        let fraction = (self.clamp(value) - self.min) / (self.max - self.min);
        Radians(*self.rotate + fraction * *self.arc)
    }

    /// Maps a point (any scale, centered on the circle) to the nearest value
    /// on the step grid. A point past either end of the arc resolves to the
    /// nearer bound; the unfilled gap splits at its midpoint, `π + arc/2`
    /// past the arc start.
    pub fn point_to_value(&self, point: Point) -> f64 {
        let angle = (*point.angle() - *self.rotate).rem_euclid(TAU);
        if angle <= *self.arc {
            let raw = self.min + (angle / *self.arc) * (self.max - self.min);
            self.clamp((raw / self.step).round() * self.step)
        } else if angle <= PI + *self.arc / 2.0 {
            self.max
        } else {
            self.min
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn config(arc: f64, rotate: f64) -> SliderConfig {
        SliderConfig::new(0.0, 100.0, 1.0, Degrees::new(arc), Degrees::new(rotate)).unwrap()
    }

    #[test]
    fn test_degrees_convert_to_radians() {
        assert_abs_diff_eq!(*Degrees::new(360.0).to_radians(), 6.28, epsilon = 1e-2);
        assert_abs_diff_eq!(*Degrees::new(-90.0).to_radians(), -PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_radians_land_on_the_unit_circle() {
        let point = Radians::new(6.28).to_point();
        assert_abs_diff_eq!(point.x, 1.0, epsilon = 1e-2);
        assert_abs_diff_eq!(point.y, 0.0, epsilon = 1e-2);
    }

    #[test]
    fn test_full_circle_bounds_regardless_of_rotation() {
        for rotate in [0.0, 45.0, 135.0, -90.0] {
            let bounds = config(360.0, rotate).boundaries();
            assert_eq!(bounds.top, 1.0);
            assert_eq!(bounds.left, 1.0);
            assert_eq!(bounds.width, 2.0);
            assert_eq!(bounds.height, 2.0);
        }
    }

    #[test]
    fn test_half_circle_bounds_stop_at_the_endpoints() {
        let bounds = config(180.0, 0.0).boundaries();
        assert_eq!(bounds.top, 0.0);
        assert!(bounds.top.is_sign_negative(), "top edge keeps its -0");
        assert_eq!(bounds.left, 1.0);
        assert_eq!(bounds.width, 2.0);
        assert_eq!(bounds.height, 1.0);
    }

    #[test]
    fn test_arc_membership_is_endpoint_inclusive() {
        let quarter = config(90.0, 0.0);
        assert!(quarter.is_on_arc(Degrees::new(45.0).to_radians()));
        assert!(quarter.is_on_arc(Degrees::new(90.0).to_radians()));
        assert!(!quarter.is_on_arc(Degrees::new(95.0).to_radians()));
        assert!(!quarter.is_on_arc(Degrees::new(180.0).to_radians()));
    }

    #[test]
    fn test_arc_membership_handles_negative_rotation() {
        let quarter = config(90.0, -90.0);
        assert!(quarter.is_on_arc(Degrees::new(0.0).to_radians()));
        assert!(!quarter.is_on_arc(Degrees::new(90.0).to_radians()));
    }

    #[test]
    fn test_points_map_to_values_on_the_step_grid() {
        let arc = config(270.0, 135.0);
        assert_eq!(arc.point_to_value(Point::new(0.0, -78.63333129882812)), 50.0);
        assert_eq!(arc.point_to_value(Point::new(-99.0, -16.633331298828125)), 20.0);
    }

    #[test]
    fn test_points_past_the_ends_clamp_to_the_nearer_bound() {
        let arc = config(270.0, 135.0);
        assert_eq!(arc.point_to_value(Point::new(-33.0, 106.36666870117188)), 0.0);
        assert_eq!(arc.point_to_value(Point::new(16.0, 79.36666870117188)), 100.0);
    }

    #[test]
    fn test_grid_values_round_trip_through_angles() {
        let arc = config(270.0, 135.0);
        for value in [0.0, 1.0, 25.0, 50.0, 99.0, 100.0] {
            let point = arc.value_to_radians(value).to_point();
            assert_eq!(arc.point_to_value(point), value);
        }
    }

    #[test]
    fn test_nominal_full_circle_keeps_a_reachable_gap() {
        let full = config(360.0, 0.0);
        assert!(*full.arc() < TAU);

        let just_past_end = Radians::new(*full.arc() + 0.002).to_point();
        assert_eq!(full.point_to_value(just_past_end), 100.0);
        let just_before_start = Radians::new(-0.002).to_point();
        assert_eq!(full.point_to_value(just_before_start), 0.0);
    }

    #[test]
    fn test_quantization_respects_coarse_steps() {
        let coarse = SliderConfig::new(
            0.0,
            100.0,
            10.0,
            Degrees::new(270.0),
            Degrees::new(135.0),
        )
        .unwrap();
        let near_half = coarse.value_to_radians(48.0).to_point();
        assert_eq!(coarse.point_to_value(near_half), 50.0);
    }

    #[test]
    fn test_construction_rejects_malformed_ranges() {
        let inverted = SliderConfig::new(10.0, 10.0, 1.0, Degrees::new(270.0), Degrees::new(0.0));
        assert!(matches!(
            inverted,
            Err(SliderConfigError::InvertedRange { .. })
        ));

        let flat_step = SliderConfig::new(0.0, 100.0, 0.0, Degrees::new(270.0), Degrees::new(0.0));
        assert!(matches!(flat_step, Err(SliderConfigError::NonPositiveStep(_))));

        let no_arc = SliderConfig::new(0.0, 100.0, 1.0, Degrees::new(0.0), Degrees::new(0.0));
        assert!(matches!(no_arc, Err(SliderConfigError::ArcOutOfRange(_))));
        let overfull = SliderConfig::new(0.0, 100.0, 1.0, Degrees::new(400.0), Degrees::new(0.0));
        assert!(matches!(overfull, Err(SliderConfigError::ArcOutOfRange(_))));
    }

    #[test]
    fn test_values_clamp_into_range() {
        let arc = config(270.0, 135.0);
        assert_eq!(arc.clamp(-5.0), 0.0);
        assert_eq!(arc.clamp(105.0), 100.0);
        assert_eq!(arc.clamp(42.0), 42.0);
    }
}
