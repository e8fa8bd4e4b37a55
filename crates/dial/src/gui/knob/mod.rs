use rondel::geometry::{Point, SliderConfig};
use rondel::slider::{self, Rect};

pub mod view;

pub use view::draw;

pub const TRACK_WIDTH: f64 = 8.0;
pub const THUMB_RADIUS: f64 = 8.0;
// forgiving hit band around the painted strokes
pub const SLOP_WIDTH: f64 = 32.0;
// clearance so the round caps and the thumb are not clipped at the edges
pub const MARGIN: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    Thumb,
    Track,
}

/// Where the cropped arc lands inside the widget: the boundary box scaled
/// to fit and centered, aspect preserved, like an SVG viewport.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub frame: Rect,
    pub radius: f64,
    pub center: Point,
}

impl Layout {
    pub fn compute(config: &SliderConfig, width: f64, height: f64) -> Self {
        let bounds = config.boundaries();
        let inner_w = (width - 2.0 * MARGIN).max(1.0);
        let inner_h = (height - 2.0 * MARGIN).max(1.0);
        let radius = (inner_w / bounds.width).min(inner_h / bounds.height);

        let frame = Rect {
            left: (width - bounds.width * radius) / 2.0,
            top: (height - bounds.height * radius) / 2.0,
            width: bounds.width * radius,
            height: bounds.height * radius,
        };
        let center = Point::new(
            frame.left + bounds.left * radius,
            frame.top + bounds.top * radius,
        );

        Self {
            frame,
            radius,
            center,
        }
    }

    /// Engine-space point for a pointer position in widget coordinates.
    pub fn to_circle(&self, position: Point, config: &SliderConfig) -> Point {
        slider::point_from_screen(position, self.frame, config)
    }

    /// On-screen center of the thumb for the given value.
    pub fn thumb_center(&self, config: &SliderConfig, value: f64) -> Point {
        let on_circle = config.value_to_radians(value).to_point();
        Point::new(
            self.center.x + on_circle.x * self.radius,
            self.center.y + on_circle.y * self.radius,
        )
    }

    /// Classifies a press in widget coordinates. The thumb wins over the
    /// track; both carry a slop band wider than their painted stroke.
    pub fn hit_test(
        &self,
        config: &SliderConfig,
        value: f64,
        press: Point,
    ) -> Option<PressTarget> {
        let thumb = self.thumb_center(config, value);
        if (press.x - thumb.x).hypot(press.y - thumb.y) <= THUMB_RADIUS + SLOP_WIDTH / 2.0 {
            return Some(PressTarget::Thumb);
        }

        let from_center = Point::new(press.x - self.center.x, press.y - self.center.y);
        let ring_distance = (from_center.x.hypot(from_center.y) - self.radius).abs();
        if ring_distance <= SLOP_WIDTH / 2.0 && config.is_on_arc(from_center.angle()) {
            return Some(PressTarget::Track);
        }

        None
    }
}
