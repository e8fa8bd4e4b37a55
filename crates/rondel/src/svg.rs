use crate::geometry::{Point, Radians, SliderConfig};
use std::f64::consts::PI;

/// End angles get nudged forward so a zero-length sweep still strokes a dot
/// instead of collapsing to nothing.
const DEGENERATE_NUDGE: f64 = 0.001;

/// ECMAScript-style `f64` formatting: shortest plain decimal, exponent form
/// below 1e-6, negative zero collapsed to `0`. Magnitudes beyond the unit
/// circle never occur here.
fn number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() < 1e-6 {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}

/// Viewport descriptor cropping the rendering to exactly the visible arc:
/// `"-left -top width height"`.
pub fn view_box(config: &SliderConfig) -> String {
    let bounds = config.boundaries();
    format!(
        "{} {} {} {}",
        number(-bounds.left),
        number(-bounds.top),
        number(bounds.width),
        number(bounds.height)
    )
}

/// A two-point elliptical arc command on the unit circle.
pub fn arc_path(start: Radians, end: Radians) -> String {
    let large_arc = u8::from(*end - *start > PI);
    let from = start.to_point();
    let to = Radians::new(*end + DEGENERATE_NUDGE).to_point();
    format!(
        "M {} {} A 1 1, 0, {} 1, {} {}",
        number(from.x),
        number(from.y),
        large_arc,
        number(to.x),
        number(to.y)
    )
}

/// The thumb marker: a degenerate two-point segment that round line caps
/// turn into a dot.
pub fn thumb_path(at: Point) -> String {
    format!(
        "M {} {} L {} {}",
        number(at.x),
        number(at.y),
        number(at.x + DEGENERATE_NUDGE),
        number(at.y + DEGENERATE_NUDGE)
    )
}

/// A standalone document with track, progress, and thumb, styled with the
/// stock colors.
pub fn document(config: &SliderConfig, value: f64) -> String {
    let track = arc_path(config.rotate(), Radians::new(*config.rotate() + *config.arc()));
    let progress = arc_path(
        config.value_to_radians(config.min()),
        config.value_to_radians(value),
    );
    let thumb = thumb_path(config.value_to_radians(value).to_point());

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}">
  <path d="{}" fill="none" stroke="#ebebeb" stroke-width="8" stroke-linecap="round" vector-effect="non-scaling-stroke"/>
  <path d="{}" fill="none" stroke="#0a5aff" stroke-width="8" stroke-linecap="round" vector-effect="non-scaling-stroke"/>
  <path d="{}" fill="none" stroke="#0a5aff" stroke-width="16" stroke-linecap="round" vector-effect="non-scaling-stroke"/>
</svg>
"##,
        view_box(config),
        track,
        progress,
        thumb
    )
}
