use gtk::prelude::*;
use gtk4 as gtk;
use rondel::geometry::Point;
use rondel::slider::Rect;

/// On-screen bounds of `widget` in `relative_to`'s coordinate space.
pub fn widget_bounds(
    widget: &impl IsA<gtk::Widget>,
    relative_to: &impl IsA<gtk::Widget>,
) -> Option<Rect> {
    widget.compute_bounds(relative_to).map(|bounds| Rect {
        left: bounds.x() as f64,
        top: bounds.y() as f64,
        width: bounds.width() as f64,
        height: bounds.height() as f64,
    })
}

/// A position in `relative_to`'s space translated into `widget`'s local
/// coordinates.
pub fn to_widget_coords(
    widget: &impl IsA<gtk::Widget>,
    relative_to: &impl IsA<gtk::Widget>,
    position: Point,
) -> Option<Point> {
    widget_bounds(widget, relative_to)
        .map(|bounds| Point::new(position.x - bounds.left, position.y - bounds.top))
}
