use crate::geometry::{Point, SliderConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Touch,
}

impl PointerButton {
    /// Only a primary-button click or a touch may begin a gesture.
    pub fn starts_gesture(self) -> bool {
        matches!(self, Self::Primary | Self::Touch)
    }
}

/// The closed set of recognized keyboard adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    StepDown,
    StepUp,
    ToMin,
    ToMax,
}

/// What an input event produced: a live update while the gesture is still
/// running, a commit once it concluded, either, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Response {
    pub input: Option<f64>,
    pub change: Option<f64>,
}

impl Response {
    pub const NONE: Self = Self {
        input: None,
        change: None,
    };

    pub fn handled(&self) -> bool {
        self.input.is_some() || self.change.is_some()
    }
}

/// An on-screen rectangle, in the same coordinate space as pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Translates a pointer position into the engine's circle-centered space.
/// `frame` is where the cropped arc is drawn on screen; the boundary box
/// says where the circle's center sits inside it.
pub fn point_from_screen(mouse: Point, frame: Rect, config: &SliderConfig) -> Point {
    let bounds = config.boundaries();
    Point::new(
        mouse.x - (frame.left + bounds.left * frame.width / bounds.width),
        mouse.y - (frame.top + bounds.top * frame.height / bounds.height),
    )
}

/// The drag/keyboard state machine. Owns the current value and the single
/// `dragging` flag; everything else is derived per event.
#[derive(Debug, Clone)]
pub struct Slider {
    config: SliderConfig,
    value: f64,
    committed: f64,
    dragging: bool,
    disabled: bool,
}

impl Slider {
    pub fn new(config: SliderConfig, value: f64) -> Self {
        let value = config.clamp(value);
        Self {
            config,
            value,
            committed: value,
            dragging: false,
            disabled: false,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn last_committed(&self) -> f64 {
        self.committed
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Swap the configuration under a live control, keeping the value legal
    /// for the new range.
    pub fn set_config(&mut self, config: SliderConfig) {
        self.config = config;
        self.value = config.clamp(self.value);
    }

    /// A press on the thumb arms the drag without moving the value.
    pub fn press_thumb(&mut self, button: PointerButton) -> Response {
        if button.starts_gesture() && !self.disabled {
            self.dragging = true;
        }
        Response::NONE
    }

    /// A press on the track arms the drag and jumps the value to the
    /// pressed position.
    pub fn press_track(&mut self, button: PointerButton, point: Point) -> Response {
        if !button.starts_gesture() || self.disabled {
            return Response::NONE;
        }
        self.dragging = true;
        self.set_value(self.config.point_to_value(point))
    }

    /// Pointer movement; a no-op unless a press armed the drag. While this
    /// returns updates the shell should claim the event sequence so the
    /// platform does not scroll or select instead.
    pub fn drag(&mut self, point: Point) -> Response {
        if !self.dragging {
            return Response::NONE;
        }
        self.set_value(self.config.point_to_value(point))
    }

    /// Pointer release: always disarms the drag, commits only if the value
    /// moved since the last commit.
    pub fn release(&mut self) -> Response {
        if !self.dragging {
            return Response::NONE;
        }
        self.dragging = false;
        self.commit()
    }

    /// Keyboard adjustments apply and commit in one stroke. A step past
    /// either bound is rejected outright rather than clamped.
    pub fn key_input(&mut self, action: KeyAction) -> Response {
        let target = match action {
            KeyAction::StepDown => self.value - self.config.step(),
            KeyAction::StepUp => self.value + self.config.step(),
            KeyAction::ToMin => self.config.min(),
            KeyAction::ToMax => self.config.max(),
        };
        let mut response = self.set_value(target);
        response.change = self.commit().change;
        response
    }

    /// Accepts a value only when it actually changes something and stays in
    /// range; invalid writes degrade to no-ops, never errors.
    pub fn set_value(&mut self, value: f64) -> Response {
        if value == self.value
            || value < self.config.min()
            || value > self.config.max()
            || self.disabled
        {
            return Response::NONE;
        }
        self.value = value;
        Response {
            input: Some(value),
            change: None,
        }
    }

    /// Emits a commit iff the value moved since the previous commit.
    pub fn commit(&mut self) -> Response {
        if self.value == self.committed {
            return Response::NONE;
        }
        self.committed = self.value;
        Response {
            input: None,
            change: Some(self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Degrees;

    fn slider() -> Slider {
        let config = SliderConfig::new(
            0.0,
            100.0,
            1.0,
            Degrees::new(270.0),
            Degrees::new(135.0),
        )
        .unwrap();
        Slider::new(config, 0.0)
    }

    fn point_at(slider: &Slider, value: f64) -> Point {
        slider.config().value_to_radians(value).to_point()
    }

    #[test]
    fn test_set_value_fires_once_per_distinct_value() {
        let mut slider = slider();
        assert_eq!(slider.set_value(40.0).input, Some(40.0));
        assert_eq!(slider.set_value(40.0), Response::NONE);
    }

    #[test]
    fn test_out_of_range_writes_are_no_ops() {
        let mut slider = slider();
        assert_eq!(slider.set_value(-1.0), Response::NONE);
        assert_eq!(slider.set_value(100.5), Response::NONE);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn test_secondary_buttons_never_start_a_drag() {
        let mut slider = slider();
        let press = point_at(&slider, 20.0);
        assert_eq!(slider.press_track(PointerButton::Secondary, press), Response::NONE);
        assert_eq!(slider.press_thumb(PointerButton::Middle), Response::NONE);
        assert!(!slider.is_dragging());

        assert_eq!(slider.drag(point_at(&slider, 80.0)), Response::NONE);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn test_touch_presses_behave_like_primary() {
        let mut slider = slider();
        let response = slider.press_track(PointerButton::Touch, point_at(&slider, 20.0));
        assert_eq!(response.input, Some(20.0));
        assert!(slider.is_dragging());
    }

    #[test]
    fn test_track_press_drag_release_lifecycle() {
        let mut slider = slider();

        let pressed = slider.press_track(PointerButton::Primary, Point::new(-99.0, -16.633331298828125));
        assert_eq!(pressed, Response { input: Some(20.0), change: None });
        assert!(slider.is_dragging());

        let dragged = slider.drag(point_at(&slider, 80.0));
        assert_eq!(dragged, Response { input: Some(80.0), change: None });

        let released = slider.release();
        assert_eq!(released, Response { input: None, change: Some(80.0) });
        assert!(!slider.is_dragging());
        assert_eq!(slider.last_committed(), 80.0);

        assert_eq!(slider.release(), Response::NONE);
    }

    #[test]
    fn test_thumb_press_without_motion_commits_nothing() {
        let mut slider = slider();
        assert_eq!(slider.press_thumb(PointerButton::Primary), Response::NONE);
        assert!(slider.is_dragging());
        assert_eq!(slider.release(), Response::NONE);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_motion_without_a_press_is_ignored() {
        let mut slider = slider();
        assert_eq!(slider.drag(point_at(&slider, 60.0)), Response::NONE);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn test_keyboard_steps_apply_and_commit_immediately() {
        let mut slider = slider();
        let up = slider.key_input(KeyAction::StepUp);
        assert_eq!(up, Response { input: Some(1.0), change: Some(1.0) });

        let down = slider.key_input(KeyAction::StepDown);
        assert_eq!(down, Response { input: Some(0.0), change: Some(0.0) });
    }

    #[test]
    fn test_keyboard_jumps_to_the_bounds() {
        let mut slider = slider();
        assert_eq!(
            slider.key_input(KeyAction::ToMax),
            Response { input: Some(100.0), change: Some(100.0) }
        );
        assert_eq!(
            slider.key_input(KeyAction::ToMin),
            Response { input: Some(0.0), change: Some(0.0) }
        );
    }

    #[test]
    fn test_keyboard_steps_past_a_bound_are_rejected() {
        let config = SliderConfig::new(
            0.0,
            100.0,
            7.0,
            Degrees::new(270.0),
            Degrees::new(135.0),
        )
        .unwrap();
        let mut slider = Slider::new(config, 98.0);
        assert_eq!(slider.key_input(KeyAction::StepUp), Response::NONE);
        assert_eq!(slider.value(), 98.0);

        let mut at_min = Slider::new(config, 0.0);
        assert_eq!(at_min.key_input(KeyAction::StepDown), Response::NONE);
    }

    #[test]
    fn test_disabled_sliders_ignore_every_input() {
        let mut slider = slider();
        slider.set_disabled(true);

        assert_eq!(slider.press_thumb(PointerButton::Primary), Response::NONE);
        assert!(!slider.is_dragging());
        assert_eq!(
            slider.press_track(PointerButton::Primary, point_at(&slider, 20.0)),
            Response::NONE
        );
        assert_eq!(slider.key_input(KeyAction::StepUp), Response::NONE);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn test_release_mid_drag_still_disarms_after_disable() {
        let mut slider = slider();
        slider.press_track(PointerButton::Primary, point_at(&slider, 20.0));
        slider.set_disabled(true);
        let released = slider.release();
        assert!(!slider.is_dragging());
        assert_eq!(released.change, Some(20.0));
    }

    #[test]
    fn test_config_swap_clamps_the_value_into_the_new_range() {
        let mut slider = slider();
        slider.set_value(90.0);

        let narrower = SliderConfig::new(
            0.0,
            50.0,
            1.0,
            Degrees::new(270.0),
            Degrees::new(135.0),
        )
        .unwrap();
        slider.set_config(narrower);
        assert_eq!(slider.value(), 50.0);
        assert_eq!(slider.commit().change, Some(50.0));
    }

    #[test]
    fn test_screen_points_translate_into_circle_space() {
        let slider = slider();
        let frame = Rect {
            left: 0.0,
            top: 0.0,
            width: 200.0,
            height: 170.71067811865476,
        };
        let south = point_from_screen(Point::new(100.0, 21.36666870117188), frame, slider.config());
        assert_eq!(slider.config().point_to_value(south), 50.0);

        let offset_frame = Rect {
            left: 40.0,
            top: 10.0,
            ..frame
        };
        let shifted =
            point_from_screen(Point::new(140.0, 31.36666870117188), offset_frame, slider.config());
        assert_eq!(slider.config().point_to_value(shifted), 50.0);
    }
}
