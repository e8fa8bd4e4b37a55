use super::{Layout, THUMB_RADIUS, TRACK_WIDTH};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use rondel::geometry::Radians;
use rondel::slider::Slider;
use std::f64::consts::TAU;

struct KnobRenderer<'a> {
    slider: &'a Slider,
    layout: &'a Layout,
}

impl<'a> KnobRenderer<'a> {
    fn new(slider: &'a Slider, layout: &'a Layout) -> Self {
        Self { slider, layout }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_track(cr, colors)?;
        self.draw_progress(cr, colors)?;
        self.draw_thumb(cr, colors)
    }

    fn accent(&self, colors: &ThemeColors) -> Srgba<f64> {
        if self.slider.is_disabled() {
            colors.disabled
        } else {
            colors.progress
        }
    }

    fn draw_track(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let config = self.slider.config();
        let end = Radians::new(*config.rotate() + *config.arc());
        self.stroke_arc(cr, config.rotate(), end, colors.track)
    }

    fn draw_progress(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let config = self.slider.config();
        self.stroke_arc(
            cr,
            config.value_to_radians(config.min()),
            config.value_to_radians(self.slider.value()),
            self.accent(colors),
        )
    }

    fn stroke_arc(
        &self,
        cr: &Context,
        from: Radians,
        to: Radians,
        color: Srgba<f64>,
    ) -> Result<(), cairo::Error> {
        let (r, g, b, a) = color.into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.set_line_width(TRACK_WIDTH);
        cr.set_line_cap(cairo::LineCap::Round);
        // nudge the end so a zero-length sweep still strokes a dot
        cr.arc(
            self.layout.center.x,
            self.layout.center.y,
            self.layout.radius,
            *from,
            *to + 0.001,
        );
        cr.stroke()
    }

    fn draw_thumb(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let at = self
            .layout
            .thumb_center(self.slider.config(), self.slider.value());
        let color = if self.slider.is_disabled() {
            colors.disabled
        } else {
            colors.thumb
        };
        let (r, g, b, a) = color.into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.arc(at.x, at.y, THUMB_RADIUS, 0.0, TAU);
        cr.fill()
    }
}

pub fn draw(
    cr: &Context,
    slider: &Slider,
    layout: &Layout,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    KnobRenderer::new(slider, layout).draw(cr, colors)
}
