use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub track: Srgba<f64>,
    pub progress: Srgba<f64>,
    pub thumb: Srgba<f64>,
    pub disabled: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            track: Self::lookup_color(
                context,
                "theme_unfocused_bg_color",
                Srgba::new(0.922, 0.922, 0.922, 1.0),
                None,
            ),
            progress: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(0.039, 0.353, 1.0, 1.0),
                None,
            ),
            thumb: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(0.02, 0.271, 0.737, 1.0),
                None,
            ),
            disabled: Self::lookup_color(
                context,
                "insensitive_fg_color",
                Srgba::new(0.749, 0.749, 0.749, 1.0),
                Some(0.8),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        let Some(color) = context.lookup_color(name) else {
            return fallback;
        };
        let alpha = alpha_override.unwrap_or(color.alpha() as f64);
        Srgba::new(
            color.red() as f64,
            color.green() as f64,
            color.blue() as f64,
            alpha,
        )
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.dial-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
