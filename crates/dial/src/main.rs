use dial::config;
use dial::gui::app::AppModel;
use dial::sys::runtime;
use relm4::prelude::*;
use rondel::slider::Slider;

fn main() {
    env_logger::init();

    if let Err(e) = config::write_default_config() {
        log::warn!("Could not write default config: {}", e);
    }

    let config = config::load_or_default();
    let slider_config = config.slider.slider_config().unwrap_or_else(|e| {
        log::error!("Invalid slider configuration ({}); using defaults", e);
        config::SliderAttrs::default()
            .slider_config()
            .expect("default attributes are valid")
    });

    let mut slider = Slider::new(slider_config, config.slider.value);
    slider.set_disabled(config.slider.disabled);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.rondel.dial");

    app.run::<AppModel>((slider, config.slider, rx));
}
