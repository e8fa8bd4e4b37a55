use crate::config;
use crate::events::AppEvent;
use crate::gui::knob::{self, Layout, PressTarget};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use rondel::geometry::Point;
use rondel::slider::{KeyAction, PointerButton, Response, Slider};
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub slider: Rc<RefCell<Slider>>,
    pub label: String,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
    motion: gtk::EventControllerMotion,
    releaser: gtk::GestureClick,
}

#[derive(Debug)]
pub enum AppMsg {
    Press { position: Point, button: u32 },
    Motion(Point),
    Release,
    Key(KeyAction),
    SetValue(f64),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::SetValue(value) => AppMsg::SetValue(value),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

fn pointer_button(button: u32) -> PointerButton {
    match button {
        0 => PointerButton::Touch,
        gdk::BUTTON_PRIMARY => PointerButton::Primary,
        gdk::BUTTON_MIDDLE => PointerButton::Middle,
        _ => PointerButton::Secondary,
    }
}

fn key_action(key: gdk::Key) -> Option<KeyAction> {
    if key == gdk::Key::Left || key == gdk::Key::Down {
        Some(KeyAction::StepDown)
    } else if key == gdk::Key::Right || key == gdk::Key::Up {
        Some(KeyAction::StepUp)
    } else if key == gdk::Key::Home {
        Some(KeyAction::ToMin)
    } else if key == gdk::Key::End {
        Some(KeyAction::ToMax)
    } else {
        None
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        Slider,
        crate::config::SliderAttrs,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Dial"),
            set_default_size: (420, 420),
            add_css_class: "dial-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    match key_action(key) {
                        Some(action) => {
                            sender.input(AppMsg::Key(action));
                            glib::Propagation::Stop
                        }
                        None => glib::Propagation::Proceed,
                    }
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                set_focusable: true,
                add_css_class: "dial-drawing-area",

                add_controller = gtk::GestureClick {
                    set_button: 0, // Listen to all buttons, filter in the model
                    connect_pressed[sender] => move |gesture, _, x, y| {
                        sender.input(AppMsg::Press {
                            position: Point::new(x, y),
                            button: gesture.current_button(),
                        });
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (slider, attrs, rx) = init;

        theme::load_css();

        let slider = Rc::new(RefCell::new(slider));

        let motion = gtk::EventControllerMotion::new();
        motion.set_propagation_phase(gtk::PropagationPhase::Capture);
        {
            let sender = sender.clone();
            motion.connect_motion(move |_, x, y| {
                sender.input(AppMsg::Motion(Point::new(x, y)));
            });
        }

        let releaser = gtk::GestureClick::new();
        releaser.set_button(0);
        releaser.set_propagation_phase(gtk::PropagationPhase::Capture);
        {
            let sender = sender.clone();
            releaser.connect_released(move |_, _, _, _| {
                sender.input(AppMsg::Release);
            });
        }

        let model = AppModel {
            slider: slider.clone(),
            label: attrs.label,
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
            motion: motion.clone(),
            releaser: releaser.clone(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        // Window-level listeners so a drag keeps tracking after the pointer
        // leaves the control; removed exactly once in shutdown.
        root.add_controller(motion);
        root.add_controller(releaser);

        let state_draw = model.slider.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                let slider = state_draw.borrow();
                let layout = Layout::compute(slider.config(), width as f64, height as f64);
                if let Err(e) = knob::draw(cr, &slider, &layout, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        model.refresh_accessible();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Press { position, button } => {
                let response = {
                    let mut slider = self.slider.borrow_mut();
                    let layout = self.layout(&slider);
                    match layout.hit_test(slider.config(), slider.value(), position) {
                        Some(PressTarget::Thumb) => slider.press_thumb(pointer_button(button)),
                        Some(PressTarget::Track) => {
                            let point = layout.to_circle(position, slider.config());
                            slider.press_track(pointer_button(button), point)
                        }
                        None => Response::NONE,
                    }
                };
                if self.slider.borrow().is_dragging() {
                    self.drawing_area.grab_focus();
                }
                self.apply(response);
            }
            AppMsg::Motion(position) => {
                let response = {
                    let mut slider = self.slider.borrow_mut();
                    if !slider.is_dragging() {
                        Response::NONE
                    } else if let Some(local) =
                        window::to_widget_coords(&self.drawing_area, &self.root, position)
                    {
                        let layout = self.layout(&slider);
                        let point = layout.to_circle(local, slider.config());
                        slider.drag(point)
                    } else {
                        Response::NONE
                    }
                };
                self.apply(response);
            }
            AppMsg::Release => {
                let response = self.slider.borrow_mut().release();
                self.apply(response);
            }
            AppMsg::Key(action) => {
                let response = self.slider.borrow_mut().key_input(action);
                self.apply(response);
            }
            AppMsg::SetValue(value) => {
                let response = {
                    let mut slider = self.slider.borrow_mut();
                    let mut response = slider.set_value(value);
                    if response.input.is_some() {
                        response.change = slider.commit().change;
                    }
                    response
                };
                self.apply(response);
            }
            AppMsg::ConfigReload => self.reload_config(),
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        // The window-level listeners must go away with the control, even if
        // it is torn down mid-drag.
        self.root.remove_controller(&self.motion);
        self.root.remove_controller(&self.releaser);
    }
}

impl AppModel {
    fn layout(&self, slider: &Slider) -> Layout {
        Layout::compute(
            slider.config(),
            self.drawing_area.width() as f64,
            self.drawing_area.height() as f64,
        )
    }

    fn apply(&self, response: Response) {
        if let Some(value) = response.input {
            log::debug!("input: {}", value);
            self.drawing_area.queue_draw();
            self.drawing_area
                .update_property(&[gtk::accessible::Property::ValueNow(value)]);
        }
        if let Some(value) = response.change {
            log::info!("change: {}", value);
        }
    }

    fn refresh_accessible(&self) {
        let slider = self.slider.borrow();
        self.drawing_area.update_property(&[
            gtk::accessible::Property::Label(&self.label),
            gtk::accessible::Property::ValueMin(slider.config().min()),
            gtk::accessible::Property::ValueMax(slider.config().max()),
            gtk::accessible::Property::ValueNow(slider.value()),
        ]);
    }

    fn reload_config(&mut self) {
        let new_config = match config::load_config() {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to reload config: {}", e);
                return;
            }
        };

        match new_config.slider.slider_config() {
            Ok(slider_config) => {
                {
                    let mut slider = self.slider.borrow_mut();
                    slider.set_config(slider_config);
                    slider.set_disabled(new_config.slider.disabled);
                }
                self.label = new_config.slider.label;
                self.refresh_accessible();
                self.drawing_area.queue_draw();
                log::info!("Configuration reloaded");
            }
            Err(e) => log::error!("Rejected reloaded configuration: {}", e),
        }
    }
}
