use crate::config::{self, Config, Variant};
use crate::events::AppEvent;
use crate::gui::displays::{DisplaySet, REBUILD_DEBOUNCE, SETTLE_DELAY};
use crate::gui::theme;
use crate::input::InputFilter;
use crate::sys::wm::{self, Point};
use gtk::prelude::*;
use gtk::{gdk, gio};
use gtk4 as gtk;
use palette::Srgba;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Top-level coordinator. Owns the configuration (single writer, on this
/// thread), the display set and the input filter; its root window is the
/// settings menu, hidden until summoned over the command socket.
pub struct AppModel {
    config: Rc<RefCell<Config>>,
    displays: DisplaySet,
    filter: InputFilter,
    cursor: Point,
    menu_visible: bool,
    root: gtk::ApplicationWindow,
}

#[derive(Debug)]
pub enum AppMsg {
    CursorMove(Point),
    Pressed,
    Released,
    ToggleMenu,
    HideMenu,
    DisplaysChanged,
    RebuildDisplays,
    FinishRebuild,
    SetSize(f64),
    SetThickness(f64),
    SetIntensity(f64),
    SetOpacity(f64),
    SetVariant(u32),
    PickColor,
    ColorChosen(gdk::RGBA),
    ColorDismissed,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::CursorMove(p) => AppMsg::CursorMove(p),
            AppEvent::Pressed => AppMsg::Pressed,
            AppEvent::Released => AppMsg::Released,
            AppEvent::ToggleMenu => AppMsg::ToggleMenu,
            AppEvent::Quit => AppMsg::Quit,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = async_channel::Receiver<AppEvent>;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Corona"),
            #[watch]
            set_visible: model.menu_visible,
            set_resizable: false,
            set_default_width: 360,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gdk::Key::Escape {
                        sender.input(AppMsg::HideMenu);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            // In-app presses run through the same handler as the global
            // sources; the filter classifies them as menu interactions.
            add_controller = gtk::GestureClick {
                set_button: 0, // Listen to all buttons
                connect_pressed[sender] => move |_, _, _, _| {
                    sender.input(AppMsg::Pressed);
                },
                connect_released[sender] => move |_, _, _, _| {
                    sender.input(AppMsg::Released);
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_margin_all: 16,
                set_spacing: 6,

                gtk::Label {
                    set_label: "Size",
                    set_halign: gtk::Align::Start,
                },
                gtk::Scale {
                    set_range: (config::SIZE_RANGE.0, config::SIZE_RANGE.1),
                    set_value: model.config.borrow().size,
                    set_draw_value: true,
                    set_digits: 0,
                    set_hexpand: true,
                    connect_value_changed[sender] => move |scale| {
                        sender.input(AppMsg::SetSize(scale.value()));
                    }
                },

                gtk::Label {
                    set_label: "Intensity",
                    set_halign: gtk::Align::Start,
                },
                gtk::Scale {
                    set_range: (config::INTENSITY_RANGE.0, config::INTENSITY_RANGE.1),
                    set_value: model.config.borrow().intensity,
                    set_draw_value: true,
                    set_digits: 2,
                    connect_value_changed[sender] => move |scale| {
                        sender.input(AppMsg::SetIntensity(scale.value()));
                    }
                },

                gtk::Label {
                    set_label: "Thickness",
                    set_halign: gtk::Align::Start,
                },
                gtk::Scale {
                    set_range: (config::THICKNESS_RANGE.0, config::THICKNESS_RANGE.1),
                    set_value: model.config.borrow().thickness,
                    set_draw_value: true,
                    set_digits: 0,
                    connect_value_changed[sender] => move |scale| {
                        sender.input(AppMsg::SetThickness(scale.value()));
                    }
                },

                gtk::Label {
                    set_label: "Opacity",
                    set_halign: gtk::Align::Start,
                },
                gtk::Scale {
                    set_range: (config::OPACITY_RANGE.0, config::OPACITY_RANGE.1),
                    set_value: model.config.borrow().opacity,
                    set_draw_value: true,
                    set_digits: 2,
                    connect_value_changed[sender] => move |scale| {
                        sender.input(AppMsg::SetOpacity(scale.value()));
                    }
                },

                gtk::Label {
                    set_label: "Animation",
                    set_halign: gtk::Align::Start,
                },
                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 8,

                    gtk::DropDown {
                        set_model: Some(&gtk::StringList::new(&["Ripple", "Pulse"])),
                        connect_selected_notify[sender] => move |dropdown| {
                            sender.input(AppMsg::SetVariant(dropdown.selected()));
                        }
                    },
                    gtk::Button {
                        set_label: "Circle color…",
                        connect_clicked[sender] => move |_| {
                            sender.input(AppMsg::PickColor);
                        }
                    },
                },

                gtk::Separator {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_margin_top: 6,
                },
                gtk::Button {
                    set_label: "Quit",
                    connect_clicked[sender] => move |_| {
                        sender.input(AppMsg::Quit);
                    }
                },
            }
        }
    }

    fn init(
        rx: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        theme::load_css();

        let config = Rc::new(RefCell::new(Config::default()));
        let cursor = wm::cursor_position().unwrap_or_default();

        let model = AppModel {
            config,
            displays: DisplaySet::new(),
            filter: InputFilter::default(),
            cursor,
            menu_visible: false,
            root: root.clone(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.displays.build(&model.config, model.cursor);

        // Display reconfiguration feeds the debounced rebuild path.
        if let Some(display) = gdk::Display::default() {
            let sender = sender.clone();
            display.monitors().connect_items_changed(move |_, _, _, _| {
                sender.input(AppMsg::DisplaysChanged);
            });
        }

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        root.set_visible(false);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::CursorMove(point) => {
                self.cursor = point;
                self.displays.update_cursor(point);
            }
            AppMsg::Pressed => {
                if self.filter.allows_click(self.cursor) {
                    self.displays.start_animation(true);
                }
            }
            AppMsg::Released => {
                if self.filter.allows_click(self.cursor) {
                    self.displays.start_animation(false);
                }
            }
            AppMsg::ToggleMenu => {
                self.menu_visible = !self.menu_visible;
                self.filter.menu_open = self.menu_visible;
            }
            AppMsg::HideMenu => {
                self.menu_visible = false;
                self.filter.menu_open = false;
            }
            AppMsg::DisplaysChanged => {
                if self.displays.begin_rebuild() {
                    let sender = sender.clone();
                    glib::timeout_add_local_once(REBUILD_DEBOUNCE, move || {
                        sender.input(AppMsg::RebuildDisplays);
                    });
                }
            }
            AppMsg::RebuildDisplays => {
                self.displays.teardown();
                let sender = sender.clone();
                glib::timeout_add_local_once(SETTLE_DELAY, move || {
                    sender.input(AppMsg::FinishRebuild);
                });
            }
            AppMsg::FinishRebuild => {
                self.cursor = wm::cursor_position().unwrap_or(self.cursor);
                self.displays.build(&self.config, self.cursor);
                self.displays.finish_rebuild();
            }
            AppMsg::SetSize(value) => {
                self.config.borrow_mut().set_size(value);
                self.apply_config();
            }
            AppMsg::SetThickness(value) => {
                self.config.borrow_mut().set_thickness(value);
                self.apply_config();
            }
            AppMsg::SetIntensity(value) => {
                self.config.borrow_mut().set_intensity(value);
                self.apply_config();
            }
            AppMsg::SetOpacity(value) => {
                self.config.borrow_mut().set_opacity(value);
                self.apply_config();
            }
            AppMsg::SetVariant(index) => {
                if let Some(variant) = Variant::from_index(index as usize) {
                    self.config.borrow_mut().set_variant(variant);
                    self.apply_config();
                }
            }
            AppMsg::PickColor => {
                self.filter.color_panel_open = true;

                let (r, g, b, a) = self.config.borrow().color.into_components();
                let initial = gdk::RGBA::new(r as f32, g as f32, b as f32, a as f32);
                let dialog = gtk::ColorDialog::builder().with_alpha(true).build();

                let sender = sender.clone();
                dialog.choose_rgba(
                    Some(&self.root),
                    Some(&initial),
                    gio::Cancellable::NONE,
                    move |result| match result {
                        Ok(rgba) => sender.input(AppMsg::ColorChosen(rgba)),
                        Err(_) => sender.input(AppMsg::ColorDismissed),
                    },
                );
            }
            AppMsg::ColorChosen(rgba) => {
                self.filter.color_panel_open = false;
                self.config.borrow_mut().set_color(Srgba::new(
                    rgba.red() as f64,
                    rgba.green() as f64,
                    rgba.blue() as f64,
                    rgba.alpha() as f64,
                ));
                self.apply_config();
            }
            AppMsg::ColorDismissed => {
                self.filter.color_panel_open = false;
            }
            AppMsg::Quit => {
                self.displays.teardown();
                relm4::main_application().quit();
            }
        }
    }
}

impl AppModel {
    /// Explicit apply step after a settings change; the only redraw
    /// fan-out the settings surface triggers.
    fn apply_config(&mut self) {
        self.displays.refresh_all();
    }
}
