use crate::config::Config;
use crate::gui::circle::{self, CircleState, FRAME_INTERVAL};
use crate::gui::window;
use crate::sys::wm::{MonitorName, Point};
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

/// One transparent, always-on-top, click-through window covering a single
/// monitor. Owns its animation state and its frame ticker; holds the
/// shared configuration read-only.
pub struct OverlayWindow {
    window: gtk::ApplicationWindow,
    area: gtk::DrawingArea,
    monitor: MonitorName,
    origin: Point,
    state: Rc<RefCell<CircleState>>,
    config: Rc<RefCell<Config>>,
    ticker: Rc<Cell<Option<glib::SourceId>>>,
}

impl OverlayWindow {
    pub fn new(monitor: &gdk::Monitor, config: Rc<RefCell<Config>>, cursor: Point) -> Self {
        let geometry = monitor.geometry();
        let origin = Point::new(geometry.x() as f64, geometry.y() as f64);
        let name = MonitorName::new(
            monitor
                .connector()
                .map(|c| c.to_string())
                .unwrap_or_default(),
        );

        let state = Rc::new(RefCell::new(CircleState::new(cursor.to_local(origin))));

        let window = gtk::ApplicationWindow::new(&relm4::main_application());
        window.set_decorated(false);
        window.add_css_class("corona-overlay");
        window.set_default_size(geometry.width(), geometry.height());

        window::init_layer_shell(&window);
        window::pin_to_monitor(&window, monitor);
        window::set_click_through(&window);

        let area = gtk::DrawingArea::default();
        area.set_hexpand(true);
        area.set_vexpand(true);
        area.add_css_class("corona-drawing-area");

        {
            let state = state.clone();
            let config = config.clone();
            area.set_draw_func(move |_, cr, _, _| {
                let state = state.borrow();
                let config = config.borrow();
                let strokes = circle::render(state.position, &config, state.progress, state.pressed);
                if let Err(e) = circle::draw(cr, &strokes) {
                    log::error!("Drawing error: {}", e);
                }
            });
        }

        window.set_child(Some(&area));
        window.present();

        Self {
            window,
            area,
            monitor: name,
            origin,
            state,
            config,
            ticker: Rc::new(Cell::new(None)),
        }
    }

    pub fn set_cursor(&self, global: Point) {
        let local = global.to_local(self.origin);
        let mut state = self.state.borrow_mut();
        if state.position != local {
            state.position = local;
            drop(state);
            self.area.queue_draw();
        }
    }

    /// Reset the animation for a press/release transition and restart the
    /// frame ticker. The previous ticker, if any, is cancelled first; the
    /// new one removes itself once progress reaches 1.
    pub fn arm_animation(&self, pressed: bool, now: Instant) {
        self.state.borrow_mut().arm(pressed, now);
        self.stop_ticker();

        let state = self.state.clone();
        let config = self.config.clone();
        let area = self.area.clone();
        let ticker = self.ticker.clone();
        let id = glib::timeout_add_local(FRAME_INTERVAL, move || {
            let variant = config.borrow().variant;
            let complete = {
                let mut state = state.borrow_mut();
                state.advance(variant, Instant::now());
                state.is_complete()
            };
            area.queue_draw();
            if complete {
                ticker.set(None);
                glib::ControlFlow::Break
            } else {
                glib::ControlFlow::Continue
            }
        });
        self.ticker.set(Some(id));
    }

    /// Redraw with the current configuration; part of the explicit
    /// apply-configuration fan-out.
    pub fn refresh(&self) {
        self.area.queue_draw();
    }

    /// Whether the backing monitor is still connected with a usable frame.
    pub fn is_valid(&self) -> bool {
        window::get_monitor_by_name(&self.monitor)
            .map(|m| {
                let geometry = m.geometry();
                window::is_usable(geometry.width(), geometry.height())
            })
            .unwrap_or(false)
    }

    pub fn close(&self) {
        self.stop_ticker();
        self.window.set_visible(false);
        self.window.close();
    }

    fn stop_ticker(&self) {
        if let Some(id) = self.ticker.take() {
            id.remove();
        }
    }
}
