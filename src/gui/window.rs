use crate::sys::wm::MonitorName;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};

pub fn init_layer_shell(window: &gtk::ApplicationWindow) {
    window.init_layer_shell();
    window.set_layer(Layer::Overlay);
    window.set_namespace(Some("corona"));
    window.set_exclusive_zone(-1);
    for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
        window.set_anchor(edge, true);
    }
    window.set_keyboard_mode(KeyboardMode::None);
}

pub fn pin_to_monitor(window: &gtk::ApplicationWindow, monitor: &gdk::Monitor) {
    window.set_monitor(Some(monitor));
}

/// The overlay only draws; every pointer event must pass through to
/// whatever sits underneath it.
pub fn set_click_through(window: &gtk::ApplicationWindow) {
    window.connect_realize(|window| {
        if let Some(surface) = window.surface() {
            surface.set_input_region(&cairo::Region::create());
        }
    });
}

/// A monitor mid-disconnect can briefly report a degenerate frame.
pub fn is_usable(width: i32, height: i32) -> bool {
    width > 0 && height > 0
}

pub fn usable_monitors() -> Vec<gdk::Monitor> {
    let Some(display) = gdk::Display::default() else {
        return Vec::new();
    };
    let monitors = display.monitors();
    (0..monitors.n_items())
        .filter_map(|i| {
            monitors
                .item(i)
                .and_then(|item| item.downcast::<gdk::Monitor>().ok())
        })
        .filter(|m| {
            let geometry = m.geometry();
            is_usable(geometry.width(), geometry.height())
        })
        .collect()
}

pub fn get_monitor_by_name(name: &MonitorName) -> Option<gdk::Monitor> {
    let display = gdk::Display::default()?;
    let monitors = display.monitors();
    (0..monitors.n_items()).find_map(|i| {
        monitors
            .item(i)
            .and_then(|item| item.downcast::<gdk::Monitor>().ok())
            .filter(|m| m.connector().is_some_and(|n| n.as_str() == **name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_usable_rejects_degenerate_frames() {
        assert!(is_usable(1920, 1080));
        assert!(is_usable(1, 1));
        assert!(!is_usable(0, 1080));
        assert!(!is_usable(1920, 0));
        assert!(!is_usable(-1920, 1080));
        assert!(!is_usable(0, 0));
    }
}
