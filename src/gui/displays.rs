use crate::config::Config;
use crate::gui::overlay::OverlayWindow;
use crate::gui::window;
use crate::sys::wm::Point;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Repeat reconfiguration signals inside this window collapse into one rebuild.
pub const REBUILD_DEBOUNCE: Duration = Duration::from_millis(300);
/// Grace period for the compositor to finish reconfiguring before windows
/// are recreated.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Owns one overlay window per usable monitor.
///
/// Windows are always rebuilt wholesale on reconfiguration, never diffed;
/// monitor identity is not stable across compositor changes.
#[derive(Default)]
pub struct DisplaySet {
    windows: Vec<OverlayWindow>,
    rebuilding: bool,
}

impl DisplaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create one window per monitor with a non-degenerate frame, each
    /// seeded with the shared configuration and the live cursor position.
    pub fn build(&mut self, config: &Rc<RefCell<Config>>, cursor: Point) {
        self.teardown();
        for monitor in window::usable_monitors() {
            self.windows
                .push(OverlayWindow::new(&monitor, config.clone(), cursor));
        }
        log::info!("Tracking {} display(s)", self.windows.len());
    }

    pub fn teardown(&mut self) {
        for win in self.windows.drain(..) {
            win.close();
        }
    }

    /// Single-flight guard over the debounce/settle rebuild sequence.
    /// Returns false while a rebuild is already pending, which is the only
    /// cancellation primitive the sequence needs.
    pub fn begin_rebuild(&mut self) -> bool {
        if self.rebuilding {
            return false;
        }
        self.rebuilding = true;
        true
    }

    pub fn finish_rebuild(&mut self) {
        self.rebuilding = false;
    }

    /// Drop windows whose backing monitor disappeared without a global
    /// reconfiguration signal. Not an error path; pruning is silent.
    fn prune(&mut self) {
        self.windows.retain(|win| {
            if win.is_valid() {
                true
            } else {
                win.close();
                false
            }
        });
    }

    pub fn update_cursor(&mut self, global: Point) {
        self.prune();
        for win in &self.windows {
            win.set_cursor(global);
        }
    }

    pub fn start_animation(&mut self, pressed: bool) {
        self.prune();
        let now = Instant::now();
        for win in &self.windows {
            win.arm_animation(pressed, now);
        }
    }

    pub fn refresh_all(&mut self) {
        self.prune();
        for win in &self.windows {
            win.refresh();
        }
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuild_guard_is_single_flight() {
        let mut set = DisplaySet::new();

        assert!(set.begin_rebuild());
        // bursty signals while a rebuild is pending are collapsed
        assert!(!set.begin_rebuild());
        assert!(!set.begin_rebuild());

        set.finish_rebuild();
        assert!(set.begin_rebuild());
    }

    #[test]
    fn test_new_set_is_empty() {
        let set = DisplaySet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
