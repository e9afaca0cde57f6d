use crate::sys::wm::Point;

/// Global y below which presses are swallowed while the color chooser is
/// open. The chooser keeps its own alpha slider near the bottom of the
/// panel; a press there must not flash a click animation. The exact value
/// is a heuristic, not a contract.
pub const COLOR_PANEL_GUARD_Y: f64 = 640.0;

/// Decides whether a press/release pair may reach the overlay windows.
///
/// Position tracking is never filtered; only click-animation triggers
/// are. Both flags are flipped by the coordinator on the UI thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFilter {
    pub menu_open: bool,
    pub color_panel_open: bool,
}

impl InputFilter {
    pub fn allows_click(&self, at: Point) -> bool {
        if self.menu_open {
            return false;
        }
        if self.color_panel_open && at.y > COLOR_PANEL_GUARD_Y {
            return false;
        }
        true
    }
}
