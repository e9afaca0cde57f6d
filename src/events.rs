use crate::sys::wm::Point;

/// Events produced by the background services (compositor IPC poll,
/// evdev readers, command socket) and marshaled onto the UI thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    CursorMove(Point),
    Pressed,
    Released,
    ToggleMenu,
    Quit,
}
