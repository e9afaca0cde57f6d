use derive_more::{AsRef, Deref, Display, From, Into};
use hyprland::data::CursorPosition;
use hyprland::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert a global coordinate into a window's local space.
    pub fn to_local(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct MonitorName(String);

impl MonitorName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

/// Global cursor position in compositor coordinates, queried over IPC.
/// Used to seed freshly built overlay windows and by the background poll.
pub fn cursor_position() -> Option<Point> {
    let cursor = CursorPosition::get().ok()?;
    Some(Point::new(cursor.x as f64, cursor.y as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_local_subtracts_window_origin() {
        let origin = Point::new(100.0, 50.0);
        let global = Point::new(150.0, 80.0);
        assert_eq!(global.to_local(origin), Point::new(50.0, 30.0));
    }

    #[test]
    fn test_to_local_handles_negative_origins() {
        // Monitors left of the primary have negative origins.
        let origin = Point::new(-1920.0, 0.0);
        let global = Point::new(-100.0, 25.0);
        assert_eq!(global.to_local(origin), Point::new(1820.0, 25.0));
    }
}
