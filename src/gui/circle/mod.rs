use std::time::Duration;

pub mod model;
pub mod view;

pub use model::CircleState;
pub use view::{Stroke, draw, render};

pub const RIPPLE_DURATION: Duration = Duration::from_millis(300);
pub const PULSE_DURATION: Duration = Duration::from_millis(150);
pub const MAX_RIPPLE_SCALE: f64 = 2.0; // ring grows to at most 3x the base diameter
pub const PULSE_BASE: f64 = 0.1; // shrink floor at zero intensity
pub const PULSE_SPAN: f64 = 0.4; // extra shrink at full intensity
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16); // ~60 Hz
