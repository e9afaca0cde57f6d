use super::{PULSE_DURATION, RIPPLE_DURATION};
use crate::config::Variant;
use crate::sys::wm::Point;
use std::time::{Duration, Instant};

/// Normalized animation progress for the given elapsed time.
///
/// Ripple only runs while the button is released; while pressed it holds
/// whatever `held` was (a fresh press re-arms to 0 first, so this is the
/// frozen value). Pulse runs regardless of press state, the renderer
/// decides the visual direction. Clamped to exactly 1.0 at the end.
pub fn progress_at(variant: Variant, elapsed: Duration, pressed: bool, held: f64) -> f64 {
    let duration = match variant {
        Variant::Ripple => RIPPLE_DURATION,
        Variant::Pulse => PULSE_DURATION,
    };
    if variant == Variant::Ripple && pressed {
        return held;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Per-window animation state. Created with the window, reset on every
/// press/release transition, destroyed with the window.
pub struct CircleState {
    pub position: Point,
    pub pressed: bool,
    pub progress: f64,
    started: Option<Instant>,
}

impl CircleState {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            pressed: false,
            progress: 0.0,
            started: None,
        }
    }

    /// Reset for a press/release transition. Supersedes any in-flight
    /// animation; a stale ticker will see the fresh state on its next tick.
    pub fn arm(&mut self, pressed: bool, now: Instant) {
        self.pressed = pressed;
        self.progress = 0.0;
        self.started = Some(now);
    }

    pub fn advance(&mut self, variant: Variant, now: Instant) {
        let Some(started) = self.started else {
            return;
        };
        self.progress = progress_at(variant, now - started, self.pressed, self.progress);
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance_by(state: &mut CircleState, variant: Variant, start: Instant, ms: u64) {
        state.advance(variant, start + Duration::from_millis(ms));
    }

    #[test]
    fn test_ripple_advances_linearly_while_released() {
        let start = Instant::now();
        let mut state = CircleState::new(Point::default());
        state.arm(false, start);

        advance_by(&mut state, Variant::Ripple, start, 150);
        assert!((state.progress - 0.5).abs() < 1e-9);

        advance_by(&mut state, Variant::Ripple, start, 225);
        assert!((state.progress - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_ripple_is_frozen_while_pressed() {
        let start = Instant::now();
        let mut state = CircleState::new(Point::default());
        state.arm(true, start);

        advance_by(&mut state, Variant::Ripple, start, 150);
        assert_eq!(state.progress, 0.0);
        advance_by(&mut state, Variant::Ripple, start, 600);
        assert_eq!(state.progress, 0.0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_pulse_advances_regardless_of_press_state() {
        let start = Instant::now();

        for pressed in [true, false] {
            let mut state = CircleState::new(Point::default());
            state.arm(pressed, start);

            advance_by(&mut state, Variant::Pulse, start, 75);
            assert!((state.progress - 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_progress_clamps_to_exactly_one() {
        for (variant, ms) in [(Variant::Ripple, 300), (Variant::Pulse, 150)] {
            let start = Instant::now();
            let mut state = CircleState::new(Point::default());
            state.arm(false, start);

            advance_by(&mut state, variant, start, ms);
            assert_eq!(state.progress, 1.0);
            assert!(state.is_complete());

            advance_by(&mut state, variant, start, ms * 10);
            assert_eq!(state.progress, 1.0);
        }
    }

    #[test]
    fn test_progress_is_non_decreasing() {
        let start = Instant::now();
        let mut state = CircleState::new(Point::default());
        state.arm(false, start);

        let mut last = 0.0;
        for ms in (0..400).step_by(16) {
            advance_by(&mut state, Variant::Ripple, start, ms);
            assert!(state.progress >= last);
            last = state.progress;
        }
    }

    #[test]
    fn test_arm_resets_progress_on_each_transition() {
        let start = Instant::now();
        let mut state = CircleState::new(Point::default());
        state.arm(true, start);

        advance_by(&mut state, Variant::Pulse, start, 150);
        assert!(state.is_complete());

        let release = start + Duration::from_millis(200);
        state.arm(false, release);
        assert_eq!(state.progress, 0.0);
        assert!(!state.pressed);

        state.advance(Variant::Pulse, release + Duration::from_millis(75));
        assert!((state.progress - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_no_advancement_before_first_arm() {
        let mut state = CircleState::new(Point::default());
        state.advance(Variant::Ripple, Instant::now());
        assert_eq!(state.progress, 0.0);
    }
}
