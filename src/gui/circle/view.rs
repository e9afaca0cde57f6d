use super::{MAX_RIPPLE_SCALE, PULSE_BASE, PULSE_SPAN};
use crate::config::{Config, Variant};
use crate::sys::wm::Point;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;

/// One stroked circle to paint. Everything a frame draws is expressed as
/// a list of these, which keeps the drawing decisions testable without a
/// surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub center: Point,
    pub diameter: f64,
    pub color: Srgba<f64>,
    pub width: f64,
}

fn faded(color: Srgba<f64>, multiplier: f64) -> Srgba<f64> {
    let (r, g, b, a) = color.into_components();
    Srgba::new(r, g, b, a * multiplier)
}

pub fn render(position: Point, config: &Config, progress: f64, pressed: bool) -> Vec<Stroke> {
    match config.variant {
        Variant::Ripple => render_ripple(position, config, progress, pressed),
        Variant::Pulse => render_pulse(position, config, progress, pressed),
    }
}

fn render_ripple(position: Point, config: &Config, progress: f64, pressed: bool) -> Vec<Stroke> {
    // A press doubles the base opacity as an emphasis cue, capped at opaque.
    let base_opacity = if pressed {
        (config.opacity * 2.0).min(1.0)
    } else {
        config.opacity
    };

    let mut strokes = vec![Stroke {
        center: position,
        diameter: config.size,
        color: faded(config.color, base_opacity),
        width: config.thickness,
    }];

    if !pressed && progress > 0.0 {
        strokes.push(Stroke {
            center: position,
            diameter: config.size * (1.0 + progress * config.intensity * MAX_RIPPLE_SCALE),
            color: faded(config.color, config.opacity * (1.0 - progress)),
            width: config.thickness,
        });
    }

    strokes
}

fn render_pulse(position: Point, config: &Config, progress: f64, pressed: bool) -> Vec<Stroke> {
    let pulse_amount = PULSE_SPAN * config.intensity + PULSE_BASE;

    // Shrink toward the floor while pressed, regrow to full size after
    // release. Pressed frames ignore the opacity dial entirely.
    let (scale, opacity) = if pressed {
        (1.0 - pulse_amount * progress, 1.0)
    } else {
        (1.0 - pulse_amount * (1.0 - progress), config.opacity)
    };

    vec![Stroke {
        center: position,
        diameter: config.size * scale,
        color: faded(config.color, opacity),
        width: config.thickness,
    }]
}

pub fn draw(cr: &Context, strokes: &[Stroke]) -> Result<(), cairo::Error> {
    for stroke in strokes {
        let (r, g, b, a) = stroke.color.into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.set_line_width(stroke.width);
        cr.arc(
            stroke.center.x,
            stroke.center.y,
            stroke.diameter / 2.0,
            0.0,
            2.0 * PI,
        );
        cr.stroke()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(variant: Variant) -> Config {
        let mut config = Config::default();
        config.set_variant(variant);
        config.set_color(Srgba::new(1.0, 1.0, 1.0, 1.0));
        config
    }

    #[test]
    fn test_every_stroke_uses_config_thickness() {
        for variant in [Variant::Ripple, Variant::Pulse] {
            let mut cfg = config(variant);
            cfg.set_thickness(7.0);

            for pressed in [true, false] {
                for progress in [0.0, 0.5, 1.0] {
                    let strokes = render(Point::default(), &cfg, progress, pressed);
                    assert!(!strokes.is_empty());
                    assert!(strokes.iter().all(|s| s.width == 7.0));
                }
            }
        }
    }

    #[test]
    fn test_ripple_ring_diameter_and_fade() {
        let mut cfg = config(Variant::Ripple);
        cfg.set_size(100.0);
        cfg.set_intensity(1.0);
        cfg.set_opacity(1.0);

        let strokes = render(Point::new(10.0, 10.0), &cfg, 0.5, false);
        assert_eq!(strokes.len(), 2);

        // size * (1 + 0.5 * 1.0 * 2.0) = size * 2.0
        assert!((strokes[1].diameter - 200.0).abs() < 1e-9);
        // faded by (1 - progress)
        assert!((strokes[1].color.alpha - 0.5).abs() < 1e-9);
        // base circle is untouched by the animation
        assert_eq!(strokes[0].diameter, 100.0);
    }

    #[test]
    fn test_ripple_has_no_ring_while_pressed_or_at_rest() {
        let cfg = config(Variant::Ripple);
        assert_eq!(render(Point::default(), &cfg, 0.5, true).len(), 1);
        assert_eq!(render(Point::default(), &cfg, 0.0, false).len(), 1);
    }

    #[test]
    fn test_ripple_press_doubles_opacity_clamped() {
        let mut cfg = config(Variant::Ripple);
        cfg.set_opacity(0.3);
        let strokes = render(Point::default(), &cfg, 0.0, true);
        assert!((strokes[0].color.alpha - 0.6).abs() < 1e-9);

        cfg.set_opacity(0.8);
        let strokes = render(Point::default(), &cfg, 0.0, true);
        assert_eq!(strokes[0].color.alpha, 1.0);
    }

    #[test]
    fn test_pulse_shrinks_while_pressed() {
        let mut cfg = config(Variant::Pulse);
        cfg.set_size(200.0);
        cfg.set_intensity(0.5); // pulse_amount = 0.4 * 0.5 + 0.1 = 0.3

        let strokes = render(Point::new(10.0, 10.0), &cfg, 0.5, true);
        assert_eq!(strokes.len(), 1);
        // size * (1 - 0.3 * 0.5) = size * 0.85
        assert!((strokes[0].diameter - 170.0).abs() < 1e-9);
        // pressed frames are fully opaque
        assert_eq!(strokes[0].color.alpha, 1.0);
    }

    #[test]
    fn test_pulse_regrows_to_full_size_on_release() {
        let mut cfg = config(Variant::Pulse);
        cfg.set_size(200.0);
        cfg.set_intensity(0.5);
        cfg.set_opacity(0.7);

        // at release start the circle is still at the shrunk size
        let strokes = render(Point::default(), &cfg, 0.0, false);
        assert!((strokes[0].diameter - 140.0).abs() < 1e-9);
        assert!((strokes[0].color.alpha - 0.7).abs() < 1e-9);

        // fully regrown at the end
        let strokes = render(Point::default(), &cfg, 1.0, false);
        assert!((strokes[0].diameter - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_strokes_share_the_cursor_position() {
        let cfg = config(Variant::Ripple);
        let position = Point::new(42.0, 17.0);
        for stroke in render(position, &cfg, 0.5, false) {
            assert_eq!(stroke.center, position);
        }
    }
}
