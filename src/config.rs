use palette::Srgba;
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

pub const SIZE_RANGE: (f64, f64) = (30.0, 800.0);
pub const THICKNESS_RANGE: (f64, f64) = (1.0, 30.0);
pub const INTENSITY_RANGE: (f64, f64) = (0.0, 1.0);
pub const OPACITY_RANGE: (f64, f64) = (0.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, StrumDisplay)]
#[strum(ascii_case_insensitive)]
pub enum Variant {
    Ripple,
    Pulse,
}

impl Variant {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx)
    }
}

/// Appearance and animation parameters for the cursor circle.
///
/// Owned by the coordinator and shared read-only with every overlay
/// window; the settings surface is the single writer. The setters clamp,
/// so anything read out of a `Config` is already within bounds; the
/// renderer never re-validates.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub size: f64,
    pub thickness: f64,
    pub intensity: f64,
    pub color: Srgba<f64>,
    pub opacity: f64,
    pub variant: Variant,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 120.0,
            thickness: 4.0,
            intensity: 0.5,
            color: Srgba::new(1.0, 0.62, 0.25, 1.0),
            opacity: 0.8,
            variant: Variant::Ripple,
        }
    }
}

impl Config {
    pub fn set_size(&mut self, value: f64) {
        self.size = value.clamp(SIZE_RANGE.0, SIZE_RANGE.1);
    }

    pub fn set_thickness(&mut self, value: f64) {
        self.thickness = value.clamp(THICKNESS_RANGE.0, THICKNESS_RANGE.1);
    }

    pub fn set_intensity(&mut self, value: f64) {
        self.intensity = value.clamp(INTENSITY_RANGE.0, INTENSITY_RANGE.1);
    }

    pub fn set_opacity(&mut self, value: f64) {
        self.opacity = value.clamp(OPACITY_RANGE.0, OPACITY_RANGE.1);
    }

    pub fn set_color(&mut self, color: Srgba<f64>) {
        self.color = color;
    }

    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_variant_parsing() {
        let cases = vec![
            ("ripple", Variant::Ripple),
            ("Ripple", Variant::Ripple),
            ("RIPPLE", Variant::Ripple),
            ("pulse", Variant::Pulse),
            ("Pulse", Variant::Pulse),
        ];

        for (s, expected) in cases {
            assert_eq!(Variant::from_str(s).unwrap(), expected);
        }
    }

    #[test]
    fn test_variant_index_round_trip() {
        assert_eq!(Variant::from_index(0), Some(Variant::Ripple));
        assert_eq!(Variant::from_index(1), Some(Variant::Pulse));
        assert_eq!(Variant::from_index(2), None);
        assert_eq!(Variant::Pulse.as_index(), 1);
    }

    #[test]
    fn test_setters_clamp_to_bounds() {
        let mut config = Config::default();

        config.set_size(10_000.0);
        assert_eq!(config.size, SIZE_RANGE.1);
        config.set_size(1.0);
        assert_eq!(config.size, SIZE_RANGE.0);

        config.set_thickness(0.0);
        assert_eq!(config.thickness, THICKNESS_RANGE.0);
        config.set_thickness(99.0);
        assert_eq!(config.thickness, THICKNESS_RANGE.1);

        config.set_intensity(-0.5);
        assert_eq!(config.intensity, 0.0);
        config.set_intensity(1.5);
        assert_eq!(config.intensity, 1.0);

        config.set_opacity(2.0);
        assert_eq!(config.opacity, 1.0);
    }

    #[test]
    fn test_defaults_within_bounds() {
        let config = Config::default();
        assert!(config.size >= SIZE_RANGE.0 && config.size <= SIZE_RANGE.1);
        assert!(config.thickness >= THICKNESS_RANGE.0 && config.thickness <= THICKNESS_RANGE.1);
        assert!((0.0..=1.0).contains(&config.intensity));
        assert!((0.0..=1.0).contains(&config.opacity));
    }
}
