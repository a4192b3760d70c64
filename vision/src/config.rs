use opencv::core::Scalar;

/// Inclusive hue/saturation/value bounds, in OpenCV's 8-bit HSV scale
/// (hue 0..=180, saturation and value 0..=255).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvRange {
    pub const fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    pub(crate) fn lower_scalar(&self) -> Scalar {
        to_scalar(self.lower)
    }

    pub(crate) fn upper_scalar(&self) -> Scalar {
        to_scalar(self.upper)
    }
}

fn to_scalar(v: [u8; 3]) -> Scalar {
    Scalar::new(v[0] as f64, v[1] as f64, v[2] as f64, 0.0)
}

pub const BLUE_RANGE: HsvRange = HsvRange::new([90, 50, 50], [130, 255, 255]);
pub const ORANGE_RANGE: HsvRange = HsvRange::new([10, 100, 100], [25, 255, 255]);

/// Colour ranges used to isolate the two tracked objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorConfig {
    pub blue: HsvRange,
    pub orange: HsvRange,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            blue: BLUE_RANGE,
            orange: ORANGE_RANGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_become_scalars() {
        assert_eq!(BLUE_RANGE.lower_scalar(), Scalar::new(90.0, 50.0, 50.0, 0.0));
        assert_eq!(ORANGE_RANGE.upper_scalar(), Scalar::new(25.0, 255.0, 255.0, 0.0));
    }

    #[test]
    fn default_config_uses_fixed_ranges() {
        let config = DetectorConfig::default();
        assert_eq!(config.blue, BLUE_RANGE);
        assert_eq!(config.orange, ORANGE_RANGE);
    }
}
