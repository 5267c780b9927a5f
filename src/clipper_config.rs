use crate::clipper::enums::{ClipType, PolyFillType};
use crate::constants::{DEFAULT_SCALE_EXPONENT, MAX_SCALE_EXPONENT};
use crate::error::{ClipperError, ClipperResult};
use crate::utils::bit_ops::{get_bits, set_bits};

/// Settings of the marshaling layer, packed into a single `u32` for the JS
/// side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipperConfig {
    pub scale_exponent: u8,
    // user units, packed as tenths
    pub clean_distance: f32,
    pub clip_type: ClipType,
    pub subject_fill: PolyFillType,
    pub clip_fill: PolyFillType,
}

const CONFIG_OFFSETS: [u8; 5] = [0, 4, 14, 16, 18];

const CONFIG_BITS: [u8; 5] = [4, 10, 2, 2, 2];

impl ClipperConfig {
    pub fn new() -> ClipperConfig {
        ClipperConfig {
            scale_exponent: DEFAULT_SCALE_EXPONENT,
            clean_distance: 0.0,
            clip_type: ClipType::Union,
            subject_fill: PolyFillType::NonZero,
            clip_fill: PolyFillType::Positive,
        }
    }

    pub fn deserialize(&mut self, packed: u32) -> ClipperResult<()> {
        let scale_exponent = get_bits(packed, CONFIG_OFFSETS[0], CONFIG_BITS[0]) as u8;
        if scale_exponent > MAX_SCALE_EXPONENT {
            return Err(ClipperError::invalid_input(format!(
                "scale exponent {} exceeds {}",
                scale_exponent, MAX_SCALE_EXPONENT
            )));
        }

        self.scale_exponent = scale_exponent;
        self.clean_distance = get_bits(packed, CONFIG_OFFSETS[1], CONFIG_BITS[1]) as f32 / 10.0;
        // two bits always decode to a valid variant
        self.clip_type = ClipType::from_u8(get_bits(packed, CONFIG_OFFSETS[2], CONFIG_BITS[2]) as u8)
            .unwrap_or(ClipType::Union);
        self.subject_fill =
            PolyFillType::from_u8(get_bits(packed, CONFIG_OFFSETS[3], CONFIG_BITS[3]) as u8)
                .unwrap_or(PolyFillType::NonZero);
        self.clip_fill =
            PolyFillType::from_u8(get_bits(packed, CONFIG_OFFSETS[4], CONFIG_BITS[4]) as u8)
                .unwrap_or(PolyFillType::NonZero);

        Ok(())
    }

    pub fn serialize(&self) -> u32 {
        let mut result: u32 = 0;

        result = set_bits(
            result,
            self.scale_exponent as u16,
            CONFIG_OFFSETS[0],
            CONFIG_BITS[0],
        );
        result = set_bits(
            result,
            (self.clean_distance * 10.0).round() as u16,
            CONFIG_OFFSETS[1],
            CONFIG_BITS[1],
        );
        result = set_bits(result, self.clip_type as u16, CONFIG_OFFSETS[2], CONFIG_BITS[2]);
        result = set_bits(
            result,
            self.subject_fill as u16,
            CONFIG_OFFSETS[3],
            CONFIG_BITS[3],
        );
        result = set_bits(result, self.clip_fill as u16, CONFIG_OFFSETS[4], CONFIG_BITS[4]);

        result
    }

    /// Factor between user units and engine coordinates.
    pub fn scale(&self) -> f64 {
        10f64.powi(self.scale_exponent as i32)
    }

    /// Clean distance in engine coordinates.
    pub fn scaled_clean_distance(&self) -> f64 {
        self.clean_distance as f64 * self.scale()
    }
}

impl Default for ClipperConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClipperConfig::default();

        assert_eq!(config.scale_exponent, 4);
        assert_eq!(config.scale(), 10000.0);
        assert_eq!(config.clip_type, ClipType::Union);
        assert_eq!(config.subject_fill, PolyFillType::NonZero);
        assert_eq!(config.clip_fill, PolyFillType::Positive);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = ClipperConfig {
            scale_exponent: 3,
            clean_distance: 2.5,
            clip_type: ClipType::Xor,
            subject_fill: PolyFillType::EvenOdd,
            clip_fill: PolyFillType::Negative,
        };

        let mut restored = ClipperConfig::new();
        restored.deserialize(config.serialize()).unwrap();

        assert_eq!(restored, config);
        assert_eq!(restored.scaled_clean_distance(), 2500.0);
    }

    #[test]
    fn test_zero_packed_config() {
        let mut config = ClipperConfig::new();
        config.deserialize(0).unwrap();

        assert_eq!(config.scale(), 1.0);
        assert_eq!(config.clip_type, ClipType::Intersection);
        assert_eq!(config.subject_fill, PolyFillType::EvenOdd);
    }

    #[test]
    fn test_rejects_large_scale_exponent() {
        let mut config = ClipperConfig::new();
        let packed = set_bits(0, 12, CONFIG_OFFSETS[0], CONFIG_BITS[0]);

        assert!(config.deserialize(packed).is_err());
        assert_eq!(config, ClipperConfig::new());
    }
}
