//! Calibration transform
//!
//! Converts a decoded integer into a physical reading using the sensor's
//! calibration record. All arithmetic stays in `f64` so the full 64-bit
//! decoded range survives without precision loss.

use crate::decoder::sample_as_i64;
use crate::error::DecodeError;
use crate::types::{Calibration, ChannelFormat};

/// Default scaling rule: `(offset + value) * scale`
pub fn scaled_value(raw: i64, calibration: &Calibration) -> f64 {
    (calibration.offset + raw as f64) * calibration.scale
}

/// Decode and calibrate one channel sample
pub fn transform_sample(
    raw: &[u8],
    format: &ChannelFormat,
    calibration: &Calibration,
) -> Result<f64, DecodeError> {
    Ok(scaled_value(sample_as_i64(raw, format)?, calibration))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Endianness, Sign};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identity_calibration_passes_value_through() {
        let cal = Calibration::default();
        assert_eq!(scaled_value(0, &cal), 0.0);
        assert_eq!(scaled_value(1234, &cal), 1234.0);
        assert_eq!(scaled_value(-5, &cal), -5.0);
    }

    #[test]
    fn test_offset_applied_before_scale() {
        let cal = Calibration {
            offset: 10.0,
            scale: 0.5,
        };
        // (10 + 6) * 0.5 = 8, not 6 * 0.5 + 10
        assert_eq!(scaled_value(6, &cal), 8.0);
    }

    #[test]
    fn test_scaling_formula_for_arbitrary_triples() {
        let cases = [
            (-2048i64, 0.0, 0.000_598_550_4),
            (100, -3.5, 2.0),
            (8_388_607, 1.0, 1e-6),
        ];
        for (value, offset, scale) in cases {
            let cal = Calibration { offset, scale };
            let expected = (offset + value as f64) * scale;
            assert!((scaled_value(value, &cal) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_transform_sample_composes_decode_and_scale() {
        // 0xFF38 little-endian = -200 as i16; (-200 + 0) * 0.01 = -2.0
        let format = ChannelFormat {
            storage_bits: 16,
            shift: 0,
            sign: Sign::Signed,
            endianness: Endianness::Little,
        };
        let cal = Calibration {
            offset: 0.0,
            scale: 0.01,
        };
        let value = transform_sample(&[0x38, 0xFF], &format, &cal).unwrap();
        assert!((value + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_sample_propagates_decode_errors() {
        let format = ChannelFormat {
            storage_bits: 24,
            shift: 0,
            sign: Sign::Signed,
            endianness: Endianness::Little,
        };
        let result = transform_sample(&[0, 0, 0], &format, &Calibration::default());
        assert!(matches!(
            result,
            Err(DecodeError::UnsupportedStorageBits(24))
        ));
    }
}
