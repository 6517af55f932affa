//! Generic integer decoding of packed channel samples
//!
//! A scan channel stores its sample in 16, 32 or 64 bits, in either byte
//! order, optionally left-aligned (real data in the high bits, `shift` low
//! bits to discard). Decoding assembles the stored word, applies the shift in
//! the signedness of the channel, and widens the result to `i64`.

use crate::error::DecodeError;
use crate::types::{ChannelFormat, Endianness, Sign};

/// Decode one raw sample into a sign-extended 64-bit integer
///
/// The buffer must hold at least `format.storage_bytes()` bytes; extra bytes
/// are ignored. Shifting happens after sign reinterpretation for signed
/// channels, so the shift is arithmetic and sign-preserving.
pub fn sample_as_i64(raw: &[u8], format: &ChannelFormat) -> Result<i64, DecodeError> {
    match format.storage_bits {
        64 => {
            let bytes = sample_bytes::<8>(raw)?;
            let word = match format.endianness {
                Endianness::Big => u64::from_be_bytes(bytes),
                Endianness::Little => u64::from_le_bytes(bytes),
            };
            Ok(match format.sign {
                Sign::Unsigned => (word >> format.shift) as i64,
                Sign::Signed => (word as i64) >> format.shift,
            })
        }
        32 => {
            let bytes = sample_bytes::<4>(raw)?;
            let word = match format.endianness {
                Endianness::Big => u32::from_be_bytes(bytes),
                Endianness::Little => u32::from_le_bytes(bytes),
            };
            Ok(match format.sign {
                Sign::Unsigned => i64::from(word >> format.shift),
                Sign::Signed => i64::from((word as i32) >> format.shift),
            })
        }
        16 => {
            let bytes = sample_bytes::<2>(raw)?;
            let word = match format.endianness {
                Endianness::Big => u16::from_be_bytes(bytes),
                Endianness::Little => u16::from_le_bytes(bytes),
            };
            Ok(match format.sign {
                Sign::Unsigned => i64::from(word >> format.shift),
                Sign::Signed => i64::from((word as i16) >> format.shift),
            })
        }
        bits => Err(DecodeError::UnsupportedStorageBits(bits)),
    }
}

/// First `N` bytes of the buffer, or `ShortSample` if it is undersized
fn sample_bytes<const N: usize>(raw: &[u8]) -> Result<[u8; N], DecodeError> {
    raw.get(..N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(DecodeError::ShortSample {
            needed: N,
            got: raw.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(storage_bits: u16, shift: u32, sign: Sign, endianness: Endianness) -> ChannelFormat {
        ChannelFormat {
            storage_bits,
            shift,
            sign,
            endianness,
        }
    }

    #[test]
    fn test_all_zero_buffers_decode_to_zero() {
        let zeros = [0u8; 8];
        for bits in [16, 32, 64] {
            for sign in [Sign::Signed, Sign::Unsigned] {
                for endianness in [Endianness::Big, Endianness::Little] {
                    for shift in [0, 3] {
                        let f = format(bits, shift, sign, endianness);
                        assert_eq!(sample_as_i64(&zeros, &f).unwrap(), 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_16_bit_little_endian_signed() {
        // 0xFF9C = -100 as i16, stored low byte first
        let raw = [0x9C, 0xFF];
        let f = format(16, 0, Sign::Signed, Endianness::Little);
        assert_eq!(sample_as_i64(&raw, &f).unwrap(), -100);
    }

    #[test]
    fn test_16_bit_big_endian_signed() {
        let raw = [0xFF, 0x9C];
        let f = format(16, 0, Sign::Signed, Endianness::Big);
        assert_eq!(sample_as_i64(&raw, &f).unwrap(), -100);
    }

    #[test]
    fn test_endianness_differs_for_non_palindromic_bytes() {
        let raw = [0x12, 0x34];
        let le = format(16, 0, Sign::Unsigned, Endianness::Little);
        let be = format(16, 0, Sign::Unsigned, Endianness::Big);
        assert_eq!(sample_as_i64(&raw, &le).unwrap(), 0x3412);
        assert_eq!(sample_as_i64(&raw, &be).unwrap(), 0x1234);
        assert_ne!(
            sample_as_i64(&raw, &le).unwrap(),
            sample_as_i64(&raw, &be).unwrap()
        );
    }

    #[test]
    fn test_12_bit_sample_left_aligned_in_16_bits() {
        // 12-bit ADC value stored in the high bits: 0x8000 >> 4 = -2048
        let raw = [0x00, 0x80];
        let f = format(16, 4, Sign::Signed, Endianness::Little);
        assert_eq!(sample_as_i64(&raw, &f).unwrap(), -2048);
    }

    #[test]
    fn test_shift_is_logical_for_unsigned() {
        let raw = [0x00, 0x80];
        let f = format(16, 4, Sign::Unsigned, Endianness::Little);
        assert_eq!(sample_as_i64(&raw, &f).unwrap(), 0x0800);
    }

    #[test]
    fn test_maximum_magnitude_signed_values() {
        // Most negative value at each width survives the widening intact
        let fmt16 = format(16, 0, Sign::Signed, Endianness::Big);
        assert_eq!(
            sample_as_i64(&[0x80, 0x00], &fmt16).unwrap(),
            i64::from(i16::MIN)
        );

        let fmt32 = format(32, 0, Sign::Signed, Endianness::Big);
        assert_eq!(
            sample_as_i64(&[0x80, 0x00, 0x00, 0x00], &fmt32).unwrap(),
            i64::from(i32::MIN)
        );

        let fmt64 = format(64, 0, Sign::Signed, Endianness::Big);
        assert_eq!(
            sample_as_i64(&[0x80, 0, 0, 0, 0, 0, 0, 0], &fmt64).unwrap(),
            i64::MIN
        );
    }

    #[test]
    fn test_arithmetic_shift_preserves_sign() {
        let f = format(16, 2, Sign::Signed, Endianness::Big);
        // 0x8000 as i16 = -32768; >> 2 arithmetic = -8192
        assert_eq!(sample_as_i64(&[0x80, 0x00], &f).unwrap(), -8192);
    }

    #[test]
    fn test_unsigned_never_negative() {
        let raw = [0xFF; 8];
        for bits in [16, 32] {
            for endianness in [Endianness::Big, Endianness::Little] {
                let f = format(bits, 0, Sign::Unsigned, endianness);
                assert!(sample_as_i64(&raw, &f).unwrap() >= 0);
            }
        }
        // 64-bit unsigned with any shift moves the top bit out of the sign
        let f = format(64, 1, Sign::Unsigned, Endianness::Little);
        assert!(sample_as_i64(&raw, &f).unwrap() >= 0);
    }

    #[test]
    fn test_32_bit_little_endian_unsigned() {
        let raw = [0x78, 0x56, 0x34, 0x12];
        let f = format(32, 0, Sign::Unsigned, Endianness::Little);
        assert_eq!(sample_as_i64(&raw, &f).unwrap(), 0x1234_5678);
    }

    #[test]
    fn test_64_bit_big_endian_unsigned_with_shift() {
        let raw = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
        let f = format(64, 8, Sign::Unsigned, Endianness::Big);
        assert_eq!(sample_as_i64(&raw, &f).unwrap(), 0x0001_2345_6789_ABCD);
    }

    #[test]
    fn test_64_bit_little_endian_signed() {
        let raw = (-1234567890123i64).to_le_bytes();
        let f = format(64, 0, Sign::Signed, Endianness::Little);
        assert_eq!(sample_as_i64(&raw, &f).unwrap(), -1234567890123);
    }

    #[test]
    fn test_unsupported_storage_bits() {
        let f = format(24, 0, Sign::Signed, Endianness::Little);
        let err = sample_as_i64(&[0u8; 3], &f).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedStorageBits(24)));
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let f = format(32, 0, Sign::Signed, Endianness::Little);
        let err = sample_as_i64(&[0x01, 0x02], &f).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::ShortSample { needed: 4, got: 2 }
        ));
    }
}
