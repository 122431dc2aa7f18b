//! Fixed-point and synchsafe integer transforms used by media tag formats.
//!
//! The bit layouts here are wire-format facts (QuickTime-style fixed-point
//! fields, ID3v2 synchsafe size fields) and are not configurable.

/// Returns the 8.8 fixed-point representation of a 32-bit float.
///
/// Scaling saturates at the `u16` range.
pub fn to_fixed8(value: f32) -> u16 {
    (value * 256.0) as u16
}

/// Returns the 32-bit float represented by an 8.8 fixed-point value.
pub fn fixed8_to_f32(value: u16) -> f32 {
    value as f32 / 256.0
}

/// Returns the 16.16 fixed-point representation of a 32-bit float.
///
/// Scaling saturates at the `u32` range.
pub fn to_fixed16(value: f32) -> u32 {
    (value * 65536.0) as u32
}

/// Returns the 32-bit float represented by a 16.16 fixed-point value.
pub fn fixed16_to_f32(value: u32) -> f32 {
    value as f32 / 65536.0
}

/// Redistributes the low 28 bits of `value` into 4 bytes of 7 significant
/// bits each, the top bit of every byte clear. Bits 28–31 are discarded;
/// the format has a 28-bit effective range.
pub fn to_synchsafe(value: u32) -> u32 {
    (value & 0x0000007f)
        | ((value & 0x00003f80) << 1)
        | ((value & 0x001fc000) << 2)
        | ((value & 0x0fe00000) << 3)
}

/// Gathers the 4×7 significant bits of a synchsafe integer back into a
/// normal 32-bit integer. Exact inverse of [to_synchsafe] for any value in
/// `0..1 << 28`.
pub fn from_synchsafe(value: u32) -> u32 {
    (value & 0x0000007f)
        | ((value & 0x00007f00) >> 1)
        | ((value & 0x007f0000) >> 2)
        | ((value & 0x7f000000) >> 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed8_anchor_values() {
        assert_eq!(to_fixed8(1.0), 256);
        assert_eq!(fixed8_to_f32(256), 1.0);
        assert_eq!(to_fixed8(1.5), 384);
        assert_eq!(fixed8_to_f32(128), 0.5);
    }

    #[test]
    fn test_fixed16_anchor_values() {
        assert_eq!(to_fixed16(1.0), 65536);
        assert_eq!(fixed16_to_f32(65536), 1.0);
        assert_eq!(to_fixed16(0.25), 16384);
    }

    #[test]
    fn test_fixed_point_truncates() {
        // 1/3 is not representable in 8 fractional bits.
        assert_eq!(to_fixed8(1.0 / 3.0), 85);
    }

    #[test]
    fn test_synchsafe_known_values() {
        assert_eq!(to_synchsafe(0x0fffffff), 0x7f7f7f7f);
        assert_eq!(from_synchsafe(0x7f7f7f7f), 0x0fffffff);
        assert_eq!(to_synchsafe(0x80), 0x0100);
        assert_eq!(to_synchsafe(0), 0);
    }

    #[test]
    fn test_synchsafe_discards_top_bits() {
        assert_eq!(to_synchsafe(0xf0000000), 0);
        assert_eq!(to_synchsafe(0xffffffff), 0x7f7f7f7f);
    }

    #[test]
    fn test_synchsafe_top_bits_clear() {
        for value in [0x0fffffffu32, 0x12345678, 0xdeadbeef] {
            let encoded = to_synchsafe(value);
            for byte in encoded.to_be_bytes() {
                assert_eq!(byte & 0x80, 0);
            }
        }
    }

    #[test]
    fn test_synchsafe_round_trip() {
        for value in [0u32, 1, 0x7f, 0x80, 0x3fff, 0x4000, 0x0fffffff] {
            assert_eq!(from_synchsafe(to_synchsafe(value)), value);
        }
    }
}
