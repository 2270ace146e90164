// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod tests {
    use hchacha20_util::{u32_from_le, u32_to_le};

    #[test]
    fn test_little_endian_conversion() {
        let mut bytes = [0u8; 4];
        u32_to_le(0x04030201, &mut bytes);

        assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_overwrites_destination() {
        let mut bytes = [0xAA; 4];
        u32_to_le(1, &mut bytes);

        assert_eq!(bytes, [0x01, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_max_value() {
        let mut bytes = [0u8; 4];
        u32_to_le(u32::MAX, &mut bytes);

        assert_eq!(bytes, [0xFF; 4]);
    }

    #[test]
    fn test_inverse_of_u32_from_le() {
        for value in [0u32, 1, 0x80000000, 0xDEADBEEF, 0x61707865] {
            let mut bytes = [0u8; 4];
            u32_to_le(value, &mut bytes);

            assert_eq!(u32_from_le(&bytes), value);
        }
    }

    #[test]
    fn test_matches_core_to_le_bytes() {
        let mut bytes = [0u8; 4];
        u32_to_le(0x7bc434f3, &mut bytes);

        assert_eq!(bytes, 0x7bc434f3u32.to_le_bytes());
    }
}
