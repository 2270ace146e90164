// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word conversion utilities for the ChaCha family.
//!
//! Conversions are done byte by byte with shifts and masks, so the result
//! never depends on the byte order of the host.

#![cfg_attr(not(any(test, feature = "test-utils")), no_std)]

/// Reads 4 bytes as a little-endian `u32`.
///
/// # Example
///
/// ```
/// use hchacha20_util::u32_from_le;
///
/// assert_eq!(u32_from_le(&[0x65, 0x78, 0x70, 0x61]), 0x61707865);
/// ```
#[inline(always)]
pub fn u32_from_le(bytes: &[u8; 4]) -> u32 {
    let mut value = 0u32;
    for (i, byte) in bytes.iter().enumerate() {
        value |= (*byte as u32) << (8 * i);
    }
    value
}

/// Writes a `u32` into 4 bytes, least significant byte first.
///
/// # Example
///
/// ```
/// use hchacha20_util::u32_to_le;
///
/// let mut bytes = [0u8; 4];
/// u32_to_le(0x04030201, &mut bytes);
/// assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]);
/// ```
#[inline(always)]
pub fn u32_to_le(value: u32, bytes: &mut [u8; 4]) {
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (value >> (8 * i)) as u8;
    }
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use hchacha20_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(any(test, feature = "test-utils"))]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string must have even length");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

/// Counts the bit positions where `a` and `b` differ.
///
/// Slices are compared up to the length of the shorter one.
///
/// # Example
///
/// ```
/// use hchacha20_util::count_differing_bits;
///
/// assert_eq!(count_differing_bits(&[0b1010], &[0b0110]), 2);
/// ```
#[cfg(any(test, feature = "test-utils"))]
pub fn count_differing_bits(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x ^ y).count_ones()).sum()
}
