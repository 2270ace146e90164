// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HChaCha20 constants.

/// Derived subkey size in bytes
pub const OUTPUT_SIZE: usize = 32;

/// Input key size in bytes
pub const KEY_SIZE: usize = 32;

/// HChaCha20 nonce size in bytes
pub const NONCE_SIZE: usize = 16;

/// Number of 32-bit words in the ChaCha state
pub const STATE_WORDS: usize = 16;

/// Number of double-rounds (column + diagonal) applied to the state
pub const DOUBLE_ROUNDS: usize = 10;

/// "expand 32-byte k" as four little-endian words
pub const SIGMA: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];
