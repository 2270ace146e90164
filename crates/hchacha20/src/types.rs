// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Type aliases for HChaCha20 buffers.

use crate::consts::{KEY_SIZE, NONCE_SIZE, OUTPUT_SIZE};

/// Input key type
pub type Key = [u8; KEY_SIZE];

/// HChaCha20 nonce type
pub type Nonce = [u8; NONCE_SIZE];

/// Derived subkey type
pub type Subkey = [u8; OUTPUT_SIZE];
