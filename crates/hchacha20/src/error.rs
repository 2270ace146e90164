// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HChaCha20 error types.

use core::fmt;

use thiserror::Error;

/// Buffer passed to [`derive_key`](crate::derive_key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    /// Output keying material
    Output,
    /// Input key
    Key,
    /// Nonce
    Nonce,
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Buffer::Output => f.write_str("output"),
            Buffer::Key => f.write_str("key"),
            Buffer::Nonce => f.write_str("nonce"),
        }
    }
}

/// HChaCha20 error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HChaCha20Error {
    /// A buffer does not have the exact length the transform requires
    #[error("invalid {buffer} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Offending buffer
        buffer: Buffer,
        /// Required length in bytes
        expected: usize,
        /// Length that was passed
        actual: usize,
    },
}
