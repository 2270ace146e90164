// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HChaCha20 subkey derivation
//!
//! Derives a 32-byte subkey from a 32-byte key and a 16-byte nonce using
//! 10 ChaCha double-rounds, then keeps only the first and last rows of the
//! state. This is the first step of XChaCha20.
//!
//! References:
//! - draft-irtf-cfrg-xchacha: XChaCha: eXtended-nonce ChaCha and AEAD_XChaCha20_Poly1305
//!   <https://datatracker.ietf.org/doc/html/draft-irtf-cfrg-xchacha>
//! - RFC 8439: ChaCha20 and Poly1305 for IETF Protocols
//!   <https://datatracker.ietf.org/doc/html/rfc8439>
//!
//! # Example
//!
//! ```
//! use hchacha20::{derive_key, hchacha20, OUTPUT_SIZE};
//!
//! let key = [0x42u8; 32];
//! let nonce = [0x24u8; 16];
//!
//! let subkey = hchacha20(&key, &nonce);
//!
//! let mut output = [0u8; OUTPUT_SIZE];
//! derive_key(&mut output, &key, &nonce).expect("Failed to derive_key(..)");
//!
//! assert_eq!(output, subkey);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod hchacha20;
mod state;
mod types;

pub use consts::{KEY_SIZE, NONCE_SIZE, OUTPUT_SIZE};
pub use error::{Buffer, HChaCha20Error};
pub use hchacha20::{derive_key, hchacha20};
pub use types::{Key, Nonce, Subkey};

#[cfg(any(test, feature = "test-utils"))]
pub use consts::DOUBLE_ROUNDS;
#[cfg(any(test, feature = "test-utils"))]
pub use hchacha20::state_after_double_rounds;
