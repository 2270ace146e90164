// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{KEY_SIZE, NONCE_SIZE, OUTPUT_SIZE};
use crate::error::{Buffer, HChaCha20Error};
use crate::state::State;
use crate::types::{Key, Nonce, Subkey};

#[cfg(any(test, feature = "test-utils"))]
use crate::consts::STATE_WORDS;

/// HChaCha20 over fixed-size buffers.
///
/// Deterministic: the same `(key, nonce)` pair always yields the same subkey.
pub fn hchacha20(key: &Key, nonce: &Nonce) -> Subkey {
    let mut state = State::new(key, nonce);
    state.permute();

    let mut output = [0u8; OUTPUT_SIZE];
    state.extract(&mut output);
    output
}

/// HChaCha20 over caller-supplied slices.
///
/// Checks `output`, `key` and `nonce` lengths in that order. On error nothing
/// has been written to `output`.
///
/// # Errors
///
/// Returns [`HChaCha20Error::InvalidLength`] naming the first buffer whose
/// length differs from [`OUTPUT_SIZE`], [`KEY_SIZE`] or [`NONCE_SIZE`].
pub fn derive_key(output: &mut [u8], key: &[u8], nonce: &[u8]) -> Result<(), HChaCha20Error> {
    let (output_len, key_len, nonce_len) = (output.len(), key.len(), nonce.len());

    let output: &mut Subkey = output
        .try_into()
        .map_err(|_| invalid_length(Buffer::Output, OUTPUT_SIZE, output_len))?;
    let key: &Key = key
        .try_into()
        .map_err(|_| invalid_length(Buffer::Key, KEY_SIZE, key_len))?;
    let nonce: &Nonce = nonce
        .try_into()
        .map_err(|_| invalid_length(Buffer::Nonce, NONCE_SIZE, nonce_len))?;

    let mut state = State::new(key, nonce);
    state.permute();
    state.extract(output);

    Ok(())
}

#[inline]
fn invalid_length(buffer: Buffer, expected: usize, actual: usize) -> HChaCha20Error {
    HChaCha20Error::InvalidLength {
        buffer,
        expected,
        actual,
    }
}

/// Returns the raw state after `double_rounds` double-rounds.
///
/// With [`DOUBLE_ROUNDS`](crate::DOUBLE_ROUNDS), words 0..4 and 12..16 of the
/// result are the words [`hchacha20`] serializes.
#[cfg(any(test, feature = "test-utils"))]
pub fn state_after_double_rounds(
    key: &Key,
    nonce: &Nonce,
    double_rounds: usize,
) -> [u32; STATE_WORDS] {
    let mut state = State::new(key, nonce);
    for _ in 0..double_rounds {
        state.double_round();
    }
    *state.words()
}
