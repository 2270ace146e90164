// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha state and mixing rounds used by HChaCha20.

use hchacha20_util::{u32_from_le, u32_to_le};

use crate::consts::{DOUBLE_ROUNDS, SIGMA, STATE_WORDS};
use crate::types::{Key, Nonce, Subkey};

/// ChaCha quarter-round over four words (RFC 8439, section 2.1).
#[inline(always)]
pub(crate) fn quarter_round(
    mut a: u32,
    mut b: u32,
    mut c: u32,
    mut d: u32,
) -> (u32, u32, u32, u32) {
    a = a.wrapping_add(b);
    d ^= a;
    d = d.rotate_left(16);

    c = c.wrapping_add(d);
    b ^= c;
    b = b.rotate_left(12);

    a = a.wrapping_add(b);
    d ^= a;
    d = d.rotate_left(8);

    c = c.wrapping_add(d);
    b ^= c;
    b = b.rotate_left(7);

    (a, b, c, d)
}

/// Transient 4x4 word matrix for a single derivation.
///
/// Layout: words 0..4 are [`SIGMA`], 4..12 the key, 12..16 the nonce.
pub(crate) struct State {
    words: [u32; STATE_WORDS],
    #[cfg(test)]
    quarter_rounds: usize,
}

impl State {
    pub(crate) fn new(key: &Key, nonce: &Nonce) -> Self {
        let mut words = [0u32; STATE_WORDS];

        words[..4].copy_from_slice(&SIGMA);

        for (word, chunk) in words[4..12].iter_mut().zip(key.chunks_exact(4)) {
            *word = u32_from_le(&[chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for (word, chunk) in words[12..16].iter_mut().zip(nonce.chunks_exact(4)) {
            *word = u32_from_le(&[chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        Self {
            words,
            #[cfg(test)]
            quarter_rounds: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn quarter_round(&mut self, a: usize, b: usize, c: usize, d: usize) {
        (
            self.words[a],
            self.words[b],
            self.words[c],
            self.words[d],
        ) = quarter_round(self.words[a], self.words[b], self.words[c], self.words[d]);

        #[cfg(test)]
        {
            self.quarter_rounds += 1;
        }
    }

    #[inline(always)]
    pub(crate) fn column_round(&mut self) {
        self.quarter_round(0, 4, 8, 12);
        self.quarter_round(1, 5, 9, 13);
        self.quarter_round(2, 6, 10, 14);
        self.quarter_round(3, 7, 11, 15);
    }

    #[inline(always)]
    pub(crate) fn diagonal_round(&mut self) {
        self.quarter_round(0, 5, 10, 15);
        self.quarter_round(1, 6, 11, 12);
        self.quarter_round(2, 7, 8, 13);
        self.quarter_round(3, 4, 9, 14);
    }

    #[inline(always)]
    pub(crate) fn double_round(&mut self) {
        self.column_round();
        self.diagonal_round();
    }

    /// Runs the full HChaCha20 schedule.
    pub(crate) fn permute(&mut self) {
        for _ in 0..DOUBLE_ROUNDS {
            self.double_round();
        }
    }

    /// Serializes words 0..4 and 12..16 into `output`.
    ///
    /// Words 4..12 never leave the state; keeping them private is what makes
    /// the derivation one-way.
    pub(crate) fn extract(&self, output: &mut Subkey) {
        let rows = self.words[..4].iter().chain(self.words[12..].iter());

        for (word, chunk) in rows.zip(output.chunks_exact_mut(4)) {
            let mut le_bytes = [0u8; 4];
            u32_to_le(*word, &mut le_bytes);
            chunk.copy_from_slice(&le_bytes);
        }
    }

    #[cfg(any(test, feature = "test-utils"))]
    pub(crate) fn words(&self) -> &[u32; STATE_WORDS] {
        &self.words
    }

    #[cfg(test)]
    pub(crate) fn quarter_rounds(&self) -> usize {
        self.quarter_rounds
    }
}

impl core::fmt::Debug for State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "State {{ [protected] }}")
    }
}
