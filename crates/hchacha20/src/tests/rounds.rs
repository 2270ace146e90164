// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::DOUBLE_ROUNDS;
use crate::state::State;
use crate::{hchacha20, state_after_double_rounds};

const KEY: [u8; 32] = [0x5a; 32];
const NONCE: [u8; 16] = [0xa5; 16];

fn extracted(words: &[u32; 16]) -> [u8; 32] {
    let mut output = [0u8; 32];
    for (chunk, word) in output
        .chunks_exact_mut(4)
        .zip(words[..4].iter().chain(words[12..].iter()))
    {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    output
}

#[test]
fn test_double_round_count() {
    assert_eq!(DOUBLE_ROUNDS, 10);
}

#[test]
fn test_permute_applies_80_quarter_rounds() {
    let mut state = State::new(&KEY, &NONCE);
    state.permute();

    assert_eq!(state.quarter_rounds(), 80);
}

#[test]
fn test_double_round_applies_8_quarter_rounds() {
    let mut state = State::new(&KEY, &NONCE);
    state.double_round();

    assert_eq!(state.quarter_rounds(), 8);
}

#[test]
fn test_output_matches_state_after_10_double_rounds() {
    let words = state_after_double_rounds(&KEY, &NONCE, DOUBLE_ROUNDS);

    assert_eq!(extracted(&words), hchacha20(&KEY, &NONCE));
}

#[test]
fn test_output_differs_from_neighbouring_round_counts() {
    let output = hchacha20(&KEY, &NONCE);

    for rounds in [0, 1, DOUBLE_ROUNDS - 1, DOUBLE_ROUNDS + 1] {
        let words = state_after_double_rounds(&KEY, &NONCE, rounds);
        assert_ne!(extracted(&words), output, "matched after {rounds} double-rounds");
    }
}

#[test]
fn test_zero_double_rounds_is_initial_state() {
    let words = state_after_double_rounds(&KEY, &NONCE, 0);
    let state = State::new(&KEY, &NONCE);

    assert_eq!(&words, state.words());
}

#[test]
fn test_rounds_compose() {
    let mut state = State::new(&KEY, &NONCE);
    for _ in 0..3 {
        state.column_round();
        state.diagonal_round();
    }

    assert_eq!(state.words(), &state_after_double_rounds(&KEY, &NONCE, 3));
}
