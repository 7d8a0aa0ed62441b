// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for all four measures.
//!
//! Arbitrary bytes, lossily decoded, must never panic any measure, and every
//! result must respect the bounds the measure promises.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqdist::{
    kmp_score, levenshtein, levenshtein_within, needleman_wunsch, white_similarity, windows,
    AlignmentWeights, Window,
};

/// Fuzz input for pairwise comparison
#[derive(Debug, Arbitrary)]
struct PairInput {
    left_bytes: Vec<u8>,
    right_bytes: Vec<u8>,
    /// Window length (0 must be rejected)
    window: u8,
    /// Alignment weights (non-finite values must be rejected)
    matched: f64,
    mismatched: f64,
    gap: f64,
}

fuzz_target!(|input: PairInput| {
    let left = String::from_utf8_lossy(&input.left_bytes);
    let right = String::from_utf8_lossy(&input.right_bytes);

    // Cap lengths to avoid timeouts in the quadratic measures
    let left: String = left.chars().take(64).collect();
    let right: String = right.chars().take(64).collect();
    let left_len = left.len();
    let right_len = right.len();

    // INVARIANT 1: edit distance within its trivial bounds, symmetric
    let distance = levenshtein(&left, &right);
    assert!(distance >= left_len.abs_diff(right_len));
    assert!(distance <= left_len.max(right_len));
    assert_eq!(distance, levenshtein(&right, &left));
    assert_eq!(distance == 0, left == right);
    assert!(levenshtein_within(&left, &right, distance));

    // INVARIANT 2: weights are either rejected or give a finite score
    match AlignmentWeights::new(input.matched, input.mismatched, input.gap) {
        Ok(weights) => {
            let score = needleman_wunsch(&left, &right, weights);
            // Huge finite weights can still overflow to infinity mid-table.
            let modest = [input.matched, input.mismatched, input.gap]
                .iter()
                .all(|w| w.abs() < 1e12);
            if modest {
                assert!(score.is_finite(), "alignment produced {} for {:?}", score, weights);
            }
        }
        Err(_) => {
            assert!(
                !(input.matched.is_finite() && input.mismatched.is_finite() && input.gap.is_finite()),
                "finite weights rejected"
            );
        }
    }

    // INVARIANT 3: zero window rejected, others bounded
    let window = match Window::new(usize::from(input.window)) {
        Ok(window) => window,
        Err(_) => {
            assert_eq!(input.window, 0);
            return;
        }
    };

    let similarity = white_similarity(&left, &right, window);
    assert!((0.0..=100.0).contains(&similarity), "similarity {}", similarity);
    assert_eq!(similarity, white_similarity(&right, &left, window));
    if !left.is_empty() && left == right {
        assert_eq!(similarity, 100.0);
    }

    // INVARIANT 4: occurrence score bounded by patterns x text length
    let patterns = windows(left.as_bytes(), window).count() as u64;
    let score = kmp_score(&left, &right, window);
    assert!(score <= patterns * right_len as u64);
    if left_len < window.get() {
        assert_eq!(score, 0);
    }
});
