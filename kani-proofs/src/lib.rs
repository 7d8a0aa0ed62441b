// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for seqdist primitives.
//!
//! This standalone crate extracts the KMP prefix function and the rolling-row
//! edit distance, and proves properties of both over every input up to a small
//! length bound using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: neither function indexes out of bounds
//! 2. **Borders**: every failure entry is a proper border of its prefix
//! 3. **Bounds**: `|a - b| <= distance <= max(a, b)`, and 0 iff equal

/// Largest pattern or input length explored by the proofs.
pub const MAX_LEN: usize = 4;

// ============================================================================
// PREFIX FUNCTION (copied from src/overlap/kmp.rs)
// ============================================================================

/// Longest proper border of every prefix of `pattern`.
pub fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let mut failure = vec![0; pattern.len()];
    let mut border = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[border] {
            border += 1;
            failure[i] = border;
            i += 1;
        } else if border > 0 {
            border = failure[border - 1];
        } else {
            failure[i] = 0;
            i += 1;
        }
    }
    failure
}

// ============================================================================
// EDIT DISTANCE (copied from src/distance/levenshtein.rs)
// ============================================================================

/// Levenshtein distance over a single rolling row.
pub fn levenshtein(left: &[u8], right: &[u8]) -> usize {
    let mut row: Vec<usize> = (0..=right.len()).collect();
    for (i, l) in left.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, r) in right.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(l != r);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }
    row[right.len()]
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic byte string of length at most MAX_LEN over a two-letter alphabet.
    fn symbolic(buf: &mut [u8; MAX_LEN]) -> usize {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        for i in 0..MAX_LEN {
            buf[i] = kani::any_where(|&b: &u8| b < 2);
        }
        len
    }

    /// Verify the prefix function never panics and only records proper borders.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_failure_table_borders() {
        let mut buf = [0u8; MAX_LEN];
        let len = symbolic(&mut buf);
        let pattern = &buf[..len];

        let failure = failure_table(pattern);
        kani::assert(failure.len() == pattern.len(), "one entry per unit");

        for i in 0..failure.len() {
            let border = failure[i];
            kani::assert(border <= i, "border must be proper");
            kani::assert(
                pattern[..border] == pattern[i + 1 - border..=i],
                "entry must be a border of the prefix",
            );
        }
    }

    /// Verify edit distance stays within its length bounds.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_levenshtein_bounds() {
        let mut left_buf = [0u8; MAX_LEN];
        let mut right_buf = [0u8; MAX_LEN];
        let left_len = symbolic(&mut left_buf);
        let right_len = symbolic(&mut right_buf);
        let left = &left_buf[..left_len];
        let right = &right_buf[..right_len];

        let distance = levenshtein(left, right);
        kani::assert(
            distance >= left_len.abs_diff(right_len),
            "distance below length difference",
        );
        kani::assert(
            distance <= left_len.max(right_len),
            "distance above longer length",
        );
        kani::assert((distance == 0) == (left == right), "zero iff equal");
    }

    /// Verify edit distance is symmetric.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_levenshtein_symmetric() {
        let mut left_buf = [0u8; MAX_LEN];
        let mut right_buf = [0u8; MAX_LEN];
        let left_len = symbolic(&mut left_buf);
        let right_len = symbolic(&mut right_buf);
        let left = &left_buf[..left_len];
        let right = &right_buf[..right_len];

        kani::assert(
            levenshtein(left, right) == levenshtein(right, left),
            "distance must be symmetric",
        );
    }
}
