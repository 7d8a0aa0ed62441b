// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Needleman-Wunsch global alignment score.
//!
//! A similarity, not a distance: higher is better. Every unit of both inputs is
//! consumed; gaps are allowed on either side. Only the best score is returned.
//! Ties between predecessors are not observable, so no traceback is kept.

use crate::config::AlignmentWeights;
use crate::contracts::check_alignment_boundary;

/// Best score over all full-length alignments of `left` and `right`.
///
/// With the default weights (match 1, mismatch 0, gap 0) this is the length of
/// the longest common subsequence.
pub fn needleman_wunsch(left: &str, right: &str, weights: AlignmentWeights) -> f64 {
    needleman_wunsch_slice(left.as_bytes(), right.as_bytes(), weights)
}

/// [`needleman_wunsch`] over arbitrary sequences.
pub fn needleman_wunsch_slice<T: PartialEq>(
    left: &[T],
    right: &[T],
    weights: AlignmentWeights,
) -> f64 {
    let gap = weights.gap();

    // Row 0: j leading gaps, accumulated one at a time.
    let mut previous = Vec::with_capacity(right.len() + 1);
    let mut leading = 0.0;
    previous.push(leading);
    for _ in right {
        leading += gap;
        previous.push(leading);
    }
    check_alignment_boundary(&previous, gap);

    let mut current = vec![0.0; right.len() + 1];
    let mut column_zero = 0.0;
    for l in left {
        column_zero += gap;
        current[0] = column_zero;

        for (j, r) in right.iter().enumerate() {
            let diagonal = previous[j] + weights.substitution(l == r);
            current[j + 1] = (previous[j + 1] + gap)
                .max(current[j] + gap)
                .max(diagonal);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[right.len()]
}
