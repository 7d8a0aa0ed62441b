// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance.
//!
//! Bottom-up Wagner-Fischer over a single rolling row. Row 0 is `0..=len(right)`
//! (inserting `j` units from nothing); the first cell of row `i` is `i`.
//!
//! `|len(a) - len(b)|` is a lower bound on the distance and `max(len(a), len(b))`
//! an upper bound. The bounded check uses the first to skip the O(nm) DP and
//! the row minimum to abandon it early.

use crate::contracts::{check_edit_distance_bounds, require_addressable};

/// Minimum number of single-unit insertions, deletions and substitutions that
/// turn `left` into `right`.
///
/// Compares UTF-8 bytes. `levenshtein("kitten", "sitting") == 3`.
pub fn levenshtein(left: &str, right: &str) -> usize {
    levenshtein_slice(left.as_bytes(), right.as_bytes())
}

/// [`levenshtein`] over arbitrary sequences.
///
/// # Panics
///
/// If `left.len() + right.len()` does not fit in `usize`. Only reachable with
/// zero-sized element types.
pub fn levenshtein_slice<T: PartialEq>(left: &[T], right: &[T]) -> usize {
    require_addressable(left.len(), right.len());

    if left.is_empty() {
        return right.len();
    }
    if right.is_empty() {
        return left.len();
    }

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

    let distance = row[right.len()];
    check_edit_distance_bounds(left.len(), right.len(), distance);
    distance
}

/// Are these strings within `max` edits of each other?
///
/// Same answer as `levenshtein(a, b) <= max`, with two early exits:
/// 1. If the length difference exceeds `max`, return false immediately
/// 2. If the minimum of a row exceeds `max`, abandon the DP
///
/// Row minima never decrease from one row to the next, so both exits are sound.
pub fn levenshtein_within(left: &str, right: &str, max: usize) -> bool {
    levenshtein_within_slice(left.as_bytes(), right.as_bytes(), max)
}

/// [`levenshtein_within`] over arbitrary sequences.
pub fn levenshtein_within_slice<T: PartialEq>(left: &[T], right: &[T], max: usize) -> bool {
    if left.len().abs_diff(right.len()) > max {
        return false;
    }

    let mut row: Vec<usize> = (0..=right.len()).collect();
    for (i, l) in left.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut min_row = row[0];

        for (j, r) in right.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(l != r);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
            min_row = min_row.min(row[j + 1]);
        }

        if min_row > max {
            return false;
        }
    }

    row[right.len()] <= max
}
