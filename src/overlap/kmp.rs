// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring occurrence score via Knuth-Morris-Pratt.
//!
//! Every window of `left` is a pattern; the score is the total number of
//! (possibly overlapping) places each pattern occurs in `right`. Patterns are
//! not deduplicated, so a window repeated in `left` is counted once per
//! repetition. The score is unbounded and not symmetric.
//!
//! # Failure Table
//!
//! `failure[i]` is the length of the longest proper prefix of `pattern[..=i]`
//! that is also a suffix of it. After a full match the search resumes from
//! `failure[len - 1]` matched units without moving the text cursor, which is
//! what lets overlapping occurrences count.

use super::windows::{window_count, windows};
use crate::config::Window;
use crate::contracts::{check_failure_table, require_score_fits};

/// Number of times the windows of `left` occur in `right`.
///
/// Zero when either input is empty or `left` is shorter than the window.
///
/// # Panics
///
/// If the largest possible score does not fit in `u64`.
pub fn kmp_score(left: &str, right: &str, window: Window) -> u64 {
    kmp_score_slice(left.as_bytes(), right.as_bytes(), window)
}

/// [`kmp_score`] over arbitrary sequences.
///
/// # Panics
///
/// If the largest possible score does not fit in `u64`.
pub fn kmp_score_slice<T: PartialEq>(left: &[T], right: &[T], window: Window) -> u64 {
    if left.is_empty() || right.is_empty() || left.len() < window.get() {
        return 0;
    }
    require_score_fits(window_count(left.len(), window), right.len());

    windows(left, window)
        .map(|pattern| {
            let failure = failure_table(pattern);
            count_occurrences(pattern, &failure, right)
        })
        .sum()
}

/// Prefix function of `pattern`.
pub fn failure_table<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
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

    check_failure_table(pattern, &failure);
    failure
}

/// Count overlapping occurrences of `pattern` in `text`.
///
/// `failure` must be [`failure_table`] of `pattern`. An empty pattern matches
/// nowhere.
pub fn count_occurrences<T: PartialEq>(pattern: &[T], failure: &[usize], text: &[T]) -> u64 {
    debug_assert_eq!(pattern.len(), failure.len());
    if pattern.is_empty() {
        return 0;
    }

    let mut matched = 0;
    let mut hits = 0;
    for unit in text {
        while matched > 0 && pattern[matched] != *unit {
            matched = failure[matched - 1];
        }
        if pattern[matched] == *unit {
            matched += 1;
        }
        if matched == pattern.len() {
            hits += 1;
            matched = failure[matched - 1];
        }
    }
    hits
}
