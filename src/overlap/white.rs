// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! White similarity (Dice coefficient over window sets).
//!
//! Each input becomes the *set* of its windows; repeats count once. The score is
//! `2 * |L ∩ R| / (|L| + |R|)` scaled to a percentage.
//!
//! Precedence of the special cases:
//!
//! | Condition                        | Result |
//! |----------------------------------|--------|
//! | either input empty               | 0      |
//! | inputs equal                     | 100    |
//! | neither input has a full window  | 0      |
//!
//! The last row covers unequal inputs that are both shorter than the window,
//! where the formula would divide zero by zero.

use std::hash::Hash;

use ahash::AHashSet;

use super::windows::windows;
use crate::config::Window;
use crate::contracts::check_percentage;

/// Score for inputs with no windows in common, or none at all.
pub const NO_OVERLAP: f64 = 0.0;

/// Score for identical inputs.
pub const IDENTICAL: f64 = 100.0;

/// Percentage of shared windows between `left` and `right`, in `[0, 100]`.
///
/// Symmetric in its arguments.
pub fn white_similarity(left: &str, right: &str, window: Window) -> f64 {
    white_similarity_slice(left.as_bytes(), right.as_bytes(), window)
}

/// [`white_similarity`] over arbitrary sequences.
pub fn white_similarity_slice<T: Eq + Hash>(left: &[T], right: &[T], window: Window) -> f64 {
    if left.is_empty() || right.is_empty() {
        return NO_OVERLAP;
    }
    if left == right {
        return IDENTICAL;
    }

    let left_set: AHashSet<&[T]> = windows(left, window).collect();
    let right_set: AHashSet<&[T]> = windows(right, window).collect();

    let total = left_set.len() + right_set.len();
    if total == 0 {
        return NO_OVERLAP;
    }

    let shared = right_set
        .iter()
        .filter(|candidate| left_set.contains(*candidate))
        .count();

    let similarity = (shared as f64 * 2.0 / total as f64) * 100.0;
    check_percentage(similarity);
    similarity
}
