// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sliding window extraction shared by the windowed metrics.

use crate::config::Window;
use crate::contracts::check_window_count;

/// Full-length windows of `seq`, in order, duplicates included.
///
/// Starts at every offset below `len - 1`; a trailing partial window is
/// discarded. Sequences shorter than the window yield nothing.
pub fn windows<T>(seq: &[T], window: Window) -> impl Iterator<Item = &[T]> {
    let starts = seq.len().saturating_sub(1);
    seq.windows(window.get()).take(starts)
}

/// Number of windows [`windows`] yields for a sequence of `len` units.
pub(crate) fn window_count(len: usize, window: Window) -> usize {
    let full = len.saturating_sub(window.get() - 1);
    let count = full.min(len.saturating_sub(1));
    check_window_count(len, window.get(), count);
    count
}
