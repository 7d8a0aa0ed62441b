// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-sequence dynamic programming: edit distance and global alignment.
//!
//! Both fill a (len(left)+1) x (len(right)+1) table row by row, where every
//! interior cell depends only on the cells above, to the left, and diagonally
//! above-left. Only the corner cell is observable, so neither keeps more than
//! the rows the recurrence still needs.

mod alignment;
mod levenshtein;

pub use alignment::*;
pub use levenshtein::*;
