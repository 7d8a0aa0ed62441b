// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pairwise sequence comparison.
//!
//! Four independent, stateless measures over two sequences. Each call owns its
//! working tables and frees them on return, so calls can run concurrently on
//! any threads without coordination.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────────────────┐     ┌────────────────┐
//! │  config.rs   │────▶│ distance/               │     │  metric.rs     │
//! │ (Window,     │     │  levenshtein, alignment │────▶│ (Metric,       │
//! │  Alignment-  │     ├─────────────────────────┤     │  Measure)      │
//! │  Weights)    │────▶│ overlap/                │────▶│                │
//! └──────────────┘     │  windows, white, kmp    │     └────────────────┘
//!                      └─────────────────────────┘
//!                                  │
//!                                  ▼
//!                      ┌─────────────────────────┐
//!                      │      contracts.rs       │
//!                      └─────────────────────────┘
//! ```
//!
//! | Measure              | Function              | Result              | Direction      |
//! |----------------------|-----------------------|---------------------|----------------|
//! | Edit distance        | [`levenshtein`]       | `usize`             | lower = closer |
//! | Global alignment     | [`needleman_wunsch`]  | `f64`               | higher = closer|
//! | Window overlap       | [`white_similarity`]  | `f64` in `[0, 100]` | higher = closer|
//! | Window occurrences   | [`kmp_score`]         | `u64`               | higher = closer|
//!
//! The `&str` functions compare raw UTF-8 bytes, so a multi-byte character is
//! several units. Every function has a `_slice` twin for arbitrary element
//! types; pass `&[char]` to compare scalar values instead.
//!
//! # Usage
//!
//! ```
//! use seqdist::{levenshtein, needleman_wunsch, white_similarity, AlignmentWeights, Window};
//!
//! assert_eq!(levenshtein("flaw", "lawn"), 2);
//! assert_eq!(needleman_wunsch("abc", "abc", AlignmentWeights::default()), 3.0);
//!
//! let bigrams = Window::new(2).unwrap();
//! assert_eq!(white_similarity("Healed", "Sealed", bigrams), 80.0);
//! ```

pub mod config;
pub mod contracts;
mod distance;
mod error;
mod metric;
mod overlap;

// Re-exports for public API
pub use config::{AlignmentWeights, Window, DEFAULT_WINDOW};
pub use distance::{
    levenshtein, levenshtein_slice, levenshtein_within, levenshtein_within_slice,
    needleman_wunsch, needleman_wunsch_slice,
};
pub use error::{Error, Result};
pub use metric::{Measure, Metric};
pub use overlap::{
    count_occurrences, failure_table, kmp_score, kmp_score_slice, white_similarity,
    white_similarity_slice, windows, IDENTICAL, NO_OVERLAP,
};
