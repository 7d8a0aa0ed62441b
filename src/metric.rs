// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One algorithm plus its parameters, chosen at runtime.
//!
//! A [`Metric`] is what a caller stores in configuration when the comparison
//! to run is not known at compile time. It deserializes from a tagged object:
//!
//! ```json
//! {"metric": "levenshtein"}
//! {"metric": "needleman_wunsch", "weights": {"match": 2.0, "gap": -1.0}}
//! {"metric": "white_similarity", "window": 2}
//! {"metric": "kmp_score"}
//! ```
//!
//! Omitted parameters take their defaults.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::config::{AlignmentWeights, Window};
use crate::distance::{levenshtein_slice, needleman_wunsch_slice};
use crate::overlap::{kmp_score_slice, white_similarity_slice};

/// A comparison algorithm with its tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum Metric {
    /// Edit distance. Lower is more similar.
    #[default]
    Levenshtein,
    /// Global alignment score. Higher is more similar.
    NeedlemanWunsch {
        #[serde(default)]
        weights: AlignmentWeights,
    },
    /// Percentage of shared windows.
    WhiteSimilarity {
        #[serde(default)]
        window: Window,
    },
    /// Occurrences of `left`'s windows in `right`.
    KmpScore {
        #[serde(default)]
        window: Window,
    },
}

impl Metric {
    /// Stable name, as it appears in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Levenshtein => "levenshtein",
            Metric::NeedlemanWunsch { .. } => "needleman_wunsch",
            Metric::WhiteSimilarity { .. } => "white_similarity",
            Metric::KmpScore { .. } => "kmp_score",
        }
    }

    /// Compare two strings byte by byte.
    pub fn compare(&self, left: &str, right: &str) -> Measure {
        self.compare_slice(left.as_bytes(), right.as_bytes())
    }

    /// Compare two arbitrary sequences.
    pub fn compare_slice<T: Eq + Hash>(&self, left: &[T], right: &[T]) -> Measure {
        let measure = match *self {
            Metric::Levenshtein => Measure::Distance(levenshtein_slice(left, right)),
            Metric::NeedlemanWunsch { weights } => {
                Measure::Score(needleman_wunsch_slice(left, right, weights))
            }
            Metric::WhiteSimilarity { window } => {
                Measure::Similarity(white_similarity_slice(left, right, window))
            }
            Metric::KmpScore { window } => Measure::Count(kmp_score_slice(left, right, window)),
        };

        tracing::trace!(
            metric = self.name(),
            left_len = left.len(),
            right_len = right.len(),
            result = %measure,
            "compared"
        );
        measure
    }

    /// Parse a metric from its JSON configuration.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        match serde_json::from_str::<Self>(json) {
            Ok(metric) => {
                tracing::debug!(metric = ?metric, "loaded metric configuration");
                Ok(metric)
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected metric configuration");
                Err(e.into())
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Levenshtein => write!(f, "levenshtein"),
            Metric::NeedlemanWunsch { weights } => write!(
                f,
                "needleman_wunsch(match={}, mismatch={}, gap={})",
                weights.matched(),
                weights.mismatched(),
                weights.gap()
            ),
            Metric::WhiteSimilarity { window } => write!(f, "white_similarity(window={})", window),
            Metric::KmpScore { window } => write!(f, "kmp_score(window={})", window),
        }
    }
}

/// The result of a [`Metric`], tagged with how to read it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Measure {
    /// Edit count. 0 means identical.
    Distance(usize),
    /// Alignment score. Unbounded, may be negative.
    Score(f64),
    /// Percentage in `[0, 100]`.
    Similarity(f64),
    /// Occurrence count.
    Count(u64),
}

impl Measure {
    /// The value as a float, regardless of kind.
    pub fn as_f64(self) -> f64 {
        match self {
            Measure::Distance(d) => d as f64,
            Measure::Score(s) | Measure::Similarity(s) => s,
            Measure::Count(c) => c as f64,
        }
    }

    /// Whether larger values mean more similar inputs.
    pub fn higher_is_better(self) -> bool {
        !matches!(self, Measure::Distance(_))
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Distance(d) => write!(f, "{}", d),
            Measure::Score(s) => write!(f, "{}", s),
            Measure::Similarity(s) => write!(f, "{}%", s),
            Measure::Count(c) => write!(f, "{}", c),
        }
    }
}
