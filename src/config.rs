// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tuning parameters for the configurable metrics.
//!
//! Both types check their invariants at construction and guarantee them
//! forever after, so the algorithms taking them have nothing left to validate.
//! Deserialization goes through the same constructors.
//!
//! | Type               | Default         | Guaranteed            |
//! |--------------------|-----------------|-----------------------|
//! | `Window`           | 5               | length >= 1           |
//! | `AlignmentWeights` | 1 / 0 / 0       | every weight finite   |

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

/// Default window length for the windowed metrics.
pub const DEFAULT_WINDOW: usize = 5;

/// Default score for aligning two equal code units.
pub const DEFAULT_MATCH: f64 = 1.0;

/// Default score for aligning two different code units.
pub const DEFAULT_MISMATCH: f64 = 0.0;

/// Default score for a gap on either side.
pub const DEFAULT_GAP: f64 = 0.0;

// =============================================================================
// WINDOW
// =============================================================================

/// Length of the sliding window used by the windowed metrics.
///
/// Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Window(NonZeroUsize);

impl Window {
    /// Validate a window length.
    pub fn new(len: usize) -> Result<Self> {
        NonZeroUsize::new(len).map(Self).ok_or(Error::ZeroWindow)
    }

    /// The window length.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

/// Evaluated at build time; a zero default does not compile.
const DEFAULT_WINDOW_NONZERO: NonZeroUsize = match NonZeroUsize::new(DEFAULT_WINDOW) {
    Some(len) => len,
    None => panic!("DEFAULT_WINDOW must be non-zero"),
};

impl Default for Window {
    fn default() -> Self {
        Self(DEFAULT_WINDOW_NONZERO)
    }
}

impl TryFrom<usize> for Window {
    type Error = Error;

    fn try_from(len: usize) -> Result<Self> {
        Self::new(len)
    }
}

impl From<Window> for usize {
    fn from(window: Window) -> Self {
        window.get()
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ALIGNMENT WEIGHTS
// =============================================================================

/// Scores for global alignment.
///
/// The three weights are independent. Nothing requires `match > mismatch` or
/// a negative gap; the alignment simply maximizes whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights", into = "RawWeights")]
pub struct AlignmentWeights {
    matched: f64,
    mismatched: f64,
    gap: f64,
}

impl AlignmentWeights {
    /// Validate a set of weights. Each must be finite.
    pub fn new(matched: f64, mismatched: f64, gap: f64) -> Result<Self> {
        for (name, value) in [("match", matched), ("mismatch", mismatched), ("gap", gap)] {
            if !value.is_finite() {
                return Err(Error::NonFiniteWeight { name, value });
            }
        }
        Ok(Self {
            matched,
            mismatched,
            gap,
        })
    }

    /// Score added when two aligned code units are equal.
    #[inline]
    pub fn matched(&self) -> f64 {
        self.matched
    }

    /// Score added when two aligned code units differ.
    #[inline]
    pub fn mismatched(&self) -> f64 {
        self.mismatched
    }

    /// Score added for every gap position.
    #[inline]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Diagonal step score for a pair of code units.
    #[inline]
    pub(crate) fn substitution(&self, equal: bool) -> f64 {
        if equal {
            self.matched
        } else {
            self.mismatched
        }
    }
}

impl Default for AlignmentWeights {
    fn default() -> Self {
        Self {
            matched: DEFAULT_MATCH,
            mismatched: DEFAULT_MISMATCH,
            gap: DEFAULT_GAP,
        }
    }
}

/// Wire form of [`AlignmentWeights`]. Missing fields take the defaults.
#[derive(Serialize, Deserialize)]
struct RawWeights {
    #[serde(rename = "match", default = "default_match")]
    matched: f64,
    #[serde(rename = "mismatch", default)]
    mismatched: f64,
    #[serde(default)]
    gap: f64,
}

fn default_match() -> f64 {
    DEFAULT_MATCH
}

impl TryFrom<RawWeights> for AlignmentWeights {
    type Error = Error;

    fn try_from(raw: RawWeights) -> Result<Self> {
        Self::new(raw.matched, raw.mismatched, raw.gap)
    }
}

impl From<AlignmentWeights> for RawWeights {
    fn from(weights: AlignmentWeights) -> Self {
        Self {
            matched: weights.matched,
            mismatched: weights.mismatched,
            gap: weights.gap,
        }
    }
}
