// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for rejected configuration.
//!
//! The algorithms themselves never fail on well-formed input. Everything that
//! can go wrong is caught when a [`Window`](crate::Window),
//! [`AlignmentWeights`](crate::AlignmentWeights) or [`Metric`](crate::Metric)
//! is built, so a value you hold is always usable.
//!
//! Values rejected while a JSON document is being parsed arrive as
//! [`Error::Config`]. serde only carries the inner error's message, so a zero
//! window in JSON reads "window length must be at least 1" inside a `Config`
//! error rather than surfacing as [`Error::ZeroWindow`].

/// Configuration that cannot be turned into a valid metric.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Window length of zero. There is no zero-length window to slide.
    #[error("window length must be at least 1")]
    ZeroWindow,

    /// An alignment weight is NaN or infinite.
    #[error("{name} weight must be finite, got {value}")]
    NonFiniteWeight { name: &'static str, value: f64 },

    /// A metric configuration document could not be parsed.
    #[cfg(feature = "serde_json")]
    #[error("invalid metric configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
