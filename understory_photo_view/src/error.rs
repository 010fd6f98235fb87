// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors surfaced by configuration and explicit scale requests.
///
/// Gesture input never produces an error: continuous gestures are clamped
/// instead of rejected. Absent content is not an error either; operations that
/// need an attached image simply do nothing.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    /// The minimum scale must be finite and strictly positive.
    #[error("minimum scale must be finite and greater than zero, got {minimum}")]
    InvalidMinimumScale {
        /// Rejected minimum.
        minimum: f64,
    },

    /// The minimum scale exceeds the medium scale.
    #[error("minimum scale {minimum} must not exceed medium scale {medium}")]
    MinimumAboveMedium {
        /// Rejected minimum.
        minimum: f64,
        /// Medium it was checked against.
        medium: f64,
    },

    /// The medium scale exceeds the maximum scale.
    #[error("medium scale {medium} must not exceed maximum scale {maximum}")]
    MediumAboveMaximum {
        /// Rejected medium.
        medium: f64,
        /// Maximum it was checked against.
        maximum: f64,
    },

    /// An explicit scale request fell outside the configured limits.
    #[error("scale {scale} is outside of [{minimum}, {maximum}]")]
    ScaleOutOfRange {
        /// Requested scale.
        scale: f64,
        /// Configured minimum.
        minimum: f64,
        /// Configured maximum.
        maximum: f64,
    },

    /// Animation durations must be non-zero.
    #[error("animation duration must be greater than zero")]
    ZeroDuration,

    /// A size-morph endpoint does not show any part of the image.
    #[error("morph frame shows no content")]
    EmptyMorphFrame,
}

/// Result type used throughout this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
