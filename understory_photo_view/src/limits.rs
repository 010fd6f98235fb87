// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::{Error, Result};

/// Default minimum user scale.
pub const DEFAULT_MIN_SCALE: f64 = 1.0;
/// Default medium user scale (first double-tap stop).
pub const DEFAULT_MID_SCALE: f64 = 1.75;
/// Default maximum user scale.
pub const DEFAULT_MAX_SCALE: f64 = 3.0;

/// Slack used when comparing a measured scale against a configured level.
pub const SCALE_TOLERANCE: f64 = 1e-6;

/// The three user scale levels: minimum, medium and maximum.
///
/// Scales are relative to the base (fit) transform, so `1.0` means "exactly
/// as the fit policy lays the image out". The levels always satisfy
/// `0 < minimum <= medium <= maximum`; construction rejects anything else
/// instead of reordering it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    minimum: f64,
    medium: f64,
    maximum: f64,
}

impl ScaleLimits {
    /// Validates and creates a set of scale levels.
    pub fn new(minimum: f64, medium: f64, maximum: f64) -> Result<Self> {
        if !minimum.is_finite() || minimum <= 0.0 {
            return Err(Error::InvalidMinimumScale { minimum });
        }
        if medium.is_nan() || minimum > medium {
            return Err(Error::MinimumAboveMedium { minimum, medium });
        }
        if !maximum.is_finite() || medium > maximum {
            return Err(Error::MediumAboveMaximum { medium, maximum });
        }
        Ok(Self {
            minimum,
            medium,
            maximum,
        })
    }

    /// Minimum scale.
    #[must_use]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Medium scale.
    #[must_use]
    pub fn medium(&self) -> f64 {
        self.medium
    }

    /// Maximum scale.
    #[must_use]
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Returns a copy with a new minimum, validating the resulting triple.
    pub fn with_minimum(self, minimum: f64) -> Result<Self> {
        Self::new(minimum, self.medium, self.maximum)
    }

    /// Returns a copy with a new medium, validating the resulting triple.
    pub fn with_medium(self, medium: f64) -> Result<Self> {
        Self::new(self.minimum, medium, self.maximum)
    }

    /// Returns a copy with a new maximum, validating the resulting triple.
    pub fn with_maximum(self, maximum: f64) -> Result<Self> {
        Self::new(self.minimum, self.medium, maximum)
    }

    /// Returns `true` if `scale` lies within `[minimum, maximum]`.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.minimum && scale <= self.maximum
    }

    /// Checks an explicit scale request.
    pub fn check(&self, scale: f64) -> Result<f64> {
        if self.contains(scale) {
            Ok(scale)
        } else {
            Err(Error::ScaleOutOfRange {
                scale,
                minimum: self.minimum,
                maximum: self.maximum,
            })
        }
    }

    /// Whether a gesture may multiply `current` by `factor`.
    ///
    /// The clamp is asymmetric: shrinking is allowed while above the minimum
    /// and growing is allowed while below the maximum, so a single step can
    /// overshoot a limit but a pinch can always relax back toward the range.
    #[must_use]
    pub fn permits(&self, current: f64, factor: f64) -> bool {
        (current < self.maximum || factor < 1.0) && (current > self.minimum || factor > 1.0)
    }

    /// Next double-tap stop: minimum -> medium -> maximum -> minimum.
    ///
    /// A scale within [`SCALE_TOLERANCE`] of a stop counts as sitting on it,
    /// so the rounding left behind by an animation does not repeat a stop.
    #[must_use]
    pub fn double_tap_target(&self, current: f64) -> f64 {
        if current < self.medium - SCALE_TOLERANCE {
            self.medium
        } else if current < self.maximum - SCALE_TOLERANCE {
            self.maximum
        } else {
            self.minimum
        }
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MIN_SCALE,
            medium: DEFAULT_MID_SCALE,
            maximum: DEFAULT_MAX_SCALE,
        }
    }
}
