// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::animation::{DEFAULT_FLING_DECELERATION, Interpolator};
use crate::dismiss::DEFAULT_DISMISS_DISTANCE;
use crate::error::{Error, Result};
use crate::fit::FitPolicy;
use crate::limits::ScaleLimits;

/// Default duration of double-tap and explicit zoom animations.
pub const DEFAULT_ZOOM_DURATION: Duration = Duration::from_millis(200);
/// Default duration of the snap-back after a non-dismissing drag.
pub const DEFAULT_SNAP_BACK_DURATION: Duration = Duration::from_millis(300);
/// Default duration of a size morph.
pub const DEFAULT_MORPH_DURATION: Duration = Duration::from_millis(300);

/// Settings for a [`crate::PhotoView`].
///
/// Builder methods that can produce an invalid combination return
/// [`Result`]; the rest return `Self`.
///
/// ```
/// use core::time::Duration;
/// use understory_photo_view::{FitPolicy, PhotoViewConfig};
///
/// let config = PhotoViewConfig::default()
///     .with_scale_levels(1.0, 2.0, 4.0)?
///     .with_zoom_duration(Duration::from_millis(250))?
///     .with_fit(FitPolicy::CenterInside)
///     .with_dismiss_distance(600.0);
/// assert_eq!(config.limits.medium(), 2.0);
/// # Ok::<(), understory_photo_view::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PhotoViewConfig {
    /// Minimum, medium and maximum user scale.
    pub limits: ScaleLimits,
    /// Duration of zoom animations. Never zero.
    pub zoom_duration: Duration,
    /// Curve used by zoom and morph animations.
    pub interpolator: Interpolator,
    /// Layout of the image inside the viewport.
    pub fit: FitPolicy,
    /// Base rotation in degrees.
    pub base_rotation: f64,
    /// Hand touches back to the parent when panning against a pinned edge.
    pub parent_intercept_on_edge: bool,
    /// Whether a long enough pull-down dismisses.
    pub dismiss_enabled: bool,
    /// Pull distance that commits a dismiss.
    pub dismiss_distance: f64,
    /// Whether gestures are handled at all.
    pub zoomable: bool,
    /// Duration of the snap-back after a drag. Never zero.
    pub snap_back_duration: Duration,
    /// Duration of size morphs. Never zero.
    pub morph_duration: Duration,
    /// Fling friction in pixels per second squared.
    pub fling_deceleration: f64,
}

impl PhotoViewConfig {
    /// Replaces the scale limits.
    #[must_use]
    pub fn with_limits(mut self, limits: ScaleLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validates and sets all three scale levels.
    pub fn with_scale_levels(mut self, minimum: f64, medium: f64, maximum: f64) -> Result<Self> {
        self.limits = ScaleLimits::new(minimum, medium, maximum)?;
        Ok(self)
    }

    /// Sets the zoom animation duration.
    pub fn with_zoom_duration(mut self, duration: Duration) -> Result<Self> {
        self.zoom_duration = non_zero(duration)?;
        Ok(self)
    }

    /// Sets the snap-back duration.
    pub fn with_snap_back_duration(mut self, duration: Duration) -> Result<Self> {
        self.snap_back_duration = non_zero(duration)?;
        Ok(self)
    }

    /// Sets the size-morph duration.
    pub fn with_morph_duration(mut self, duration: Duration) -> Result<Self> {
        self.morph_duration = non_zero(duration)?;
        Ok(self)
    }

    /// Sets the animation curve.
    #[must_use]
    pub fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    /// Sets the fit policy.
    #[must_use]
    pub fn with_fit(mut self, fit: FitPolicy) -> Self {
        self.fit = fit;
        self
    }

    /// Sets the base rotation in degrees.
    #[must_use]
    pub fn with_base_rotation(mut self, degrees: f64) -> Self {
        self.base_rotation = degrees;
        self
    }

    /// Enables or disables edge handoff to the parent.
    #[must_use]
    pub fn with_parent_intercept_on_edge(mut self, enabled: bool) -> Self {
        self.parent_intercept_on_edge = enabled;
        self
    }

    /// Enables or disables drag-to-dismiss.
    #[must_use]
    pub fn with_dismiss_enabled(mut self, enabled: bool) -> Self {
        self.dismiss_enabled = enabled;
        self
    }

    /// Sets the dismiss distance. Negative values behave like zero.
    #[must_use]
    pub fn with_dismiss_distance(mut self, distance: f64) -> Self {
        self.dismiss_distance = distance;
        self
    }

    /// Enables or disables gesture handling.
    #[must_use]
    pub fn with_zoomable(mut self, zoomable: bool) -> Self {
        self.zoomable = zoomable;
        self
    }

    /// Sets fling friction.
    #[must_use]
    pub fn with_fling_deceleration(mut self, deceleration: f64) -> Self {
        self.fling_deceleration = deceleration;
        self
    }
}

impl Default for PhotoViewConfig {
    fn default() -> Self {
        Self {
            limits: ScaleLimits::default(),
            zoom_duration: DEFAULT_ZOOM_DURATION,
            interpolator: Interpolator::AccelerateDecelerate,
            fit: FitPolicy::FitCenter,
            base_rotation: 0.0,
            parent_intercept_on_edge: true,
            dismiss_enabled: true,
            dismiss_distance: DEFAULT_DISMISS_DISTANCE,
            zoomable: true,
            snap_back_duration: DEFAULT_SNAP_BACK_DURATION,
            morph_duration: DEFAULT_MORPH_DURATION,
            fling_deceleration: DEFAULT_FLING_DECELERATION,
        }
    }
}

fn non_zero(duration: Duration) -> Result<Duration> {
    if duration.is_zero() {
        Err(Error::ZeroDuration)
    } else {
        Ok(duration)
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::*;

    #[test]
    fn defaults() {
        let config = PhotoViewConfig::default();
        assert_eq!(config.limits, ScaleLimits::default());
        assert_eq!(config.zoom_duration, Duration::from_millis(200));
        assert_eq!(config.fit, FitPolicy::FitCenter);
        assert_eq!(config.dismiss_distance, 500.0);
        assert!(config.zoomable && config.dismiss_enabled && config.parent_intercept_on_edge);
    }

    #[test]
    fn validating_builders_reject_bad_input() {
        let config = PhotoViewConfig::default();
        assert_eq!(
            config.with_zoom_duration(Duration::ZERO).unwrap_err(),
            Error::ZeroDuration
        );
        assert!(config.with_snap_back_duration(Duration::ZERO).is_err());
        assert!(config.with_morph_duration(Duration::ZERO).is_err());
        assert!(config.with_scale_levels(2.0, 1.0, 3.0).is_err());
        assert!(config.with_scale_levels(0.5, 1.0, 8.0).is_ok());
    }
}
