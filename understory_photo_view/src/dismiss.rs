// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-dismiss tracking.
//!
//! While the image is dragged downward it is allowed to leave the viewport
//! top. The vertical bounds correction needed to bring it back measures how
//! far it has been pulled: a negative correction means "pulled down past the
//! top". [`DragToDismiss`] turns that measurement into a progress fraction
//! and, on release, into a [`ReleaseOutcome`].
//!
//! ```
//! use kurbo::Vec2;
//! use understory_photo_view::dismiss::{DragToDismiss, ReleaseOutcome};
//!
//! let mut tracker = DragToDismiss::new(true, 600.0);
//! tracker.begin();
//! assert_eq!(tracker.progress(-300.0), 0.5);
//! assert_eq!(tracker.release(Vec2::new(0.0, -650.0)), ReleaseOutcome::Dismiss);
//! ```

use kurbo::Vec2;

/// Default pull distance, in device pixels, that commits a dismiss.
pub const DEFAULT_DISMISS_DISTANCE: f64 = 500.0;

/// What a finished drag should turn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReleaseOutcome {
    /// No downward drag was in progress.
    NotDragging,
    /// The pull exceeded the threshold; the host should close the image.
    Dismiss,
    /// Animate the given correction back to zero.
    SnapBack(Vec2),
    /// Already in bounds; nothing to animate.
    Settled,
}

/// Accumulated state for one drag-to-dismiss gesture sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragToDismiss {
    enabled: bool,
    distance: f64,
    dragging: bool,
    dismissed: bool,
}

impl DragToDismiss {
    /// Creates a tracker. Negative or non-finite distances become zero.
    #[must_use]
    pub fn new(enabled: bool, distance: f64) -> Self {
        Self {
            enabled,
            distance: sanitize(distance),
            dragging: false,
            dismissed: false,
        }
    }

    /// Whether dismissal can be committed at all.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables dismissal. Snap-back still happens when disabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Pull distance that commits a dismiss.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Changes the pull distance.
    pub fn set_distance(&mut self, distance: f64) {
        self.distance = sanitize(distance);
    }

    /// Clears per-gesture state at touch-down.
    pub fn reset(&mut self) {
        self.dragging = false;
        self.dismissed = false;
    }

    /// Marks a downward drag as in progress.
    pub fn begin(&mut self) {
        self.dragging = true;
    }

    /// Returns `true` while a downward drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns `true` if the current gesture committed a dismiss.
    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Progress toward dismissal for a vertical correction, in `[0, 1]`.
    ///
    /// Only a negative correction (content pulled below the top edge)
    /// contributes.
    #[must_use]
    pub fn progress(&self, correction_y: f64) -> f64 {
        if !correction_y.is_finite() || correction_y >= 0.0 {
            return 0.0;
        }
        if self.distance <= 0.0 {
            return 1.0;
        }
        (-correction_y / self.distance).min(1.0)
    }

    /// Ends the drag and decides between dismissing and snapping back.
    ///
    /// `correction` is the bounds correction for the released position.
    pub fn release(&mut self, correction: Vec2) -> ReleaseOutcome {
        if !self.dragging {
            return ReleaseOutcome::NotDragging;
        }
        self.dragging = false;
        if self.enabled && correction.y < 0.0 && correction.y <= -self.distance {
            self.dismissed = true;
            return ReleaseOutcome::Dismiss;
        }
        if correction.x == 0.0 && correction.y == 0.0 {
            ReleaseOutcome::Settled
        } else {
            ReleaseOutcome::SnapBack(correction)
        }
    }
}

impl Default for DragToDismiss {
    fn default() -> Self {
        Self::new(true, DEFAULT_DISMISS_DISTANCE)
    }
}

fn sanitize(distance: f64) -> f64 {
    if distance.is_finite() {
        distance.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;

    #[test]
    fn progress_counts_only_pull_below_top() {
        let tracker = DragToDismiss::new(true, 500.0);
        assert_eq!(tracker.progress(-250.0), 0.5);
        assert_eq!(tracker.progress(-900.0), 1.0);
        assert_eq!(tracker.progress(40.0), 0.0);
        assert_eq!(tracker.progress(0.0), 0.0);
        assert_eq!(tracker.progress(f64::NAN), 0.0);
    }

    #[test]
    fn release_past_threshold_dismisses_once() {
        let mut tracker = DragToDismiss::new(true, 600.0);
        tracker.begin();
        assert_eq!(tracker.release(Vec2::new(0.0, -650.0)), ReleaseOutcome::Dismiss);
        assert!(tracker.is_dismissed());
        assert_eq!(
            tracker.release(Vec2::new(0.0, -650.0)),
            ReleaseOutcome::NotDragging
        );
    }

    #[test]
    fn release_short_of_threshold_snaps_back() {
        let mut tracker = DragToDismiss::new(true, 600.0);
        tracker.begin();
        assert_eq!(
            tracker.release(Vec2::new(0.0, -400.0)),
            ReleaseOutcome::SnapBack(Vec2::new(0.0, -400.0))
        );
        assert!(!tracker.is_dismissed());
    }

    #[test]
    fn disabled_tracker_never_dismisses() {
        let mut tracker = DragToDismiss::new(false, 100.0);
        tracker.begin();
        assert_eq!(
            tracker.release(Vec2::new(0.0, -1000.0)),
            ReleaseOutcome::SnapBack(Vec2::new(0.0, -1000.0))
        );
    }

    #[test]
    fn in_bounds_release_settles_and_reset_clears() {
        let mut tracker = DragToDismiss::default();
        tracker.begin();
        assert_eq!(tracker.release(Vec2::ZERO), ReleaseOutcome::Settled);
        tracker.begin();
        let _ = tracker.release(Vec2::new(0.0, -600.0));
        assert!(tracker.is_dismissed());
        tracker.reset();
        assert!(!tracker.is_dismissed());
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn zero_distance_needs_an_actual_pull() {
        let mut tracker = DragToDismiss::new(true, -5.0);
        assert_eq!(tracker.distance(), 0.0);
        tracker.begin();
        assert_eq!(tracker.release(Vec2::ZERO), ReleaseOutcome::Settled);
        tracker.begin();
        assert_eq!(tracker.release(Vec2::new(0.0, -1.0)), ReleaseOutcome::Dismiss);
    }
}
