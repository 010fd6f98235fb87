// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-driven animation tasks.
//!
//! Each task is a plain value that the controller polls once per frame with
//! the elapsed time since the previous frame. A task produces one value per
//! step and reports whether it wants another frame; it never touches the
//! transform itself.
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use understory_photo_view::animation::{Interpolator, Step, ZoomAnimation};
//!
//! let mut zoom = ZoomAnimation::new(
//!     1.0,
//!     2.0,
//!     Point::new(50.0, 50.0),
//!     Duration::from_millis(200),
//!     Interpolator::Linear,
//! )
//! .unwrap();
//! assert_eq!(zoom.step(Duration::from_millis(100)), Step::Continue(1.5));
//! assert_eq!(zoom.step(Duration::from_millis(100)), Step::Done(2.0));
//! ```

mod easing;
mod fling;
mod morph;
mod snap;
mod zoom;

use core::time::Duration;

pub use easing::Interpolator;
pub use fling::{DEFAULT_FLING_DECELERATION, DEFAULT_FLING_STOP_SPEED, FlingAnimation};
pub use morph::{MorphAnimation, MorphContext, MorphFrame, MorphStep};
pub use snap::{SnapBackAnimation, SnapStep};
pub use zoom::ZoomAnimation;

/// Result of one animation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step<T> {
    /// Apply the value and schedule another frame.
    Continue(T),
    /// Apply the value; the task is finished.
    Done(T),
}

impl<T> Step<T> {
    /// The produced value.
    pub fn value(self) -> T {
        match self {
            Self::Continue(v) | Self::Done(v) => v,
        }
    }

    /// Returns `true` for [`Step::Done`].
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// Lifecycle of an animation task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TaskPhase {
    /// Created but not stepped yet.
    #[default]
    Scheduled,
    /// Stepped at least once and still running.
    Stepping,
    /// Ran to completion.
    Completed,
    /// Stopped before completion.
    Cancelled,
}

impl TaskPhase {
    /// Returns `true` once the task will produce no more steps.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Elapsed time against a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Timeline {
    elapsed: Duration,
    duration: Duration,
    phase: TaskPhase,
}

impl Timeline {
    /// Callers guarantee a non-zero duration.
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
            phase: TaskPhase::Scheduled,
        }
    }

    /// Advances by `dt` and returns linear time in `[0, 1]` plus whether this
    /// is the final step.
    pub(crate) fn advance(&mut self, dt: Duration) -> (f64, bool) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.position()
    }

    /// Jumps to `fraction` of the duration, clamped to `[0, 1]` (NaN is 0).
    pub(crate) fn seek(&mut self, fraction: f64) -> (f64, bool) {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.elapsed = self.duration.mul_f64(fraction).min(self.duration);
        self.position()
    }

    fn position(&mut self) -> (f64, bool) {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let done = self.elapsed >= self.duration;
        self.phase = if done {
            TaskPhase::Completed
        } else {
            TaskPhase::Stepping
        };
        (t.min(1.0), done)
    }

    pub(crate) fn cancel(&mut self) {
        if !self.phase.is_finished() {
            self.phase = TaskPhase::Cancelled;
        }
    }

    pub(crate) fn phase(&self) -> TaskPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::{Step, TaskPhase, Timeline};

    #[test]
    fn timeline_walks_phases() {
        let mut timeline = Timeline::new(Duration::from_millis(100));
        assert_eq!(timeline.phase(), TaskPhase::Scheduled);
        let (t, done) = timeline.advance(Duration::from_millis(25));
        assert!((t - 0.25).abs() < 1e-12);
        assert!(!done);
        assert_eq!(timeline.phase(), TaskPhase::Stepping);
        let (t, done) = timeline.advance(Duration::from_secs(5));
        assert_eq!(t, 1.0);
        assert!(done);
        assert_eq!(timeline.phase(), TaskPhase::Completed);
        timeline.cancel();
        assert_eq!(timeline.phase(), TaskPhase::Completed);
    }

    #[test]
    fn seek_jumps_and_clamps() {
        let mut timeline = Timeline::new(Duration::from_millis(200));
        let (t, done) = timeline.seek(0.5);
        assert!((t - 0.5).abs() < 1e-9);
        assert!(!done);
        let (t, done) = timeline.seek(f64::NAN);
        assert_eq!((t, done), (0.0, false));
        let (t, done) = timeline.seek(7.0);
        assert_eq!((t, done), (1.0, true));
        assert_eq!(timeline.phase(), TaskPhase::Completed);
    }

    #[test]
    fn cancel_stops_running_task() {
        let mut timeline = Timeline::new(Duration::from_millis(100));
        timeline.advance(Duration::from_millis(10));
        timeline.cancel();
        assert!(timeline.phase().is_finished());
        assert_eq!(timeline.phase(), TaskPhase::Cancelled);
    }

    #[test]
    fn step_value_and_done() {
        assert_eq!(Step::Continue(3).value(), 3);
        assert!(Step::Done(()).is_done());
        assert!(!Step::Continue(()).is_done());
    }
}
