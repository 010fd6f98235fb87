// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::Point;

use super::{Interpolator, Step, TaskPhase, Timeline};
use crate::error::{Error, Result};
use crate::geometry::lerp;

/// Animates the user scale from one value to another about a fixed focus.
///
/// Each step yields the absolute scale for that frame. The caller applies the
/// ratio to the current scale about [`ZoomAnimation::focus`].
#[derive(Clone, Copy, Debug)]
pub struct ZoomAnimation {
    from: f64,
    to: f64,
    focus: Point,
    interpolator: Interpolator,
    timeline: Timeline,
}

impl ZoomAnimation {
    /// Creates a zoom from `from` to `to`.
    ///
    /// Fails with [`Error::ZeroDuration`] for a zero duration.
    pub fn new(
        from: f64,
        to: f64,
        focus: Point,
        duration: Duration,
        interpolator: Interpolator,
    ) -> Result<Self> {
        if duration.is_zero() {
            return Err(Error::ZeroDuration);
        }
        Ok(Self {
            from,
            to,
            focus,
            interpolator,
            timeline: Timeline::new(duration),
        })
    }

    /// Point that stays fixed while scaling.
    #[must_use]
    pub fn focus(&self) -> Point {
        self.focus
    }

    /// Scale the animation ends at.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> TaskPhase {
        self.timeline.phase()
    }

    /// Stops the animation where it is.
    pub fn cancel(&mut self) {
        self.timeline.cancel();
    }

    /// Advances by `dt` and returns the scale for this frame.
    pub fn step(&mut self, dt: Duration) -> Step<f64> {
        let (t, done) = self.timeline.advance(dt);
        if done {
            Step::Done(self.to)
        } else {
            Step::Continue(lerp(self.from, self.to, self.interpolator.apply(t)))
        }
    }
}
