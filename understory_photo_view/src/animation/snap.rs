// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::Vec2;

use super::{Step, TaskPhase, Timeline};
use crate::error::{Error, Result};

/// One frame of a snap-back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapStep {
    /// Translation to post-apply to the user transform this frame.
    pub delta: Vec2,
    /// Part of the correction still to be applied after this frame.
    pub remaining: Vec2,
}

/// Linear animation that applies a bounds correction over time.
///
/// Used after a drag release that did not dismiss: the image glides back to
/// its corrected position while `remaining` lets the caller report fading
/// drag progress.
#[derive(Clone, Copy, Debug)]
pub struct SnapBackAnimation {
    correction: Vec2,
    applied: f64,
    timeline: Timeline,
}

impl SnapBackAnimation {
    /// Creates a snap-back that applies `correction` over `duration`.
    pub fn new(correction: Vec2, duration: Duration) -> Result<Self> {
        if duration.is_zero() {
            return Err(Error::ZeroDuration);
        }
        Ok(Self {
            correction,
            applied: 0.0,
            timeline: Timeline::new(duration),
        })
    }

    /// Total correction this animation applies.
    #[must_use]
    pub fn correction(&self) -> Vec2 {
        self.correction
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> TaskPhase {
        self.timeline.phase()
    }

    /// Stops the animation; already applied movement stays.
    pub fn cancel(&mut self) {
        self.timeline.cancel();
    }

    /// Advances by `dt`.
    pub fn step(&mut self, dt: Duration) -> Step<SnapStep> {
        let (t, done) = self.timeline.advance(dt);
        let delta = self.correction * (t - self.applied);
        self.applied = t;
        let frame = SnapStep {
            delta,
            remaining: self.correction * (1.0 - t),
        };
        if done {
            Step::Done(frame)
        } else {
            Step::Continue(frame)
        }
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::Vec2;

    use super::SnapBackAnimation;
    use crate::animation::Step;

    #[test]
    fn deltas_sum_to_correction() {
        let correction = Vec2::new(30.0, -400.0);
        let mut snap = SnapBackAnimation::new(correction, Duration::from_millis(300)).unwrap();
        let mut total = Vec2::ZERO;
        let mut last_remaining = f64::INFINITY;
        loop {
            let step = snap.step(Duration::from_millis(16));
            let frame = step.value();
            total += frame.delta;
            assert!(frame.remaining.y.abs() <= last_remaining);
            last_remaining = frame.remaining.y.abs();
            if let Step::Done(frame) = step {
                assert_eq!(frame.remaining, Vec2::ZERO);
                break;
            }
        }
        assert!((total - correction).hypot() < 1e-9);
    }
}
