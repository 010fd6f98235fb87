// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Point, Rect, Size};

use super::{Interpolator, Step, TaskPhase, Timeline};
use crate::error::{Error, Result};
use crate::fit::FitPolicy;
use crate::geometry::{lerp, lerp_rect, lerp_size};

/// One end of a size morph: a viewport size and how the image is fitted
/// into it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphFrame {
    /// Viewport size at this end.
    pub viewport: Size,
    /// Fit policy at this end.
    pub fit: FitPolicy,
}

impl MorphFrame {
    /// Creates a frame.
    #[must_use]
    pub fn new(viewport: Size, fit: FitPolicy) -> Self {
        Self { viewport, fit }
    }
}

/// Both ends of a size morph, e.g. thumbnail and full screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphContext {
    /// Presentation at the start of the transition.
    pub start: MorphFrame,
    /// Presentation at the end of the transition.
    pub end: MorphFrame,
}

impl MorphContext {
    /// Creates a context going from `start` to `end`.
    #[must_use]
    pub fn new(start: MorphFrame, end: MorphFrame) -> Self {
        Self { start, end }
    }

    /// The same transition played backwards.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

/// One frame of a size morph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphStep {
    /// Viewport size for this frame.
    pub viewport: Size,
    /// Fit policy for this frame: an interpolated [`FitPolicy::Custom`]
    /// framing while running, the end policy on the last frame.
    pub fit: FitPolicy,
    /// User scale for this frame.
    pub scale: f64,
    /// Point the user scale is applied about.
    pub anchor: Point,
}

/// Animated transition between two presentations of the same image.
///
/// Matrices are never interpolated directly. Each end is resolved into an
/// explicit `(source, target)` framing, and each frame rebuilds the base
/// transform from the interpolated framing. Meanwhile the user scale moves
/// toward its end value about a fixed anchor. Both the displayed scale and the
/// anchor therefore change continuously, and the first and last frames match
/// the standard layouts exactly.
#[derive(Clone, Copy, Debug)]
pub struct MorphAnimation {
    context: MorphContext,
    start: (Rect, Rect),
    end: (Rect, Rect),
    from_scale: f64,
    to_scale: f64,
    anchor: Point,
    interpolator: Interpolator,
    timeline: Timeline,
}

impl MorphAnimation {
    /// Resolves both ends of `context` for an image of size `intrinsic`.
    ///
    /// Fails with [`Error::ZeroDuration`] for a zero duration and
    /// [`Error::EmptyMorphFrame`] when either end shows nothing.
    pub fn new(
        context: MorphContext,
        intrinsic: Size,
        rotation_degrees: f64,
        from_scale: f64,
        to_scale: f64,
        anchor: Point,
        duration: Duration,
        interpolator: Interpolator,
    ) -> Result<Self> {
        if duration.is_zero() {
            return Err(Error::ZeroDuration);
        }
        let resolve = |frame: MorphFrame| {
            frame
                .fit
                .frame(frame.viewport, intrinsic, rotation_degrees)
                .ok_or(Error::EmptyMorphFrame)
        };
        Ok(Self {
            context,
            start: resolve(context.start)?,
            end: resolve(context.end)?,
            from_scale,
            to_scale,
            anchor,
            interpolator,
            timeline: Timeline::new(duration),
        })
    }

    /// The transition being played.
    #[must_use]
    pub fn context(&self) -> MorphContext {
        self.context
    }

    /// Whether the user scale changes during the transition. When it starts
    /// at its end value there is nothing to keep in bounds.
    #[must_use]
    pub fn changes_scale(&self) -> bool {
        self.from_scale != self.to_scale
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> TaskPhase {
        self.timeline.phase()
    }

    /// Stops the transition where it is.
    pub fn cancel(&mut self) {
        self.timeline.cancel();
    }

    /// Advances by `dt`.
    pub fn step(&mut self, dt: Duration) -> Step<MorphStep> {
        let (t, done) = self.timeline.advance(dt);
        self.frame(self.interpolator.apply(t), done)
    }

    /// Jumps to `fraction` of the transition, for hosts that run their own
    /// animator. The fraction is used as the progress as is, without the
    /// interpolator; `1.0` yields the final frame.
    pub fn seek(&mut self, fraction: f64) -> Step<MorphStep> {
        let (p, done) = self.timeline.seek(fraction);
        self.frame(p, done)
    }

    fn frame(&self, p: f64, done: bool) -> Step<MorphStep> {
        if done {
            return Step::Done(MorphStep {
                viewport: self.context.end.viewport,
                fit: self.context.end.fit,
                scale: self.to_scale,
                anchor: self.anchor,
            });
        }
        Step::Continue(MorphStep {
            viewport: lerp_size(self.context.start.viewport, self.context.end.viewport, p),
            fit: FitPolicy::Custom {
                source: lerp_rect(self.start.0, self.end.0, p),
                target: lerp_rect(self.start.1, self.end.1, p),
            },
            scale: lerp(self.from_scale, self.to_scale, p),
            anchor: self.anchor,
        })
    }
}
