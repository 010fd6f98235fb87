// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Rect, Size, Vec2};

use super::{Step, TaskPhase};

/// Default friction, in pixels per second squared.
pub const DEFAULT_FLING_DECELERATION: f64 = 2000.0;

/// Speed below which a fling axis stops, in pixels per second.
pub const DEFAULT_FLING_STOP_SPEED: f64 = 10.0;

/// Momentum scroll after a fast release.
///
/// The image position is tracked as a scroll offset (`-display.origin()`)
/// confined to the range in which the image still covers the viewport. Each
/// axis decelerates independently at a constant rate and stops when it
/// reaches the end of its range. Steps yield the translation to post-apply
/// to the user transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingAnimation {
    offset: Vec2,
    min: Vec2,
    max: Vec2,
    velocity: Vec2,
    deceleration: f64,
    stop_speed: f64,
    phase: TaskPhase,
}

impl FlingAnimation {
    /// Starts a fling for an image currently displayed at `display` inside a
    /// content area of size `area`.
    ///
    /// `velocity` is the pointer velocity; the image follows it. Returns
    /// `None` when the image cannot scroll on either axis or the velocity is
    /// too small or not finite.
    #[must_use]
    pub fn new(display: Rect, area: Size, velocity: Vec2, deceleration: f64) -> Option<Self> {
        if !display.is_finite() || !velocity.is_finite() || !deceleration.is_finite() {
            return None;
        }
        let start = Vec2::new(-display.x0, -display.y0);
        let (min_x, max_x) = range(start.x, display.width(), area.width);
        let (min_y, max_y) = range(start.y, display.height(), area.height);
        let mut fling = Self {
            offset: start,
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
            // Scrolling moves the offset against the pointer.
            velocity: -velocity,
            deceleration: deceleration.max(0.0),
            stop_speed: DEFAULT_FLING_STOP_SPEED,
            phase: TaskPhase::Scheduled,
        };
        if max_x <= min_x {
            fling.velocity.x = 0.0;
        }
        if max_y <= min_y {
            fling.velocity.y = 0.0;
        }
        if fling.is_at_rest() {
            return None;
        }
        Some(fling)
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> TaskPhase {
        self.phase
    }

    /// Remaining scroll velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Stops the fling where it is.
    pub fn cancel(&mut self) {
        if !self.phase.is_finished() {
            self.phase = TaskPhase::Cancelled;
        }
    }

    /// Advances by `dt` and returns the translation for this frame.
    pub fn step(&mut self, dt: Duration) -> Step<Vec2> {
        if self.phase.is_finished() {
            return Step::Done(Vec2::ZERO);
        }
        let secs = dt.as_secs_f64();
        let previous = self.offset;
        let decel = self.deceleration * secs;

        let (x, vx) = advance_axis(
            self.offset.x,
            self.velocity.x,
            decel,
            secs,
            self.min.x,
            self.max.x,
        );
        let (y, vy) = advance_axis(
            self.offset.y,
            self.velocity.y,
            decel,
            secs,
            self.min.y,
            self.max.y,
        );
        self.offset = Vec2::new(x, y);
        self.velocity = Vec2::new(vx, vy);

        let delta = previous - self.offset;
        if self.is_at_rest() {
            self.phase = TaskPhase::Completed;
            Step::Done(delta)
        } else {
            self.phase = TaskPhase::Stepping;
            Step::Continue(delta)
        }
    }

    fn is_at_rest(&self) -> bool {
        self.velocity.x.abs() < self.stop_speed && self.velocity.y.abs() < self.stop_speed
    }
}

/// Scroll range for one axis. The start position is always inside it so the
/// first frame never jumps.
fn range(start: f64, content: f64, view: f64) -> (f64, f64) {
    let (min, max) = if content > view {
        (0.0, content - view)
    } else {
        (start, start)
    };
    (min.min(start), max.max(start))
}

fn advance_axis(pos: f64, velocity: f64, decel: f64, secs: f64, min: f64, max: f64) -> (f64, f64) {
    let next = pos + velocity * secs;
    let clamped = next.clamp(min, max);
    if clamped != next {
        return (clamped, 0.0);
    }
    let slowed = if velocity > 0.0 {
        (velocity - decel).max(0.0)
    } else {
        (velocity + decel).min(0.0)
    };
    (clamped, slowed)
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::{Rect, Size, Vec2};

    use super::{DEFAULT_FLING_DECELERATION, FlingAnimation};
    use crate::animation::{Step, TaskPhase};

    const FRAME: Duration = Duration::from_millis(16);

    fn run(mut fling: FlingAnimation) -> Vec2 {
        let mut total = Vec2::ZERO;
        for _ in 0..10_000 {
            let step = fling.step(FRAME);
            total += step.value();
            if step.is_done() {
                return total;
            }
        }
        panic!("fling never settled");
    }

    #[test]
    fn fitting_content_does_not_fling() {
        let display = Rect::new(0.0, 250.0, 1000.0, 750.0);
        let area = Size::new(1000.0, 1000.0);
        assert!(FlingAnimation::new(display, area, Vec2::new(3000.0, 3000.0), 2000.0).is_none());
    }

    #[test]
    fn image_follows_pointer_and_stays_in_range() {
        // 2000px wide image showing its left half; fling left reveals the right.
        let display = Rect::new(0.0, 0.0, 2000.0, 1000.0);
        let area = Size::new(1000.0, 1000.0);
        let fling = FlingAnimation::new(display, area, Vec2::new(-8000.0, 0.0), 2000.0).unwrap();
        let total = run(fling);
        assert!(total.x < 0.0);
        assert!(total.x >= -1000.0 - 1e-9);
        assert_eq!(total.y, 0.0);
    }

    #[test]
    fn decelerates_to_rest() {
        let display = Rect::new(-5000.0, 0.0, 5000.0, 1000.0);
        let area = Size::new(1000.0, 1000.0);
        let mut fling =
            FlingAnimation::new(display, area, Vec2::new(500.0, 0.0), DEFAULT_FLING_DECELERATION)
                .unwrap();
        let first = fling.step(FRAME);
        assert!(matches!(first, Step::Continue(d) if d.x > 0.0));
        assert!(fling.velocity().x.abs() < 500.0);
        assert_eq!(fling.phase(), TaskPhase::Stepping);
        let _ = run(fling);
    }

    #[test]
    fn cancelled_fling_yields_nothing() {
        let display = Rect::new(-500.0, 0.0, 1500.0, 1000.0);
        let area = Size::new(1000.0, 1000.0);
        let mut fling = FlingAnimation::new(display, area, Vec2::new(900.0, 0.0), 2000.0).unwrap();
        fling.cancel();
        assert_eq!(fling.phase(), TaskPhase::Cancelled);
        assert_eq!(fling.step(FRAME), Step::Done(Vec2::ZERO));
    }
}
