// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classified gesture input and per-gesture bookkeeping.
//!
//! Tap, long-press, pinch and fling recognition happen in the host. The
//! controller only consumes the classified results as [`GestureEvent`]s,
//! together with the raw touch lifecycle (`Down`, `Up`, `Cancel`).

use kurbo::{Point, Vec2};

/// One classified input event for [`crate::PhotoView::handle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// First pointer went down.
    Down,
    /// Last pointer went up.
    Up,
    /// The gesture was cancelled by the host.
    Cancel,
    /// Pointer moved by `delta`. `downward` is set by the host when the drag
    /// is a pull-down that may become a dismiss.
    Drag {
        /// Movement since the previous drag event, in viewport pixels.
        delta: Vec2,
        /// Whether the host classified this as a downward pull.
        downward: bool,
    },
    /// A pinch started.
    ScaleBegin,
    /// Pinch update.
    Scale {
        /// Relative scale since the previous update.
        factor: f64,
        /// Pinch focus in viewport coordinates.
        focus: Point,
    },
    /// The pinch ended.
    ScaleEnd,
    /// A fling was detected.
    Fling {
        /// Release velocity in pixels per second.
        velocity: Vec2,
        /// Largest number of pointers seen during the gesture.
        pointer_count: u32,
        /// Whether any pointer is still down.
        pointer_still_down: bool,
    },
    /// A single tap was confirmed (not the first half of a double tap).
    SingleTap(Point),
    /// A double tap was confirmed.
    DoubleTap(Point),
    /// A long press was detected.
    LongPress,
}

/// Coarse state of the controller, for hosts that want to reflect it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// Nothing is moving.
    #[default]
    Idle,
    /// A drag gesture is translating the image.
    Dragging,
    /// A pinch is in progress.
    Scaling,
    /// A fling animation is running.
    Flinging,
    /// A zoom animation is running.
    AnimatingZoom,
    /// A snap-back animation is running after a drag.
    SettlingDrag,
    /// A size-morph animation is running.
    Morphing,
}

/// Flags tracked between `Down` and `Up` of a single gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct GestureSession {
    /// A pointer is currently down.
    pub(crate) active: bool,
    /// A pinch is in progress.
    pub(crate) scaling: bool,
    /// At least one drag event has been applied.
    pub(crate) dragged: bool,
    /// At least one pinch update has been seen.
    pub(crate) scaled: bool,
}

impl GestureSession {
    pub(crate) fn begin(&mut self) {
        *self = Self {
            active: true,
            ..Self::default()
        };
    }

    pub(crate) fn end(&mut self) {
        *self = Self::default();
    }

    /// Whether this gesture has moved the image yet.
    pub(crate) fn recognized(&self) -> bool {
        self.dragged || self.scaled || self.scaling
    }
}

#[cfg(test)]
mod tests {
    use super::GestureSession;

    #[test]
    fn session_recognizes_drag_or_scale() {
        let mut session = GestureSession::default();
        session.begin();
        assert!(session.active);
        assert!(!session.recognized());
        session.scaling = true;
        assert!(session.recognized());
        session.end();
        assert_eq!(session, GestureSession::default());
        session.begin();
        session.dragged = true;
        assert!(session.recognized());
    }
}
