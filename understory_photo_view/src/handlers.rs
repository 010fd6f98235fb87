// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional observer slots.
//!
//! Each notification has its own independently settable slot. Emitting into
//! an empty slot does nothing; a registered handler is called synchronously,
//! exactly once per notification.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// A single optional handler taking `A` and returning `R`.
pub struct Slot<A, R = ()> {
    f: Option<Box<dyn FnMut(A) -> R>>,
}

impl<A, R> Slot<A, R> {
    /// An empty slot.
    #[must_use]
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Installs `f`, replacing any previous handler.
    pub fn set<F>(&mut self, f: F)
    where
        F: FnMut(A) -> R + 'static,
    {
        self.f = Some(Box::new(f));
    }

    /// Removes the handler.
    pub fn clear(&mut self) {
        self.f = None;
    }

    /// Returns `true` if a handler is installed.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.f.is_some()
    }

    /// Calls the handler, if any.
    pub fn call(&mut self, arg: A) -> Option<R> {
        self.f.as_mut().map(|f| f(arg))
    }
}

impl<A, R> Default for Slot<A, R> {
    fn default() -> Self {
        Self::none()
    }
}

impl<A, R> fmt::Debug for Slot<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot").field("set", &self.is_set()).finish()
    }
}

/// Every notification the controller can emit.
///
/// Register handlers through the `on_*` methods, usually via
/// [`crate::PhotoView::handlers_mut`].
#[derive(Debug, Default)]
pub struct Handlers {
    pub(crate) draw_matrix: Slot<Affine>,
    pub(crate) matrix_changed: Slot<Rect>,
    pub(crate) scale_changed: Slot<(f64, Point)>,
    pub(crate) photo_tap: Slot<(f64, f64)>,
    pub(crate) outside_tap: Slot<()>,
    pub(crate) single_fling: Slot<Vec2, bool>,
    pub(crate) click: Slot<()>,
    pub(crate) long_click: Slot<()>,
    pub(crate) drag_progress: Slot<f64>,
    pub(crate) dismiss: Slot<()>,
    pub(crate) parent_intercept: Slot<bool>,
    pub(crate) viewport_resized: Slot<Size>,
}

impl Handlers {
    /// Receives the composed draw matrix every time it is published. This is
    /// the display surface sink.
    pub fn on_draw_matrix(&mut self, f: impl FnMut(Affine) + 'static) -> &mut Self {
        self.draw_matrix.set(f);
        self
    }

    /// Receives the displayed image rectangle every time the draw matrix is
    /// published.
    pub fn on_matrix_changed(&mut self, f: impl FnMut(Rect) + 'static) -> &mut Self {
        self.matrix_changed.set(f);
        self
    }

    /// Receives the raw pinch factor and focus of each scale update, whether
    /// or not the update was applied.
    pub fn on_scale_changed(&mut self, mut f: impl FnMut(f64, Point) + 'static) -> &mut Self {
        self.scale_changed.set(move |(factor, focus)| f(factor, focus));
        self
    }

    /// Single tap inside the image, as fractions of its width and height.
    pub fn on_photo_tap(&mut self, mut f: impl FnMut(f64, f64) + 'static) -> &mut Self {
        self.photo_tap.set(move |(x, y)| f(x, y));
        self
    }

    /// Single tap outside the image.
    pub fn on_outside_tap(&mut self, mut f: impl FnMut() + 'static) -> &mut Self {
        self.outside_tap.set(move |()| f());
        self
    }

    /// Single-finger fling while not zoomed in. Return `true` to consume it;
    /// otherwise the controller flings the image itself.
    pub fn on_single_fling(&mut self, f: impl FnMut(Vec2) -> bool + 'static) -> &mut Self {
        self.single_fling.set(f);
        self
    }

    /// Any confirmed single tap that is not suppressed by a drag.
    pub fn on_click(&mut self, mut f: impl FnMut() + 'static) -> &mut Self {
        self.click.set(move |()| f());
        self
    }

    /// Long press.
    pub fn on_long_click(&mut self, mut f: impl FnMut() + 'static) -> &mut Self {
        self.long_click.set(move |()| f());
        self
    }

    /// Pull-down progress toward dismissal, in `[0, 1]`.
    pub fn on_drag_progress(&mut self, f: impl FnMut(f64) + 'static) -> &mut Self {
        self.drag_progress.set(f);
        self
    }

    /// Dismissal was committed.
    pub fn on_dismiss(&mut self, mut f: impl FnMut() + 'static) -> &mut Self {
        self.dismiss.set(move |()| f());
        self
    }

    /// `true` asks the parent container not to intercept touches, `false`
    /// hands them back.
    pub fn on_parent_intercept(&mut self, f: impl FnMut(bool) + 'static) -> &mut Self {
        self.parent_intercept.set(f);
        self
    }

    /// Interpolated viewport size during a size morph.
    pub fn on_viewport_resized(&mut self, f: impl FnMut(Size) + 'static) -> &mut Self {
        self.viewport_resized.set(f);
        self
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use super::{Handlers, Slot};

    #[test]
    fn empty_slot_is_silent() {
        let mut slot: Slot<u32, u32> = Slot::none();
        assert_eq!(slot.call(3), None);
        slot.set(|x| x * 2);
        assert_eq!(slot.call(3), Some(6));
        slot.clear();
        assert!(!slot.is_set());
    }

    #[test]
    fn handlers_fire_once_per_call() {
        let count = Rc::new(Cell::new(0));
        let mut handlers = Handlers::default();
        let seen = count.clone();
        handlers.on_dismiss(move || seen.set(seen.get() + 1));
        handlers.dismiss.call(());
        assert_eq!(count.get(), 1);
        assert_eq!(handlers.outside_tap.call(()), None);
    }
}
