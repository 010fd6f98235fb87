// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Base and user transforms for one image.

use core::f64::consts::PI;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::error::Result;
use crate::fit::FitPolicy;
use crate::geometry::{is_invertible, is_positive, map_rect, rect_at_origin, scale_magnitude};
use crate::limits::ScaleLimits;
use crate::viewport::Viewport;

/// What happened to a gesture-driven scale request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleOutcome {
    /// The user transform was scaled.
    Applied,
    /// The request would push further past a limit and was dropped.
    Clamped,
    /// No content, or the factor/focus was not usable.
    Ignored,
}

/// Base and user transforms for a single image.
///
/// The base transform lays the image out according to the [`FitPolicy`]; the
/// user transform accumulates pan, zoom and rotation on top of it. The draw
/// matrix is always derived as `user * base` (base first, then user) and is
/// never stored. Everything is in content-area coordinates, with the origin
/// at the top-left corner inside the viewport padding.
///
/// `TransformState` does no bounds enforcement of its own; see
/// [`crate::bounds`].
#[derive(Clone, Debug)]
pub struct TransformState {
    content: Option<Size>,
    viewport: Viewport,
    fit: FitPolicy,
    base_rotation: f64,
    limits: ScaleLimits,
    base: Affine,
    user: Affine,
}

impl TransformState {
    /// Creates an empty state with no content attached.
    #[must_use]
    pub fn new(limits: ScaleLimits, fit: FitPolicy) -> Self {
        Self {
            content: None,
            viewport: Viewport::default(),
            fit,
            base_rotation: 0.0,
            limits,
            base: Affine::IDENTITY,
            user: Affine::IDENTITY,
        }
    }

    /// Intrinsic size of the attached image, if any.
    #[must_use]
    pub fn content(&self) -> Option<Size> {
        self.content
    }

    /// Attaches (or clears) content and resets the user transform.
    ///
    /// Empty sizes count as no content.
    pub fn set_content(&mut self, content: Option<Size>) {
        self.content = content.filter(|s| is_positive(*s));
        self.rebuild_base();
        self.reset_user();
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replaces the viewport and recomputes the base transform.
    ///
    /// The user transform is kept, so zoom and pan survive a size change.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.rebuild_base();
    }

    /// Current fit policy.
    #[must_use]
    pub fn fit(&self) -> FitPolicy {
        self.fit
    }

    /// Changes the fit policy and recomputes the base transform.
    pub fn set_fit(&mut self, fit: FitPolicy) {
        self.fit = fit;
        self.rebuild_base();
    }

    /// Sets policy, viewport size and intrinsic size at once and returns the
    /// resulting base transform.
    ///
    /// The current padding still applies and the user transform is left
    /// untouched. Returns `None` (leaving the identity as base) when either
    /// size is empty.
    pub fn set_base(&mut self, fit: FitPolicy, viewport: Size, intrinsic: Size) -> Option<Affine> {
        self.fit = fit;
        self.viewport.size = viewport;
        self.content = Some(intrinsic).filter(|s| is_positive(*s));
        self.rebuild_base();
        self.content.map(|_| self.base)
    }

    /// Base rotation in degrees, in `(-360, 360)`.
    #[must_use]
    pub fn base_rotation(&self) -> f64 {
        self.base_rotation
    }

    /// Stores a new base rotation, recomputes the base transform and resets
    /// the user transform to that rotation.
    pub fn set_base_rotation(&mut self, degrees: f64) {
        if !degrees.is_finite() {
            return;
        }
        self.base_rotation = degrees % 360.0;
        self.rebuild_base();
        self.reset_user();
    }

    /// Scale limits used by [`TransformState::apply_scale`] and
    /// [`TransformState::set_scale`].
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Replaces the scale limits. The current scale is not clamped.
    pub fn set_limits(&mut self, limits: ScaleLimits) {
        self.limits = limits;
    }

    /// Base (fit) transform.
    #[must_use]
    pub fn base(&self) -> Affine {
        self.base
    }

    /// User (pan/zoom/rotation) transform.
    #[must_use]
    pub fn user(&self) -> Affine {
        self.user
    }

    /// Replaces the user transform. Returns `false` (and changes nothing)
    /// when no content is attached or `user` is not invertible.
    pub fn set_user(&mut self, user: Affine) -> bool {
        if self.content.is_none() || !is_invertible(user) {
            return false;
        }
        self.user = user;
        true
    }

    /// Resets the user transform to the bare base rotation.
    pub fn reset_user(&mut self) {
        self.user = Affine::rotate(to_radians(self.base_rotation));
    }

    /// Replaces the user transform with a pure rotation.
    pub fn rotate_to(&mut self, degrees: f64) {
        if degrees.is_finite() {
            self.user = Affine::rotate(to_radians(degrees % 360.0));
        }
    }

    /// Post-rotates the user transform about the viewport origin.
    pub fn rotate_by(&mut self, degrees: f64) {
        if degrees.is_finite() {
            self.user = Affine::rotate(to_radians(degrees % 360.0)) * self.user;
        }
    }

    /// Composed draw matrix: base first, then user.
    #[must_use]
    pub fn draw_matrix(&self) -> Affine {
        self.user * self.base
    }

    /// User scale, `sqrt(m00² + m10²)` of the user transform.
    #[must_use]
    pub fn current_scale(&self) -> f64 {
        scale_magnitude(self.user)
    }

    /// Scale of the whole draw matrix (base scale times user scale).
    #[must_use]
    pub fn display_scale(&self) -> f64 {
        scale_magnitude(self.draw_matrix())
    }

    /// Intrinsic content rectangle mapped through the draw matrix.
    #[must_use]
    pub fn display_rect(&self) -> Option<Rect> {
        self.content
            .map(|size| map_rect(self.draw_matrix(), rect_at_origin(size)))
    }

    /// Post-scales the user transform by `factor` about `focus`, subject to the
    /// asymmetric clamp of [`ScaleLimits::permits`].
    pub fn apply_scale(&mut self, factor: f64, focus: Point) -> ScaleOutcome {
        if self.content.is_none()
            || !factor.is_finite()
            || factor <= 0.0
            || !focus.is_finite()
        {
            return ScaleOutcome::Ignored;
        }
        if !self.limits.permits(self.current_scale(), factor) {
            return ScaleOutcome::Clamped;
        }
        self.user = self.user.then_scale_about(factor, focus);
        ScaleOutcome::Applied
    }

    /// Post-translates the user transform. Always permitted; returns `false`
    /// only when there is no content or the delta is not finite.
    pub fn apply_translate(&mut self, delta: Vec2) -> bool {
        if self.content.is_none() || !delta.is_finite() {
            return false;
        }
        self.user = self.user.then_translate(delta);
        true
    }

    /// Sets the user scale to exactly `target`, keeping `focus` fixed.
    ///
    /// Fails with [`crate::Error::ScaleOutOfRange`] when `target` is outside
    /// the limits, leaving the transform unchanged. Without content this is a
    /// successful no-op.
    pub fn set_scale(&mut self, target: f64, focus: Point) -> Result<()> {
        let target = self.limits.check(target)?;
        if self.content.is_none() || !focus.is_finite() {
            return Ok(());
        }
        let current = self.current_scale();
        self.user = self.user.then_scale_about(target / current, focus);
        Ok(())
    }

    fn rebuild_base(&mut self) {
        self.base = self
            .content
            .and_then(|content| {
                self.fit
                    .base_transform(self.viewport.content_area(), content, self.base_rotation)
            })
            .unwrap_or(Affine::IDENTITY);
    }
}

fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{ScaleOutcome, TransformState};
    use crate::{Error, FitPolicy, ScaleLimits, Viewport};

    fn state() -> TransformState {
        let mut state = TransformState::new(ScaleLimits::default(), FitPolicy::FitCenter);
        state.set_viewport(Viewport::new(Size::new(1000.0, 1000.0)));
        state.set_content(Some(Size::new(2000.0, 1000.0)));
        state
    }

    #[test]
    fn base_fits_and_user_starts_at_identity() {
        let state = state();
        assert!((state.base().as_coeffs()[0] - 0.5).abs() < 1e-12);
        assert!((state.current_scale() - 1.0).abs() < 1e-12);
        assert_eq!(state.display_rect(), Some(Rect::new(0.0, 250.0, 1000.0, 750.0)));
    }

    #[test]
    fn viewport_change_keeps_user_transform() {
        let mut state = state();
        state.apply_scale(2.0, Point::new(500.0, 500.0));
        state.set_viewport(Viewport::new(Size::new(500.0, 500.0)));
        assert!((state.current_scale() - 2.0).abs() < 1e-12);
        assert!((state.base().as_coeffs()[0] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn set_base_does_not_reset_user() {
        let mut state = state();
        state.apply_translate(Vec2::new(10.0, 0.0));
        let base = state
            .set_base(FitPolicy::CenterCrop, Size::new(1000.0, 1000.0), Size::new(2000.0, 1000.0))
            .unwrap();
        assert!((base.as_coeffs()[0] - 1.0).abs() < 1e-12);
        assert_eq!(state.user().translation(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn scale_clamp_is_asymmetric() {
        let mut state = state();
        let focus = Point::new(500.0, 500.0);
        assert_eq!(state.apply_scale(3.0, focus), ScaleOutcome::Applied);
        assert_eq!(state.apply_scale(1.1, focus), ScaleOutcome::Clamped);
        assert_eq!(state.apply_scale(0.9, focus), ScaleOutcome::Applied);
        assert_eq!(state.apply_scale(0.0, focus), ScaleOutcome::Ignored);
        assert_eq!(state.apply_scale(f64::NAN, focus), ScaleOutcome::Ignored);
    }

    #[test]
    fn explicit_scale_in_range_is_exact() {
        let mut state = state();
        for target in [1.0, 1.3, 1.75, 2.2, 3.0] {
            state.set_scale(target, Point::new(120.0, 700.0)).unwrap();
            assert!((state.current_scale() - target).abs() < 1e-9);
        }
    }

    #[test]
    fn explicit_scale_out_of_range_is_rejected() {
        let mut state = state();
        state.set_scale(2.0, Point::new(0.0, 0.0)).unwrap();
        let before = state.user();
        assert_eq!(
            state.set_scale(3.5, Point::new(0.0, 0.0)),
            Err(Error::ScaleOutOfRange {
                scale: 3.5,
                minimum: 1.0,
                maximum: 3.0
            })
        );
        assert!(state.set_scale(0.5, Point::new(0.0, 0.0)).is_err());
        assert_eq!(state.user(), before);
    }

    #[test]
    fn no_content_means_no_geometry() {
        let mut state = TransformState::new(ScaleLimits::default(), FitPolicy::FitCenter);
        assert_eq!(state.display_rect(), None);
        assert_eq!(state.apply_scale(2.0, Point::ORIGIN), ScaleOutcome::Ignored);
        assert!(!state.apply_translate(Vec2::new(1.0, 1.0)));
        assert_eq!(state.set_scale(2.0, Point::ORIGIN), Ok(()));
        assert!((state.current_scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn scale_survives_rotation() {
        let mut state = state();
        state.set_base_rotation(90.0);
        assert!((state.current_scale() - 1.0).abs() < 1e-12);
        state.set_scale(2.0, Point::new(500.0, 500.0)).unwrap();
        assert!((state.current_scale() - 2.0).abs() < 1e-9);
        state.rotate_by(45.0);
        assert!((state.current_scale() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_user_matrix_is_refused() {
        let mut state = state();
        assert!(!state.set_user(kurbo::Affine::scale(0.0)));
        assert!(state.set_user(kurbo::Affine::scale(2.0)));
        assert!((state.current_scale() - 2.0).abs() < 1e-12);
    }
}
