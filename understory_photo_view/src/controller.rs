// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`PhotoView`] controller.
//!
//! `PhotoView` reduces classified gesture events into transform changes,
//! enforces bounds after each change, runs animations when the host ticks it,
//! and publishes the result through [`Handlers`].
//!
//! All coordinates (gesture positions, pinch focus, published matrices) are
//! content-area coordinates: the origin is the top-left corner inside the
//! viewport padding.

use core::time::Duration;

use kurbo::{Affine, Point, Rect, Size, Vec2};
use log::{debug, trace, warn};

use crate::animation::{
    FlingAnimation, Interpolator, MorphAnimation, MorphContext, MorphStep, SnapBackAnimation, Step,
    ZoomAnimation,
};
use crate::bounds::{self, BoundsCorrection, EdgeState};
use crate::config::PhotoViewConfig;
use crate::dismiss::{DragToDismiss, ReleaseOutcome};
use crate::error::{Error, Result};
use crate::fit::FitPolicy;
use crate::geometry::{is_positive, rect_at_origin};
use crate::gesture::{GestureEvent, GesturePhase, GestureSession};
use crate::handlers::Handlers;
use crate::limits::{SCALE_TOLERANCE, ScaleLimits};
use crate::transform::{ScaleOutcome, TransformState};
use crate::viewport::Viewport;

/// The exclusive animation slot: at most one of these runs at a time.
#[derive(Clone, Copy, Debug)]
enum Motion {
    Zoom(ZoomAnimation),
    Fling(FlingAnimation),
    SnapBack(SnapBackAnimation),
}

impl Motion {
    fn name(&self) -> &'static str {
        match self {
            Self::Zoom(_) => "zoom",
            Self::Fling(_) => "fling",
            Self::SnapBack(_) => "snap-back",
        }
    }
}

/// Interactive pan/zoom controller for one image.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_photo_view::{GestureEvent, PhotoView, PhotoViewConfig, Viewport};
///
/// let mut view = PhotoView::new(PhotoViewConfig::default());
/// view.set_viewport(Viewport::new(Size::new(1000.0, 1000.0)));
/// view.set_content(Some(Size::new(2000.0, 1000.0)));
///
/// view.handle(GestureEvent::DoubleTap(Point::new(500.0, 500.0)));
/// while view.tick(core::time::Duration::from_millis(16)) {}
/// assert!((view.scale() - 1.75).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct PhotoView {
    state: TransformState,
    config: PhotoViewConfig,
    dismiss: DragToDismiss,
    session: GestureSession,
    edge: EdgeState,
    motion: Option<Motion>,
    morph: Option<MorphAnimation>,
    anchor: Option<Point>,
    intercept_disallowed: bool,
    handlers: Handlers,
}

impl PhotoView {
    /// Creates a controller with no content attached.
    #[must_use]
    pub fn new(config: PhotoViewConfig) -> Self {
        let mut state = TransformState::new(config.limits, config.fit);
        state.set_base_rotation(config.base_rotation);
        Self {
            state,
            config,
            dismiss: DragToDismiss::new(config.dismiss_enabled, config.dismiss_distance),
            session: GestureSession::default(),
            edge: EdgeState::Both,
            motion: None,
            morph: None,
            anchor: None,
            intercept_disallowed: false,
            handlers: Handlers::default(),
        }
    }

    /// Registered observers.
    #[must_use]
    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    /// Registered observers, for installing handlers.
    pub fn handlers_mut(&mut self) -> &mut Handlers {
        &mut self.handlers
    }

    /// Current configuration. Limits, fit and rotation reflect live updates.
    #[must_use]
    pub fn config(&self) -> PhotoViewConfig {
        let mut config = self.config;
        config.limits = self.state.limits();
        config.fit = self.state.fit();
        config.base_rotation = self.state.base_rotation();
        config.dismiss_enabled = self.dismiss.enabled();
        config.dismiss_distance = self.dismiss.distance();
        config
    }

    // --- content and layout ---

    /// Attaches an image of the given intrinsic size, or detaches with
    /// `None`.
    ///
    /// Resets the user transform and stops every animation.
    pub fn set_content(&mut self, content: Option<Size>) {
        self.stop_motion();
        if self.morph.take().is_some() {
            debug!("morph cancelled: content replaced");
        }
        self.session.end();
        self.dismiss.reset();
        self.anchor = None;
        self.state.set_content(content);
        match self.state.content() {
            Some(size) => {
                debug!("content attached: {}x{}", size.width, size.height);
                self.check_and_publish();
            }
            None => {
                debug!("content detached");
                self.edge = EdgeState::Both;
            }
        }
    }

    /// Intrinsic size of the attached image.
    #[must_use]
    pub fn content(&self) -> Option<Size> {
        self.state.content()
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.state.viewport()
    }

    /// Replaces the viewport. Zoom and pan are kept; bounds are re-enforced.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.state.viewport() {
            return;
        }
        self.state.set_viewport(viewport);
        self.check_and_publish();
    }

    /// Host layout changed to the given bounds. Padding is kept.
    pub fn layout_changed(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        let padding = self.state.viewport().padding;
        self.set_viewport(Viewport::from_layout(left, top, right, bottom).with_padding(padding));
    }

    // --- gesture input ---

    /// Feeds one classified gesture event.
    ///
    /// Ignored while the view is not zoomable or has no content.
    pub fn handle(&mut self, event: GestureEvent) {
        if !self.config.zoomable || self.state.content().is_none() {
            return;
        }
        match event {
            GestureEvent::Down => self.on_down(),
            GestureEvent::Up | GestureEvent::Cancel => self.on_up(),
            GestureEvent::Drag { delta, downward } => self.on_drag(delta, downward),
            GestureEvent::ScaleBegin => self.session.scaling = true,
            GestureEvent::Scale { factor, focus } => self.on_scale(factor, focus),
            GestureEvent::ScaleEnd => self.session.scaling = false,
            GestureEvent::Fling {
                velocity,
                pointer_count,
                pointer_still_down,
            } => self.on_fling(velocity, pointer_count, pointer_still_down),
            GestureEvent::SingleTap(at) => self.on_single_tap(at),
            GestureEvent::DoubleTap(at) => self.on_double_tap(at),
            GestureEvent::LongPress => {
                self.handlers.long_click.call(());
            }
        }
    }

    fn on_down(&mut self) {
        self.session.begin();
        self.dismiss.reset();
        self.request_intercept(true, true);
        if matches!(self.motion, Some(Motion::Fling(_))) {
            self.stop_motion();
        }
    }

    fn on_up(&mut self) {
        let released = self.correction().map_or(Vec2::ZERO, |fix| fix.delta);
        let outcome = self.dismiss.release(released);
        let recognized = self.session.recognized();
        self.session.end();
        if !recognized {
            // Nothing moved; the parent keeps the gesture.
            self.request_intercept(false, false);
        }

        if outcome == ReleaseOutcome::Dismiss {
            debug!("dismiss committed at correction {:.1}", released.y);
            self.handlers.dismiss.call(());
            return;
        }
        let pulled = outcome != ReleaseOutcome::NotDragging;

        let scale = self.scale();
        let limits = self.state.limits();
        if scale < limits.minimum()
            && let Some(rect) = self.state.display_rect()
        {
            self.animate_scale(limits.minimum(), rect.center());
            if pulled {
                self.clear_progress();
            }
            return;
        }
        if scale > limits.maximum() + SCALE_TOLERANCE
            && let Some(rect) = self.state.display_rect()
        {
            let focus = self.anchor.unwrap_or_else(|| rect.center());
            self.animate_scale(limits.maximum(), focus);
            if pulled {
                self.clear_progress();
            }
            return;
        }

        match outcome {
            ReleaseOutcome::SnapBack(correction) => {
                match SnapBackAnimation::new(correction, self.config.snap_back_duration) {
                    Ok(snap) => self.start_motion(Motion::SnapBack(snap)),
                    Err(err) => {
                        warn!("snap-back skipped: {err}");
                        self.check_and_publish();
                        self.clear_progress();
                    }
                }
            }
            ReleaseOutcome::Settled => self.clear_progress(),
            ReleaseOutcome::NotDragging | ReleaseOutcome::Dismiss => {}
        }
    }

    fn clear_progress(&mut self) {
        if self.dismiss.enabled() {
            self.handlers.drag_progress.call(0.0);
        }
    }

    fn on_drag(&mut self, delta: Vec2, downward: bool) {
        if self.session.scaling || !self.state.apply_translate(delta) {
            return;
        }
        self.session.dragged = true;

        if downward {
            // Pull-down may leave the top edge; measure instead of correcting.
            self.dismiss.begin();
            if let Some(fix) = self.correction() {
                self.edge = fix.edge;
                if self.dismiss.enabled() {
                    let progress = self.dismiss.progress(fix.delta.y);
                    self.handlers.drag_progress.call(progress);
                }
            }
            self.publish();
        } else {
            self.check_and_publish();
        }

        if self.config.parent_intercept_on_edge && !self.session.scaling {
            let release = match self.edge {
                EdgeState::Both => true,
                EdgeState::Left => delta.x >= 1.0,
                EdgeState::Right => delta.x <= -1.0,
                EdgeState::None => false,
            };
            if release {
                self.request_intercept(false, false);
            }
        } else {
            self.request_intercept(true, false);
        }
    }

    fn on_scale(&mut self, factor: f64, focus: Point) {
        self.session.scaled = true;
        self.handlers.scale_changed.call((factor, focus));
        match self.state.apply_scale(factor, focus) {
            ScaleOutcome::Applied => {
                if focus.is_finite() {
                    self.anchor = Some(focus);
                }
                self.check_and_publish();
            }
            ScaleOutcome::Clamped => trace!("pinch factor {factor} clamped at {}", self.scale()),
            ScaleOutcome::Ignored => trace!("pinch factor {factor} ignored"),
        }
        if self.config.parent_intercept_on_edge {
            self.request_intercept(true, false);
        }
    }

    fn on_fling(&mut self, velocity: Vec2, pointer_count: u32, pointer_still_down: bool) {
        let at_minimum = self.scale() <= self.state.limits().minimum() + SCALE_TOLERANCE;
        if at_minimum
            && pointer_count == 1
            && self.handlers.single_fling.call(velocity) == Some(true)
        {
            trace!("single fling consumed by host");
            return;
        }
        if pointer_still_down || self.session.scaling || self.dismiss.is_dragging() {
            return;
        }
        if matches!(self.motion, Some(Motion::Zoom(_) | Motion::SnapBack(_))) {
            return;
        }
        let Some(display) = self.state.display_rect() else {
            return;
        };
        let area = self.state.viewport().content_area();
        if let Some(fling) =
            FlingAnimation::new(display, area, velocity, self.config.fling_deceleration)
        {
            self.start_motion(Motion::Fling(fling));
        }
    }

    fn on_single_tap(&mut self, at: Point) {
        if self.is_dragging() {
            trace!("tap suppressed by drag");
            return;
        }
        self.handlers.click.call(());
        match self.state.display_rect() {
            Some(rect) if rect.contains(at) => {
                let x = (at.x - rect.x0) / rect.width();
                let y = (at.y - rect.y0) / rect.height();
                self.handlers.photo_tap.call((x, y));
            }
            _ => {
                self.handlers.outside_tap.call(());
            }
        }
    }

    fn on_double_tap(&mut self, at: Point) {
        if !at.is_finite() {
            return;
        }
        let target = self.state.limits().double_tap_target(self.scale());
        debug!("double tap: {:.3} -> {target}", self.scale());
        self.animate_scale(target, at);
    }

    // --- animation ---

    /// Advances running animations by `dt` and publishes the result.
    ///
    /// Returns `true` while another frame is needed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.step_motion(dt);
        self.step_morph(dt);
        self.is_animating()
    }

    fn step_motion(&mut self, dt: Duration) {
        let Some(motion) = self.motion.take() else {
            return;
        };
        let next = match motion {
            Motion::Zoom(mut zoom) => {
                let step = zoom.step(dt);
                let target = step.value();
                let current = self.scale();
                if current > 0.0 {
                    let factor = target / current;
                    self.handlers.scale_changed.call((factor, zoom.focus()));
                    let _ = self.state.apply_scale(factor, zoom.focus());
                    self.check_and_publish();
                }
                trace!("zoom step: {target:.4}");
                (!step.is_done()).then_some(Motion::Zoom(zoom))
            }
            Motion::Fling(mut fling) => {
                let step = fling.step(dt);
                if self.state.apply_translate(step.value()) {
                    self.check_and_publish();
                }
                (!step.is_done()).then_some(Motion::Fling(fling))
            }
            Motion::SnapBack(mut snap) => {
                let step = snap.step(dt);
                let frame = step.value();
                self.state.apply_translate(frame.delta);
                if self.dismiss.enabled() {
                    let progress = self.dismiss.progress(frame.remaining.y);
                    self.handlers.drag_progress.call(progress);
                }
                if step.is_done() {
                    self.check_and_publish();
                } else {
                    self.publish();
                }
                (!step.is_done()).then_some(Motion::SnapBack(snap))
            }
        };
        match next {
            Some(motion) => self.motion = Some(motion),
            None => debug!("{} animation completed", motion.name()),
        }
    }

    fn step_morph(&mut self, dt: Duration) {
        if let Some(mut morph) = self.morph.take() {
            let step = morph.step(dt);
            self.apply_morph(morph, step);
        }
    }

    /// Shows the running size morph at `fraction` of the way through, for
    /// hosts that drive the transition with their own animator.
    ///
    /// The fraction is clamped to `[0, 1]`; reaching `1.0` completes the
    /// morph. Returns `false` when no morph is running.
    pub fn seek_morph(&mut self, fraction: f64) -> bool {
        let Some(mut morph) = self.morph.take() else {
            return false;
        };
        let step = morph.seek(fraction);
        trace!("morph seek: {fraction:.3}");
        self.apply_morph(morph, step);
        true
    }

    fn apply_morph(&mut self, morph: MorphAnimation, step: Step<MorphStep>) {
        let Some(content) = self.state.content() else {
            return;
        };
        let frame = step.value();
        self.handlers.viewport_resized.call(frame.viewport);
        if self.state.set_base(frame.fit, frame.viewport, content).is_none() {
            warn!("morph frame produced an empty base; stopping");
            return;
        }
        let current = self.scale();
        if current > 0.0 {
            let _ = self.state.apply_scale(frame.scale / current, frame.anchor);
        }
        if morph.changes_scale() || step.is_done() {
            self.check_and_publish();
        } else {
            self.publish();
        }
        if step.is_done() {
            debug!("morph completed");
        } else {
            self.morph = Some(morph);
        }
    }

    /// Starts a size morph between the two presentations in `context`.
    ///
    /// The user scale moves to the minimum, about the last pinch focus (or
    /// the content-area center). Runs independently of gesture animations
    /// and replaces any morph in progress.
    pub fn start_morph(&mut self, context: MorphContext) -> Result<()> {
        let content = self.state.content().ok_or(Error::EmptyMorphFrame)?;
        let anchor = self.anchor.unwrap_or_else(|| self.content_center());
        let morph = MorphAnimation::new(
            context,
            content,
            self.state.base_rotation(),
            self.scale(),
            self.state.limits().minimum(),
            anchor,
            self.config.morph_duration,
            self.config.interpolator,
        )
        .inspect_err(|err| warn!("morph rejected: {err}"))?;
        if self.morph.replace(morph).is_some() {
            debug!("morph superseded");
        }
        debug!(
            "morph scheduled: {:?} -> {:?}",
            context.start.viewport, context.end.viewport
        );
        Ok(())
    }

    fn animate_scale(&mut self, target: f64, focus: Point) {
        match ZoomAnimation::new(
            self.scale(),
            target,
            focus,
            self.config.zoom_duration,
            self.config.interpolator,
        ) {
            Ok(zoom) => self.start_motion(Motion::Zoom(zoom)),
            Err(err) => {
                warn!("zoom not animated: {err}");
                let current = self.scale();
                if current > 0.0 {
                    let _ = self.state.apply_scale(target / current, focus);
                    self.check_and_publish();
                }
            }
        }
    }

    fn start_motion(&mut self, motion: Motion) {
        self.stop_motion();
        debug!("{} animation scheduled", motion.name());
        self.motion = Some(motion);
    }

    fn stop_motion(&mut self) {
        if let Some(old) = self.motion.take() {
            debug!("{} animation cancelled", old.name());
        }
    }

    // --- configuration ---

    /// Sets the scale, focused on the content-area center.
    ///
    /// Fails with [`Error::ScaleOutOfRange`] outside the limits.
    pub fn set_scale(&mut self, scale: f64, animate: bool) -> Result<()> {
        let center = self.content_center();
        self.set_scale_about(scale, center, animate)
    }

    /// Sets the scale keeping `focus` fixed, either immediately or animated.
    ///
    /// Fails with [`Error::ScaleOutOfRange`] outside the limits; the
    /// transform is left unchanged in that case.
    pub fn set_scale_about(&mut self, scale: f64, focus: Point, animate: bool) -> Result<()> {
        self.state
            .limits()
            .check(scale)
            .inspect_err(|err| warn!("scale request rejected: {err}"))?;
        if self.state.content().is_none() {
            return Ok(());
        }
        if animate {
            self.animate_scale(scale, focus);
        } else {
            self.stop_motion();
            self.state.set_scale(scale, focus)?;
            self.check_and_publish();
        }
        Ok(())
    }

    /// Scale limits in effect.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        self.state.limits()
    }

    /// Validates and replaces all three scale levels.
    pub fn set_scale_levels(&mut self, minimum: f64, medium: f64, maximum: f64) -> Result<()> {
        self.commit_limits(ScaleLimits::new(minimum, medium, maximum))
    }

    /// Changes the minimum scale.
    pub fn set_minimum_scale(&mut self, minimum: f64) -> Result<()> {
        self.commit_limits(self.state.limits().with_minimum(minimum))
    }

    /// Changes the medium scale.
    pub fn set_medium_scale(&mut self, medium: f64) -> Result<()> {
        self.commit_limits(self.state.limits().with_medium(medium))
    }

    /// Changes the maximum scale.
    pub fn set_maximum_scale(&mut self, maximum: f64) -> Result<()> {
        self.commit_limits(self.state.limits().with_maximum(maximum))
    }

    fn commit_limits(&mut self, limits: Result<ScaleLimits>) -> Result<()> {
        let limits = limits.inspect_err(|err| warn!("scale levels rejected: {err}"))?;
        self.state.set_limits(limits);
        Ok(())
    }

    /// Changes the fit policy. Zoom and pan are kept.
    pub fn set_fit(&mut self, fit: FitPolicy) {
        self.state.set_fit(fit);
        self.check_and_publish();
    }

    /// Changes the zoom animation duration.
    pub fn set_zoom_duration(&mut self, duration: Duration) -> Result<()> {
        self.config = self.config.with_zoom_duration(duration)?;
        Ok(())
    }

    /// Changes the curve used by zoom and morph animations.
    pub fn set_interpolator(&mut self, interpolator: Interpolator) {
        self.config.interpolator = interpolator;
    }

    /// Sets the base rotation and resets the user transform to it.
    pub fn set_base_rotation(&mut self, degrees: f64) {
        self.state.set_base_rotation(degrees);
        self.check_and_publish();
    }

    /// Replaces the user transform with a pure rotation.
    pub fn set_rotation_to(&mut self, degrees: f64) {
        self.state.rotate_to(degrees);
        self.check_and_publish();
    }

    /// Rotates the user transform further.
    pub fn set_rotation_by(&mut self, degrees: f64) {
        self.state.rotate_by(degrees);
        self.check_and_publish();
    }

    /// Whether gesture input is handled.
    #[must_use]
    pub fn is_zoomable(&self) -> bool {
        self.config.zoomable
    }

    /// Enables or disables gesture handling.
    ///
    /// Either way the user transform goes back to the base rotation.
    pub fn set_zoomable(&mut self, zoomable: bool) {
        self.config.zoomable = zoomable;
        self.stop_motion();
        self.session.end();
        self.state.reset_user();
        self.check_and_publish();
    }

    /// Enables or disables handing touches to the parent at pinned edges.
    pub fn set_parent_intercept_on_edge(&mut self, enabled: bool) {
        self.config.parent_intercept_on_edge = enabled;
    }

    /// Enables or disables drag-to-dismiss.
    pub fn set_dismiss_enabled(&mut self, enabled: bool) {
        self.dismiss.set_enabled(enabled);
    }

    /// Changes the pull distance that commits a dismiss.
    pub fn set_dismiss_distance(&mut self, distance: f64) {
        self.dismiss.set_distance(distance);
    }

    /// Replaces the user transform.
    ///
    /// Returns `false` without content or for a degenerate matrix.
    pub fn set_user_matrix(&mut self, user: Affine) -> bool {
        if !self.state.set_user(user) {
            warn!("user matrix rejected");
            return false;
        }
        self.check_and_publish();
        true
    }

    // --- queries ---

    /// Current user scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.current_scale()
    }

    /// Whether the image is zoomed in past the minimum.
    #[must_use]
    pub fn is_scaled(&self) -> bool {
        self.scale() > self.state.limits().minimum() + SCALE_TOLERANCE
    }

    /// Whether the image is zoomed in or the last gesture dismissed it.
    #[must_use]
    pub fn is_scaled_or_dismissed(&self) -> bool {
        self.is_scaled() || self.dismiss.is_dismissed()
    }

    /// Horizontal edge state from the last bounds check.
    #[must_use]
    pub fn edge(&self) -> EdgeState {
        self.edge
    }

    /// Coarse state, for hosts that reflect it in their UI.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.session.scaling {
            return GesturePhase::Scaling;
        }
        if self.is_dragging() {
            return GesturePhase::Dragging;
        }
        match self.motion {
            Some(Motion::Zoom(_)) => GesturePhase::AnimatingZoom,
            Some(Motion::Fling(_)) => GesturePhase::Flinging,
            Some(Motion::SnapBack(_)) => GesturePhase::SettlingDrag,
            None if self.morph.is_some() => GesturePhase::Morphing,
            None => GesturePhase::Idle,
        }
    }

    /// Whether any animation wants more frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some() || self.morph.is_some()
    }

    /// Whether the parent was last asked not to intercept touches.
    #[must_use]
    pub fn parent_intercept_disallowed(&self) -> bool {
        self.intercept_disallowed
    }

    /// Image rectangle as displayed.
    #[must_use]
    pub fn display_rect(&self) -> Option<Rect> {
        self.state.display_rect()
    }

    /// Part of the displayed image inside the content area.
    #[must_use]
    pub fn visible_rect(&self) -> Option<Rect> {
        let area = rect_at_origin(self.state.viewport().content_area());
        self.state
            .display_rect()
            .map(|rect| rect.intersect(area))
            .filter(|rect| is_positive(rect.size()))
    }

    /// Scale of the full draw matrix: fit scale times user scale.
    #[must_use]
    pub fn display_scale(&self) -> f64 {
        self.state.display_scale()
    }

    /// User (pan/zoom/rotation) transform.
    #[must_use]
    pub fn user_matrix(&self) -> Affine {
        self.state.user()
    }

    /// Base (fit) transform.
    #[must_use]
    pub fn base_matrix(&self) -> Affine {
        self.state.base()
    }

    /// Composed draw matrix.
    #[must_use]
    pub fn draw_matrix(&self) -> Affine {
        self.state.draw_matrix()
    }

    // --- internals ---

    fn is_dragging(&self) -> bool {
        self.dismiss.is_dragging() || (self.session.active && self.session.dragged)
    }

    fn content_center(&self) -> Point {
        rect_at_origin(self.state.viewport().content_area()).center()
    }

    fn correction(&self) -> Option<BoundsCorrection> {
        let content = self.state.content()?;
        bounds::correct(
            self.state.draw_matrix(),
            content,
            self.state.viewport().content_area(),
        )
    }

    /// Applies the bounds correction and publishes. Skips both for
    /// degenerate geometry.
    fn check_and_publish(&mut self) {
        let Some(fix) = self.correction() else {
            return;
        };
        self.edge = fix.edge;
        if !fix.is_zero() {
            self.state.apply_translate(fix.delta);
        }
        self.publish();
    }

    fn publish(&mut self) {
        let draw = self.state.draw_matrix();
        let Some(rect) = self.state.display_rect() else {
            return;
        };
        if !draw.is_finite() || !rect.is_finite() {
            warn!("non-finite draw matrix not published");
            return;
        }
        self.handlers.draw_matrix.call(draw);
        self.handlers.matrix_changed.call(rect);
    }

    fn request_intercept(&mut self, disallow: bool, force: bool) {
        if force || self.intercept_disallowed != disallow {
            self.intercept_disallowed = disallow;
            trace!("parent intercept disallowed: {disallow}");
            self.handlers.parent_intercept.call(disallow);
        }
    }
}

impl Default for PhotoView {
    fn default() -> Self {
        Self::new(PhotoViewConfig::default())
    }
}
