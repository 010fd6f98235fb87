// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fit policies: where the image sits in the viewport before any user
//! interaction.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `trunc`
use kurbo::{Affine, Rect, Size};

use crate::geometry::{is_invertible, is_positive, map_rect, rect_at_origin};

/// How the base transform lays the image out inside the viewport.
///
/// The base transform is recomputed whenever the image, the viewport size or
/// the policy changes. It never includes user interaction; pan and zoom live in
/// the user transform that is composed on top.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum FitPolicy {
    /// Keep the intrinsic size and center the image.
    Center,
    /// Scale uniformly so the image covers the viewport, then center it.
    CenterCrop,
    /// Like [`FitPolicy::FitCenter`], but never scale up.
    CenterInside,
    /// Scale uniformly to fit and center the image.
    #[default]
    FitCenter,
    /// Scale uniformly to fit and align with the top-left corner.
    FitStart,
    /// Scale uniformly to fit and align with the bottom-right corner.
    FitEnd,
    /// Scale each axis independently to fill the viewport exactly.
    FitXY,
    /// Fit the `source` region of the image (intrinsic coordinates) into the
    /// `target` rectangle (viewport coordinates), uniformly and centered.
    ///
    /// This is the framing used while morphing between two presentations of
    /// the same image.
    Custom {
        /// Region of the image to show.
        source: Rect,
        /// Where that region lands in the viewport.
        target: Rect,
    },
}

/// Alignment used by [`rect_to_rect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleToFit {
    /// Scale each axis independently so `src` exactly fills `dst`.
    Fill,
    /// Uniform scale, aligned with the minimum corner of `dst`.
    Start,
    /// Uniform scale, centered in `dst`.
    Center,
    /// Uniform scale, aligned with the maximum corner of `dst`.
    End,
}

/// Builds the matrix mapping `src` onto `dst`.
///
/// Returns `None` if either rectangle is empty, since the result would not be
/// invertible.
#[must_use]
pub fn rect_to_rect(src: Rect, dst: Rect, mode: ScaleToFit) -> Option<Affine> {
    if !is_positive(src.size()) || !is_positive(dst.size()) {
        return None;
    }
    let mut sx = dst.width() / src.width();
    let mut sy = dst.height() / src.height();
    let mut tx = dst.x0 - src.x0 * sx;
    let mut ty = dst.y0 - src.y0 * sy;
    if mode != ScaleToFit::Fill {
        let s = sx.min(sy);
        sx = s;
        sy = s;
        tx = dst.x0 - src.x0 * s;
        ty = dst.y0 - src.y0 * s;
        let slack_x = dst.width() - src.width() * s;
        let slack_y = dst.height() - src.height() * s;
        match mode {
            ScaleToFit::Center => {
                tx += slack_x / 2.0;
                ty += slack_y / 2.0;
            }
            ScaleToFit::End => {
                tx += slack_x;
                ty += slack_y;
            }
            ScaleToFit::Start | ScaleToFit::Fill => {}
        }
    }
    Some(Affine::new([sx, 0.0, 0.0, sy, tx, ty]))
}

impl FitPolicy {
    /// Computes the base transform for `intrinsic` content shown in a
    /// viewport of size `viewport`.
    ///
    /// `rotation_degrees` is the base rotation applied on top by the user
    /// transform; a quarter turn swaps the extents the fitting policies use.
    /// Returns `None` when either size is empty.
    #[must_use]
    pub fn base_transform(
        self,
        viewport: Size,
        intrinsic: Size,
        rotation_degrees: f64,
    ) -> Option<Affine> {
        if !is_positive(viewport) || !is_positive(intrinsic) {
            return None;
        }
        let width_scale = viewport.width / intrinsic.width;
        let height_scale = viewport.height / intrinsic.height;
        let centered = |s: f64| {
            Affine::translate((
                (viewport.width - intrinsic.width * s) / 2.0,
                (viewport.height - intrinsic.height * s) / 2.0,
            )) * Affine::scale(s)
        };
        let base = match self {
            Self::Center => Some(centered(1.0)),
            Self::CenterCrop => Some(centered(width_scale.max(height_scale))),
            Self::CenterInside => Some(centered(width_scale.min(height_scale).min(1.0))),
            Self::Custom { source, target } => rect_to_rect(source, target, ScaleToFit::Center),
            Self::FitCenter | Self::FitStart | Self::FitEnd | Self::FitXY => {
                let src = if quarter_turned(rotation_degrees) {
                    rect_at_origin(Size::new(intrinsic.height, intrinsic.width))
                } else {
                    rect_at_origin(intrinsic)
                };
                let mode = match self {
                    Self::FitStart => ScaleToFit::Start,
                    Self::FitEnd => ScaleToFit::End,
                    Self::FitXY => ScaleToFit::Fill,
                    _ => ScaleToFit::Center,
                };
                rect_to_rect(src, rect_at_origin(viewport), mode)
            }
        };
        base.filter(|m| is_invertible(*m))
    }

    /// Resolves this policy into an explicit `(source, target)` framing.
    ///
    /// `source` is the part of the image that ends up inside the viewport and
    /// `target` is where it lands. Feeding the pair back through
    /// [`FitPolicy::Custom`] reproduces the same base transform for every
    /// uniform policy, which is what lets a morph start and end exactly on the
    /// standard layouts.
    #[must_use]
    pub fn frame(
        self,
        viewport: Size,
        intrinsic: Size,
        rotation_degrees: f64,
    ) -> Option<(Rect, Rect)> {
        if let Self::Custom { source, target } = self {
            return Some((source, target));
        }
        let base = self.base_transform(viewport, intrinsic, rotation_degrees)?;
        let shown = map_rect(base, rect_at_origin(intrinsic));
        let target = shown.intersect(rect_at_origin(viewport));
        if !is_positive(target.size()) {
            return None;
        }
        let source = map_rect(base.inverse(), target);
        Some((source, target))
    }
}

fn quarter_turned(rotation_degrees: f64) -> bool {
    // Same truncation as an integer cast: 90.5 still counts as a quarter turn.
    let whole = rotation_degrees.trunc();
    (whole % 180.0).abs() >= f64::EPSILON
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::*;

    fn close(a: Rect, b: Rect) -> bool {
        (a.x0 - b.x0).abs() < 1e-9
            && (a.y0 - b.y0).abs() < 1e-9
            && (a.x1 - b.x1).abs() < 1e-9
            && (a.y1 - b.y1).abs() < 1e-9
    }

    #[test]
    fn fit_center_letterboxes_wide_image() {
        let viewport = Size::new(1000.0, 1000.0);
        let image = Size::new(2000.0, 1000.0);
        let base = FitPolicy::FitCenter.base_transform(viewport, image, 0.0).unwrap();
        let shown = map_rect(base, rect_at_origin(image));
        assert!(close(shown, Rect::new(0.0, 250.0, 1000.0, 750.0)));
    }

    #[test]
    fn fit_start_and_end_align_to_corners() {
        let viewport = Size::new(100.0, 200.0);
        let image = Size::new(50.0, 50.0);
        let start = FitPolicy::FitStart.base_transform(viewport, image, 0.0).unwrap();
        let end = FitPolicy::FitEnd.base_transform(viewport, image, 0.0).unwrap();
        assert!(close(
            map_rect(start, rect_at_origin(image)),
            Rect::new(0.0, 0.0, 100.0, 100.0)
        ));
        assert!(close(
            map_rect(end, rect_at_origin(image)),
            Rect::new(0.0, 100.0, 100.0, 200.0)
        ));
    }

    #[test]
    fn fit_xy_stretches() {
        let base = FitPolicy::FitXY
            .base_transform(Size::new(300.0, 100.0), Size::new(100.0, 100.0), 0.0)
            .unwrap();
        assert_eq!(base * Point::new(100.0, 100.0), Point::new(300.0, 100.0));
    }

    #[test]
    fn center_crop_covers_and_center_inside_never_enlarges() {
        let viewport = Size::new(400.0, 200.0);
        let image = Size::new(100.0, 100.0);
        let crop = FitPolicy::CenterCrop.base_transform(viewport, image, 0.0).unwrap();
        assert!(close(
            map_rect(crop, rect_at_origin(image)),
            Rect::new(0.0, -100.0, 400.0, 300.0)
        ));
        let inside = FitPolicy::CenterInside.base_transform(viewport, image, 0.0).unwrap();
        assert!(close(
            map_rect(inside, rect_at_origin(image)),
            Rect::new(150.0, 50.0, 250.0, 150.0)
        ));
        let center = FitPolicy::Center.base_transform(viewport, image, 0.0).unwrap();
        assert_eq!(inside, center);
    }

    #[test]
    fn quarter_turn_swaps_fit_extents() {
        let viewport = Size::new(1000.0, 500.0);
        let image = Size::new(500.0, 1000.0);
        let upright = FitPolicy::FitCenter.base_transform(viewport, image, 0.0).unwrap();
        let turned = FitPolicy::FitCenter.base_transform(viewport, image, 90.0).unwrap();
        assert!((upright.as_coeffs()[0] - 0.5).abs() < 1e-12);
        assert!((turned.as_coeffs()[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_sizes_produce_no_transform() {
        assert!(FitPolicy::FitCenter
            .base_transform(Size::ZERO, Size::new(10.0, 10.0), 0.0)
            .is_none());
        assert!(FitPolicy::Center
            .base_transform(Size::new(10.0, 10.0), Size::new(0.0, 10.0), 0.0)
            .is_none());
        assert!(
            rect_to_rect(Rect::ZERO, Rect::new(0.0, 0.0, 1.0, 1.0), ScaleToFit::Fill).is_none()
        );
    }

    #[test]
    fn frame_round_trips_through_custom() {
        let viewport = Size::new(200.0, 200.0);
        let image = Size::new(400.0, 200.0);
        for policy in [FitPolicy::FitCenter, FitPolicy::CenterCrop, FitPolicy::FitEnd] {
            let (source, target) = policy.frame(viewport, image, 0.0).unwrap();
            let direct = policy.base_transform(viewport, image, 0.0).unwrap();
            let custom = FitPolicy::Custom { source, target }
                .base_transform(viewport, image, 0.0)
                .unwrap();
            let a = map_rect(direct, rect_at_origin(image));
            let b = map_rect(custom, rect_at_origin(image));
            assert!(close(a, b), "{policy:?}: {a:?} != {b:?}");
        }
    }
}
