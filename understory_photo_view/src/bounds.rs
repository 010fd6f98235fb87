// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds enforcement: keep the displayed image inside, or centered in, the
//! viewport content area.
//!
//! [`correct`] is pure. It reads the current geometry and returns the
//! translation that would fix it; applying that translation to the user
//! transform is the caller's job.
//!
//! ```
//! use kurbo::{Affine, Size, Vec2};
//! use understory_photo_view::bounds::{self, EdgeState};
//!
//! // A 200x100 image drawn 50px right of the origin in a 100x100 area.
//! let draw = Affine::translate((50.0, 0.0));
//! let fix = bounds::correct(draw, Size::new(200.0, 100.0), Size::new(100.0, 100.0)).unwrap();
//! assert_eq!(fix.delta, Vec2::new(-50.0, 0.0));
//! assert_eq!(fix.edge, EdgeState::Left);
//! ```

use kurbo::{Affine, Rect, Size, Vec2};

use crate::geometry::{is_invertible, is_positive, map_rect, rect_at_origin};

/// Distance under which an edge counts as flush with the viewport.
pub const EDGE_EPSILON: f64 = 1e-6;

/// Which horizontal edges of the displayed image are flush with the viewport
/// once bounds have been corrected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EdgeState {
    /// The image is wider than the viewport and neither edge is pinned.
    None,
    /// The image's left edge sits on the viewport's left edge.
    Left,
    /// The image's right edge sits on the viewport's right edge.
    Right,
    /// The image fits horizontally and is centered.
    #[default]
    Both,
}

/// Translation needed to bring the image back in bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsCorrection {
    /// Edge state after applying [`BoundsCorrection::delta`].
    pub edge: EdgeState,
    /// Translation to post-apply to the user transform.
    pub delta: Vec2,
}

impl BoundsCorrection {
    /// Returns `true` if no movement is required.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.delta.x.abs() < EDGE_EPSILON && self.delta.y.abs() < EDGE_EPSILON
    }
}

/// Computes the bounds correction for `content` drawn with `draw` in a content
/// area of size `area` (origin at zero).
///
/// Returns `None` when nothing sensible can be computed: empty sizes, a
/// singular matrix or non-finite geometry.
#[must_use]
pub fn correct(draw: Affine, content: Size, area: Size) -> Option<BoundsCorrection> {
    if !is_positive(content) || !is_positive(area) || !is_invertible(draw) {
        return None;
    }
    let rect = map_rect(draw, rect_at_origin(content));
    correct_rect(rect, area)
}

/// Same as [`correct`], for an already mapped display rectangle.
#[must_use]
pub fn correct_rect(rect: Rect, area: Size) -> Option<BoundsCorrection> {
    if !rect.is_finite() || !is_positive(area) {
        return None;
    }
    let dy = axis_delta(rect.y0, rect.y1, area.height);
    let dx = axis_delta(rect.x0, rect.x1, area.width);
    let edge = if rect.width() <= area.width {
        EdgeState::Both
    } else if rect.x0 >= -EDGE_EPSILON {
        EdgeState::Left
    } else if rect.x1 <= area.width + EDGE_EPSILON {
        EdgeState::Right
    } else {
        EdgeState::None
    };
    Some(BoundsCorrection {
        edge,
        delta: Vec2::new(dx, dy),
    })
}

/// Per-axis rule: center when it fits, otherwise pull a gap-leaving edge
/// back to the viewport edge.
fn axis_delta(start: f64, end: f64, extent: f64) -> f64 {
    let len = end - start;
    if len <= extent {
        (extent - len) / 2.0 - start
    } else if start > 0.0 {
        -start
    } else if end < extent {
        extent - end
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Rect, Size, Vec2};

    use super::*;

    const AREA: Size = Size::new(1000.0, 1000.0);

    #[test]
    fn small_content_is_centered_on_both_axes() {
        for offset in [-300.0, 0.0, 75.5, 900.0] {
            let rect = Rect::new(offset, offset * 0.5, offset + 400.0, offset * 0.5 + 200.0);
            let fix = correct_rect(rect, AREA).unwrap();
            let moved = rect + fix.delta;
            assert!((moved.center().x - 500.0).abs() < 1e-9);
            assert!((moved.center().y - 500.0).abs() < 1e-9);
            assert_eq!(fix.edge, EdgeState::Both);
        }
    }

    #[test]
    fn large_content_is_pulled_to_nearest_edge() {
        let fix = correct_rect(Rect::new(100.0, -10.0, 2100.0, 990.0), AREA).unwrap();
        assert_eq!(fix.delta, Vec2::new(-100.0, 10.0));
        assert_eq!(fix.edge, EdgeState::Left);

        let fix = correct_rect(Rect::new(-1500.0, 0.0, 500.0, 2000.0), AREA).unwrap();
        assert_eq!(fix.delta, Vec2::new(500.0, 0.0));
        assert_eq!(fix.edge, EdgeState::Right);

        let fix = correct_rect(Rect::new(-500.0, -500.0, 1500.0, 1500.0), AREA).unwrap();
        assert!(fix.is_zero());
        assert_eq!(fix.edge, EdgeState::None);
    }

    #[test]
    fn pinned_edges_report_without_moving() {
        let fix = correct_rect(Rect::new(0.0, 0.0, 2000.0, 1000.0), AREA).unwrap();
        assert!(fix.is_zero());
        assert_eq!(fix.edge, EdgeState::Left);
        let fix = correct_rect(Rect::new(-1000.0, 0.0, 1000.0, 1000.0), AREA).unwrap();
        assert!(fix.is_zero());
        assert_eq!(fix.edge, EdgeState::Right);
    }

    #[test]
    fn correction_is_idempotent() {
        let content = Size::new(3000.0, 700.0);
        let mut draw = Affine::translate((250.0, -40.0)) * Affine::scale(0.8);
        let first = correct(draw, content, AREA).unwrap();
        draw = draw.then_translate(first.delta);
        let second = correct(draw, content, AREA).unwrap();
        assert!(second.is_zero(), "{second:?}");
        assert_eq!(first.edge, second.edge);
    }

    #[test]
    fn degenerate_geometry_yields_nothing() {
        assert!(correct(Affine::scale(0.0), Size::new(10.0, 10.0), AREA).is_none());
        assert!(correct(Affine::IDENTITY, Size::ZERO, AREA).is_none());
        assert!(correct(Affine::IDENTITY, Size::new(10.0, 10.0), Size::ZERO).is_none());
        assert!(correct_rect(Rect::new(0.0, 0.0, f64::INFINITY, 1.0), AREA).is_none());
    }
}
