// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Rect, Size};

/// Size of the display surface plus its padding.
///
/// Fitting and bounds enforcement both work inside the padding-adjusted
/// [`Viewport::content_area`]; hosts offset the published matrix by the
/// leading padding when drawing.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    /// Full surface size in device pixels.
    pub size: Size,
    /// Padding on each side. Negative values are treated as zero.
    pub padding: Insets,
}

impl Viewport {
    /// Viewport of the given size with no padding.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            padding: Insets::ZERO,
        }
    }

    /// Builds a viewport from the layout bounds reported by the host.
    #[must_use]
    pub fn from_layout(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(Rect::new(left, top, right, bottom).abs().size())
    }

    /// Returns a copy with the given padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Size left for content once padding is removed; never negative.
    #[must_use]
    pub fn content_area(&self) -> Size {
        let horizontal = self.padding.x0.max(0.0) + self.padding.x1.max(0.0);
        let vertical = self.padding.y0.max(0.0) + self.padding.y1.max(0.0);
        Size::new(
            (self.size.width - horizontal).max(0.0),
            (self.size.height - vertical).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Size};

    use super::Viewport;

    #[test]
    fn content_area_removes_padding() {
        let vp =
            Viewport::new(Size::new(100.0, 80.0)).with_padding(Insets::new(5.0, 10.0, 15.0, 0.0));
        assert_eq!(vp.content_area(), Size::new(80.0, 70.0));
    }

    #[test]
    fn oversized_padding_clamps_to_zero() {
        let vp = Viewport::new(Size::new(10.0, 10.0)).with_padding(Insets::uniform(20.0));
        assert_eq!(vp.content_area(), Size::ZERO);
    }

    #[test]
    fn layout_bounds_are_normalized() {
        let vp = Viewport::from_layout(100.0, 50.0, 20.0, 250.0);
        assert_eq!(vp.size, Size::new(80.0, 200.0));
    }
}
