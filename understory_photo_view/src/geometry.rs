// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small matrix and rectangle helpers on top of Kurbo.
//!
//! Everything here is a pure function over value types. Matrices follow the
//! Kurbo convention: `a * b` applies `b` first, so "post-multiplying" a
//! transform `m` by `s` (apply `m`, then `s`) is written `s * m`.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use kurbo::{Affine, Point, Rect, Size};

/// Determinants smaller than this are treated as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// Maps a rectangle through `m` and returns the bounding box of the result.
#[must_use]
pub fn map_rect(m: Affine, rect: Rect) -> Rect {
    // Transform the four corners and take their bounding box; with rotation
    // the mapped shape is no longer axis-aligned.
    let q0 = m * Point::new(rect.x0, rect.y0);
    let q1 = m * Point::new(rect.x1, rect.y0);
    let q2 = m * Point::new(rect.x0, rect.y1);
    let q3 = m * Point::new(rect.x1, rect.y1);
    let min_x = q0.x.min(q1.x).min(q2.x).min(q3.x);
    let min_y = q0.y.min(q1.y).min(q2.y).min(q3.y);
    let max_x = q0.x.max(q1.x).max(q2.x).max(q3.x);
    let max_y = q0.y.max(q1.y).max(q2.y).max(q3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}

/// Euclidean scale of the first column, `sqrt(m00² + m10²)`.
///
/// Unlike reading `m00` directly this stays correct when the matrix also
/// rotates.
#[must_use]
pub fn scale_magnitude(m: Affine) -> f64 {
    let [a, b, ..] = m.as_coeffs();
    (a * a + b * b).sqrt()
}

/// Returns `true` if every coefficient is finite and the matrix can be
/// inverted.
#[must_use]
pub fn is_invertible(m: Affine) -> bool {
    m.is_finite() && m.determinant().abs() > SINGULAR_EPSILON
}

/// Returns `true` if the size has a strictly positive, finite area.
#[must_use]
pub fn is_positive(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Rectangle at the origin with the given size.
#[must_use]
pub fn rect_at_origin(size: Size) -> Rect {
    Rect::from_origin_size(Point::ORIGIN, size)
}

/// Linear interpolation between two scalars.
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Component-wise interpolation between two sizes.
#[must_use]
pub fn lerp_size(from: Size, to: Size, t: f64) -> Size {
    Size::new(lerp(from.width, to.width, t), lerp(from.height, to.height, t))
}

/// Edge-wise interpolation between two rectangles.
#[must_use]
pub fn lerp_rect(from: Rect, to: Rect, t: f64) -> Rect {
    Rect::new(
        lerp(from.x0, to.x0, t),
        lerp(from.y0, to.y0, t),
        lerp(from.x1, to.x1, t),
        lerp(from.y1, to.y1, t),
    )
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_2;

    use kurbo::{Affine, Point, Rect, Size};

    use super::*;

    #[test]
    fn map_rect_takes_bounding_box_under_rotation() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let mapped = map_rect(Affine::rotate(FRAC_PI_2), rect);
        assert!((mapped.width() - 100.0).abs() < 1e-9);
        assert!((mapped.height() - 200.0).abs() < 1e-9);
        assert!((mapped.x0 + 100.0).abs() < 1e-9);
    }

    #[test]
    fn scale_magnitude_ignores_rotation() {
        let m = Affine::rotate(0.7) * Affine::scale(2.5);
        assert!((scale_magnitude(m) - 2.5).abs() < 1e-12);
        let m = Affine::scale_about(1.5, Point::new(40.0, 10.0));
        assert!((scale_magnitude(m) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn singular_matrices_are_not_invertible() {
        assert!(is_invertible(Affine::IDENTITY));
        assert!(!is_invertible(Affine::scale(0.0)));
        assert!(!is_invertible(Affine::scale_non_uniform(1.0, f64::NAN)));
    }

    #[test]
    fn interpolation_endpoints() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 20.0, 30.0, 60.0);
        assert_eq!(lerp_rect(a, b, 0.0), a);
        assert_eq!(lerp_rect(a, b, 1.0), b);
        assert_eq!(lerp_rect(a, b, 0.5), Rect::new(5.0, 10.0, 20.0, 35.0));
        assert_eq!(
            lerp_size(Size::new(100.0, 50.0), Size::new(200.0, 150.0), 0.5),
            Size::new(150.0, 100.0)
        );
        assert!(!is_positive(Size::new(0.0, 10.0)));
        assert!(is_positive(Size::new(1.0, 10.0)));
    }
}
