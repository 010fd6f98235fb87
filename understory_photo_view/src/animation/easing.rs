// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `cos`

use core::f64::consts::PI;

/// Maps linear time in `[0, 1]` to animation progress.
#[derive(Clone, Copy, Debug, Default)]
pub enum Interpolator {
    /// Constant speed.
    Linear,
    /// Slow start and end, `cos((t + 1)π) / 2 + 0.5`.
    #[default]
    AccelerateDecelerate,
    /// Cubic ease-out.
    EaseOut,
    /// Cubic S-curve.
    EaseInOut,
    /// Any curve. It should map `0` to `0` and `1` to `1`.
    Custom(fn(f64) -> f64),
}

impl Interpolator {
    /// Applies the curve to `t`, which is clamped to `[0, 1]` first.
    ///
    /// Non-finite output from a custom curve is treated as complete.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        let eased = match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let p = -2.0 * t + 2.0;
                    1.0 - p * p * p / 2.0
                }
            }
            Self::Custom(f) => f(t),
        };
        if eased.is_finite() { eased } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::Interpolator;

    #[test]
    fn curves_hit_endpoints() {
        for curve in [
            Interpolator::Linear,
            Interpolator::AccelerateDecelerate,
            Interpolator::EaseOut,
            Interpolator::EaseInOut,
        ] {
            assert!(curve.apply(0.0).abs() < 1e-12, "{curve:?}");
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-12, "{curve:?}");
            assert!((curve.apply(0.5) - 0.5).abs() < 0.4, "{curve:?}");
        }
    }

    #[test]
    fn accelerate_decelerate_is_symmetric() {
        let c = Interpolator::AccelerateDecelerate;
        assert!((c.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((c.apply(0.25) + c.apply(0.75) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn input_is_clamped_and_custom_is_guarded() {
        assert_eq!(Interpolator::Linear.apply(2.0), 1.0);
        assert_eq!(Interpolator::Linear.apply(-1.0), 0.0);
        assert_eq!(Interpolator::Custom(|_| f64::NAN).apply(0.3), 1.0);
        assert_eq!(Interpolator::Custom(|t| t * t).apply(0.5), 0.25);
    }
}
