// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Stateless scalar helpers shared by the rotation conversions.

use crate::Scalar;

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp<T: Scalar>(value: T, min: T, max: T) -> T {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians.
pub fn deg_to_rad<T: Scalar>(value: T) -> T {
    value * (T::TAU / T::from_f64(360.0))
}

/// Converts radians to degrees.
pub fn rad_to_deg<T: Scalar>(value: T) -> T {
    value * (T::from_f64(360.0) / T::TAU)
}

/// Arccosine with its argument clamped to `[-1, 1]`.
///
/// Rounding can push a cosine estimate such as `(trace - 1) / 2` slightly
/// outside the domain; clamping maps it to `0` or `π` instead of `NaN`.
///
/// # Examples
/// ```
/// use echo_math::numeric::safe_acos;
/// assert_eq!(safe_acos(1.0000001_f64), 0.0);
/// assert!((safe_acos(-1.0000001_f64) - core::f64::consts::PI).abs() < 1e-12);
/// ```
pub fn safe_acos<T: Scalar>(value: T) -> T {
    clamp(value, -T::ONE, T::ONE).acos()
}

/// Inverse square root, `1 / sqrt(value)`.
///
/// Returns `+inf` for `value == 0`; callers test the result with
/// [`Scalar::is_finite`] to detect a vanishing norm.
pub fn inv_sqrt<T: Scalar>(value: T) -> T {
    T::ONE / value.sqrt()
}

/// Reconstructs `cos(angle)` from an already computed `sin(angle)`.
///
/// The magnitude is `sqrt(1 - sin²)`; the sign follows the quadrant of
/// `angle` (positive when `angle + π/2` wraps into `[0, π)`). Precision
/// degrades where `|sin|` approaches 1, so [`crate::AxisAngle::transform`]
/// uses a direct `sin_cos` instead.
pub fn cos_from_sin<T: Scalar>(sin: T, angle: T) -> T {
    let magnitude = (T::ONE - sin * sin).max(T::ZERO).sqrt();
    let shifted = angle + T::FRAC_PI_2;
    let wrapped = shifted - (shifted / T::TAU).floor() * T::TAU;
    if wrapped < T::PI {
        magnitude
    } else {
        -magnitude
    }
}

/// Wraps `angle` into the canonical `[0, 2π)` range.
///
/// Negative inputs are shifted up by one full turn after the remainder, and
/// the result is reduced once more so that a remainder of `-0` or one that
/// rounds up to exactly `2π` lands on `0`.
///
/// # Examples
/// ```
/// use core::f64::consts::{FRAC_PI_2, PI};
/// use echo_math::numeric::wrap_angle;
/// assert!((wrap_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-12);
/// assert!((wrap_angle(5.0 * PI) - PI).abs() < 1e-12);
/// ```
pub fn wrap_angle<T: Scalar>(angle: T) -> T {
    let reduced = angle.rem(T::TAU);
    let shifted = if angle < T::ZERO {
        reduced + T::TAU
    } else {
        reduced
    };
    shifted.rem(T::TAU)
}
