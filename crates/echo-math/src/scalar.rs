// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Floating-point scalar abstraction for Echo math.
//!
//! Every value type in this crate is generic over [`Scalar`], which is
//! implemented for `f32` and `f64`. The two precisions share one code path;
//! the concrete aliases (`Vec3f`, `AxisAngled`, ...) are thin names over the
//! generic types.
//!
//! Determinism contract:
//! - Transcendentals (`sin`, `cos`, `acos`, `sqrt`) route through `libm`
//!   rather than platform intrinsics so identical inputs produce identical
//!   bits on every supported target.
//! - `canonical_bits` folds `-0.0` onto `+0.0`; equality and hashing of value
//!   types are defined on these bits.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Floating-point scalar with deterministic transcendentals.
///
/// Arithmetic is required through the standard operator traits so generic
/// code can use `+`, `-`, `*`, `/` and unary `-` directly.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// `2`.
    const TWO: Self;
    /// `0.5`.
    const HALF: Self;
    /// Archimedes' constant (π).
    const PI: Self;
    /// Full turn (2π).
    const TAU: Self;
    /// Quarter turn (π/2).
    const FRAC_PI_2: Self;
    /// Degeneracy threshold used when detecting zero-length vectors.
    const EPSILON: Self;

    /// Sine of `self` (radians).
    fn sin(self) -> Self;

    /// Cosine of `self` (radians).
    fn cos(self) -> Self;

    /// Sine and cosine of `self` (radians) with shared range reduction.
    fn sin_cos(self) -> (Self, Self);

    /// Arccosine of `self`; `NaN` outside `[-1, 1]`. See
    /// [`crate::numeric::safe_acos`] for the clamped variant.
    fn acos(self) -> Self;

    /// Square root of `self`.
    fn sqrt(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Truncated remainder (`fmod`): the result carries the sign of `self`.
    fn rem(self, rhs: Self) -> Self;

    /// Largest integer value not greater than `self`.
    fn floor(self) -> Self;

    /// `true` when `self` is neither infinite nor `NaN`.
    fn is_finite(self) -> bool;

    /// Larger of two values, ignoring `NaN`.
    fn max(self, other: Self) -> Self;

    /// Smaller of two values, ignoring `NaN`.
    fn min(self, other: Self) -> Self;

    /// Converts from `f64`, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;

    /// Widens (or passes through) to `f64` for diagnostics and interop.
    fn to_f64(self) -> f64;

    /// Bit pattern with `-0.0` canonicalized to `+0.0`.
    fn canonical_bits(self) -> u64;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;
    const PI: Self = core::f32::consts::PI;
    const TAU: Self = core::f32::consts::TAU;
    const FRAC_PI_2: Self = core::f32::consts::FRAC_PI_2;
    const EPSILON: Self = 1e-6;

    fn sin(self) -> Self {
        libm::sinf(self)
    }

    fn cos(self) -> Self {
        libm::cosf(self)
    }

    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }

    fn acos(self) -> Self {
        libm::acosf(self)
    }

    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    fn abs(self) -> Self {
        libm::fabsf(self)
    }

    fn rem(self, rhs: Self) -> Self {
        libm::fmodf(self, rhs)
    }

    fn floor(self) -> Self {
        libm::floorf(self)
    }

    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    fn max(self, other: Self) -> Self {
        libm::fmaxf(self, other)
    }

    fn min(self, other: Self) -> Self {
        libm::fminf(self, other)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn canonical_bits(self) -> u64 {
        u64::from((self + 0.0).to_bits())
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;
    const PI: Self = core::f64::consts::PI;
    const TAU: Self = core::f64::consts::TAU;
    const FRAC_PI_2: Self = core::f64::consts::FRAC_PI_2;
    const EPSILON: Self = 1e-6;

    fn sin(self) -> Self {
        libm::sin(self)
    }

    fn cos(self) -> Self {
        libm::cos(self)
    }

    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }

    fn acos(self) -> Self {
        libm::acos(self)
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    fn abs(self) -> Self {
        libm::fabs(self)
    }

    fn rem(self, rhs: Self) -> Self {
        libm::fmod(self, rhs)
    }

    fn floor(self) -> Self {
        libm::floor(self)
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    fn max(self, other: Self) -> Self {
        libm::fmax(self, other)
    }

    fn min(self, other: Self) -> Self {
        libm::fmin(self, other)
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn canonical_bits(self) -> u64 {
        (self + 0.0).to_bits()
    }
}
