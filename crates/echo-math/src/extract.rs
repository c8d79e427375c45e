// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Rotation matrix → axis-angle extraction.
//!
//! A rotation matrix `R` satisfies `R - Rᵀ = 2·sin(θ)·[k]ₓ`, so its skew part
//! yields the axis directly except where `sin(θ)` vanishes. Those two
//! degenerate cases (θ = 0 and θ = π) leave `R` symmetric and are resolved by
//! dedicated branches:
//!
//! - identity: angle `0` with the sentinel axis `+Z`;
//! - half turn: angle `π` with the axis recovered from `R = 2·k kᵀ - I`,
//!   pivoting on the largest squared component.

use tracing::trace;

use crate::numeric::safe_acos;
use crate::{AxisAngle, ExtractConfig, Mat3, Scalar, Vec3};

/// Extracts the axis-angle equivalent of the rotation `m`.
///
/// `m` is expected to be orthonormal. Each column is first rescaled to unit
/// length, which tolerates scale drift but does not repair skew; input that
/// is not a rotation produces meaningless (possibly non-finite) output rather
/// than an error.
///
/// The returned angle lies in `[0, π]` and the axis is unit length, except
/// for the zero rotation which reports the fixed axis `(0, 0, 1)`.
///
/// # Examples
/// ```
/// use core::f64::consts::FRAC_PI_2;
/// use echo_math::{extract, AxisAngle, ExtractConfig, Mat3};
/// let m = Mat3::from_axis_angle(&AxisAngle::new(FRAC_PI_2, 0.0, 1.0, 0.0));
/// let aa = extract(&m, &ExtractConfig::default());
/// assert!((aa.angle() - FRAC_PI_2).abs() < 1e-12);
/// assert!((aa.axis().y() - 1.0).abs() < 1e-12);
/// ```
pub fn extract<T: Scalar>(m: &Mat3<T>, config: &ExtractConfig<T>) -> AxisAngle<T> {
    let n = m.normalize_columns();
    let skew = Vec3::new(
        n.at(2, 1) - n.at(1, 2),
        n.at(0, 2) - n.at(2, 0),
        n.at(1, 0) - n.at(0, 1),
    );

    let eps = config.symmetry_epsilon;
    if skew.x().abs() < eps && skew.y().abs() < eps && skew.z().abs() < eps {
        return extract_symmetric(&n, config.identity_epsilon);
    }

    let s = skew.length();
    let angle = safe_acos((n.trace() - T::ONE) * T::HALF);
    AxisAngle::from_axis(
        angle,
        Vec3::new(skew.x() / s, skew.y() / s, skew.z() / s),
    )
}

/// Handles a symmetric (θ = 0 or θ = π) rotation matrix.
fn extract_symmetric<T: Scalar>(n: &Mat3<T>, identity_eps: T) -> AxisAngle<T> {
    let sum_xy = n.at(1, 0) + n.at(0, 1);
    let sum_xz = n.at(2, 0) + n.at(0, 2);
    let sum_yz = n.at(2, 1) + n.at(1, 2);

    if sum_xy.abs() < identity_eps
        && sum_xz.abs() < identity_eps
        && sum_yz.abs() < identity_eps
        && (n.trace() - T::from_f64(3.0)).abs() < identity_eps
    {
        trace!("identity rotation matrix; reporting sentinel axis");
        return AxisAngle::identity();
    }

    let quarter = T::HALF * T::HALF;
    // Rounding can push these estimates slightly below zero near the branch
    // boundary; clamp so the pivot square root stays real.
    let xx = ((n.at(0, 0) + T::ONE) * T::HALF).max(T::ZERO);
    let yy = ((n.at(1, 1) + T::ONE) * T::HALF).max(T::ZERO);
    let zz = ((n.at(2, 2) + T::ONE) * T::HALF).max(T::ZERO);
    let xy = sum_xy * quarter;
    let xz = sum_xz * quarter;
    let yz = sum_yz * quarter;

    let axis = if xx >= yy && xx >= zz {
        trace!(pivot = "x", %xx, "half-turn rotation matrix");
        let x = xx.sqrt();
        Vec3::new(x, xy / x, xz / x)
    } else if yy >= zz {
        trace!(pivot = "y", %yy, "half-turn rotation matrix");
        let y = yy.sqrt();
        Vec3::new(xy / y, y, yz / y)
    } else {
        trace!(pivot = "z", %zz, "half-turn rotation matrix");
        let z = zz.sqrt();
        Vec3::new(xz / z, yz / z, z)
    };
    AxisAngle::from_axis(T::PI, axis)
}
