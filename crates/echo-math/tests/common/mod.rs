// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(dead_code)]

use core::f64::consts::{PI, TAU};

use echo_math::{AxisAngle, Scalar, Vec3};
use proptest::prelude::*;

pub fn approx_eq3<T: Scalar>(a: [T; 3], b: [T; 3], tol: f64) {
    for i in 0..3 {
        let diff = (a[i].to_f64() - b[i].to_f64()).abs();
        assert!(diff <= tol, "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol}");
    }
}

pub fn approx_eq9<T: Scalar>(a: [T; 9], b: [T; 9], tol: f64) {
    for i in 0..9 {
        let diff = (a[i].to_f64() - b[i].to_f64()).abs();
        assert!(diff <= tol, "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol}");
    }
}

fn close3(a: Vec3<f64>, b: Vec3<f64>, tol: f64) -> bool {
    (a - b).to_array().iter().all(|c| c.abs() <= tol)
}

/// `true` when `got` describes the same axis-angle as `expected`, either
/// directly or as the antiparallel pair `(2π - θ, -k)`.
pub fn same_axis_angle(expected: &AxisAngle<f64>, got: &AxisAngle<f64>, tol: f64) -> bool {
    let direct = (expected.angle() - got.angle()).abs() <= tol
        && close3(expected.axis(), got.axis(), tol);
    let flipped = ((TAU - expected.angle()) - got.angle()).abs() <= tol
        && close3(-expected.axis(), got.axis(), tol);
    direct || flipped
}

/// Random unit axis with components drawn from `[-1, 1]`.
pub fn unit_axis() -> impl Strategy<Value = Vec3<f64>> {
    prop::array::uniform3(-1.0_f64..1.0)
        .prop_map(Vec3::from)
        .prop_filter("axis too short", |v| v.length() > 0.1)
        .prop_map(|v| v.normalize())
}

/// Angles in `(0, 2π)` kept clear of the symmetric cases (0, π, 2π).
pub fn general_angle() -> impl Strategy<Value = f64> {
    prop_oneof![0.01..(PI - 0.01), (PI + 0.01)..(TAU - 0.01)]
}
