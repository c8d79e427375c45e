// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f64::consts::{FRAC_PI_2, PI};

use echo_math::{AxisAngle, Quat, Vec3};
use proptest::prelude::*;
use proptest::test_runner::Config as PropConfig;

mod common;
use common::{approx_eq3, approx_eq9, general_angle, same_axis_angle, unit_axis};

fn unit_quat() -> impl Strategy<Value = Quat<f64>> {
    prop::array::uniform4(-1.0_f64..1.0)
        .prop_map(Quat::from)
        .prop_filter("quaternion too short", |q| q.dot(q) > 0.01)
        .prop_map(|q| q.normalize())
}

fn assert_same_rotation(a: &Quat<f64>, b: &Quat<f64>, tol: f64) {
    let direct = a
        .to_array()
        .iter()
        .zip(b.to_array())
        .all(|(x, y)| (x - y).abs() <= tol);
    let negated = a
        .negate()
        .to_array()
        .iter()
        .zip(b.to_array())
        .all(|(x, y)| (x - y).abs() <= tol);
    assert!(direct || negated, "{a:?} vs {b:?}");
}

#[test]
fn identity_quaternion_yields_sentinel_axis() {
    let aa = AxisAngle::from_quat(&Quat::<f64>::identity());
    assert_eq!(aa.angle(), 0.0);
    assert_eq!(aa.axis().to_array(), [0.0, 0.0, 1.0]);
    assert_eq!(aa, AxisAngle::from_mat3(&Quat::identity().to_mat3()));
}

#[test]
fn negated_identity_quaternion_is_also_zero_rotation() {
    let aa = AxisAngle::from_quat(&Quat::<f64>::new(0.0, 0.0, 0.0, -1.0));
    assert_eq!(aa.angle(), 0.0);
    assert_eq!(aa.axis().to_array(), [0.0, 0.0, 1.0]);
}

#[test]
fn drifted_scalar_part_falls_back_instead_of_nan() {
    let aa = AxisAngle::from_quat(&Quat::<f32>::new(0.0, 0.0, 0.0, 1.000_001));
    assert!(aa.angle().is_finite());
    assert_eq!(aa.axis().to_array(), [0.0, 0.0, 1.0]);
}

#[test]
fn quarter_turn_about_y() {
    let q = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    let aa = AxisAngle::from(q);
    assert!((aa.angle() - FRAC_PI_2).abs() < 1e-12);
    approx_eq3(aa.axis().to_array(), [0.0, 1.0, 0.0], 1e-12);
}

#[test]
fn negative_scalar_part_reports_angle_above_pi() {
    let q = Quat::from_axis_angle(Vec3::UNIT_X, 1.5 * PI);
    assert!(q.w() < 0.0);
    let aa = AxisAngle::from_quat(&q);
    assert!((aa.angle() - 1.5 * PI).abs() < 1e-12);
    approx_eq3(aa.axis().to_array(), [1.0, 0.0, 0.0], 1e-12);
}

#[test]
fn to_quat_uses_half_angle() {
    let q: Quat<f64> = AxisAngle::new(PI, 0.0, 0.0, 1.0).into();
    let [x, y, z, w] = q.to_array();
    assert!(x.abs() < 1e-15 && y.abs() < 1e-15);
    assert!((z - 1.0).abs() < 1e-15);
    assert!(w.abs() < 1e-15);
}

#[test]
fn to_quat_matches_normalizing_constructor_for_unit_axis() {
    let axis = Vec3::new(0.48, 0.6, 0.64);
    let raw = AxisAngle::from_axis(2.0, axis).to_quat();
    let normalized = Quat::from_axis_angle(axis, 2.0);
    assert_same_rotation(&raw, &normalized, 1e-12);
}

proptest! {
    #![proptest_config(PropConfig::with_cases(1000))]

    #[test]
    fn quaternion_round_trip_up_to_double_cover(q in unit_quat()) {
        let back = AxisAngle::from_quat(&q).to_quat();
        assert_same_rotation(&q, &back, 1e-6);
    }
}

proptest! {
    #[test]
    fn axis_angle_round_trip_through_quaternion(axis in unit_axis(), angle in general_angle()) {
        let expected = AxisAngle::from_axis(angle, axis);
        let got = AxisAngle::from_quat(&expected.to_quat());
        prop_assert!(same_axis_angle(&expected, &got, 1e-9), "expected {} got {}", expected, got);
    }

    #[test]
    fn quaternion_and_matrix_paths_agree(q in unit_quat()) {
        let via_quat = AxisAngle::from_quat(&q).to_mat3();
        let via_matrix = AxisAngle::from_mat3(&q.to_mat3()).to_mat3();
        approx_eq9(via_quat.to_array(), via_matrix.to_array(), 1e-4);
    }
}
