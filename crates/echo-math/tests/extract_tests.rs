// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

use echo_math::{extract, AxisAngle, ExtractConfig, Mat3, Mat4, Vec3};
use proptest::prelude::*;

mod common;
use common::{approx_eq3, approx_eq9, general_angle, same_axis_angle, unit_axis};

#[test]
fn identity_extracts_zero_rotation_with_sentinel_axis() {
    let aa = AxisAngle::from_mat3(&Mat3::<f64>::identity());
    assert_eq!(aa.angle(), 0.0);
    assert_eq!(aa.axis().to_array(), [0.0, 0.0, 1.0]);

    let v = Vec3::new(3.0, -1.5, 0.25);
    assert_eq!(aa.transform(&v).to_array(), v.to_array());
}

#[test]
fn scaled_identity_columns_still_extract_zero() {
    let drifted = Mat3::from_rows([[1.001_f64, 0.0, 0.0], [0.0, 0.999, 0.0], [0.0, 0.0, 1.0005]]);
    let aa = AxisAngle::from_mat3(&drifted);
    assert_eq!(aa, AxisAngle::identity());
}

#[test]
fn half_turn_about_x_recovers_axis_and_pi() {
    let m = Mat3::from_axis_angle(&AxisAngle::new(PI, 1.0, 0.0, 0.0));
    let aa = AxisAngle::from_mat3(&m);
    assert!((aa.angle() - PI).abs() < 1e-12);
    let [x, y, z] = aa.axis().to_array();
    assert!((x.abs() - 1.0).abs() < 1e-9, "axis {:?}", aa.axis());
    assert!(y.abs() < 1e-9 && z.abs() < 1e-9, "axis {:?}", aa.axis());
}

#[test]
fn half_turn_pivots_on_each_dominant_component() {
    for axis in [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z] {
        let m = Mat3::from_axis_angle(&AxisAngle::from_axis(PI, axis));
        let aa = AxisAngle::from_mat3(&m);
        assert!((aa.angle() - PI).abs() < 1e-12);
        approx_eq3(aa.axis().to_array(), axis.to_array(), 1e-9);
    }
}

#[test]
fn half_turn_about_oblique_axis_rebuilds_same_matrix() {
    let axis = Vec3::new(1.0, -2.0, 0.5).normalize();
    let m = Mat3::from_axis_angle(&AxisAngle::from_axis(PI, axis));
    let aa = AxisAngle::from_mat3(&m);
    assert!((aa.angle() - PI).abs() < 1e-12);
    assert!((aa.axis().length() - 1.0).abs() < 1e-9);
    approx_eq9(aa.to_mat3().to_array(), m.to_array(), 1e-9);
}

#[test]
fn near_half_turn_inside_symmetry_tolerance_snaps_to_pi() {
    let axis = Vec3::new(0.0, 0.6, 0.8);
    let m = Mat3::from_axis_angle(&AxisAngle::from_axis(PI - 1e-6, axis));
    let aa = AxisAngle::from_mat3(&m);
    assert_eq!(aa.angle(), PI);
    approx_eq9(aa.to_mat3().to_array(), m.to_array(), 1e-5);
}

#[test]
fn column_scale_drift_is_tolerated() {
    let expected = AxisAngle::from_axis(FRAC_PI_3, Vec3::new(2.0, 1.0, -1.0).normalize());
    let m = expected.to_mat3();
    let mut data = m.to_array();
    // Stretch column 0 and shrink column 2.
    for value in &mut data[0..3] {
        *value *= 1.01;
    }
    for value in &mut data[6..9] {
        *value *= 0.98;
    }
    let aa = AxisAngle::from_mat3(&Mat3::new(data));
    assert!(same_axis_angle(&expected, &aa, 1e-9), "{aa}");
}

#[test]
fn mat4_rotation_block_ignores_translation() {
    let expected = AxisAngle::from_axis(FRAC_PI_2, Vec3::new(1.0, 1.0, 0.0).normalize());
    let m = Mat4::translation(4.0, -2.0, 7.5).multiply(&expected.to_mat4());
    let aa = AxisAngle::from_mat4(&m);
    assert!(same_axis_angle(&expected, &aa, 1e-9), "{aa}");
}

#[test]
fn single_precision_round_trip() {
    let expected = AxisAngle::new(1.2_f32, 0.0, 0.6, 0.8);
    let aa = AxisAngle::from_mat3(&expected.to_mat3());
    assert!((aa.angle() - 1.2).abs() < 1e-5);
    approx_eq3(aa.axis().to_array(), [0.0, 0.6, 0.8], 1e-5);
}

#[test]
fn from_conversion_uses_default_tolerances() {
    let m = Mat3::from_axis_angle(&AxisAngle::new(0.75_f64, 0.0, 0.0, 1.0));
    let via_from = AxisAngle::from(&m);
    let via_extract = extract(&m, &ExtractConfig::default());
    assert_eq!(via_from, via_extract);
}

proptest! {
    #[test]
    fn matrix_round_trip_reproduces_axis_angle(axis in unit_axis(), angle in general_angle()) {
        let expected = AxisAngle::from_axis(angle, axis);
        let got = AxisAngle::from_mat3(&expected.to_mat3());
        prop_assert!(got.angle() <= PI + 1e-12);
        prop_assert!((got.axis().length() - 1.0).abs() < 1e-9);
        prop_assert!(
            same_axis_angle(&expected, &got, 1e-5),
            "expected {} got {}", expected, got
        );
    }

    #[test]
    fn extracted_rotation_rebuilds_source_matrix(axis in unit_axis(), angle in 0.0_f64..core::f64::consts::TAU) {
        let m = AxisAngle::from_axis(angle, axis).to_mat3();
        let rebuilt = AxisAngle::from_mat3(&m).to_mat3();
        approx_eq9(rebuilt.to_array(), m.to_array(), 1e-4);
    }
}
