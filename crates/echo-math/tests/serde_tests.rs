// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![cfg(feature = "serde")]
use core::f64::consts::{FRAC_PI_2, PI};

use echo_math::{AxisAngle, ExtractConfig, Mat3, Vec3};

#[test]
fn axis_angle_deserialization_canonicalizes_angle() {
    let json = format!(r#"{{"angle":{},"axis":[0.0,0.0,1.0]}}"#, -FRAC_PI_2);
    let aa: AxisAngle<f64> = serde_json::from_str(&json).unwrap();
    assert!((aa.angle() - 3.0 * FRAC_PI_2).abs() < 1e-12);
    assert_eq!(aa.axis(), Vec3::UNIT_Z);
}

#[test]
fn axis_angle_serializes_canonical_form() {
    let aa = AxisAngle::new(5.0 * PI, 1.0_f64, 0.0, 0.0);
    let value = serde_json::to_value(aa).unwrap();
    let angle = value["angle"].as_f64().unwrap();
    assert!((angle - PI).abs() < 1e-12);
    let back: AxisAngle<f64> = serde_json::from_value(value).unwrap();
    assert_eq!(back, aa);
}

#[test]
fn extract_config_fills_missing_fields_with_defaults() {
    let cfg: ExtractConfig<f64> = serde_json::from_str(r#"{"symmetry_epsilon":1e-6}"#).unwrap();
    assert_eq!(cfg.symmetry_epsilon, 1e-6);
    assert_eq!(cfg.identity_epsilon, ExtractConfig::<f64>::default().identity_epsilon);

    // 4e-5 rad: symmetric under the default tolerance, general under this one.
    let m = Mat3::from_axis_angle(&AxisAngle::new(4e-5, 0.0, 0.0, 1.0));
    assert!(AxisAngle::from_mat3_with(&m, &cfg).angle() > 0.0);
    assert_eq!(AxisAngle::from_mat3(&m).angle(), 0.0);
}

#[test]
fn vec3_serializes_as_plain_array() {
    let v = Vec3::new(1.0_f64, -2.0, 0.5);
    assert_eq!(serde_json::to_string(&v).unwrap(), "[1.0,-2.0,0.5]");
    let back: Vec3<f64> = serde_json::from_str("[1.0,-2.0,0.5]").unwrap();
    assert_eq!(back, v);
}
