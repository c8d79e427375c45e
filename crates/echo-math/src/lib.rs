// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-math: vectors, matrices, quaternions and axis-angle rotations.
//!
//! The centre of the crate is the conversion between rotation
//! representations: extracting an [`AxisAngle`] from a rotation matrix or a
//! unit quaternion, and applying an axis-angle back to vectors and matrices.
//! The degenerate rotations (zero and half turn) are handled by explicit
//! branches rather than errors.
//!
//! Every type is generic over [`Scalar`] (`f32` or `f64`); the `*f`/`*d`
//! aliases name the two precisions. Transcendentals go through `libm` so
//! results are bit-identical across targets.
#![forbid(unsafe_code)]

mod axis_angle;
mod config;
mod error;
mod extract;
mod mat3;
mod mat4;
pub mod numeric;
mod quat;
mod scalar;
mod vec3;

pub use axis_angle::AxisAngle;
pub use config::ExtractConfig;
pub use error::MathError;
pub use extract::extract;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::Scalar;
pub use vec3::Vec3;

/// Single-precision [`Vec3`].
pub type Vec3f = Vec3<f32>;
/// Double-precision [`Vec3`].
pub type Vec3d = Vec3<f64>;
/// Single-precision [`Mat3`].
pub type Mat3f = Mat3<f32>;
/// Double-precision [`Mat3`].
pub type Mat3d = Mat3<f64>;
/// Single-precision [`Mat4`].
pub type Mat4f = Mat4<f32>;
/// Double-precision [`Mat4`].
pub type Mat4d = Mat4<f64>;
/// Single-precision [`Quat`].
pub type Quatf = Quat<f32>;
/// Double-precision [`Quat`].
pub type Quatd = Quat<f64>;
/// Single-precision [`AxisAngle`].
pub type AxisAnglef = AxisAngle<f32>;
/// Double-precision [`AxisAngle`].
pub type AxisAngled = AxisAngle<f64>;
