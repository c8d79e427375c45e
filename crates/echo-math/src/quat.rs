// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::{read_exact, MathError};
use crate::{Mat3, Mat4, Scalar, Vec3};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * All angles are expressed in radians.
/// * `q` and `-q` encode the same rotation; see [`Quat::negate`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<T> {
    data: [T; 4],
}

impl<T: Scalar> Quat<T> {
    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE)
    }

    /// Reads `(x, y, z, w)` from a slice of exactly four scalars.
    pub fn try_from_slice(values: &[T]) -> Result<Self, MathError> {
        read_exact(values).map(|data| Self { data })
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [T; 4] {
        self.data
    }

    fn component(&self, idx: usize) -> T {
        self.data[idx]
    }

    /// X component of the vector part.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y component of the vector part.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Z component of the vector part.
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Scalar part.
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// The axis is normalized here. Returns the identity quaternion when the
    /// axis length is ≤ `EPSILON`. See [`crate::AxisAngle::to_quat`] for the
    /// raw conversion that uses the axis as stored.
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let len_sq = axis.length_squared();
        if len_sq <= T::EPSILON * T::EPSILON {
            return Self::identity();
        }
        let norm_axis = axis.scale(T::ONE / len_sq.sqrt());
        let (sin_half, cos_half) = (angle * T::HALF).sin_cos();
        let scaled = norm_axis.scale(sin_half);
        Self::new(
            scaled.component(0),
            scaled.component(1),
            scaled.component(2),
            cos_half,
        )
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: the result composes the rotation represented by
    /// `self` followed by the rotation represented by `other`. Quaternion
    /// multiplication is non‑commutative.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use echo_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    /// assert_ne!(yaw.multiply(&pitch).to_array(), pitch.multiply(&yaw).to_array());
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Four-dimensional dot product; `|dot| ≈ 1` for equal rotations.
    pub fn dot(&self, other: &Self) -> T {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
            + self.component(3) * other.component(3)
    }

    /// Negates every component, yielding the double-cover partner `-q`.
    pub fn negate(&self) -> Self {
        Self::new(
            -self.component(0),
            -self.component(1),
            -self.component(2),
            -self.component(3),
        )
    }

    /// Normalises the quaternion; returns identity when norm is ~0.
    pub fn normalize(&self) -> Self {
        let len = self.dot(self).sqrt();
        if len <= T::EPSILON {
            return Self::identity();
        }
        let inv = T::ONE / len;
        Self::new(
            self.component(0) * inv,
            self.component(1) * inv,
            self.component(2) * inv,
            self.component(3) * inv,
        )
    }

    /// Converts the quaternion to a 3×3 rotation matrix.
    pub fn to_mat3(&self) -> Mat3<T> {
        let q = self.normalize();
        let [x, y, z, w] = q.data;
        let two = T::TWO;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat3::new([
            T::ONE - two * (yy + zz),
            two * (xy + wz),
            two * (xz - wy),
            two * (xy - wz),
            T::ONE - two * (xx + zz),
            two * (yz + wx),
            two * (xz + wy),
            two * (yz - wx),
            T::ONE - two * (xx + yy),
        ])
    }

    /// Converts the quaternion to a rotation matrix (column-major 4×4).
    pub fn to_mat4(&self) -> Mat4<T> {
        Mat4::from_rotation_block(&self.to_mat3())
    }
}

/// Converts a 4‑element array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl<T> From<[T; 4]> for Quat<T> {
    fn from(value: [T; 4]) -> Self {
        Self { data: value }
    }
}
