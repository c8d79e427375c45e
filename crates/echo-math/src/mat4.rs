// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::{read_exact, MathError};
use crate::{AxisAngle, Mat3, Quat, Scalar, Vec3};

/// Column‑major 4×4 matrix matching Echo’s math layout.
///
/// - Stored in column‑major order to align with GPU uploads.
/// - Represents affine transforms; helper methods treat points
///   homogeneously (`w = 1`) and directions with `w = 0`.
/// - The upper-left 3×3 block is the rotational part read by
///   [`AxisAngle::from_mat4`].
///
/// # Examples
/// ```
/// use echo_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0_f32, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<T> {
    data: [T; 16],
}

impl<T: Scalar> Mat4<T> {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::scale(T::ONE, T::ONE, T::ONE)
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    #[rustfmt::skip]
    pub const fn translation(tx: T, ty: T, tz: T) -> Self {
        Self {
            data: [
                T::ONE, T::ZERO, T::ZERO, T::ZERO, // col 0
                T::ZERO, T::ONE, T::ZERO, T::ZERO, // col 1
                T::ZERO, T::ZERO, T::ONE, T::ZERO, // col 2
                tx, ty, tz, T::ONE,                // col 3 (translation)
            ],
        }
    }

    /// Builds a non-uniform scale matrix.
    #[rustfmt::skip]
    pub const fn scale(sx: T, sy: T, sz: T) -> Self {
        Self {
            data: [
                sx, T::ZERO, T::ZERO, T::ZERO,     // col 0
                T::ZERO, sy, T::ZERO, T::ZERO,     // col 1
                T::ZERO, T::ZERO, sz, T::ZERO,     // col 2
                T::ZERO, T::ZERO, T::ZERO, T::ONE, // col 3
            ],
        }
    }

    /// Embeds a 3×3 rotation as the upper-left block, with no translation.
    pub fn from_rotation_block(block: &Mat3<T>) -> Self {
        let mut data = Self::identity().data;
        for col in 0..3 {
            for row in 0..3 {
                data[col * 4 + row] = block.at(row, col);
            }
        }
        Self { data }
    }

    /// Upper-left 3×3 block (rotation and scale, translation dropped).
    pub fn rotation_block(&self) -> Mat3<T> {
        let mut rows = [[T::ZERO; 3]; 3];
        for (row, values) in rows.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.at(row, col);
            }
        }
        Mat3::from_rows(rows)
    }

    /// Builds a rotation matrix from an axis and angle in radians.
    ///
    /// The axis is normalized internally; a zero-length axis yields the
    /// identity rotation. Results match [`Quat::from_axis_angle`].
    pub fn rotation_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        Self::from_quat(&Quat::from_axis_angle(axis, angle))
    }

    /// Builds the rotation matrix for a stored axis-angle.
    ///
    /// Unlike [`Mat4::rotation_axis_angle`] the axis is used as stored.
    pub fn from_axis_angle(aa: &AxisAngle<T>) -> Self {
        Self::from_rotation_block(&Mat3::from_axis_angle(aa))
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new([
            l, o,  o, o,
            o, c,  s, o,
            o, -s, c, o,
            o, o,  o, l,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new([
            c, o, -s, o,
            o, l, o,  o,
            s, o, c,  o,
            o, o, o,  l,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new([
            c,  s, o, o,
            -s, c, o, o,
            o,  o, l, o,
            o,  o, o, l,
        ])
    }

    /// Constructs a matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat<T>) -> Self {
        q.to_mat4()
    }

    /// Builds a rotation matrix from Euler angles in radians.
    ///
    /// Ordering: `R = R_y(yaw) * R_x(pitch) * R_z(roll)` using column‑major,
    /// left‑multiplication semantics consistent with this module.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use echo_math::{Mat4, Vec3};
    /// // Yaw=90°: +Z maps to +X
    /// let r = Mat4::rotation_from_euler(FRAC_PI_2, 0.0, 0.0);
    /// let v = r.transform_direction(&Vec3::UNIT_Z);
    /// assert!((v.to_array()[0] - 1.0).abs() < 1e-6);
    /// ```
    pub fn rotation_from_euler(yaw: T, pitch: T, roll: T) -> Self {
        Self::rotation_y(yaw)
            .multiply(&Self::rotation_x(pitch))
            .multiply(&Self::rotation_z(roll))
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [T; 16]) -> Self {
        Self { data }
    }

    /// Reads 16 column-major scalars from a slice.
    pub fn try_from_slice(values: &[T]) -> Result<Self, MathError> {
        read_exact(values).map(Self::new)
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [T; 16] {
        self.data
    }

    /// Element at `row`, `col`.
    pub fn at(&self, row: usize, col: usize) -> T {
        self.data[col * 4 + row]
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [T::ZERO; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = T::ZERO;
                for k in 0..4 {
                    sum = sum + self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3<T>) -> Vec3<T> {
        let moved = self.transform_direction(point);
        Vec3::new(
            moved.component(0) + self.at(0, 3),
            moved.component(1) + self.at(1, 3),
            moved.component(2) + self.at(2, 3),
        )
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3<T>) -> Vec3<T> {
        let x = direction.component(0);
        let y = direction.component(1);
        let z = direction.component(2);

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z;

        Vec3::new(nx, ny, nz)
    }
}

impl<T> From<[T; 16]> for Mat4<T> {
    fn from(value: [T; 16]) -> Self {
        Self { data: value }
    }
}

impl<T: Scalar> core::ops::Mul for Mat4<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
