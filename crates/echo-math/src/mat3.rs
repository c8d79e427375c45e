// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::{read_exact, MathError};
use crate::numeric::inv_sqrt;
use crate::{AxisAngle, Scalar, Vec3};

/// Column‑major 3×3 matrix, the rotation view consumed by
/// [`AxisAngle::from_mat3`].
///
/// `at(row, col)` addresses `m[row][col]`; storage is column-major to match
/// [`crate::Mat4`] and GPU uploads.
///
/// # Examples
/// ```
/// use echo_math::{Mat3, Vec3};
/// let m = Mat3::from_rows([[0.0_f32, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
/// assert_eq!(m.transform(&Vec3::UNIT_X).to_array(), [0.0, 1.0, 0.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3<T> {
    data: [T; 9],
}

impl<T: Scalar> Mat3<T> {
    /// Returns the identity matrix.
    #[rustfmt::skip]
    pub const fn identity() -> Self {
        Self {
            data: [
                T::ONE, T::ZERO, T::ZERO, // col 0
                T::ZERO, T::ONE, T::ZERO, // col 1
                T::ZERO, T::ZERO, T::ONE, // col 2
            ],
        }
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [T; 9]) -> Self {
        Self { data }
    }

    /// Creates a matrix from row-major rows (`rows[row][col]`).
    pub fn from_rows(rows: [[T; 3]; 3]) -> Self {
        let mut data = [T::ZERO; 9];
        for (row, values) in rows.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                data[col * 3 + row] = *value;
            }
        }
        Self { data }
    }

    /// Reads 9 column-major scalars from a slice.
    pub fn try_from_slice(values: &[T]) -> Result<Self, MathError> {
        read_exact(values).map(Self::new)
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [T; 9] {
        self.data
    }

    /// Element at `row`, `col`.
    pub fn at(&self, row: usize, col: usize) -> T {
        self.data[col * 3 + row]
    }

    /// Column `col` as a vector.
    pub fn column(&self, col: usize) -> Vec3<T> {
        Vec3::new(self.at(0, col), self.at(1, col), self.at(2, col))
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> T {
        self.at(0, 0) + self.at(1, 1) + self.at(2, 2)
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut out = [T::ZERO; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[row * 3 + col] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [T::ZERO; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = T::ZERO;
                for k in 0..3 {
                    sum = sum + self.at(row, k) * rhs.at(k, col);
                }
                out[col * 3 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Applies the matrix to a vector (`self * v`).
    pub fn transform(&self, v: &Vec3<T>) -> Vec3<T> {
        let x = v.component(0);
        let y = v.component(1);
        let z = v.component(2);
        Vec3::new(
            self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z,
            self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z,
            self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z,
        )
    }

    /// Rescales each column to unit length independently.
    ///
    /// This absorbs small scale drift in an otherwise orthonormal matrix
    /// without re-orthogonalizing it. A zero column yields non-finite values.
    pub fn normalize_columns(&self) -> Self {
        let mut out = self.data;
        for col in 0..3 {
            let inv = inv_sqrt(self.column(col).length_squared());
            for row in 0..3 {
                out[col * 3 + row] = self.at(row, col) * inv;
            }
        }
        Self::new(out)
    }

    /// Builds the rotation matrix for `aa`.
    ///
    /// `R = cos·I + sin·[k]ₓ + (1 - cos)·k kᵀ`. The axis is used as stored;
    /// normalize it first if it may not be unit length.
    pub fn from_axis_angle(aa: &AxisAngle<T>) -> Self {
        let (s, c) = aa.angle().sin_cos();
        let t = T::ONE - c;
        let [x, y, z] = aa.axis().to_array();
        Self::from_rows([
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
        ])
    }
}

impl<T> From<[T; 9]> for Mat3<T> {
    fn from(value: [T; 9]) -> Self {
        Self { data: value }
    }
}

impl<T: Scalar> core::ops::Mul for Mat3<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
