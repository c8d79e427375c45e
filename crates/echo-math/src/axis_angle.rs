// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::hash::{Hash, Hasher};

use tracing::trace;

use crate::error::MathError;
use crate::numeric::{inv_sqrt, safe_acos, wrap_angle};
use crate::{extract, ExtractConfig, Mat3, Mat4, Quat, Scalar, Vec3};

/// Rotation by `angle` radians about `axis` (right-hand rule).
///
/// * The angle is canonicalized into `[0, 2π)` by every constructor and
///   mutator, so two values whose raw angles differ by whole turns compare
///   and hash equal.
/// * The axis is not forced to unit length; conversions from matrices and
///   quaternions produce a unit axis, and [`AxisAngle::normalize`] restores
///   one after manual edits.
/// * The zero rotation reports the sentinel axis `(0, 0, 1)`.
///
/// All mutators return a new value.
///
/// # Examples
/// ```
/// use core::f64::consts::{FRAC_PI_2, PI};
/// use echo_math::AxisAngle;
/// let aa = AxisAngle::new(-FRAC_PI_2, 0.0, 0.0, 1.0);
/// assert!((aa.angle() - 3.0 * FRAC_PI_2).abs() < 1e-12);
/// assert!((aa.rotate(FRAC_PI_2 + PI).angle() - PI).abs() < 1e-12);
/// ```
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "RawAxisAngle<T>",
        bound(deserialize = "T: Scalar + serde::Deserialize<'de>")
    )
)]
pub struct AxisAngle<T> {
    angle: T,
    axis: Vec3<T>,
}

/// Wire shape of [`AxisAngle`]; deserialization re-canonicalizes the angle.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAxisAngle<T> {
    angle: T,
    axis: Vec3<T>,
}

#[cfg(feature = "serde")]
impl<T: Scalar> From<RawAxisAngle<T>> for AxisAngle<T> {
    fn from(raw: RawAxisAngle<T>) -> Self {
        Self::from_axis(raw.angle, raw.axis)
    }
}

impl<T: Scalar> AxisAngle<T> {
    /// The zero rotation with the sentinel axis `(0, 0, 1)`.
    pub const fn identity() -> Self {
        Self {
            angle: T::ZERO,
            axis: Vec3::UNIT_Z,
        }
    }

    /// Creates an axis-angle from raw components.
    pub fn new(angle: T, x: T, y: T, z: T) -> Self {
        Self::from_axis(angle, Vec3::new(x, y, z))
    }

    /// Creates an axis-angle from an angle and an axis vector taken as-is.
    pub fn from_axis(angle: T, axis: Vec3<T>) -> Self {
        Self {
            angle: wrap_angle(angle),
            axis,
        }
    }

    /// Checked constructor: rejects non-finite input and degenerate axes and
    /// returns a value with a unit axis.
    pub fn try_new(angle: T, axis: Vec3<T>) -> Result<Self, MathError> {
        if !angle.is_finite() || !axis.is_finite() {
            return Err(MathError::NonFinite);
        }
        Self::from_axis(angle, axis).try_normalize()
    }

    /// Extracts the rotation of `m` with the default tolerances.
    pub fn from_mat3(m: &Mat3<T>) -> Self {
        extract(m, &ExtractConfig::default())
    }

    /// Extracts the rotation of `m` with explicit tolerances.
    pub fn from_mat3_with(m: &Mat3<T>, config: &ExtractConfig<T>) -> Self {
        extract(m, config)
    }

    /// Extracts the rotation held in the upper-left block of `m`.
    pub fn from_mat4(m: &Mat4<T>) -> Self {
        Self::from_mat3(&m.rotation_block())
    }

    /// Converts a unit quaternion.
    ///
    /// The quaternion is not re-normalized. When `1 - w²` vanishes (or turns
    /// negative through drift) the rotation is treated as zero and the axis
    /// falls back to `(0, 0, 1)`, matching [`AxisAngle::from_mat3`].
    pub fn from_quat(q: &Quat<T>) -> Self {
        let w = q.w();
        let half_angle = safe_acos(w);
        let inv = inv_sqrt(T::ONE - w * w);
        let angle = half_angle + half_angle;
        if !inv.is_finite() {
            trace!(%w, "zero-rotation quaternion; reporting sentinel axis");
            return Self::from_axis(angle, Vec3::UNIT_Z);
        }
        Self::from_axis(angle, Vec3::new(q.x() * inv, q.y() * inv, q.z() * inv))
    }

    /// Angle in radians, in `[0, 2π)`.
    pub fn angle(&self) -> T {
        self.angle
    }

    /// Rotation axis as stored.
    pub fn axis(&self) -> Vec3<T> {
        self.axis
    }

    /// Returns `[angle, x, y, z]`.
    pub fn to_array(self) -> [T; 4] {
        let [x, y, z] = self.axis.to_array();
        [self.angle, x, y, z]
    }

    /// Quaternion `(axis·sin(θ/2), cos(θ/2))`, using the axis as stored.
    pub fn to_quat(&self) -> Quat<T> {
        let (s, c) = (self.angle * T::HALF).sin_cos();
        let v = self.axis.scale(s);
        Quat::new(v.x(), v.y(), v.z(), c)
    }

    /// Rotation matrix for this axis-angle.
    pub fn to_mat3(&self) -> Mat3<T> {
        Mat3::from_axis_angle(self)
    }

    /// Rotation matrix embedded in a 4×4 with no translation.
    pub fn to_mat4(&self) -> Mat4<T> {
        Mat4::from_axis_angle(self)
    }

    /// Adds `delta` radians to the angle.
    pub fn rotate(&self, delta: T) -> Self {
        Self::from_axis(self.angle + delta, self.axis)
    }

    /// Replaces the angle.
    pub fn with_angle(&self, angle: T) -> Self {
        Self::from_axis(angle, self.axis)
    }

    /// Replaces the axis.
    pub fn with_axis(&self, axis: Vec3<T>) -> Self {
        Self {
            angle: self.angle,
            axis,
        }
    }

    /// The inverse rotation (negated angle, same axis).
    pub fn invert(&self) -> Self {
        Self::from_axis(-self.angle, self.axis)
    }

    /// Rescales the axis to unit length.
    ///
    /// An axis with length ≤ `EPSILON` is left untouched; use
    /// [`AxisAngle::try_normalize`] to surface that case.
    pub fn normalize(&self) -> Self {
        self.try_normalize().unwrap_or(*self)
    }

    /// Rescales the axis to unit length, failing on a degenerate axis.
    pub fn try_normalize(&self) -> Result<Self, MathError> {
        let len_sq = self.axis.length_squared();
        if len_sq <= T::EPSILON * T::EPSILON || !len_sq.is_finite() {
            return Err(MathError::DegenerateAxis);
        }
        Ok(self.with_axis(self.axis.scale(inv_sqrt(len_sq))))
    }

    /// Rotates `v` with Rodrigues' formula:
    /// `v·cos + (k × v)·sin + k·(k·v)·(1 - cos)`.
    ///
    /// The axis `k` must already be unit length; a longer or shorter axis
    /// shears the result instead of rotating it.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use echo_math::{AxisAngle, Vec3};
    /// let quarter_turn = AxisAngle::new(FRAC_PI_2, 0.0, 0.0, 1.0);
    /// let [x, y, z] = quarter_turn.transform(&Vec3::UNIT_X).to_array();
    /// assert!(x.abs() < 1e-12 && (y - 1.0).abs() < 1e-12 && z == 0.0);
    /// ```
    pub fn transform(&self, v: &Vec3<T>) -> Vec3<T> {
        let (sin, cos) = self.angle.sin_cos();
        let k = self.axis;
        let cross = k.cross(v);
        let along = (T::ONE - cos) * k.dot(v);
        Vec3::new(
            v.x() * cos + sin * cross.x() + along * k.x(),
            v.y() * cos + sin * cross.y() + along * k.y(),
            v.z() * cos + sin * cross.z() + along * k.z(),
        )
    }

    fn canonical_key(&self) -> [u64; 4] {
        self.to_array().map(Scalar::canonical_bits)
    }
}

impl<T: Scalar> Default for AxisAngle<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Compares canonical bit patterns of angle and axis.
///
/// Whole-turn offsets compare equal only when the wrap into `[0, 2π)`
/// reproduces the same bits. For most angles `a + 2π` wraps to a value a few
/// ulps away from `a` (`0.1 + 2π` wraps to `0.09999999999999964`), so those
/// two are *not* equal. Compare with a tolerance when that matters.
impl<T: Scalar> PartialEq for AxisAngle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_key() == other.canonical_key()
    }
}

impl<T: Scalar> Eq for AxisAngle<T> {}

impl<T: Scalar> Hash for AxisAngle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_key().hash(state);
    }
}

impl<T: Scalar> fmt::Display for AxisAngle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AxisAngle({}; {}, {}, {})",
            self.angle,
            self.axis.x(),
            self.axis.y(),
            self.axis.z()
        )
    }
}

impl<T: Scalar> From<Quat<T>> for AxisAngle<T> {
    fn from(q: Quat<T>) -> Self {
        Self::from_quat(&q)
    }
}

impl<T: Scalar> From<AxisAngle<T>> for Quat<T> {
    fn from(aa: AxisAngle<T>) -> Self {
        aa.to_quat()
    }
}

impl<T: Scalar> From<&Mat3<T>> for AxisAngle<T> {
    fn from(m: &Mat3<T>) -> Self {
        Self::from_mat3(m)
    }
}

impl<T: Scalar> From<AxisAngle<T>> for Mat3<T> {
    fn from(aa: AxisAngle<T>) -> Self {
        aa.to_mat3()
    }
}
