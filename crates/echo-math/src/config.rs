// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::Scalar;

const DEFAULT_SYMMETRY_EPSILON: f64 = 1e-4;
const DEFAULT_IDENTITY_EPSILON: f64 = 1e-3;

/// Tolerances used when extracting an axis-angle from a rotation matrix.
///
/// - `symmetry_epsilon` bounds `|m[i][j] - m[j][i]|` for the matrix to count
///   as symmetric (rotation by 0 or π).
/// - `identity_epsilon` bounds the off-diagonal sums and `trace - 3` for a
///   symmetric matrix to count as the identity.
///
/// With the `serde` feature, missing fields deserialize to the defaults.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        default,
        bound = "T: Scalar + serde::Serialize + serde::de::DeserializeOwned"
    )
)]
pub struct ExtractConfig<T> {
    /// Symmetry tolerance (default `1e-4`).
    pub symmetry_epsilon: T,
    /// Identity tolerance (default `1e-3`).
    pub identity_epsilon: T,
}

impl<T: Scalar> ExtractConfig<T> {
    /// Creates a config with explicit tolerances.
    pub const fn new(symmetry_epsilon: T, identity_epsilon: T) -> Self {
        Self {
            symmetry_epsilon,
            identity_epsilon,
        }
    }

    /// Replaces the symmetry tolerance.
    pub fn with_symmetry_epsilon(self, symmetry_epsilon: T) -> Self {
        Self {
            symmetry_epsilon,
            ..self
        }
    }

    /// Replaces the identity tolerance.
    pub fn with_identity_epsilon(self, identity_epsilon: T) -> Self {
        Self {
            identity_epsilon,
            ..self
        }
    }
}

impl<T: Scalar> Default for ExtractConfig<T> {
    fn default() -> Self {
        Self::new(
            T::from_f64(DEFAULT_SYMMETRY_EPSILON),
            T::from_f64(DEFAULT_IDENTITY_EPSILON),
        )
    }
}
