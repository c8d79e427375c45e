// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors returned by the checked constructors at the edge of the math API.
///
/// The conversions themselves are total; these only guard slice views and
/// explicitly checked axis-angle construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A slice view did not hold the number of scalars the type needs.
    #[error("expected {expected} scalars, got {actual}")]
    SliceLength {
        /// Scalars required by the target type.
        expected: usize,
        /// Scalars actually supplied.
        actual: usize,
    },
    /// An input component was `NaN` or infinite.
    #[error("non-finite component in rotation input")]
    NonFinite,
    /// The rotation axis is too short to normalize.
    #[error("rotation axis length is below the degeneracy threshold")]
    DegenerateAxis,
}

/// Checks that `slice` holds exactly `N` scalars and copies them out.
pub(crate) fn read_exact<T: Copy, const N: usize>(slice: &[T]) -> Result<[T; N], MathError> {
    <[T; N]>::try_from(slice).map_err(|_| MathError::SliceLength {
        expected: N,
        actual: slice.len(),
    })
}
