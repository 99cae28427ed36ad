//! Shared numerical primitives.

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// Relative deviation `|actual - reference| / |reference|`.
///
/// Used to compare an approximation against the value it should reproduce.
#[must_use]
pub fn relative_error(actual: Scalar, reference: Scalar) -> Scalar {
    (actual - reference).abs() / reference.abs()
}
