//! Closed-form microstrip models.
//!
//! The forward formulas ([`effective_permittivity`], [`characteristic_impedance`],
//! [`propagation_speed`]) follow the Hammerstad–Jensen approximations as quoted in Ulaby,
//! eq. 2.35–2.40. The inverse estimator ([`estimate_width_ratio`]) is the two-branch
//! synthesis formula of eq. 2.42/2.43, accurate to roughly 2%.
//!
//! Every function checks its mathematical preconditions and returns a [`DomainError`]
//! instead of letting NaN or infinity leak into downstream results.

mod formulas;
mod line;
mod synthesis;

pub use formulas::{
    characteristic_impedance, effective_permittivity, propagation_speed, width_ratio,
    MIN_RELATIVE_PERMITTIVITY,
};
pub use line::{Design, LineParameters, Microstrip, Substrate};
pub use synthesis::{estimate_width, estimate_width_ratio, TraceRegime, WidthEstimate};

use crate::math::Scalar;

/// Violations of a formula's mathematical preconditions.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A quantity that must be strictly positive was zero, negative or NaN.
    #[error("{quantity} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending quantity.
        quantity: &'static str,
        /// Value that was supplied.
        value: Scalar,
    },
    /// Relative permittivity at or below 0.9 makes the effective-permittivity exponent base
    /// negative.
    #[error("relative permittivity must exceed 0.9, got {0}")]
    PermittivityTooLow(Scalar),
    /// Width ratio requested with a zero substrate height.
    #[error("division by zero: substrate height is zero")]
    ZeroHeight,
    /// The narrow-trace estimator needs `q > 1` for `ln(q - 1)`.
    #[error("narrow-trace estimate requires q > 1, got q = {q}")]
    NarrowTraceOutOfRange {
        /// Intermediate `q = 60π² / (Z0·√εr)`.
        q: Scalar,
    },
    /// The wide-trace denominator `e^(2p) - 2` vanishes to within a relative `1e-9`.
    #[error("singular input: wide-trace denominator vanishes for εr = {epsilon_r}, Z0 = {z0} Ω")]
    Singular {
        /// Relative permittivity supplied.
        epsilon_r: Scalar,
        /// Target impedance supplied.
        z0: Scalar,
    },
    /// The estimator produced a ratio that is not strictly positive.
    #[error("estimated width ratio {0} is not physical")]
    NonPhysicalRatio(Scalar),
    /// An input was infinite, or a result overflowed.
    #[error("{0} is not finite")]
    NonFinite(&'static str),
}

/// Accepts finite, strictly positive values. Infinities are reported as [`DomainError::NonFinite`].
pub(crate) fn require_positive(
    quantity: &'static str,
    value: Scalar,
) -> Result<Scalar, DomainError> {
    if value.is_infinite() {
        Err(DomainError::NonFinite(quantity))
    } else if value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NonPositive { quantity, value })
    }
}

pub(crate) fn require_finite(
    quantity: &'static str,
    value: Scalar,
) -> Result<Scalar, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite(quantity))
    }
}
