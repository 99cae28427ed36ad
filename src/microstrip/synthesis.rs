//! Inverse design: estimate the width ratio for a target impedance without root finding.

use std::f64::consts::PI;

use tracing::debug;

use super::{require_finite, require_positive, DomainError};
use crate::math::Scalar;

/// Branch of the closed-form width estimator.
///
/// The branch is a pure function of `(εr, Z0)` and is recomputed on every estimate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceRegime {
    /// `Z0 ≤ 44 − 2εr`: Ulaby eq. 2.42, driven by `q = 60π² / (Z0·√εr)`.
    Narrow,
    /// `Z0 > 44 − 2εr`: Ulaby eq. 2.43, driven by the exponent `p`.
    Wide,
}

impl TraceRegime {
    /// Impedance threshold `44 − 2εr` (Ω) separating the two branches.
    #[must_use]
    pub fn threshold(epsilon_r: Scalar) -> Scalar {
        44.0 - 2.0 * epsilon_r
    }

    /// Branch taken for substrate `epsilon_r` and target impedance `z0`. The threshold
    /// itself belongs to [`TraceRegime::Narrow`].
    #[must_use]
    pub fn select(epsilon_r: Scalar, z0: Scalar) -> Self {
        if z0 <= Self::threshold(epsilon_r) {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// Outcome of [`estimate_width`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthEstimate {
    /// Estimated width-to-height ratio `w / h`.
    pub ratio: Scalar,
    /// Branch used to produce the estimate.
    pub regime: TraceRegime,
}

/// Estimates `w / h` for substrate `epsilon_r` and target impedance `z0` (Ω).
///
/// The closed form is within about 2% of the exact inverse of
/// [`characteristic_impedance`](super::characteristic_impedance); that error is part of the
/// approximation and is not corrected here.
///
/// # Errors
///
/// - [`DomainError::NonPositive`] if `epsilon_r` or `z0` is not strictly positive.
/// - [`DomainError::NonFinite`] if `epsilon_r` or `z0` is infinite.
/// - [`DomainError::NarrowTraceOutOfRange`] if the narrow branch sees `q <= 1`.
/// - [`DomainError::Singular`] if the wide-branch denominator `e^(2p) − 2` is zero to within
///   a relative `1e-9`.
/// - [`DomainError::NonPhysicalRatio`] if the formula yields a ratio `<= 0`.
pub fn estimate_width_ratio(epsilon_r: Scalar, z0: Scalar) -> Result<Scalar, DomainError> {
    estimate_width(epsilon_r, z0).map(|estimate| estimate.ratio)
}

/// Like [`estimate_width_ratio`], also reporting which branch was taken.
///
/// # Errors
///
/// See [`estimate_width_ratio`].
pub fn estimate_width(epsilon_r: Scalar, z0: Scalar) -> Result<WidthEstimate, DomainError> {
    let epsilon_r = require_positive("relative permittivity", epsilon_r)?;
    let z0 = require_positive("characteristic impedance", z0)?;

    let regime = TraceRegime::select(epsilon_r, z0);
    let ratio = match regime {
        TraceRegime::Narrow => narrow_trace_ratio(epsilon_r, z0)?,
        TraceRegime::Wide => wide_trace_ratio(epsilon_r, z0)?,
    };
    debug!(epsilon_r, z0, ?regime, ratio, "estimated width ratio");

    if ratio > 0.0 {
        Ok(WidthEstimate { ratio, regime })
    } else {
        Err(DomainError::NonPhysicalRatio(ratio))
    }
}

fn narrow_trace_ratio(epsilon_r: Scalar, z0: Scalar) -> Result<Scalar, DomainError> {
    let q = 60.0 * PI * PI / (z0 * epsilon_r.sqrt());
    if q.is_nan() || q <= 1.0 {
        return Err(DomainError::NarrowTraceOutOfRange { q });
    }

    let dispersion =
        (epsilon_r - 1.0) / (2.0 * epsilon_r) * ((q - 1.0).ln() + 0.29 - 0.52 / epsilon_r);
    Ok(2.0 / PI * ((q - 1.0) - (2.0 * q - 1.0).ln() + dispersion))
}

/// Relative distance of `e^(2p)` from 2 below which the wide branch is treated as singular.
const SINGULAR_TOLERANCE: Scalar = 1.0e-9;

fn wide_trace_ratio(epsilon_r: Scalar, z0: Scalar) -> Result<Scalar, DomainError> {
    let p = ((epsilon_r + 1.0) / 2.0).sqrt() * (z0 / 60.0)
        + (epsilon_r - 1.0) / (epsilon_r + 1.0) * (0.23 + 0.12 / epsilon_r);
    let ratio = ratio_from_exponent(p).ok_or(DomainError::Singular { epsilon_r, z0 })?;
    require_finite("width ratio", ratio)
}

/// `8e^p / (e^2p - 2)`, or `None` when `e^2p` is within [`SINGULAR_TOLERANCE`] of 2.
fn ratio_from_exponent(p: Scalar) -> Option<Scalar> {
    // e^2p overflows to infinity for large p, which is never singular.
    if ((2.0 * p).exp() - 2.0).abs() <= 2.0 * SINGULAR_TOLERANCE {
        return None;
    }
    // Evaluated as 8 / (e^p - 2e^-p) so large p does not overflow.
    Some(8.0 / (p.exp() - 2.0 * (-p).exp()))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::LN_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::relative_error;
    use crate::microstrip::{characteristic_impedance, effective_permittivity};

    fn round_trip(epsilon_r: Scalar, z0: Scalar) -> Scalar {
        let s = estimate_width_ratio(epsilon_r, z0).unwrap();
        let eps_eff = effective_permittivity(epsilon_r, s).unwrap();
        characteristic_impedance(eps_eff, s).unwrap()
    }

    #[test]
    fn fifty_ohm_fr4_takes_wide_branch() {
        let estimate = estimate_width(4.3, 50.0).unwrap();
        assert_eq!(estimate.regime, TraceRegime::Wide);
        assert!(estimate.ratio > 0.5 && estimate.ratio < 3.0, "got {}", estimate.ratio);
        assert_relative_eq!(estimate.ratio, 1.941, max_relative = 5.0e-3);
    }

    #[test]
    fn low_impedance_takes_narrow_branch() {
        let estimate = estimate_width(4.3, 30.0).unwrap();
        assert_eq!(estimate.regime, TraceRegime::Narrow);
        assert_relative_eq!(estimate.ratio, 4.147, max_relative = 5.0e-3);
    }

    #[test]
    fn threshold_belongs_to_narrow_branch() {
        let epsilon_r = 4.3;
        let z0 = TraceRegime::threshold(epsilon_r);
        assert_eq!(TraceRegime::select(epsilon_r, z0), TraceRegime::Narrow);
        assert_eq!(
            TraceRegime::select(epsilon_r, z0 + 1.0e-9),
            TraceRegime::Wide
        );
    }

    #[test]
    fn branches_agree_at_threshold() {
        // εr = 2 is the widest gap on typical substrates, about 5.6%.
        for epsilon_r in [2.0, 4.3, 12.0] {
            let z0 = TraceRegime::threshold(epsilon_r);
            let narrow = narrow_trace_ratio(epsilon_r, z0).unwrap();
            let wide = wide_trace_ratio(epsilon_r, z0).unwrap();
            assert!(
                relative_error(wide, narrow) < 0.06,
                "εr = {epsilon_r}: narrow {narrow}, wide {wide}"
            );
        }
    }

    #[test]
    fn singular_exponent_is_detected() {
        assert_eq!(ratio_from_exponent(LN_2 / 2.0), None);
        assert_eq!(ratio_from_exponent(LN_2 / 2.0 * (1.0 + 1.0e-12)), None);
        assert!(ratio_from_exponent(LN_2 / 2.0 + 1.0e-3).unwrap() > 0.0);
        assert!(ratio_from_exponent(LN_2 / 2.0 - 1.0e-3).unwrap() < 0.0);
    }

    #[test]
    fn impedance_on_the_singular_point_is_reported() {
        // Threshold is negative for εr = 30, so every impedance takes the wide branch.
        let epsilon_r: Scalar = 30.0;
        let offset = (epsilon_r - 1.0) / (epsilon_r + 1.0) * (0.23 + 0.12 / epsilon_r);
        let z0 = (LN_2 / 2.0 - offset) * 60.0 / ((epsilon_r + 1.0) / 2.0).sqrt();
        assert_eq!(TraceRegime::select(epsilon_r, z0), TraceRegime::Wide);
        assert_eq!(
            estimate_width_ratio(epsilon_r, z0),
            Err(DomainError::Singular { epsilon_r, z0 })
        );
    }

    #[test]
    fn infinite_inputs_are_not_singular() {
        assert_eq!(
            estimate_width_ratio(Scalar::INFINITY, 50.0),
            Err(DomainError::NonFinite("relative permittivity"))
        );
        assert_eq!(
            estimate_width_ratio(4.3, Scalar::INFINITY),
            Err(DomainError::NonFinite("characteristic impedance"))
        );
    }

    #[test]
    fn round_trip_within_two_percent() {
        for &(epsilon_r, z0) in &[
            (4.3, 50.0),
            (4.3, 30.0),
            (2.2, 100.0),
            (10.2, 50.0),
            (3.55, 75.0),
            (9.8, 20.0),
        ] {
            let back = round_trip(epsilon_r, z0);
            assert!(
                relative_error(back, z0) < 0.02,
                "εr = {epsilon_r}, Z0 = {z0}: got {back}"
            );
        }
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert!(matches!(
            estimate_width_ratio(4.3, 0.0),
            Err(DomainError::NonPositive { quantity: "characteristic impedance", .. })
        ));
        assert!(matches!(
            estimate_width_ratio(-1.0, 50.0),
            Err(DomainError::NonPositive { quantity: "relative permittivity", .. })
        ));
    }

    #[test]
    fn tiny_impedance_on_high_permittivity_is_not_physical() {
        // Threshold is negative, so the wide branch runs with p < ln(2)/2.
        assert!(matches!(
            estimate_width_ratio(30.0, 0.5),
            Err(DomainError::NonPhysicalRatio(_))
        ));
    }

    #[test]
    fn huge_impedance_does_not_overflow() {
        let s = estimate_width_ratio(4.3, 5_000.0).unwrap();
        assert!(s > 0.0 && s < 1.0e-50);
    }
}
