//! Forward microstrip formulas: geometry and substrate in, line parameters out.

use std::f64::consts::PI;

use super::{require_finite, require_positive, DomainError};
use crate::constants::PROPAGATION_SPEED_OF_LIGHT;
use crate::math::Scalar;

/// Lower bound (exclusive) on the relative permittivity accepted by [`effective_permittivity`].
pub const MIN_RELATIVE_PERMITTIVITY: Scalar = 0.9;

/// Checks `0.9 < epsilon_r < ∞`.
pub(crate) fn require_permittivity(epsilon_r: Scalar) -> Result<Scalar, DomainError> {
    if epsilon_r.is_nan() || epsilon_r <= MIN_RELATIVE_PERMITTIVITY {
        Err(DomainError::PermittivityTooLow(epsilon_r))
    } else if epsilon_r.is_infinite() {
        Err(DomainError::NonFinite("relative permittivity"))
    } else {
        Ok(epsilon_r)
    }
}

/// Phase velocity `c / √εeff` in m/s (Ulaby eq. 2.35), using `c = 3 × 10⁸` m/s.
///
/// Any positive `epsilon_eff` is accepted; values below one are mathematically defined but
/// describe no physical line.
///
/// # Errors
///
/// [`DomainError::NonPositive`] when `epsilon_eff <= 0` or NaN, [`DomainError::NonFinite`]
/// when it is infinite.
pub fn propagation_speed(epsilon_eff: Scalar) -> Result<Scalar, DomainError> {
    let epsilon_eff = require_positive("effective permittivity", epsilon_eff)?;
    require_finite("propagation speed", PROPAGATION_SPEED_OF_LIGHT / epsilon_eff.sqrt())
}

/// Width-to-height ratio `s = w / h`. Both lengths must share a unit.
///
/// # Errors
///
/// [`DomainError::ZeroHeight`] when `height == 0`, [`DomainError::NonFinite`] on overflow.
pub fn width_ratio(width: Scalar, height: Scalar) -> Result<Scalar, DomainError> {
    if height == 0.0 {
        return Err(DomainError::ZeroHeight);
    }
    require_finite("width ratio", width / height)
}

/// Effective permittivity of a microstrip with substrate `epsilon_r` and ratio `s`
/// (Ulaby eq. 2.38).
///
/// # Errors
///
/// [`DomainError::PermittivityTooLow`] when `epsilon_r <= 0.9`,
/// [`DomainError::NonPositive`] when `s <= 0`, [`DomainError::NonFinite`] for infinite inputs.
pub fn effective_permittivity(epsilon_r: Scalar, s: Scalar) -> Result<Scalar, DomainError> {
    let epsilon_r = require_permittivity(epsilon_r)?;
    let s = require_positive("width ratio", s)?;

    let x = 0.56 * ((epsilon_r - 0.9) / (epsilon_r + 3.0)).powf(0.05);
    let s2 = s * s;
    let s4 = s2 * s2;
    let y = 1.0 + 0.02 * ((s4 + 3.7e-4 * s2) / (s4 + 0.43)).ln();

    let fill = (1.0 + 10.0 / s).powf(-x * y);
    require_finite(
        "effective permittivity",
        (epsilon_r + 1.0) / 2.0 + (epsilon_r - 1.0) / 2.0 * fill,
    )
}

/// Characteristic impedance in ohms for effective permittivity `epsilon_eff` and ratio `s`
/// (Hammerstad's quasi-static form, valid across narrow and wide traces).
///
/// # Errors
///
/// [`DomainError::NonPositive`] when either argument is not strictly positive,
/// [`DomainError::NonFinite`] when either is infinite.
pub fn characteristic_impedance(epsilon_eff: Scalar, s: Scalar) -> Result<Scalar, DomainError> {
    let epsilon_eff = require_positive("effective permittivity", epsilon_eff)?;
    let s = require_positive("width ratio", s)?;

    // e^(-t) underflows to zero for very narrow traces, which is the correct limit.
    let t = (30.67 / s).powf(0.75);
    let f = 6.0 + (2.0 * PI - 6.0) * (-t).exp();
    let log_term = (f / s + (1.0 + 4.0 / (s * s)).sqrt()).ln();

    require_finite(
        "characteristic impedance",
        60.0 / epsilon_eff.sqrt() * log_term,
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn free_space_propagates_at_rounded_light_speed() {
        assert_eq!(propagation_speed(1.0).unwrap(), 3.0e8);
        assert_relative_eq!(propagation_speed(4.0).unwrap(), 1.5e8, epsilon = 1.0e-6);
    }

    #[test]
    fn propagation_speed_rejects_non_positive_permittivity() {
        assert!(matches!(
            propagation_speed(0.0),
            Err(DomainError::NonPositive { .. })
        ));
        assert!(propagation_speed(-2.0).is_err());
    }

    #[test]
    fn width_ratio_divides() {
        assert_relative_eq!(width_ratio(3.0e-3, 1.6e-3).unwrap(), 1.875, epsilon = 1.0e-12);
    }

    #[test]
    fn width_ratio_refuses_zero_height() {
        assert_eq!(width_ratio(5.0, 0.0), Err(DomainError::ZeroHeight));
        assert_eq!(width_ratio(5.0, -0.0), Err(DomainError::ZeroHeight));
    }

    #[test]
    fn fr4_effective_permittivity_matches_design_tables() {
        let eps_eff = effective_permittivity(4.3, 1.9).unwrap();
        assert!((2.8..=3.3).contains(&eps_eff), "got {eps_eff}");
        assert_relative_eq!(eps_eff, 3.264, max_relative = 5.0e-3);
    }

    #[test]
    fn air_substrate_has_unit_effective_permittivity() {
        assert_relative_eq!(effective_permittivity(1.0, 2.0).unwrap(), 1.0, epsilon = 1.0e-12);
    }

    #[test]
    fn effective_permittivity_domain_errors() {
        assert_eq!(
            effective_permittivity(0.9, 1.0),
            Err(DomainError::PermittivityTooLow(0.9))
        );
        assert!(matches!(
            effective_permittivity(-4.0, 1.0),
            Err(DomainError::PermittivityTooLow(_))
        ));
        assert!(matches!(
            effective_permittivity(Scalar::NAN, 1.0),
            Err(DomainError::PermittivityTooLow(_))
        ));
        assert!(matches!(
            effective_permittivity(4.3, 0.0),
            Err(DomainError::NonPositive { quantity: "width ratio", .. })
        ));
    }

    #[test]
    fn fifty_ohm_fr4_line() {
        let s = 1.941;
        let eps_eff = effective_permittivity(4.3, s).unwrap();
        let z0 = characteristic_impedance(eps_eff, s).unwrap();
        assert_relative_eq!(z0, 50.0, max_relative = 0.01);
    }

    #[test]
    fn impedance_falls_as_trace_widens() {
        let narrow = characteristic_impedance(3.0, 0.5).unwrap();
        let wide = characteristic_impedance(3.0, 5.0).unwrap();
        assert!(narrow > wide);
    }

    #[test]
    fn very_narrow_trace_stays_finite() {
        let z0 = characteristic_impedance(1.0, 1.0e-6).unwrap();
        assert!(z0.is_finite() && z0 > 0.0);
    }

    #[test]
    fn infinite_inputs_are_rejected() {
        assert_eq!(
            propagation_speed(Scalar::INFINITY),
            Err(DomainError::NonFinite("effective permittivity"))
        );
        assert_eq!(
            characteristic_impedance(3.0, Scalar::INFINITY),
            Err(DomainError::NonFinite("width ratio"))
        );
        assert_eq!(
            effective_permittivity(Scalar::INFINITY, 1.0),
            Err(DomainError::NonFinite("relative permittivity"))
        );
        assert_eq!(
            width_ratio(Scalar::INFINITY, 1.0),
            Err(DomainError::NonFinite("width ratio"))
        );
    }

    #[test]
    fn impedance_rejects_non_positive_inputs() {
        assert!(characteristic_impedance(0.0, 1.0).is_err());
        assert!(characteristic_impedance(3.0, -1.0).is_err());
    }
}
