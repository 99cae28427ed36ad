//! Typed microstrip geometry composed from the closed-form formulas.

use super::formulas::{
    characteristic_impedance, effective_permittivity, propagation_speed, require_permittivity,
    width_ratio,
};
use super::synthesis::{estimate_width, WidthEstimate};
use super::{require_finite, require_positive, DomainError};
use crate::constants::angular_frequency;
use crate::math::Scalar;
use crate::units::{Impedance, Length};

/// Dielectric substrate described by a scalar relative permittivity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Substrate {
    relative_permittivity: Scalar,
}

impl Substrate {
    /// Substrate with relative permittivity `epsilon_r`.
    ///
    /// # Errors
    ///
    /// [`DomainError::PermittivityTooLow`] when `epsilon_r <= 0.9`, [`DomainError::NonFinite`]
    /// when it is infinite.
    pub fn new(epsilon_r: Scalar) -> Result<Self, DomainError> {
        Ok(Self {
            relative_permittivity: require_permittivity(epsilon_r)?,
        })
    }

    /// Generic FR-4 laminate, εr = 4.3.
    #[must_use]
    pub const fn fr4() -> Self {
        Self {
            relative_permittivity: 4.3,
        }
    }

    /// Relative permittivity εr.
    #[must_use]
    pub const fn relative_permittivity(&self) -> Scalar {
        self.relative_permittivity
    }
}

/// Quasi-static parameters of a microstrip.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParameters {
    /// Width-to-height ratio `w / h`.
    pub width_ratio: Scalar,
    /// Effective permittivity εeff.
    pub effective_permittivity: Scalar,
    /// Characteristic impedance Z0.
    pub characteristic_impedance: Impedance<Scalar>,
    /// Phase velocity in m/s.
    pub phase_velocity: Scalar,
}

impl LineParameters {
    /// Guided wavelength `v / f` in meters at `frequency_hz`.
    ///
    /// # Errors
    ///
    /// [`DomainError::NonPositive`] when `frequency_hz <= 0`.
    pub fn guided_wavelength(&self, frequency_hz: Scalar) -> Result<Length, DomainError> {
        let frequency_hz = require_positive("frequency", frequency_hz)?;
        let meters = require_finite("guided wavelength", self.phase_velocity / frequency_hz)?;
        Ok(Length::from_meters(meters))
    }

    /// Phase constant `β = ω / v` in rad/m at `frequency_hz`.
    ///
    /// # Errors
    ///
    /// [`DomainError::NonPositive`] when `frequency_hz <= 0`.
    pub fn phase_constant(&self, frequency_hz: Scalar) -> Result<Scalar, DomainError> {
        let frequency_hz = require_positive("frequency", frequency_hz)?;
        require_finite(
            "phase constant",
            angular_frequency(frequency_hz) / self.phase_velocity,
        )
    }
}

/// Microstrip trace of a given width over a substrate of a given height.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Microstrip {
    width: Length,
    height: Length,
    substrate: Substrate,
}

/// A synthesized microstrip together with the estimate it was built from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Design {
    /// Resulting geometry.
    pub line: Microstrip,
    /// Ratio and branch from the width estimator.
    pub estimate: WidthEstimate,
}

impl Microstrip {
    /// Trace of `width` over `height` of `substrate`.
    ///
    /// # Errors
    ///
    /// [`DomainError::NonPositive`] if either length is not strictly positive.
    pub fn new(width: Length, height: Length, substrate: Substrate) -> Result<Self, DomainError> {
        require_positive("trace width", width.meters())?;
        require_positive("substrate height", height.meters())?;
        Ok(Self {
            width,
            height,
            substrate,
        })
    }

    /// Sizes a trace over `height` of `substrate` for the impedance `target`.
    ///
    /// # Errors
    ///
    /// Propagates the width estimator's [`DomainError`]s, and rejects a non-positive height.
    pub fn synthesize(
        substrate: Substrate,
        height: Length,
        target: Impedance<Scalar>,
    ) -> Result<Design, DomainError> {
        require_positive("substrate height", height.meters())?;
        let estimate = estimate_width(substrate.relative_permittivity(), target.value())?;
        let width = require_finite("trace width", estimate.ratio * height.meters())?;
        let line = Self::new(Length::from_meters(width), height, substrate)?;
        Ok(Design { line, estimate })
    }

    /// Trace width.
    #[must_use]
    pub const fn width(&self) -> Length {
        self.width
    }

    /// Substrate height.
    #[must_use]
    pub const fn height(&self) -> Length {
        self.height
    }

    /// Substrate.
    #[must_use]
    pub const fn substrate(&self) -> Substrate {
        self.substrate
    }

    /// Width-to-height ratio `w / h`.
    ///
    /// # Errors
    ///
    /// See [`width_ratio`].
    pub fn width_ratio(&self) -> Result<Scalar, DomainError> {
        width_ratio(self.width.meters(), self.height.meters())
    }

    /// Evaluates the forward formulas for this geometry.
    ///
    /// # Errors
    ///
    /// Propagates any [`DomainError`] from the underlying formulas.
    pub fn analyze(&self) -> Result<LineParameters, DomainError> {
        let s = self.width_ratio()?;
        let eps_eff = effective_permittivity(self.substrate.relative_permittivity(), s)?;
        let z0 = characteristic_impedance(eps_eff, s)?;
        Ok(LineParameters {
            width_ratio: s,
            effective_permittivity: eps_eff,
            characteristic_impedance: Impedance::new(z0),
            phase_velocity: propagation_speed(eps_eff)?,
        })
    }
}
