//! Lightweight typed quantities for lengths and impedances.

use std::fmt;

use crate::constants::MILLIMETERS_PER_METER;
use crate::math::Scalar;

/// A physical length stored in meters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Length {
    meters: Scalar,
}

impl Length {
    /// Length of `meters` meters.
    #[must_use]
    pub const fn from_meters(meters: Scalar) -> Self {
        Self { meters }
    }

    /// Length of `millimeters` millimeters.
    #[must_use]
    pub fn from_millimeters(millimeters: Scalar) -> Self {
        Self::from_meters(millimeters / MILLIMETERS_PER_METER)
    }

    /// Value in meters.
    #[must_use]
    pub const fn meters(&self) -> Scalar {
        self.meters
    }

    /// Value in millimeters.
    #[must_use]
    pub fn millimeters(&self) -> Scalar {
        self.meters * MILLIMETERS_PER_METER
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mm", self.millimeters())
    }
}

/// Impedance magnitude in ohms.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Impedance<T = Scalar> {
    ohms: T,
}

impl<T: Copy> Impedance<T> {
    /// Wraps a value in ohms.
    #[must_use]
    pub const fn new(ohms: T) -> Self {
        Self { ohms }
    }

    /// Raw value in ohms.
    #[must_use]
    pub const fn value(&self) -> T {
        self.ohms
    }
}

impl<T: fmt::Display> fmt::Display for Impedance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Ω", self.ohms)
    }
}
