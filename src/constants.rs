//! Constants used by the microstrip approximations.
//!
//! ## Speed of light
//!
//! The closed-form design equations (Ulaby, *Fundamentals of Applied Electromagnetics*,
//! eq. 2.35) are quoted with the rounded value _c_ = 3 × 10⁸ m/s. That rounded value is kept
//! here so propagation speeds match published design tables; the exact SI value is provided
//! alongside for comparison.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Rounded speed of light used by the microstrip formulas (m/s).
pub const PROPAGATION_SPEED_OF_LIGHT: Scalar = 3.0e8;
/// Speed of light in vacuum _c_ in meters per second (m/s).
/// Exact value by SI definition (2019): 299,792,458 m/s.
pub const SPEED_OF_LIGHT: Scalar = 299_792_458.0;
/// Millimeters per meter.
pub const MILLIMETERS_PER_METER: Scalar = 1.0e3;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}
