//! Convenience re-exports for microstrip design work.

pub use crate::constants::*;
pub use crate::errors::MicrostripError;
pub use crate::math::{relative_error, Scalar};
pub use crate::microstrip::{
    characteristic_impedance, effective_permittivity, estimate_width, estimate_width_ratio,
    propagation_speed, width_ratio, Design, DomainError, LineParameters, Microstrip, Substrate,
    TraceRegime, WidthEstimate,
};
pub use crate::units::{Impedance, Length};
