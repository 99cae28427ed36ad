//! Shared error types used across submodules.

use thiserror::Error;

use crate::microstrip::DomainError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum MicrostripError {
    /// Wraps violations of a formula's mathematical preconditions.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Raised when console input cannot be interpreted as a number.
    #[error("invalid input: {0}")]
    Input(String),
    /// Raised when the console cannot be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
