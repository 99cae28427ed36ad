#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants used by the closed-form models.
pub mod constants;
/// Strongly typed length and impedance helpers.
pub mod units;
/// Shared numerical primitives.
pub mod math;
/// Microstrip formulas, width synthesis and the line model.
pub mod microstrip;
/// Error types shared between modules.
pub mod errors;
/// Interactive width-calculator session.
pub mod app;

/// Common exports for downstream crates.
pub mod prelude;
