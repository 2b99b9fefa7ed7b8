#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants shared by the design formulas.
pub mod constants;
/// Length unit conversions common in PCB work.
pub mod units;
/// Shared numerical primitives.
pub mod math;
/// Microstrip impedance, width synthesis, and corner miter formulas.
pub mod microstrip;
/// Coaxial line sizing formulas.
pub mod coax;
/// Geometry sweep helpers.
pub mod sweep;
/// Error types shared across modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
