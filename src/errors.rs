//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TlineError {
    /// Raised when a geometry ratio falls outside an approximation's domain.
    #[error("trace width to substrate height ratio {ratio} is below 0.25, outside the Douville-James fit")]
    InvalidRatio {
        /// Offending width-to-height ratio.
        ratio: Scalar,
    },
    /// Raised when the width solver exhausts its iteration budget.
    #[error("width solver did not converge after {iterations} iterations (impedance error {residual_ohm:.3e} ohm)")]
    NonConvergent {
        /// Iterations completed before giving up.
        iterations: usize,
        /// Absolute impedance error at termination, in ohms.
        residual_ohm: Scalar,
    },
}
