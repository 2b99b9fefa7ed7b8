//! Convenience re-exports for transmission-line design work.

pub use crate::coax::{coax_core_diameter, coax_z0, DEFAULT_COAX_IMPEDANCE};
pub use crate::constants::*;
pub use crate::errors::TlineError;
pub use crate::math::Scalar;
pub use crate::microstrip::{
    miter, wheeler_z0, wheeler_z0_width, wheeler_z0_width_with, ConvergenceCriteria,
    MITER_MIN_RATIO,
};
pub use crate::sweep::{impedance_sweep, linspace, logspace};
pub use crate::units::{m_to_mil, m_to_mm, mil_to_m, mm_to_m, METERS_PER_MIL};
