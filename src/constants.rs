//! Baseline physical constants for transmission-line work.
//!
//! Values follow CODATA 2018 recommendations (NIST Reference on Constants,
//! Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>).
//! The speed of light is exact by the 2019 SI definition; ε₀ and μ₀ are
//! measured quantities quoted to 11-12 significant figures, more than enough
//! for the engineering approximations in this crate.

use crate::math::Scalar;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
pub const VACUUM_PERMITTIVITY: Scalar = 8.854_187_812_8e-12;
/// Vacuum permeability μ₀ in henries per meter (H/m).
pub const VACUUM_PERMEABILITY: Scalar = 1.256_637_062_12e-6;
/// Speed of light in vacuum in meters per second (m/s). Exact by SI definition.
pub const SPEED_OF_LIGHT: Scalar = 299_792_458.0;
/// Characteristic impedance of free space √(μ₀/ε₀) in ohms (Ω).
/// Wheeler's microstrip equation is normalized by this value.
pub const FREE_SPACE_IMPEDANCE: Scalar = 376.730_313_668;

/// Returns the free-space wavelength in meters for a frequency in hertz.
#[inline]
#[must_use]
pub fn wavelength_from_frequency(hz: Scalar) -> Scalar {
    SPEED_OF_LIGHT / hz
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn free_space_impedance_consistent_with_eps0_mu0() {
        let derived = (VACUUM_PERMEABILITY / VACUUM_PERMITTIVITY).sqrt();
        assert_relative_eq!(derived, FREE_SPACE_IMPEDANCE, max_relative = 1.0e-9);
    }

    #[test]
    fn wavelength_matches_reference() {
        let lambda = wavelength_from_frequency(1.0e9);
        assert_relative_eq!(lambda, 0.299_792_458, max_relative = 1.0e-9);
    }
}
