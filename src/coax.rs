//! Coaxial line sizing formulas.
//!
//! The familiar engineering form of the coaxial impedance,
//! `Z0 = 138/sqrt(er) * log10(D/d)`, and its closed-form inversion for the
//! core diameter. Diameters may be in any consistent unit; impedances are
//! ohms. Inputs are not validated and non-physical values propagate NaN.

use crate::math::Scalar;

/// Conventional coaxial reference impedance in ohms.
pub const DEFAULT_COAX_IMPEDANCE: Scalar = 50.0;

/// Characteristic impedance of a coaxial line with outer diameter
/// `outer_diameter`, inner core diameter `core_diameter`, and dielectric
/// relative permittivity `permittivity`.
#[must_use]
pub fn coax_z0(outer_diameter: Scalar, core_diameter: Scalar, permittivity: Scalar) -> Scalar {
    138.0 / permittivity.sqrt() * (outer_diameter / core_diameter).log10()
}

/// Core diameter achieving `impedance` for the given outer diameter and
/// dielectric relative permittivity. The result carries the units of
/// `outer_diameter`; pass [`DEFAULT_COAX_IMPEDANCE`] for the common 50 Ω
/// target.
#[must_use]
pub fn coax_core_diameter(
    outer_diameter: Scalar,
    permittivity: Scalar,
    impedance: Scalar,
) -> Scalar {
    outer_diameter / 10.0_f64.powf(impedance * permittivity.sqrt() / 138.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn ptfe_core_reference() {
        let d = coax_core_diameter(0.01, 2.1, DEFAULT_COAX_IMPEDANCE);
        assert_relative_eq!(d, 2.985_039_744_132_45e-3, max_relative = 1.0e-9);
        assert!(d > 0.0 && d < 0.01);
    }

    #[test]
    fn zero_impedance_degenerates_to_outer_diameter() {
        assert_relative_eq!(coax_core_diameter(0.01, 2.1, 0.0), 0.01, epsilon = 1.0e-18);
    }

    #[test]
    fn forward_and_inverse_agree() {
        let d = coax_core_diameter(3.58e-3, 1.43, DEFAULT_COAX_IMPEDANCE);
        assert_relative_eq!(coax_z0(3.58e-3, d, 1.43), 50.0, max_relative = 1.0e-9);
    }
}
