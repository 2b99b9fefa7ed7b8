//! Length unit conversions common in PCB work.
//!
//! The design formulas take SI meters; board stackups and fab drawings are
//! usually quoted in mils or millimeters.

use crate::math::Scalar;

/// Meters per mil (one thousandth of an inch).
pub const METERS_PER_MIL: Scalar = 2.54e-5;

/// Converts mils to meters.
#[inline]
#[must_use]
pub fn mil_to_m(mils: Scalar) -> Scalar {
    mils * METERS_PER_MIL
}

/// Converts meters to mils.
#[inline]
#[must_use]
pub fn m_to_mil(meters: Scalar) -> Scalar {
    meters / METERS_PER_MIL
}

/// Converts millimeters to meters.
#[inline]
#[must_use]
pub fn mm_to_m(mm: Scalar) -> Scalar {
    mm * 1.0e-3
}

/// Converts meters to millimeters.
#[inline]
#[must_use]
pub fn m_to_mm(meters: Scalar) -> Scalar {
    meters * 1.0e3
}
