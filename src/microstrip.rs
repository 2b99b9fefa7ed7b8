//! Microstrip impedance, width synthesis, and corner miter formulas.
//!
//! The forward model is Wheeler's closed-form approximation
//! (<https://en.wikipedia.org/wiki/Microstrip#Characteristic_impedance>);
//! the corner miter fraction is the Douville and James fit. Lengths are
//! meters and impedances ohms. Geometry is not validated: non-positive
//! widths, thicknesses, or heights propagate NaN per IEEE 754, which keeps
//! the formulas as transparent as the textbook expressions they implement.
//! The one exception is the miter ratio precondition, which is checked
//! because silently extrapolating the fit produces plausible-looking
//! nonsense.

use std::f64::consts::{E, PI};

use crate::constants::FREE_SPACE_IMPEDANCE;
use crate::errors::TlineError;
use crate::math::Scalar;

/// Smallest width-to-height ratio covered by the Douville-James miter fit.
pub const MITER_MIN_RATIO: Scalar = 0.25;

/// Convergence controls for [`wheeler_z0_width_with`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceCriteria {
    /// Acceptable absolute impedance error in ohms.
    pub tolerance_ohm: Scalar,
    /// Starting width estimate in meters. A guess near the expected width
    /// shortens the bracket walk.
    pub initial_guess_m: Scalar,
    /// Maximum refinement steps (and, separately, bracket expansions)
    /// before giving up with [`TlineError::NonConvergent`].
    pub max_iterations: usize,
}

impl Default for ConvergenceCriteria {
    fn default() -> Self {
        Self {
            tolerance_ohm: 0.01,
            initial_guess_m: 0.3,
            max_iterations: 100,
        }
    }
}

impl ConvergenceCriteria {
    /// Checks the absolute impedance error against the tolerance.
    fn is_converged(&self, z: Scalar, target: Scalar) -> bool {
        (z - target).abs() <= self.tolerance_ohm
    }
}

/// Trace width corrected for finite conductor thickness, per Wheeler.
fn effective_width(w: Scalar, t: Scalar, er: Scalar, h: Scalar) -> Scalar {
    let edge = (1.0 / PI) * (1.0 / (w / t + 11.0 / 10.0));
    w + t
        * ((1.0 + 1.0 / er) / (2.0 * PI))
        * (4.0 * E / ((t / h).powi(2) + edge.powi(2)).sqrt()).ln()
}

/// Microstrip characteristic impedance in ohms for trace width `w`, trace
/// thickness `t`, substrate relative permittivity `er`, and substrate height
/// `h` (lengths in meters).
#[must_use]
pub fn wheeler_z0(w: Scalar, t: Scalar, er: Scalar, h: Scalar) -> Scalar {
    let weff = effective_width(w, t, er, h);
    let hw = 4.0 * h / weff;
    let k = (14.0 + 8.0 / er) / 11.0;
    FREE_SPACE_IMPEDANCE / (2.0 * PI * (2.0 * (1.0 + er)).sqrt())
        * (1.0 + hw * (k * hw + ((k * hw).powi(2) + PI.powi(2) * (1.0 + 1.0 / er) / 2.0).sqrt()))
            .ln()
}

/// Solves Wheeler's equation for the trace width giving impedance `z0`,
/// using default [`ConvergenceCriteria`].
///
/// # Errors
///
/// Returns [`TlineError::NonConvergent`] if the solver exhausts its
/// iteration budget; see [`wheeler_z0_width_with`].
pub fn wheeler_z0_width(
    z0: Scalar,
    t: Scalar,
    er: Scalar,
    h: Scalar,
) -> Result<Scalar, TlineError> {
    wheeler_z0_width_with(z0, t, er, h, &ConvergenceCriteria::default())
}

/// Solves Wheeler's equation for the trace width giving impedance `z0`.
///
/// Impedance falls monotonically as the trace widens, so the target is first
/// bracketed by walking a decade at a time out from the initial guess, then
/// refined by linear interpolation against the nearest retained bracket.
/// Convergence is judged on the absolute impedance error alone, never on the
/// width step size.
///
/// # Errors
///
/// Returns [`TlineError::NonConvergent`] when either the bracket walk or the
/// refinement loop exceeds `criteria.max_iterations`. Well-posed geometry
/// (thin trace over a thicker substrate, moderate permittivity) converges in
/// a handful of steps.
pub fn wheeler_z0_width_with(
    z0: Scalar,
    t: Scalar,
    er: Scalar,
    h: Scalar,
    criteria: &ConvergenceCriteria,
) -> Result<Scalar, TlineError> {
    let mut width = criteria.initial_guess_m;
    let mut zm = wheeler_z0(width, t, er, h);

    // Narrow traces raise the impedance, so the low-width bracket bounds the
    // target impedance from above and the high-width bracket from below.
    let mut wlow = width / 10.0;
    let mut zlow = wheeler_z0(wlow, t, er, h);
    let mut whigh = width * 10.0;
    let mut zhigh = wheeler_z0(whigh, t, er, h);
    let mut expansions = 0;
    while zlow < z0 || zhigh > z0 {
        if expansions >= criteria.max_iterations {
            return Err(TlineError::NonConvergent {
                iterations: expansions,
                residual_ohm: (zm - z0).abs(),
            });
        }
        if zlow < z0 {
            wlow /= 10.0;
            zlow = wheeler_z0(wlow, t, er, h);
        }
        if zhigh > z0 {
            whigh *= 10.0;
            zhigh = wheeler_z0(whigh, t, er, h);
        }
        expansions += 1;
    }

    for _ in 0..criteria.max_iterations {
        if criteria.is_converged(zm, z0) {
            return Ok(width);
        }
        let slope = if zm > z0 {
            // Estimate is still too narrow: it becomes the new low bracket.
            let slope = (zhigh - zm) / (whigh - width);
            wlow = width;
            zlow = zm;
            slope
        } else {
            let slope = (zm - zlow) / (width - wlow);
            whigh = width;
            zhigh = zm;
            slope
        };
        width += (z0 - zm) / slope;
        zm = wheeler_z0(width, t, er, h);
    }
    if criteria.is_converged(zm, z0) {
        return Ok(width);
    }
    Err(TlineError::NonConvergent {
        iterations: criteria.max_iterations,
        residual_ohm: (zm - z0).abs(),
    })
}

/// Optimal fractional miter length for a microstrip corner, per the Douville
/// and James fit `0.52 + 0.65 * exp(-1.35 * w/h)`.
///
/// # Errors
///
/// Returns [`TlineError::InvalidRatio`] when `trace_width / substrate_height`
/// is below [`MITER_MIN_RATIO`], where the fit has no support.
pub fn miter(trace_width: Scalar, substrate_height: Scalar) -> Result<Scalar, TlineError> {
    let ratio = trace_width / substrate_height;
    if ratio < MITER_MIN_RATIO {
        return Err(TlineError::InvalidRatio { ratio });
    }
    Ok(0.52 + 0.65 * (-1.35 * ratio).exp())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    // 1.6 mm FR-4 with 35 um (1 oz) copper
    const T: Scalar = 35.0e-6;
    const ER: Scalar = 4.4;
    const H: Scalar = 1.6e-3;

    #[test]
    fn fr4_fifty_ohm_reference() {
        let z = wheeler_z0(3.0e-3, T, ER, H);
        assert_relative_eq!(z, 50.084_864_126_707_71, max_relative = 1.0e-3);
    }

    #[test]
    fn impedance_is_finite_positive_and_falls_with_width() {
        let mut last = Scalar::INFINITY;
        for w in [0.2e-3, 0.5e-3, 1.0e-3, 3.0e-3, 10.0e-3] {
            let z = wheeler_z0(w, T, ER, H);
            assert!(z.is_finite() && z > 0.0);
            assert!(z < last, "impedance must fall as the trace widens");
            last = z;
        }
    }

    #[test]
    fn width_synthesis_round_trips() {
        for z0 in [20.0, 35.0, 50.0, 75.0, 120.0] {
            let w = wheeler_z0_width(z0, T, ER, H).unwrap();
            assert_relative_eq!(wheeler_z0(w, T, ER, H), z0, epsilon = 0.01);
        }
    }

    #[test]
    fn width_synthesis_insensitive_to_guess() {
        let reference = wheeler_z0_width(50.0, T, ER, H).unwrap();
        for guess in [3.0e-5, 3.0e-3, 0.3, 30.0] {
            let criteria = ConvergenceCriteria {
                initial_guess_m: guess,
                ..Default::default()
            };
            let w = wheeler_z0_width_with(50.0, T, ER, H, &criteria).unwrap();
            assert_relative_eq!(w, reference, max_relative = 1.0e-2);
        }
    }

    #[test]
    fn solver_reports_non_convergence() {
        let err = wheeler_z0_width(Scalar::NAN, T, ER, H).unwrap_err();
        assert!(matches!(err, TlineError::NonConvergent { .. }));
    }

    #[test]
    fn miter_matches_douville_james() {
        assert_relative_eq!(
            miter(1.0, 1.0).unwrap(),
            0.688_506_169_419_829_6,
            max_relative = 1.0e-12
        );
        // ratio 0.25 sits at the edge of the fit's domain, its maximum
        assert_relative_eq!(
            miter(0.4e-3, 1.6e-3).unwrap(),
            0.983_808_783_559_226_6,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn miter_rejects_narrow_traces() {
        let err = miter(0.2, 1.0).unwrap_err();
        assert!(matches!(
            err,
            TlineError::InvalidRatio { ratio } if (ratio - 0.2).abs() < 1.0e-12
        ));
    }

    #[test]
    fn miter_fraction_stays_in_range() {
        for ratio in [0.25, 0.5, 1.0, 2.0, 5.0] {
            let m = miter(ratio, 1.0).unwrap();
            assert!(m > 0.52 && m <= 0.983_808_783_559_227);
        }
    }
}
