//! Geometry sweep helpers.
//!
//! Design work usually scans a width range rather than evaluating a single
//! point; these helpers generate the sample grids and map them through the
//! forward impedance formula.

use crate::math::Scalar;
use crate::microstrip::wheeler_z0;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start` and `stop`.
/// Requires start > 0 and stop > 0.
#[must_use]
pub fn logspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    assert!(start > 0.0 && stop > 0.0);
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let log_start = start.log10();
            let log_stop = stop.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    }
}

/// Evaluates [`wheeler_z0`] at each width for a fixed stackup.
#[must_use]
pub fn impedance_sweep(
    widths: impl IntoIterator<Item = Scalar>,
    t: Scalar,
    er: Scalar,
    h: Scalar,
) -> Vec<Scalar> {
    widths.into_iter().map(|w| wheeler_z0(w, t, er, h)).collect()
}
