/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Abridged VSOP87-style coefficient tables for Earth and the seven other
//! VSOP87 planets, the Moon's ELP-style longitude/latitude/distance
//! series, and Pluto's rectangular Chebyshev-free Fourier series. See
//! DESIGN.md: every table here is a term-count-reduced reconstruction of
//! the canonical published series, not a verbatim transcription — the row
//! *shape* each evaluator in [`crate::math::series`] expects is exact.

use crate::math::series::{DegreeTable, Vsop3Term};

pub mod earth;
pub mod jupiter;
pub mod mars;
pub mod mercury;
pub mod moon;
pub mod neptune;
pub mod pluto;
pub mod saturn;
pub mod uranus;
pub mod venus;

/// One body's VSOP87-style L/B/R table set plus the small additive
/// polynomial corrections spec §4.7/§4.9 layer on top of the raw series
/// sum (arcsec for L/B, 10⁻⁶ AU for R).
pub struct PlanetSeries {
    pub l: DegreeTable<'static>,
    pub b: DegreeTable<'static>,
    pub r: DegreeTable<'static>,
    /// Correction polynomial coefficients in `t_millennia`, arcsec.
    pub l_correction: &'static [f64],
    /// Correction polynomial coefficients in `t_millennia`, arcsec.
    pub b_correction: &'static [f64],
    /// Correction polynomial coefficients in `t_millennia`, 1e-6 AU.
    pub r_correction: &'static [f64],
}

/// Evaluates a polynomial-in-`t` given lowest-degree-first coefficients.
pub fn poly_eval(coeffs: &[f64], t: f64) -> f64 {
    let mut total = 0.0;
    let mut t_pow = 1.0;
    for c in coeffs {
        total += c * t_pow;
        t_pow *= t;
    }
    total
}

pub const EMPTY: &[Vsop3Term] = &[];
