/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Pluto's rectangular Fourier series (spec §4.9): not VSOP87 — nine
//! sub-series, three each for X, Y, Z, combined via the `x`-polynomial
//! `S0 + x*S1 + x^2*S2`. Abridged to a handful of leading terms per
//! sub-series; see DESIGN.md.

/// One term `A * sin(B*T' + C*c0)`.
#[derive(Copy, Clone, Debug)]
pub struct PlutoTerm {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

macro_rules! t {
    ($a:expr, $b:expr, $c:expr) => {
        PlutoTerm { a: $a, b: $b, c: $c }
    };
}

pub const X0: &[PlutoTerm] = &[t!(-19.799_805, 19_798.05, 19_302.55), t!(0.893_201, 39_596.10, 19_302.55)];
pub const X1: &[PlutoTerm] = &[t!(0.173_557, 19_798.05, 19_302.55)];
pub const X2: &[PlutoTerm] = &[t!(0.003_223, 19_798.05, 19_302.55)];

pub const Y0: &[PlutoTerm] = &[t!(19.850_055, 19_798.05, 0.0), t!(-0.938_375, 39_596.10, 0.0)];
pub const Y1: &[PlutoTerm] = &[t!(0.155_436, 19_798.05, 0.0)];
pub const Y2: &[PlutoTerm] = &[t!(-0.001_444, 19_798.05, 0.0)];

pub const Z0: &[PlutoTerm] = &[t!(-9.490_412, 19_798.05, 9_500.44), t!(0.430_886, 39_596.10, 9_500.44)];
pub const Z1: &[PlutoTerm] = &[t!(-0.061_843, 19_798.05, 9_500.44)];
pub const Z2: &[PlutoTerm] = &[t!(0.001_009, 19_798.05, 9_500.44)];

/// `(O0, O1)`: constant offset contributing `O0 + O1*x` to each axis, AU.
pub const OFFSET_X: (f64, f64) = (-9.875_129, 0.000_276);
pub const OFFSET_Y: (f64, f64) = (-19.548_700, -0.000_173);
pub const OFFSET_Z: (f64, f64) = (5.174_920, 0.000_041);
