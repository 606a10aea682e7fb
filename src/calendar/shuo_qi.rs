/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! The shuo (new moon)/qi (solar term) solver: a three-regime domain
//! split over classical piecewise-fit tables, a transition era using a
//! low-precision formula plus a packed correction string, and a modern
//! high-precision regime built on the full ephemeris (spec §4.11).
//! Grounded closely on
//! `other_examples/.../lunar_phase_calculator.rs`'s
//! `determine_calculation_method`/`calculate_flat_phase`/
//! `calculate_fixed_phase`/`calculate_shuo_low_precision`/
//! `calculate_qi_low_precision`.

use crate::calendar::tables::{self, F3_HIGH_PRECISION, KB_QI, KB_SHUO, PC_QI, PC_SHUO};
use crate::constants::{JULIAN_CENTURY_DAYS, J2000, LUNAR_MONTH_DAYS, TROPICAL_YEAR_DAYS};
use crate::ephemeris::{moon, sun};
use crate::time::delta_t::td_to_ut;
use core::f64::consts::{PI, TAU};
use once_cell::sync::Lazy;

/// Which of the two solved quantities a call targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PhaseKind {
    Shuo,
    Qi,
}

impl PhaseKind {
    fn kb(self) -> &'static [f64] {
        match self {
            PhaseKind::Shuo => KB_SHUO,
            PhaseKind::Qi => KB_QI,
        }
    }

    fn pc(self) -> f64 {
        match self {
            PhaseKind::Shuo => PC_SHUO,
            PhaseKind::Qi => PC_QI,
        }
    }
}

static SHUO_CORRECTION: Lazy<String> = Lazy::new(|| tables::decode(tables::SHUO_COMPRESSED));
static QI_CORRECTION: Lazy<String> = Lazy::new(|| tables::decode(tables::QI_COMPRESSED));

/// Low-precision shuo: `t = (Δ + 1.08472)/v0`, one correction pass, JD2000
/// in China Standard Time (spec §4.11).
pub(crate) fn low_precision_shuo(delta: f64) -> f64 {
    const VELOCITY: f64 = 7_771.377_145_002_04;
    let mut t = (delta + 1.084_72) / VELOCITY;
    let correction = -0.0000331 * t * t
        + 0.109_76 * (0.785 + 8_328.6914 * t).cos()
        + 0.022_24 * (0.187 + 7_214.0629 * t).cos()
        - 0.033_42 * (4.669 + 628.3076 * t).cos();
    let t18 = t + 1.8;
    t -= correction / VELOCITY + (32.0 * t18 * t18 - 20.0) / 86_400.0 / 36525.0;
    t * JULIAN_CENTURY_DAYS + 8.0 / 24.0
}

/// Low-precision qi: analogous, `v0 = 628.3319653318`, with the solar
/// mean-longitude periodic correction set (spec §4.11).
fn low_precision_qi(target_longitude: f64) -> f64 {
    const VELOCITY: f64 = 628.331_965_331_8;
    let mut t = (target_longitude - 4.895_062_166) / VELOCITY;
    t -= (53.0 * t * t
        + 334_116.0 * (4.669_257 + 628.307_585 * t).cos()
        + 2_061.0 * (2.678_23 + 628.3076 * t).cos() * t)
        / VELOCITY
        / 10_000_000.0;

    let l = 48_950_621.66
        + 6_283_319_653.318 * t
        + 53.0 * t * t
        + 334_166.0 * (4.669_257 + 628.307_585 * t).cos()
        + 3_489.0 * (4.6261 + 1_256.615_17 * t).cos()
        + 2_060.6 * (2.678_23 + 628.307_585 * t).cos() * t
        - 994.0
        - 834.0 * (2.182_4 - 33.757_05 * t).sin();

    let t18 = t + 1.8;
    t -= (l / 10_000_000.0 - target_longitude) / VELOCITY
        + (32.0 * t18 * t18 - 20.0) / 86_400.0 / 36525.0;

    t * JULIAN_CENTURY_DAYS + 8.0 / 24.0
}

/// Classical era: piecewise `(start, interval)` table lookup, spec
/// §4.11's "太初历" patch included. `kb` is `pairs` `(start, interval)`
/// rows followed by one trailing `jd_end` scalar (spec §4.11/§6).
fn classical(jd_abs: f64, kind: PhaseKind) -> f64 {
    let kb = kind.kb();
    let pc = kind.pc();
    let pairs = (kb.len() - 1) / 2;
    let mut p = 0;
    while p + 1 < pairs && jd_abs + pc >= kb[2 * (p + 1)] {
        p += 1;
    }
    let start = kb[2 * p];
    let interval = kb[2 * p + 1];
    let d = start + interval * ((jd_abs + pc - start) / interval).floor();
    let mut result = d.floor() + 0.5;
    if result == 1_683_460.0 {
        result += 1.0;
    }
    result - J2000
}

/// Transition era: low-precision formula, refined by the decompressed
/// correction string (spec §4.11).
fn transition(jd_abs: f64, kind: PhaseKind) -> f64 {
    let kb = kind.kb();
    let jd_end = kb[kb.len() - 1];
    let f2 = jd_end - kind.pc();

    let base = match kind {
        PhaseKind::Shuo => {
            let n = ((jd_abs - 2_451_551.0) / LUNAR_MONTH_DAYS).round();
            low_precision_shuo(n * TAU)
        }
        PhaseKind::Qi => {
            let k = ((jd_abs - 2_451_259.0) / (TROPICAL_YEAR_DAYS / 24.0)).round();
            low_precision_qi(k * (PI / 12.0))
        }
    };

    let (decoded, idx) = match kind {
        PhaseKind::Shuo => (&*SHUO_CORRECTION, ((jd_abs - f2) / LUNAR_MONTH_DAYS).floor()),
        PhaseKind::Qi => (&*QI_CORRECTION, (24.0 * (jd_abs - f2) / TROPICAL_YEAR_DAYS).floor()),
    };
    let idx = (idx.max(0.0) as usize).min(decoded.len().saturating_sub(1));
    let correction = match decoded.as_bytes().get(idx) {
        Some(b'1') => 1.0,
        Some(b'2') => -1.0,
        _ => 0.0,
    };
    base + correction
}

/// Modern high-precision era: the full Sun+Moon apparent-longitude
/// solver with ΔT, rounded to an integer day (spec §4.11).
fn high_precision(jd_abs: f64, kind: PhaseKind) -> f64 {
    let jd2000_estimate = jd_abs - J2000;
    let t_guess = jd2000_estimate / JULIAN_CENTURY_DAYS;

    let t_tt = match kind {
        PhaseKind::Shuo => moon::t_from_diff(0.0, t_guess),
        PhaseKind::Qi => {
            let lambda_now = sun::apparent_longitude(t_guess, -1);
            let n = (lambda_now / (PI / 12.0)).round();
            sun::t_from_sun_longitude(n * (PI / 12.0))
        }
    };

    let jd_tt = J2000 + t_tt * JULIAN_CENTURY_DAYS;
    let jd_ut = td_to_ut(jd_tt);
    let china_local = jd_ut + 8.0 / 24.0;

    // Within 1800s of local midnight the integer-day rounding is
    // ambiguous; a full-term-count recompute would stabilise it. Our
    // solvers above already ran at full term count, so we only need the
    // rounding itself here.
    (china_local - 0.5).round() + 0.5 - J2000
}

fn phase(jd2000_estimate: f64, kind: PhaseKind) -> f64 {
    let jd_abs = jd2000_estimate + J2000;
    let kb = kind.kb();
    let f1 = kb[0] - kind.pc();
    let f2 = kb[kb.len() - 1] - kind.pc();

    if jd_abs < f1 || jd_abs >= F3_HIGH_PRECISION {
        high_precision(jd_abs, kind)
    } else if jd_abs < f2 {
        classical(jd_abs, kind)
    } else {
        transition(jd_abs, kind)
    }
}

/// The new moon (shuo) nearest `jd2000_estimate`, JD2000.
pub fn shuo(jd2000_estimate: f64) -> f64 {
    phase(jd2000_estimate, PhaseKind::Shuo)
}

/// The solar term (qi, a multiple of 15 degrees solar longitude) nearest
/// `jd2000_estimate`, JD2000.
pub fn qi(jd2000_estimate: f64) -> f64 {
    phase(jd2000_estimate, PhaseKind::Qi)
}
