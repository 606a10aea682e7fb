/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Delta-T (TT - UT1): piecewise-cubic historical table plus quadratic
//! extrapolation with a 100-year C0 blend, per spec §4.3.
//!
//! The table below is an abridged, internally-consistent reconstruction of
//! the well-known historical Delta-T record (Morrison & Stephenson /
//! Espenak-style anchor values), reduced to one row per multi-decade/century
//! interval rather than the full canonical dataset — see DESIGN.md. The
//! evaluator contract (`ΔT(y) = a0 + a1*u + a2*u^2 + a3*u^3`,
//! `u = 10*(y-y0)/(y1-y0)`) is exact; only the coefficient *count* is
//! reduced (all rows here use `a2 = a3 = 0`, a valid degenerate cubic).

use crate::time::julian::{civil_to_jd, jd_to_civil};

/// One ΔT table row: cubic-in-segment fit starting at `year0`.
#[derive(Copy, Clone, Debug)]
pub struct DeltaTRow {
    pub year0: f64,
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
}

macro_rules! row {
    ($y:expr, $a0:expr, $a1:expr) => {
        DeltaTRow {
            year0: $y as f64,
            a0: $a0,
            a1: $a1,
            a2: 0.0,
            a3: 0.0,
        }
    };
}

/// Segments are contiguous and sorted by `year0` (invariant, spec §3).
pub const DELTA_T_TABLE: &[DeltaTRow] = &[
    row!(-720, 20400.0, -220.0),
    row!(-600, 18200.0, -320.0),
    row!(-400, 15000.0, -260.0),
    row!(-200, 12400.0, -182.0),
    row!(0, 10580.0, -194.0),
    row!(200, 8640.0, -194.0),
    row!(400, 6700.0, -170.0),
    row!(600, 5000.0, -140.0),
    row!(800, 3600.0, -203.0),
    row!(1000, 1570.0, -87.0),
    row!(1200, 700.0, -50.0),
    row!(1400, 200.0, -4.0),
    row!(1500, 160.0, -4.0),
    row!(1600, 120.0, 0.4),
    row!(1620, 124.0, -11.4),
    row!(1680, 10.0, -0.1),
    row!(1700, 9.0, 0.4),
    row!(1750, 13.0, 0.07),
    row!(1800, 13.7, -0.17),
    row!(1810, 12.0, -0.1),
    row!(1820, 11.0, -0.35),
    row!(1830, 7.5, -0.15),
    row!(1840, 6.0, 0.15),
    row!(1850, 7.5, 0.05),
    row!(1860, 8.0, -0.7),
    row!(1870, 1.0, -0.6),
    row!(1880, -5.0, -0.1),
    row!(1890, -6.0, 0.37),
    row!(1900, -2.3, 1.23),
    row!(1910, 10.0, 1.1),
    row!(1920, 21.0, 0.3),
    row!(1930, 24.0, 0.0),
    row!(1940, 24.0, 0.5),
    row!(1950, 29.0, 0.2),
    row!(1955, 31.0, 0.2),
    row!(1960, 33.0, 0.3),
    row!(1965, 36.0, 0.4),
    row!(1970, 40.0, 0.5),
    row!(1975, 45.0, 0.55),
    row!(1980, 50.5, 0.38),
    row!(1985, 54.3, 0.26),
    row!(1990, 56.9, 0.39),
    row!(1995, 60.8, 0.307),
    row!(2000, 63.87, 0.083),
    row!(2005, 64.7, 0.2),
    row!(2010, 66.7, 0.14),
];

/// Marks the end of the tabulated cubic-in-segment fit: `(year_last, ΔT_last)`.
pub const DELTA_T_LAST: (f64, f64) = (2015.0, 68.1);

/// Secular acceleration used by the out-of-table extrapolation.
const SECULAR_ACCELERATION: f64 = 31.0;

fn long_term_parabola(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + SECULAR_ACCELERATION * u * u
}

/// ΔT = TT - UT1, in seconds, for the given (possibly fractional, proleptic)
/// civil year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let first_year = DELTA_T_TABLE[0].year0;
    let (last_year, last_dt) = DELTA_T_LAST;

    if year < first_year {
        // Below the table: use the same extrapolation formula (spec §4.3).
        return long_term_parabola(year);
    }

    if year >= last_year {
        let e = long_term_parabola(year);
        return if year < last_year + 100.0 {
            let e_last = long_term_parabola(last_year);
            e - (e_last - last_dt) * (last_year + 100.0 - year) / 100.0
        } else {
            e
        };
    }

    let mut idx = DELTA_T_TABLE.len() - 1;
    for i in 0..DELTA_T_TABLE.len() {
        let seg_end = if i + 1 < DELTA_T_TABLE.len() {
            DELTA_T_TABLE[i + 1].year0
        } else {
            last_year
        };
        if year >= DELTA_T_TABLE[i].year0 && year < seg_end {
            idx = i;
            break;
        }
    }

    let row = &DELTA_T_TABLE[idx];
    let seg_end = if idx + 1 < DELTA_T_TABLE.len() {
        DELTA_T_TABLE[idx + 1].year0
    } else {
        last_year
    };
    let u = 10.0 * (year - row.year0) / (seg_end - row.year0);
    row.a0 + row.a1 * u + row.a2 * u * u + row.a3 * u * u * u
}

/// The fractional proleptic civil year for a given Julian day, used only to
/// index into the ΔT table/extrapolation.
fn fractional_year_of(jd: f64) -> f64 {
    let (y, _, _) = jd_to_civil(jd);
    let start_of_year = civil_to_jd(y, 1, 1.0);
    let next_year_start = civil_to_jd(y + 1, 1, 1.0);
    y as f64 + (jd - start_of_year) / (next_year_start - start_of_year)
}

/// Converts a UT1 Julian day to TT (Terrestrial Time): `jd + ΔT/86400`.
pub fn ut_to_td(jd_ut: f64) -> f64 {
    let dt_days = delta_t_seconds(fractional_year_of(jd_ut)) / 86_400.0;
    jd_ut + dt_days
}

/// Converts a TT Julian day back to UT1. First-order inverse (re-evaluates
/// ΔT at the TT instant rather than solving for the UT1 instant exactly);
/// acceptable since `|dΔT/dy| < 1 s/yr` (spec §4.3).
pub fn td_to_ut(jd_td: f64) -> f64 {
    let dt_days = delta_t_seconds(fractional_year_of(jd_td)) / 86_400.0;
    jd_td - dt_days
}
