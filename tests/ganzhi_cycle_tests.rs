/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Sexagenary-cycle invariants (spec §8 invariant 8): advancing by 60 of
//! the relevant unit returns to the same ganzhi pair.

use lunisolar_core::calendar::{ganzhi, lunar_year};
use lunisolar_core::constants::{J2000, LUNAR_MONTH_DAYS, TROPICAL_YEAR_DAYS};
use lunisolar_core::time::civil_to_jd;

fn jd2000(year: i64, month: i64, day: f64) -> f64 {
    civil_to_jd(year, month, day) - J2000
}

#[test]
fn day_ganzhi_repeats_every_60_days() {
    let base = jd2000(2024, 3, 15.0);
    let a = ganzhi::day(base);
    let b = ganzhi::day(base + 60.0);
    assert_eq!(a, b);
}

#[test]
fn day_ganzhi_advances_continuously_across_a_year() {
    let base = jd2000(2024, 1, 1.0);
    let mut prev = ganzhi::day(base);
    for i in 1..365 {
        let next = ganzhi::day(base + i as f64);
        assert_eq!((next.stem + 10 - prev.stem) % 10, 1);
        assert_eq!((next.branch + 12 - prev.branch) % 12, 1);
        prev = next;
    }
}

#[test]
fn month_ganzhi_repeats_every_60_synodic_months() {
    let jd = jd2000(2005, 6, 1.0);
    let year = lunar_year::layout(jd, 2005);
    let a = ganzhi::month(jd, &year.zhongqi);
    let b = ganzhi::month(jd + 60.0 * LUNAR_MONTH_DAYS, &year.zhongqi);
    assert_eq!(a, b);
}

#[test]
fn year_ganzhi_repeats_every_60_years() {
    let lichun_a = jd2000(2024, 2, 4.0);
    let lichun_b = lichun_a + 60.0 * TROPICAL_YEAR_DAYS;
    let a = ganzhi::year_lichun(lichun_a + 10.0, lichun_a);
    let b = ganzhi::year_lichun(lichun_b + 10.0, lichun_b);
    assert_eq!(a, b);
}

#[test]
fn hour_ganzhi_stem_cycles_with_day_stem() {
    let day = ganzhi::day(jd2000(2024, 1, 1.0));
    let midnight = ganzhi::hour(jd2000(2024, 1, 1.0) - 0.5, day);
    let next_midnight = ganzhi::hour(jd2000(2024, 1, 1.0) + 0.5, day);
    assert_eq!(midnight.branch, next_midnight.branch);
}
