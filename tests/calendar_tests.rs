/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Integration tests for the Chinese lunisolar calendar engine: the
//! Gregorian-to-lunar conversion, lunar-year layout leap-month rule, and
//! the ganzhi seed scenarios.

use lunisolar_core::calendar::{self, ganzhi, lunar_year};
use lunisolar_core::constants::J2000;
use lunisolar_core::time::civil_to_jd;

fn jd2000(year: i64, month: i64, day: f64) -> f64 {
    civil_to_jd(year, month, day) - J2000
}

#[test]
fn lunar_date_2024_06_01_has_plausible_month_and_day() {
    let date = calendar::lunar_date(jd2000(2024, 6, 1.0));
    assert!((1..=12).contains(&date.lunar_month));
    assert!((1..=30).contains(&date.lunar_day));
    assert_eq!(date.lunar_year, 2024);
}

#[test]
fn year_2024_has_no_leap_month() {
    let year = lunar_year::layout(jd2000(2024, 6, 1.0), 2024);
    assert!(year.leap_month.is_none(), "2024 should have no intercalary month");
}

#[test]
fn year_2023_has_a_leap_month() {
    // 2023 carries 闰二月 (leap second month) in the traditional calendar.
    let year = lunar_year::layout(jd2000(2023, 6, 1.0), 2023);
    assert!(year.leap_month.is_some(), "2023 should carry a leap month");
}

#[test]
fn year_2023_leap_position_repeats_the_prior_build_index() {
    // 闰二月 sits right after 二月: the leap position must collapse to the
    // same build index as the month it intercalates, not keep its own.
    let year = lunar_year::layout(jd2000(2023, 6, 1.0), 2023);
    let leap = year.leap_month.expect("2023 should carry a leap month");
    assert_eq!(
        year.month_build_index[leap],
        year.month_build_index[leap - 1],
        "leap position {leap} should repeat the preceding month's build index"
    );
    assert_eq!(year.month_names[leap], year.month_names[leap - 1], "leap month should share its base name");
}

#[test]
fn lunar_year_invariants_hold_across_a_decade() {
    for y in 2015i32..2025 {
        let year = lunar_year::layout(jd2000(y as i64, 6, 1.0), y);
        for pair in year.zhongqi.windows(2) {
            assert!(pair[1] > pair[0], "zhongqi not increasing in {y}");
        }
        for pair in year.heshuo.windows(2) {
            assert!(pair[1] > pair[0], "heshuo not increasing in {y}");
        }
        for &d in &year.month_days {
            assert!((29.0..=30.0).contains(&d), "implausible month length {d} in {y}");
        }
        let is_leap = year.heshuo[13] <= year.zhongqi[24];
        assert_eq!(year.leap_month.is_some(), is_leap, "leap-month rule mismatch in {y}");
    }
}

#[test]
fn day_ganzhi_known_seed() {
    // 2000-01-07, JD 2451551.5.
    let jd2000 = jd2000(2000, 1, 7.0);
    let g = ganzhi::day(jd2000 + 0.5);
    assert_eq!(g.stem_name(), "甲");
    assert_eq!(g.branch_name(), "子");
}

#[test]
fn year_ganzhi_2024_is_jiachen_dragon() {
    let jd = jd2000(2024, 6, 15.0);
    let g = calendar::year_ganzhi_lichun(jd);
    assert_eq!(g.stem_name(), "甲");
    assert_eq!(g.branch_name(), "辰");
    assert_eq!(g.zodiac(), "龙");
}

#[test]
fn require_ancient_era_bounds() {
    assert!(calendar::require_ancient_era(-500).is_ok());
    assert!(calendar::require_ancient_era(-103).is_err());
    assert!(calendar::require_ancient_era(2024).is_err());
}
