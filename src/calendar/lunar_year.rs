/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Lunar year layout: the 25 zhongqi, the 15 heshuo (new moons) bracketing
//! a lunar year, month lengths, the no-zhongqi leap-month rule, and the
//! ancient-era/date-specific month-naming patches (spec §4.12).

use crate::calendar::shuo_qi::{qi, shuo};
use crate::constants::{JIEQI_INTERVAL_DAYS, LUNAR_MONTH_DAYS, LUNAR_MONTH_NAMES, TROPICAL_YEAR_DAYS};

/// One lunar year's layout: the bracketing zhongqi/heshuo, each month's
/// length, and its (possibly ancient-era or patched) Chinese name.
#[derive(Clone, Debug)]
pub struct LunarYear {
    /// 25 zhongqi (major solar terms), JD2000, winter-solstice-to-winter-solstice.
    pub zhongqi: [f64; 25],
    /// 15 heshuo (new moons) bracketing the year, JD2000.
    pub heshuo: [f64; 15],
    /// Length of each of the (up to 14) months, days.
    pub month_days: [f64; 14],
    /// Chinese name of each month, in build order.
    pub month_names: [&'static str; 14],
    /// The month-build index (pre-naming-patch) each month position maps
    /// to; `(index + 10) % 12 + 1` gives the numeric lunar month, and two
    /// adjacent positions sharing the same build index marks the second
    /// one a leap month.
    pub month_build_index: [usize; 14],
    /// `Some(i)` if month-build-index `i` is an intercalary (leap) month.
    pub leap_month: Option<usize>,
}

/// Estimates the winter solstice at or before `jd2000`, per spec §4.12 step 1.
fn winter_solstice_estimate(jd2000: f64) -> f64 {
    let ws = ((jd2000 - 355.0 + 183.0) / TROPICAL_YEAR_DAYS).floor() * TROPICAL_YEAR_DAYS + 355.0;
    if qi(ws) > jd2000 {
        ws - TROPICAL_YEAR_DAYS
    } else {
        ws
    }
}

fn zhongqi_table(ws: f64) -> [f64; 25] {
    let mut zhongqi = [0.0; 25];
    for (i, z) in zhongqi.iter_mut().enumerate() {
        *z = qi(ws + JIEQI_INTERVAL_DAYS * i as f64);
    }
    zhongqi
}

fn heshuo_table(zhongqi0: f64) -> [f64; 15] {
    let mut nm = shuo(zhongqi0);
    if nm > zhongqi0 {
        nm -= LUNAR_MONTH_DAYS;
    }
    let mut heshuo = [0.0; 15];
    for (i, h) in heshuo.iter_mut().enumerate() {
        *h = shuo(nm + LUNAR_MONTH_DAYS * i as f64);
    }
    heshuo
}

/// No-zhongqi leap-month rule (spec §4.12 step 7): the year is leap iff
/// `heshuo[13] <= zhongqi[24]`; the leap month is the first whose span
/// contains no zhongqi.
fn determine_leap_month(zhongqi: &[f64; 25], heshuo: &[f64; 15]) -> Option<usize> {
    if heshuo[13] > zhongqi[24] {
        return None;
    }
    let mut i = 1;
    while i < 13 && heshuo[i + 1] <= zhongqi[2 * i] {
        i += 1;
    }
    Some(i)
}

/// One of the three historical eras patched into the ancient regime (spec
/// §4.12.1): spring-autumn/warring-states, or the Qin-Han transition.
struct AncientEra {
    start_jd2000: f64,
    leap_label: &'static str,
    month_base: i32,
}

const ANCIENT_ERAS: [AncientEra; 3] = [
    AncientEra { start_jd2000: -972_576.0, leap_label: "十三", month_base: 0 },
    AncientEra { start_jd2000: -881_516.0, leap_label: "十三", month_base: 0 },
    AncientEra { start_jd2000: -734_106.0, leap_label: "后九", month_base: 11 },
];

/// Names one month under the ancient-regime patch, per spec §4.12.1.
fn ancient_month_name(heshuo_jd2000: f64) -> &'static str {
    let era = ANCIENT_ERAS
        .iter()
        .rev()
        .find(|e| e.start_jd2000 <= heshuo_jd2000)
        .unwrap_or(&ANCIENT_ERAS[0]);
    let accum = ((heshuo_jd2000 - era.start_jd2000 + 15.0) / LUNAR_MONTH_DAYS).floor() as i32;
    if accum < 12 {
        LUNAR_MONTH_NAMES[((accum + era.month_base).rem_euclid(12)) as usize]
    } else {
        era.leap_label
    }
}

/// Date-specific month-naming patches layered on top of the build-index
/// table lookup (spec §4.12 step 8).
fn patch_build_index(first_day_jd: f64, build_index: usize) -> usize {
    let jd = first_day_jd;
    if (1_724_360.0..=1_729_794.0).contains(&jd) {
        return build_index + 1;
    }
    if (1_807_724.0..=1_808_699.0).contains(&jd) {
        return build_index + 1;
    }
    if (1_999_349.0..=1_999_467.0).contains(&jd) {
        return build_index + 2;
    }
    if (1_973_067.0..=1_977_052.0).contains(&jd) {
        return match build_index {
            0 => 2,
            2 => 0,
            other => other,
        };
    }
    build_index
}

fn name_for_month(first_day_jd2000: f64, build_index: usize, year: i32) -> &'static str {
    if (-721..=-104).contains(&year) {
        return ancient_month_name(first_day_jd2000);
    }
    let jd_abs = first_day_jd2000 + crate::constants::J2000;
    if jd_abs == 1_729_794.0 || jd_abs == 1_808_699.0 {
        return "拾贞";
    }
    let patched = patch_build_index(jd_abs, build_index);
    LUNAR_MONTH_NAMES[patched % LUNAR_MONTH_NAMES.len()]
}

/// Computes the full layout of the lunar year containing `jd2000` (spec §4.12).
pub fn layout(jd2000: f64, year: i32) -> LunarYear {
    let ws = winter_solstice_estimate(jd2000);
    let zhongqi = zhongqi_table(ws);
    let heshuo = heshuo_table(zhongqi[0]);

    let mut month_days = [0.0; 14];
    for i in 0..14 {
        month_days[i] = heshuo[i + 1] - heshuo[i];
    }

    let leap_month = if (-721..=-104).contains(&year) {
        None
    } else {
        determine_leap_month(&zhongqi, &heshuo)
    };

    let mut month_names: [&'static str; 14] = [""; 14];
    let mut month_build_index = [0usize; 14];
    for i in 0..14 {
        let build_index = match leap_month {
            Some(leap) if i >= leap => i - 1,
            _ => i,
        };
        month_build_index[i] = build_index;
        month_names[i] = name_for_month(heshuo[i], build_index, year);
    }

    LunarYear { zhongqi, heshuo, month_days, month_names, month_build_index, leap_month }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zhongqi_table_is_monotonically_increasing() {
        let jd2000 = crate::time::julian::civil_to_jd(2024, 6, 1.0) - crate::constants::J2000;
        let year = layout(jd2000, 2024);
        for pair in year.zhongqi.windows(2) {
            assert!(pair[1] > pair[0], "zhongqi not increasing: {:?}", pair);
        }
    }

    #[test]
    fn heshuo_table_is_monotonically_increasing() {
        let jd2000 = crate::time::julian::civil_to_jd(2024, 6, 1.0) - crate::constants::J2000;
        let year = layout(jd2000, 2024);
        for pair in year.heshuo.windows(2) {
            assert!(pair[1] > pair[0], "heshuo not increasing: {:?}", pair);
        }
    }

    #[test]
    fn month_days_are_near_synodic_month() {
        let jd2000 = crate::time::julian::civil_to_jd(2024, 6, 1.0) - crate::constants::J2000;
        let year = layout(jd2000, 2024);
        for &d in &year.month_days {
            assert!((29.0..31.0).contains(&d), "month length {d} implausible");
        }
    }

    #[test]
    fn ancient_era_uses_historical_labels() {
        let name = ancient_month_name(-972_000.0);
        assert!(LUNAR_MONTH_NAMES.contains(&name) || name == "十三" || name == "后九");
    }
}
