/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! L4 Chinese calendar engine: the shuo/qi solver, lunar year layout,
//! ganzhi/zodiac, and the bounded year-layout cache (spec §4.11-§4.13).

pub mod cache;
pub mod ganzhi;
pub mod lunar_year;
pub mod shuo_qi;
pub mod tables;

use crate::constants::J2000;
use crate::errors::{CalendarResult, NoAncientEraSnafu};
use crate::time::julian::jd_to_civil;
use ganzhi::Ganzhi;
use lunar_year::LunarYear;
use snafu::ensure;

/// A full Gregorian-to-lunisolar date conversion result (spec §6's
/// lunar-date record).
#[derive(Clone, Debug)]
pub struct LunarDate {
    pub lunar_year: i32,
    pub lunar_month: u32,
    pub lunar_day: u32,
    pub is_leap: bool,
    pub month_name: &'static str,
    pub day_name: &'static str,
    pub month_days: u32,
}

/// Converts a build-month index into its numeric lunar month (1..=12):
/// index 0 is the 11th month, per `LUNAR_MONTH_NAMES`'s layout.
fn numeric_month(build_index: usize) -> u32 {
    ((build_index + 10) % 12) as u32 + 1
}

/// Computes the lunisolar date for the civil instant `jd2000`, using the
/// cached [`LunarYear`] layout for its containing lunar year (spec §4.12,
/// §6's lunar-date record).
pub fn lunar_date(jd2000: f64) -> LunarDate {
    let (civil_year, _, _) = jd_to_civil(jd2000 + J2000);
    let year = layout_for(jd2000, civil_year);

    let mut month_idx = 0;
    for i in 0..13 {
        if year.heshuo[i] <= jd2000 && jd2000 < year.heshuo[i + 1] {
            month_idx = i;
            break;
        }
    }

    let day_offset = (jd2000 - year.heshuo[month_idx]).floor() as usize;
    let day_name = crate::constants::LUNAR_DAY_NAMES[day_offset.min(29)];

    LunarDate {
        lunar_year: civil_year,
        lunar_month: numeric_month(year.month_build_index[month_idx]),
        lunar_day: day_offset as u32 + 1,
        is_leap: year.leap_month == Some(month_idx),
        month_name: year.month_names[month_idx],
        day_name,
        month_days: year.month_days[month_idx].round() as u32,
    }
}

fn layout_for(jd2000: f64, civil_year: i32) -> LunarYear {
    cache::layout(civil_year, jd2000)
}

/// Year ganzhi on the lichun boundary (spec §4.13), requiring the
/// enclosing lunar year's zhongqi table (`zhongqi[3]` is lichun).
pub fn year_ganzhi_lichun(jd2000: f64) -> Ganzhi {
    let (civil_year, _, _) = jd_to_civil(jd2000 + J2000);
    let year = layout_for(jd2000, civil_year);
    ganzhi::year_lichun(jd2000, year.zhongqi[3])
}

/// Year ganzhi on the lunar-new-year boundary (spec §4.13): the 正月初一
/// nearest the reference instant.
pub fn year_ganzhi_new_year(jd2000: f64) -> Ganzhi {
    let (civil_year, _, _) = jd_to_civil(jd2000 + J2000);
    let year = layout_for(jd2000, civil_year);
    let new_year_jd = year
        .month_build_index
        .iter()
        .position(|&b| b == 2)
        .map(|i| year.heshuo[i])
        .unwrap_or(year.heshuo[2]);
    ganzhi::year_new_year(jd2000, new_year_jd)
}

/// Month ganzhi (spec §4.13), requiring the enclosing lunar year's
/// zhongqi table.
pub fn month_ganzhi(jd2000: f64) -> Ganzhi {
    let (civil_year, _, _) = jd_to_civil(jd2000 + J2000);
    let year = layout_for(jd2000, civil_year);
    ganzhi::month(jd2000, &year.zhongqi)
}

/// Validates that `year` falls within the ancient-regime patch window
/// (spec §4.12.1), returning an error otherwise — used by collaborators
/// that specifically want the historical era's conventions rather than
/// the modern no-zhongqi rule.
pub fn require_ancient_era(year: i32) -> CalendarResult<()> {
    ensure!((-721..=-104).contains(&year), NoAncientEraSnafu { year });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lunar_date_month_day_are_in_range() {
        let jd2000 = crate::time::julian::civil_to_jd(2024, 6, 1.0) - J2000;
        let d = lunar_date(jd2000);
        assert!((1..=12).contains(&d.lunar_month));
        assert!((1..=30).contains(&d.lunar_day));
    }

    #[test]
    fn require_ancient_era_rejects_modern_year() {
        assert!(require_ancient_era(2024).is_err());
        assert!(require_ancient_era(-500).is_ok());
    }

    #[test]
    fn month_ganzhi_is_bounded() {
        let jd2000 = crate::time::julian::civil_to_jd(1998, 12, 7.0) - J2000;
        let g = month_ganzhi(jd2000);
        assert!(g.stem < 10 && g.branch < 12);
    }
}
