/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Civil <-> Julian-day conversion (Meeus), day-of-week, and the
//! nth-weekday-of-month helper. Spec §4.2.

use crate::constants::{J2000, JULIAN_CENTURY_DAYS};
use crate::errors::{OverflowSnafu, TimeResult};
use snafu::ensure;

/// Converts a proleptic civil (Gregorian after 1582-10-15, Julian before)
/// date to a Julian day number. `day` may carry a fractional part (e.g.
/// `1.5` for noon). Accepts arbitrary, including negative, years: year 0
/// exists (astronomical-year convention).
pub fn civil_to_jd(year: i64, month: i64, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    // Gregorian correction kicks in on or after 1582-10-15 (spec §4.2).
    let is_gregorian = year * 372 + month * 31 + day.floor() as i64 >= 588_829;
    let b = if is_gregorian {
        let a = (y as f64 / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Same conversion, but returns [`TimeError::Overflow`] instead of a
/// potentially-garbage value if `year` is so extreme that the intermediate
/// `year*372` arithmetic would overflow `i64` (spec §4.2, §7: the core does
/// not otherwise enforce range limits).
pub fn try_civil_to_jd(year: i64, month: i64, day: f64) -> TimeResult<f64> {
    ensure!(year.checked_mul(372).is_some(), OverflowSnafu { year });
    Ok(civil_to_jd(year, month, day))
}

/// Inverts [`civil_to_jd`]: returns `(year, month, day)` with `day`
/// carrying the fractional time-of-day.
pub fn jd_to_civil(jd: f64) -> (i64, i64, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i64, month as i64, day)
}

/// Day of the week for the given Julian day (0 = Sunday). The classic
/// formula adds `7e6` before the modulo purely to keep the (truncating)
/// remainder operand non-negative in languages without Euclidean modulo;
/// `rem_euclid` makes that offset unnecessary here.
pub fn day_of_week(jd: f64) -> u8 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u8
}

/// Julian day of the `n`-th occurrence of `weekday` (0 = Sunday) in the
/// given proleptic civil `year`/`month`, e.g. the 4th Thursday of November.
/// `n` is 1-based.
pub fn nth_weekday_of_month(year: i64, month: i64, weekday: u8, n: u32) -> f64 {
    let first_of_month = civil_to_jd(year, month, 1.0);
    let first_weekday = day_of_week(first_of_month);
    let delta = (weekday as i64 - first_weekday as i64).rem_euclid(7);
    first_of_month + delta as f64 + 7.0 * (n as f64 - 1.0)
}

/// `T`, the Julian centuries since J2000 for the given JD.
#[inline]
pub fn jd_to_julian_century(jd: f64) -> f64 {
    (jd - J2000) / JULIAN_CENTURY_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn j2000_epoch() {
        assert_relative_eq!(civil_to_jd(2000, 1, 1.5), J2000, epsilon = 1e-9);
    }

    #[test]
    fn jd_zero_is_proleptic_epoch() {
        assert_relative_eq!(civil_to_jd(-4712, 1, 1.5), 0.0, epsilon = 0.1);
    }

    #[rstest]
    #[case(-2000, 3, 14.25)]
    #[case(-1, 6, 1.0)]
    #[case(0, 1, 1.0)]
    #[case(1, 1, 1.0)]
    #[case(1582, 10, 4.0)]
    #[case(1582, 10, 15.0)]
    #[case(1900, 2, 28.5)]
    #[case(2024, 7, 26.3)]
    #[case(3000, 12, 31.9)]
    fn civil_jd_roundtrip(#[case] y: i64, #[case] m: i64, #[case] d: f64) {
        let jd = civil_to_jd(y, m, d);
        let (y2, m2, d2) = jd_to_civil(jd);
        assert_eq!(y, y2);
        assert_eq!(m, m2);
        assert_relative_eq!(d, d2, epsilon = 1e-8);
    }

    #[test]
    fn known_day_of_week() {
        // 2000-01-01 was a Saturday.
        let jd = civil_to_jd(2000, 1, 1.5);
        assert_eq!(day_of_week(jd), 6);
    }

    #[test]
    fn fourth_thursday_of_november_2024() {
        // 2024-11-28 is the 4th Thursday of November 2024 (US Thanksgiving).
        let jd = nth_weekday_of_month(2024, 11, 4, 4);
        let (y, m, d) = jd_to_civil(jd);
        assert_eq!((y, m, d.floor() as i64), (2024, 11, 28));
    }
}
