/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Cross-module ephemeris round-trip laws (spec §8): the Sun/Moon inverse
//! solvers, and the spacing between successive solar terms / new moons.

use lunisolar_core::constants::{J2000, JULIAN_CENTURY_DAYS};
use lunisolar_core::ephemeris::{moon, sun};
use lunisolar_core::math::angles::normalize_signed;
use lunisolar_core::time::civil_to_jd;

fn jd2000(year: i64, month: i64, day: f64) -> f64 {
    civil_to_jd(year, month, day) - J2000
}

#[test]
fn sun_apparent_longitude_inverse_round_trips_within_one_arcsecond() {
    let target = 0.5;
    let t = sun::t_from_sun_longitude(target);
    let lambda = sun::apparent_longitude(t, -1);
    let residual_arcsec = normalize_signed(lambda - target).abs().to_degrees() * 3600.0;
    assert!(residual_arcsec < 1.0, "residual {residual_arcsec}\" too large");
}

#[test]
fn moon_sun_diff_inverse_round_trips_within_a_few_arcseconds() {
    let target = 1.2;
    let t_guess = 0.24;
    let t = moon::t_from_diff(target, t_guess);
    let diff = moon::moon_sun_diff(t, -1, -1);
    let residual_arcsec = normalize_signed(diff - target).abs().to_degrees() * 3600.0;
    assert!(residual_arcsec < 3.0, "residual {residual_arcsec}\" too large");
}

#[test]
fn successive_solar_terms_are_spaced_near_15_218_days() {
    let t0 = sun::t_from_sun_longitude(0.0);
    let t1 = sun::t_from_sun_longitude(core::f64::consts::PI / 12.0);
    let spacing_days = (t1 - t0) * JULIAN_CENTURY_DAYS;
    assert!(
        (spacing_days - 15.218).abs() < 30.0 / 1440.0,
        "spacing {spacing_days} days too far from 15.218"
    );
}

#[test]
fn successive_new_moons_are_spaced_near_29_5306_days() {
    let t0 = moon::t_from_diff(0.0, jd2000(2024, 1, 11.0) / JULIAN_CENTURY_DAYS);
    let t1 = moon::t_from_diff(0.0, jd2000(2024, 2, 9.0) / JULIAN_CENTURY_DAYS);
    let spacing_days = (t1 - t0) * JULIAN_CENTURY_DAYS;
    assert!(
        (spacing_days - 29.5306).abs() < 6.0 / 24.0,
        "spacing {spacing_days} days too far from 29.5306"
    );
}

#[test]
fn spring_equinox_2024_is_near_zero_apparent_longitude() {
    let jd = jd2000(2024, 3, 20.0) + 0.7;
    let t = jd / JULIAN_CENTURY_DAYS;
    let lambda = sun::apparent_longitude(t, -1);
    let residual_arcsec = normalize_signed(lambda).abs().to_degrees() * 3600.0;
    assert!(residual_arcsec < 5.0, "residual {residual_arcsec}\" too large near equinox");
}
