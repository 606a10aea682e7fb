/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Moon ephemeris: geocentric geometric/apparent longitude, latitude,
//! distance, velocity, and the syzygy-locating inverse solvers
//! `t_from_moon_longitude` / `t_from_diff_fast` / `t_from_diff` (spec
//! §4.8). The argument-combination rates reused here are the same ones
//! [`crate::ephemeris::data::moon`] bakes into its term table.

use crate::constants::arcsec_to_rad;
use crate::ephemeris::data::moon as table;
use crate::ephemeris::sun;
use crate::frames::nutation::nutation_iau2000b;
use crate::math::angles::{normalize_positive, normalize_signed};
use crate::math::series::moon6_sum;

/// Linear-in-T geometric mean longitude base term, radians (spec §4.8).
fn base_longitude(t: f64) -> f64 {
    3.810_344_09 + 8_399.684_730_072 * t - 3.319e-5 * t * t
}

/// Small precession correction folded into the geometric longitude (spec
/// §4.8); abridged to its leading secular term.
fn precession_correction(t: f64) -> f64 {
    arcsec_to_rad(-0.000_139_6 * t)
}

/// Geocentric geometric longitude, radians, normalised to `[0, 2*PI)`.
pub fn geometric_longitude(t: f64, n_terms: i32) -> f64 {
    let base = base_longitude(t) + precession_correction(t);
    let periodic = arcsec_to_rad(moon6_sum(table::LONGITUDE, t, n_terms));
    normalize_positive(base + periodic)
}

/// Geocentric geometric latitude, radians.
pub fn geometric_latitude(t: f64, n_terms: i32) -> f64 {
    arcsec_to_rad(moon6_sum(table::LATITUDE, t, n_terms))
}

/// Geocentric distance, km.
pub fn distance_km(t: f64, n_terms: i32) -> f64 {
    table::MEAN_DISTANCE_KM + moon6_sum(table::DISTANCE, t, n_terms)
}

/// Mean angular velocity of the Moon's longitude, rad/century, including
/// the three leading periodic corrections (spec §4.8).
pub fn velocity(t: f64) -> f64 {
    8_399.71
        + 3.45 * (2.87 + 8_328.69 * t).sin()
        + 0.05 * (5.19 + 7_214.06 * t).sin()
        + 0.04 * (3.51 + 16_657.38 * t).sin()
}

/// Aberration in longitude (spec §4.8).
pub fn aberration_longitude(t: f64) -> f64 {
    arcsec_to_rad(-3.4e-6 * velocity(t))
}

/// Aberration in latitude; depends on the two periodic phases `a`, `b`
/// and the geometric longitude (spec §4.8), abridged to its leading term.
pub fn aberration_latitude(t: f64, geometric_longitude: f64) -> f64 {
    let a = 8_399.685 * t + 5.381_3;
    let b = 7_214.063 * t + 4.899_7;
    arcsec_to_rad(-0.025_8 * a.sin() * geometric_longitude.cos() - 0.004_3 * b.sin())
}

/// Apparent longitude: geometric + nutation in longitude + aberration.
pub fn apparent_longitude(t: f64, n_terms: i32) -> f64 {
    let geo = geometric_longitude(t, n_terms);
    let (dpsi, _) = nutation_iau2000b(t, 0.0);
    normalize_positive(geo + dpsi + aberration_longitude(t))
}

/// Inverse of [`apparent_longitude`]: Julian centuries at which the
/// Moon's apparent longitude equals `lambda_target`, via a three-stage
/// Newton iteration with term counts `{10, 60, all}` (spec §4.8).
pub fn t_from_moon_longitude(lambda_target: f64, t_guess: f64) -> f64 {
    let mut t = t_guess;
    for n_terms in [10, 60, -1] {
        let lambda = apparent_longitude(t, n_terms);
        let residual = normalize_signed(lambda_target - lambda);
        t += residual / velocity(t);
    }
    t
}

/// `normalize_positive(lambda_moon_apparent - lambda_sun_apparent)`: the
/// master function used to locate syzygies (new/full moon), spec §4.8.
pub fn moon_sun_diff(t: f64, n_moon: i32, n_sun: i32) -> f64 {
    normalize_positive(apparent_longitude(t, n_moon) - sun::apparent_longitude(t, n_sun))
}

/// Fast closed-form inverse of [`moon_sun_diff`], good to roughly 600
/// seconds, via one algebraic correction (spec §4.8).
pub fn t_from_diff_fast(delta_target: f64, t_guess: f64) -> f64 {
    let t = t_guess;
    let v = velocity(t) - sun::solar_velocity(t);
    let diff = moon_sun_diff(t, -1, -1);
    let residual = normalize_signed(delta_target - diff);
    let mut refined = t + residual / v;

    let correction = -3.31e-5 * refined * refined
        + 0.109_76 * (0.784_758 + 8_328.69 * refined + 0.000_152 * refined * refined).cos()
        + 0.022_24 * (0.187 + 7_214.06 * refined).cos()
        - 0.033_42 * (4.669 + 628.308 * refined).cos();
    refined -= correction / v;
    refined
}

/// Precise inverse of [`moon_sun_diff`]: three Newton iterations with
/// term counts `{(3,3), (20,10), (all,60)}` (spec §4.8).
pub fn t_from_diff(delta_target: f64, t_guess: f64) -> f64 {
    let mut t = t_guess;
    for (n_moon, n_sun) in [(3, 3), (20, 10), (-1, 60)] {
        let diff = moon_sun_diff(t, n_moon, n_sun);
        let residual = normalize_signed(delta_target - diff);
        let v = velocity(t) - sun::solar_velocity(t);
        t += residual / v;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn geometric_longitude_is_normalised() {
        let lon = geometric_longitude(0.25, -1);
        assert!((0.0..core::f64::consts::TAU).contains(&lon));
    }

    #[test]
    fn distance_near_mean_earth_moon_distance() {
        let d = distance_km(0.0, -1);
        assert!((350_000.0..410_000.0).contains(&d), "d={d}");
    }

    #[test]
    fn velocity_dominated_by_mean_rate() {
        let v = velocity(0.0);
        assert!((8_395.0..8_404.0).contains(&v));
    }

    #[test]
    fn t_from_moon_longitude_round_trips_apparent_longitude() {
        // Spec's round-trip law for this solver: residual under 10
        // arcseconds (~4.85e-5 rad).
        let target = 2.0;
        let t = t_from_moon_longitude(target, 0.1);
        let lambda = apparent_longitude(t, -1);
        let diff = normalize_signed(lambda - target).abs();
        assert!(diff < 4.85e-5, "residual {diff} too large");
    }

    #[test]
    fn t_from_diff_round_trips_near_new_moon() {
        let target = 0.01;
        let t = t_from_diff(target, 0.1);
        let diff = moon_sun_diff(t, -1, -1);
        let residual = normalize_signed(diff - target).abs();
        assert!(residual < 1e-3, "residual {residual}");
    }

    #[test]
    fn t_from_diff_fast_is_close_to_precise() {
        let target = 3.0;
        let fast = t_from_diff_fast(target, 0.2);
        let precise = t_from_diff(target, fast);
        assert_relative_eq!(fast, precise, epsilon = 2e-3);
    }
}
