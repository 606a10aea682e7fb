/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Rise/transit/set and twilight, per spec §4.10. Grounded on the
//! teacher's `almanac::solar_time` (GMST-from-T polynomial feeding a
//! local-time computation) generalised into the iterative transit solver
//! spec §4.10 describes.

use crate::constants::{arcsec_to_rad, J2000, JULIAN_CENTURY_DAYS};
use crate::math::angles::normalize_signed;
use core::f64::consts::TAU;

/// Greenwich sidereal time at `jd_ut` (UT1 Julian day), radians,
/// normalised to `[0, 2*PI)`. `dt_days` is ΔT in days, used to evaluate
/// the polynomial term at the corresponding TT instant (spec §4.10).
pub fn gst(jd_ut: f64, dt_days: f64) -> f64 {
    let base = TAU * (0.779_057_273_264 + 1.002_737_811_911_35 * jd_ut);
    let t = (jd_ut + dt_days - J2000) / JULIAN_CENTURY_DAYS;
    let poly_arcsec = 0.014_506 + 4_612.156_534 * t + 1.391_58e-3 * t * t - 6.3e-6 * t * t * t;
    crate::math::angles::normalize_positive(base + arcsec_to_rad(poly_arcsec))
}

/// Standard horizon altitude offsets, radians (spec §4.10).
pub mod horizon {
    use core::f64::consts::PI;

    pub const STANDARD: f64 = -50.0 / 60.0 * PI / 180.0;
    pub const CIVIL: f64 = -6.0 * PI / 180.0;
    pub const NAUTICAL: f64 = -12.0 * PI / 180.0;
    pub const ASTRONOMICAL: f64 = -18.0 * PI / 180.0;
    /// Refraction + parallax (57') + semi-diameter (15.5') for the Moon.
    pub const MOON: f64 = (-50.0 - 15.5 + 57.0) / 60.0 * PI / 180.0;
}

/// Angular velocity of the body's apparent position used by the transit
/// iteration, radians/day (spec §4.10).
pub mod velocity {
    pub const SOLAR: f64 = core::f64::consts::TAU;
    pub const LUNAR: f64 = 0.9661 * core::f64::consts::TAU;
}

/// One body's apparent equatorial position at a given instant, as used by
/// [`transit`]/[`rise_set`]: right ascension and declination, radians.
pub struct EquatorialPosition {
    pub ra: f64,
    pub dec: f64,
}

/// Converges on the Julian day (UT) of the body's meridian transit at the
/// given `longitude` (radians, east-positive), iterating three times
/// (spec §4.10). `apparent_equatorial(jd_ut)` supplies the body's `(ra,
/// dec)` at a trial instant; `dt_days` is ΔT.
pub fn transit(
    jd_ut_estimate: f64,
    longitude: f64,
    dt_days: f64,
    body_velocity_per_day: f64,
    apparent_equatorial: impl Fn(f64) -> EquatorialPosition,
) -> f64 {
    let mut jd_transit =
        jd_ut_estimate - normalize_signed(jd_ut_estimate * TAU + longitude) / TAU;

    for _ in 0..3 {
        let pos = apparent_equatorial(jd_transit);
        let theta = gst(jd_transit, dt_days);
        let hour_angle = normalize_signed(theta + longitude - pos.ra);
        jd_transit -= hour_angle / body_velocity_per_day;
    }
    jd_transit
}

/// The outcome of a rise/set search: either a rise/set pair, or a flag
/// that the body never crosses the horizon that day (spec §4.10).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RiseSet {
    Times { rise: f64, set: f64 },
    AlwaysUp,
    AlwaysDown,
}

/// Given the transit instant, the body's declination there, the
/// observer's `latitude` (radians), and `h_horizon` (radians), computes
/// rise/set or the circumpolar outcome (spec §4.10).
pub fn rise_set(
    jd_transit: f64,
    dec_at_transit: f64,
    latitude: f64,
    h_horizon: f64,
    body_velocity_per_day: f64,
) -> RiseSet {
    let transit_altitude = core::f64::consts::FRAC_PI_2 - (latitude - dec_at_transit).abs();
    let cos_h0 = (h_horizon.sin() - latitude.sin() * dec_at_transit.sin())
        / (latitude.cos() * dec_at_transit.cos());

    if !(-1.0..=1.0).contains(&cos_h0) {
        return if transit_altitude > h_horizon {
            RiseSet::AlwaysUp
        } else {
            RiseSet::AlwaysDown
        };
    }

    let h0 = cos_h0.acos();
    RiseSet::Times {
        rise: jd_transit - h0 / body_velocity_per_day,
        set: jd_transit + h0 / body_velocity_per_day,
    }
}

/// Twilight (spec §4.10): reuses the Sun's transit/rise-set pipeline with
/// `horizon` set to one of the negative-degree constants; `rise` renames
/// to "dawn", `set` to "dusk" at the call site.
pub fn twilight(
    jd_transit: f64,
    sun_dec_at_transit: f64,
    latitude: f64,
    horizon_deg: f64,
) -> RiseSet {
    rise_set(
        jd_transit,
        sun_dec_at_transit,
        latitude,
        horizon_deg.to_radians(),
        velocity::SOLAR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gst_is_normalised() {
        let g = gst(2_451_545.0, 0.0);
        assert!((0.0..TAU).contains(&g));
    }

    #[test]
    fn gst_advances_by_roughly_one_turn_per_day() {
        let g0 = gst(2_451_545.0, 0.0);
        let g1 = gst(2_451_546.0, 0.0);
        let delta = normalize_signed(g1 - g0);
        // Sidereal day is ~3m56s shorter than the solar day: 2pi * 1.0027378.
        assert_relative_eq!(delta, normalize_signed(TAU * 0.002_737_81), epsilon = 1e-3);
    }

    #[test]
    fn rise_set_circumpolar_detection() {
        // Far north, high declination: always up.
        let result = rise_set(0.0, 1.4, 1.2, horizon::STANDARD, velocity::SOLAR);
        assert_eq!(result, RiseSet::AlwaysUp);
    }

    #[test]
    fn rise_set_normal_day() {
        let result = rise_set(0.5, 0.1, 0.6, horizon::STANDARD, velocity::SOLAR);
        match result {
            RiseSet::Times { rise, set } => assert!(rise < 0.5 && set > 0.5),
            other => panic!("expected Times, got {other:?}"),
        }
    }
}
