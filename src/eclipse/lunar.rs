/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Lunar-eclipse contact-time solver (spec §4.14): locates the full-moon
//! geometry extremum, classifies penumbral/partial/total, and solves
//! ingress/egress contact times for each shadow radius by a local
//! quadratic approximation, re-evaluated once for minute-level precision.

use crate::constants::{
    arcsec_to_rad, rad_to_arcsec, EARTH_RADIUS_KM, JULIAN_CENTURY_DAYS, MOON_RADIUS_KM,
    SUN_SEMIDIAMETER_ARCSEC_AT_1AU,
};
use crate::ephemeris::{moon, sun};
use crate::errors::{EclipseResult, NoContactSnafu};
use crate::math::angles::{normalize_positive, normalize_signed};
use core::f64::consts::{PI, TAU};
use snafu::ensure;

/// Mean solar horizontal parallax, arcseconds, used by the umbra/penumbra
/// radius formulas (spec §4.14).
const SOLAR_PARALLAX_ARCSEC: f64 = 8.794;

/// Mean atmospheric enlargement factor applied to Earth's shadow radii.
const ATMOSPHERIC_ENLARGEMENT: f64 = 51.0 / 50.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LunarEclipseType {
    None,
    Penumbral,
    Partial,
    Total,
}

/// The lunar-eclipse record (spec §3): contact JDs are `0.0` when not
/// applicable (e.g. `total_start`/`total_end` for a merely partial eclipse).
#[derive(Copy, Clone, Debug)]
pub struct LunarEclipseRecord {
    pub kind: LunarEclipseType,
    pub maximum_jd2000: f64,
    pub penumbral_start: f64,
    pub penumbral_end: f64,
    pub partial_start: f64,
    pub partial_end: f64,
    pub total_start: f64,
    pub total_end: f64,
    pub magnitude: f64,
    pub full_moon_jd2000: f64,
    pub r_moon: f64,
    pub r_umbra: f64,
    pub r_penumbra: f64,
}

struct Geometry {
    x: f64,
    y: f64,
    r_moon: f64,
    r_umbra: f64,
    r_penumbra: f64,
}

/// Evaluates the working coordinates and the three apparent shadow radii
/// at Julian centuries `t` (spec §4.14).
fn geometry_at(t: f64) -> Geometry {
    let lambda_moon = moon::apparent_longitude(t, -1);
    let lambda_sun = sun::apparent_longitude(t, -1);
    let beta_moon = moon::geometric_latitude(t, -1);
    let (_, beta_sun, r_sun_au) = sun::earth_lbr(t / 10.0, -1);

    let x = normalize_signed(lambda_moon + PI - lambda_sun) * ((beta_moon - beta_sun) / 2.0).cos();
    let y = beta_moon + beta_sun;

    let d_moon_km = moon::distance_km(t, -1);
    let r_moon = MOON_RADIUS_KM / d_moon_km;

    let earth_parallax_arcsec = rad_to_arcsec(EARTH_RADIUS_KM / d_moon_km);
    let r_umbra = arcsec_to_rad(
        (earth_parallax_arcsec
            - (SUN_SEMIDIAMETER_ARCSEC_AT_1AU - SOLAR_PARALLAX_ARCSEC) / r_sun_au)
            * ATMOSPHERIC_ENLARGEMENT,
    );
    let r_penumbra = arcsec_to_rad(
        (earth_parallax_arcsec
            + (SUN_SEMIDIAMETER_ARCSEC_AT_1AU + SOLAR_PARALLAX_ARCSEC) / r_sun_au)
            * ATMOSPHERIC_ENLARGEMENT,
    );

    Geometry { x, y, r_moon, r_umbra, r_penumbra }
}

/// Central finite-difference velocity of `(x, y)`, per Julian century.
fn velocity_at(t: f64) -> (f64, f64) {
    const DT: f64 = 60.0 / 86_400.0 / JULIAN_CENTURY_DAYS;
    let g0 = geometry_at(t - DT);
    let g1 = geometry_at(t + DT);
    ((g1.x - g0.x) / (2.0 * DT), (g1.y - g0.y) / (2.0 * DT))
}

/// Locates the full-moon geometry extremum nearest `jd2000_estimate`,
/// returning its Julian centuries (spec §4.14).
fn extremum_t(jd2000_estimate: f64) -> f64 {
    let k = ((jd2000_estimate) / crate::constants::LUNAR_MONTH_DAYS).round();
    let jd_full = crate::calendar::shuo_qi::low_precision_shuo(k * TAU + PI);
    let mut t = jd_full / JULIAN_CENTURY_DAYS;

    // Refine the low-precision opposition seed by solving for the Moon's
    // own apparent longitude at the Sun's (fixed) opposition point, the
    // same seed-tightening role `t_from_diff` plays for solar.rs's
    // conjunction search, before the (x, y)-geometry Newton loop below
    // polishes in latitude too.
    let lambda_target = normalize_positive(sun::apparent_longitude(t, -1) + PI);
    t = moon::t_from_moon_longitude(lambda_target, t);

    for _ in 0..2 {
        let g = geometry_at(t);
        let (vx, vy) = velocity_at(t);
        let denom = vx * vx + vy * vy;
        if denom.abs() < 1e-30 {
            break;
        }
        let dt = -(g.x * vx + g.y * vy) / denom;
        t += dt;
    }
    t
}

/// Solves the entry/exit Julian centuries for shadow radius `radius`,
/// re-evaluating the geometry once at the first solution for
/// minute-level precision (spec §4.14).
fn contact_times(t_extremum: f64, radius: f64) -> EclipseResult<(f64, f64)> {
    let solve_once = |t0: f64| -> EclipseResult<(f64, f64)> {
        let g = geometry_at(t0);
        let (vx, vy) = velocity_at(t0);
        let a = vx * vx + vy * vy;
        let b_coef = g.y * vx - g.x * vy;
        let c = b_coef * b_coef - radius * radius * vy * vy;
        let discriminant = b_coef * b_coef - a * c;
        ensure!(
            discriminant >= 0.0,
            NoContactSnafu { radius, jd2000: t0 * JULIAN_CENTURY_DAYS }
        );
        let sqrt_d = discriminant.sqrt();
        let t_ingress = t0 + ((-b_coef - sqrt_d) / a - g.x) / vx;
        let t_egress = t0 + ((-b_coef + sqrt_d) / a - g.x) / vx;
        Ok((t_ingress, t_egress))
    };

    let (t_in0, t_out0) = solve_once(t_extremum)?;
    let (_, t_out_refined) = solve_once(t_out0)?;
    let (t_in_refined, _) = solve_once(t_in0)?;
    Ok((t_in_refined, t_out_refined))
}

/// Computes the full lunar-eclipse record for the full moon nearest
/// `jd2000_estimate` (spec §4.14).
pub fn classify(jd2000_estimate: f64) -> LunarEclipseRecord {
    let t_extremum = extremum_t(jd2000_estimate);
    let g = geometry_at(t_extremum);
    let dist = (g.x * g.x + g.y * g.y).sqrt();

    let mut record = LunarEclipseRecord {
        kind: LunarEclipseType::None,
        maximum_jd2000: t_extremum * JULIAN_CENTURY_DAYS,
        penumbral_start: 0.0,
        penumbral_end: 0.0,
        partial_start: 0.0,
        partial_end: 0.0,
        total_start: 0.0,
        total_end: 0.0,
        magnitude: 0.0,
        full_moon_jd2000: t_extremum * JULIAN_CENTURY_DAYS,
        r_moon: g.r_moon,
        r_umbra: g.r_umbra,
        r_penumbra: g.r_penumbra,
    };

    if dist <= g.r_moon + g.r_penumbra {
        if let Ok((start, end)) = contact_times(t_extremum, g.r_moon + g.r_penumbra) {
            record.penumbral_start = start * JULIAN_CENTURY_DAYS;
            record.penumbral_end = end * JULIAN_CENTURY_DAYS;
            record.kind = LunarEclipseType::Penumbral;
        }
    }

    if dist <= g.r_moon + g.r_umbra {
        record.magnitude = (g.r_moon + g.r_umbra - dist) / g.r_moon / 2.0;
        if let Ok((start, end)) = contact_times(t_extremum, g.r_moon + g.r_umbra) {
            record.partial_start = start * JULIAN_CENTURY_DAYS;
            record.partial_end = end * JULIAN_CENTURY_DAYS;
            record.kind = LunarEclipseType::Partial;
        }

        if dist <= g.r_umbra - g.r_moon {
            if let Ok((start, end)) = contact_times(t_extremum, g.r_umbra - g.r_moon) {
                record.total_start = start * JULIAN_CENTURY_DAYS;
                record.total_end = end * JULIAN_CENTURY_DAYS;
                record.kind = LunarEclipseType::Total;
            }
        }
    }

    record
}
