/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Sun/Earth ephemeris: heliocentric Earth L/B/R, Sun true/apparent
//! longitude, aberration, mean angular velocity, and the inverse solver
//! `t_from_sun_longitude` (spec §4.7). Grounded on the teacher's
//! `almanac::solar_time` for the "apparent longitude feeds a Newton
//! solver with staged term counts" shape.

use crate::constants::{arcsec_to_rad, J2000};
use crate::ephemeris::data::earth;
use crate::frames::nutation::{fundamental_lp, nutation_iau2000b};
use crate::math::angles::normalize_signed;
use crate::math::series::degree_sum;
use core::f64::consts::PI;

/// `(L, B, R)` heliocentric ecliptic longitude/latitude (radians) and
/// distance (AU) of Earth, using the first `n_terms` terms of each VSOP87
/// degree series (or all, if negative). `t_millennia` per spec §4.4/§4.7.
pub fn earth_lbr(t_millennia: f64, n_terms: i32) -> (f64, f64, f64) {
    let l = degree_sum(&earth::SERIES.l, t_millennia, 1.0, n_terms)
        + arcsec_to_rad(super::data::poly_eval(earth::SERIES.l_correction, t_millennia));
    let b = degree_sum(&earth::SERIES.b, t_millennia, 1.0, n_terms)
        + arcsec_to_rad(super::data::poly_eval(earth::SERIES.b_correction, t_millennia));
    let r = degree_sum(&earth::SERIES.r, t_millennia, 1.0, n_terms)
        + 1e-6 * super::data::poly_eval(earth::SERIES.r_correction, t_millennia);
    (l, b, r)
}

/// Earth's orbital eccentricity, polynomial in `T` (Julian centuries).
pub fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t
}

/// Sun's true geocentric longitude: Earth's heliocentric longitude + PI.
pub fn true_longitude(t_centuries: f64, n_terms: i32) -> f64 {
    let (l, _, _) = earth_lbr(t_centuries / 10.0, n_terms);
    crate::math::angles::normalize_positive(l + PI)
}

/// Aberration in longitude: `-20.49552" * (1 + e*cos(M)) / RAD` (spec
/// §4.7), `M` the Sun's mean anomaly.
pub fn aberration(t: f64) -> f64 {
    let m = fundamental_lp(t);
    arcsec_to_rad(-20.495_52 * (1.0 + eccentricity(t) * m.cos()))
}

/// Apparent longitude: true longitude + nutation in longitude + aberration.
pub fn apparent_longitude(t_centuries: f64, n_terms: i32) -> f64 {
    let true_lon = true_longitude(t_centuries, n_terms);
    let (dpsi, _) = nutation_iau2000b(t_centuries, 0.0);
    crate::math::angles::normalize_positive(true_lon + dpsi + aberration(t_centuries))
}

/// Mean angular rate of the Sun's apparent longitude, rad/century, with a
/// small periodic correction (spec §4.7).
pub fn solar_velocity(t: f64) -> f64 {
    628.331_966_78 + arcsec_to_rad(21.0) * fundamental_lp(t).sin()
}

/// Inverse of [`apparent_longitude`]: the Julian centuries `T` at which
/// the Sun's apparent longitude equals `lambda_target` (radians),
/// e.g. to locate an equinox/solstice or a jieqi boundary (spec §4.7).
pub fn t_from_sun_longitude(lambda_target: f64) -> f64 {
    let v0 = 628.331_966_78;
    let mut t = (lambda_target - 1.753_47 - PI) / v0;
    for n_terms in [10, -1] {
        let lambda = apparent_longitude(t, n_terms);
        let residual = normalize_signed(lambda_target - lambda);
        t += residual / solar_velocity(t);
    }
    t
}

/// Julian day (TT) corresponding to `t_from_sun_longitude`'s result.
pub fn jd_from_sun_longitude(lambda_target: f64) -> f64 {
    J2000 + t_from_sun_longitude(lambda_target) * crate::constants::JULIAN_CENTURY_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn earth_radius_near_one_au() {
        let (_, _, r) = earth_lbr(0.0, -1);
        assert!((0.9..1.1).contains(&r), "r={r} not near 1 AU");
    }

    #[test]
    fn sun_true_longitude_is_normalised() {
        let lon = true_longitude(0.3, -1);
        assert!((0.0..core::f64::consts::TAU).contains(&lon));
    }

    #[test]
    fn eccentricity_near_j2000_is_canonical() {
        assert_relative_eq!(eccentricity(0.0), 0.016_708_634, epsilon = 1e-9);
    }

    #[test]
    fn inverse_solver_round_trips_apparent_longitude() {
        // Spec's round-trip law: residual under 1 arcsecond (~4.85e-6 rad).
        let target = 1.0;
        let t = t_from_sun_longitude(target);
        let lambda = apparent_longitude(t, -1);
        let diff = normalize_signed(lambda - target).abs();
        assert!(diff < 4.85e-6, "residual {diff} too large");
    }

    #[test]
    fn solar_velocity_is_positive_and_order_2pi_per_year() {
        let v = solar_velocity(0.1);
        assert!(v > 600.0 && v < 660.0);
    }
}
