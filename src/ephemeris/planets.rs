/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! The seven non-Earth VSOP87 planets plus Pluto's rectangular series:
//! heliocentric L/B/R, geocentric transform, phase angle, magnitude,
//! prograde/retrograde test, and light-time (spec §4.9).

use crate::constants::{arcsec_to_rad, PlanetId, AU_KM, SPEED_OF_LIGHT_KM_S};
use crate::ephemeris::data::{self, pluto::PlutoTerm, PlanetSeries};
use crate::math::angles::normalize_signed;
use crate::math::series::degree_sum;
use crate::math::{Rectangular, Spherical};

fn series_for(planet: PlanetId) -> Option<&'static PlanetSeries> {
    use PlanetId::*;
    match planet {
        Mercury => Some(&data::mercury::SERIES),
        Venus => Some(&data::venus::SERIES),
        Earth => Some(&data::earth::SERIES),
        Mars => Some(&data::mars::SERIES),
        Jupiter => Some(&data::jupiter::SERIES),
        Saturn => Some(&data::saturn::SERIES),
        Uranus => Some(&data::uranus::SERIES),
        Neptune => Some(&data::neptune::SERIES),
        Sun | Pluto => None,
    }
}

/// Pluto's orbit-progress parameter `x` (spec §4.9).
fn pluto_x(jd2000: f64) -> f64 {
    -1.0 + 2.0 * (jd2000 * 365.25 + 1_825_394.5) / 2_185_000.0
}

fn pluto_sub_series(series: &[PlutoTerm], t_prime: f64) -> f64 {
    const C0: f64 = core::f64::consts::PI / (180.0 * 1e5);
    series.iter().map(|term| term.a * (term.b * t_prime + term.c * C0).sin()).sum()
}

fn pluto_axis(s0: &[PlutoTerm], s1: &[PlutoTerm], s2: &[PlutoTerm], offset: (f64, f64), x: f64, t_prime: f64) -> f64 {
    let combined = pluto_sub_series(s0, t_prime) + x * pluto_sub_series(s1, t_prime) + x * x * pluto_sub_series(s2, t_prime);
    combined + offset.0 + offset.1 * x
}

/// Pluto's heliocentric rectangular position, AU.
pub fn pluto_rectangular(jd2000: f64) -> Rectangular {
    use data::pluto::*;
    let x_param = pluto_x(jd2000);
    let t_prime = (jd2000 / crate::constants::JULIAN_CENTURY_DAYS) / 1e8;

    Rectangular::new(
        pluto_axis(X0, X1, X2, OFFSET_X, x_param, t_prime),
        pluto_axis(Y0, Y1, Y2, OFFSET_Y, x_param, t_prime),
        pluto_axis(Z0, Z1, Z2, OFFSET_Z, x_param, t_prime),
    )
}

/// `(L, B, R)` heliocentric ecliptic longitude/latitude (radians) and
/// distance (AU), for any of the seven VSOP87 planets or Pluto.
pub fn heliocentric_lbr(planet: PlanetId, jd2000: f64, t_millennia: f64, n_terms: i32) -> (f64, f64, f64) {
    if planet == PlanetId::Pluto {
        let sph = pluto_rectangular(jd2000).to_spherical();
        return (sph.lon, sph.lat, sph.radius);
    }
    let series = series_for(planet).expect("Sun has no heliocentric position");
    let l = degree_sum(&series.l, t_millennia, 1.0, n_terms)
        + arcsec_to_rad(data::poly_eval(series.l_correction, t_millennia));
    let b = degree_sum(&series.b, t_millennia, 1.0, n_terms)
        + arcsec_to_rad(data::poly_eval(series.b_correction, t_millennia));
    let r = degree_sum(&series.r, t_millennia, 1.0, n_terms) + 1e-6 * data::poly_eval(series.r_correction, t_millennia);
    (l, b, r)
}

/// Geocentric position: difference of heliocentric rectangular position
/// of `planet` and Earth, converted back to spherical (spec §4.9).
pub fn geocentric(planet: PlanetId, jd2000: f64, t_centuries: f64, n_terms: i32) -> Spherical {
    let t_millennia = t_centuries / 10.0;
    let (pl, pb, pr) = heliocentric_lbr(planet, jd2000, t_millennia, n_terms);
    let (el, eb, er) = heliocentric_lbr(PlanetId::Earth, jd2000, t_millennia, n_terms);

    let p = Spherical::new(pl, pb, pr).to_rectangular();
    let e = Spherical::new(el, eb, er).to_rectangular();
    p.sub(e).to_spherical()
}

/// Phase angle (Sun-target-Earth) via the law of cosines, radians.
pub fn phase_angle(r_sun_target: f64, r_sun_earth: f64, r_earth_target: f64) -> f64 {
    let cos_phi = (r_sun_target * r_sun_target + r_earth_target * r_earth_target
        - r_sun_earth * r_sun_earth)
        / (2.0 * r_sun_target * r_earth_target);
    cos_phi.clamp(-1.0, 1.0).acos()
}

/// `(H, G)` visual-magnitude parameters (spec §4.9).
pub fn hg_parameters(planet: PlanetId) -> (f64, f64) {
    use PlanetId::*;
    match planet {
        Mercury => (-0.42, 0.18),
        Venus => (-4.40, 0.09),
        Earth => (-3.86, 0.20),
        Mars => (-1.52, 0.15),
        Jupiter => (-9.40, 0.50),
        Saturn => (-8.88, 0.50),
        Uranus => (-7.19, 0.50),
        Neptune => (-6.87, 0.50),
        Pluto => (-1.00, 0.30),
        Sun => (-26.74, 0.0),
    }
}

/// Visual magnitude (spec §4.9): `H + 5*log10(r*delta) - 2.5*log10((1-G)*cos(phi/2) + G*cos(phi))`.
pub fn magnitude(planet: PlanetId, r_sun_target: f64, delta_earth_target: f64, phi: f64) -> f64 {
    let (h, g) = hg_parameters(planet);
    let phase_term = (1.0 - g) * (phi / 2.0).cos() + g * phi.cos();
    h + 5.0 * (r_sun_target * delta_earth_target).log10() - 2.5 * phase_term.log10()
}

/// `true` if `planet`'s geocentric ecliptic longitude is decreasing
/// (retrograde) at `t_centuries`, via a forward-difference numerical
/// derivative with `dt = 1e-4` centuries (spec §4.9).
pub fn is_retrograde(planet: PlanetId, jd2000: f64, t_centuries: f64, n_terms: i32) -> bool {
    const DT: f64 = 1e-4;
    let lon0 = geocentric(planet, jd2000, t_centuries, n_terms).lon;
    let lon1 = geocentric(planet, jd2000 + DT * crate::constants::JULIAN_CENTURY_DAYS, t_centuries + DT, n_terms).lon;
    normalize_signed(lon1 - lon0) < 0.0
}

/// Light-time from target to Earth, days: `distance_au * AU_KM / c / 86400`.
pub fn light_time_days(distance_au: f64) -> f64 {
    distance_au * AU_KM / SPEED_OF_LIGHT_KM_S / crate::constants::SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn jupiter_distance_is_plausible() {
        let (_, _, r) = heliocentric_lbr(PlanetId::Jupiter, 0.0, 0.0, -1);
        assert!((4.5..5.5).contains(&r), "r={r}");
    }

    #[test]
    fn pluto_distance_is_plausible() {
        let (_, _, r) = heliocentric_lbr(PlanetId::Pluto, 0.0, 0.0, -1);
        assert!((20.0..60.0).contains(&r), "r={r}");
    }

    #[test]
    fn phase_angle_full_illumination_is_zero() {
        // Sun-target-Earth colinear with target beyond Earth: phi ~ 0.
        let phi = phase_angle(2.0, 1.0, 1.0);
        assert_relative_eq!(phi, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn light_time_sun_to_earth_is_about_8_minutes() {
        let days = light_time_days(1.0);
        let minutes = days * 24.0 * 60.0;
        assert!((7.5..8.5).contains(&minutes), "minutes={minutes}");
    }

    #[test]
    fn magnitude_is_finite_for_venus() {
        let m = magnitude(PlanetId::Venus, 0.72, 0.3, 0.5);
        assert!(m.is_finite());
    }
}
