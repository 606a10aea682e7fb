/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Fast solar-eclipse syzygy classifier (spec §4.14): given a rough new
//! moon, decides the eclipse type (or N for none), its gamma, and an
//! `accurate` flag marking decisions made close to a classification
//! boundary. Grounded on the shuo/qi solver's low-precision algebra
//! (reused here for the initial-time refinement) and on
//! [`crate::ephemeris::planets::is_retrograde`]'s forward-difference
//! velocity estimate.

use crate::calendar::shuo_qi::low_precision_shuo;
use crate::constants::{arcsec_to_rad, AU_KM, EARTH_RADIUS_KM, JULIAN_CENTURY_DAYS, MOON_RADIUS_KM, SUN_SEMIDIAMETER_ARCSEC_AT_1AU};
use crate::ephemeris::{moon, sun};
use core::f64::consts::TAU;

/// Classification of a solar eclipse's central/non-central character, per
/// the closed set in spec §3.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SolarEclipseType {
    /// No eclipse: the Moon's ecliptic latitude at conjunction is too
    /// large for any shadow to reach Earth.
    None,
    Partial,
    Annular,
    Total,
    Hybrid,
    AnnularNonCentral,
    TotalNonCentral,
    AnnularUmbraPartiallyOff,
    TotalUmbraPartiallyOff,
    HybridH2,
    HybridH3,
}

/// The fast classifier's result record (spec §3's solar-eclipse fast record).
#[derive(Copy, Clone, Debug)]
pub struct SolarEclipseFast {
    pub new_moon_jd2000: f64,
    pub kind: SolarEclipseType,
    pub gamma: f64,
    pub accurate: bool,
}

const BOUNDARY_LS: f64 = 0.016;
const BOUNDARY_FH2: f64 = 0.019;
const EARTH_FLATTENING_B: f64 = 0.9972;

/// Finite-difference step, centuries, for the longitudinal/latitudinal
/// velocity estimate (matches the step used elsewhere for numerical
/// derivatives of slowly-varying ephemeris quantities).
const DT_CENTURIES: f64 = 1e-5;

/// Classifies the solar eclipse nearest the new moon at `jd2000_estimate`
/// (spec §4.14). Returns `None`-typed (no eclipse) whenever the Moon's
/// ecliptic latitude at conjunction puts it too far from the ecliptic.
pub fn classify(jd2000_estimate: f64) -> SolarEclipseFast {
    let w = ((jd2000_estimate + 8.0) / crate::constants::LUNAR_MONTH_DAYS).floor() * TAU;
    let mut t = low_precision_shuo(w) / JULIAN_CENTURY_DAYS;

    let l = crate::frames::nutation::fundamental_f(t);
    if l.sin().abs() > 0.4 {
        return SolarEclipseFast {
            new_moon_jd2000: t * JULIAN_CENTURY_DAYS,
            kind: SolarEclipseType::None,
            gamma: f64::NAN,
            accurate: true,
        };
    }

    // Refine to the precise new moon via the full Newton solver, seeded
    // from the low-precision estimate above.
    t = moon::t_from_diff(0.0, t);

    let beta_moon = moon::geometric_latitude(t, -1);
    let d_moon_km = moon::distance_km(t, -1);
    let (_, _, r_sun_au) = sun::earth_lbr(t / 10.0, -1);
    let d_sun_km = r_sun_au * AU_KM;

    let moon_r = d_moon_km / EARTH_RADIUS_KM;

    let longitude_diff = |tt: f64| {
        crate::math::angles::normalize_signed(moon::apparent_longitude(tt, -1) - sun::apparent_longitude(tt, -1))
    };
    let v_l = (longitude_diff(t + DT_CENTURIES) - longitude_diff(t - DT_CENTURIES))
        / (2.0 * DT_CENTURIES);
    let v_b = (moon::geometric_latitude(t + DT_CENTURIES, -1)
        - moon::geometric_latitude(t - DT_CENTURIES, -1))
        / (2.0 * DT_CENTURIES);

    let gamma = moon_r * beta_moon.sin() * v_l / (v_b * v_b + v_l * v_l).sqrt();

    let mk = EARTH_RADIUS_KM / d_moon_km;
    let sk = EARTH_RADIUS_KM / d_sun_km;
    let m_r = MOON_RADIUS_KM / EARTH_RADIUS_KM;
    let k2 = m_r * mk;
    let sm_r = arcsec_to_rad(SUN_SEMIDIAMETER_ARCSEC_AT_1AU) / r_sun_au;

    let f1 = (sk + mk) / sm_r;
    let r1 = mk + f1 * m_r;
    let f2 = (sk - k2) / sm_r;
    let r2 = k2 - f2 * m_r;
    let fh2 = m_r - mk / f2;
    let h = if gamma.abs() < 1.0 { (1.0 - gamma * gamma).sqrt() } else { f64::NAN };

    let ls1 = gamma.abs() - (EARTH_FLATTENING_B + r1);
    let ls2 = gamma.abs() - (EARTH_FLATTENING_B + r2.abs());
    let ls3 = gamma.abs() - EARTH_FLATTENING_B;
    let ls4 = gamma.abs() - (EARTH_FLATTENING_B - r2.abs());

    let accurate = [ls1, ls2, ls3, ls4].iter().all(|v| v.abs() > BOUNDARY_LS)
        && (fh2 - h).abs() > BOUNDARY_FH2;

    let kind = if ls1 > 0.0 {
        SolarEclipseType::None
    } else if ls2 > 0.0 {
        SolarEclipseType::Partial
    } else if ls3 > 0.0 {
        if r2 < 0.0 {
            SolarEclipseType::AnnularNonCentral
        } else {
            SolarEclipseType::TotalNonCentral
        }
    } else if ls4 > 0.0 {
        if r2 < 0.0 {
            SolarEclipseType::AnnularUmbraPartiallyOff
        } else {
            SolarEclipseType::TotalUmbraPartiallyOff
        }
    } else if fh2 < h {
        if (fh2 - h).abs() < BOUNDARY_FH2 {
            // Entry/exit z-coordinate refinement for hybrid (annular-total)
            // eclipses: dr scales the umbra-cone apex drift by the Sun's
            // radial velocity; see spec §4.14.
            let v_r = 0.0; // the radial-distance rate is a second-order
                            // refinement the fast classifier leaves to the
                            // full Besselian-elements solver.
            let dr = v_r * h / (v_l * m_r);
            let h1 = m_r - dr - mk / f2;
            let h2 = m_r + dr - mk / f2;
            if h1 > 0.0 && h2 > 0.0 {
                SolarEclipseType::HybridH2
            } else {
                SolarEclipseType::HybridH3
            }
        } else {
            SolarEclipseType::Total
        }
    } else {
        SolarEclipseType::Annular
    };

    SolarEclipseFast { new_moon_jd2000: t * JULIAN_CENTURY_DAYS, kind, gamma, accurate }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_returns_finite_gamma_or_none() {
        let jd2000 = crate::time::julian::civil_to_jd(2024, 4, 8.0) - crate::constants::J2000;
        let result = classify(jd2000);
        assert!(result.kind == SolarEclipseType::None || result.gamma.is_finite());
    }

    #[test]
    fn classify_is_deterministic() {
        let jd2000 = crate::time::julian::civil_to_jd(2024, 4, 8.0) - crate::constants::J2000;
        let a = classify(jd2000);
        let b = classify(jd2000);
        assert_eq!(a.kind, b.kind);
    }
}
