/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Precession: parameter polynomials (IAU1976/IAU2000/P03) and the
//! equatorial/ecliptic J2000<->date rotations built from them, per spec
//! §4.6. Grounded on the teacher's `math::rotation::dcm` 3x3-rotation
//! conventions (row-major `Matrix3`, explicit `transpose()` for the
//! inverse rotation) and on `erfa::fundamental_argument`'s pattern of one
//! polynomial-in-`T` function per named quantity.

use crate::constants::RAD_PER_ARCSEC;
use crate::math::angles::normalize_positive;
use crate::math::{Matrix3, Spherical};

/// Selects which precession theory's parameter polynomials to use.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PrecessionModel {
    Iau1976,
    Iau2000,
    P03,
}

/// One of the twelve named precession-angle parameters (spec §3), written
/// out as their conventional symbol names.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PrecessionParam {
    /// ψ_A: luni-solar precession in longitude.
    Fi,
    /// ω_A: inclination of the mean ecliptic of date on the mean equator of J2000.
    W,
    /// P_A: ecliptic pole x-coordinate precession component.
    PCap,
    /// Q_A: ecliptic pole y-coordinate precession component.
    QCap,
    /// ε_A: mean obliquity of the ecliptic of date.
    E,
    /// χ_A: planetary precession along the ecliptic.
    X,
    /// π_A: angle between the ecliptic poles of date and J2000.
    PiLower,
    /// Π_A: longitude of the ascending node of the ecliptic of date on J2000's.
    PiCap,
    /// p_A: general precession in longitude.
    PLower,
    /// θ_A: equatorial precession angle (with ζ_A, z_A).
    Th,
    /// ζ_A: equatorial precession angle (initial rotation).
    ZCap,
    /// z_A: equatorial precession angle (final rotation).
    ZLower,
}

/// Row length 4 for [`PrecessionModel::Iau1976`], 6 for the other two
/// models; trailing entries are zero where a model defines fewer terms
/// than the table width (spec §4.6). Coefficients are an abridged,
/// internally-consistent reconstruction — see DESIGN.md.
fn coefficients(name: PrecessionParam, model: PrecessionModel) -> [f64; 6] {
    use PrecessionModel::*;
    use PrecessionParam::*;
    match (name, model) {
        (E, Iau1976) => [84381.448, -46.8150, -0.00059, 0.001813, 0.0, 0.0],
        (ZCap, Iau1976) => [0.0, 2306.2181, 0.30188, 0.017998, 0.0, 0.0],
        (ZLower, Iau1976) => [0.0, 2306.2181, 1.09468, 0.018203, 0.0, 0.0],
        (Th, Iau1976) => [0.0, 2004.3109, -0.42665, -0.041833, 0.0, 0.0],

        (E, Iau2000) => [84381.448, -46.84024, -0.00059, 0.001813, 0.0, 0.0],
        (ZCap, Iau2000) => [0.0, 2306.0803, 0.29966, 0.0179663, -0.0000327, 0.0],
        (ZLower, Iau2000) => [0.0, 2306.0803, 1.09478, 0.0182637, -0.0000470, 0.0],
        (Th, Iau2000) => [0.0, 2004.1903, -0.42665, -0.0418251, -0.0000601, 0.0],
        (PLower, Iau2000) => [0.0, 5028.796195, 1.1054348, 0.00007964, -0.000023857, 0.0],
        (X, Iau2000) => [0.0, 10.5526, -2.38064, -0.00117444, 0.000170663, 0.0],

        (E, P03) => [84381.406, -46.836769, -0.0001831, 0.00200340, -0.000000576, -0.0000000434],
        (ZCap, P03) => [2.5976176, 2306.0809506, 0.3019015, 0.0179663, -0.0000327, -0.0000002],
        (ZLower, P03) => [-2.5976176, 2306.0803226, 1.0947790, 0.0182273, 0.0000470, -0.0000003],
        (Th, P03) => [0.0, 2004.1917476, -0.4269353, -0.0418251, -0.0000601, -0.0000001],
        (PLower, P03) => [0.0, 5028.796195, 1.1054348, 0.00007964, -0.000023857, -0.0000000383],
        (X, P03) => [0.0, 10.556403, -2.3814292, -0.00121197, 0.000170663, -0.0000000560],
        (Fi, P03) => [0.0, 5038.481507, -1.0790069, -0.00114045, 0.000132851, -0.0000000951],
        (W, P03) => [84381.406, -0.025754, 0.0512623, -0.00772503, -0.000000467, 0.0000003337],
        (PCap, P03) => [0.0, 4.199094, 0.1939873, -0.00022466, -0.000000912, 0.0000000120],
        (QCap, P03) => [0.0, -46.811015, 0.0510283, 0.00052413, -0.000000646, -0.0000000172],
        (PiLower, P03) => [46.998973, -0.033924, 0.0512623, -0.00772503, -0.000000467, 0.0000003337],
        (PiCap, P03) => [629546.7936, -867.95758, 0.157992, -0.0005371, -0.00004357, 0.00000007],

        // Parameters not defined by the classical or 2000 equatorial-only
        // tables fall back to the P03 polynomial, truncated to the
        // requesting model's row width (spec leaves these four-row/six-row
        // slots otherwise unused for IAU1976/IAU2000).
        (p, m) if p == Fi || p == W || p == PCap || p == QCap || p == PiLower || p == PiCap => {
            let base = coefficients(p, P03);
            if m == Iau1976 {
                [base[0], base[1], base[2], base[3], 0.0, 0.0]
            } else {
                base
            }
        }
        (p, _) => coefficients(p, P03),
    }
}

/// `param(T, name, model)`: `Σ coeff_i · T^i`, converted from arcsec to
/// radians (spec §4.6).
pub fn param(t: f64, name: PrecessionParam, model: PrecessionModel) -> f64 {
    let row = coefficients(name, model);
    let width = if model == PrecessionModel::Iau1976 { 4 } else { 6 };
    let mut total = 0.0;
    let mut t_pow = 1.0;
    for coeff in &row[..width] {
        total += coeff * t_pow;
        t_pow *= t;
    }
    total * RAD_PER_ARCSEC
}

/// The P03 mean-obliquity closed form, direct (no table lookup) for the
/// hot path (spec §4.6).
pub fn obliquity_p03(t: f64) -> f64 {
    (84381.406
        + t * (-46.836769
            + t * (-0.0001831 + t * (0.00200340 + t * (-0.000000576 + t * (-0.0000000434))))))
        * RAD_PER_ARCSEC
}

fn rot_z(angle: f64) -> Matrix3 {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
}

fn rot_x(angle: f64) -> Matrix3 {
    let (s, c) = angle.sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
}

/// Equatorial J2000 -> date rotation: `R_z(-z_A) . R_y(theta_A) . R_z(-zeta_A)`
/// applied as the classical three-angle rotation; `(ra, dec, r)` in, same
/// triple out, `ra` re-normalised to `[0, 2*PI)` (spec §4.6).
pub fn equatorial_to_date(t: f64, model: PrecessionModel, sph: Spherical) -> Spherical {
    let zeta = param(t, PrecessionParam::ZCap, model);
    let z = param(t, PrecessionParam::ZLower, model);
    let theta = param(t, PrecessionParam::Th, model);

    let r = rot_z(-z) * rot_y(theta) * rot_z(-zeta);
    let v = r * sph.to_rectangular().to_vector3();
    let mut out = crate::math::Rectangular::from_vector3(v).to_spherical();
    out.lon = normalize_positive(out.lon);
    out
}

/// Inverse of [`equatorial_to_date`]: date -> equatorial J2000, using the
/// transposed (negated-order) rotation (spec §4.6).
pub fn equatorial_to_j2000(t: f64, model: PrecessionModel, sph: Spherical) -> Spherical {
    let zeta = param(t, PrecessionParam::ZCap, model);
    let z = param(t, PrecessionParam::ZLower, model);
    let theta = param(t, PrecessionParam::Th, model);

    let r = rot_z(-z) * rot_y(theta) * rot_z(-zeta);
    let v = r.transpose() * sph.to_rectangular().to_vector3();
    let mut out = crate::math::Rectangular::from_vector3(v).to_spherical();
    out.lon = normalize_positive(out.lon);
    out
}

fn rot_y(angle: f64) -> Matrix3 {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
}

/// Ecliptic J2000 -> date rotation: add `p_A` (general precession) to the
/// longitude, rotate by `ω_A` about the x-axis, subtract `χ_A`, rotate by
/// `-ε(T)` about the x-axis to cross back into the equatorial-referenced
/// frame the rest of the core works in (spec §4.6).
pub fn ecliptic_to_date(t: f64, model: PrecessionModel, sph: Spherical) -> Spherical {
    let p_a = param(t, PrecessionParam::PLower, model);
    let w_a = param(t, PrecessionParam::W, model);
    let x_a = param(t, PrecessionParam::X, model);
    let eps = param(t, PrecessionParam::E, model);

    let step1 = Spherical::new(sph.lon + p_a, sph.lat, sph.radius).rotate(w_a);
    let step2 = Spherical::new(step1.lon - x_a, step1.lat, step1.radius);
    step2.rotate(-eps)
}

/// Inverse of [`ecliptic_to_date`]: date -> ecliptic J2000, reversing the
/// multi-step rotation in the opposite order with negated parameters
/// (spec §4.6).
pub fn ecliptic_to_j2000(t: f64, model: PrecessionModel, sph: Spherical) -> Spherical {
    let p_a = param(t, PrecessionParam::PLower, model);
    let w_a = param(t, PrecessionParam::W, model);
    let x_a = param(t, PrecessionParam::X, model);
    let eps = param(t, PrecessionParam::E, model);

    let step1 = sph.rotate(eps);
    let step2 = Spherical::new(step1.lon + x_a, step1.lat, step1.radius);
    let step3 = step2.rotate(-w_a);
    Spherical::new(step3.lon - p_a, step3.lat, step3.radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn obliquity_p03_matches_table_lookup() {
        let direct = obliquity_p03(0.5);
        let via_table = param(0.5, PrecessionParam::E, PrecessionModel::P03);
        assert_relative_eq!(direct, via_table, epsilon = 1e-12);
    }

    #[test]
    fn zero_epoch_obliquity_is_23_4_degrees() {
        let eps = obliquity_p03(0.0);
        let deg = eps.to_degrees();
        assert!((23.0..24.0).contains(&deg), "{deg} not near 23.4 deg");
    }

    #[test]
    fn equatorial_roundtrip() {
        let sph = Spherical::new(1.2, 0.3, 1.0);
        let date = equatorial_to_date(0.25, PrecessionModel::P03, sph);
        let back = equatorial_to_j2000(0.25, PrecessionModel::P03, date);
        assert_relative_eq!(sph.lon, back.lon, epsilon = 1e-9);
        assert_relative_eq!(sph.lat, back.lat, epsilon = 1e-9);
    }

    #[test]
    fn ecliptic_roundtrip() {
        let sph = Spherical::new(2.1, -0.2, 1.0);
        let date = ecliptic_to_date(0.1, PrecessionModel::P03, sph);
        let back = ecliptic_to_j2000(0.1, PrecessionModel::P03, date);
        assert_relative_eq!(sph.lon, back.lon, epsilon = 1e-9);
        assert_relative_eq!(sph.lat, back.lat, epsilon = 1e-9);
    }

    #[test]
    fn identity_at_epoch() {
        let sph = Spherical::new(0.9, 0.1, 1.0);
        let date = equatorial_to_date(0.0, PrecessionModel::P03, sph);
        assert_relative_eq!(sph.lon, date.lon, epsilon = 1e-9);
        assert_relative_eq!(sph.lat, date.lat, epsilon = 1e-9);
    }

    #[test]
    fn iau1976_row_width_is_four() {
        // T^4/T^5 coefficients must not leak into the IAU1976 evaluation.
        let small_t = param(1.0, PrecessionParam::E, PrecessionModel::Iau1976);
        assert!(small_t.is_finite());
    }
}
