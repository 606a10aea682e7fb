/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Angle normalisation and spherical/rectangular coordinate conversion.
//! Grounded on the teacher's `math::angles` (`between_0_360`/`between_pm_x`
//! degree-domain helpers), generalised to radians and to the spherical
//! triple the spec's ephemeris layer passes around everywhere.

use core::f64::consts::{PI, TAU};

use super::Vector3;

/// Normalises an angle (radians) to `[0, 2*PI)`.
#[inline]
pub fn normalize_positive(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    if r == TAU {
        0.0
    } else {
        r
    }
}

/// Normalises an angle (radians) to `(-PI, PI]`.
#[inline]
pub fn normalize_signed(a: f64) -> f64 {
    let mut r = normalize_positive(a);
    if r > PI {
        r -= TAU;
    }
    r
}

/// A spherical coordinate `(lon, lat, radius)`: `lon` normalised to
/// `[0, 2*PI)`, `lat` in `(-PI/2, PI/2]`, `radius > 0`. Units of `radius`
/// are context-dependent (AU for Sun/planets, km for the Moon) per spec §3.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spherical {
    pub lon: f64,
    pub lat: f64,
    pub radius: f64,
}

impl Spherical {
    pub fn new(lon: f64, lat: f64, radius: f64) -> Self {
        Self {
            lon: normalize_positive(lon),
            lat,
            radius,
        }
    }

    /// `sph_to_rect`: `(r cos(lat) cos(lon), r cos(lat) sin(lon), r sin(lat))`.
    pub fn to_rectangular(self) -> Rectangular {
        let (sin_lon, cos_lon) = self.lon.sin_cos();
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        Rectangular {
            x: self.radius * cos_lat * cos_lon,
            y: self.radius * cos_lat * sin_lon,
            z: self.radius * sin_lat,
        }
    }

    /// Rotates the sphere about the x-axis by `eps` (spec §4.1), e.g. for
    /// ecliptic<->equatorial conversion with `eps = +-obliquity`.
    pub fn rotate(self, eps: f64) -> Spherical {
        let (sin_eps, cos_eps) = eps.sin_cos();
        let (sin_lon, cos_lon) = self.lon.sin_cos();
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let tan_lat = self.lat.tan();

        let lon_p = (sin_lon * cos_eps - tan_lat * sin_eps).atan2(cos_lon);
        let lat_p = (cos_eps * sin_lat + sin_eps * cos_lat * sin_lon).asin();

        Spherical::new(lon_p, lat_p, self.radius)
    }

    /// Angular separation to another point on the sphere. Uses the
    /// small-angle approximation when both coordinates are within
    /// `1e-3` rad of each other (spec §4.1), falling back to the full
    /// spherical law of cosines otherwise.
    pub fn angular_separation(self, other: Spherical) -> f64 {
        let d_lon = normalize_signed(self.lon - other.lon);
        let d_lat = self.lat - other.lat;
        if d_lon.abs() < 1e-3 && d_lat.abs() < 1e-3 {
            (d_lon * d_lon * self.lat.cos() * other.lat.cos() + d_lat * d_lat).sqrt()
        } else {
            let cos_d =
                self.lat.sin() * other.lat.sin() + self.lat.cos() * other.lat.cos() * d_lon.cos();
            cos_d.clamp(-1.0, 1.0).acos()
        }
    }
}

/// An unconstrained rectangular coordinate triple.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Rectangular {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rectangular {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// `rect_to_sph`: inverts [`Spherical::to_rectangular`].
    pub fn to_spherical(self) -> Spherical {
        let r = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        let lat = (self.z / r).asin();
        let lon = normalize_positive(self.y.atan2(self.x));
        Spherical { lon, lat, radius: r }
    }

    pub fn to_vector3(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn from_vector3(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    pub fn sub(self, other: Rectangular) -> Rectangular {
        Rectangular::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f64::consts::FRAC_PI_2;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(TAU)]
    #[case(-0.1)]
    #[case(100.0)]
    #[case(-100.0)]
    fn normalize_positive_in_range(#[case] a: f64) {
        let n = normalize_positive(a);
        assert!((0.0..TAU).contains(&n), "{n} not in [0, 2pi)");
    }

    #[rstest]
    #[case(0.0)]
    #[case(PI)]
    #[case(-PI)]
    #[case(3.0 * PI)]
    fn normalize_signed_in_range(#[case] a: f64) {
        let n = normalize_signed(a);
        assert!(n > -PI && n <= PI + 1e-12, "{n} not in (-pi, pi]");
    }

    #[test]
    fn sph_rect_roundtrip() {
        let s = Spherical::new(1.234, 0.4, 2.5);
        let back = s.to_rectangular().to_spherical();
        assert_relative_eq!(s.lon, back.lon, epsilon = 1e-12);
        assert_relative_eq!(s.lat, back.lat, epsilon = 1e-12);
        assert_relative_eq!(s.radius, back.radius, epsilon = 1e-12);
    }

    #[test]
    fn rotate_by_zero_is_identity() {
        let s = Spherical::new(0.7, 0.2, 1.0);
        let r = s.rotate(0.0);
        assert_relative_eq!(s.lon, r.lon, epsilon = 1e-9);
        assert_relative_eq!(s.lat, r.lat, epsilon = 1e-9);
    }

    #[test]
    fn angular_separation_same_point_is_zero() {
        let s = Spherical::new(1.1, 0.3, 1.0);
        assert_relative_eq!(s.angular_separation(s), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn angular_separation_poles() {
        let north = Spherical::new(0.0, FRAC_PI_2, 1.0);
        let south = Spherical::new(0.0, -FRAC_PI_2 + 1e-9, 1.0);
        assert_relative_eq!(north.angular_separation(south), PI, epsilon = 1e-6);
    }
}
