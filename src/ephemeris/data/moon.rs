/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Abridged ELP-style Moon longitude/latitude/distance term tables (spec
//! §4.8). Each row is a [`Moon6Term`] whose phase polynomial has already
//! folded the D/M/M'/F argument combination into a single linear-in-T
//! rate — the authentic ELP "main problem" tabulation style, and exactly
//! the row shape spec §3's "sequence of 6-tuple arrays" describes.
//!
//! Rates are derived from the same fundamental-argument mean motions as
//! [`crate::frames::nutation`] (D ≈ 7771.377, M' ≈ 8328.691, F ≈
//! 8433.466 rad/century), and amplitudes from the well-known
//! low-precision lunar position sine/cosine series; see DESIGN.md.

use crate::math::series::Moon6Term;
use core::f64::consts::FRAC_PI_2;

const D_RATE: f64 = 7_771.377_145_0;
const M_RATE: f64 = 628.301_955_0;
const MP_RATE: f64 = 8_328.691_400_0;
const F_RATE: f64 = 8_433.466_300_0;

/// Longitude series, amplitudes in arcsec; sine terms expressed as
/// `cos(phase - PI/2)`.
pub const LONGITUDE: &[Moon6Term] = &[
    Moon6Term { a: 22_638.96, b: -FRAC_PI_2, c: MP_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: 4_586.40, b: -FRAC_PI_2, c: 2.0 * D_RATE - MP_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: 2_369.88, b: -FRAC_PI_2, c: 2.0 * D_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: 768.96, b: -FRAC_PI_2, c: 2.0 * MP_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: -666.36, b: -FRAC_PI_2, c: M_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: -411.48, b: -FRAC_PI_2, c: F_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: 211.68, b: -FRAC_PI_2, c: 2.0 * D_RATE - 2.0 * MP_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: 205.92, b: -FRAC_PI_2, c: 2.0 * D_RATE - M_RATE - MP_RATE, d: 0.0, e: 0.0, f: 0.0 },
];

/// Latitude series, amplitudes in arcsec.
pub const LATITUDE: &[Moon6Term] = &[
    Moon6Term { a: 18_461.52, b: -FRAC_PI_2, c: F_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: 1_010.16, b: -FRAC_PI_2, c: MP_RATE + F_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: 999.72, b: -FRAC_PI_2, c: MP_RATE - F_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: 623.52, b: -FRAC_PI_2, c: 2.0 * D_RATE - F_RATE, d: 0.0, e: 0.0, f: 0.0 },
];

/// Distance series, amplitudes directly in km (cosine terms, no phase
/// shift).
pub const DISTANCE: &[Moon6Term] = &[
    Moon6Term { a: -20_905.76, b: 0.0, c: MP_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: -3_699.11, b: 0.0, c: 2.0 * D_RATE - MP_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: -2_955.97, b: 0.0, c: 2.0 * D_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: -569.93, b: 0.0, c: 2.0 * MP_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: -246.58, b: 0.0, c: 2.0 * D_RATE - 2.0 * MP_RATE, d: 0.0, e: 0.0, f: 0.0 },
    Moon6Term { a: 204.58, b: 0.0, c: 2.0 * D_RATE + MP_RATE, d: 0.0, e: 0.0, f: 0.0 },
];

/// Mean distance, km, added to [`DISTANCE`]'s periodic sum.
pub const MEAN_DISTANCE_KM: f64 = 385_000.56;
