/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! L2 frame substrate: nutation (IAU2000B truncated) and precession
//! (IAU1976/IAU2000/P03), built on the fundamental-argument polynomials and
//! series evaluators from [`crate::math`].

pub mod nutation;
pub mod precession;

pub use nutation::{nutation_fast, nutation_iau2000b};
pub use precession::{ecliptic_to_date, ecliptic_to_j2000, equatorial_to_date, equatorial_to_j2000, PrecessionModel, PrecessionParam};
