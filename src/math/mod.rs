/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! L1/L2 math substrate: angle normalisation, spherical/rectangular
//! coordinate conversion, sphere rotation, and the series evaluators that
//! every ephemeris routine in L3 is built from.

pub mod angles;
pub mod series;

/// `nalgebra`'s `Vector3` with a 64-bit floating point representation,
/// used for rotation and shadow-geometry vector algebra. Kept as a thin
/// re-export the way the teacher's `math::mod` does, so rotation code reads
/// identically; the hot per-term series loops stay on plain `f64`s and the
/// `Spherical`/`Rectangular` value types below, per spec §9's note to
/// prefer allocation-free tuple types on that path.
pub type Vector3 = nalgebra::Vector3<f64>;
pub type Matrix3 = nalgebra::Matrix3<f64>;

pub use angles::{Rectangular, Spherical};
