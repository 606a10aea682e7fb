/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! L4 eclipse geometry: the fast solar-eclipse syzygy classifier and the
//! full lunar-eclipse contact-time solver (spec §4.14).

pub mod lunar;
pub mod solar;
