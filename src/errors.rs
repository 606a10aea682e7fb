/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Error kinds for the core, per spec §7. The core is total over finite
//! floating-point inputs: these variants exist for the few cases where a
//! caller can feed a value outside the contract the core assumes (an
//! out-of-range year passed through a caller-enforced policy), never for
//! "recoverable" numerical failure, which does not occur in practice.

use snafu::prelude::*;

/// Errors from the time/frame substrate (L1 Julian-day ops, ΔT).
#[derive(Copy, Clone, Debug, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum TimeError {
    /// Raised only for callers that policy-restrict inputs; the core itself
    /// does not enforce year limits (spec §7).
    #[snafu(display("year {year} is out of the caller-accepted range"))]
    OutOfRange { year: i64 },
    #[snafu(display("intermediate Julian-day arithmetic overflowed for year {year}"))]
    Overflow { year: i64 },
}

pub type TimeResult<T> = Result<T, TimeError>;

/// Errors from the shuo/qi solver and lunar-year layout (L4).
#[derive(Copy, Clone, Debug, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum CalendarError {
    #[snafu(display("{what} precondition violated at jd2000={jd2000}: {detail}"))]
    ContractViolation {
        what: &'static str,
        jd2000: f64,
        detail: &'static str,
    },
    #[snafu(display("year {year} has no ancient-regime era covering it"))]
    NoAncientEra { year: i32 },
}

pub type CalendarResult<T> = Result<T, CalendarError>;

/// Errors surfaced by the eclipse-geometry solvers.
#[derive(Copy, Clone, Debug, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum EclipseError {
    /// The lunar contact-time solver's quadratic had no real root for the
    /// requested shadow radius; the geometry simply does not produce that
    /// contact (e.g. a penumbral-only eclipse asked for a total contact).
    #[snafu(display("no real contact-time root for radius {radius} at extremum jd2000={jd2000}"))]
    NoContact { radius: f64, jd2000: f64 },
}

pub type EclipseResult<T> = Result<T, EclipseError>;
