/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! L1 time substrate: Julian-day arithmetic and Delta-T (TT - UT1).

pub mod delta_t;
pub mod julian;

pub use delta_t::{delta_t_seconds, td_to_ut, ut_to_td};
pub use julian::{civil_to_jd, day_of_week, jd_to_civil, jd_to_julian_century, nth_weekday_of_month};
