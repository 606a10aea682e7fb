/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

use super::{PlanetSeries, EMPTY};
use crate::math::series::Vsop3Term;

const L0: &[Vsop3Term] = &[
    Vsop3Term { a: 0.599_546_90, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.169_144_30, b: 3.910_87, c: 529.690_965_1 },
    Vsop3Term { a: 0.008_166_89, b: 3.147_15, c: 1_059.381_930_2 },
];

const L1: &[Vsop3Term] = &[Vsop3Term { a: 529.690_965_094_6, b: 0.0, c: 0.0 }];

const B0: &[Vsop3Term] = &[Vsop3Term { a: 0.020_879_20, b: 3.343_4, c: 529.690_965_1 }];

const R0: &[Vsop3Term] = &[
    Vsop3Term { a: 5.204_267_18, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.253_155_51, b: 3.381_59, c: 529.690_965_1 },
];

const R1: &[Vsop3Term] = &[Vsop3Term { a: 0.006_106_67, b: 3.060_27, c: 529.690_965_1 }];

pub const SERIES: PlanetSeries = PlanetSeries {
    l: [L0, L1, EMPTY, EMPTY, EMPTY, EMPTY],
    b: [B0, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY],
    r: [R0, R1, EMPTY, EMPTY, EMPTY, EMPTY],
    l_correction: &[],
    b_correction: &[],
    r_correction: &[],
};
