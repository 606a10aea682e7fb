/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

use super::{PlanetSeries, EMPTY};
use crate::math::series::Vsop3Term;

const L0: &[Vsop3Term] = &[
    Vsop3Term { a: 5.311_861_65, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.003_212_94, b: 4.366_49, c: 38.133_035_6 },
];

const L1: &[Vsop3Term] = &[Vsop3Term { a: 38.133_035_637_8, b: 0.0, c: 0.0 }];

const B0: &[Vsop3Term] = &[Vsop3Term { a: 0.001_154_24, b: 1.010_28, c: 38.133_035_6 }];

const R0: &[Vsop3Term] = &[
    Vsop3Term { a: 30.102_096_46, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.003_340_39, b: 4.339_09, c: 38.133_035_6 },
];

const R1: &[Vsop3Term] = &[Vsop3Term { a: 0.000_016_99, b: 4.551_3, c: 38.133_035_6 }];

pub const SERIES: PlanetSeries = PlanetSeries {
    l: [L0, L1, EMPTY, EMPTY, EMPTY, EMPTY],
    b: [B0, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY],
    r: [R0, R1, EMPTY, EMPTY, EMPTY, EMPTY],
    l_correction: &[],
    b_correction: &[],
    r_correction: &[],
};
