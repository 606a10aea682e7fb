/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

use super::{PlanetSeries, EMPTY};
use crate::math::series::Vsop3Term;

const L0: &[Vsop3Term] = &[
    Vsop3Term { a: 5.481_293_87, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.014_185_18, b: 4.187_09, c: 74.781_598_6 },
    Vsop3Term { a: 0.000_653_00, b: 0.852_95, c: 149.563_197_1 },
];

const L1: &[Vsop3Term] = &[Vsop3Term { a: 74.781_598_567_3, b: 0.0, c: 0.0 }];

const B0: &[Vsop3Term] = &[Vsop3Term { a: 0.001_340_78, b: 2.917_07, c: 74.781_598_6 }];

const R0: &[Vsop3Term] = &[
    Vsop3Term { a: 19.212_609_21, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.151_900_63, b: 3.141_18, c: 74.781_598_6 },
];

const R1: &[Vsop3Term] = &[Vsop3Term { a: 0.000_217_03, b: 4.382_3, c: 74.781_598_6 }];

pub const SERIES: PlanetSeries = PlanetSeries {
    l: [L0, L1, EMPTY, EMPTY, EMPTY, EMPTY],
    b: [B0, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY],
    r: [R0, R1, EMPTY, EMPTY, EMPTY, EMPTY],
    l_correction: &[],
    b_correction: &[],
    r_correction: &[],
};
