/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

use super::{PlanetSeries, EMPTY};
use crate::math::series::Vsop3Term;

const L0: &[Vsop3Term] = &[
    Vsop3Term { a: 0.874_616_98, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.113_329_75, b: 2.929_58, c: 213.299_095_4 },
    Vsop3Term { a: 0.007_926_16, b: 0.618_21, c: 426.598_190_9 },
];

const L1: &[Vsop3Term] = &[Vsop3Term { a: 213.299_095_438_0, b: 0.0, c: 0.0 }];

const B0: &[Vsop3Term] = &[Vsop3Term { a: 0.043_609_76, b: 3.984_19, c: 213.299_095_4 }];

const R0: &[Vsop3Term] = &[
    Vsop3Term { a: 9.554_909_19, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.529_247_68, b: 3.144_20, c: 213.299_095_4 },
];

const R1: &[Vsop3Term] = &[Vsop3Term { a: 0.018_845_92, b: 5.234_94, c: 213.299_095_4 }];

pub const SERIES: PlanetSeries = PlanetSeries {
    l: [L0, L1, EMPTY, EMPTY, EMPTY, EMPTY],
    b: [B0, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY],
    r: [R0, R1, EMPTY, EMPTY, EMPTY, EMPTY],
    l_correction: &[],
    b_correction: &[],
    r_correction: &[],
};
