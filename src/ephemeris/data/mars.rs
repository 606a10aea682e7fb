/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

use super::{PlanetSeries, EMPTY};
use crate::math::series::Vsop3Term;

const L0: &[Vsop3Term] = &[
    Vsop3Term { a: 6.203_394_94, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.185_265_25, b: 0.924_1, c: 3_340.612_426_7 },
    Vsop3Term { a: 0.013_157_50, b: 0.749_0, c: 6_681.224_853_4 },
    Vsop3Term { a: 0.000_662_06, b: 0.435_1, c: 10_021.837_280_1 },
];

const L1: &[Vsop3Term] = &[
    Vsop3Term { a: 3_340.612_426_700_0, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.001_877_84, b: 4.409_63, c: 3_340.612_426_7 },
];

const B0: &[Vsop3Term] = &[Vsop3Term { a: 0.032_481_84, b: 3.790_33, c: 3_340.612_426_7 }];

const R0: &[Vsop3Term] = &[
    Vsop3Term { a: 1.530_439_61, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.141_902_19, b: 3.475_71, c: 3_340.612_426_7 },
];

const R1: &[Vsop3Term] = &[Vsop3Term { a: 0.001_813_99, b: 5.193_4, c: 3_340.612_426_7 }];

pub const SERIES: PlanetSeries = PlanetSeries {
    l: [L0, L1, EMPTY, EMPTY, EMPTY, EMPTY],
    b: [B0, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY],
    r: [R0, R1, EMPTY, EMPTY, EMPTY, EMPTY],
    l_correction: &[],
    b_correction: &[],
    r_correction: &[],
};
