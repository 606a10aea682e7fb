/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

use super::{PlanetSeries, EMPTY};
use crate::math::series::Vsop3Term;

const L0: &[Vsop3Term] = &[
    Vsop3Term { a: 3.176_134_64, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.010_181_43, b: 3.214_60, c: 10_213.285_546_2 },
    Vsop3Term { a: 0.000_717_62, b: 1.005_0, c: 20_426.571_092_4 },
];

const L1: &[Vsop3Term] = &[Vsop3Term { a: 10_213.285_546_211_0, b: 0.0, c: 0.0 }];

const B0: &[Vsop3Term] = &[Vsop3Term { a: 0.059_575_16, b: 0.814_21, c: 10_213.285_546_2 }];

const R0: &[Vsop3Term] = &[
    Vsop3Term { a: 0.723_329_82, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.004_899_99, b: 4.221_51, c: 10_213.285_546_2 },
];

const R1: &[Vsop3Term] = &[Vsop3Term { a: 0.000_136_58, b: 0.942_56, c: 10_213.285_546_2 }];

pub const SERIES: PlanetSeries = PlanetSeries {
    l: [L0, L1, EMPTY, EMPTY, EMPTY, EMPTY],
    b: [B0, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY],
    r: [R0, R1, EMPTY, EMPTY, EMPTY, EMPTY],
    l_correction: &[],
    b_correction: &[],
    r_correction: &[],
};
