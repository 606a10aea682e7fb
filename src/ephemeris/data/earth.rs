/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Abridged VSOP87D-style Earth heliocentric L/B/R table, used both for
//! Earth's own position and (via `L + PI`) the Sun's geocentric longitude
//! (spec §4.7).

use super::{PlanetSeries, EMPTY};
use crate::math::series::Vsop3Term;

const L0: &[Vsop3Term] = &[
    Vsop3Term { a: 1.753_470_46, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.033_416_56, b: 4.669_256_8, c: 6283.075_85 },
    Vsop3Term { a: 0.000_348_94, b: 4.626_1, c: 12_566.151_7 },
    Vsop3Term { a: 0.000_034_97, b: 2.744_1, c: 5_753.384_9 },
    Vsop3Term { a: 0.000_034_18, b: 2.828_9, c: 3.523_1 },
    Vsop3Term { a: 0.000_031_36, b: 3.627_7, c: 77_713.771_5 },
    Vsop3Term { a: 0.000_026_76, b: 4.418_1, c: 7_860.419_4 },
    Vsop3Term { a: 0.000_023_43, b: 6.135_2, c: 3_930.209_7 },
];

const L1: &[Vsop3Term] = &[
    Vsop3Term { a: 6_283.075_849_91, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.000_206_95, b: 2.678_19, c: 6283.075_85 },
    Vsop3Term { a: 0.000_004_32, b: 2.635_9, c: 12_566.151_7 },
];

const L2: &[Vsop3Term] = &[
    Vsop3Term { a: 0.000_008_72, b: 1.522_1, c: 6283.075_85 },
    Vsop3Term { a: 0.000_000_29, b: 0.0, c: 0.0 },
];

const B0: &[Vsop3Term] = &[Vsop3Term { a: 0.000_002_79, b: 3.198_0, c: 84_334.662_0 }];

const B1: &[Vsop3Term] = &[Vsop3Term { a: 0.000_000_10, b: 2.701, c: 6283.075_85 }];

const R0: &[Vsop3Term] = &[
    Vsop3Term { a: 1.000_139_89, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.016_706_99, b: 3.098_463_5, c: 6283.075_85 },
    Vsop3Term { a: 0.000_139_56, b: 3.055_25, c: 12_566.151_7 },
    Vsop3Term { a: 0.000_030_84, b: 5.198_6, c: 77_713.771_5 },
];

const R1: &[Vsop3Term] = &[
    Vsop3Term { a: 0.000_103_34, b: 2.327_02, c: 6283.075_85 },
    Vsop3Term { a: 0.000_008_21, b: 4.630_0, c: 12_566.151_7 },
];

const R2: &[Vsop3Term] = &[Vsop3Term { a: 0.000_000_32, b: 5.849, c: 6283.075_85 }];

pub const SERIES: PlanetSeries = PlanetSeries {
    l: [L0, L1, L2, EMPTY, EMPTY, EMPTY],
    b: [B0, B1, EMPTY, EMPTY, EMPTY, EMPTY],
    r: [R0, R1, R2, EMPTY, EMPTY, EMPTY],
    l_correction: &[],
    b_correction: &[],
    r_correction: &[],
};
