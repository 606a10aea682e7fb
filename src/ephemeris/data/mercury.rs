/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

use super::{PlanetSeries, EMPTY};
use crate::math::series::Vsop3Term;

const L0: &[Vsop3Term] = &[
    Vsop3Term { a: 4.402_608_842, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.407_347_30, b: 1.101_594_5, c: 26_087.903_141_6 },
    Vsop3Term { a: 0.050_303_49, b: 3.969_338_5, c: 52_175.806_283_2 },
    Vsop3Term { a: 0.004_932_88, b: 4.964_3, c: 78_263.709_4 },
];

const L1: &[Vsop3Term] = &[
    Vsop3Term { a: 26_087.903_141_574_2, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.010_612_32, b: 2.796_4, c: 26_087.903_141_6 },
];

const B0: &[Vsop3Term] = &[
    Vsop3Term { a: 0.113_756_31, b: 1.208_277_3, c: 26_087.903_141_6 },
    Vsop3Term { a: 0.009_198_49, b: 1.935_93, c: 52_175.806_283_2 },
];

const B1: &[Vsop3Term] = &[Vsop3Term { a: 0.003_013_21, b: 3.010_93, c: 26_087.903_141_6 }];

const R0: &[Vsop3Term] = &[
    Vsop3Term { a: 0.395_280_39, b: 0.0, c: 0.0 },
    Vsop3Term { a: 0.077_576_15, b: 2.029_78, c: 26_087.903_141_6 },
];

const R1: &[Vsop3Term] = &[Vsop3Term { a: 0.008_105_90, b: 0.253_31, c: 26_087.903_141_6 }];

pub const SERIES: PlanetSeries = PlanetSeries {
    l: [L0, L1, EMPTY, EMPTY, EMPTY, EMPTY],
    b: [B0, B1, EMPTY, EMPTY, EMPTY, EMPTY],
    r: [R0, R1, EMPTY, EMPTY, EMPTY, EMPTY],
    l_correction: &[],
    b_correction: &[],
    r_correction: &[],
};
