/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! L2 series evaluators: the VSOP87-style 3-coefficient Poisson series, the
//! 6-coefficient Moon series, and the per-degree multi-series evaluator
//! that both the Sun/Earth, planet, and Moon ephemerides (L3) are built on.
//! Spec §4.4.

/// One VSOP87-style term `A * cos(B + C * t)`.
#[derive(Copy, Clone, Debug)]
pub struct Vsop3Term {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Evaluates `sum(A_i * cos(B_i + C_i * t))` over the first `n_terms` terms
/// of `series` (or all of them if `n_terms < 0`). `t` is in the same time
/// unit the table was fit against (Julian millennia for VSOP87 L/B/R).
pub fn vsop3_sum(series: &[Vsop3Term], t: f64, n_terms: i32) -> f64 {
    let n = if n_terms < 0 {
        series.len()
    } else {
        (n_terms as usize).min(series.len())
    };
    series[..n].iter().map(|term| term.a * (term.b + term.c * t).cos()).sum()
}

/// One Moon-series term `A * cos(B + C*T + D*t2 + E*t3 + F*t4)` where
/// `t2 = T^2/1e4`, `t3 = T^3/1e8`, `t4 = T^4/1e8` (spec §4.4).
#[derive(Copy, Clone, Debug)]
pub struct Moon6Term {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

/// Evaluates the Moon 6-coefficient series. `big_t` is in Julian centuries.
pub fn moon6_sum(series: &[Moon6Term], big_t: f64, n_terms: i32) -> f64 {
    let n = if n_terms < 0 {
        series.len()
    } else {
        (n_terms as usize).min(series.len())
    };
    let t2 = big_t * big_t / 1e4;
    let t3 = t2 * big_t / 1e4;
    let t4 = t3 * big_t / 1e4;
    // Note: t3 = T^3/1e8 and t4 = T^4/1e8 per spec; t2*big_t/1e4 = T^3/1e8
    // and t3*big_t/1e4 = T^4/1e8, so the incremental form above matches.
    series[..n]
        .iter()
        .map(|term| {
            term.a
                * (term.b + term.c * big_t + term.d * t2 + term.e * t3 + term.f * t4).cos()
        })
        .sum()
}

/// A per-planet multi-degree VSOP87 table: six series `L0..L5` (or
/// `B0..B5`, `R0..R5`) for one coordinate component.
pub type DegreeTable<'a> = [&'a [Vsop3Term]; 6];

/// The per-degree evaluator of spec §4.4: accumulates
/// `sum_i (sum(data[i], t, n_i) * t^i) / multiplier`, where
/// `n_0 = n_terms` and `n_i = max(3, round(n_terms * len(data[i]) / len(data[0])))`
/// for `i > 0` so higher-order series truncate proportionally to their
/// relative length. `t` is in Julian millennia.
pub fn degree_sum(data: &DegreeTable, t: f64, multiplier: f64, n_terms: i32) -> f64 {
    let len0 = data[0].len().max(1);
    let mut total = 0.0;
    let mut t_pow = 1.0;
    for (i, series) in data.iter().enumerate() {
        let n_i = if i == 0 {
            n_terms
        } else if n_terms < 0 {
            -1
        } else {
            let scaled = (n_terms as f64 * series.len() as f64 / len0 as f64).round() as i32;
            scaled.max(3)
        };
        total += vsop3_sum(series, t, n_i) * t_pow;
        t_pow *= t;
    }
    total / multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vsop3_sum_all_vs_partial() {
        let series = [
            Vsop3Term { a: 1.0, b: 0.0, c: 0.0 },
            Vsop3Term { a: 0.5, b: 1.0, c: 2.0 },
            Vsop3Term { a: 0.25, b: 0.3, c: 0.1 },
        ];
        let all = vsop3_sum(&series, 0.5, -1);
        let two = vsop3_sum(&series, 0.5, 2);
        assert_relative_eq!(all, two + 0.25 * (0.3 + 0.1 * 0.5f64).cos(), epsilon = 1e-12);
    }

    #[test]
    fn degree_sum_single_series_matches_vsop3() {
        let l0 = [Vsop3Term { a: 2.0, b: 0.1, c: 0.2 }];
        let empty: &[Vsop3Term] = &[];
        let data: DegreeTable = [&l0, empty, empty, empty, empty, empty];
        let got = degree_sum(&data, 0.3, 1.0, -1);
        assert_relative_eq!(got, vsop3_sum(&l0, 0.3, -1), epsilon = 1e-12);
    }
}
