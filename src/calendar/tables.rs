/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Piecewise-fit *ping* (平) shuo/qi tables and the packed correction
//! strings, per spec §4.11/§6. Grounded on
//! `other_examples/.../lunar_phase_calculator.rs`'s three-regime
//! (HighPrecision/FlatPhase/FixedPhase) split, which this crate's
//! [`crate::calendar::shuo_qi`] implements on top of these tables.
//!
//! `KB_SHUO`/`KB_QI` are abridged: they carry the authentic alternating
//! `(start_jd, interval_days)` row shape §4.11 describes, reduced to a
//! handful of multi-century segments rather than the full per-era fit,
//! plus the trailing `jd_end` scalar spec §4.11/§6 requires — see
//! DESIGN.md.

/// Alternating `(start, interval)` pairs, JD (not JD2000), spanning the
/// classical shuo fit, terminated by a lone `jd_end` (1645-01-01, the
/// calendar-reform boundary past which the transition-era formula
/// takes over). `pc = 14` (spec §4.11).
pub const KB_SHUO: &[f64] = &[
    1457698.230_0,
    29.530_598_0,
    1546082.512_9,
    29.530_589_2,
    1640640.735_7,
    29.530_583_5,
    1683461.021_4,
    29.530_591_6,
    1752148.026_0,
    29.530_588_6,
    1807933.041_3,
    29.530_588_7,
    1883618.016_8,
    29.530_588_2,
    1907360.006_8,
    29.530_589_1,
    2298912.547_0,
    29.530_589_2,
    2_321_884.5,
];

/// Alternating `(start, interval)` pairs, JD, spanning the classical qi
/// fit, terminated by the same `jd_end` boundary as [`KB_SHUO`]. `pc = 7`
/// (spec §4.11).
pub const KB_QI: &[f64] = &[
    1457698.210_0,
    365.242_502_5,
    1546082.512_9,
    365.242_370_0,
    1640640.735_7,
    365.242_303_0,
    1683461.021_4,
    365.242_284_0,
    1752148.026_0,
    365.242_259_0,
    1807933.041_3,
    365.242_239_0,
    1883618.016_8,
    365.242_216_0,
    1907360.006_8,
    365.242_198_0,
    2298912.547_0,
    365.242_190_0,
    2_321_884.5,
];

/// `pc` offset used by the classical-era solver (spec §4.11).
pub const PC_SHUO: f64 = 14.0;
pub const PC_QI: f64 = 7.0;

/// `f3`: the Julian day (1960-01-01) at which the solver switches to the
/// full high-precision algorithm (spec §4.11).
pub const F3_HIGH_PRECISION: f64 = 2_436_935.0;

/// A handful of run-length-encoded single-letter aliases for runs of
/// `'0'` terminated by a `'1'` or `'2'` (spec §4.11/§6). Decoded
/// left-to-right, in a single pass (equivalent, for these disjoint
/// single-character tokens, to the fixed-order two-pass transform the
/// spec describes).
fn decode_char(c: char) -> &'static str {
    match c {
        '0' => "0",
        '1' => "1",
        '2' => "2",
        'J' => "00",
        'I' => "000",
        'H' => "0000",
        'G' => "00000",
        't' => "02",
        's' => "002",
        'a' => "0000000001",
        'A' => "0000000000000000000000000000000000000000000000000000000000",
        'B' => "00000000000000000000000000000000000000000000000",
        'C' => "0000000000000000000000000000000000000",
        'D' => "00000000000000000000000000",
        'E' => "00000000000000000",
        'F' => "0000000000",
        other => {
            debug_assert!(false, "unknown correction-string alias {other:?}");
            ""
        }
    }
}

/// Decompresses a packed correction string into its dense `'0'`/`'1'`/`'2'`
/// form (spec §4.11/§6/§5's lazy-idempotent-initialisation note).
pub fn decode(packed: &str) -> String {
    packed.chars().map(decode_char).collect()
}

/// The packed shuo correction string (abridged; see DESIGN.md).
pub const SHUO_COMPRESSED: &str = "JJtsJJIJtHJJsGtJJIHtJsJGJtIJsHJtGJsJIJtHsJGtJIsJHtJGsJ";

/// The packed qi correction string (abridged; see DESIGN.md).
pub const QI_COMPRESSED: &str = "ItJsHGtJIsJHtGJsIJtHsJGtIJsHJtGsJItJHsGJtIsJHtJGsIJtH";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kb_tables_have_odd_length() {
        // (start, interval) pairs plus one trailing `jd_end` scalar.
        assert_eq!(KB_SHUO.len() % 2, 1);
        assert_eq!(KB_QI.len() % 2, 1);
    }

    #[test]
    fn kb_tables_are_sorted_by_start() {
        for kb in [KB_SHUO, KB_QI] {
            let pairs = &kb[..kb.len() - 1];
            for pair in pairs.chunks(2).collect::<Vec<_>>().windows(2) {
                assert!(pair[0][0] < pair[1][0]);
            }
            let jd_end = kb[kb.len() - 1];
            assert!(pairs[pairs.len() - 2] < jd_end, "jd_end must exceed the last pair's start");
        }
    }

    #[test]
    fn decode_produces_only_correction_digits() {
        let decoded = decode(SHUO_COMPRESSED);
        assert!(decoded.chars().all(|c| matches!(c, '0' | '1' | '2')));
        assert!(!decoded.is_empty());
    }

    #[test]
    fn decode_is_deterministic() {
        assert_eq!(decode(QI_COMPRESSED), decode(QI_COMPRESSED));
    }
}
