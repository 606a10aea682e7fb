/*
 * lunisolar-core
 * Derived from the ANISE Toolkit (MPL-2.0).
 */

//! Bounded year-keyed cache for [`LunarYear`] layouts, gated behind the
//! `cache` feature (spec §5). Idempotent lazy initialisation of the
//! cache itself, and of the decompressed correction dictionaries, both
//! use `once_cell::sync::Lazy` — one of the strategies the resource
//! model explicitly sanctions.

use crate::calendar::lunar_year::{self, LunarYear};

#[cfg(feature = "cache")]
mod bounded {
    use super::*;
    use once_cell::sync::Lazy;
    use std::num::NonZeroUsize;
    use std::sync::Mutex;

    const CAPACITY: usize = 64;

    static CACHE: Lazy<Mutex<lru::LruCache<i32, LunarYear>>> =
        Lazy::new(|| Mutex::new(lru::LruCache::new(NonZeroUsize::new(CAPACITY).unwrap())));

    /// Returns the cached layout for `year`, computing and inserting it
    /// on a miss. `jd2000_hint` seeds the layout's internal zhongqi/heshuo
    /// search when not already cached.
    pub fn layout(year: i32, jd2000_hint: f64) -> LunarYear {
        let mut cache = CACHE.lock().expect("lunar year cache poisoned");
        if let Some(hit) = cache.get(&year) {
            log::trace!("lunar year cache hit for {year}");
            return hit.clone();
        }
        log::debug!("lunar year cache miss for {year}, computing layout");
        let computed = lunar_year::layout(jd2000_hint, year);
        cache.put(year, computed.clone());
        computed
    }
}

#[cfg(feature = "cache")]
pub use bounded::layout;

/// Uncached fallback used when the `cache` feature is disabled: every call
/// recomputes the layout directly.
#[cfg(not(feature = "cache"))]
pub fn layout(year: i32, jd2000_hint: f64) -> LunarYear {
    lunar_year::layout(jd2000_hint, year)
}

#[cfg(all(test, feature = "cache"))]
mod tests {
    use super::*;

    #[test]
    fn repeated_lookup_returns_consistent_layout() {
        let jd2000 = crate::time::julian::civil_to_jd(2024, 6, 1.0) - crate::constants::J2000;
        let first = layout(2024, jd2000);
        let second = layout(2024, jd2000);
        assert_eq!(first.heshuo, second.heshuo);
    }
}
