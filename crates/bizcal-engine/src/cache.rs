//! Two-tier result cache.
//!
//! * **Holiday tier**: one immutable holiday set per year, unbounded (a
//!   process only ever asks about a handful of years).
//! * **Range tier**: business-day counts keyed by the exact `(start, end)`
//!   pair, bounded by a soft capacity: once full, new entries are simply not
//!   inserted.  Nothing is ever evicted; call [`ResultCache::clear`] to
//!   reclaim memory in long-running processes.
//!
//! Both tiers sit behind `parking_lot::RwLock`s, so an engine shared through
//! an `Arc` can be queried from several threads.  Reads vastly outnumber
//! writes once the cache is warm.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use bizcal_core::{DayCount, Year};
use chrono::NaiveDate;
use parking_lot::RwLock;

/// Key of the range tier.
///
/// Not canonicalised: `(a, b)` and `(b, a)` are different entries.
pub type RangeKey = (NaiveDate, NaiveDate);

/// Immutable holiday set shared between the cache and its readers.
pub type HolidaySet = Arc<HashSet<NaiveDate>>;

/// Read-only snapshot of cache occupancy and activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of years with a cached holiday set.
    pub holiday_cache_size: usize,
    /// Number of cached range counts.
    pub business_day_cache_size: usize,
    /// Range lookups answered from the cache.
    pub range_hits: u64,
    /// Range lookups that had to be computed.
    pub range_misses: u64,
    /// Holiday sets computed (one per year per clear).
    pub holiday_computations: u64,
}

/// Bounded two-tier cache used by a single engine.
#[derive(Debug)]
pub struct ResultCache {
    capacity: usize,
    holidays: RwLock<HashMap<Year, HolidaySet>>,
    ranges: RwLock<HashMap<RangeKey, DayCount>>,
    range_hits: AtomicU64,
    range_misses: AtomicU64,
    holiday_computations: AtomicU64,
}

impl ResultCache {
    /// Create a cache whose range tier holds at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            holidays: RwLock::new(HashMap::new()),
            ranges: RwLock::new(HashMap::new()),
            range_hits: AtomicU64::new(0),
            range_misses: AtomicU64::new(0),
            holiday_computations: AtomicU64::new(0),
        }
    }

    /// Soft capacity of the range tier.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up a cached range count.
    pub fn get(&self, key: &RangeKey) -> Option<DayCount> {
        let found = self.ranges.read().get(key).copied();
        let counter = if found.is_some() {
            &self.range_hits
        } else {
            &self.range_misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Store a range count.
    ///
    /// Returns `false` (and stores nothing) if the range tier is full and
    /// `key` is not already present.
    pub fn put(&self, key: RangeKey, value: DayCount) -> bool {
        let mut ranges = self.ranges.write();
        if ranges.len() >= self.capacity && !ranges.contains_key(&key) {
            return false;
        }
        ranges.insert(key, value);
        true
    }

    /// Return the holiday set for `year`, computing it with `compute` on a
    /// miss.
    ///
    /// `compute` runs without any lock held.  If two threads race on the same
    /// year the first stored set wins; both sets are equal anyway.
    pub fn holidays_or_insert_with<F>(&self, year: Year, compute: F) -> HolidaySet
    where
        F: FnOnce() -> HashSet<NaiveDate>,
    {
        if let Some(set) = self.holidays.read().get(&year) {
            return Arc::clone(set);
        }
        let computed = Arc::new(compute());
        self.holiday_computations.fetch_add(1, Ordering::Relaxed);
        Arc::clone(self.holidays.write().entry(year).or_insert(computed))
    }

    /// Empty both tiers.  Activity counters are kept.
    pub fn clear(&self) {
        self.holidays.write().clear();
        self.ranges.write().clear();
    }

    /// Snapshot of occupancy and activity counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            holiday_cache_size: self.holidays.read().len(),
            business_day_cache_size: self.ranges.read().len(),
            range_hits: self.range_hits.load(Ordering::Relaxed),
            range_misses: self.range_misses.load(Ordering::Relaxed),
            holiday_computations: self.holiday_computations.load(Ordering::Relaxed),
        }
    }
}
