//! Calendar configuration.
//!
//! A [`CalendarConfig`] is the immutable identity of a
//! [`BusinessDayEngine`](crate::BusinessDayEngine): which holiday rules it
//! uses, which weekdays are weekends, which extra dates are holidays, and how
//! many range counts it may cache.

use std::collections::BTreeSet;

use bizcal_time::{CalendarType, WeekendPattern};
use chrono::NaiveDate;

/// Default bound on the number of cached `(start, end)` business-day counts.
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Constructor-time configuration of a business-day engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CalendarConfig {
    /// Source of built-in holidays.
    pub calendar_type: CalendarType,
    /// Which weekdays are weekends.
    pub weekend_pattern: WeekendPattern,
    /// Extra holidays on top of the built-in ones.
    pub custom_holidays: BTreeSet<NaiveDate>,
    /// Soft cap on the range-count cache.
    pub cache_capacity: usize,
}

impl CalendarConfig {
    /// Configuration for `calendar_type` with a Saturday/Sunday weekend, no
    /// custom holidays and the default cache capacity.
    pub fn new(calendar_type: CalendarType) -> Self {
        Self {
            calendar_type,
            weekend_pattern: WeekendPattern::default(),
            custom_holidays: BTreeSet::new(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    /// Set the weekend pattern.
    pub fn with_weekend_pattern(mut self, pattern: WeekendPattern) -> Self {
        self.weekend_pattern = pattern;
        self
    }

    /// Add custom holidays.
    pub fn with_custom_holidays<I>(mut self, holidays: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        self.custom_holidays.extend(holidays);
        self
    }

    /// Set the range-cache capacity.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::new(CalendarType::default())
    }
}
