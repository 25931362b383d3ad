//! Keyed store of shared engines.
//!
//! A [`CalendarRegistry`] hands out one [`BusinessDayEngine`] per
//! [`CalendarConfig`], so repeated lookups reuse a warm cache.  The key is the
//! whole configuration: two requests that differ only in their custom
//! holidays get two engines.
//!
//! Applications that want explicit ownership create their own registry with
//! [`CalendarRegistry::new`]; the free functions in [`crate::api`] go through
//! the process-wide [`CalendarRegistry::global`] instance.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use bizcal_core::errors::Result;
use bizcal_time::{CalendarType, HolidaySource, StatutoryHolidays};
use parking_lot::Mutex;

use crate::config::CalendarConfig;
use crate::engine::BusinessDayEngine;

/// One shared engine per calendar configuration.
pub struct CalendarRegistry {
    engines: Mutex<HashMap<CalendarConfig, Arc<BusinessDayEngine>>>,
    source: Arc<dyn HolidaySource>,
}

static GLOBAL: OnceLock<CalendarRegistry> = OnceLock::new();

impl CalendarRegistry {
    /// Create an empty registry whose engines use [`StatutoryHolidays`].
    pub fn new() -> Self {
        Self::with_source(Arc::new(StatutoryHolidays))
    }

    /// Create an empty registry whose engines read holidays from `source`.
    pub fn with_source(source: Arc<dyn HolidaySource>) -> Self {
        Self {
            engines: Mutex::new(HashMap::new()),
            source,
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static CalendarRegistry {
        GLOBAL.get_or_init(CalendarRegistry::new)
    }

    /// The engine for `calendar_type` with a Saturday/Sunday weekend, no
    /// custom holidays and the default cache capacity.
    ///
    /// Created on the first call; later calls return the same instance.
    pub fn get_calendar(&self, calendar_type: CalendarType) -> Arc<BusinessDayEngine> {
        let config = CalendarConfig::new(calendar_type);
        let mut engines = self.engines.lock();
        let engine = engines.entry(config).or_insert_with_key(|config| {
            tracing::debug!(%calendar_type, "creating calendar");
            // the default weekend always leaves business days
            Arc::new(BusinessDayEngine::build(config.clone(), Arc::clone(&self.source)))
        });
        Arc::clone(engine)
    }

    /// The engine for `config`, created on first use.
    ///
    /// # Errors
    /// Returns [`Error::Precondition`](bizcal_core::Error::Precondition) if
    /// the weekend pattern covers the whole week.  Nothing is stored in that
    /// case.
    pub fn get_or_create(&self, config: CalendarConfig) -> Result<Arc<BusinessDayEngine>> {
        let mut engines = self.engines.lock();
        if let Some(engine) = engines.get(&config) {
            return Ok(Arc::clone(engine));
        }
        tracing::debug!(
            calendar_type = %config.calendar_type,
            weekend = %config.weekend_pattern,
            custom_holidays = config.custom_holidays.len(),
            "creating calendar"
        );
        let engine = Arc::new(BusinessDayEngine::with_source(
            config.clone(),
            Arc::clone(&self.source),
        )?);
        engines.insert(config, Arc::clone(&engine));
        Ok(engine)
    }

    /// Number of engines held.
    pub fn len(&self) -> usize {
        self.engines.lock().len()
    }

    /// Return `true` if no engine has been created yet.
    pub fn is_empty(&self) -> bool {
        self.engines.lock().is_empty()
    }

    /// Drop every engine.  Handles already given out stay usable.
    pub fn clear(&self) {
        let mut engines = self.engines.lock();
        tracing::debug!(engines = engines.len(), "clearing calendar registry");
        engines.clear();
    }
}

impl Default for CalendarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CalendarRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarRegistry")
            .field("engines", &self.len())
            .field("source", &self.source.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizcal_core::Error;
    use bizcal_time::{HolidayTable, WeekendPattern};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_type_returns_same_engine() {
        let registry = CalendarRegistry::new();
        let a = registry.get_calendar(CalendarType::Brazil);
        let b = registry.get_calendar(CalendarType::Brazil);
        assert!(Arc::ptr_eq(&a, &b));
        let us = registry.get_calendar(CalendarType::UnitedStates);
        assert!(!Arc::ptr_eq(&a, &us));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn get_calendar_and_default_config_share_a_slot() {
        let registry = CalendarRegistry::new();
        let a = registry.get_calendar(CalendarType::Generic);
        let b = registry
            .get_or_create(CalendarConfig::new(CalendarType::Generic))
            .unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn custom_holidays_are_part_of_the_key() {
        let registry = CalendarRegistry::new();
        let plain = registry.get_calendar(CalendarType::Generic);
        let custom = registry
            .get_or_create(
                CalendarConfig::new(CalendarType::Generic)
                    .with_custom_holidays([date(2024, 6, 10)]),
            )
            .unwrap();
        assert!(!Arc::ptr_eq(&plain, &custom));
        assert!(plain.is_business_day(date(2024, 6, 10)));
        assert!(!custom.is_business_day(date(2024, 6, 10)));
    }

    #[test]
    fn invalid_config_is_not_stored() {
        let registry = CalendarRegistry::new();
        let cfg = CalendarConfig::new(CalendarType::Generic)
            .with_weekend_pattern(WeekendPattern::Custom((0..7).collect()));
        assert!(matches!(
            registry.get_or_create(cfg),
            Err(Error::Precondition(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn cache_survives_between_lookups() {
        let registry = CalendarRegistry::new();
        let (start, end) = (date(2024, 1, 1), date(2024, 12, 31));
        registry.get_calendar(CalendarType::Brazil).count_business_days(start, end);
        let stats = registry.get_calendar(CalendarType::Brazil).cache_stats();
        assert_eq!(stats.business_day_cache_size, 1);
    }

    #[test]
    fn injected_source_is_used() {
        let table = HolidayTable::new().with_region("US", [date(2024, 6, 11)]);
        let registry = CalendarRegistry::with_source(Arc::new(table));
        let us = registry.get_calendar(CalendarType::UnitedStates);
        assert!(!us.is_business_day(date(2024, 6, 11)));
        // Independence Day is not in the table
        assert!(us.is_business_day(date(2024, 7, 4)));
    }

    #[test]
    fn clear_drops_engines_but_not_handles() {
        let registry = CalendarRegistry::new();
        let held = registry.get_calendar(CalendarType::Brazil);
        registry.clear();
        assert!(registry.is_empty());
        assert!(held.is_business_day(date(2024, 6, 10)));
        let fresh = registry.get_calendar(CalendarType::Brazil);
        assert!(!Arc::ptr_eq(&held, &fresh));
    }
}
