//! Registry behaviour under shared use.

use std::sync::Arc;
use std::thread;

use bizcal_engine::{CalendarConfig, CalendarRegistry};
use bizcal_time::{CalendarType, WeekendPattern};
use chrono::{Days, NaiveDate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_threads_share_one_engine_per_type() {
    let registry = Arc::new(CalendarRegistry::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let cal = registry.get_calendar(CalendarType::Brazil);
                let start = date(2024, 1, 1) + Days::new(i * 11);
                let count = cal.count_business_days(start, date(2025, 6, 30));
                (cal, count)
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(registry.len(), 1);
    let first = &results[0].0;
    for (cal, count) in &results {
        assert!(Arc::ptr_eq(first, cal));
        assert!(*count > 0);
    }
    // every thread used the same holiday sets
    assert_eq!(first.cache_stats().holiday_cache_size, 2);
}

#[test]
fn test_concurrent_counts_agree_with_sequential() {
    let registry = CalendarRegistry::new();
    let cal = registry.get_calendar(CalendarType::UnitedStates);
    let start = date(2020, 1, 1);
    let expected: Vec<i64> = (0..16)
        .map(|k| cal.count_business_days_direct(start, start + Days::new(40 * k)))
        .collect();
    cal.clear_cache();

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for (k, want) in expected.iter().enumerate() {
                    let end = start + Days::new(40 * k as u64);
                    assert_eq!(cal.count_business_days(start, end), *want);
                }
            });
        }
    });
    let stats = cal.cache_stats();
    assert_eq!(stats.range_hits + stats.range_misses, 4 * 15);
}

#[test]
fn test_distinct_configs_get_distinct_engines() {
    let registry = CalendarRegistry::new();
    let sat_sun = registry.get_or_create(CalendarConfig::new(CalendarType::Generic)).unwrap();
    let fri_sat = registry
        .get_or_create(
            CalendarConfig::new(CalendarType::Generic)
                .with_weekend_pattern(WeekendPattern::FridaySaturday),
        )
        .unwrap();
    let small_cache = registry
        .get_or_create(CalendarConfig::new(CalendarType::Generic).with_cache_capacity(10))
        .unwrap();

    assert_eq!(registry.len(), 3);
    assert!(!Arc::ptr_eq(&sat_sun, &fri_sat));
    assert!(!Arc::ptr_eq(&sat_sun, &small_cache));
    assert_eq!(small_cache.config().cache_capacity, 10);
}

#[test]
fn test_global_registry_is_a_singleton() {
    let a = CalendarRegistry::global();
    let b = CalendarRegistry::global();
    assert!(std::ptr::eq(a, b));
    let br = a.get_calendar(CalendarType::Brazil);
    assert!(Arc::ptr_eq(&br, &b.get_calendar(CalendarType::Brazil)));
}
