//! # bizcal-engine
//!
//! Business-day arithmetic with per-calendar caching.
//!
//! * [`BusinessDayEngine`]: membership, counting, shifting and adjustment
//!   for one [`CalendarConfig`].
//! * [`CalendarRegistry`]: one shared engine per configuration.
//! * [`api`]: free functions over the process-wide registry.
//!
//! ```
//! use bizcal_engine::{BusinessDayEngine, CalendarConfig};
//! use bizcal_time::CalendarType;
//! use chrono::NaiveDate;
//!
//! let cal = BusinessDayEngine::new(CalendarConfig::new(CalendarType::Generic))?;
//! let mon = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
//! assert_eq!(cal.add_business_days(mon, 5)?, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
//! # Ok::<(), bizcal_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

pub mod api;

/// Two-tier result cache.
pub mod cache;

/// `CalendarConfig` and its builder.
pub mod config;

/// `BusinessDayEngine`.
pub mod engine;

/// `HolidayProvider`.
pub mod provider;

/// `CalendarRegistry`.
pub mod registry;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cache::{CacheStats, ResultCache};
pub use config::{CalendarConfig, DEFAULT_CACHE_CAPACITY};
pub use engine::BusinessDayEngine;
pub use provider::HolidayProvider;
pub use registry::CalendarRegistry;
