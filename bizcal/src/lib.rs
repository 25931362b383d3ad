//! # bizcal
//!
//! Business-day calendars for planning and reporting code.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `bizcal-*` crates.
//!
//! ```rust
//! use bizcal::prelude::*;
//!
//! assert!(is_business_day("2024-06-07", CalendarType::Generic));
//! assert_eq!(count_business_days("2024-06-01", "2024-06-09", CalendarType::Generic)?, 5);
//! # Ok::<(), bizcal::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, type aliases and date parsing.
pub use bizcal_core as core;

/// Weekend patterns, calendar types and holiday sources.
pub use bizcal_time as time;

/// The cached business-day engine and its registry.
pub use bizcal_engine as engine;

/// The names most callers need.
pub mod prelude {
    pub use bizcal_core::{Error, IntoCalendarDate, NaiveDate, Result};
    pub use bizcal_engine::api::{
        add_business_days, count_business_days, get_business_calendar, get_next_business_day,
        get_previous_business_day, is_business_day, subtract_business_days,
    };
    pub use bizcal_engine::{BusinessDayEngine, CalendarConfig, CalendarRegistry};
    pub use bizcal_time::{
        BusinessDayConvention, CalendarType, HolidaySource, WeekdaySet, WeekendPattern,
    };
}
