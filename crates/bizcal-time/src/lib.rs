//! # bizcal-time
//!
//! Weekend patterns, calendar types, business-day conventions, and the
//! holiday sources the business-day engine consults.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// `CalendarType`: which holiday source a calendar uses.
pub mod calendar_type;

/// Gregorian helpers on top of `chrono::NaiveDate`.
pub mod date;

/// `HolidaySource` trait and built-in statutory holiday rules.
pub mod holidays;

/// `WeekdaySet`: a compact set of weekday indices.
pub mod weekday;

/// `WeekendPattern`: which weekdays are non-working.
pub mod weekend;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar_type::CalendarType;
pub use holidays::{HolidaySource, HolidayTable, StatutoryHolidays};
pub use weekday::{weekday_index, WeekdaySet};
pub use weekend::{is_weekend, weekend_days, WeekendPattern};
