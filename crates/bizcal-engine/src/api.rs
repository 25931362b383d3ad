//! Free functions over the process-wide registry.
//!
//! Each function resolves its engine with
//! [`CalendarRegistry::global`]`().get_calendar(calendar_type)` and accepts
//! either a [`NaiveDate`] or a `YYYY-MM-DD` string for every date argument.
//! Only [`is_business_day`] tolerates malformed strings; the others report
//! [`Error::Parse`](bizcal_core::Error::Parse) before touching the engine.
//!
//! ```
//! use bizcal_engine::api;
//! use bizcal_time::CalendarType;
//!
//! let n = api::count_business_days("2024-06-03", "2024-06-07", CalendarType::Generic)?;
//! assert_eq!(n, 5);
//! # Ok::<(), bizcal_core::Error>(())
//! ```

use std::sync::Arc;

use bizcal_core::errors::Result;
use bizcal_core::{DayCount, IntoCalendarDate};
use bizcal_time::CalendarType;
use chrono::NaiveDate;

use crate::engine::BusinessDayEngine;
use crate::registry::CalendarRegistry;

/// The shared engine for `calendar_type`.
pub fn get_business_calendar(calendar_type: CalendarType) -> Arc<BusinessDayEngine> {
    CalendarRegistry::global().get_calendar(calendar_type)
}

/// Return `true` if `date` is a business day; `false` for unparseable input.
pub fn is_business_day<D: IntoCalendarDate>(date: D, calendar_type: CalendarType) -> bool {
    get_business_calendar(calendar_type).is_business_day(date)
}

/// Business days in `[start, end]`, both inclusive; `0` if `start > end`.
pub fn count_business_days<S, E>(start: S, end: E, calendar_type: CalendarType) -> Result<DayCount>
where
    S: IntoCalendarDate,
    E: IntoCalendarDate,
{
    let start = start.into_calendar_date()?;
    let end = end.into_calendar_date()?;
    Ok(get_business_calendar(calendar_type).count_business_days(start, end))
}

/// The date `n` business days after `start` (before it if `n < 0`).
pub fn add_business_days<D: IntoCalendarDate>(
    start: D,
    n: i64,
    calendar_type: CalendarType,
) -> Result<NaiveDate> {
    let start = start.into_calendar_date()?;
    get_business_calendar(calendar_type).add_business_days(start, n)
}

/// The date `n` business days before `start` (after it if `n < 0`).
pub fn subtract_business_days<D: IntoCalendarDate>(
    start: D,
    n: i64,
    calendar_type: CalendarType,
) -> Result<NaiveDate> {
    let start = start.into_calendar_date()?;
    get_business_calendar(calendar_type).subtract_business_days(start, n)
}

/// The first business day strictly after `date`.
pub fn get_next_business_day<D: IntoCalendarDate>(
    date: D,
    calendar_type: CalendarType,
) -> Result<NaiveDate> {
    let date = date.into_calendar_date()?;
    get_business_calendar(calendar_type).next_business_day(date)
}

/// The last business day strictly before `date`.
pub fn get_previous_business_day<D: IntoCalendarDate>(
    date: D,
    calendar_type: CalendarType,
) -> Result<NaiveDate> {
    let date = date.into_calendar_date()?;
    get_business_calendar(calendar_type).previous_business_day(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizcal_core::Error;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn strings_and_dates_are_interchangeable() {
        let ty = CalendarType::Generic;
        assert_eq!(
            count_business_days("2024-06-01", date(2024, 6, 9), ty),
            Ok(5)
        );
        assert_eq!(add_business_days("2024-06-03", 5, ty), Ok(date(2024, 6, 10)));
        assert_eq!(
            add_business_days(String::from("2024-06-03"), 0, ty),
            Ok(date(2024, 6, 3))
        );
    }

    #[test]
    fn malformed_strings() {
        let ty = CalendarType::Brazil;
        assert!(!is_business_day("2024-13-01", ty));
        assert!(matches!(
            count_business_days("2024-06-01", "tomorrow", ty),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(
            add_business_days("06/03/2024", 1, ty),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn neighbours_and_subtraction() {
        let ty = CalendarType::UnitedStates;
        // July 4th 2024 is a Thursday
        assert_eq!(get_next_business_day("2024-07-03", ty), Ok(date(2024, 7, 5)));
        assert_eq!(get_previous_business_day("2024-07-05", ty), Ok(date(2024, 7, 3)));
        assert_eq!(subtract_business_days("2024-07-08", 2, ty), Ok(date(2024, 7, 3)));
    }

    #[test]
    fn handles_come_from_the_global_registry() {
        let a = get_business_calendar(CalendarType::Brazil);
        let b = CalendarRegistry::global().get_calendar(CalendarType::Brazil);
        assert!(Arc::ptr_eq(&a, &b));
    }
}
