//! Gregorian date helpers on top of [`chrono::NaiveDate`].
//!
//! Every function here is checked: results that would fall outside chrono's
//! representable range come back as [`Error::DateOutOfRange`] instead of
//! panicking.

use bizcal_core::errors::{Error, Result};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Build a date from year, month and day.
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::DateOutOfRange(format!("{year:04}-{month:02}-{day:02} is not a valid date"))
    })
}

/// Move `date` by a signed number of calendar days.
pub fn add_days(date: NaiveDate, n: i64) -> Result<NaiveDate> {
    let shifted = if n >= 0 {
        date.checked_add_days(Days::new(n.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(n.unsigned_abs()))
    };
    shifted.ok_or_else(|| Error::DateOutOfRange(format!("{date} {n:+} days")))
}

/// The day after `date`.
pub fn succ(date: NaiveDate) -> Result<NaiveDate> {
    date.succ_opt()
        .ok_or_else(|| Error::DateOutOfRange(format!("no day after {date}")))
}

/// The day before `date`.
pub fn pred(date: NaiveDate) -> Result<NaiveDate> {
    date.pred_opt()
        .ok_or_else(|| Error::DateOutOfRange(format!("no day before {date}")))
}

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Return the last calendar day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let last = days_in_month(date.year(), date.month());
    date.with_day(last).unwrap_or(date)
}

/// Return the *n*-th occurrence of `weekday` in `year`/`month`.
///
/// For example, `nth_weekday(3, Weekday::Mon, 2024, 1)` is Martin Luther
/// King Jr. Day 2024 (2024-01-15).
///
/// # Errors
/// Returns an error if `n` is zero or the month has fewer than `n` such
/// weekdays.
pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: u32) -> Result<NaiveDate> {
    if n == 0 {
        return Err(Error::InvalidArgument("nth_weekday: n must be >= 1".into()));
    }
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n).ok_or_else(|| {
        Error::DateOutOfRange(format!(
            "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
        ))
    })
}

/// Return the last occurrence of `weekday` in `year`/`month`.
pub fn last_weekday(weekday: Weekday, year: i32, month: u32) -> Result<NaiveDate> {
    let last = ymd(year, month, days_in_month(year, month))?;
    let back = (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    add_days(last, -i64::from(back))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_of_month() {
        assert_eq!(end_of_month(date(2024, 2, 15)), date(2024, 2, 29));
        assert_eq!(end_of_month(date(2023, 2, 1)), date(2023, 2, 28));
        assert_eq!(end_of_month(date(2024, 12, 31)), date(2024, 12, 31));
    }

    #[test]
    fn test_nth_weekday() {
        // 3rd Wednesday of March 2024 = March 20
        assert_eq!(nth_weekday(3, Weekday::Wed, 2024, 3), Ok(date(2024, 3, 20)));
        // 1st Monday of January 2024 = January 1
        assert_eq!(nth_weekday(1, Weekday::Mon, 2024, 1), Ok(date(2024, 1, 1)));
        // 5th Monday of January 2024 = January 29
        assert_eq!(nth_weekday(5, Weekday::Mon, 2024, 1), Ok(date(2024, 1, 29)));
    }

    #[test]
    fn test_nth_weekday_out_of_range() {
        // There is no 5th Wednesday in February 2024
        assert!(nth_weekday(5, Weekday::Wed, 2024, 2).is_err());
        assert!(nth_weekday(0, Weekday::Mon, 2024, 1).is_err());
    }

    #[test]
    fn test_last_weekday() {
        // Memorial Day 2024 = May 27
        assert_eq!(last_weekday(Weekday::Mon, 2024, 5), Ok(date(2024, 5, 27)));
        // May 31 2021 is itself a Monday
        assert_eq!(last_weekday(Weekday::Mon, 2021, 5), Ok(date(2021, 5, 31)));
    }

    #[test]
    fn test_add_days_both_directions() {
        let d = date(2024, 1, 1);
        assert_eq!(add_days(d, 31), Ok(date(2024, 2, 1)));
        assert_eq!(add_days(d, -1), Ok(date(2023, 12, 31)));
        assert!(add_days(NaiveDate::MAX, 1).is_err());
        assert!(pred(NaiveDate::MIN).is_err());
    }
}
