//! Date-input parsing helpers.
//!
//! Calendar queries accept either a native [`NaiveDate`] or an ISO 8601
//! `YYYY-MM-DD` string.  [`IntoCalendarDate`] normalises both into a
//! `NaiveDate`, reporting malformed strings as [`Error::Parse`].

use chrono::NaiveDate;

use crate::errors::{Error, Result};

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Surrounding whitespace is ignored.  The year must have four digits; month
/// and day may omit their leading zero.
///
/// # Errors
/// Returns [`Error::Parse`] if the string is not three `-`-separated numbers
/// or does not name a real calendar day.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    let parse_err = || Error::Parse {
        input: s.to_owned(),
    };
    let trimmed = s.trim();
    let parts: Vec<&str> = trimmed.split('-').collect();
    if parts.len() != 3 || parts[0].len() != 4 {
        return Err(parse_err());
    }
    let numeric = |p: &str| !p.is_empty() && p.len() <= 2 && p.bytes().all(|b| b.is_ascii_digit());
    if !parts[0].bytes().all(|b| b.is_ascii_digit()) || !numeric(parts[1]) || !numeric(parts[2]) {
        return Err(parse_err());
    }
    let year: i32 = parts[0].parse().map_err(|_| parse_err())?;
    let month: u32 = parts[1].parse().map_err(|_| parse_err())?;
    let day: u32 = parts[2].parse().map_err(|_| parse_err())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(parse_err)
}

/// A value that can be turned into a calendar date.
///
/// Implemented for native dates and for `YYYY-MM-DD` strings.
pub trait IntoCalendarDate {
    /// Convert into a [`NaiveDate`].
    fn into_calendar_date(self) -> Result<NaiveDate>;
}

impl IntoCalendarDate for NaiveDate {
    fn into_calendar_date(self) -> Result<NaiveDate> {
        Ok(self)
    }
}

impl IntoCalendarDate for &NaiveDate {
    fn into_calendar_date(self) -> Result<NaiveDate> {
        Ok(*self)
    }
}

impl IntoCalendarDate for &str {
    fn into_calendar_date(self) -> Result<NaiveDate> {
        parse_iso_date(self)
    }
}

impl IntoCalendarDate for String {
    fn into_calendar_date(self) -> Result<NaiveDate> {
        parse_iso_date(&self)
    }
}

impl IntoCalendarDate for &String {
    fn into_calendar_date(self) -> Result<NaiveDate> {
        parse_iso_date(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-06-03"), Ok(date(2024, 6, 3)));
        assert_eq!(parse_iso_date("  2024-6-3 "), Ok(date(2024, 6, 3)));
        assert_eq!(parse_iso_date("2024-02-29"), Ok(date(2024, 2, 29)));
    }

    #[test]
    fn test_parse_iso_date_rejects_garbage() {
        for bad in [
            "",
            "bad",
            "2024/06/03",
            "24-06-03",
            "2024-06",
            "2024-06-03-01",
            "2023-02-29",
            "2024-13-01",
            "2024-00-10",
            "2024-+6-03",
            "2024-006-03",
        ] {
            assert_eq!(
                parse_iso_date(bad),
                Err(Error::Parse { input: bad.into() }),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_into_calendar_date() {
        let d = date(2024, 6, 10);
        assert_eq!(d.into_calendar_date(), Ok(d));
        assert_eq!((&d).into_calendar_date(), Ok(d));
        assert_eq!("2024-06-10".into_calendar_date(), Ok(d));
        assert_eq!(String::from("2024-06-10").into_calendar_date(), Ok(d));
        assert!("10/06/2024".into_calendar_date().is_err());
    }
}
