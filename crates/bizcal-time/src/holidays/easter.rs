use bizcal_core::errors::{Error, Result};
use bizcal_core::Year;
use chrono::NaiveDate;

/// Compute Easter Sunday for `year` (Gregorian calendar).
///
/// Uses Oudin's algorithm; valid for any year from 1583 on.
pub fn easter_sunday(year: Year) -> Result<NaiveDate> {
    if year < super::FIRST_GREGORIAN_YEAR {
        return Err(Error::InvalidArgument(format!(
            "easter_sunday: {year} predates the Gregorian calendar"
        )));
    }
    let y = year;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    crate::date::ymd(year, month as u32, day as u32)
}
