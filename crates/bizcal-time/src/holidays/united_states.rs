//! United States federal holiday rules.
//!
//! Holidays:
//! * New Year's Day (Jan 1)
//! * Martin Luther King Jr. Day (3rd Mon in Jan, from 1986)
//! * Washington's Birthday (3rd Mon in Feb)
//! * Memorial Day (last Mon in May)
//! * Juneteenth (Jun 19, from 2021)
//! * Independence Day (Jul 4)
//! * Labor Day (1st Mon in Sep)
//! * Columbus Day (2nd Mon in Oct)
//! * Veterans Day (Nov 11)
//! * Thanksgiving Day (4th Thu in Nov)
//! * Christmas Day (Dec 25)
//!
//! Fixed-date holidays on a Saturday are also observed on the preceding
//! Friday, and on a Sunday on the following Monday.  Both the actual and
//! the observed date are returned, as long as the observed date lies in the
//! requested year (New Year's Day of the *next* year observed on Dec 31
//! belongs to this year's set).

use std::collections::HashSet;

use bizcal_core::errors::Result;
use bizcal_core::Year;
use chrono::{Datelike, NaiveDate, Weekday};

use crate::date::{add_days, last_weekday, nth_weekday, ymd};

/// Return every US federal holiday (actual and observed) in `year`.
pub fn holidays(year: Year) -> Result<HashSet<NaiveDate>> {
    let mut out = HashSet::with_capacity(16);

    let mut fixed = vec![(1, 1), (7, 4), (11, 11), (12, 25)];
    if year >= 2021 {
        fixed.push((6, 19));
    }
    for (month, day) in fixed {
        let actual = ymd(year, month, day)?;
        out.insert(actual);
        let observed = observed(actual)?;
        if observed.year() == year {
            out.insert(observed);
        }
    }
    // next year's New Year's Day on a Saturday is observed on Dec 31
    if let Some(next_new_year) = NaiveDate::from_ymd_opt(year + 1, 1, 1) {
        if next_new_year.weekday() == Weekday::Sat {
            out.insert(ymd(year, 12, 31)?);
        }
    }

    if year >= 1986 {
        out.insert(nth_weekday(3, Weekday::Mon, year, 1)?); // MLK Day
    }
    out.insert(nth_weekday(3, Weekday::Mon, year, 2)?); // Washington's Birthday
    out.insert(last_weekday(Weekday::Mon, year, 5)?); // Memorial Day
    out.insert(nth_weekday(1, Weekday::Mon, year, 9)?); // Labor Day
    out.insert(nth_weekday(2, Weekday::Mon, year, 10)?); // Columbus Day
    out.insert(nth_weekday(4, Weekday::Thu, year, 11)?); // Thanksgiving
    Ok(out)
}

/// Saturday → Friday, Sunday → Monday, otherwise unchanged.
fn observed(date: NaiveDate) -> Result<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => add_days(date, -1),
        Weekday::Sun => add_days(date, 1),
        _ => Ok(date),
    }
}
