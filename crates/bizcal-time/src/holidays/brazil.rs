//! Brazil (national) holiday rules.
//!
//! Holidays observed:
//! * New Year's Day (Jan 1)
//! * Carnival Monday & Tuesday (Easter − 48, Easter − 47)
//! * Good Friday (Easter − 2)
//! * Tiradentes Day (Apr 21)
//! * Labour Day (May 1)
//! * Corpus Christi (Easter + 60)
//! * Independence Day (Sep 7)
//! * Our Lady of Aparecida (Oct 12)
//! * All Souls' Day (Nov 2)
//! * Republic Day (Nov 15)
//! * Black Consciousness Day (Nov 20, from 2024)
//! * Christmas (Dec 25)
//!
//! Brazilian holidays are not moved when they fall on a weekend.

use std::collections::HashSet;

use bizcal_core::errors::Result;
use bizcal_core::Year;
use chrono::NaiveDate;

use super::easter::easter_sunday;
use crate::date::{add_days, ymd};

/// Fixed-date holidays as `(month, day)`.
const FIXED: [(u32, u32); 9] = [
    (1, 1),   // New Year's Day
    (4, 21),  // Tiradentes Day
    (5, 1),   // Labour Day
    (9, 7),   // Independence Day
    (10, 12), // Our Lady of Aparecida
    (11, 2),  // All Souls' Day
    (11, 15), // Republic Day
    (12, 25), // Christmas
    (11, 20), // Black Consciousness Day (from 2024)
];

/// Offsets from Easter Sunday, in days.
const EASTER_RELATIVE: [i64; 4] = [
    -48, // Carnival Monday
    -47, // Carnival Tuesday
    -2,  // Good Friday
    60,  // Corpus Christi
];

/// Return every Brazilian national holiday in `year`.
pub fn holidays(year: Year) -> Result<HashSet<NaiveDate>> {
    let mut out = HashSet::with_capacity(FIXED.len() + EASTER_RELATIVE.len());
    for (month, day) in FIXED {
        if (month, day) == (11, 20) && year < 2024 {
            continue;
        }
        out.insert(ymd(year, month, day)?);
    }
    let easter = easter_sunday(year)?;
    for offset in EASTER_RELATIVE {
        out.insert(add_days(easter, offset)?);
    }
    Ok(out)
}
