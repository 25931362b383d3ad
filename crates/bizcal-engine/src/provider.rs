//! Holiday provider: built-in holidays merged with custom ones.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

use bizcal_core::Year;
use bizcal_time::{CalendarType, HolidaySource};
use chrono::{Datelike, NaiveDate};

/// Supplies the holiday set of a calendar for a given year.
///
/// Failures of the underlying [`HolidaySource`] never reach the caller: the
/// provider logs a warning and continues as if the region had no built-in
/// holidays that year.
#[derive(Clone)]
pub struct HolidayProvider {
    calendar_type: CalendarType,
    custom_holidays: BTreeSet<NaiveDate>,
    source: Arc<dyn HolidaySource>,
}

impl HolidayProvider {
    /// Create a provider for `calendar_type` backed by `source`.
    pub fn new(
        calendar_type: CalendarType,
        custom_holidays: BTreeSet<NaiveDate>,
        source: Arc<dyn HolidaySource>,
    ) -> Self {
        Self {
            calendar_type,
            custom_holidays,
            source,
        }
    }

    /// The calendar type this provider serves.
    pub fn calendar_type(&self) -> CalendarType {
        self.calendar_type
    }

    /// Caller-supplied holidays.
    pub fn custom_holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.custom_holidays
    }

    /// Return the holidays of `year`: the built-in ones (if the calendar type
    /// has any) united with the custom holidays that fall in `year`.
    ///
    /// Every returned date lies in `year`.  Not cached; the engine memoises
    /// the result per year.
    pub fn holidays_for_year(&self, year: Year) -> HashSet<NaiveDate> {
        let mut holidays = match self.calendar_type.region_code() {
            None => HashSet::new(),
            Some(region) => match self.source.holidays(region, year) {
                Ok(set) => set.into_iter().filter(|d| d.year() == year).collect(),
                Err(error) => {
                    tracing::warn!(
                        region,
                        year,
                        source = self.source.name(),
                        %error,
                        "holiday source failed, assuming no built-in holidays"
                    );
                    HashSet::new()
                }
            },
        };
        holidays.extend(self.custom_holidays.iter().filter(|d| d.year() == year));
        holidays
    }
}

impl fmt::Debug for HolidayProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayProvider")
            .field("calendar_type", &self.calendar_type)
            .field("custom_holidays", &self.custom_holidays.len())
            .field("source", &self.source.name())
            .finish()
    }
}
