//! Holiday data sources.
//!
//! The engine never depends on a particular holiday library: it talks to a
//! [`HolidaySource`], which maps a region code and a year to the set of
//! holiday dates.  Two implementations ship with the crate:
//!
//! * [`StatutoryHolidays`]: rule-based national holidays for Brazil (`"BR"`)
//!   and the United States (`"US"`).
//! * [`HolidayTable`]: an explicit per-region table, for data loaded from
//!   elsewhere.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use bizcal_core::errors::{Error, Result};
use bizcal_core::Year;
use chrono::{Datelike, NaiveDate};

/// Brazilian national holidays.
pub mod brazil;

/// Easter computus.
pub mod easter;

/// United States federal holidays.
pub mod united_states;

/// First year the Gregorian rules are defined for.
pub const FIRST_GREGORIAN_YEAR: Year = 1583;

/// Last year the built-in rules will produce.
pub const LAST_SUPPORTED_YEAR: Year = 9999;

/// A provider of statutory holiday dates.
///
/// Implementations may fail (for example a network-backed source that is
/// offline).  Callers inside this workspace treat any failure as "no
/// holidays for that region and year".
pub trait HolidaySource: fmt::Debug + Send + Sync {
    /// Short human-readable name used in log output.
    fn name(&self) -> &str;

    /// Return every holiday of `region` that falls in `year`.
    ///
    /// Holidays falling on a weekend are included.
    fn holidays(&self, region: &str, year: Year) -> Result<HashSet<NaiveDate>>;
}

/// Rule-based national holidays for the regions this crate knows about.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatutoryHolidays;

impl StatutoryHolidays {
    /// Region codes understood by [`StatutoryHolidays`].
    pub const REGIONS: [&'static str; 2] = ["BR", "US"];
}

impl HolidaySource for StatutoryHolidays {
    fn name(&self) -> &str {
        "statutory"
    }

    fn holidays(&self, region: &str, year: Year) -> Result<HashSet<NaiveDate>> {
        if !(FIRST_GREGORIAN_YEAR..=LAST_SUPPORTED_YEAR).contains(&year) {
            return Err(Error::HolidaySource {
                region: region.to_owned(),
                year,
                reason: format!(
                    "year outside [{FIRST_GREGORIAN_YEAR}, {LAST_SUPPORTED_YEAR}]"
                ),
            });
        }
        match region.to_ascii_uppercase().as_str() {
            "BR" => brazil::holidays(year),
            "US" => united_states::holidays(year),
            _ => Err(Error::UnsupportedRegion(region.to_owned())),
        }
    }
}

/// A holiday source backed by an explicit table of dates per region.
#[derive(Debug, Clone, Default)]
pub struct HolidayTable {
    regions: HashMap<String, BTreeSet<NaiveDate>>,
}

impl HolidayTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add holidays for `region` (region codes are case-insensitive).
    pub fn with_region<I>(mut self, region: &str, dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        self.insert(region, dates);
        self
    }

    /// Add holidays for `region`.
    pub fn insert<I>(&mut self, region: &str, dates: I)
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        self.regions
            .entry(region.to_ascii_uppercase())
            .or_default()
            .extend(dates);
    }

    /// Number of regions in the table.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

impl HolidaySource for HolidayTable {
    fn name(&self) -> &str {
        "table"
    }

    fn holidays(&self, region: &str, year: Year) -> Result<HashSet<NaiveDate>> {
        let dates = self
            .regions
            .get(&region.to_ascii_uppercase())
            .ok_or_else(|| Error::UnsupportedRegion(region.to_owned()))?;
        Ok(dates.iter().copied().filter(|d| d.year() == year).collect())
    }
}
