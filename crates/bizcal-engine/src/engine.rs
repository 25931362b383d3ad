//! The business-day engine.
//!
//! [`BusinessDayEngine`] combines a weekend set with a [`HolidayProvider`]
//! and answers three kinds of query:
//!
//! * **is-business-day**: weekend membership, then holiday membership.
//! * **count**: inclusive business days in `[start, end]`.  Spans shorter
//!   than [`DIRECT_COUNT_MAX_SPAN`] days are enumerated; longer spans use a
//!   closed form (complete weeks × weekend size, plus a remainder walk of at
//!   most six days, minus in-range holidays, plus the holidays that already
//!   fell on a weekend).  Both paths agree on every input.
//! * **add**: `n` business days after `start` (the start itself never
//!   counts).  Up to [`DIRECT_ADD_MAX`] days are walked directly; larger `n`
//!   are estimated from the business days per week, counted with the closed
//!   form, and then corrected by a short walk in either direction.
//!
//! Results of `count` are memoised in a [`ResultCache`], as are the per-year
//! holiday sets.

use std::sync::Arc;

use bizcal_core::errors::{Error, Result};
use bizcal_core::{ensure, DayCount, IntoCalendarDate, Year};
use bizcal_time::date::{add_days, end_of_month, pred, succ};
use bizcal_time::weekday::DAYS_PER_WEEK;
use bizcal_time::{
    weekday_index, BusinessDayConvention, HolidaySource, StatutoryHolidays, WeekdaySet,
};
use chrono::{Datelike, NaiveDate};

use crate::cache::{CacheStats, HolidaySet, ResultCache};
use crate::config::CalendarConfig;
use crate::provider::HolidayProvider;

/// Spans of fewer calendar days than this (`end - start`) are counted by
/// direct enumeration.
pub const DIRECT_COUNT_MAX_SPAN: i64 = 30;

/// `add_business_days` walks day by day for `n` up to this value.
pub const DIRECT_ADD_MAX: i64 = 30;

/// Business-day arithmetic over one calendar configuration.
///
/// Engines are `Send + Sync`; share them through an `Arc` (the
/// [`CalendarRegistry`](crate::CalendarRegistry) does exactly that).
#[derive(Debug)]
pub struct BusinessDayEngine {
    config: CalendarConfig,
    weekend: WeekdaySet,
    provider: HolidayProvider,
    cache: ResultCache,
}

impl BusinessDayEngine {
    /// Create an engine using the built-in [`StatutoryHolidays`].
    ///
    /// # Errors
    /// Returns [`Error::Precondition`] if the weekend pattern covers the whole
    /// week.
    pub fn new(config: CalendarConfig) -> Result<Self> {
        Self::with_source(config, Arc::new(StatutoryHolidays))
    }

    /// Create an engine that reads built-in holidays from `source`.
    ///
    /// # Errors
    /// Returns [`Error::Precondition`] if the weekend pattern covers the whole
    /// week.
    pub fn with_source(config: CalendarConfig, source: Arc<dyn HolidaySource>) -> Result<Self> {
        let weekend = config.weekend_pattern.weekend_days();
        ensure!(
            !weekend.is_full(),
            "weekend pattern {} leaves no business days",
            config.weekend_pattern
        );
        Ok(Self::build(config, source))
    }

    /// Construct without validating the weekend pattern.
    pub(crate) fn build(config: CalendarConfig, source: Arc<dyn HolidaySource>) -> Self {
        let weekend = config.weekend_pattern.weekend_days();
        let provider = HolidayProvider::new(
            config.calendar_type,
            config.custom_holidays.clone(),
            source,
        );
        let cache = ResultCache::new(config.cache_capacity);
        Self {
            config,
            weekend,
            provider,
            cache,
        }
    }

    /// The configuration this engine was built from.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// The resolved weekend set.
    pub fn weekend_days(&self) -> WeekdaySet {
        self.weekend
    }

    // ── Holidays ──────────────────────────────────────────────────────────────

    /// Holidays of `year` (built-in plus custom), cached per year.
    pub fn holidays_for_year(&self, year: Year) -> HolidaySet {
        self.cache
            .holidays_or_insert_with(year, || self.provider.holidays_for_year(year))
    }

    /// Return `true` if `date` falls on a weekend day.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(weekday_index(date))
    }

    /// Return `true` if `date` is in the holiday set, whatever its weekday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays_for_year(date.year()).contains(&date)
    }

    /// Return `true` if `date` is a business day.
    ///
    /// Accepts a [`NaiveDate`] or a `YYYY-MM-DD` string.  A string that does
    /// not parse yields `false` rather than an error.
    pub fn is_business_day<D: IntoCalendarDate>(&self, date: D) -> bool {
        match date.into_calendar_date() {
            Ok(date) => self.is_business_date(date),
            Err(error) => {
                tracing::debug!(%error, "unparseable date treated as non-business day");
                false
            }
        }
    }

    fn is_business_date(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Non-business days in `[start, end]`, sorted.
    ///
    /// With `include_weekends == false` only holidays that fall on a working
    /// weekday are listed; otherwise every weekend day is listed as well.
    pub fn holidays_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        include_weekends: bool,
    ) -> Vec<NaiveDate> {
        if start > end {
            return Vec::new();
        }
        if include_weekends {
            return start
                .iter_days()
                .take_while(|d| *d <= end)
                .filter(|d| !self.is_business_date(*d))
                .collect();
        }
        let mut out: Vec<NaiveDate> = (start.year()..=end.year())
            .flat_map(|year| {
                let set = self.holidays_for_year(year);
                set.iter()
                    .copied()
                    .filter(|d| *d >= start && *d <= end && !self.is_weekend(*d))
                    .collect::<Vec<_>>()
            })
            .collect();
        out.sort_unstable();
        out
    }

    // ── Counting ──────────────────────────────────────────────────────────────

    /// Number of business days in `[start, end]`, both ends inclusive.
    ///
    /// A reversed range (`start > end`) is empty and yields `0`.
    pub fn count_business_days(&self, start: NaiveDate, end: NaiveDate) -> DayCount {
        if start > end {
            return 0;
        }
        if start == end {
            return DayCount::from(self.is_business_date(start));
        }
        // keyed by the exact pair; reversed ranges never reach the cache
        let key = (start, end);
        if let Some(count) = self.cache.get(&key) {
            tracing::trace!(%start, %end, count, "range cache hit");
            return count;
        }
        let span = (end - start).num_days();
        let count = if span < DIRECT_COUNT_MAX_SPAN {
            tracing::trace!(%start, %end, span, "counting by direct enumeration");
            self.count_business_days_direct(start, end)
        } else {
            tracing::trace!(%start, %end, span, "counting in closed form");
            self.count_business_days_closed_form(start, end)
        };
        self.cache.put(key, count);
        count
    }

    /// Count by visiting every day of `[start, end]`.  Uncached.
    pub fn count_business_days_direct(&self, start: NaiveDate, end: NaiveDate) -> DayCount {
        if start > end {
            return 0;
        }
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| self.is_business_date(*d))
            .count() as DayCount
    }

    /// Count without visiting every day of `[start, end]`.  Uncached.
    pub fn count_business_days_closed_form(&self, start: NaiveDate, end: NaiveDate) -> DayCount {
        if start > end {
            return 0;
        }
        let week = DayCount::from(DAYS_PER_WEEK);
        let total_days = (end - start).num_days() + 1;
        let complete_weeks = total_days / week;
        let remainder = total_days % week;

        let first = DayCount::from(weekday_index(start));
        let remainder_weekend = (0..remainder)
            .filter(|i| self.weekend.contains(((first + i) % week) as u8))
            .count() as DayCount;
        let weekend_days = complete_weeks * DayCount::from(self.weekend.len()) + remainder_weekend;

        let mut holiday_days: DayCount = 0;
        let mut weekend_holidays: DayCount = 0;
        for year in start.year()..=end.year() {
            let holidays = self.holidays_for_year(year);
            for d in holidays.iter().filter(|d| **d >= start && **d <= end) {
                holiday_days += 1;
                if self.is_weekend(*d) {
                    weekend_holidays += 1;
                }
            }
        }

        (total_days - weekend_days - holiday_days + weekend_holidays).max(0)
    }

    // ── Shifting ──────────────────────────────────────────────────────────────

    /// The date `n` business days after `start` (before it if `n < 0`).
    ///
    /// `start` itself is never counted; `n == 0` returns `start` unchanged
    /// even if it is not a business day.
    ///
    /// # Errors
    /// Returns [`Error::DateOutOfRange`] if the walk leaves chrono's
    /// representable range.
    pub fn add_business_days(&self, start: NaiveDate, n: i64) -> Result<NaiveDate> {
        match n {
            0 => Ok(start),
            n if n < 0 => self.subtract_business_days(start, negate(n)?),
            n if n <= DIRECT_ADD_MAX => self.walk_forward(start, n),
            n => self.add_estimated(start, n),
        }
    }

    /// The date `n` business days before `start` (after it if `n < 0`).
    ///
    /// # Errors
    /// Returns [`Error::DateOutOfRange`] if the walk leaves chrono's
    /// representable range.
    pub fn subtract_business_days(&self, start: NaiveDate, n: i64) -> Result<NaiveDate> {
        if n < 0 {
            return self.add_business_days(start, negate(n)?);
        }
        self.walk_backward(start, n)
    }

    fn walk_forward(&self, start: NaiveDate, n: i64) -> Result<NaiveDate> {
        let mut date = start;
        let mut passed = 0;
        while passed < n {
            date = succ(date)?;
            if self.is_business_date(date) {
                passed += 1;
            }
        }
        Ok(date)
    }

    fn walk_backward(&self, start: NaiveDate, n: i64) -> Result<NaiveDate> {
        let mut date = start;
        let mut passed = 0;
        while passed < n {
            date = pred(date)?;
            if self.is_business_date(date) {
                passed += 1;
            }
        }
        Ok(date)
    }

    /// Estimate the target from the business days per week, count what the
    /// estimate actually covers, then walk the difference.
    fn add_estimated(&self, start: NaiveDate, n: i64) -> Result<NaiveDate> {
        let week = i64::from(DAYS_PER_WEEK);
        let per_week = week - i64::from(self.weekend.len());
        let calendar_days = n
            .checked_mul(week)
            .map(|days| days / per_week)
            .ok_or_else(|| Error::DateOutOfRange(format!("{n} business days from {start}")))?;
        let estimated = add_days(start, calendar_days)?;
        // (start, estimated]: the start itself is not one of the n days
        let actual = self.count_business_days(succ(start)?, estimated);
        tracing::trace!(%start, n, %estimated, actual, "refining business-day estimate");

        if actual < n {
            return self.walk_forward(estimated, n - actual);
        }
        // the actual-th business day is `estimated` or the last one before it
        let anchor = if self.is_business_date(estimated) {
            estimated
        } else {
            self.previous_business_day(estimated)?
        };
        self.walk_backward(anchor, actual - n)
    }

    /// The first business day strictly after `date`.
    pub fn next_business_day(&self, date: NaiveDate) -> Result<NaiveDate> {
        self.walk_forward(date, 1)
    }

    /// The last business day strictly before `date`.
    pub fn previous_business_day(&self, date: NaiveDate) -> Result<NaiveDate> {
        self.walk_backward(date, 1)
    }

    // ── Adjustment ────────────────────────────────────────────────────────────

    /// Adjust `date` according to the given business-day convention.
    pub fn adjust(&self, date: NaiveDate, convention: BusinessDayConvention) -> Result<NaiveDate> {
        if convention == BusinessDayConvention::EndOfMonth {
            return self.end_of_month(date);
        }
        if convention == BusinessDayConvention::Unadjusted || self.is_business_date(date) {
            return Ok(date);
        }
        match convention {
            BusinessDayConvention::Following => self.next_business_day(date),
            BusinessDayConvention::Preceding => self.previous_business_day(date),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.next_business_day(date)?;
                if adjusted.month() != date.month() {
                    self.previous_business_day(date)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.previous_business_day(date)?;
                if adjusted.month() != date.month() {
                    self.next_business_day(date)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Nearest => {
                let fwd = self.next_business_day(date)?;
                let bwd = self.previous_business_day(date)?;
                if (fwd - date) <= (date - bwd) {
                    Ok(fwd)
                } else {
                    Ok(bwd)
                }
            }
            BusinessDayConvention::Unadjusted | BusinessDayConvention::EndOfMonth => Ok(date),
        }
    }

    /// The last business day of the month containing `date`.
    pub fn end_of_month(&self, date: NaiveDate) -> Result<NaiveDate> {
        self.adjust(end_of_month(date), BusinessDayConvention::Preceding)
    }

    /// Return `true` if `date` is the last business day of its month.
    pub fn is_end_of_month(&self, date: NaiveDate) -> bool {
        self.end_of_month(date).is_ok_and(|last| last == date)
    }

    // ── Cache ─────────────────────────────────────────────────────────────────

    /// Occupancy and activity of the engine's caches.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop every cached holiday set and range count.
    pub fn clear_cache(&self) {
        tracing::debug!(calendar_type = %self.config.calendar_type, "clearing calendar caches");
        self.cache.clear();
    }
}

fn negate(n: i64) -> Result<i64> {
    n.checked_neg()
        .ok_or_else(|| Error::InvalidArgument(format!("cannot negate {n} business days")))
}
