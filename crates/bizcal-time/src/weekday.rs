//! `WeekdaySet`: a set of day-of-week indices.
//!
//! Weekdays are numbered 0–6 (Monday = 0, Sunday = 6), matching
//! [`chrono::Weekday::num_days_from_monday`].  The set is stored as a 7-bit
//! mask so membership tests are a single shift-and-mask.

use chrono::{Datelike, NaiveDate, Weekday};

/// Number of days in a week.
pub const DAYS_PER_WEEK: u8 = 7;

const FULL_MASK: u8 = (1 << DAYS_PER_WEEK) - 1;

/// Return the weekday index of `date` (Monday = 0 … Sunday = 6).
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// A set of weekday indices (0 = Monday … 6 = Sunday).
///
/// Indices outside `0..=6` are ignored on insertion, so every value of this
/// type is a valid subset of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set.
    pub const EMPTY: WeekdaySet = WeekdaySet(0);

    /// Build a set from weekday indices, skipping anything above 6.
    pub fn from_indices<I: IntoIterator<Item = u8>>(indices: I) -> Self {
        let mut set = Self::EMPTY;
        for i in indices {
            set.insert(i);
        }
        set
    }

    /// Build a set from chrono weekdays.
    pub fn from_weekdays<I: IntoIterator<Item = Weekday>>(days: I) -> Self {
        Self::from_indices(days.into_iter().map(|w| w.num_days_from_monday() as u8))
    }

    /// Insert `index`.  Returns `true` if it was not already present.
    ///
    /// Out-of-range indices are ignored and return `false`.
    pub fn insert(&mut self, index: u8) -> bool {
        if index >= DAYS_PER_WEEK || self.contains(index) {
            return false;
        }
        self.0 |= 1 << index;
        true
    }

    /// Return `true` if `index` is in the set.
    pub const fn contains(self, index: u8) -> bool {
        index < DAYS_PER_WEEK && self.0 & (1 << index) != 0
    }

    /// Return `true` if `weekday` is in the set.
    pub fn contains_weekday(self, weekday: Weekday) -> bool {
        self.contains(weekday.num_days_from_monday() as u8)
    }

    /// Number of weekdays in the set.
    pub const fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Return `true` if the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if every day of the week is in the set.
    pub const fn is_full(self) -> bool {
        self.0 == FULL_MASK
    }

    /// Iterate over the indices in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..DAYS_PER_WEEK).filter(move |&i| self.contains(i))
    }
}

impl FromIterator<u8> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::from_indices(iter)
    }
}

impl From<Vec<u8>> for WeekdaySet {
    fn from(indices: Vec<u8>) -> Self {
        Self::from_indices(indices)
    }
}

impl From<WeekdaySet> for Vec<u8> {
    fn from(set: WeekdaySet) -> Self {
        set.iter().collect()
    }
}

impl std::fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        let names: Vec<&str> = self.iter().map(|i| NAMES[i as usize]).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_index_matches_chrono() {
        // 2024-06-03 is a Monday, 2024-06-09 a Sunday
        let mon = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let sun = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        assert_eq!(weekday_index(mon), 0);
        assert_eq!(weekday_index(sun), 6);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let set = WeekdaySet::from_indices([5, 6, 7, 200]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(5));
        assert!(set.contains(6));
        assert!(!set.contains(7));
    }

    #[test]
    fn insert_reports_novelty() {
        let mut set = WeekdaySet::EMPTY;
        assert!(set.is_empty());
        assert!(set.insert(4));
        assert!(!set.insert(4));
        assert!(!set.insert(9));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn full_week() {
        let set: WeekdaySet = (0..7).collect();
        assert!(set.is_full());
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn display_lists_day_names() {
        let set = WeekdaySet::from_weekdays([Weekday::Sun, Weekday::Fri]);
        assert_eq!(set.to_string(), "{Fri, Sun}");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn membership_matches_the_input(indices in proptest::collection::vec(0u8..12, 0..10)) {
                let set = WeekdaySet::from_indices(indices.iter().copied());
                for i in 0..DAYS_PER_WEEK {
                    prop_assert_eq!(set.contains(i), indices.contains(&i));
                }
                let distinct: std::collections::BTreeSet<u8> =
                    indices.iter().copied().filter(|i| *i < DAYS_PER_WEEK).collect();
                prop_assert_eq!(usize::from(set.len()), distinct.len());
                prop_assert!(set.iter().eq(distinct.into_iter()));
            }
        }
    }
}
