//! Weekend patterns.
//!
//! A [`WeekendPattern`] resolves to the [`WeekdaySet`] of non-working days.
//! Lookups by name are lenient: an unrecognised name falls back to
//! Saturday/Sunday rather than failing, so a misconfigured calendar still
//! behaves like a conventional one.

use std::str::FromStr;

use bizcal_core::errors::{Error, Result};

use crate::weekday::WeekdaySet;

/// Which days of the week are non-working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum WeekendPattern {
    /// Saturday and Sunday (indices 5, 6).
    #[default]
    SaturdaySunday,
    /// Friday and Saturday (indices 4, 5).
    FridaySaturday,
    /// An explicit set of weekday indices.
    Custom(WeekdaySet),
}

impl WeekendPattern {
    /// Resolve the pattern to its set of weekend weekday indices.
    pub fn weekend_days(self) -> WeekdaySet {
        match self {
            WeekendPattern::SaturdaySunday => WeekdaySet::from_indices([5, 6]),
            WeekendPattern::FridaySaturday => WeekdaySet::from_indices([4, 5]),
            WeekendPattern::Custom(set) => set,
        }
    }

    /// Look up a pattern by name, falling back to
    /// [`WeekendPattern::SaturdaySunday`] for anything unrecognised.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(
                pattern = name,
                "unknown weekend pattern, falling back to saturday_sunday"
            );
            WeekendPattern::SaturdaySunday
        })
    }
}

/// Resolve `pattern` to its set of weekend weekday indices.
pub fn weekend_days(pattern: WeekendPattern) -> WeekdaySet {
    pattern.weekend_days()
}

/// Return `true` if `weekday_index` (0 = Monday … 6 = Sunday) is a weekend
/// day in `weekend_set`.
pub fn is_weekend(weekday_index: u8, weekend_set: WeekdaySet) -> bool {
    weekend_set.contains(weekday_index)
}

impl FromStr for WeekendPattern {
    type Err = Error;

    /// Parse `saturday_sunday` / `friday_saturday` (case-insensitive, `-` or
    /// `_` separators accepted).  Custom patterns have no textual name.
    fn from_str(s: &str) -> Result<Self> {
        let normalised = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalised.as_str() {
            "saturday_sunday" | "sat_sun" => Ok(WeekendPattern::SaturdaySunday),
            "friday_saturday" | "fri_sat" => Ok(WeekendPattern::FridaySaturday),
            _ => Err(Error::InvalidArgument(format!(
                "unknown weekend pattern {s:?}"
            ))),
        }
    }
}

impl std::fmt::Display for WeekendPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeekendPattern::SaturdaySunday => write!(f, "Saturday/Sunday"),
            WeekendPattern::FridaySaturday => write!(f, "Friday/Saturday"),
            WeekendPattern::Custom(set) => write!(f, "Custom {set}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_patterns() {
        let sat_sun = weekend_days(WeekendPattern::SaturdaySunday);
        assert_eq!(sat_sun.iter().collect::<Vec<_>>(), vec![5, 6]);
        let fri_sat = weekend_days(WeekendPattern::FridaySaturday);
        assert_eq!(fri_sat.iter().collect::<Vec<_>>(), vec![4, 5]);
    }

    #[test]
    fn custom_pattern_is_passed_through() {
        let set = WeekdaySet::from_indices([6]);
        assert_eq!(weekend_days(WeekendPattern::Custom(set)), set);
    }

    #[test]
    fn is_weekend_is_total() {
        let set = WeekendPattern::SaturdaySunday.weekend_days();
        let flags: Vec<bool> = (0..7).map(|i| is_weekend(i, set)).collect();
        assert_eq!(flags, vec![false, false, false, false, false, true, true]);
    }

    #[test]
    fn names_parse_strictly() {
        assert_eq!(
            "Friday-Saturday".parse::<WeekendPattern>(),
            Ok(WeekendPattern::FridaySaturday)
        );
        assert!("thursday_friday".parse::<WeekendPattern>().is_err());
    }

    #[test]
    fn unknown_name_falls_back() {
        assert_eq!(
            WeekendPattern::from_name("thursday_friday"),
            WeekendPattern::SaturdaySunday
        );
        assert_eq!(
            WeekendPattern::from_name("fri_sat"),
            WeekendPattern::FridaySaturday
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_representation() {
        let custom = WeekendPattern::Custom(WeekdaySet::from_indices([4]));
        let json = serde_json::to_string(&custom).unwrap();
        assert_eq!(json, r#"{"custom":[4]}"#);
        let back: WeekendPattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, custom);
        let plain: WeekendPattern = serde_json::from_str(r#""friday_saturday""#).unwrap();
        assert_eq!(plain, WeekendPattern::FridaySaturday);
    }
}
