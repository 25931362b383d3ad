//! Calendar types.

use std::str::FromStr;

use bizcal_core::errors::{Error, Result};

/// Identifies which holiday rules a calendar draws from.
///
/// `Generic` and `Custom` have no built-in holidays; they only honour
/// caller-supplied custom holidays.  The default is `Brazil`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CalendarType {
    /// No built-in holidays.
    Generic,
    /// Brazilian national holidays.
    #[default]
    Brazil,
    /// United States federal holidays.
    UnitedStates,
    /// No built-in holidays; relies entirely on custom holidays.
    Custom,
}

impl CalendarType {
    /// All calendar types.
    pub const ALL: [CalendarType; 4] = [
        CalendarType::Generic,
        CalendarType::Brazil,
        CalendarType::UnitedStates,
        CalendarType::Custom,
    ];

    /// Region code passed to a [`HolidaySource`](crate::HolidaySource), or
    /// `None` for calendars without built-in holidays.
    pub fn region_code(self) -> Option<&'static str> {
        match self {
            CalendarType::Brazil => Some("BR"),
            CalendarType::UnitedStates => Some("US"),
            CalendarType::Generic | CalendarType::Custom => None,
        }
    }

    /// Return `true` if this calendar has statutory holidays.
    pub fn has_builtin_holidays(self) -> bool {
        self.region_code().is_some()
    }

    /// Look up a calendar type by name, falling back to
    /// [`CalendarType::Generic`] (no holidays) for anything unrecognised.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(
                calendar_type = name,
                "unknown calendar type, falling back to generic"
            );
            CalendarType::Generic
        })
    }
}

impl FromStr for CalendarType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalised = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalised.as_str() {
            "generic" => Ok(CalendarType::Generic),
            "brazil" | "br" => Ok(CalendarType::Brazil),
            "united_states" | "us" | "usa" => Ok(CalendarType::UnitedStates),
            "custom" => Ok(CalendarType::Custom),
            _ => Err(Error::InvalidArgument(format!("unknown calendar type {s:?}"))),
        }
    }
}

impl std::fmt::Display for CalendarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CalendarType::Generic => "Generic",
            CalendarType::Brazil => "Brazil",
            CalendarType::UnitedStates => "United States",
            CalendarType::Custom => "Custom",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_codes() {
        assert_eq!(CalendarType::Brazil.region_code(), Some("BR"));
        assert_eq!(CalendarType::UnitedStates.region_code(), Some("US"));
        assert_eq!(CalendarType::Generic.region_code(), None);
        assert_eq!(CalendarType::Custom.region_code(), None);
    }

    #[test]
    fn default_is_brazil() {
        assert_eq!(CalendarType::default(), CalendarType::Brazil);
    }

    #[test]
    fn parse_names() {
        assert_eq!("US".parse::<CalendarType>(), Ok(CalendarType::UnitedStates));
        assert_eq!(
            "united-states".parse::<CalendarType>(),
            Ok(CalendarType::UnitedStates)
        );
        assert_eq!(" Brazil ".parse::<CalendarType>(), Ok(CalendarType::Brazil));
        assert!("mars".parse::<CalendarType>().is_err());
    }

    #[test]
    fn unknown_name_has_no_holidays() {
        let ty = CalendarType::from_name("mars");
        assert_eq!(ty, CalendarType::Generic);
        assert!(!ty.has_builtin_holidays());
    }
}
