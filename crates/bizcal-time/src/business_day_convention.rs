//! Business-day conventions.

/// How to adjust a date that falls on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BusinessDayConvention {
    /// Choose the first business day after the given holiday.
    #[default]
    Following,
    /// Choose the first business day after the given holiday unless it belongs
    /// to a different month; in that case choose the first business day before
    /// the holiday.
    ModifiedFollowing,
    /// Choose the first business day before the given holiday.
    Preceding,
    /// Choose the first business day before the given holiday unless it belongs
    /// to a different month; in that case choose the first business day after
    /// the holiday.
    ModifiedPreceding,
    /// Do not adjust.
    Unadjusted,
    /// Choose the nearest business day.  Ties go to the following one.
    Nearest,
    /// Choose the last business day of the same month.
    EndOfMonth,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Nearest => "Nearest",
            BusinessDayConvention::EndOfMonth => "End of Month",
        };
        write!(f, "{s}")
    }
}
