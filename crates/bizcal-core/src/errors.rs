//! Error types for bizcal.
//!
//! A single `thiserror`-derived enum covers every failure the workspace can
//! report.  Most of the calendar engine is fail-open (holiday-source failures
//! degrade to "no holidays"), so in practice callers only see [`Error::Parse`]
//! at the string boundary and [`Error::DateOutOfRange`] from arithmetic that
//! walks past chrono's representable range.

use thiserror::Error;

/// The top-level error type used throughout bizcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("cannot parse {input:?} as a YYYY-MM-DD date")]
    Parse {
        /// The offending input.
        input: String,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Date arithmetic left the representable range.
    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    /// A holiday data source failed for a region/year.
    #[error("holiday source failed for region {region} in {year}: {reason}")]
    HolidaySource {
        /// Region code passed to the source.
        region: String,
        /// Year requested.
        year: i32,
        /// Source-specific description.
        reason: String,
    },

    /// A holiday data source does not know the requested region.
    #[error("unsupported holiday region: {0}")]
    UnsupportedRegion(String),
}

/// Shorthand `Result` type used throughout bizcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bizcal_core::{ensure, errors::Error};
/// fn positive(x: i64) -> bizcal_core::errors::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
