//! # bizcal-core
//!
//! Core types shared by every crate in the bizcal workspace: the error
//! hierarchy, the `ensure!` macro, and the parsing helpers that
//! turn caller-supplied date values or `YYYY-MM-DD` strings into
//! [`chrono::NaiveDate`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Date-input normalisation.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year as used by chrono (proleptic Gregorian, may be negative).
pub type Year = i32;

/// Count of days (business or calendar).
pub type DayCount = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use utilities::data_parsers::{parse_iso_date, IntoCalendarDate};

/// Re-export of the date type used throughout the workspace.
pub use chrono::NaiveDate;
