//! Miscellaneous utilities.

/// Parsing of caller-supplied date inputs.
pub mod data_parsers;
