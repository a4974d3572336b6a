//! Utilities sub-module: strict parsers for boundary input.

/// Strict shape-checking parsers.
pub mod data_parsers;

pub use data_parsers::{
    parse_integer, parse_iso_basic_date, parse_iso_date, parse_iso_ordinal_date,
};
