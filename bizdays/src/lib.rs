//! # bizdays
//!
//! Business-day classification and settlement-date calculation over
//! per-country holiday calendars.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bizdays = "0.1"
//! ```
//!
//! ```rust
//! use bizdays::settlement::{format_utc, settlement_date, ParsedDate, ParsedDelay};
//!
//! let out = settlement_date(&ParsedDate::parse("2023-08-30"), ParsedDelay::parse("1"), "US");
//! assert_eq!(out.business_date.map(|d| format_utc(&d)).as_deref(), Some("2023-08-31T00:00:00Z"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and strict text parsers.
pub use bd_core as core;

/// Dates, holiday rules, and country calendars.
pub use bd_time as time;

/// Delay expansion, settlement dates, and business-day checks.
pub use bd_settlement as settlement;
