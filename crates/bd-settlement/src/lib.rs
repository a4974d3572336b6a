//! # bd-settlement
//!
//! Settlement-date calculation on top of the `bd-time` calendars.
//!
//! Request text is parsed once into [`ParsedDate`] / [`ParsedDelay`]; the
//! calculator and the business-day predicate then work on typed values and
//! degrade to a `null`/`false` answer instead of failing.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day predicate at the request boundary.
pub mod business_day;

/// Delay expansion over weekends and holidays.
pub mod expansion;

/// Parsed request parameters.
pub mod params;

/// Settlement-date calculator.
pub mod settlement;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day::business_day;
pub use expansion::{expand_delay, DelayExpansion};
pub use params::{CalendarDate, ParsedDate, ParsedDelay, MAX_DELAY, MIN_DELAY};
pub use settlement::{format_utc, settle, settlement_date, Settlement, SettlementOutcome};
