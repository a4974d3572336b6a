//! # bd-time
//!
//! Dates, weekday arithmetic, holiday rules, and per-country holiday
//! calendars.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and built-in implementations.
pub mod calendar;

/// Concrete calendar implementations (country specific).
pub mod calendars;

/// Weekend / holiday / business-day classification.
pub mod classifier;

/// Country code → calendar lookup.
pub mod country;

/// `Date` type.
pub mod date;

/// Holiday rules, observance policies, and Easter.
pub mod holiday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, RuleCalendar, WeekendsOnly};
pub use chrono::Weekday;
pub use classifier::{classify, is_business_day, is_holiday, is_weekend, DayKind};
pub use country::{calendar_for, calendar_for_code, CountryCode, SUPPORTED_COUNTRIES};
pub use date::Date;
pub use holiday::{easter_sunday, DateRule, Holiday, HolidayKind, HolidayRule, Observance};
