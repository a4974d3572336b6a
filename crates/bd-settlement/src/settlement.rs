//! Settlement-date calculator.
//!
//! The settlement date of a trade is the initial date moved forward by a
//! number of business days. The window scanned for weekends and holidays
//! starts the day *after* the initial date, so a delay of one business day
//! from a Wednesday lands on Thursday.

use bd_core::errors::Result;
use bd_time::{calendar_for_code, HolidayCalendar};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::expansion::{expand_delay, DelayExpansion};
use crate::params::{CalendarDate, ParsedDate, ParsedDelay};

/// A computed settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The settlement instant, in UTC, whole seconds.
    pub business_date: DateTime<Utc>,
    /// The calendar-day window behind it.
    pub expansion: DelayExpansion,
}

/// The answer returned to callers. Every field is `None` when the inputs
/// were unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettlementOutcome {
    /// The settlement instant.
    pub business_date: Option<DateTime<Utc>>,
    /// Weekday holidays skipped.
    pub holiday_days: Option<u32>,
    /// Calendar days spanned.
    pub total_days: Option<u32>,
    /// Weekend days skipped.
    pub weekend_days: Option<u32>,
}

impl SettlementOutcome {
    /// The outcome for unusable inputs.
    pub fn indeterminate() -> Self {
        Self::default()
    }

    /// `true` if no settlement date could be computed.
    pub fn is_indeterminate(&self) -> bool {
        self.business_date.is_none()
    }
}

impl From<Settlement> for SettlementOutcome {
    fn from(s: Settlement) -> Self {
        Self {
            business_date: Some(s.business_date),
            holiday_days: Some(s.expansion.holiday_days),
            total_days: Some(s.expansion.total_days),
            weekend_days: Some(s.expansion.weekend_days),
        }
    }
}

/// Move `initial` forward by `delay` business days of `calendar`.
///
/// The result keeps the initial time of day and offset and is returned in
/// UTC.
pub fn settle<C: HolidayCalendar + ?Sized>(
    initial: &CalendarDate,
    delay: u32,
    calendar: &C,
) -> Result<Settlement> {
    let start = initial.date().succ()?;
    let expansion = expand_delay(start, delay, calendar)?;
    let business_date = initial.shifted_utc(i64::from(expansion.total_days))?;
    Ok(Settlement {
        business_date,
        expansion,
    })
}

/// Settlement date for boundary-parsed inputs.
///
/// Returns [`SettlementOutcome::indeterminate`] when the date is invalid,
/// the delay is invalid, the country has no calendar, or the result would
/// leave the representable date range.
pub fn settlement_date(date: &ParsedDate, delay: ParsedDelay, country: &str) -> SettlementOutcome {
    let (Some(initial), Some(days)) = (date.valid(), delay.days()) else {
        tracing::debug!(?date, ?delay, "settlement inputs invalid");
        return SettlementOutcome::indeterminate();
    };
    let calendar = match calendar_for_code(country) {
        Ok(calendar) => calendar,
        Err(err) => {
            tracing::debug!(error = %err, "no calendar for settlement");
            return SettlementOutcome::indeterminate();
        }
    };
    match settle(initial, days, calendar) {
        Ok(settlement) => {
            tracing::debug!(
                calendar = calendar.name(),
                initial = %initial.date(),
                delay = days,
                business_date = %format_utc(&settlement.business_date),
                total_days = settlement.expansion.total_days,
                "settlement computed"
            );
            settlement.into()
        }
        Err(err) => {
            tracing::debug!(error = %err, "settlement out of range");
            SettlementOutcome::indeterminate()
        }
    }
}

/// Render an instant as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
