//! Request parameters, parsed once at the boundary.
//!
//! Query strings arrive as free text. They are turned into [`ParsedDate`] and
//! [`ParsedDelay`] here, so that the calculators never see raw strings and an
//! unusable value is a distinct, explicit state.

use bd_core::errors::{Error, Result};
use bd_core::utilities::parse_integer;
use bd_time::Date;
use chrono::{DateTime, FixedOffset, NaiveTime, Offset, TimeZone, Timelike, Utc};

/// Smallest accepted settlement delay, in business days.
pub const MIN_DELAY: u32 = 1;

/// Largest accepted settlement delay, in business days.
pub const MAX_DELAY: u32 = 365;

/// Time-of-day layouts accepted after the `T`, once any offset is removed.
const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M", "%H%M%S%.f", "%H%M"];

/// An instant as written by the caller: local calendar date, time of day and
/// UTC offset.
///
/// Weekday and holiday checks use the *local* calendar date; the offset only
/// matters when the result is converted back to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    date: Date,
    time: NaiveTime,
    offset: FixedOffset,
}

impl CalendarDate {
    /// Parse ISO 8601 text.
    ///
    /// The date is written in extended (`2023-08-30`), basic (`20230830`) or
    /// ordinal (`2023-242`) form. On its own it is taken as UTC midnight. A
    /// time of day may follow after `T` (or a space) as `HH`, `HH:MM`,
    /// `HH:MM:SS[.fff]` or their basic forms, with an optional `Z`, `±HH:MM`,
    /// `±HHMM` or `±HH` offset. A time without an offset is UTC.
    ///
    /// Year-only (`2023`), year-month (`2023-08`) and week dates
    /// (`2023-W35-3`) are not accepted.
    ///
    /// ```
    /// use bd_settlement::CalendarDate;
    /// let d = CalendarDate::parse("2023-08-30T23:30:00-05:00").unwrap();
    /// assert_eq!(d.date().to_string(), "2023-08-30");
    /// assert_eq!(CalendarDate::parse("2023-242").unwrap().date().to_string(), "2023-08-30");
    /// assert!(CalendarDate::parse("2023-02-30").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let invalid = || Error::Date(format!("{text:?} is not an ISO 8601 date or date-time"));
        let (date_part, time_part) = match text.find(|c: char| c == 'T' || c == 't' || c == ' ') {
            Some(i) => (&text[..i], Some(&text[i + 1..])),
            None => (text, None),
        };
        let date = Date::parse_iso(date_part)?;
        let Some(time_part) = time_part else {
            return Ok(Self::at_midnight_utc(date));
        };
        let (clock, offset) = split_offset(time_part).ok_or_else(invalid)?;
        let time = parse_time_of_day(clock).ok_or_else(invalid)?;
        Ok(Self { date, time, offset })
    }

    /// Midnight UTC on `date`.
    pub fn at_midnight_utc(date: Date) -> Self {
        Self {
            date,
            time: NaiveTime::MIN,
            offset: Utc.fix(),
        }
    }

    /// The local calendar date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The local time of day.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// The UTC offset the text was written in.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The same local time of day `days` calendar days later, as a UTC
    /// instant truncated to whole seconds.
    pub fn shifted_utc(&self, days: i64) -> Result<DateTime<Utc>> {
        let local = self.date.add_days(days)?.naive().and_time(self.time);
        let instant = self
            .offset
            .from_local_datetime(&local)
            .single()
            .ok_or_else(|| Error::Date(format!("{local} has no single instant at {}", self.offset)))?
            .with_timezone(&Utc);
        Ok(instant.with_nanosecond(0).unwrap_or(instant))
    }
}

/// Split a trailing UTC designator off a time of day. No designator is UTC.
fn split_offset(text: &str) -> Option<(&str, FixedOffset)> {
    if let Some(clock) = text.strip_suffix(['Z', 'z']) {
        return Some((clock, Utc.fix()));
    }
    let Some(i) = text.rfind(['+', '-']) else {
        return Some((text, Utc.fix()));
    };
    let (clock, designator) = text.split_at(i);
    let sign = if designator.starts_with('-') { -1 } else { 1 };
    let digits = &designator[1..];
    let (hh, mm) = match digits.len() {
        2 => (digits, "00"),
        4 => digits.split_at(2),
        5 if digits.as_bytes()[2] == b':' => (&digits[..2], &digits[3..]),
        _ => return None,
    };
    if !(hh.bytes().all(|b| b.is_ascii_digit()) && mm.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    let (hours, minutes): (i32, i32) = (hh.parse().ok()?, mm.parse().ok()?);
    if hours > 23 || minutes > 59 {
        return None;
    }
    let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))?;
    Some((clock, offset))
}

fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    if text.len() == 2 && text.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveTime::from_hms_opt(text.parse().ok()?, 0, 0);
    }
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
}

/// A date parameter after boundary parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDate {
    /// The text named a real calendar day.
    Valid(CalendarDate),
    /// Wrong format, impossible day or out of range.
    Invalid,
}

impl ParsedDate {
    /// Parse request text. Never fails; unusable text is [`ParsedDate::Invalid`].
    pub fn parse(text: &str) -> Self {
        match CalendarDate::parse(text) {
            Ok(date) => ParsedDate::Valid(date),
            Err(err) => {
                tracing::debug!(input = text, error = %err, "unparseable date");
                ParsedDate::Invalid
            }
        }
    }

    /// The parsed value, if valid.
    pub fn valid(&self) -> Option<&CalendarDate> {
        match self {
            ParsedDate::Valid(date) => Some(date),
            ParsedDate::Invalid => None,
        }
    }
}

impl From<Date> for ParsedDate {
    fn from(date: Date) -> Self {
        ParsedDate::Valid(CalendarDate::at_midnight_utc(date))
    }
}

/// A delay parameter after boundary parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDelay {
    /// A whole number of business days in `MIN_DELAY..=MAX_DELAY`.
    Valid(u32),
    /// Non-numeric, fractional, or out of range. The cases are not
    /// distinguished.
    Invalid,
}

impl ParsedDelay {
    /// Parse request text as a base-10 integer delay.
    ///
    /// ```
    /// use bd_settlement::ParsedDelay;
    /// assert_eq!(ParsedDelay::parse("3"), ParsedDelay::Valid(3));
    /// assert_eq!(ParsedDelay::parse("3.5"), ParsedDelay::Invalid);
    /// assert_eq!(ParsedDelay::parse("366"), ParsedDelay::Invalid);
    /// ```
    pub fn parse(text: &str) -> Self {
        match parse_integer(text) {
            Some(n) => Self::from_days(n),
            None => {
                tracing::debug!(input = text, "non-integer delay");
                ParsedDelay::Invalid
            }
        }
    }

    /// Range-check an integer delay.
    pub fn from_days(n: i64) -> Self {
        match u32::try_from(n) {
            Ok(days) if (MIN_DELAY..=MAX_DELAY).contains(&days) => ParsedDelay::Valid(days),
            _ => {
                tracing::debug!(delay = n, "delay out of range");
                ParsedDelay::Invalid
            }
        }
    }

    /// The delay in business days, if valid.
    pub fn days(self) -> Option<u32> {
        match self {
            ParsedDelay::Valid(days) => Some(days),
            ParsedDelay::Invalid => None,
        }
    }
}
