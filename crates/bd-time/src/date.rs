//! `Date` type.
//!
//! A calendar day with no time-of-day component, backed by
//! [`chrono::NaiveDate`].
//!
//! # Range
//! * Any year chrono can represent is valid; holiday rules resolve in every
//!   year.
//! * Every constructor and every arithmetic operation checks the range and
//!   returns an error instead of panicking.

use bd_core::errors::{Error, Result};
use bd_core::utilities::{parse_iso_basic_date, parse_iso_date, parse_iso_ordinal_date};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// A range-checked calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| Error::Date(format!("year {year} is outside the representable range")))
    }

    /// Create a date from year and day of the year (1–366).
    pub fn from_ordinal(year: i32, ordinal: u32) -> Result<Self> {
        NaiveDate::from_yo_opt(year, ordinal)
            .map(Date)
            .ok_or_else(|| Error::Date(format!("day {ordinal} does not exist in {year}")))
    }

    /// Wrap a [`NaiveDate`].
    pub fn from_naive(date: NaiveDate) -> Date {
        Date(date)
    }

    /// Parse an ISO 8601 calendar date: extended (`YYYY-MM-DD`), basic
    /// (`YYYYMMDD`) or ordinal (`YYYY-DDD`, `YYYYDDD`).
    ///
    /// ```
    /// use bd_time::Date;
    /// assert!(Date::parse_iso("2023-08-30").is_ok());
    /// assert_eq!(Date::parse_iso("2023-242").unwrap().to_string(), "2023-08-30");
    /// assert!(Date::parse_iso("2023-02-30").is_err());
    /// assert!(Date::parse_iso("01012023").is_err());
    /// ```
    pub fn parse_iso(s: &str) -> Result<Self> {
        if let Some((y, m, d)) = parse_iso_date(s).or_else(|| parse_iso_basic_date(s)) {
            return Self::from_ymd(y, m, d);
        }
        let (y, ordinal) = parse_iso_ordinal_date(s)
            .ok_or_else(|| Error::Date(format!("{s:?} is not an ISO 8601 date")))?;
        Self::from_ordinal(y, ordinal)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Return the underlying [`NaiveDate`].
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative moves backwards).
    ///
    /// Returns an error if the result leaves the representable range.
    pub fn add_days(self, n: i64) -> Result<Self> {
        let shifted = if n >= 0 {
            self.0.checked_add_days(Days::new(n.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(n.unsigned_abs()))
        };
        shifted
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{self} shifted by {n} days overflows")))
    }

    /// The following calendar day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_until(self, other: Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Return the *n*-th occurrence of `weekday` in `month` of `year`.
    ///
    /// For example, `nth_weekday(1, Weekday::Mon, 2023, 9)` is Labor Day
    /// 2023-09-04.
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: u32) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let skip = (weekday.num_days_from_monday() + 7
            - first.weekday().num_days_from_monday())
            % 7;
        let day = 1 + skip + 7 * (u32::from(n) - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }

    /// Return the last occurrence of `weekday` in `month` of `year`.
    pub fn last_weekday(weekday: Weekday, year: i32, month: u32) -> Result<Self> {
        let last = Date::from_ymd(year, month, days_in_month(year, month))?;
        last.weekday_on_or_before(weekday)
    }

    /// Return the latest date that is on or before `self` and falls on
    /// `weekday`.
    pub fn weekday_on_or_before(self, weekday: Weekday) -> Result<Self> {
        let back = (self.weekday().num_days_from_monday() + 7
            - weekday.num_days_from_monday())
            % 7;
        self.add_days(-i64::from(back))
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_iso(s)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
