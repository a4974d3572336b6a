//! Holiday rules.
//!
//! A country calendar is a static table of [`HolidayRule`]s. Each rule knows
//! how to place its holiday in a given year ([`DateRule`]), which years it
//! applies to, and how the holiday is observed when it falls on a weekend
//! ([`Observance`]).

use crate::date::Date;
use bd_core::errors::Result;
use chrono::Weekday;

/// How a holiday's date is determined in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// The same month/day every year.
    Fixed {
        /// Month (1–12).
        month: u32,
        /// Day of month.
        day: u32,
    },
    /// The *n*-th `weekday` of `month` (e.g. 1st Monday of September).
    NthWeekday {
        /// Occurrence, starting at 1.
        n: u8,
        /// Weekday.
        weekday: Weekday,
        /// Month (1–12).
        month: u32,
    },
    /// The last `weekday` of `month` (e.g. last Monday of May).
    LastWeekday {
        /// Weekday.
        weekday: Weekday,
        /// Month (1–12).
        month: u32,
    },
    /// The `weekday` on or before `month`/`day` (e.g. Monday on or before May 24).
    WeekdayOnOrBefore {
        /// Weekday.
        weekday: Weekday,
        /// Month (1–12).
        month: u32,
        /// Day of month.
        day: u32,
    },
    /// A number of days relative to (Western) Easter Sunday.
    Easter(i64),
    /// A single dated event.
    OneOff {
        /// Year.
        year: i32,
        /// Month (1–12).
        month: u32,
        /// Day of month.
        day: u32,
    },
}

impl DateRule {
    /// The date this rule yields in `year`, or `None` if it yields nothing
    /// (one-off events in other years, dates chrono cannot represent).
    pub fn resolve(&self, year: i32) -> Option<Date> {
        let date = match *self {
            DateRule::Fixed { month, day } => Date::from_ymd(year, month, day),
            DateRule::NthWeekday { n, weekday, month } => {
                Date::nth_weekday(n, weekday, year, month)
            }
            DateRule::LastWeekday { weekday, month } => Date::last_weekday(weekday, year, month),
            DateRule::WeekdayOnOrBefore {
                weekday,
                month,
                day,
            } => Date::from_ymd(year, month, day).and_then(|d| d.weekday_on_or_before(weekday)),
            DateRule::Easter(offset) => easter_sunday(year).and_then(|d| d.add_days(offset)),
            DateRule::OneOff {
                year: y,
                month,
                day,
            } => {
                if y != year {
                    return None;
                }
                Date::from_ymd(y, month, day)
            }
        };
        date.ok()
    }
}

/// What happens when a holiday falls on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observance {
    /// Only the actual date is a holiday.
    Actual,
    /// Saturday is observed on the Friday before, Sunday on the Monday after.
    NearestWeekday,
    /// Sunday is observed on the Monday after; Saturday is not moved.
    SundayToMonday,
    /// Observed on the next weekday not already taken by another holiday of
    /// the same year.
    NextFreeWeekday,
}

impl Observance {
    /// The substitute date for a holiday falling on `actual`, if any.
    ///
    /// `taken` reports whether a date is already occupied by another holiday.
    pub fn substitute(self, actual: Date, taken: impl Fn(Date) -> bool) -> Option<Date> {
        let weekday = actual.weekday();
        if !is_weekend_day(weekday) {
            return None;
        }
        match self {
            Observance::Actual => None,
            Observance::NearestWeekday => match weekday {
                Weekday::Sat => actual.add_days(-1).ok(),
                _ => actual.add_days(1).ok(),
            },
            Observance::SundayToMonday => match weekday {
                Weekday::Sun => actual.add_days(1).ok(),
                _ => None,
            },
            Observance::NextFreeWeekday => {
                let mut d = actual.succ().ok()?;
                while is_weekend_day(d.weekday()) || taken(d) {
                    d = d.succ().ok()?;
                }
                Some(d)
            }
        }
    }
}

/// One holiday of a country calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayRule {
    /// Display name.
    pub name: &'static str,
    /// Placement within the year.
    pub date: DateRule,
    /// Weekend handling.
    pub observance: Observance,
    /// First year the holiday is observed.
    pub since: Option<i32>,
    /// Last year the holiday is observed.
    pub until: Option<i32>,
    /// Years in which the holiday is not observed.
    pub except: &'static [i32],
}

impl HolidayRule {
    /// A holiday observed on its actual date only, in every year.
    pub const fn new(name: &'static str, date: DateRule) -> Self {
        Self {
            name,
            date,
            observance: Observance::Actual,
            since: None,
            until: None,
            except: &[],
        }
    }

    /// Shorthand for a fixed month/day holiday.
    pub const fn fixed(name: &'static str, month: u32, day: u32) -> Self {
        Self::new(name, DateRule::Fixed { month, day })
    }

    /// Shorthand for the *n*-th weekday of a month.
    pub const fn nth(name: &'static str, n: u8, weekday: Weekday, month: u32) -> Self {
        Self::new(name, DateRule::NthWeekday { n, weekday, month })
    }

    /// Shorthand for the last weekday of a month.
    pub const fn last(name: &'static str, weekday: Weekday, month: u32) -> Self {
        Self::new(name, DateRule::LastWeekday { weekday, month })
    }

    /// Shorthand for the `weekday` on or before `month`/`day`.
    pub const fn on_or_before(
        name: &'static str,
        weekday: Weekday,
        month: u32,
        day: u32,
    ) -> Self {
        Self::new(
            name,
            DateRule::WeekdayOnOrBefore {
                weekday,
                month,
                day,
            },
        )
    }

    /// Shorthand for an Easter-relative holiday.
    pub const fn easter(name: &'static str, offset: i64) -> Self {
        Self::new(name, DateRule::Easter(offset))
    }

    /// Shorthand for a one-off dated event.
    pub const fn one_off(name: &'static str, year: i32, month: u32, day: u32) -> Self {
        Self::new(name, DateRule::OneOff { year, month, day })
    }

    /// Set the weekend observance.
    pub const fn observed(mut self, observance: Observance) -> Self {
        self.observance = observance;
        self
    }

    /// Observe from `year` onwards.
    pub const fn since(mut self, year: i32) -> Self {
        self.since = Some(year);
        self
    }

    /// Observe up to and including `year`.
    pub const fn until(mut self, year: i32) -> Self {
        self.until = Some(year);
        self
    }

    /// Skip the listed years.
    pub const fn except(mut self, years: &'static [i32]) -> Self {
        self.except = years;
        self
    }

    /// Whether the rule is in force in `year`.
    pub fn applies_in(&self, year: i32) -> bool {
        self.since.map_or(true, |s| year >= s)
            && self.until.map_or(true, |u| year <= u)
            && !self.except.contains(&year)
    }
}

/// Whether a holiday entry is the legal date or a weekend substitute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayKind {
    /// The holiday's own date.
    Actual,
    /// A weekday observed in place of a weekend holiday.
    Substitute,
}

/// A concrete holiday in a concrete year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Holiday {
    /// The calendar date.
    pub date: Date,
    /// Display name.
    pub name: &'static str,
    /// Actual or substitute.
    pub kind: HolidayKind,
}

/// Expand `rules` into the holidays of `year`, sorted by date.
///
/// Actual dates come first, in rule order; weekend substitutes are then
/// assigned in rule order, so a substitute never lands on a date already held
/// by another holiday when the rule uses [`Observance::NextFreeWeekday`].
pub fn holidays_in(rules: &[HolidayRule], year: i32) -> Vec<Holiday> {
    let actuals: Vec<(&HolidayRule, Date)> = rules
        .iter()
        .filter(|rule| rule.applies_in(year))
        .filter_map(|rule| rule.date.resolve(year).map(|d| (rule, d)))
        .collect();

    let mut holidays: Vec<Holiday> = actuals
        .iter()
        .map(|&(rule, date)| Holiday {
            date,
            name: rule.name,
            kind: HolidayKind::Actual,
        })
        .collect();

    for &(rule, actual) in &actuals {
        let substitute = rule
            .observance
            .substitute(actual, |d| holidays.iter().any(|h| h.date == d));
        if let Some(date) = substitute {
            holidays.push(Holiday {
                date,
                name: rule.name,
                kind: HolidayKind::Substitute,
            });
        }
    }

    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Western Easter Sunday for `year` (Oudin's algorithm).
pub fn easter_sunday(year: i32) -> Result<Date> {
    let g = year % 19;
    let c = year / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (year + year / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    Date::from_ymd(year, month as u32, day as u32)
}

fn is_weekend_day(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}
