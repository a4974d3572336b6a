//! `HolidayCalendar` trait and the rule-table calendar behind every country.
//!
//! A calendar answers a single question: is a date a public holiday in its
//! jurisdiction? Weekend handling lives in [`crate::classifier`]; the
//! default methods here only compose the two.

use crate::classifier;
use crate::date::Date;
use crate::holiday::{holidays_in, Holiday, HolidayRule};

/// A jurisdiction's public-holiday calendar.
///
/// Implementations are immutable values, so a single instance can be shared
/// freely between threads.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"United States (Federal)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a public holiday, including weekend
    /// holidays and weekday substitutes for them.
    fn is_holiday(&self, date: Date) -> bool;

    /// All holidays of `year`, sorted by date.
    fn holidays(&self, year: i32) -> Vec<Holiday>;

    /// Return `true` if `date` is neither a weekend day nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        classifier::is_business_day(date, self)
    }
}

/// A calendar defined by a static table of [`HolidayRule`]s.
#[derive(Debug, Clone, Copy)]
pub struct RuleCalendar {
    name: &'static str,
    rules: &'static [HolidayRule],
}

impl RuleCalendar {
    /// Build a calendar from a rule table.
    pub const fn new(name: &'static str, rules: &'static [HolidayRule]) -> Self {
        Self { name, rules }
    }

    /// The rule table.
    pub fn rules(&self) -> &'static [HolidayRule] {
        self.rules
    }
}

impl HolidayCalendar for RuleCalendar {
    fn name(&self) -> &str {
        self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        // Substitutes may cross a year boundary (Jan 1 on a Saturday is
        // observed on Dec 31), so the neighbouring years are expanded too.
        let year = date.year();
        (year - 1..=year + 1)
            .any(|y| holidays_in(self.rules, y).iter().any(|h| h.date == date))
    }

    fn holidays(&self, year: i32) -> Vec<Holiday> {
        let mut list: Vec<Holiday> = (year - 1..=year + 1)
            .flat_map(|y| holidays_in(self.rules, y))
            .filter(|h| h.date.year() == year)
            .collect();
        list.sort_by_key(|h| h.date);
        list
    }
}

/// A calendar with no holidays: only Saturdays and Sundays are non-business
/// days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl HolidayCalendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }

    fn holidays(&self, _year: i32) -> Vec<Holiday> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::{HolidayKind, Observance};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    static RULES: [HolidayRule; 2] = [
        HolidayRule::fixed("New Year's Day", 1, 1).observed(Observance::NearestWeekday),
        HolidayRule::fixed("Christmas Day", 12, 25).observed(Observance::NearestWeekday),
    ];
    static CAL: RuleCalendar = RuleCalendar::new("Test", &RULES);

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2023-09-02 is a Saturday
        assert!(!cal.is_business_day(date(2023, 9, 2)));
        assert!(!cal.is_holiday(date(2023, 9, 2)));
        assert!(cal.is_business_day(date(2023, 9, 4)));
    }

    #[test]
    fn substitute_crosses_year_boundary() {
        // 2022-01-01 is a Saturday, observed Friday 2021-12-31
        assert!(CAL.is_holiday(date(2021, 12, 31)));
        let in_2021 = CAL.holidays(2021);
        assert!(in_2021
            .iter()
            .any(|h| h.date == date(2021, 12, 31) && h.kind == HolidayKind::Substitute));
        assert!(CAL.holidays(2022).iter().all(|h| h.date.year() == 2022));
    }

    #[test]
    fn weekend_holiday_is_still_a_holiday() {
        // 2023-01-01 is a Sunday
        assert!(CAL.is_holiday(date(2023, 1, 1)));
        assert!(CAL.is_holiday(date(2023, 1, 2)));
        assert!(!CAL.is_business_day(date(2023, 1, 2)));
    }

    #[test]
    fn ordinary_day() {
        assert!(!CAL.is_holiday(date(2023, 6, 15)));
        assert!(CAL.is_business_day(date(2023, 6, 15)));
    }
}
