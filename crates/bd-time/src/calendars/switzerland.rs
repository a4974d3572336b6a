//! Switzerland calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::HolidayRule;

/// Switzerland calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1) and Berchtoldstag (Jan 2)
/// * Good Friday and Easter Monday
/// * Ascension Thursday
/// * Whit Monday
/// * Swiss National Day (Aug 1)
/// * Christmas Day (Dec 25) and St. Stephen's Day (Dec 26)
pub static SWITZERLAND: RuleCalendar = RuleCalendar::new("Switzerland", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1),
    HolidayRule::fixed("Berchtoldstag", 1, 2),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::easter("Easter Monday", 1),
    HolidayRule::easter("Ascension Thursday", 39),
    HolidayRule::easter("Whit Monday", 50),
    HolidayRule::fixed("Swiss National Day", 8, 1),
    HolidayRule::fixed("Christmas Day", 12, 25),
    HolidayRule::fixed("St. Stephen's Day", 12, 26),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;
    use crate::date::Date;

    #[test]
    fn national_day() {
        assert!(SWITZERLAND.is_holiday(Date::from_ymd(2023, 8, 1).unwrap()));
        assert!(SWITZERLAND.is_holiday(Date::from_ymd(2023, 1, 2).unwrap()));
    }
}
