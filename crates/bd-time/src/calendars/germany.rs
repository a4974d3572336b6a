//! Germany (Settlement) calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::HolidayRule;

/// Germany (Settlement) calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Good Friday
/// * Easter Monday
/// * Labour Day (May 1)
/// * Ascension Thursday
/// * Whit Monday
/// * German Unity Day (Oct 3)
/// * Christmas Eve (Dec 24)
/// * Christmas Day (Dec 25)
/// * Boxing Day (Dec 26)
/// * New Year's Eve (Dec 31)
pub static GERMANY: RuleCalendar = RuleCalendar::new("Germany (Settlement)", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::easter("Easter Monday", 1),
    HolidayRule::fixed("Labour Day", 5, 1),
    HolidayRule::easter("Ascension Thursday", 39),
    HolidayRule::easter("Whit Monday", 50),
    HolidayRule::fixed("German Unity Day", 10, 3),
    HolidayRule::fixed("Christmas Eve", 12, 24),
    HolidayRule::fixed("Christmas Day", 12, 25),
    HolidayRule::fixed("Boxing Day", 12, 26),
    HolidayRule::fixed("New Year's Eve", 12, 31),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;
    use crate::date::Date;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn movable_feasts_2023() {
        assert!(GERMANY.is_holiday(date(2023, 4, 7)));
        assert!(GERMANY.is_holiday(date(2023, 4, 10)));
        assert!(GERMANY.is_holiday(date(2023, 5, 18)));
        assert!(GERMANY.is_holiday(date(2023, 5, 29)));
    }

    #[test]
    fn unity_day() {
        assert!(GERMANY.is_holiday(date(2023, 10, 3)));
        assert!(!GERMANY.is_holiday(date(2023, 10, 4)));
    }
}
