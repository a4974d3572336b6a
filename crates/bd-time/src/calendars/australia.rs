//! Australia calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::{HolidayRule, Observance::NextFreeWeekday};
use chrono::Weekday::Mon;

/// Australia calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1, adjusted to Monday if on weekend)
/// * Australia Day (Jan 26, adjusted to Monday if on weekend)
/// * Good Friday, Easter Saturday, Easter Monday
/// * Anzac Day (Apr 25)
/// * King's Birthday (2nd Monday of June)
/// * Christmas Day (Dec 25, adjusted)
/// * Boxing Day (Dec 26, adjusted)
pub static AUSTRALIA: RuleCalendar = RuleCalendar::new("Australia", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1).observed(NextFreeWeekday),
    HolidayRule::fixed("Australia Day", 1, 26).observed(NextFreeWeekday),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::easter("Easter Saturday", -1),
    HolidayRule::easter("Easter Monday", 1),
    HolidayRule::fixed("Anzac Day", 4, 25),
    HolidayRule::nth("King's Birthday", 2, Mon, 6),
    HolidayRule::fixed("Christmas Day", 12, 25).observed(NextFreeWeekday),
    HolidayRule::fixed("Boxing Day", 12, 26).observed(NextFreeWeekday),
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
    fn kings_birthday_2023() {
        assert!(AUSTRALIA.is_holiday(date(2023, 6, 12)));
    }

    #[test]
    fn australia_day_on_sunday() {
        // 2025-01-26 is a Sunday → observed Monday Jan 27
        assert!(AUSTRALIA.is_holiday(date(2025, 1, 27)));
    }
}
