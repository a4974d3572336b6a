//! South Africa calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::{HolidayRule, Observance::SundayToMonday};

/// South Africa calendar.
///
/// Fixed holidays falling on a Sunday are observed on the following Monday.
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Human Rights Day (Mar 21)
/// * Good Friday
/// * Family Day (Easter Monday)
/// * Freedom Day (Apr 27)
/// * Workers' Day (May 1)
/// * Youth Day (Jun 16)
/// * National Women's Day (Aug 9)
/// * Heritage Day (Sep 24)
/// * Day of Reconciliation (Dec 16)
/// * Christmas Day (Dec 25)
/// * Day of Goodwill (Dec 26)
pub static SOUTH_AFRICA: RuleCalendar = RuleCalendar::new("South Africa", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1).observed(SundayToMonday),
    HolidayRule::fixed("Human Rights Day", 3, 21).observed(SundayToMonday),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::easter("Family Day", 1),
    HolidayRule::fixed("Freedom Day", 4, 27).observed(SundayToMonday),
    HolidayRule::fixed("Workers' Day", 5, 1).observed(SundayToMonday),
    HolidayRule::fixed("Youth Day", 6, 16).observed(SundayToMonday),
    HolidayRule::fixed("National Women's Day", 8, 9).observed(SundayToMonday),
    HolidayRule::fixed("Heritage Day", 9, 24).observed(SundayToMonday),
    HolidayRule::fixed("Day of Reconciliation", 12, 16).observed(SundayToMonday),
    HolidayRule::fixed("Christmas Day", 12, 25).observed(SundayToMonday),
    HolidayRule::fixed("Day of Goodwill", 12, 26).observed(SundayToMonday),
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
    fn heritage_day_on_sunday() {
        // 2023-09-24 is a Sunday
        assert!(SOUTH_AFRICA.is_holiday(date(2023, 9, 25)));
    }

    #[test]
    fn saturday_holiday_not_moved() {
        // 2023-12-16 is a Saturday
        assert!(SOUTH_AFRICA.is_holiday(date(2023, 12, 16)));
        assert!(!SOUTH_AFRICA.is_holiday(date(2023, 12, 18)));
    }
}
