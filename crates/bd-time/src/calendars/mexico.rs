//! Mexico calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::HolidayRule;
use chrono::Weekday::Mon;

/// Mexico calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Constitution Day (1st Monday in February)
/// * Benito Juárez's Birthday (3rd Monday in March)
/// * Good Friday
/// * Labour Day (May 1)
/// * Independence Day (Sep 16)
/// * Día de la Raza (Oct 12)
/// * Revolution Day (3rd Monday in November)
/// * Christmas Day (Dec 25)
pub static MEXICO: RuleCalendar = RuleCalendar::new("Mexico", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1),
    HolidayRule::nth("Constitution Day", 1, Mon, 2),
    HolidayRule::nth("Benito Juárez's Birthday", 3, Mon, 3),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::fixed("Labour Day", 5, 1),
    HolidayRule::fixed("Independence Day", 9, 16),
    HolidayRule::fixed("Día de la Raza", 10, 12),
    HolidayRule::nth("Revolution Day", 3, Mon, 11),
    HolidayRule::fixed("Christmas Day", 12, 25),
];
