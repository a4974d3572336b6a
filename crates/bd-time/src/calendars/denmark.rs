//! Denmark calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::HolidayRule;

/// Denmark calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Maundy Thursday, Good Friday, Easter Monday
/// * Great Prayer Day (4th Friday after Easter, until 2023)
/// * Ascension Thursday and the day after (the latter since 2009)
/// * Whit Monday
/// * Constitution Day (Jun 5)
/// * Christmas Eve, Christmas Day, Boxing Day (Dec 24–26)
/// * New Year's Eve (Dec 31)
pub static DENMARK: RuleCalendar = RuleCalendar::new("Denmark", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1),
    HolidayRule::easter("Maundy Thursday", -3),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::easter("Easter Monday", 1),
    HolidayRule::easter("Great Prayer Day", 26).until(2023),
    HolidayRule::easter("Ascension Thursday", 39),
    HolidayRule::easter("Day after Ascension", 40).since(2009),
    HolidayRule::easter("Whit Monday", 50),
    HolidayRule::fixed("Constitution Day", 6, 5),
    HolidayRule::fixed("Christmas Eve", 12, 24),
    HolidayRule::fixed("Christmas Day", 12, 25),
    HolidayRule::fixed("Boxing Day", 12, 26),
    HolidayRule::fixed("New Year's Eve", 12, 31),
];
