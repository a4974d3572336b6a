//! Sweden calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::HolidayRule;
use chrono::Weekday::Fri;

/// Sweden calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1) and Epiphany (Jan 6)
/// * Good Friday and Easter Monday
/// * Labour Day (May 1)
/// * Ascension Thursday
/// * National Day (Jun 6, since 2005)
/// * Midsummer Eve (Friday between Jun 19–25)
/// * Christmas Eve, Christmas Day, Boxing Day (Dec 24–26)
/// * New Year's Eve (Dec 31)
pub static SWEDEN: RuleCalendar = RuleCalendar::new("Sweden", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1),
    HolidayRule::fixed("Epiphany", 1, 6),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::easter("Easter Monday", 1),
    HolidayRule::fixed("Labour Day", 5, 1),
    HolidayRule::easter("Ascension Thursday", 39),
    HolidayRule::fixed("National Day", 6, 6).since(2005),
    HolidayRule::on_or_before("Midsummer Eve", Fri, 6, 25),
    HolidayRule::fixed("Christmas Eve", 12, 24),
    HolidayRule::fixed("Christmas Day", 12, 25),
    HolidayRule::fixed("Boxing Day", 12, 26),
    HolidayRule::fixed("New Year's Eve", 12, 31),
];
