//! Norway calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::HolidayRule;

/// Norway calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Maundy Thursday, Good Friday, Easter Monday
/// * Labour Day (May 1)
/// * Ascension Thursday
/// * Constitution Day (May 17)
/// * Whit Monday
/// * Christmas Day (Dec 25) and Boxing Day (Dec 26)
pub static NORWAY: RuleCalendar = RuleCalendar::new("Norway", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1),
    HolidayRule::easter("Maundy Thursday", -3),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::easter("Easter Monday", 1),
    HolidayRule::fixed("Labour Day", 5, 1),
    HolidayRule::easter("Ascension Thursday", 39),
    HolidayRule::fixed("Constitution Day", 5, 17),
    HolidayRule::easter("Whit Monday", 50),
    HolidayRule::fixed("Christmas Day", 12, 25),
    HolidayRule::fixed("Boxing Day", 12, 26),
];
