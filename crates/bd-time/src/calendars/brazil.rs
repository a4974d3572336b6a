//! Brazil (Settlement) calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::HolidayRule;

/// Brazil (Settlement) calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Carnival Monday and Tuesday
/// * Good Friday
/// * Tiradentes Day (Apr 21)
/// * Labour Day (May 1)
/// * Corpus Christi
/// * Independence Day (Sep 7)
/// * Our Lady of Aparecida (Oct 12)
/// * All Souls' Day (Nov 2)
/// * Republic Day (Nov 15)
/// * Black Consciousness Day (Nov 20, since 2024)
/// * Christmas (Dec 25)
pub static BRAZIL: RuleCalendar = RuleCalendar::new("Brazil (Settlement)", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1),
    HolidayRule::easter("Carnival Monday", -48),
    HolidayRule::easter("Carnival Tuesday", -47),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::fixed("Tiradentes Day", 4, 21),
    HolidayRule::fixed("Labour Day", 5, 1),
    HolidayRule::easter("Corpus Christi", 60),
    HolidayRule::fixed("Independence Day", 9, 7),
    HolidayRule::fixed("Our Lady of Aparecida", 10, 12),
    HolidayRule::fixed("All Souls' Day", 11, 2),
    HolidayRule::fixed("Republic Day", 11, 15),
    HolidayRule::fixed("Black Consciousness Day", 11, 20).since(2024),
    HolidayRule::fixed("Christmas Day", 12, 25),
];
