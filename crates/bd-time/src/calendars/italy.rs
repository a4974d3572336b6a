//! Italy calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::HolidayRule;

/// Italy calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1) and Epiphany (Jan 6)
/// * Easter Monday
/// * Liberation Day (Apr 25)
/// * Labour Day (May 1)
/// * Republic Day (Jun 2)
/// * Assumption of Mary (Aug 15)
/// * All Saints' Day (Nov 1)
/// * Immaculate Conception (Dec 8)
/// * Christmas Day (Dec 25) and St. Stephen's Day (Dec 26)
pub static ITALY: RuleCalendar = RuleCalendar::new("Italy", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1),
    HolidayRule::fixed("Epiphany", 1, 6),
    HolidayRule::easter("Easter Monday", 1),
    HolidayRule::fixed("Liberation Day", 4, 25),
    HolidayRule::fixed("Labour Day", 5, 1),
    HolidayRule::fixed("Republic Day", 6, 2),
    HolidayRule::fixed("Assumption of Mary", 8, 15),
    HolidayRule::fixed("All Saints' Day", 11, 1),
    HolidayRule::fixed("Immaculate Conception", 12, 8),
    HolidayRule::fixed("Christmas Day", 12, 25),
    HolidayRule::fixed("St. Stephen's Day", 12, 26),
];
