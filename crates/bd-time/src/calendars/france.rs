//! France calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::HolidayRule;

/// France calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Easter Monday
/// * Labour Day (May 1)
/// * Victory Day (May 8)
/// * Ascension Thursday
/// * Whit Monday
/// * Bastille Day (Jul 14)
/// * Assumption of Mary (Aug 15)
/// * All Saints' Day (Nov 1)
/// * Armistice Day (Nov 11)
/// * Christmas Day (Dec 25)
pub static FRANCE: RuleCalendar = RuleCalendar::new("France", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1),
    HolidayRule::easter("Easter Monday", 1),
    HolidayRule::fixed("Labour Day", 5, 1),
    HolidayRule::fixed("Victory Day", 5, 8),
    HolidayRule::easter("Ascension Thursday", 39),
    HolidayRule::easter("Whit Monday", 50),
    HolidayRule::fixed("Bastille Day", 7, 14),
    HolidayRule::fixed("Assumption of Mary", 8, 15),
    HolidayRule::fixed("All Saints' Day", 11, 1),
    HolidayRule::fixed("Armistice Day", 11, 11),
    HolidayRule::fixed("Christmas Day", 12, 25),
];
