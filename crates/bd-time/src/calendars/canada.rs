//! Canada (Settlement) calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::{HolidayRule, Observance::NextFreeWeekday};
use chrono::Weekday::Mon;

/// Canada (Settlement) calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1, adjusted)
/// * Family Day (3rd Monday of February, since 2008)
/// * Good Friday
/// * Victoria Day (Monday on or before May 24)
/// * Canada Day (Jul 1, adjusted)
/// * Civic Holiday (1st Monday of August)
/// * Labour Day (1st Monday of September)
/// * National Day for Truth and Reconciliation (Sep 30, since 2021, adjusted)
/// * Thanksgiving (2nd Monday of October)
/// * Remembrance Day (Nov 11, adjusted)
/// * Christmas (Dec 25, adjusted)
/// * Boxing Day (Dec 26, adjusted)
///
/// Boxing Day is kept as a settlement holiday although it is a statutory
/// holiday only in Ontario. A delay of one business day from Christmas 2023
/// therefore settles on Dec 27 here, not on Dec 26 as a calendar without it
/// would give.
pub static CANADA: RuleCalendar = RuleCalendar::new("Canada (Settlement)", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1).observed(NextFreeWeekday),
    HolidayRule::nth("Family Day", 3, Mon, 2).since(2008),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::on_or_before("Victoria Day", Mon, 5, 24),
    HolidayRule::fixed("Canada Day", 7, 1).observed(NextFreeWeekday),
    HolidayRule::nth("Civic Holiday", 1, Mon, 8),
    HolidayRule::nth("Labour Day", 1, Mon, 9),
    HolidayRule::fixed("National Day for Truth and Reconciliation", 9, 30)
        .observed(NextFreeWeekday)
        .since(2021),
    HolidayRule::nth("Thanksgiving", 2, Mon, 10),
    HolidayRule::fixed("Remembrance Day", 11, 11).observed(NextFreeWeekday),
    HolidayRule::fixed("Christmas Day", 12, 25).observed(NextFreeWeekday),
    HolidayRule::fixed("Boxing Day", 12, 26).observed(NextFreeWeekday),
];
