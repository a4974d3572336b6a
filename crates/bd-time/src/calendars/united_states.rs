//! United States federal holiday calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::{HolidayRule, Observance::NearestWeekday};
use chrono::Weekday::{Mon, Thu};

/// United States: federal holidays.
///
/// Holidays:
/// * New Year's Day (Jan 1; if Sun → Mon; if Sat → Fri)
/// * Martin Luther King Jr. Day (3rd Mon in Jan, from 1983)
/// * Washington's Birthday (3rd Mon in Feb)
/// * Memorial Day (last Mon in May)
/// * Juneteenth (Jun 19, from 2022; if Sun → Mon; if Sat → Fri)
/// * Independence Day (Jul 4; if Sun → Mon; if Sat → Fri)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct)
/// * Veterans Day (Nov 11; if Sun → Mon; if Sat → Fri)
/// * Thanksgiving Day (4th Thu in Nov)
/// * Christmas Day (Dec 25; if Sun → Mon; if Sat → Fri)
pub static UNITED_STATES: RuleCalendar = RuleCalendar::new("United States (Federal)", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1).observed(NearestWeekday),
    HolidayRule::nth("Martin Luther King Jr. Day", 3, Mon, 1).since(1983),
    HolidayRule::nth("Washington's Birthday", 3, Mon, 2),
    HolidayRule::last("Memorial Day", Mon, 5),
    HolidayRule::fixed("Juneteenth", 6, 19)
        .observed(NearestWeekday)
        .since(2022),
    HolidayRule::fixed("Independence Day", 7, 4).observed(NearestWeekday),
    HolidayRule::nth("Labor Day", 1, Mon, 9),
    HolidayRule::nth("Columbus Day", 2, Mon, 10),
    HolidayRule::fixed("Veterans Day", 11, 11).observed(NearestWeekday),
    HolidayRule::nth("Thanksgiving Day", 4, Thu, 11),
    HolidayRule::fixed("Christmas Day", 12, 25).observed(NearestWeekday),
];
