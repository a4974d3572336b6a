//! New Zealand calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::{HolidayRule, Observance::NextFreeWeekday};
use chrono::Weekday::Mon;

/// New Zealand calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day and Day after New Year's Day (Jan 1–2, adjusted)
/// * Waitangi Day (Feb 6; moved to Monday if on weekend since 2014)
/// * Good Friday and Easter Monday
/// * Anzac Day (Apr 25; moved to Monday if on weekend since 2014)
/// * King's Birthday (1st Monday in June)
/// * Matariki (gazetted dates, since 2022)
/// * Labour Day (4th Monday in October)
/// * Christmas Day and Boxing Day (adjusted)
pub static NEW_ZEALAND: RuleCalendar = RuleCalendar::new("New Zealand", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1).observed(NextFreeWeekday),
    HolidayRule::fixed("Day after New Year's Day", 1, 2).observed(NextFreeWeekday),
    HolidayRule::fixed("Waitangi Day", 2, 6).until(2013),
    HolidayRule::fixed("Waitangi Day", 2, 6)
        .observed(NextFreeWeekday)
        .since(2014),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::easter("Easter Monday", 1),
    HolidayRule::fixed("Anzac Day", 4, 25).until(2013),
    HolidayRule::fixed("Anzac Day", 4, 25)
        .observed(NextFreeWeekday)
        .since(2014),
    HolidayRule::nth("King's Birthday", 1, Mon, 6),
    HolidayRule::one_off("Matariki", 2022, 6, 24),
    HolidayRule::one_off("Matariki", 2023, 7, 14),
    HolidayRule::one_off("Matariki", 2024, 6, 28),
    HolidayRule::one_off("Matariki", 2025, 6, 20),
    HolidayRule::one_off("Matariki", 2026, 7, 10),
    HolidayRule::one_off("Matariki", 2027, 6, 25),
    HolidayRule::one_off("Matariki", 2028, 7, 14),
    HolidayRule::one_off("Matariki", 2029, 7, 6),
    HolidayRule::one_off("Matariki", 2030, 6, 21),
    HolidayRule::nth("Labour Day", 4, Mon, 10),
    HolidayRule::fixed("Christmas Day", 12, 25).observed(NextFreeWeekday),
    HolidayRule::fixed("Boxing Day", 12, 26).observed(NextFreeWeekday),
];
