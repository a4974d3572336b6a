//! United Kingdom (England and Wales) bank holiday calendar.

use crate::calendar::RuleCalendar;
use crate::holiday::{HolidayRule, Observance::NextFreeWeekday};
use chrono::Weekday::Mon;

/// United Kingdom: England and Wales bank holidays.
///
/// Holidays:
/// * New Year's Day (Jan 1; weekend → next free weekday)
/// * Good Friday
/// * Easter Monday
/// * Early May Bank Holiday (1st Mon in May; moved to May 8 in 1995 and 2020)
/// * Spring Bank Holiday (last Mon in May; moved in jubilee years)
/// * Summer Bank Holiday (last Mon in Aug)
/// * Christmas Day and Boxing Day (weekend → next free weekday)
/// * One-off royal and millennium holidays
pub static UNITED_KINGDOM: RuleCalendar =
    RuleCalendar::new("United Kingdom (England and Wales)", RULES);

const RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1).observed(NextFreeWeekday),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::easter("Easter Monday", 1),
    HolidayRule::nth("Early May Bank Holiday", 1, Mon, 5).except(&[1995, 2020]),
    HolidayRule::one_off("Early May Bank Holiday (VE Day)", 1995, 5, 8),
    HolidayRule::one_off("Early May Bank Holiday (VE Day)", 2020, 5, 8),
    HolidayRule::last("Spring Bank Holiday", Mon, 5).except(&[2002, 2012, 2022]),
    HolidayRule::one_off("Spring Bank Holiday", 2002, 6, 3),
    HolidayRule::one_off("Golden Jubilee", 2002, 6, 4),
    HolidayRule::one_off("Spring Bank Holiday", 2012, 6, 4),
    HolidayRule::one_off("Diamond Jubilee", 2012, 6, 5),
    HolidayRule::one_off("Spring Bank Holiday", 2022, 6, 2),
    HolidayRule::one_off("Platinum Jubilee", 2022, 6, 3),
    HolidayRule::last("Summer Bank Holiday", Mon, 8),
    HolidayRule::one_off("Millennium Celebrations", 1999, 12, 31),
    HolidayRule::one_off("Royal Wedding", 2011, 4, 29),
    HolidayRule::one_off("State Funeral of Queen Elizabeth II", 2022, 9, 19),
    HolidayRule::one_off("Coronation of King Charles III", 2023, 5, 8),
    HolidayRule::fixed("Christmas Day", 12, 25).observed(NextFreeWeekday),
    HolidayRule::fixed("Boxing Day", 12, 26).observed(NextFreeWeekday),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;
    use crate::date::Date;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn coronation_is_additional() {
        assert!(UNITED_KINGDOM.is_holiday(date(2023, 5, 1)));
        assert!(UNITED_KINGDOM.is_holiday(date(2023, 5, 8)));
    }

    #[test]
    fn ve_day_replaces_early_may() {
        assert!(!UNITED_KINGDOM.is_holiday(date(2020, 5, 4)));
        assert!(UNITED_KINGDOM.is_holiday(date(2020, 5, 8)));
    }

    #[test]
    fn platinum_jubilee_moves_spring_bank_holiday() {
        assert!(!UNITED_KINGDOM.is_holiday(date(2022, 5, 30)));
        assert!(UNITED_KINGDOM.is_holiday(date(2022, 6, 2)));
        assert!(UNITED_KINGDOM.is_holiday(date(2022, 6, 3)));
    }

    #[test]
    fn christmas_2022_substitute() {
        // Christmas on Sunday, Boxing Day on Monday → substitute Tuesday 27
        assert!(UNITED_KINGDOM.is_holiday(date(2022, 12, 26)));
        assert!(UNITED_KINGDOM.is_holiday(date(2022, 12, 27)));
        assert!(!UNITED_KINGDOM.is_holiday(date(2022, 12, 28)));
    }
}
