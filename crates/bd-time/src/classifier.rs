//! Day classification: weekend, holiday or business day.
//!
//! All functions are pure; weekend status depends only on the date, holiday
//! status only on the date and the calendar it is checked against.

use crate::calendar::HolidayCalendar;
use crate::date::Date;

/// The class of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// Saturday or Sunday. Takes precedence over [`DayKind::Holiday`].
    Weekend,
    /// A public holiday falling on a weekday.
    Holiday,
    /// Neither of the above.
    Business,
}

/// Return `true` if `date` is a Saturday or Sunday, i.e. its ISO weekday
/// number (Monday = 1) is 6 or 7.
pub fn is_weekend(date: Date) -> bool {
    date.weekday().number_from_monday() >= 6
}

/// Return `true` if `calendar` reports `date` as a holiday.
pub fn is_holiday<C: HolidayCalendar + ?Sized>(date: Date, calendar: &C) -> bool {
    calendar.is_holiday(date)
}

/// Classify `date`. A day that is both a weekend day and a holiday is a
/// [`DayKind::Weekend`], and the calendar is not consulted for it.
pub fn classify<C: HolidayCalendar + ?Sized>(date: Date, calendar: &C) -> DayKind {
    if is_weekend(date) {
        DayKind::Weekend
    } else if is_holiday(date, calendar) {
        DayKind::Holiday
    } else {
        DayKind::Business
    }
}

/// Return `true` if `date` is neither a weekend day nor a holiday.
pub fn is_business_day<C: HolidayCalendar + ?Sized>(date: Date, calendar: &C) -> bool {
    classify(date, calendar) == DayKind::Business
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekendsOnly;
    use crate::calendars::united_states::UNITED_STATES;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekend_days() {
        assert!(is_weekend(date(2023, 9, 2)));
        assert!(is_weekend(date(2023, 9, 3)));
        assert!(!is_weekend(date(2023, 9, 1)));
        assert!(!is_weekend(date(2023, 9, 4)));
    }

    #[test]
    fn weekend_precedes_holiday() {
        // New Year's Day 2023 fell on a Sunday
        assert!(UNITED_STATES.is_holiday(date(2023, 1, 1)));
        assert_eq!(classify(date(2023, 1, 1), &UNITED_STATES), DayKind::Weekend);
        assert_eq!(classify(date(2023, 1, 2), &UNITED_STATES), DayKind::Holiday);
    }

    #[test]
    fn business_day() {
        assert_eq!(classify(date(2023, 8, 30), &UNITED_STATES), DayKind::Business);
        assert!(is_business_day(date(2023, 8, 30), &UNITED_STATES));
        assert!(!is_business_day(date(2023, 9, 3), &UNITED_STATES));
        assert!(!is_business_day(date(2023, 12, 25), &UNITED_STATES));
    }

    #[test]
    fn works_through_trait_objects() {
        let cal: &dyn HolidayCalendar = &WeekendsOnly;
        assert_eq!(classify(date(2023, 12, 25), cal), DayKind::Business);
    }
}
