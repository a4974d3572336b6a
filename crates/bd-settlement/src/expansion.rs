//! Delay expansion: how many calendar days a business-day delay spans.

use bd_core::ensure;
use bd_core::errors::Result;
use bd_time::{classify, Date, DayKind, HolidayCalendar};

/// Tally of a delay expansion.
///
/// `weekend_days + holiday_days == total_days - delay` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelayExpansion {
    /// Saturdays and Sundays inside the window.
    pub weekend_days: u32,
    /// Weekday holidays inside the window.
    pub holiday_days: u32,
    /// Calendar days in the window, including the final business day.
    pub total_days: u32,
}

impl DelayExpansion {
    /// The last day of the window that starts on `start`, i.e. the day the
    /// delay lands on.
    pub fn last_day(&self, start: Date) -> Result<Date> {
        start.add_days(i64::from(self.total_days) - 1)
    }
}

/// Expand `delay` business days into a calendar-day window starting on
/// `start` (day zero).
///
/// Days `start + i` are inspected for `i = 0, 1, …` while `i` is below the
/// running total, which starts at `delay` and grows by one for every weekend
/// day or holiday met. A weekend day is counted as weekend only, even if it
/// is also a holiday.
///
/// # Errors
/// [`Error::Precondition`](bd_core::Error::Precondition) if `delay` is zero;
/// [`Error::Date`](bd_core::Error::Date) if the window runs past the
/// representable date range.
pub fn expand_delay<C: HolidayCalendar + ?Sized>(
    start: Date,
    delay: u32,
    calendar: &C,
) -> Result<DelayExpansion> {
    ensure!(delay >= 1, "delay must be at least one business day, got {delay}");

    let mut expansion = DelayExpansion {
        weekend_days: 0,
        holiday_days: 0,
        total_days: delay,
    };
    let mut i = 0;
    while i < expansion.total_days {
        match classify(start.add_days(i64::from(i))?, calendar) {
            DayKind::Weekend => {
                expansion.weekend_days += 1;
                expansion.total_days += 1;
            }
            DayKind::Holiday => {
                expansion.holiday_days += 1;
                expansion.total_days += 1;
            }
            DayKind::Business => {}
        }
        i += 1;
    }
    Ok(expansion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bd_core::Error;
    use bd_time::calendars::united_states::UNITED_STATES;
    use bd_time::WeekendsOnly;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn business_days_only() {
        // Tue 2023-08-29 .. Thu 2023-08-31
        let e = expand_delay(date(2023, 8, 29), 3, &UNITED_STATES).unwrap();
        assert_eq!(
            e,
            DelayExpansion {
                weekend_days: 0,
                holiday_days: 0,
                total_days: 3
            }
        );
        assert_eq!(e.last_day(date(2023, 8, 29)).unwrap(), date(2023, 8, 31));
    }

    #[test]
    fn spans_weekend_and_labor_day() {
        let start = date(2023, 8, 31);
        let e = expand_delay(start, 3, &UNITED_STATES).unwrap();
        assert_eq!(e.weekend_days, 2);
        assert_eq!(e.holiday_days, 1);
        assert_eq!(e.total_days, 6);
        assert_eq!(e.last_day(start).unwrap(), date(2023, 9, 5));

        let e = expand_delay(start, 3, &WeekendsOnly).unwrap();
        assert_eq!(e.total_days, 5);
        assert_eq!(e.last_day(start).unwrap(), date(2023, 9, 4));
    }

    #[test]
    fn weekend_holiday_counted_as_weekend() {
        // 2023-11-11 (Veterans Day) is a Saturday; observed Friday 11-10
        let start = date(2023, 11, 10);
        let e = expand_delay(start, 1, &UNITED_STATES).unwrap();
        assert_eq!(e.holiday_days, 1);
        assert_eq!(e.weekend_days, 2);
        assert_eq!(e.last_day(start).unwrap(), date(2023, 11, 13));
    }

    #[test]
    fn zero_delay_rejected() {
        assert!(matches!(
            expand_delay(date(2023, 8, 30), 0, &WeekendsOnly),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn end_of_range() {
        let eve = Date::from_naive(NaiveDate::MAX).add_days(-1).unwrap();
        assert!(matches!(
            expand_delay(eve, 5, &WeekendsOnly),
            Err(Error::Date(_))
        ));
    }
}
