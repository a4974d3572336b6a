//! Holiday-list checks for the country calendars.
//!
//! These integration tests exercise the `HolidayCalendar` trait through the
//! country provider, comparing full weekday-holiday lists for known years.

use bd_time::{
    calendar_for_code, classify, DayKind, Date, HolidayCalendar, HolidayKind, WeekendsOnly,
    SUPPORTED_COUNTRIES,
};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Collect all non-weekend holidays in the inclusive range `[from, to]`.
fn holiday_list(cal: &dyn HolidayCalendar, from: Date, to: Date) -> Vec<Date> {
    let mut holidays = Vec::new();
    let mut d = from;
    while d <= to {
        if classify(d, cal) == DayKind::Holiday {
            holidays.push(d);
        }
        d = d.succ().unwrap();
    }
    holidays
}

/// Assert that every date in `expected` is a holiday, and every holiday in the
/// range is in `expected`.
fn check_holidays(cal: &dyn HolidayCalendar, from: Date, to: Date, expected: &[Date]) {
    let calculated = holiday_list(cal, from, to);
    for d in &calculated {
        assert!(
            expected.contains(d),
            "{}: {} calculated as holiday but not expected ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
    for d in expected {
        assert!(
            calculated.contains(d),
            "{}: {} expected as holiday but not found ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
}

// ─── United States ────────────────────────────────────────────────────────────

#[test]
fn test_us_holidays_2023() {
    let expected = vec![
        date(2023, 1, 2),
        date(2023, 1, 16),
        date(2023, 2, 20),
        date(2023, 5, 29),
        date(2023, 6, 19),
        date(2023, 7, 4),
        date(2023, 9, 4),
        date(2023, 10, 9),
        date(2023, 11, 10),
        date(2023, 11, 23),
        date(2023, 12, 25),
    ];
    let cal = calendar_for_code("US").unwrap();
    check_holidays(cal, date(2023, 1, 1), date(2023, 12, 31), &expected);
}

#[test]
fn test_us_new_year_observed_in_previous_year() {
    // 2022-01-01 is a Saturday
    let cal = calendar_for_code("US").unwrap();
    assert!(!cal.is_business_day(date(2021, 12, 31)));
    let list = cal.holidays(2021);
    let last = list.last().unwrap();
    assert_eq!(last.date, date(2021, 12, 31));
    assert_eq!(last.kind, HolidayKind::Substitute);
    assert_eq!(last.name, "New Year's Day");
}

// ─── United Kingdom ───────────────────────────────────────────────────────────

#[test]
fn test_uk_holidays_2022() {
    let expected = vec![
        date(2022, 1, 3),
        date(2022, 4, 15),
        date(2022, 4, 18),
        date(2022, 5, 2),
        date(2022, 6, 2),
        date(2022, 6, 3),
        date(2022, 8, 29),
        date(2022, 9, 19),
        date(2022, 12, 26),
        date(2022, 12, 27),
    ];
    let cal = calendar_for_code("GB").unwrap();
    check_holidays(cal, date(2022, 1, 1), date(2022, 12, 31), &expected);
}

#[test]
fn test_uk_holidays_2023() {
    let expected = vec![
        date(2023, 1, 2),
        date(2023, 4, 7),
        date(2023, 4, 10),
        date(2023, 5, 1),
        date(2023, 5, 8),
        date(2023, 5, 29),
        date(2023, 8, 28),
        date(2023, 12, 25),
        date(2023, 12, 26),
    ];
    let cal = calendar_for_code("GB").unwrap();
    check_holidays(cal, date(2023, 1, 1), date(2023, 12, 31), &expected);
}

#[test]
fn test_uk_christmas_on_weekend() {
    // 2021-12-25 is a Saturday, Boxing Day a Sunday
    let cal = calendar_for_code("GB").unwrap();
    assert!(!cal.is_business_day(date(2021, 12, 27)));
    assert!(!cal.is_business_day(date(2021, 12, 28)));
    assert!(cal.is_business_day(date(2021, 12, 29)));
}

// ─── Germany ──────────────────────────────────────────────────────────────────

#[test]
fn test_germany_holidays_2023() {
    let expected = vec![
        date(2023, 4, 7),
        date(2023, 4, 10),
        date(2023, 5, 1),
        date(2023, 5, 18),
        date(2023, 5, 29),
        date(2023, 10, 3),
        date(2023, 12, 25),
        date(2023, 12, 26),
    ];
    // Jan 1 is a Sunday, Dec 24 a Sunday, Dec 31 a Sunday
    let cal = calendar_for_code("DE").unwrap();
    check_holidays(cal, date(2023, 1, 1), date(2023, 12, 31), &expected);
}

// ─── Canada ───────────────────────────────────────────────────────────────────

#[test]
fn test_canada_holidays_2023() {
    let expected = vec![
        date(2023, 1, 2),
        date(2023, 2, 20),
        date(2023, 4, 7),
        date(2023, 5, 22),
        date(2023, 7, 3),
        date(2023, 8, 7),
        date(2023, 9, 4),
        date(2023, 10, 2),
        date(2023, 10, 9),
        date(2023, 11, 13),
        date(2023, 12, 25),
        date(2023, 12, 26),
    ];
    let cal = calendar_for_code("CA").unwrap();
    check_holidays(cal, date(2023, 1, 1), date(2023, 12, 31), &expected);
}

// ─── Provider ─────────────────────────────────────────────────────────────────

#[test]
fn test_every_calendar_has_holidays() {
    for code in SUPPORTED_COUNTRIES {
        let cal = calendar_for_code(code).unwrap();
        let list = cal.holidays(2024);
        assert!(!list.is_empty(), "{code}: no holidays in 2024");
        assert!(list.iter().all(|h| h.date.year() == 2024));
        assert!(list.windows(2).all(|w| w[0].date <= w[1].date));
        for h in &list {
            assert!(cal.is_holiday(h.date), "{code}: {} not reported", h.date);
        }
    }
}

#[test]
fn test_weekends_only() {
    check_holidays(&WeekendsOnly, date(2023, 1, 1), date(2023, 12, 31), &[]);
}
