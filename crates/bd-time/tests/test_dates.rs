//! Property tests for `Date` arithmetic and classification.

use bd_time::{calendar_for_code, classify, is_weekend, Date, DayKind, HolidayCalendar};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = Date> {
    (1600i32..=9998, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| Date::from_ymd(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn add_days_round_trips(d in any_date(), n in -300i64..=300) {
        let shifted = d.add_days(n).unwrap();
        prop_assert_eq!(d.days_until(shifted), n);
        prop_assert_eq!(shifted.add_days(-n).unwrap(), d);
    }

    #[test]
    fn weekday_cycle(d in any_date()) {
        prop_assert_eq!(d.add_days(7).unwrap().weekday(), d.weekday());
    }

    #[test]
    fn iso_text_round_trips(d in any_date()) {
        prop_assert_eq!(Date::parse_iso(&d.to_string()).unwrap(), d);
    }

    #[test]
    fn classification_is_consistent(d in any_date()) {
        let cal = calendar_for_code("US").unwrap();
        let kind = classify(d, cal);
        prop_assert_eq!(kind == DayKind::Weekend, is_weekend(d));
        prop_assert_eq!(kind == DayKind::Business, cal.is_business_day(d));
        if kind == DayKind::Holiday {
            prop_assert!(cal.is_holiday(d));
        }
    }
}
