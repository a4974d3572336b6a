//! Business-day predicate at the request boundary.

use bd_time::{calendar_for_code, is_business_day};

use crate::params::ParsedDate;

/// Is `date` a business day in `country`?
///
/// * `None` if the country has no calendar. This is checked first, so an
///   unknown country yields `None` even for an invalid date.
/// * `Some(false)` if the date is invalid.
/// * Otherwise `Some(true)` iff the local calendar date is neither a weekend
///   day nor a holiday.
pub fn business_day(date: &ParsedDate, country: &str) -> Option<bool> {
    let calendar = match calendar_for_code(country) {
        Ok(calendar) => calendar,
        Err(err) => {
            tracing::debug!(error = %err, "no calendar for business-day check");
            return None;
        }
    };
    Some(match date {
        ParsedDate::Valid(d) => is_business_day(d.date(), calendar),
        ParsedDate::Invalid => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_and_weekend() {
        assert_eq!(business_day(&ParsedDate::parse("2023-08-30"), "US"), Some(true));
        assert_eq!(business_day(&ParsedDate::parse("2023-09-03"), "US"), Some(false));
    }

    #[test]
    fn holiday() {
        assert_eq!(business_day(&ParsedDate::parse("2023-09-04"), "US"), Some(false));
        assert_eq!(business_day(&ParsedDate::parse("2023-09-04"), "GB"), Some(true));
    }

    #[test]
    fn invalid_date_is_not_a_business_day() {
        assert_eq!(business_day(&ParsedDate::Invalid, "US"), Some(false));
    }

    #[test]
    fn unknown_country_checked_first() {
        assert_eq!(business_day(&ParsedDate::Invalid, "XX"), None);
        assert_eq!(business_day(&ParsedDate::parse("2023-08-30"), "7200"), None);
    }

    #[test]
    fn local_date_decides() {
        // Friday evening in New York is already Saturday in UTC
        let date = ParsedDate::parse("2023-09-01T21:00:00-04:00");
        assert_eq!(business_day(&date, "US"), Some(true));
    }
}
