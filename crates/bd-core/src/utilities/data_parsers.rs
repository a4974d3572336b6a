//! Data parsing helpers.
//!
//! These parsers only check the *shape* of their input. Range checks (is the
//! day valid for the month, is the delay within bounds) belong to the types
//! built from the parsed components.

/// Parse a base-10 integer with an optional sign, e.g. `"3"`, `"-5"`, `"+12"`.
///
/// Surrounding whitespace is ignored. Fractional (`"3.14"`, `"3.0"`),
/// exponent, hexadecimal and otherwise non-numeric text is rejected, as is
/// any value that does not fit in an `i64`.
pub fn parse_integer(s: &str) -> Option<i64> {
    let s = s.trim();
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse a date in ISO 8601 extended format (`YYYY-MM-DD`).
///
/// Exactly four year digits and two month and day digits are required.
/// Returns `(year, month, day)` on success; the components are not checked
/// against the calendar.
pub fn parse_iso_date(s: &str) -> Option<(i32, u32, u32)> {
    let s = s.trim();
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let all_digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
    if !(all_digits(0..4) && all_digits(5..7) && all_digits(8..10)) {
        return None;
    }
    let year = s[0..4].parse().ok()?;
    let month = s[5..7].parse().ok()?;
    let day = s[8..10].parse().ok()?;
    Some((year, month, day))
}

/// Parse a date in ISO 8601 basic format (`YYYYMMDD`).
///
/// Returns `(year, month, day)`; the components are not checked against the
/// calendar.
pub fn parse_iso_basic_date(s: &str) -> Option<(i32, u32, u32)> {
    let s = s.trim();
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((s[0..4].parse().ok()?, s[4..6].parse().ok()?, s[6..8].parse().ok()?))
}

/// Parse an ISO 8601 ordinal date, extended (`YYYY-DDD`) or basic
/// (`YYYYDDD`).
///
/// Returns `(year, day_of_year)`; the day is not checked against the year.
pub fn parse_iso_ordinal_date(s: &str) -> Option<(i32, u32)> {
    let s = s.trim();
    let (year, day) = match s.len() {
        8 if s.as_bytes()[4] == b'-' => (s.get(0..4)?, s.get(5..8)?),
        7 => (s.get(0..4)?, s.get(4..7)?),
        _ => return None,
    };
    if !(year.bytes().all(|b| b.is_ascii_digit()) && day.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    Some((year.parse().ok()?, day.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("3"), Some(3));
        assert_eq!(parse_integer(" 365 "), Some(365));
        assert_eq!(parse_integer("-5"), Some(-5));
        assert_eq!(parse_integer("+2"), Some(2));
        assert_eq!(parse_integer("0"), Some(0));
    }

    #[test]
    fn test_parse_integer_rejects_non_integers() {
        assert_eq!(parse_integer("3.14"), None);
        assert_eq!(parse_integer("3.0"), None);
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer("3abc"), None);
        assert_eq!(parse_integer("1e3"), None);
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2023-08-30"), Some((2023, 8, 30)));
        // Shape only: the calendar check happens later.
        assert_eq!(parse_iso_date("2023-02-30"), Some((2023, 2, 30)));
    }

    #[test]
    fn test_parse_iso_date_rejects_other_shapes() {
        assert_eq!(parse_iso_date("01012023"), None);
        assert_eq!(parse_iso_date("5000"), None);
        assert_eq!(parse_iso_date("2023-8-30"), None);
        assert_eq!(parse_iso_date("30/08/2023"), None);
        assert_eq!(parse_iso_date("2023-08-3x"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_parse_iso_basic_date() {
        assert_eq!(parse_iso_basic_date("20230830"), Some((2023, 8, 30)));
        // Shape only: month 20 is rejected later.
        assert_eq!(parse_iso_basic_date("01012023"), Some((101, 20, 23)));
        assert_eq!(parse_iso_basic_date("2023-08-30"), None);
        assert_eq!(parse_iso_basic_date("2023083"), None);
    }

    #[test]
    fn test_parse_iso_ordinal_date() {
        assert_eq!(parse_iso_ordinal_date("2023-242"), Some((2023, 242)));
        assert_eq!(parse_iso_ordinal_date("2023242"), Some((2023, 242)));
        assert_eq!(parse_iso_ordinal_date("2023+242"), None);
        assert_eq!(parse_iso_ordinal_date("2023-24x"), None);
        assert_eq!(parse_iso_ordinal_date("5000"), None);
    }

    proptest! {
        #[test]
        fn integers_round_trip(n in any::<i64>()) {
            prop_assert_eq!(parse_integer(&n.to_string()), Some(n));
        }

        #[test]
        fn fractions_rejected(n in any::<i64>(), m in 0u32..100_000) {
            prop_assert_eq!(parse_integer(&format!("{n}.{m}")), None);
        }

        #[test]
        fn iso_date_components(y in 0i32..=9999, m in 0u32..=99, d in 0u32..=99) {
            let text = format!("{y:04}-{m:02}-{d:02}");
            prop_assert_eq!(parse_iso_date(&text), Some((y, m, d)));
            let basic = format!("{y:04}{m:02}{d:02}");
            prop_assert_eq!(parse_iso_basic_date(&basic), Some((y, m, d)));
        }
    }
}
