//! Holiday calendar provider: country code → calendar.
//!
//! The provider is a pure function over `'static` immutable calendars. It
//! keeps no state between calls, so lookups for different countries can run
//! concurrently without coordination.

use crate::calendar::RuleCalendar;
use crate::calendars::{
    australia::AUSTRALIA, brazil::BRAZIL, canada::CANADA, denmark::DENMARK, france::FRANCE,
    germany::GERMANY, italy::ITALY, mexico::MEXICO, new_zealand::NEW_ZEALAND, norway::NORWAY,
    south_africa::SOUTH_AFRICA, sweden::SWEDEN, switzerland::SWITZERLAND,
    united_kingdom::UNITED_KINGDOM, united_states::UNITED_STATES,
};
use bd_core::errors::{Error, Result};

/// A normalized ISO 3166-1 alpha-2 country code, e.g. `US`.
///
/// Only the shape is checked here; whether a calendar exists for the code is
/// decided by [`calendar_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Parse a country code. Surrounding whitespace is ignored and letters
    /// are upper-cased.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] unless the text is two ASCII letters.
    ///
    /// ```
    /// use bd_time::CountryCode;
    /// assert_eq!(CountryCode::parse(" us ").unwrap().as_str(), "US");
    /// assert!(CountryCode::parse("7200").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().as_bytes() {
            &[a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => Err(Error::InvalidArgument(format!(
                "country code must be two ASCII letters, got {s:?}"
            ))),
        }
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII letters by construction.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CountryCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Codes with a holiday calendar, in alphabetical order.
pub const SUPPORTED_COUNTRIES: &[&str] = &[
    "AU", "BR", "CA", "CH", "DE", "DK", "FR", "GB", "IT", "MX", "NO", "NZ", "SE", "US", "ZA",
];

/// Return the holiday calendar for `country`.
///
/// # Errors
/// [`Error::UnknownCountry`] if no calendar is maintained for the code.
pub fn calendar_for(country: &CountryCode) -> Result<&'static RuleCalendar> {
    let calendar = match country.as_str() {
        "AU" => &AUSTRALIA,
        "BR" => &BRAZIL,
        "CA" => &CANADA,
        "CH" => &SWITZERLAND,
        "DE" => &GERMANY,
        "DK" => &DENMARK,
        "FR" => &FRANCE,
        "GB" | "UK" => &UNITED_KINGDOM,
        "IT" => &ITALY,
        "MX" => &MEXICO,
        "NO" => &NORWAY,
        "NZ" => &NEW_ZEALAND,
        "SE" => &SWEDEN,
        "US" => &UNITED_STATES,
        "ZA" => &SOUTH_AFRICA,
        other => return Err(Error::UnknownCountry(other.to_owned())),
    };
    Ok(calendar)
}

/// Parse `code` and return its calendar.
///
/// # Errors
/// [`Error::InvalidArgument`] for text that is not a country code;
/// [`Error::UnknownCountry`] for a well-formed code without a calendar.
pub fn calendar_for_code(code: &str) -> Result<&'static RuleCalendar> {
    calendar_for(&CountryCode::parse(code)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;

    #[test]
    fn every_supported_code_resolves() {
        for code in SUPPORTED_COUNTRIES {
            assert!(calendar_for_code(code).is_ok(), "{code} has no calendar");
        }
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(calendar_for_code("ca").unwrap().name(), "Canada (Settlement)");
    }

    #[test]
    fn uk_alias() {
        assert_eq!(
            calendar_for_code("UK").unwrap().name(),
            calendar_for_code("GB").unwrap().name()
        );
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(
            calendar_for_code(" xx ").unwrap_err(),
            Error::UnknownCountry("XX".into())
        );
    }

    #[test]
    fn malformed_codes() {
        for code in ["WWWWWWWWWWWWWWWWWWWWW", "7200", "", "U", "U1"] {
            assert!(
                matches!(calendar_for_code(code), Err(Error::InvalidArgument(_))),
                "{code:?}"
            );
        }
    }
}
