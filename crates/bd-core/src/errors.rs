//! Error types for bizdays.
//!
//! Every fallible operation in the library crates returns [`Result`], whose
//! error side is the single `thiserror`-derived [`Error`] enum below. None of
//! these errors is fatal: the request boundary maps each of them to a
//! degraded (`false` / `null`) answer.

use thiserror::Error;

/// The top-level error type used throughout bizdays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A precondition was violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction, parsing or arithmetic failed.
    #[error("date error: {0}")]
    Date(String),

    /// A non-date argument could not be accepted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No holiday calendar is known for the requested jurisdiction.
    #[error("unknown country code: {0:?}")]
    UnknownCountry(String),
}

/// Shorthand `Result` type used throughout bizdays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bd_core::{ensure, errors::Error};
/// fn positive(n: i64) -> bd_core::Result<i64> {
///     ensure!(n > 0, "n must be positive, got {n}");
///     Ok(n)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(0),
///     Err(Error::Precondition("n must be positive, got 0".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_country_message_quotes_code() {
        let err = Error::UnknownCountry("XX".into());
        assert_eq!(err.to_string(), "unknown country code: \"XX\"");
    }

    #[test]
    fn date_message() {
        let err = Error::Date("day 30 out of range [1, 28] for 2023-02".into());
        assert_eq!(
            err.to_string(),
            "date error: day 30 out of range [1, 28] for 2023-02"
        );
    }
}
