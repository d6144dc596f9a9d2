//! Error types for bizcal.
//!
//! Calendar arithmetic over valid dates cannot fail, so the taxonomy is small:
//! bad input text, dates that leave the representable range, and malformed
//! calendar configuration. The `ensure!` macro is shorthand for returning
//! the precondition variant.

use thiserror::Error;

/// The top-level error type used throughout bizcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A date string could not be parsed.
    #[error("cannot parse date {input:?}: {reason}")]
    Parse {
        /// The offending input, verbatim.
        input: String,
        /// What the parser rejected.
        reason: String,
    },

    /// Date construction or arithmetic left the valid range.
    #[error("date error: {0}")]
    Date(String),

    /// A calendar configuration was malformed.
    #[error("invalid calendar configuration: {0}")]
    Config(String),
}

impl Error {
    /// Build a [`Error::Parse`] from the rejected input and a reason.
    pub fn parse(input: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Error::Parse {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}

/// Shorthand `Result` type used throughout bizcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bc_core::{ensure, errors::Error};
/// fn positive(x: i32) -> bc_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
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
    fn parse_error_message_names_input() {
        let e = Error::parse("2026-13-01", "month out of range");
        assert_eq!(
            e.to_string(),
            "cannot parse date \"2026-13-01\": month out of range"
        );
    }

    #[test]
    fn config_error_message() {
        let e = Error::Config("duplicate holiday 2026-09-12".into());
        assert!(e.to_string().starts_with("invalid calendar configuration"));
    }
}
