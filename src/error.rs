//! The single error kind reported by this crate
//!
//! Every operation returns `Result<f64, InvalidArgument>`. The error is its own
//! type, so callers can handle bad input separately from other failures by
//! matching on the type rather than on message text.
//!
//! # Examples
//!
//! ```
//! use tally::{median, InvalidArgument};
//!
//! let err: InvalidArgument = median(&[] as &[f64]).unwrap_err();
//! assert_eq!(err.message(), "Array cannot be empty.");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Message used when no explicit message is supplied.
pub const DEFAULT_MESSAGE: &str = "Invalid argument provided";

pub(crate) const NOT_NUMBERS: &str = "Input must be an array of numbers.";
pub(crate) const NOT_NON_EMPTY_NUMBERS: &str = "Input must be a non-empty array of numbers.";
pub(crate) const EMPTY: &str = "Array cannot be empty.";
pub(crate) const NOT_FINITE: &str = "Input must contain only finite numbers.";

/// Error returned when an operation receives input outside its contract.
///
/// The input was not a sequence of numbers, or an operation that needs at
/// least one element received an empty sequence.
///
/// # Examples
///
/// ```
/// use tally::InvalidArgument;
///
/// let err = InvalidArgument::new("Input must be an array of numbers.");
/// assert_eq!(err.to_string(), "Input must be an array of numbers.");
///
/// assert_eq!(InvalidArgument::default().message(), "Invalid argument provided");
/// ```
///
/// Recovering the kind from a boxed error:
///
/// ```
/// use std::error::Error;
/// use tally::InvalidArgument;
///
/// fn run() -> Result<f64, Box<dyn Error>> {
///     Ok(tally::average(&[] as &[f64])?)
/// }
///
/// let err = run().unwrap_err();
/// assert!(err.downcast_ref::<InvalidArgument>().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvalidArgument {
    message: String,
}

impl InvalidArgument {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        InvalidArgument {
            message: message.into(),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the error and return its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Default for InvalidArgument {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for InvalidArgument {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let err = InvalidArgument::default();
        assert_eq!(err.message(), DEFAULT_MESSAGE);
        assert_eq!(err.to_string(), "Invalid argument provided");
    }

    #[test]
    fn test_explicit_message() {
        let err = InvalidArgument::new(EMPTY);
        assert_eq!(err.message(), "Array cannot be empty.");
        assert_eq!(err.into_message(), "Array cannot be empty.".to_string());
    }

    #[test]
    fn test_display_is_message_only() {
        let err = InvalidArgument::new(NOT_NUMBERS);
        assert_eq!(format!("{}", err), NOT_NUMBERS);
    }

    #[test]
    fn test_is_std_error_without_source() {
        let err: Box<dyn StdError> = Box::new(InvalidArgument::new(NOT_NON_EMPTY_NUMBERS));
        assert!(err.source().is_none());
        assert!(err.downcast_ref::<InvalidArgument>().is_some());
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InvalidArgument>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let err = InvalidArgument::new(NOT_FINITE);
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"message":"Input must contain only finite numbers."}"#);

        let back: InvalidArgument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
