//! # Tally
//!
//! Sum, average and median over numeric sequences, with one structured error
//! for malformed input.
//!
//! Every operation validates its input first and returns
//! `Result<f64, InvalidArgument>`. Input may be typed (`&[f64]`, `Vec<f64>`,
//! `[f64; N]`) or untyped ([`serde_json::Value`]), in which case it is checked
//! at runtime to be an array of numbers.
//!
//! ## Quick Example
//!
//! ```rust
//! use serde_json::json;
//! use tally::{average, median, sum, InvalidArgument};
//!
//! assert_eq!(sum(&[1.0, 2.0, 4.0, 8.0, 16.0]), Ok(31.0));
//! assert_eq!(average(&[1.0, 2.0, 4.0, 8.0, 16.0]), Ok(6.2));
//! assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
//!
//! match median(&json!("not an array")) {
//!     Err(InvalidArgument { .. }) => {}
//!     Ok(v) => panic!("unexpected median {}", v),
//! }
//! ```
//!
//! ## Non-finite values
//!
//! NaN and ±Infinity are accepted by default and follow IEEE-754 arithmetic.
//! A [`Stats`] built with [`NonFinite::Reject`] turns them into errors for all
//! three operations:
//!
//! ```rust
//! use tally::{NonFinite, Stats};
//!
//! let stats = Stats::new().with_non_finite(NonFinite::Reject);
//! assert!(stats.average(&[1.0, f64::NAN]).is_err());
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`InvalidArgument`], [`Validator`]
//!   and [`NonFinite`].
//! - `tracing`: emit a `debug` event whenever input is rejected.
//! - `proptest`: strategies and `Arbitrary` impls in [`testing`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod input;
pub mod stats;
pub mod testing;
pub mod validate;

// Re-exports
pub use error::InvalidArgument;
pub use input::NumericInput;
pub use stats::{average, median, sum, Stats};
pub use validate::{NonEmptyNumbers, NonFinite, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::InvalidArgument;
    pub use crate::input::NumericInput;
    pub use crate::stats::{average, median, sum, Stats};
    pub use crate::validate::{NonFinite, Validator};
}
