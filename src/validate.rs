//! Input validation shared by every operation
//!
//! A [`Validator`] gates input before any arithmetic runs. It has two checks:
//!
//! - [`Validator::check`] accepts any numeric sequence, including an empty one.
//! - [`Validator::check_non_empty`] also requires at least one element and
//!   hands back a [`NonEmptyNumbers`] so later code never indexes an empty slice.
//!
//! The shape check always runs first, so a value that is not a numeric
//! sequence reports the caller's message even when it is also "empty".
//!
//! # Non-finite values
//!
//! By default NaN and ±Infinity count as numbers and flow through IEEE-754
//! arithmetic. [`NonFinite::Reject`] turns them into an [`InvalidArgument`].
//!
//! ```
//! use tally::{NonFinite, Validator};
//!
//! let lenient = Validator::new();
//! assert!(lenient.check(&[1.0, f64::NAN], "bad input").is_ok());
//!
//! let strict = Validator::new().with_non_finite(NonFinite::Reject);
//! let err = strict.check(&[1.0, f64::INFINITY], "bad input").unwrap_err();
//! assert_eq!(err.message(), "Input must contain only finite numbers.");
//! ```

use crate::error::{InvalidArgument, EMPTY, NOT_FINITE};
use crate::input::NumericInput;
use std::borrow::Cow;

/// How a [`Validator`] treats NaN and ±Infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NonFinite {
    /// Non-finite values are valid numbers.
    #[default]
    Allow,
    /// Any non-finite element makes the input invalid.
    Reject,
}

/// Validation settings applied before computing a statistic.
///
/// # Examples
///
/// ```
/// use tally::{NonFinite, Validator};
///
/// let v = Validator::new();
/// assert_eq!(v.non_finite(), NonFinite::Allow);
///
/// let data = vec![3.0, 1.0];
/// let numbers = v.check(&data, "bad input").unwrap();
/// assert_eq!(&*numbers, &[3.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Validator {
    non_finite: NonFinite,
}

impl Validator {
    /// Create a validator that accepts non-finite values.
    pub const fn new() -> Self {
        Self {
            non_finite: NonFinite::Allow,
        }
    }

    /// Create a validator that rejects NaN and ±Infinity.
    pub const fn strict() -> Self {
        Self {
            non_finite: NonFinite::Reject,
        }
    }

    /// Set the non-finite policy.
    pub const fn with_non_finite(mut self, policy: NonFinite) -> Self {
        self.non_finite = policy;
        self
    }

    /// The configured non-finite policy.
    pub const fn non_finite(&self) -> NonFinite {
        self.non_finite
    }

    /// Check that `input` is a sequence of numbers.
    ///
    /// Fails with `message` when `input` is not a sequence or holds a
    /// non-numeric element. Empty sequences pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use tally::Validator;
    ///
    /// let v = Validator::new();
    /// assert!(v.check(&json!([]), "not numbers").is_ok());
    ///
    /// let err = v.check(&json!({"n": 1}), "not numbers").unwrap_err();
    /// assert_eq!(err.message(), "not numbers");
    /// ```
    pub fn check<'a, I>(
        &self,
        input: &'a I,
        message: &str,
    ) -> Result<Cow<'a, [f64]>, InvalidArgument>
    where
        I: NumericInput + ?Sized,
    {
        let numbers = input.as_numbers().ok_or_else(|| rejected(message))?;

        if self.non_finite == NonFinite::Reject && !numbers.iter().all(|x| x.is_finite()) {
            return Err(rejected(NOT_FINITE));
        }

        Ok(numbers)
    }

    /// Check that `input` is a sequence of numbers with at least one element.
    ///
    /// Runs [`check`](Self::check) with `message` first, then fails with
    /// `"Array cannot be empty."` if the sequence has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use tally::Validator;
    ///
    /// let v = Validator::new();
    /// let numbers = v.check_non_empty(&[2.0, 4.0], "not numbers").unwrap();
    /// assert_eq!(numbers.len(), 2);
    ///
    /// let err = v.check_non_empty(&json!([]), "not numbers").unwrap_err();
    /// assert_eq!(err.message(), "Array cannot be empty.");
    ///
    /// let err = v.check_non_empty(&json!("text"), "not numbers").unwrap_err();
    /// assert_eq!(err.message(), "not numbers");
    /// ```
    pub fn check_non_empty<'a, I>(
        &self,
        input: &'a I,
        message: &str,
    ) -> Result<NonEmptyNumbers<'a>, InvalidArgument>
    where
        I: NumericInput + ?Sized,
    {
        let numbers = self.check(input, message)?;
        NonEmptyNumbers::from_cow(numbers).ok_or_else(|| rejected(EMPTY))
    }
}

fn rejected(message: &str) -> InvalidArgument {
    #[cfg(feature = "tracing")]
    tracing::debug!("rejected numeric input: {}", message);

    InvalidArgument::new(message)
}

/// A numeric sequence holding at least one element.
///
/// Only produced by [`Validator::check_non_empty`].
#[derive(Debug, Clone, PartialEq)]
pub struct NonEmptyNumbers<'a> {
    numbers: Cow<'a, [f64]>,
}

impl<'a> NonEmptyNumbers<'a> {
    fn from_cow(numbers: Cow<'a, [f64]>) -> Option<Self> {
        if numbers.is_empty() {
            None
        } else {
            Some(Self { numbers })
        }
    }

    /// The validated numbers.
    pub fn as_slice(&self) -> &[f64] {
        &self.numbers
    }

    /// Number of elements, always at least one.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Always `false`.
    ///
    /// This method exists to satisfy clippy's `len_without_is_empty` lint.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Take ownership of the numbers, copying only if they were borrowed.
    pub fn into_vec(self) -> Vec<f64> {
        self.numbers.into_owned()
    }
}
