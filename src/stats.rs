//! Sum, average and median over validated numeric sequences
//!
//! The free functions [`sum`], [`average`] and [`median`] use the default
//! [`Validator`], which accepts NaN and ±Infinity. Use a configured [`Stats`]
//! to apply a different policy to all three operations at once.
//!
//! # Examples
//!
//! ```
//! use tally::{average, median, sum};
//!
//! let data = [1.0, 2.0, 4.0, 8.0, 16.0];
//! assert_eq!(sum(&data), Ok(31.0));
//! assert_eq!(average(&data), Ok(6.2));
//! assert_eq!(median(&data), Ok(4.0));
//! ```
//!
//! # Errors
//!
//! | operation | not a numeric sequence                          | empty                      |
//! |-----------|-------------------------------------------------|----------------------------|
//! | `sum`     | `Input must be an array of numbers.`            | returns `0.0`              |
//! | `average` | `Input must be a non-empty array of numbers.`   | `Array cannot be empty.`   |
//! | `median`  | `Input must be an array of numbers.`            | `Array cannot be empty.`   |
//!
//! # Complexity
//!
//! `sum` and `average` are O(n). `median` is O(n log n) time and O(n) space
//! for the sorted copy.

use crate::error::{InvalidArgument, NOT_NON_EMPTY_NUMBERS, NOT_NUMBERS};
use crate::input::NumericInput;
use crate::validate::{NonFinite, Validator};

/// The three operations bound to one validation policy.
///
/// # Examples
///
/// ```
/// use tally::Stats;
///
/// let stats = Stats::strict();
/// assert_eq!(stats.median(&[3.0, 1.0, 2.0]), Ok(2.0));
///
/// let err = stats.sum(&[1.0, f64::NAN]).unwrap_err();
/// assert_eq!(err.message(), "Input must contain only finite numbers.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Stats {
    validator: Validator,
}

impl Stats {
    /// Operations with the default validator.
    pub const fn new() -> Self {
        Self {
            validator: Validator::new(),
        }
    }

    /// Operations that reject NaN and ±Infinity.
    pub const fn strict() -> Self {
        Self::new().with_non_finite(NonFinite::Reject)
    }

    /// Replace the validator.
    pub const fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Shorthand for changing only the non-finite policy.
    pub const fn with_non_finite(self, policy: NonFinite) -> Self {
        self.with_validator(self.validator.with_non_finite(policy))
    }

    /// The validator applied to every input.
    pub const fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Total of all elements, accumulated left to right from `0.0`.
    ///
    /// An empty sequence sums to `0.0`.
    ///
    /// # Errors
    ///
    /// `"Input must be an array of numbers."` when `nums` is not a numeric
    /// sequence.
    pub fn sum<I>(&self, nums: &I) -> Result<f64, InvalidArgument>
    where
        I: NumericInput + ?Sized,
    {
        let numbers = self.validator.check(nums, NOT_NUMBERS)?;
        Ok(total(&numbers))
    }

    /// Arithmetic mean: the sum divided by the element count.
    ///
    /// # Errors
    ///
    /// - `"Input must be a non-empty array of numbers."` when `nums` is not a
    ///   numeric sequence.
    /// - `"Array cannot be empty."` when it has no elements.
    pub fn average<I>(&self, nums: &I) -> Result<f64, InvalidArgument>
    where
        I: NumericInput + ?Sized,
    {
        let numbers = self.validator.check_non_empty(nums, NOT_NON_EMPTY_NUMBERS)?;
        Ok(total(numbers.as_slice()) / numbers.len() as f64)
    }

    /// Middle value of an ascending-sorted copy of `nums`.
    ///
    /// For an even count this is the mean of the two middle values. The
    /// input is never reordered. Values are ordered with [`f64::total_cmp`],
    /// so an allowed NaN sorts after `+∞` (or before `-∞` if its sign bit is set).
    ///
    /// # Errors
    ///
    /// - `"Input must be an array of numbers."` when `nums` is not a numeric
    ///   sequence.
    /// - `"Array cannot be empty."` when it has no elements.
    pub fn median<I>(&self, nums: &I) -> Result<f64, InvalidArgument>
    where
        I: NumericInput + ?Sized,
    {
        let numbers = self.validator.check_non_empty(nums, NOT_NUMBERS)?;

        let mut sorted = numbers.into_vec();
        sorted.sort_unstable_by(f64::total_cmp);

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Ok(sorted[mid])
        } else {
            Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
        }
    }
}

/// Sum a numeric sequence with the default validator.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tally::sum;
///
/// assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0]), Ok(10.0));
/// assert_eq!(sum(&[] as &[f64]), Ok(0.0));
///
/// let err = sum(&json!("not an array")).unwrap_err();
/// assert_eq!(err.message(), "Input must be an array of numbers.");
/// ```
pub fn sum<I>(nums: &I) -> Result<f64, InvalidArgument>
where
    I: NumericInput + ?Sized,
{
    Stats::new().sum(nums)
}

/// Average a non-empty numeric sequence with the default validator.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tally::average;
///
/// assert_eq!(average(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
///
/// let err = average(&[] as &[f64]).unwrap_err();
/// assert_eq!(err.message(), "Array cannot be empty.");
///
/// let err = average(&json!("not an array")).unwrap_err();
/// assert_eq!(err.message(), "Input must be a non-empty array of numbers.");
/// ```
pub fn average<I>(nums: &I) -> Result<f64, InvalidArgument>
where
    I: NumericInput + ?Sized,
{
    Stats::new().average(nums)
}

/// Median of a non-empty numeric sequence with the default validator.
///
/// # Examples
///
/// ```
/// use tally::median;
///
/// assert_eq!(median(&[1.0, 3.0, 5.0]), Ok(3.0));
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
/// ```
pub fn median<I>(nums: &I) -> Result<f64, InvalidArgument>
where
    I: NumericInput + ?Sized,
{
    Stats::new().median(nums)
}

fn total(numbers: &[f64]) -> f64 {
    numbers.iter().fold(0.0, |acc, &x| acc + x)
}
