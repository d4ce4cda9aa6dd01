//! Testing utilities for code built on tally
//!
//! This module provides an assertion macro for [`InvalidArgument`] results and,
//! with the `proptest` feature, strategies for generating numeric sequences.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use tally::{assert_invalid_argument, median};
//!
//! assert_invalid_argument!(median(&json!([])));
//! assert_invalid_argument!(median(&json!("text")), "Input must be an array of numbers.");
//! ```
//!
//! [`InvalidArgument`]: crate::InvalidArgument

/// Assert that a result failed with [`InvalidArgument`](crate::InvalidArgument).
///
/// With a second argument, also assert the error message.
///
/// # Example
///
/// ```rust
/// use tally::{assert_invalid_argument, average};
///
/// assert_invalid_argument!(average(&[] as &[f64]), "Array cannot be empty.");
/// ```
#[macro_export]
macro_rules! assert_invalid_argument {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Err(err) => {
                let _: &$crate::InvalidArgument = &err;
            }
            ::std::result::Result::Ok(v) => {
                panic!("Expected InvalidArgument, got Ok: {:?}", v);
            }
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            ::std::result::Result::Err(err) => {
                let err: &$crate::InvalidArgument = &err;
                assert_eq!(err.message(), $message);
            }
            ::std::result::Result::Ok(v) => {
                panic!(
                    "Expected InvalidArgument with message {:?}, got Ok: {:?}",
                    $message, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
pub use strategies::*;

#[cfg(feature = "proptest")]
mod strategies {
    use crate::validate::{NonFinite, Validator};
    use proptest::prelude::*;
    use std::ops::Range;

    /// Finite values in `[-1e6, 1e6)`.
    pub fn finite_number() -> impl Strategy<Value = f64> {
        -1e6_f64..1e6
    }

    /// Integer-valued floats; sums of these are exact in `f64`.
    pub fn whole_number() -> impl Strategy<Value = f64> {
        (-1_000_000i32..1_000_000).prop_map(f64::from)
    }

    /// A sequence of [`finite_number`]s with length in `len`.
    pub fn numbers(len: Range<usize>) -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(finite_number(), len)
    }

    /// A sequence of [`whole_number`]s with length in `len`.
    pub fn whole_numbers(len: Range<usize>) -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(whole_number(), len)
    }

    impl Arbitrary for NonFinite {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![Just(NonFinite::Allow), Just(NonFinite::Reject)].boxed()
        }
    }

    impl Arbitrary for Validator {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            any::<NonFinite>()
                .prop_map(|policy| Validator::new().with_non_finite(policy))
                .boxed()
        }
    }
}
