//! Input adapters for the numeric operations
//!
//! Operations accept anything implementing [`NumericInput`]. Typed `f64`
//! sequences are always numeric and are borrowed without copying. Untyped
//! [`serde_json::Value`]s are checked at runtime: only an array whose every
//! element is a JSON number counts as a numeric sequence.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use tally::NumericInput;
//!
//! assert_eq!(vec![1.0, 2.0].as_numbers().as_deref(), Some(&[1.0, 2.0][..]));
//! assert_eq!(json!([1, 2.5]).as_numbers().as_deref(), Some(&[1.0, 2.5][..]));
//! assert!(json!("not an array").as_numbers().is_none());
//! assert!(json!([1, "2"]).as_numbers().is_none());
//! ```

use serde_json::Value;
use std::borrow::Cow;

/// A value that may be viewed as an ordered sequence of `f64`.
///
/// Returning `None` means the value is not a numeric sequence: it is not a
/// sequence at all, or one of its elements is not a number.
pub trait NumericInput {
    /// View this value as numbers, or `None` if it is not a numeric sequence.
    fn as_numbers(&self) -> Option<Cow<'_, [f64]>>;
}

impl NumericInput for [f64] {
    #[inline]
    fn as_numbers(&self) -> Option<Cow<'_, [f64]>> {
        Some(Cow::Borrowed(self))
    }
}

impl<const N: usize> NumericInput for [f64; N] {
    #[inline]
    fn as_numbers(&self) -> Option<Cow<'_, [f64]>> {
        Some(Cow::Borrowed(self.as_slice()))
    }
}

impl NumericInput for Vec<f64> {
    #[inline]
    fn as_numbers(&self) -> Option<Cow<'_, [f64]>> {
        Some(Cow::Borrowed(self.as_slice()))
    }
}

impl NumericInput for Value {
    fn as_numbers(&self) -> Option<Cow<'_, [f64]>> {
        match self {
            Value::Array(items) => items.as_slice().as_numbers(),
            _ => None,
        }
    }
}

impl NumericInput for [Value] {
    fn as_numbers(&self) -> Option<Cow<'_, [f64]>> {
        self.iter()
            .map(|item| match item {
                Value::Number(n) => n.as_f64(),
                _ => None,
            })
            .collect::<Option<Vec<f64>>>()
            .map(Cow::Owned)
    }
}

impl NumericInput for Vec<Value> {
    fn as_numbers(&self) -> Option<Cow<'_, [f64]>> {
        self.as_slice().as_numbers()
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    #[inline]
    fn as_numbers(&self) -> Option<Cow<'_, [f64]>> {
        (**self).as_numbers()
    }
}
