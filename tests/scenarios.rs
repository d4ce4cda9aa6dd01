//! Integration tests for the public surface: concrete scenarios, error
//! messages and the non-finite policy.

use serde_json::{json, Value};
use std::error::Error;
use tally::prelude::*;
use tally::{assert_invalid_argument, NonEmptyNumbers};

const NOT_NUMBERS: &str = "Input must be an array of numbers.";
const NOT_NON_EMPTY_NUMBERS: &str = "Input must be a non-empty array of numbers.";
const EMPTY: &str = "Array cannot be empty.";
const NOT_FINITE: &str = "Input must contain only finite numbers.";

#[test]
fn test_sum_scenarios() {
    assert_eq!(sum(&[1.0, 2.0, 4.0, 8.0, 16.0]), Ok(31.0));
    assert_eq!(sum(&json!([])), Ok(0.0));
    assert_invalid_argument!(sum(&json!("not an array")), NOT_NUMBERS);
}

#[test]
fn test_average_scenarios() {
    assert_eq!(average(&[1.0, 2.0, 4.0, 8.0, 16.0]), Ok(6.2));

    let avg = average(&[1.0, 2.0, 4.0]).unwrap();
    assert!((avg - 2.33).abs() < 0.005);

    assert_invalid_argument!(average(&json!([])), EMPTY);
    assert_invalid_argument!(average(&json!("not an array")), NOT_NON_EMPTY_NUMBERS);
}

#[test]
fn test_median_scenarios() {
    assert_eq!(median(&[1.0, 3.0, 5.0]), Ok(3.0));
    assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
    assert_invalid_argument!(median(&json!("not an array")), NOT_NUMBERS);
    assert_invalid_argument!(median(&json!([])), EMPTY);
}

#[test]
fn test_every_non_sequence_kind_is_rejected() {
    let inputs = [
        json!(null),
        json!(false),
        json!(3.5),
        json!("1,2,3"),
        json!({"values": [1, 2, 3]}),
    ];

    for input in &inputs {
        assert_invalid_argument!(sum(input), NOT_NUMBERS);
        assert_invalid_argument!(average(input), NOT_NON_EMPTY_NUMBERS);
        assert_invalid_argument!(median(input), NOT_NUMBERS);
    }
}

#[test]
fn test_non_numeric_elements_are_rejected() {
    let inputs = [json!([1, "2"]), json!([null]), json!([1, [2]]), json!([{}])];

    for input in &inputs {
        assert_invalid_argument!(sum(input), NOT_NUMBERS);
        assert_invalid_argument!(average(input), NOT_NON_EMPTY_NUMBERS);
        assert_invalid_argument!(median(input), NOT_NUMBERS);
    }
}

#[test]
fn test_shape_error_wins_over_empty() {
    // An empty object is neither a sequence nor has elements.
    assert_invalid_argument!(average(&json!({})), NOT_NON_EMPTY_NUMBERS);
    assert_invalid_argument!(median(&json!("")), NOT_NUMBERS);
}

#[test]
fn test_accepts_every_typed_input_form() {
    let array = [3.0, 1.0, 2.0];
    let vec = array.to_vec();
    let slice: &[f64] = &array;
    let values: Vec<Value> = vec![json!(3), json!(1), json!(2)];

    assert_eq!(median(&array), Ok(2.0));
    assert_eq!(median(&vec), Ok(2.0));
    assert_eq!(median(slice), Ok(2.0));
    assert_eq!(median(&values), Ok(2.0));
    assert_eq!(median(values.as_slice()), Ok(2.0));
}

#[test]
fn test_error_is_matchable_by_type() {
    fn mean_of(raw: &str) -> Result<f64, Box<dyn Error>> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(average(&value)?)
    }

    assert_eq!(mean_of("[2, 4]").unwrap(), 3.0);

    let err = mean_of("[]").unwrap_err();
    let invalid = err.downcast_ref::<InvalidArgument>().unwrap();
    assert_eq!(invalid.message(), EMPTY);

    // Malformed JSON is a different error kind entirely.
    let err = mean_of("[1,").unwrap_err();
    assert!(err.downcast_ref::<InvalidArgument>().is_none());
}

#[test]
fn test_default_policy_allows_non_finite_consistently() {
    let data = [1.0, f64::INFINITY, 2.0];
    assert_eq!(sum(&data), Ok(f64::INFINITY));
    assert_eq!(average(&data), Ok(f64::INFINITY));
    assert_eq!(median(&data), Ok(2.0));

    let with_nan = [1.0, f64::NAN];
    assert!(sum(&with_nan).unwrap().is_nan());
    assert!(average(&with_nan).unwrap().is_nan());
    assert!(median(&with_nan).unwrap().is_nan());
}

#[test]
fn test_reject_policy_is_consistent() {
    let stats = Stats::new().with_non_finite(NonFinite::Reject);

    for data in [[1.0, f64::NAN], [f64::INFINITY, 1.0], [f64::NEG_INFINITY, 0.0]] {
        assert_invalid_argument!(stats.sum(&data), NOT_FINITE);
        assert_invalid_argument!(stats.average(&data), NOT_FINITE);
        assert_invalid_argument!(stats.median(&data), NOT_FINITE);
    }

    assert_eq!(stats.sum(&[] as &[f64]), Ok(0.0));
    assert_invalid_argument!(stats.median(&[] as &[f64]), EMPTY);
}

#[test]
fn test_validator_is_usable_directly() {
    let validator = Validator::strict();
    let data = vec![2.0, 8.0];

    let numbers: NonEmptyNumbers<'_> = validator.check_non_empty(&data, "need numbers").unwrap();
    assert_eq!(numbers.as_slice(), &[2.0, 8.0]);

    assert_invalid_argument!(
        validator.check(&json!("nope"), "need numbers"),
        "need numbers"
    );
}

#[test]
fn test_default_error_message() {
    assert_eq!(
        InvalidArgument::default().to_string(),
        "Invalid argument provided"
    );
}
