//! Untyped Input Example
//!
//! Demonstrates computing statistics over JSON payloads whose shape is only
//! known at runtime.
//!
//! Run with: cargo run --example untyped_input
//! With rejection events: cargo run --example untyped_input --features tracing

use serde_json::Value;
use tally::{average, median, sum};

fn report(raw: &str) {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            println!("{:<28} -> not JSON: {}", raw, e);
            return;
        }
    };

    println!("{:<28} -> sum {:?}", raw, sum(&value));
    println!("{:<28} -> average {:?}", "", average(&value));
    println!("{:<28} -> median {:?}", "", median(&value));
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let payloads = [
        "[1, 2, 4, 8, 16]",
        "[1, 2, 3, 4]",
        "[]",
        "\"not an array\"",
        "[1, \"2\", 3]",
        "{\"values\": [1, 2]}",
        "[1, 2,",
    ];

    for raw in payloads {
        report(raw);
        println!();
    }
}
