//! Basic Statistics Example
//!
//! Demonstrates the three operations and their error messages.
//! Shows practical patterns including:
//! - Computing sum, average and median of typed data
//! - Handling InvalidArgument for empty input
//! - Applying the strict non-finite policy

use tally::{average, median, sum, InvalidArgument, NonFinite, Stats};

// ==================== Typed Input ====================

/// Example 1: Summary of a typed slice
fn example_summary() -> Result<(), InvalidArgument> {
    println!("\n=== Example 1: Summary ===");

    let latencies_ms = [12.0, 15.0, 11.0, 40.0, 13.0, 14.0];
    println!("data:    {:?}", latencies_ms);
    println!("sum:     {}", sum(&latencies_ms)?);
    println!("average: {:.2}", average(&latencies_ms)?);
    println!("median:  {}", median(&latencies_ms)?);

    Ok(())
}

// ==================== Empty Input ====================

/// Example 2: Empty input is fine for sum, an error for the others
fn example_empty() {
    println!("\n=== Example 2: Empty Input ===");

    let empty: Vec<f64> = Vec::new();
    println!("sum:     {:?}", sum(&empty));

    match average(&empty) {
        Ok(v) => println!("average: {}", v),
        Err(e) => println!("average failed: {}", e),
    }
    match median(&empty) {
        Ok(v) => println!("median: {}", v),
        Err(e) => println!("median failed: {}", e),
    }
}

// ==================== Non-finite Policy ====================

/// Example 3: NaN flows through by default, strict stats reject it
fn example_non_finite() {
    println!("\n=== Example 3: Non-finite Values ===");

    let readings = [1.5, f64::NAN, 2.5];
    println!("default average: {:?}", average(&readings));

    let strict = Stats::new().with_non_finite(NonFinite::Reject);
    match strict.average(&readings) {
        Ok(v) => println!("strict average: {}", v),
        Err(e) => println!("strict average failed: {}", e),
    }
}

fn main() -> Result<(), InvalidArgument> {
    println!("Basic Statistics Examples");
    println!("=========================");

    example_summary()?;
    example_empty();
    example_non_finite();

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}
