//! Deeply nested specification trees over a plain numeric domain, with
//! trace logging from the sieve.
//!
//! Run with: cargo run --example composed_specs --features tracing

use specsieve::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .init();

    let readings: Vec<i32> = vec![3, 10, 14, 15, 20, 27, 30, 41];

    // leaf specifications
    let round = attr(|n: &i32| n % 10, 0);
    let multiple_of_three = |n: &i32| n % 3 == 0;

    // compose: round numbers that are not multiples of three, or 41 exactly
    let spec = round.and(multiple_of_three.not()).or(equals(41));

    println!("readings: {readings:?}");
    let picked: Vec<i32> = sieve(readings, spec).collect();
    println!("picked:   {picked:?}");

    // the same specifications drive fail-fast checks
    match ensure_with(25, round, |n| format!("{n} is not a round number")) {
        Ok(n) => println!("accepted {n}"),
        Err(e) => println!("rejected: {e}"),
    }
}
