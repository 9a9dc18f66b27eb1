//! The motivating story: hard-coded filters vs specifications.
//!
//! Run with: cargo run --example open_closed

use specsieve::catalog::{color_is, size_is, Color, Product, ProductFilter, Size};
use specsieve::prelude::*;

fn main() {
    let stock = vec![
        Product::new("apple", Color::Green, Size::Small),
        Product::new("tree", Color::Green, Size::Large),
        Product::new("house", Color::Blue, Size::Large),
    ];

    // The old way: one method per attribute. Filtering by color AND size
    // would mean opening ProductFilter up and adding a third method.
    println!("hard-coded filter, green products:");
    for p in ProductFilter.by_color(&stock, Color::Green) {
        println!("  {}", p.name);
    }

    // The specification way: criteria are values, and new criteria are
    // new types. Composition comes for free.
    println!("specification filter, green products:");
    for p in sieve(stock.clone(), color_is(Color::Green)) {
        println!("  {}", p.name);
    }

    println!("specification filter, blue AND large:");
    for p in sieve(
        stock.clone(),
        color_is(Color::Blue).and(size_is(Size::Large)),
    ) {
        println!("  {}", p.name);
    }

    println!("specification filter, NOT (green AND small):");
    for p in sieve(
        stock,
        color_is(Color::Green).and(size_is(Size::Small)).not(),
    ) {
        println!("  {}", p.name);
    }
}
