//! # Specsieve
//!
//! Composable specification-pattern filtering.
//!
//! ## Philosophy
//!
//! A filter criterion is data, not a method. **Specsieve** captures each
//! criterion as a small immutable [`Specification`](spec::Specification)
//! value, combines specifications with boolean operators, and applies the
//! result to any sequence with a generic [sieve](sieve::sieve). Extending
//! the system to a new criterion means writing a new specification type -
//! existing code stays closed for modification, open for extension.
//!
//! ## Quick Example
//!
//! ```rust
//! use specsieve::catalog::{color_is, size_is, Color, Product, Size};
//! use specsieve::sieve::sieve;
//! use specsieve::spec::SpecificationExt;
//!
//! let stock = vec![
//!     Product::new("apple", Color::Green, Size::Small),
//!     Product::new("tree", Color::Green, Size::Large),
//!     Product::new("house", Color::Blue, Size::Large),
//! ];
//!
//! // One criterion
//! let green: Vec<Product> = sieve(stock.clone(), color_is(Color::Green)).collect();
//! assert_eq!(green.len(), 2);
//!
//! // Composed criteria
//! let picked: Vec<Product> =
//!     sieve(stock, color_is(Color::Green).and(size_is(Size::Large))).collect();
//! assert_eq!(picked[0].name, "tree");
//! ```
//!
//! Specifications are pure and stateless, so a single specification value
//! is safe to evaluate from any number of threads at once; the only rule
//! is the usual one of not mutating a collection while iterating it.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod sieve;
pub mod spec;

// Re-exports
pub use sieve::{sieve, Sieve, SieveIteratorExt};
pub use spec::{Specification, SpecificationExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::sieve::{sieve, Sieve, SieveIteratorExt};
    pub use crate::spec::prelude::*;
}
