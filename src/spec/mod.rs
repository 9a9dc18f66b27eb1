//! Specification combinators for composable filtering logic
//!
//! This module provides the `Specification` trait and the pieces for
//! composing specifications into filter criteria. Specifications can be
//! combined using logical operators (`and`, `or`, `not`) to build complex
//! rules from simple, reusable pieces.
//!
//! # Philosophy
//!
//! Instead of hard-coding one filter method per attribute, specification
//! combinators let you:
//!
//! - Capture each criterion as a small, reusable value
//! - Compose criteria using familiar logical operators
//! - Add new criteria by adding new types, never by editing existing ones
//!
//! # Example
//!
//! ```rust
//! use specsieve::spec::*;
//!
//! // Define reusable specifications over u32
//! let round = attr(|n: &u32| n % 10, 0);
//! let small = one_of([0, 10, 20, 30]);
//!
//! // Check individual specifications
//! assert!(round.is_satisfied(&20));
//! assert!(!round.is_satisfied(&21));
//! assert!(round.and(small).is_satisfied(&30));
//! ```
//!
//! # Filtering a collection
//!
//! ```rust
//! use specsieve::spec::*;
//! use specsieve::sieve::sieve;
//!
//! let picked: Vec<u32> = sieve(vec![3, 10, 15, 20], attr(|n: &u32| n % 10, 0)).collect();
//! assert_eq!(picked, vec![10, 20]);
//! ```

mod combinators;
mod leaf;
mod verify;

pub mod prelude;

// Re-export core trait
pub use combinators::{Specification, SpecificationExt};

// Re-export combinator types
pub use combinators::{
    all_of, always, any_of, never, none_of, AllOf, Always, And, AnyOf, Never, NoneOf, Not, Or,
};

// Re-export leaf specifications
pub use leaf::{attr, equals, not_equals, one_of, Attr, Equals, NotEquals, OneOf};

// Re-export fail-fast verification
pub use verify::{ensure, ensure_with};
