//! Specification prelude for convenient imports
//!
//! This module re-exports the most commonly used specification types and
//! functions.
//!
//! # Example
//!
//! ```rust
//! use specsieve::spec::prelude::*;
//!
//! let s = equals(2).or(equals(4));
//! assert!(s.is_satisfied(&4));
//! ```

// Core trait
pub use super::combinators::{Specification, SpecificationExt};

// Logical combinators
pub use super::combinators::{all_of, always, any_of, never, none_of, And, Not, Or};

// Leaf specifications
pub use super::leaf::{attr, equals, not_equals, one_of};

// Fail-fast verification
pub use super::verify::{ensure, ensure_with};
