//! Applying specifications to collections
//!
//! The sieve is the generic filter: it takes an ordered sequence and a
//! specification and yields the matching subsequence. The result is a
//! lazy, single-pass iterator - items are tested one at a time as the
//! caller pulls them, relative order is preserved, and neither the input
//! nor the specification is mutated.
//!
//! # Example
//!
//! ```rust
//! use specsieve::sieve::{sieve, SieveIteratorExt};
//!
//! let evens: Vec<i32> = sieve(vec![1, 2, 3, 4], |n: &i32| n % 2 == 0).collect();
//! assert_eq!(evens, vec![2, 4]);
//!
//! // Or as an iterator adapter
//! let odds: Vec<i32> = (1..=5).satisfying(|n: &i32| n % 2 == 1).collect();
//! assert_eq!(odds, vec![1, 3, 5]);
//! ```

use crate::spec::Specification;

/// Lazy iterator over the items of a sequence that satisfy a specification.
///
/// Created by [`sieve`] or [`SieveIteratorExt::satisfying`]. Like any
/// iterator it is one-shot: consuming it exhausts it, and filtering the
/// same data again means building a new sieve.
#[derive(Clone, Debug)]
pub struct Sieve<I, S> {
    iter: I,
    spec: S,
}

impl<I, S> Iterator for Sieve<I, S>
where
    I: Iterator,
    S: Specification<I::Item>,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let spec = &self.spec;
        let found = self.iter.find(|item| spec.is_satisfied(item));
        #[cfg(feature = "tracing")]
        match &found {
            Some(_) => tracing::trace!("sieve: item satisfied specification, yielding"),
            None => tracing::trace!("sieve: sequence exhausted"),
        }
        found
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every item may fail the specification, or every item may pass.
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// Filter a sequence by a specification.
///
/// Accepts anything iterable and returns the lazy subsequence of items
/// the specification is satisfied by, in their original relative order.
/// Collect it, loop over it, or chain further adapters; evaluation
/// happens on demand.
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
/// use specsieve::sieve::sieve;
///
/// let words = vec!["apple", "tree", "house"];
/// let green: Vec<&str> = sieve(words, attr(|w: &&str| w.len(), 5)).collect();
/// assert_eq!(green, vec!["apple", "house"]);
/// ```
pub fn sieve<I, S>(items: I, spec: S) -> Sieve<I::IntoIter, S>
where
    I: IntoIterator,
    S: Specification<I::Item>,
{
    Sieve {
        iter: items.into_iter(),
        spec,
    }
}

/// Extension trait hanging the sieve off any iterator.
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
/// use specsieve::sieve::SieveIteratorExt;
///
/// let picked: Vec<i32> = vec![1, 5, 9].into_iter().satisfying(equals(5)).collect();
/// assert_eq!(picked, vec![5]);
/// ```
pub trait SieveIteratorExt: Iterator + Sized {
    /// Keep only the items that satisfy the specification.
    fn satisfying<S: Specification<Self::Item>>(self, spec: S) -> Sieve<Self, S> {
        Sieve { iter: self, spec }
    }
}

impl<I: Iterator> SieveIteratorExt for I {}
