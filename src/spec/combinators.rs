//! Core specification trait and logical combinators
//!
//! This module provides the foundational `Specification` trait and the
//! logical combinators for composing specifications into decision trees.

/// A composable boolean decision rule over values of type T.
///
/// A specification captures one filtering criterion as a value. New
/// criteria are added by writing new implementations, never by editing
/// existing ones, which is the open/closed property this crate is built
/// around.
///
/// Specifications combine with logical operators:
/// - `and`: both specifications must hold
/// - `or`: either specification must hold
/// - `not`: inverts the specification
///
/// Implementations must be deterministic and side-effect-free: the same
/// item and the same captured parameters always produce the same answer.
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
///
/// let small_word = attr(|s: &String| s.len(), 3).or(attr(|s: &String| s.len(), 4));
/// assert!(small_word.is_satisfied(&String::from("tree")));
/// assert!(!small_word.is_satisfied(&String::from("house!")));
/// ```
pub trait Specification<T: ?Sized>: Send + Sync {
    /// Check whether the item satisfies this specification.
    fn is_satisfied(&self, item: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Specification<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self(item)
    }
}

/// Extension trait for specification combinators.
///
/// Provides method chaining for combining specifications with logical
/// operators. All methods return concrete types for zero-cost abstraction.
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
///
/// let s = equals(7).or(equals(11)).not();
/// assert!(s.is_satisfied(&5));
/// assert!(!s.is_satisfied(&7));
/// ```
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    /// Combine with AND logic.
    ///
    /// Returns a specification satisfied only when both children are
    /// satisfied. Evaluation is left-to-right and short-circuits when the
    /// left child fails; children are pure, so the short-circuit is not
    /// observable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specsieve::spec::*;
    ///
    /// let s = one_of([1, 2, 3]).and(equals(2));
    /// assert!(s.is_satisfied(&2));
    /// assert!(!s.is_satisfied(&1));
    /// assert!(!s.is_satisfied(&9));
    /// ```
    fn and<S: Specification<T>>(self, other: S) -> And<Self, S> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// Returns a specification satisfied when either child is satisfied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specsieve::spec::*;
    ///
    /// let s = equals(1).or(equals(2));
    /// assert!(s.is_satisfied(&1));
    /// assert!(s.is_satisfied(&2));
    /// assert!(!s.is_satisfied(&3));
    /// ```
    fn or<S: Specification<T>>(self, other: S) -> Or<Self, S> {
        Or(self, other)
    }

    /// Invert the specification.
    ///
    /// Returns a specification satisfied exactly when the original is not.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specsieve::spec::*;
    ///
    /// let s = equals(5).not();
    /// assert!(s.is_satisfied(&4));
    /// assert!(!s.is_satisfied(&5));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}

/// AND combinator - both children must be satisfied.
#[derive(Clone, Copy, Debug)]
pub struct And<S1, S2>(pub S1, pub S2);

impl<T: ?Sized, S1: Specification<T>, S2: Specification<T>> Specification<T> for And<S1, S2> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.0.is_satisfied(item) && self.1.is_satisfied(item)
    }
}

/// OR combinator - either child must be satisfied.
#[derive(Clone, Copy, Debug)]
pub struct Or<S1, S2>(pub S1, pub S2);

impl<T: ?Sized, S1: Specification<T>, S2: Specification<T>> Specification<T> for Or<S1, S2> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.0.is_satisfied(item) || self.1.is_satisfied(item)
    }
}

/// NOT combinator - inverts the child.
#[derive(Clone, Copy, Debug)]
pub struct Not<S>(pub S);

impl<T: ?Sized, S: Specification<T>> Specification<T> for Not<S> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        !self.0.is_satisfied(item)
    }
}

// Send + Sync are auto-derived for the combinators when their children are

/// Specification satisfied by every item.
#[derive(Clone, Copy, Default, Debug)]
pub struct Always;

impl<T: ?Sized> Specification<T> for Always {
    #[inline]
    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }
}

/// Create a specification satisfied by every item.
///
/// Filtering by `always()` returns the input unchanged; it is the identity
/// of `and` and the absorbing element of `or`.
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
///
/// assert!(always().is_satisfied(&42));
/// assert!(always().is_satisfied(&"anything"));
/// ```
pub fn always() -> Always {
    Always
}

/// Specification satisfied by no item.
#[derive(Clone, Copy, Default, Debug)]
pub struct Never;

impl<T: ?Sized> Specification<T> for Never {
    #[inline]
    fn is_satisfied(&self, _item: &T) -> bool {
        false
    }
}

/// Create a specification satisfied by no item.
///
/// Filtering by `never()` yields an empty sequence for any input.
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
///
/// assert!(!never().is_satisfied(&42));
/// ```
pub fn never() -> Never {
    Never
}

/// Check if all specifications are satisfied (const generic, zero-allocation).
///
/// Uses a fixed-size array to avoid heap allocation.
/// Note: all_of requires homogeneous specification types.
/// For mixed specifications, use `.and()` chaining instead.
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
///
/// let none_forbidden = all_of([equals(0).not(), equals(1).not()]);
/// assert!(none_forbidden.is_satisfied(&7));
/// assert!(!none_forbidden.is_satisfied(&1));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AllOf<S, const N: usize>(pub [S; N]);

impl<T: ?Sized, S: Specification<T>, const N: usize> Specification<T> for AllOf<S, N> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.0.iter().all(|s| s.is_satisfied(item))
    }
}

/// Create a specification satisfied when every given specification is.
///
/// Note: all_of requires homogeneous specification types.
/// For mixed specifications, use `.and()` chaining instead.
pub fn all_of<S, const N: usize>(specs: [S; N]) -> AllOf<S, N> {
    AllOf(specs)
}

/// Check if any specification is satisfied (const generic, zero-allocation).
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
///
/// let special = any_of([equals(1), equals(5), equals(10)]);
/// assert!(special.is_satisfied(&5));
/// assert!(!special.is_satisfied(&7));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<S, const N: usize>(pub [S; N]);

impl<T: ?Sized, S: Specification<T>, const N: usize> Specification<T> for AnyOf<S, N> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.0.iter().any(|s| s.is_satisfied(item))
    }
}

/// Create a specification satisfied when any given specification is.
pub fn any_of<S, const N: usize>(specs: [S; N]) -> AnyOf<S, N> {
    AnyOf(specs)
}

/// Check if no specification is satisfied (const generic, zero-allocation).
///
/// Equivalent to `any_of(...).not()` but more direct.
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
///
/// let no_special = none_of([equals(1), equals(5), equals(10)]);
/// assert!(no_special.is_satisfied(&7));
/// assert!(!no_special.is_satisfied(&5));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<S, const N: usize>(pub [S; N]);

impl<T: ?Sized, S: Specification<T>, const N: usize> Specification<T> for NoneOf<S, N> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        !self.0.iter().any(|s| s.is_satisfied(item))
    }
}

/// Create a specification satisfied when none of the given specifications are.
pub fn none_of<S, const N: usize>(specs: [S; N]) -> NoneOf<S, N> {
    NoneOf(specs)
}
