//! Leaf specifications
//!
//! This module provides the leaf specifications that decision trees are
//! built from: whole-value equality, membership, and attribute projection.
//! Each leaf holds one comparison value; matching is exact value equality,
//! never partial or fuzzy.

use super::combinators::Specification;

/// Specification for whole-value equality.
#[derive(Clone, Copy, Debug)]
pub struct Equals<T>(pub T);

impl<T: PartialEq + Send + Sync> Specification<T> for Equals<T> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        *item == self.0
    }
}

/// Create a specification satisfied when the item equals the given value.
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
///
/// assert!(equals(5).is_satisfied(&5));
/// assert!(!equals(5).is_satisfied(&4));
/// ```
pub fn equals<T: PartialEq + Send + Sync>(value: T) -> Equals<T> {
    Equals(value)
}

/// Specification for whole-value inequality.
#[derive(Clone, Copy, Debug)]
pub struct NotEquals<T>(pub T);

impl<T: PartialEq + Send + Sync> Specification<T> for NotEquals<T> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        *item != self.0
    }
}

/// Create a specification satisfied when the item differs from the value.
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
///
/// assert!(not_equals(5).is_satisfied(&4));
/// assert!(!not_equals(5).is_satisfied(&5));
/// ```
pub fn not_equals<T: PartialEq + Send + Sync>(value: T) -> NotEquals<T> {
    NotEquals(value)
}

/// Specification for membership in a fixed set of values.
///
/// Uses a fixed-size array to avoid heap allocation, like the const
/// generic combinators.
#[derive(Clone, Copy, Debug)]
pub struct OneOf<T, const N: usize>(pub [T; N]);

impl<T: PartialEq + Send + Sync, const N: usize> Specification<T> for OneOf<T, N> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.0.iter().any(|v| v == item)
    }
}

/// Create a specification satisfied when the item equals any listed value.
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
///
/// let vowel = one_of(['a', 'e', 'i', 'o', 'u']);
/// assert!(vowel.is_satisfied(&'e'));
/// assert!(!vowel.is_satisfied(&'z'));
/// ```
pub fn one_of<T: PartialEq + Send + Sync, const N: usize>(values: [T; N]) -> OneOf<T, N> {
    OneOf(values)
}

/// Specification comparing one attribute of an item to a fixed value.
///
/// Holds an attribute getter and the expected value; satisfied iff the
/// projected attribute equals that value. This is the open/closed
/// extension point: supporting a new filterable attribute is a new `attr`
/// call (or a new named leaf type wrapping one), never an edit to code
/// that already exists.
#[derive(Clone, Copy, Debug)]
pub struct Attr<F, V> {
    get: F,
    expected: V,
}

impl<T, V, F> Specification<T> for Attr<F, V>
where
    T: ?Sized,
    V: PartialEq + Send + Sync,
    F: Fn(&T) -> V + Send + Sync,
{
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        (self.get)(item) == self.expected
    }
}

/// Create a specification comparing one attribute to a fixed value.
///
/// The getter returns the attribute by value; for cheap-to-copy fields
/// (numbers, `Copy` enums) this is a plain field read.
///
/// # Example
///
/// ```rust
/// use specsieve::spec::*;
///
/// struct Point { x: i32, y: i32 }
///
/// let on_axis = attr(|p: &Point| p.x, 0);
/// assert!(on_axis.is_satisfied(&Point { x: 0, y: 9 }));
/// assert!(!on_axis.is_satisfied(&Point { x: 3, y: 9 }));
/// ```
pub fn attr<V, F>(get: F, expected: V) -> Attr<F, V> {
    Attr { get, expected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::SpecificationExt;

    #[derive(Clone, Debug, PartialEq)]
    struct Widget {
        label: &'static str,
        weight: u32,
    }

    #[test]
    fn test_equals_is_value_equality() {
        let a = Widget { label: "a", weight: 1 };
        let a_again = Widget { label: "a", weight: 1 };
        // value equality, not identity
        assert!(equals(a).is_satisfied(&a_again));
    }

    #[test]
    fn test_not_equals() {
        assert!(not_equals(3).is_satisfied(&4));
        assert!(!not_equals(3).is_satisfied(&3));
    }

    #[test]
    fn test_one_of() {
        let s = one_of([1, 2, 3]);
        assert!(s.is_satisfied(&2));
        assert!(!s.is_satisfied(&4));
    }

    #[test]
    fn test_attr_matches_projected_field() {
        let heavy = attr(|w: &Widget| w.weight, 10);
        assert!(heavy.is_satisfied(&Widget { label: "x", weight: 10 }));
        assert!(!heavy.is_satisfied(&Widget { label: "x", weight: 3 }));
    }

    #[test]
    fn test_attr_law() {
        // attr(get, v).is_satisfied(x) == (get(x) == v)
        let w = Widget { label: "law", weight: 7 };
        let get = |w: &Widget| w.weight;
        for v in 0..16 {
            assert_eq!(attr(get, v).is_satisfied(&w), get(&w) == v);
        }
    }

    #[test]
    fn test_attrs_compose() {
        let s = attr(|w: &Widget| w.label, "a").and(attr(|w: &Widget| w.weight, 1));
        assert!(s.is_satisfied(&Widget { label: "a", weight: 1 }));
        assert!(!s.is_satisfied(&Widget { label: "a", weight: 2 }));
        assert!(!s.is_satisfied(&Widget { label: "b", weight: 1 }));
    }
}
