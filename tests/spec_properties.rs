//! Property-based tests for the specification laws

use proptest::prelude::*;
use specsieve::prelude::*;

/// A specification satisfied iff the item is divisible by the captured divisor.
#[derive(Clone, Copy, Debug)]
struct DivisibleBy(i64);

impl Specification<i64> for DivisibleBy {
    fn is_satisfied(&self, item: &i64) -> bool {
        item % self.0 == 0
    }
}

proptest! {
    #[test]
    fn prop_leaf_law(values in prop::collection::vec(any::<i64>(), 0..100), needle in any::<i64>()) {
        // equals(v).is_satisfied(x) == (x == v)
        for x in &values {
            prop_assert_eq!(equals(needle).is_satisfied(x), *x == needle);
        }
    }

    #[test]
    fn prop_and_agrees_with_boolean_and(x in any::<i64>(), a in 1i64..50, b in 1i64..50) {
        let left = DivisibleBy(a);
        let right = DivisibleBy(b);
        prop_assert_eq!(
            left.and(right).is_satisfied(&x),
            left.is_satisfied(&x) && right.is_satisfied(&x)
        );
        // commutative in result
        prop_assert_eq!(
            left.and(right).is_satisfied(&x),
            right.and(left).is_satisfied(&x)
        );
    }

    #[test]
    fn prop_or_and_not_agree_with_boolean_forms(x in any::<i64>(), a in 1i64..50, b in 1i64..50) {
        let left = DivisibleBy(a);
        let right = DivisibleBy(b);
        prop_assert_eq!(
            left.or(right).is_satisfied(&x),
            left.is_satisfied(&x) || right.is_satisfied(&x)
        );
        prop_assert_eq!(left.not().is_satisfied(&x), !left.is_satisfied(&x));
    }

    #[test]
    fn prop_sieve_yields_ordered_subsequence(
        values in prop::collection::vec(any::<i64>(), 0..100),
        divisor in 1i64..20,
    ) {
        let out: Vec<i64> = sieve(values.clone(), DivisibleBy(divisor)).collect();

        // never longer than the input
        prop_assert!(out.len() <= values.len());

        // a subsequence: every output item appears in the input in order
        let mut input = values.iter();
        for item in &out {
            prop_assert!(input.any(|v| v == item));
        }

        // exactly the matching items survive
        let expected: Vec<i64> = values.iter().copied().filter(|v| v % divisor == 0).collect();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn prop_sieve_is_idempotent(
        values in prop::collection::vec(any::<i64>(), 0..100),
        divisor in 1i64..20,
    ) {
        let spec = DivisibleBy(divisor);
        let once: Vec<i64> = sieve(values, spec).collect();
        let twice: Vec<i64> = sieve(once.clone(), spec).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_never_yields_empty_always_yields_all(
        values in prop::collection::vec(any::<i64>(), 0..100),
    ) {
        let none: Vec<i64> = sieve(values.clone(), never()).collect();
        prop_assert!(none.is_empty());

        let all: Vec<i64> = sieve(values.clone(), always()).collect();
        prop_assert_eq!(all, values);
    }

    #[test]
    fn prop_demorgan(x in any::<i64>(), a in 1i64..50, b in 1i64..50) {
        let left = DivisibleBy(a);
        let right = DivisibleBy(b);
        // !(A && B) == !A || !B
        prop_assert_eq!(
            left.and(right).not().is_satisfied(&x),
            left.not().or(right.not()).is_satisfied(&x)
        );
    }

    #[test]
    fn prop_array_combinators_match_chaining(x in any::<i64>(), a in 1i64..50, b in 1i64..50) {
        let arr = all_of([DivisibleBy(a), DivisibleBy(b)]);
        let chained = DivisibleBy(a).and(DivisibleBy(b));
        prop_assert_eq!(arr.is_satisfied(&x), chained.is_satisfied(&x));

        let arr = any_of([DivisibleBy(a), DivisibleBy(b)]);
        let chained = DivisibleBy(a).or(DivisibleBy(b));
        prop_assert_eq!(arr.is_satisfied(&x), chained.is_satisfied(&x));

        let arr = none_of([DivisibleBy(a), DivisibleBy(b)]);
        let chained = DivisibleBy(a).or(DivisibleBy(b)).not();
        prop_assert_eq!(arr.is_satisfied(&x), chained.is_satisfied(&x));
    }

    #[test]
    fn prop_ensure_round_trips_satisfying_values(x in any::<i64>(), divisor in 1i64..20) {
        let spec = DivisibleBy(divisor);
        let result = ensure(x, spec, "does not hold");
        if spec.is_satisfied(&x) {
            prop_assert_eq!(result, Ok(x));
        } else {
            prop_assert_eq!(result, Err("does not hold"));
        }
    }
}
