//! Property-based tests for the validation applicative.
//!
//! The laws exercised here:
//!
//! - **Accumulation**: combining k validated fields of which m fail yields
//!   exactly those m fields' errors, in declaration order; with m == 0 the
//!   constructed value is produced.
//! - **Functor**: `map` preserves identity and composition.
//! - **Applicative success**: `valid(f).ap(valid(x)) == valid(f(x))`.
//! - **Semigroup**: non-empty error lists concatenate associatively.
//!
//! Using proptest, random pass/fail patterns are generated to verify the
//! accumulation behavior across arbitrary field counts.

#![cfg(feature = "validation")]

use focal::typeclass::Semigroup;
use focal::validation::{NonEmpty, Validated};
use proptest::prelude::*;

fn validated_strategy() -> impl Strategy<Value = Validated<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Validated::valid),
        (any::<String>(), proptest::collection::vec(any::<String>(), 0..3))
            .prop_map(|(head, tail)| Validated::invalid_all(NonEmpty::new(head, tail))),
    ]
}

prop_compose! {
    fn non_empty_strategy()(
        head in any::<String>(),
        tail in proptest::collection::vec(any::<String>(), 0..4),
    ) -> NonEmpty<String> {
        NonEmpty::new(head, tail)
    }
}

// =============================================================================
// Accumulation
// =============================================================================

proptest! {
    /// Exactly the failing fields' errors survive, in declaration order.
    #[test]
    fn prop_accumulates_exactly_the_failures(outcomes in proptest::collection::vec(any::<bool>(), 1..8)) {
        let validations: Vec<Validated<usize, String>> = outcomes
            .iter()
            .enumerate()
            .map(|(index, passes)| {
                if *passes {
                    Validated::valid(index)
                } else {
                    Validated::invalid(format!("field {index} is invalid"))
                }
            })
            .collect();

        let combined = Validated::sequence(validations);

        let expected_errors: Vec<String> = outcomes
            .iter()
            .enumerate()
            .filter(|(_, passes)| !**passes)
            .map(|(index, _)| format!("field {index} is invalid"))
            .collect();

        if expected_errors.is_empty() {
            let expected_values: Vec<usize> = (0..outcomes.len()).collect();
            prop_assert_eq!(combined, Validated::valid(expected_values));
        } else {
            prop_assert_eq!(
                combined.into_errors().unwrap().into_vec(),
                expected_errors
            );
        }
    }

    /// map2 reports the left side's errors before the right side's.
    #[test]
    fn prop_map2_accumulates_left_first(left in any::<String>(), right in any::<String>()) {
        let first: Validated<i32, String> = Validated::invalid(left.clone());
        let second: Validated<i32, String> = Validated::invalid(right.clone());

        let combined = first.map2(second, |a, b| a + b);
        prop_assert_eq!(
            combined.into_errors().unwrap().into_vec(),
            vec![left, right]
        );
    }

    /// A single failure never masks the other side's success value path.
    #[test]
    fn prop_single_failure_is_reported_alone(value in any::<i32>(), error in any::<String>()) {
        let valid: Validated<i32, String> = Validated::valid(value);
        let invalid: Validated<i32, String> = Validated::invalid(error.clone());

        let left = invalid.clone().map2(valid.clone(), |a, b| a + b);
        let right = valid.map2(invalid, |a, b| a + b);

        prop_assert_eq!(left.into_errors().unwrap().into_vec(), vec![error.clone()]);
        prop_assert_eq!(right.into_errors().unwrap().into_vec(), vec![error]);
    }
}

// =============================================================================
// Functor and applicative laws
// =============================================================================

proptest! {
    /// Identity: mapping the identity function changes nothing.
    #[test]
    fn prop_map_identity(validated in validated_strategy()) {
        prop_assert_eq!(validated.clone().map(|value| value), validated);
    }

    /// Composition: mapping f then g equals mapping their composition.
    #[test]
    fn prop_map_composition(validated in validated_strategy()) {
        let double = |value: i32| value.wrapping_mul(2);
        let increment = |value: i32| value.wrapping_add(1);

        let stepwise = validated.clone().map(double).map(increment);
        let composed = validated.map(|value| increment(double(value)));
        prop_assert_eq!(stepwise, composed);
    }

    /// Applying a valid function to a valid value applies the function.
    #[test]
    fn prop_ap_on_success_applies(value in any::<i32>()) {
        let applied = Validated::<_, String>::valid(|x: i32| x.wrapping_add(1))
            .ap(Validated::valid(value));
        prop_assert_eq!(applied, Validated::valid(value.wrapping_add(1)));
    }

    /// `ap` and `map2` agree on every input combination.
    #[test]
    fn prop_ap_agrees_with_map2(left in validated_strategy(), right in validated_strategy()) {
        let via_ap = left
            .clone()
            .map(|a| move |b: i32| (a, b))
            .ap(right.clone());
        let via_map2 = left.map2(right, |a, b| (a, b));
        prop_assert_eq!(via_ap, via_map2);
    }
}

// =============================================================================
// Error-list semigroup
// =============================================================================

proptest! {
    /// Concatenation of non-empty lists is associative.
    #[test]
    fn prop_non_empty_combine_associative(
        a in non_empty_strategy(),
        b in non_empty_strategy(),
        c in non_empty_strategy(),
    ) {
        prop_assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    /// Concatenation preserves every element, left operand first.
    #[test]
    fn prop_non_empty_combine_preserves_order(a in non_empty_strategy(), b in non_empty_strategy()) {
        let mut expected: Vec<String> = a.iter().cloned().collect();
        expected.extend(b.iter().cloned());
        prop_assert_eq!(a.combine(b).into_vec(), expected);
    }
}
