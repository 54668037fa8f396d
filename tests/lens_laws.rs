//! Property-based tests for the lens laws.
//!
//! Every lens must satisfy:
//!
//! - **GetSet**: `lens.set(s.clone(), lens.get(&s).clone()) == s`
//! - **SetGet**: `lens.get(&lens.set(s, a)) == &a`
//! - **SetSet**: `lens.set(lens.set(s, a1), a2) == lens.set(s, a2)`
//!
//! plus the corollaries exercised here: idempotent double-set, the
//! equivalence of `modify` with get-then-set, and associativity of
//! composition.
//!
//! Using proptest, random sources and replacement values are generated to
//! verify the laws across a wide range of inputs.

#![cfg(feature = "optics")]

use focal::lens;
use focal::optics::Lens;
use proptest::prelude::*;

#[derive(Clone, PartialEq, Debug)]
struct Person {
    name: String,
    age: u32,
}

#[derive(Clone, PartialEq, Debug)]
struct Address {
    street: String,
    resident: Person,
}

#[derive(Clone, PartialEq, Debug)]
struct Household {
    address: Address,
}

prop_compose! {
    fn person_strategy()(name in any::<String>(), age in any::<u32>()) -> Person {
        Person { name, age }
    }
}

prop_compose! {
    fn address_strategy()(street in any::<String>(), resident in person_strategy()) -> Address {
        Address { street, resident }
    }
}

prop_compose! {
    fn household_strategy()(address in address_strategy()) -> Household {
        Household { address }
    }
}

// =============================================================================
// The three lens laws
// =============================================================================

proptest! {
    /// GetSet Law: setting back what was just read yields the original.
    #[test]
    fn prop_get_set(person in person_strategy()) {
        let name_lens = lens!(Person, name);

        let current = name_lens.get(&person).clone();
        prop_assert_eq!(name_lens.set(person.clone(), current), person);
    }

    /// SetGet Law: reading after a set yields the value that was set.
    #[test]
    fn prop_set_get(person in person_strategy(), name in any::<String>()) {
        let name_lens = lens!(Person, name);

        let updated = name_lens.set(person, name.clone());
        prop_assert_eq!(name_lens.get(&updated), &name);
    }

    /// SetSet Law: of two consecutive sets, only the later one matters.
    #[test]
    fn prop_set_set(person in person_strategy(), first in any::<String>(), second in any::<String>()) {
        let name_lens = lens!(Person, name);

        let twice = name_lens.set(name_lens.set(person.clone(), first), second.clone());
        let once = name_lens.set(person, second);
        prop_assert_eq!(twice, once);
    }

    /// Corollary: setting the same value twice equals setting it once.
    #[test]
    fn prop_double_set_idempotent(person in person_strategy(), name in any::<String>()) {
        let name_lens = lens!(Person, name);

        let once = name_lens.set(person.clone(), name.clone());
        let twice = name_lens.set(name_lens.set(person, name.clone()), name);
        prop_assert_eq!(twice, once);
    }

    /// `modify` is get-then-transform-then-set.
    #[test]
    fn prop_modify_is_get_then_set(person in person_strategy()) {
        let age_lens = lens!(Person, age);

        let via_modify = age_lens.modify(person.clone(), |age| age.wrapping_mul(2));
        let transformed = age_lens.get(&person).wrapping_mul(2);
        let via_get_set = age_lens.set(person, transformed);
        prop_assert_eq!(via_modify, via_get_set);
    }
}

// =============================================================================
// Composition
// =============================================================================

proptest! {
    /// Left- and right-associated composition read identically.
    #[test]
    fn prop_compose_associativity_get(household in household_strategy()) {
        let left = lens!(Household, address)
            .compose(lens!(Address, resident))
            .compose(lens!(Person, name));
        let right = lens!(Household, address)
            .compose(lens!(Address, resident).compose(lens!(Person, name)));

        prop_assert_eq!(left.get(&household), right.get(&household));
    }

    /// Left- and right-associated composition write identically.
    #[test]
    fn prop_compose_associativity_set(household in household_strategy(), name in any::<String>()) {
        let left = lens!(Household, address)
            .compose(lens!(Address, resident))
            .compose(lens!(Person, name));
        let right = lens!(Household, address)
            .compose(lens!(Address, resident).compose(lens!(Person, name)));

        prop_assert_eq!(
            left.set(household.clone(), name.clone()),
            right.set(household, name)
        );
    }

    /// A composed lens satisfies the lens laws itself.
    #[test]
    fn prop_composed_lens_laws(household in household_strategy(), name in any::<String>()) {
        let resident_name = lens!(Household, address)
            .compose(lens!(Address, resident))
            .compose(lens!(Person, name));

        // GetSet
        let current = resident_name.get(&household).clone();
        prop_assert_eq!(resident_name.set(household.clone(), current), household.clone());

        // SetGet
        let updated = resident_name.set(household, name.clone());
        prop_assert_eq!(resident_name.get(&updated), &name);
    }
}
