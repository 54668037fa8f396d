//! Property-based tests for the partial lens laws.
//!
//! - **Absence no-op**: if `try_get(&s)` is `None`, then `set(s, a) == s`
//!   and `modify(s, f) == s` for any `a`, `f`.
//! - **Presence round-trip**: if `try_get(&s) == Some(a)`, then
//!   `try_get(&set(s, a)) == Some(a)` and `modify(s, identity) == s`.
//! - **Identity update**: a probed presence restored with its own value
//!   reproduces the source.
//! - **Short-circuit**: a composition whose inner leg is absent leaves
//!   the whole source unchanged on set, even when the outer leg is
//!   present.

#![cfg(feature = "optics")]

use focal::option_lens;
use focal::optics::PartialLens;
use proptest::prelude::*;

#[derive(Clone, PartialEq, Debug)]
struct StateCity {
    state: String,
    city: Option<String>,
}

#[derive(Clone, PartialEq, Debug)]
struct Search {
    name: Option<String>,
    state_city: Option<StateCity>,
}

prop_compose! {
    fn state_city_strategy()(
        state in any::<String>(),
        city in proptest::option::of(any::<String>()),
    ) -> StateCity {
        StateCity { state, city }
    }
}

prop_compose! {
    fn search_strategy()(
        name in proptest::option::of(any::<String>()),
        state_city in proptest::option::of(state_city_strategy()),
    ) -> Search {
        Search { name, state_city }
    }
}

proptest! {
    /// Absence no-op: setting through an absent field changes nothing.
    #[test]
    fn prop_absent_set_is_noop(search in search_strategy(), value in any::<String>()) {
        let state_city_lens = option_lens!(Search, state_city);
        let city_lens = state_city_lens.compose(option_lens!(StateCity, city));

        if city_lens.try_get(&search).is_none() {
            prop_assert_eq!(city_lens.set(search.clone(), value.clone()), search.clone());
            prop_assert_eq!(city_lens.modify(search.clone(), |city| city + "x"), search);
        }
    }

    /// Presence round-trip: setting back the current value changes nothing.
    #[test]
    fn prop_present_set_round_trips(search in search_strategy()) {
        let city_lens = option_lens!(Search, state_city)
            .compose(option_lens!(StateCity, city));

        if let Some(current) = city_lens.try_get(&search) {
            let rewritten = city_lens.set(search.clone(), current.clone());
            prop_assert_eq!(city_lens.try_get(&rewritten), Some(current));
            prop_assert_eq!(rewritten, search);
        }
    }

    /// `modify` with the identity function is the identity.
    #[test]
    fn prop_modify_identity(search in search_strategy()) {
        let city_lens = option_lens!(Search, state_city)
            .compose(option_lens!(StateCity, city));

        prop_assert_eq!(city_lens.modify(search.clone(), |city| city), search);
    }

    /// Identity update: restoring a probe reproduces the source.
    #[test]
    fn prop_probe_restore_reproduces_source(state_city in state_city_strategy()) {
        let city_lens = option_lens!(StateCity, city);

        match city_lens.probe(state_city.clone()) {
            Ok(presence) => prop_assert_eq!(presence.restore(), state_city),
            Err(returned) => prop_assert_eq!(returned, state_city),
        }
    }

    /// SetGet for partial lenses: a value written through a present path
    /// is the value read back.
    #[test]
    fn prop_present_set_then_get(search in search_strategy(), value in any::<String>()) {
        let city_lens = option_lens!(Search, state_city)
            .compose(option_lens!(StateCity, city));

        if city_lens.is_present(&search) {
            let updated = city_lens.set(search, value.clone());
            prop_assert_eq!(city_lens.try_get(&updated), Some(value));
        }
    }

    /// Short-circuit: outer present, inner absent - the composed set is a
    /// no-op on the whole source, not a partial update of the outer leg.
    #[test]
    fn prop_inner_absent_short_circuits(
        name in proptest::option::of(any::<String>()),
        state in any::<String>(),
        value in any::<String>(),
    ) {
        let search = Search {
            name,
            state_city: Some(StateCity { state, city: None }),
        };
        let city_lens = option_lens!(Search, state_city)
            .compose(option_lens!(StateCity, city));

        prop_assert_eq!(city_lens.set(search.clone(), value), search);
    }
}
