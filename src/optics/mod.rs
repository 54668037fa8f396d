//! Optics for reading and immutably updating fields of immutable values.
//!
//! An optic focuses on one part of a larger value, giving type-safe read
//! and write access to deeply nested fields without mutation: every write
//! produces a new value.
//!
//! # Available Optics
//!
//! - [`Lens`]: Total access to a field that is always present (get/set)
//! - [`PartialLens`]: Access to a field that may be absent; absence is a
//!   first-class outcome, and writing through an absent path is a no-op
//! - [`BoundLens`] / [`BoundPartialLens`]: A lens pre-applied to one fixed
//!   instance, for ergonomic chained calls
//!
//! # Composition
//!
//! Lenses compose with lenses ([`Lens::compose`]), partial lenses with
//! partial lenses ([`PartialLens::compose`]), and the two mix freely: a
//! total lens degrades to an always-present partial lens
//! ([`LensPartialExtension::to_partial`]), so either leg of a partial
//! composition may be total. A composed partial lens is present exactly
//! when both legs are.
//!
//! # Example
//!
//! ```
//! use focal::optics::PartialLens;
//! use focal::option_lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct StateCity { state: String, city: Option<String> }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Search { name: Option<String>, state_city: Option<StateCity> }
//!
//! let search_city =
//!     option_lens!(Search, state_city).compose(option_lens!(StateCity, city));
//!
//! // No state at all: setting the city is a no-op on the whole search.
//! let no_state = Search { name: Some("John".to_string()), state_city: None };
//! let unchanged = search_city.set(no_state.clone(), "Orlando".to_string());
//! assert_eq!(unchanged, no_state);
//! ```
//!
//! # Lens Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetSet Law**: Setting back what was just read yields the original.
//!    ```text
//!    lens.set(source.clone(), lens.get(&source).clone()) == source
//!    ```
//!
//! 2. **SetGet Law**: Reading after a set yields the value that was set.
//!    ```text
//!    lens.get(&lens.set(source, value)) == &value
//!    ```
//!
//! 3. **SetSet Law**: Of two consecutive sets, only the later one matters.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! # Partial Lens Laws
//!
//! 1. **Absence no-op**: if `try_get(&s)` is `None`, then `set(s, a) == s`
//!    and `modify(s, f) == s` for any `a`, `f`.
//! 2. **Presence round-trip**: if `try_get(&s) == Some(a)`, then
//!    `try_get(&set(s, a)) == Some(a)` and `modify(s, identity) == s`.

mod bound;
mod lens;
mod partial;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;

// Re-export all partial-lens-related types and traits
pub use partial::ComposedPartialLens;
pub use partial::FunctionPartialLens;
pub use partial::LensAsPartial;
pub use partial::LensPartialExtension;
pub use partial::OptionFieldLens;
pub use partial::PartialLens;
pub use partial::Presence;

// Re-export the instance-bound wrappers
pub use bound::BoundLens;
pub use bound::BoundPartialLens;
pub use bound::LensBindExtension;
pub use bound::PartialLensBindExtension;
