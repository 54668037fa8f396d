//! # focal
//!
//! Composable optics and error-accumulating validation for immutable data.
//!
//! ## Overview
//!
//! This library provides two small, purely functional toolkits:
//!
//! - **Optics**: [`Lens`](optics::Lens) for total access to a field of an
//!   immutable value, [`PartialLens`](optics::PartialLens) for fields whose
//!   presence is conditional, composition of both, and instance-bound
//!   wrappers ([`BoundLens`](optics::BoundLens),
//!   [`BoundPartialLens`](optics::BoundPartialLens)) for ergonomic call
//!   sites.
//! - **Validation**: [`Validated`](validation::Validated), an applicative
//!   that combines independently validated inputs and accumulates *every*
//!   failure in a [`NonEmpty`](validation::NonEmpty) error list instead of
//!   short-circuiting on the first.
//!
//! Every operation is synchronous and free of observable side effects:
//! "updating" through a lens always returns a new value and never mutates
//! the original.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Algebra traits (`Semigroup`)
//! - `optics`: Lenses, partial lenses, and bound wrappers
//! - `validation`: Non-empty error lists and validated values
//! - `serde`: Serialization for the data-carrying validation types
//! - `full`: Enable all of the above
//!
//! ## Example
//!
//! ```rust
//! use focal::lens;
//! use focal::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, age: u32 }
//!
//! let name_lens = lens!(Person, name);
//!
//! let john = Person { name: "john".to_string(), age: 55 };
//! assert_eq!(*name_lens.get(&john), "john");
//!
//! let hector = name_lens.set(john, "hector".to_string());
//! assert_eq!(hector.name, "hector");
//! assert_eq!(hector.age, 55);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use focal::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "validation")]
    pub use crate::validation::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "validation")]
pub mod validation;
