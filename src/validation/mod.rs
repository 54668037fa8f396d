//! Validation with error accumulation.
//!
//! This module combines several independently-validated inputs into one
//! constructed value, collecting *every* failure instead of stopping at
//! the first. The two pieces:
//!
//! - [`NonEmpty`]: an error list guaranteed to hold at least one error,
//!   concatenated when validations are combined.
//! - [`Validated`]: the outcome of a validation, either a constructed
//!   value or the accumulated errors, with the applicative operations
//!   ([`Validated::ap`], [`Validated::map2`], [`Validated::map3`]) that
//!   chain a lifted constructor over its validated arguments.
//!
//! Failure is carried entirely in the return type: validators are pure
//! functions, and there is no exception channel anywhere.
//!
//! # Example
//!
//! ```
//! use focal::validation::{validator, Validated};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, age: i32 }
//!
//! let mandatory = validator(|name: &String| !name.is_empty(), "Mandatory field");
//! let positive = validator(|age: &i32| *age > 0, "Field must be positive");
//!
//! // Both inputs invalid: both messages are reported, in argument order.
//! let outcome = mandatory(String::new())
//!     .map2(positive(-1), |name, age| Person { name, age });
//! assert_eq!(
//!     outcome.into_errors().unwrap().into_vec(),
//!     vec!["Mandatory field", "Field must be positive"],
//! );
//! ```

mod non_empty;
mod validated;

pub use non_empty::NonEmpty;
pub use validated::Validated;
pub use validated::validator;
