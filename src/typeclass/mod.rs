//! Algebra traits underpinning the validation types.
//!
//! The only type class this crate needs is [`Semigroup`]: types with an
//! associative binary operation. Error accumulation in
//! [`Validated`](crate::validation::Validated) is defined entirely in terms
//! of it: merging two non-empty error lists is a `combine`.
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::Semigroup;
//!
//! // String concatenation
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! // Vec concatenation
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! ```

mod semigroup;

pub use semigroup::Semigroup;
