//! Validated values - success or accumulated failures.
//!
//! [`Validated`] is a tagged union of a successfully constructed value and
//! a non-empty list of errors. Unlike `Result`, combining several
//! `Validated` values does not stop at the first failure: every failing
//! input contributes its errors to the outcome, in declaration order.
//!
//! A value is either fully constructed or not constructed at all; there is
//! no partial success, and no error ever masks another.
//!
//! # Examples
//!
//! ```
//! use focal::validation::{validator, Validated};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, age: i32 }
//!
//! fn mandatory(name: String) -> Validated<String, String> {
//!     validator(|name: &String| !name.is_empty(), "Mandatory field".to_string())(name)
//! }
//!
//! fn positive(age: i32) -> Validated<i32, String> {
//!     if age > 0 {
//!         Validated::valid(age)
//!     } else {
//!         Validated::invalid("Field must be positive".to_string())
//!     }
//! }
//!
//! let person = mandatory("john".to_string())
//!     .map2(positive(55), |name, age| Person { name, age });
//! assert_eq!(person, Validated::valid(Person { name: "john".to_string(), age: 55 }));
//!
//! let errors = mandatory(String::new())
//!     .map2(positive(-1), |name, age| Person { name, age });
//! assert_eq!(
//!     errors.into_errors().unwrap().into_vec(),
//!     vec!["Mandatory field".to_string(), "Field must be positive".to_string()],
//! );
//! ```

use super::non_empty::NonEmpty;
use crate::typeclass::Semigroup;

/// The outcome of a validation: a constructed value or every error that
/// prevented construction.
///
/// # Type Parameters
///
/// * `T` - The type of the successfully constructed value
/// * `E` - The type of a single error
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validated<T, E> {
    /// A successfully constructed value.
    Valid(T),
    /// The accumulated errors of every failed input. Never empty.
    Invalid(NonEmpty<E>),
}

impl<T, E> Validated<T, E> {
    /// Creates a valid value.
    #[must_use]
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value carrying a single error.
    #[must_use]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(NonEmpty::singleton(error))
    }

    /// Creates an invalid value carrying every given error.
    #[must_use]
    pub const fn invalid_all(errors: NonEmpty<E>) -> Self {
        Self::Invalid(errors)
    }

    /// Returns `true` if this is a `Valid` value.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if this is an `Invalid` value.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns a reference to the constructed value, if any.
    #[inline]
    pub const fn valid_ref(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns a reference to the accumulated errors, if any.
    #[inline]
    pub const fn invalid_ref(&self) -> Option<&NonEmpty<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Consumes the validated value, returning the constructed value.
    #[inline]
    pub fn into_valid(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Consumes the validated value, returning the accumulated errors.
    #[inline]
    pub fn into_errors(self) -> Option<NonEmpty<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Maps a function over the constructed value, leaving errors as-is.
    pub fn map<U, F>(self, function: F) -> Validated<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validated::Valid(function(value)),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Maps a function over every accumulated error, leaving a valid value
    /// as-is.
    pub fn map_invalid<E2, F>(self, function: F) -> Validated<T, E2>
    where
        F: FnMut(E) -> E2,
    {
        match self {
            Self::Valid(value) => Validated::Valid(value),
            Self::Invalid(errors) => Validated::Invalid(errors.map(function)),
        }
    }

    /// Applies a validated function to a validated argument, accumulating
    /// errors from both sides.
    ///
    /// This is the applicative step that chains a lifted constructor over
    /// its validated arguments:
    ///
    /// - `Valid(f)` × `Valid(a)` → `Valid(f(a))`
    /// - `Valid(f)` × `Invalid(e)` → `Invalid(e)`
    /// - `Invalid(e)` × `Valid(_)` → `Invalid(e)`
    /// - `Invalid(e1)` × `Invalid(e2)` → `Invalid(e1 ++ e2)`
    ///
    /// # Example
    ///
    /// ```
    /// use focal::validation::Validated;
    ///
    /// let person = Validated::<_, String>::valid(|name: String| move |age: u32| (name, age))
    ///     .ap(Validated::valid("john".to_string()))
    ///     .ap(Validated::valid(55));
    /// assert_eq!(person, Validated::valid(("john".to_string(), 55)));
    /// ```
    pub fn ap<A, B>(self, next: Validated<A, E>) -> Validated<B, E>
    where
        T: FnOnce(A) -> B,
    {
        match (self, next) {
            (Self::Valid(function), Validated::Valid(value)) => {
                Validated::Valid(function(value))
            }
            (Self::Valid(_), Validated::Invalid(errors))
            | (Self::Invalid(errors), Validated::Valid(_)) => Validated::Invalid(errors),
            (Self::Invalid(left), Validated::Invalid(right)) => {
                Validated::Invalid(left.combine(right))
            }
        }
    }

    /// Combines two validated values with a binary function, accumulating
    /// errors from both sides in argument order.
    pub fn map2<U, C, F>(self, other: Validated<U, E>, function: F) -> Validated<C, E>
    where
        F: FnOnce(T, U) -> C,
    {
        match (self, other) {
            (Self::Valid(first), Validated::Valid(second)) => {
                Validated::Valid(function(first, second))
            }
            (Self::Valid(_), Validated::Invalid(errors))
            | (Self::Invalid(errors), Validated::Valid(_)) => Validated::Invalid(errors),
            (Self::Invalid(left), Validated::Invalid(right)) => {
                Validated::Invalid(left.combine(right))
            }
        }
    }

    /// Combines three validated values with a ternary function,
    /// accumulating errors from every side in argument order.
    pub fn map3<U, V, C, F>(
        self,
        second: Validated<U, E>,
        third: Validated<V, E>,
        function: F,
    ) -> Validated<C, E>
    where
        F: FnOnce(T, U, V) -> C,
    {
        self.map2(second, |first, second| (first, second))
            .map2(third, |(first, second), third| function(first, second, third))
    }

    /// Pairs two validated values, accumulating errors from both sides.
    pub fn and<U>(self, other: Validated<U, E>) -> Validated<(T, U), E> {
        self.map2(other, |left, right| (left, right))
    }

    /// Chains a dependent validation; short-circuits on failure.
    ///
    /// Unlike [`ap`](Self::ap)/[`map2`](Self::map2), the next step can
    /// inspect the constructed value, so it cannot run when this value is
    /// invalid. Use this to layer cross-field checks on top of the
    /// accumulating combination of the independent fields.
    pub fn and_then<U, F>(self, function: F) -> Validated<U, E>
    where
        F: FnOnce(T) -> Validated<U, E>,
    {
        match self {
            Self::Valid(value) => function(value),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Collects every valid value, or accumulates every failure.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::validation::Validated;
    ///
    /// let all = Validated::sequence(vec![
    ///     Validated::<_, String>::valid(1),
    ///     Validated::valid(2),
    /// ]);
    /// assert_eq!(all, Validated::valid(vec![1, 2]));
    /// ```
    pub fn sequence<I>(validations: I) -> Validated<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = Vec::new();
        let mut errors: Option<NonEmpty<E>> = None;
        for validation in validations {
            match validation {
                Self::Valid(value) => values.push(value),
                Self::Invalid(new_errors) => {
                    errors = Some(match errors.take() {
                        Some(accumulated) => accumulated.combine(new_errors),
                        None => new_errors,
                    });
                }
            }
        }
        match errors {
            Some(errors) => Validated::Invalid(errors),
            None => Validated::Valid(values),
        }
    }

    /// Converts a `Result` into a `Validated`, wrapping the error as a
    /// singleton error list.
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::Invalid(NonEmpty::singleton(error)),
        }
    }

    /// Converts into a `Result` carrying the full error list on failure.
    pub fn into_result(self) -> Result<T, NonEmpty<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Converts into an `Option`, discarding any errors.
    pub fn into_option(self) -> Option<T> {
        self.into_valid()
    }
}

/// Validated values accumulate like the inputs they combine: both valid
/// sides combine their values, any invalid side contributes all of its
/// errors.
impl<T: Semigroup, E> Semigroup for Validated<T, E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Valid(left), Self::Valid(right)) => Self::Valid(left.combine(right)),
            (Self::Invalid(errors), Self::Valid(_))
            | (Self::Valid(_), Self::Invalid(errors)) => Self::Invalid(errors),
            (Self::Invalid(left), Self::Invalid(right)) => Self::Invalid(left.combine(right)),
        }
    }
}

static_assertions::assert_impl_all!(Validated<String, String>: Send, Sync);

/// Builds a validator from a predicate and the error it reports.
///
/// The returned function maps an input to `Valid` when the predicate
/// holds and to a singleton `Invalid` otherwise. Validators are pure and
/// total: they never panic, and they never inspect anything beyond their
/// own input.
///
/// # Example
///
/// ```
/// use focal::validation::{validator, Validated};
///
/// let mandatory = validator(|name: &String| !name.is_empty(), "Mandatory field");
///
/// assert_eq!(
///     mandatory("john".to_string()),
///     Validated::valid("john".to_string()),
/// );
/// assert!(mandatory(String::new()).is_invalid());
/// ```
pub fn validator<T, E, P>(predicate: P, error: E) -> impl Fn(T) -> Validated<T, E>
where
    P: Fn(&T) -> bool,
    E: Clone,
{
    move |value| {
        if predicate(&value) {
            Validated::Valid(value)
        } else {
            Validated::invalid(error.clone())
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
