//! Lens optics for total access to struct fields.
//!
//! A Lens pairs a getter with a setter for one field of an immutable
//! value. Lenses are composable, allowing access to deeply nested fields,
//! and every operation returns a new value rather than mutating in place.
//!
//! # Laws
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
//! # Examples
//!
//! ```
//! use focal::optics::Lens;
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, age: u32 }
//!
//! let name_lens = lens!(Person, name);
//!
//! let john = Person { name: "john".to_string(), age: 55 };
//! assert_eq!(*name_lens.get(&john), "john");
//!
//! let john_doe = name_lens.modify(john, |name| name + " doe");
//! assert_eq!(john_doe.name, "john doe");
//! ```

use std::marker::PhantomData;

/// A Lens focuses on a single field within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
///
/// # Laws
///
/// 1. **GetSet Law**: `lens.set(source.clone(), lens.get(&source).clone()) == source`
/// 2. **SetGet Law**: `lens.get(&lens.set(source, value)) == &value`
/// 3. **SetSet Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
///
/// A lens is an immutable value closed over pure functions: once built it
/// can be shared freely, including across threads, and reused for any
/// number of calls.
pub trait Lens<S, A> {
    /// Gets a reference to the focused field.
    ///
    /// A pure projection; it never fails.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Sets the focused field to a new value, returning a new source.
    ///
    /// The source is consumed; the original value graph is never mutated.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused field by applying a function.
    ///
    /// Equivalent to getting the current value, applying the function, and
    /// setting the result. The function is evaluated exactly once.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, age: u32 }
    ///
    /// let age_lens = lens!(Person, age);
    /// let person = Person { name: "john".to_string(), age: 54 };
    /// let older = age_lens.modify(person, |age| age + 1);
    /// assert_eq!(older.age, 55);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Modifies the focused field by applying a function to a reference.
    ///
    /// Useful when the transformation only needs to borrow the current
    /// value to compute the new one.
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let new_value = function(self.get(&source));
        self.set(source, new_value)
    }

    /// Composes this lens with another lens to focus on a nested field.
    ///
    /// Composition is associative: `(l1.compose(l2)).compose(l3)` behaves
    /// identically to `l1.compose(l2.compose(l3))` for every input.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let address_lens = lens!(Person, address);
    /// let street_lens = lens!(Address, street);
    /// let person_street = address_lens.compose(street_lens);
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address {
    ///         street: "Main St".to_string(),
    ///         city: "Orlando".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(*person_street.get(&person), "Main St");
    ///
    /// let moved = person_street.set(person, "Oak Ave".to_string());
    /// assert_eq!(moved.address.street, "Oak Ave");
    /// assert_eq!(moved.address.city, "Orlando");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }
}

/// A lens implemented using getter and setter functions.
///
/// This is the most common way to create a lens. The [`lens!`](crate::lens)
/// macro generates a `FunctionLens` internally.
///
/// Both functions must be referentially transparent (no hidden mutable
/// captures) or the lens laws cannot hold.
///
/// # Example
///
/// ```
/// use focal::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, age: u32 }
///
/// let name_lens = FunctionLens::new(
///     |person: &Person| &person.name,
///     |person: Person, name: String| Person { name, ..person },
/// );
///
/// let john = Person { name: "john".to_string(), age: 55 };
/// assert_eq!(*name_lens.get(&john), "john");
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// Focuses through an intermediate structure onto a field nested inside
/// it: `get` chains the two projections, `set` reads the intermediate
/// value, rewrites the inner field, and writes the intermediate back.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `A`: The intermediate type (target of L1, source of L2)
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens from an outer and an inner lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        let intermediate = self.first.get(source);
        self.second.get(intermediate)
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source).clone();
        let new_intermediate = self.second.set(intermediate, value);
        self.first.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a lens for a struct field.
///
/// Generates a [`FunctionLens`](crate::optics::FunctionLens) focusing on
/// the named field of the given struct type.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use focal::optics::Lens;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, age: u32 }
///
/// let name_lens = lens!(Person, name);
/// let age_lens = lens!(Person, age);
///
/// let john = Person { name: "john".to_string(), age: 55 };
///
/// assert_eq!(*name_lens.get(&john), "john");
/// assert_eq!(*age_lens.get(&john), 55);
///
/// let hector = name_lens.set(john, "hector".to_string());
/// assert_eq!(hector, Person { name: "hector".to_string(), age: 55 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
