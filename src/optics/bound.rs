//! Instance-bound lens wrappers.
//!
//! A bound lens pairs a lens with one fixed instance of its source type,
//! so call sites can read `bound.get()` instead of `lens.get(&instance)`.
//! The held instance is immutable: `set` and `modify` return a *new*
//! source value and leave both the instance and the wrapper untouched.
//!
//! # Examples
//!
//! ```
//! use focal::optics::{Lens, LensBindExtension};
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, age: u32 }
//!
//! let john = Person { name: "john".to_string(), age: 55 };
//! let bound = lens!(Person, name).bind(john);
//!
//! assert_eq!(*bound.get(), "john");
//!
//! let hector = bound.set("hector".to_string());
//! assert_eq!(hector.name, "hector");
//! // The bound instance is unchanged.
//! assert_eq!(*bound.get(), "john");
//! ```

use std::marker::PhantomData;

use super::lens::Lens;
use super::partial::PartialLens;

/// A total lens bound to one fixed instance of its source type.
///
/// Every call delegates to the underlying lens applied to the held
/// instance; `set` and `modify` clone the instance and return a new
/// source.
///
/// # Type Parameters
///
/// - `L`: The type of the underlying lens
/// - `S`: The source type
/// - `A`: The target type
pub struct BoundLens<L, S, A> {
    lens: L,
    instance: S,
    _marker: PhantomData<A>,
}

impl<L, S, A> BoundLens<L, S, A>
where
    L: Lens<S, A>,
{
    /// Binds a lens to an instance.
    #[must_use]
    pub const fn new(lens: L, instance: S) -> Self {
        Self {
            lens,
            instance,
            _marker: PhantomData,
        }
    }

    /// Gets a reference to the focused field of the bound instance.
    pub fn get(&self) -> &A {
        self.lens.get(&self.instance)
    }

    /// Sets the focused field, returning a new source.
    ///
    /// The bound instance is never mutated.
    pub fn set(&self, value: A) -> S
    where
        S: Clone,
    {
        self.lens.set(self.instance.clone(), value)
    }

    /// Modifies the focused field, returning a new source.
    pub fn modify<F>(&self, function: F) -> S
    where
        S: Clone,
        A: Clone,
        F: FnOnce(A) -> A,
    {
        self.lens.modify(self.instance.clone(), function)
    }

    /// Returns a reference to the bound instance.
    pub const fn instance(&self) -> &S {
        &self.instance
    }

    /// Consumes the wrapper, returning the bound instance.
    pub fn into_inner(self) -> S {
        self.instance
    }
}

impl<L: Clone, S: Clone, A> Clone for BoundLens<L, S, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            instance: self.instance.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L, S: std::fmt::Debug, A> std::fmt::Debug for BoundLens<L, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("BoundLens")
            .field("instance", &self.instance)
            .finish_non_exhaustive()
    }
}

/// A partial lens bound to one fixed instance of its source type.
///
/// # Type Parameters
///
/// - `P`: The type of the underlying partial lens
/// - `S`: The source type
/// - `A`: The target type
///
/// # Example
///
/// ```
/// use focal::optics::{PartialLens, PartialLensBindExtension};
/// use focal::option_lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Search { state: Option<String> }
///
/// let no_state = Search { state: None };
/// let bound = option_lens!(Search, state).bind(no_state.clone());
///
/// assert_eq!(bound.try_get(), None);
/// // Setting through an absent field returns the source unchanged.
/// assert_eq!(bound.set("FL".to_string()), no_state);
/// ```
pub struct BoundPartialLens<P, S, A> {
    partial: P,
    instance: S,
    _marker: PhantomData<A>,
}

impl<P, S, A> BoundPartialLens<P, S, A>
where
    P: PartialLens<S, A>,
{
    /// Binds a partial lens to an instance.
    #[must_use]
    pub const fn new(partial: P, instance: S) -> Self {
        Self {
            partial,
            instance,
            _marker: PhantomData,
        }
    }

    /// Returns the current value of the focused field, if present.
    pub fn try_get(&self) -> Option<A>
    where
        S: Clone,
    {
        self.partial.try_get(&self.instance)
    }

    /// Checks whether the focused field is present on the bound instance.
    pub fn is_present(&self) -> bool
    where
        S: Clone,
    {
        self.partial.is_present(&self.instance)
    }

    /// Sets the focused field, returning a new source.
    ///
    /// If the field is absent the instance is returned unchanged (as a
    /// clone); the bound instance itself is never mutated.
    pub fn set(&self, value: A) -> S
    where
        S: Clone,
    {
        self.partial.set(self.instance.clone(), value)
    }

    /// Modifies the focused field if present, returning a new source.
    pub fn modify<F>(&self, function: F) -> S
    where
        S: Clone,
        F: FnOnce(A) -> A,
    {
        self.partial.modify(self.instance.clone(), function)
    }

    /// Returns a reference to the bound instance.
    pub const fn instance(&self) -> &S {
        &self.instance
    }

    /// Consumes the wrapper, returning the bound instance.
    pub fn into_inner(self) -> S {
        self.instance
    }
}

impl<P: Clone, S: Clone, A> Clone for BoundPartialLens<P, S, A> {
    fn clone(&self) -> Self {
        Self {
            partial: self.partial.clone(),
            instance: self.instance.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P, S: std::fmt::Debug, A> std::fmt::Debug for BoundPartialLens<P, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("BoundPartialLens")
            .field("instance", &self.instance)
            .finish_non_exhaustive()
    }
}

// Extend both lens traits with a `bind` constructor.
impl<S, A, L> LensBindExtension<S, A> for L where L: Lens<S, A> {}
impl<S, A, P> PartialLensBindExtension<S, A> for P where P: PartialLens<S, A> {}

/// Extension trait binding a total [`Lens`] to an instance.
pub trait LensBindExtension<S, A>: Lens<S, A> {
    /// Binds this lens to one fixed instance.
    fn bind(self, instance: S) -> BoundLens<Self, S, A>
    where
        Self: Sized,
    {
        BoundLens::new(self, instance)
    }
}

/// Extension trait binding a [`PartialLens`] to an instance.
pub trait PartialLensBindExtension<S, A>: PartialLens<S, A> {
    /// Binds this partial lens to one fixed instance.
    fn bind(self, instance: S) -> BoundPartialLens<Self, S, A>
    where
        Self: Sized,
    {
        BoundPartialLens::new(self, instance)
    }
}
