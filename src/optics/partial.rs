//! Partial lenses for fields whose presence is conditional.
//!
//! A `PartialLens` focuses on a field that may be absent, or whose
//! presence depends on some other part of the source. It is built around a
//! single *probe* operation: probing a source either yields a
//! [`Presence`], the current value together with a reconstruction closure
//! derived from that same source, or hands the source back untouched.
//!
//! This single-operation shape is deliberate: the reconstruction closure
//! can only be obtained from a successful probe, so a write is only ever
//! reachable when a read would have succeeded. Setting through an absent
//! path is a no-op on the whole source, never a fabrication of presence.
//!
//! # Laws
//!
//! 1. **Absence no-op**: if `probe(s)` is absent, then `set(s, a) == s`
//!    and `modify(s, f) == s` for any `a`, `f` (and `f` is not evaluated).
//! 2. **Presence round-trip**: if `try_get(&s) == Some(a)`, then
//!    `try_get(&partial.set(s, a)) == Some(a)` and
//!    `modify(s, identity) == s`.
//! 3. **Identity update**: a presence rebuilt with its own unchanged value
//!    reproduces the probed source; [`Presence::restore`] is total.
//!
//! # Examples
//!
//! ```
//! use focal::optics::PartialLens;
//! use focal::option_lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Search { name: Option<String>, state: Option<String> }
//!
//! let state_lens = option_lens!(Search, state);
//!
//! let no_state = Search { name: Some("John".to_string()), state: None };
//! assert_eq!(state_lens.try_get(&no_state), None);
//!
//! // Setting through an absent field leaves the source unchanged.
//! let unchanged = state_lens.set(no_state.clone(), "FL".to_string());
//! assert_eq!(unchanged, no_state);
//! ```

use std::marker::PhantomData;

use super::lens::Lens;

/// The successful outcome of probing a source: the current value of the
/// focused field plus a closure that rebuilds the whole source around a
/// replacement value.
///
/// The closure is derived from the same source that produced the value, so
/// rebuilding with the *unchanged* value reproduces that source exactly
/// (the identity-update law).
///
/// # Example
///
/// ```
/// use focal::optics::Presence;
///
/// let presence: Presence<(String, u32), String> =
///     Presence::new("john".to_string(), |name| (name, 55));
///
/// assert_eq!(*presence.value(), "john");
/// assert_eq!(presence.rebuild("hector".to_string()), ("hector".to_string(), 55));
/// ```
pub struct Presence<S, A> {
    value: A,
    rebuild: Box<dyn FnOnce(A) -> S>,
}

impl<S, A> Presence<S, A> {
    /// Creates a presence from the current value and a rebuild closure.
    #[must_use]
    pub fn new<F>(value: A, rebuild: F) -> Self
    where
        F: FnOnce(A) -> S + 'static,
    {
        Self {
            value,
            rebuild: Box::new(rebuild),
        }
    }

    /// Returns a reference to the current value of the focused field.
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Consumes the presence, returning the current value.
    pub fn into_value(self) -> A {
        self.value
    }

    /// Rebuilds the whole source around a replacement value.
    pub fn rebuild(self, value: A) -> S {
        (self.rebuild)(value)
    }

    /// Rebuilds the source with its own unchanged value.
    ///
    /// By the identity-update law this reproduces the source the presence
    /// was probed from.
    pub fn restore(self) -> S {
        (self.rebuild)(self.value)
    }

    /// Splits the presence into the current value and the rebuild closure.
    pub fn into_parts(self) -> (A, Box<dyn FnOnce(A) -> S>) {
        (self.value, self.rebuild)
    }
}

impl<S, A: std::fmt::Debug> std::fmt::Debug for Presence<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Presence")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// A `PartialLens` focuses on a field that may or may not be present.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field, if present)
///
/// # Laws
///
/// 1. **Absence no-op**: if the probe reports absence, `set` and `modify`
///    return the source unchanged.
/// 2. **Presence round-trip**: if `try_get(&s) == Some(a)`, then
///    `try_get(&set(s, a)) == Some(a)` and `modify(s, identity) == s`.
///
/// Absence is a first-class outcome carried in the return type; no lens
/// operation has an error channel.
pub trait PartialLens<S, A> {
    /// Probes the source.
    ///
    /// Present: yields the current value and a rebuild closure derived
    /// from this same source. Absent: returns the source unchanged as the
    /// `Err` value.
    ///
    /// # Errors
    ///
    /// `Err(source)` means the focused field is absent; the source is
    /// handed back untouched.
    fn probe(&self, source: S) -> Result<Presence<S, A>, S>;

    /// Returns the current value of the focused field, if present.
    ///
    /// Clones the source in order to probe it.
    fn try_get(&self, source: &S) -> Option<A>
    where
        S: Clone,
    {
        match self.probe(source.clone()) {
            Ok(presence) => Some(presence.into_value()),
            Err(_) => None,
        }
    }

    /// Checks whether the focused field is present.
    fn is_present(&self, source: &S) -> bool
    where
        S: Clone,
    {
        self.try_get(source).is_some()
    }

    /// Sets the focused field to a new value.
    ///
    /// If the field is absent the source is returned unchanged; setting
    /// never fabricates presence.
    fn set(&self, source: S, value: A) -> S {
        match self.probe(source) {
            Ok(presence) => presence.rebuild(value),
            Err(source) => source,
        }
    }

    /// Modifies the focused field if present.
    ///
    /// If the field is absent the source is returned unchanged and the
    /// function is not evaluated; if present, the function is evaluated
    /// exactly once.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.probe(source) {
            Ok(presence) => {
                let (value, rebuild) = presence.into_parts();
                rebuild(function(value))
            }
            Err(source) => source,
        }
    }

    /// Composes this partial lens with another to focus on a nested
    /// conditionally-present field.
    ///
    /// The composition is absent as soon as *either* leg is absent. When
    /// the outer field is present but the inner one is not, setting
    /// through the composition leaves the whole source unchanged: the
    /// outer reconstruction is used only to restore the original value,
    /// never to write a partial update.
    fn compose<B, P>(self, other: P) -> ComposedPartialLens<Self, P, A>
    where
        Self: Sized,
        P: PartialLens<A, B>,
    {
        ComposedPartialLens::new(self, other)
    }

    /// Composes this partial lens with a total lens on the inner leg.
    ///
    /// The total lens never reports absence, so the composition is present
    /// exactly when this partial lens is.
    fn compose_lens<B, L>(self, other: L) -> ComposedPartialLens<Self, LensAsPartial<L, A, B>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedPartialLens::new(self, LensAsPartial::new(other))
    }
}

/// A partial lens implemented from an arbitrary probe function.
///
/// This is the fully general constructor; for the common case of an
/// `Option`-typed struct field, use [`OptionFieldLens`] or the
/// [`option_lens!`](crate::option_lens) macro instead.
///
/// # Example
///
/// A field whose presence depends on *another* field of the source:
///
/// ```
/// use focal::optics::{FunctionPartialLens, PartialLens, Presence};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Discount { active: bool, percent: u8 }
///
/// let percent_lens = FunctionPartialLens::new(|source: Discount| {
///     if source.active {
///         let percent = source.percent;
///         Ok(Presence::new(percent, move |percent| Discount { percent, ..source }))
///     } else {
///         Err(source)
///     }
/// });
///
/// let inactive = Discount { active: false, percent: 0 };
/// assert_eq!(percent_lens.try_get(&inactive), None);
/// assert_eq!(percent_lens.set(inactive.clone(), 50), inactive);
///
/// let active = Discount { active: true, percent: 10 };
/// assert_eq!(percent_lens.try_get(&active), Some(10));
/// assert_eq!(percent_lens.set(active, 50).percent, 50);
/// ```
pub struct FunctionPartialLens<S, A, P>
where
    P: Fn(S) -> Result<Presence<S, A>, S>,
{
    probe: P,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, P> FunctionPartialLens<S, A, P>
where
    P: Fn(S) -> Result<Presence<S, A>, S>,
{
    /// Creates a new `FunctionPartialLens` from a probe function.
    ///
    /// The probe must satisfy the identity-update law: a presence rebuilt
    /// with its own unchanged value reproduces the probed source.
    #[must_use]
    pub const fn new(probe: P) -> Self {
        Self {
            probe,
            _marker: PhantomData,
        }
    }
}

impl<S, A, P> PartialLens<S, A> for FunctionPartialLens<S, A, P>
where
    P: Fn(S) -> Result<Presence<S, A>, S>,
{
    fn probe(&self, source: S) -> Result<Presence<S, A>, S> {
        (self.probe)(source)
    }
}

impl<S, A, P> Clone for FunctionPartialLens<S, A, P>
where
    P: Fn(S) -> Result<Presence<S, A>, S> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            probe: self.probe.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, P> std::fmt::Debug for FunctionPartialLens<S, A, P>
where
    P: Fn(S) -> Result<Presence<S, A>, S>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPartialLens")
            .finish_non_exhaustive()
    }
}

/// A partial lens over an `Option`-typed struct field, built from a getter
/// and a setter.
///
/// The getter reports presence; the setter rebuilds the source around a
/// replacement value. The setter is only ever invoked when the getter
/// returned `Some`, so it can assume presence.
///
/// The [`option_lens!`](crate::option_lens) macro generates an
/// `OptionFieldLens` internally.
///
/// # Example
///
/// ```
/// use focal::optics::{OptionFieldLens, PartialLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Search { state: Option<String> }
///
/// let state_lens = OptionFieldLens::new(
///     |search: &Search| search.state.as_ref(),
///     |search: Search, state: String| Search { state: Some(state), ..search },
/// );
///
/// let search = Search { state: Some("FL".to_string()) };
/// assert_eq!(state_lens.try_get(&search), Some("FL".to_string()));
/// ```
pub struct OptionFieldLens<S, A, G, St>
where
    G: Fn(&S) -> Option<&A>,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> OptionFieldLens<S, A, G, St>
where
    G: Fn(&S) -> Option<&A>,
    St: Fn(S, A) -> S,
{
    /// Creates a new `OptionFieldLens` from a getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> PartialLens<S, A> for OptionFieldLens<S, A, G, St>
where
    S: 'static,
    A: Clone + 'static,
    G: Fn(&S) -> Option<&A>,
    St: Fn(S, A) -> S + Clone + 'static,
{
    fn probe(&self, source: S) -> Result<Presence<S, A>, S> {
        match (self.getter)(&source).cloned() {
            Some(value) => {
                let setter = self.setter.clone();
                Ok(Presence::new(value, move |new_value| {
                    setter(source, new_value)
                }))
            }
            None => Err(source),
        }
    }
}

impl<S, A, G, St> Clone for OptionFieldLens<S, A, G, St>
where
    G: Fn(&S) -> Option<&A> + Clone,
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

impl<S, A, G, St> std::fmt::Debug for OptionFieldLens<S, A, G, St>
where
    G: Fn(&S) -> Option<&A>,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("OptionFieldLens")
            .finish_non_exhaustive()
    }
}

/// A partial lens composed of two partial lenses.
///
/// The composition probes the outer leg first, then the inner leg on the
/// outer value. Absence of either leg makes the whole composition absent;
/// in the outer-present / inner-absent case the outer rebuild is applied
/// to the unchanged inner value, which by the identity-update law restores
/// the original source.
///
/// # Type Parameters
///
/// - `P1`: The type of the outer partial lens
/// - `P2`: The type of the inner partial lens
/// - `A`: The intermediate type (target of P1, source of P2)
pub struct ComposedPartialLens<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<A>,
}

impl<P1, P2, A> ComposedPartialLens<P1, P2, A> {
    /// Creates a new composed partial lens from an outer and an inner leg.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> PartialLens<S, B> for ComposedPartialLens<P1, P2, A>
where
    P1: PartialLens<S, A>,
    P2: PartialLens<A, B>,
    S: 'static,
    A: 'static,
    B: 'static,
{
    fn probe(&self, source: S) -> Result<Presence<S, B>, S> {
        let (value, rebuild_outer) = self.first.probe(source)?.into_parts();
        match self.second.probe(value) {
            Ok(inner) => {
                let (focus, rebuild_inner) = inner.into_parts();
                Ok(Presence::new(focus, move |new_value| {
                    rebuild_outer(rebuild_inner(new_value))
                }))
            }
            Err(value) => Err(rebuild_outer(value)),
        }
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPartialLens<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug
    for ComposedPartialLens<P1, P2, A>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPartialLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A total lens viewed as an always-present partial lens.
///
/// This wrapper lets a [`Lens`] take part in partial-lens composition: its
/// probe never reports absence.
///
/// # Type Parameters
///
/// - `L`: The type of the underlying lens
/// - `S`: The source type
/// - `A`: The target type
pub struct LensAsPartial<L, S, A> {
    lens: L,
    _marker: PhantomData<(S, A)>,
}

impl<L, S, A> LensAsPartial<L, S, A> {
    /// Creates a new `LensAsPartial` from a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A> PartialLens<S, A> for LensAsPartial<L, S, A>
where
    L: Lens<S, A> + Clone + 'static,
    S: 'static,
    A: Clone + 'static,
{
    fn probe(&self, source: S) -> Result<Presence<S, A>, S> {
        let value = self.lens.get(&source).clone();
        let lens = self.lens.clone();
        Ok(Presence::new(value, move |new_value| {
            lens.set(source, new_value)
        }))
    }
}

impl<L: Clone, S, A> Clone for LensAsPartial<L, S, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, S, A> std::fmt::Debug for LensAsPartial<L, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensAsPartial")
            .field("lens", &self.lens)
            .finish()
    }
}

// Extend Lens to take part in partial-lens composition.
impl<S, A, L> LensPartialExtension<S, A> for L where L: Lens<S, A> {}

/// Extension trait for composing a total [`Lens`] with partial lenses.
pub trait LensPartialExtension<S, A>: Lens<S, A> {
    /// Views this total lens as an always-present partial lens.
    fn to_partial(self) -> LensAsPartial<Self, S, A>
    where
        Self: Sized,
    {
        LensAsPartial::new(self)
    }

    /// Composes this total lens with a partial lens on the inner leg.
    ///
    /// The composition is present exactly when the inner leg is.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{Lens, LensPartialExtension, PartialLens};
    /// use focal::{lens, option_lens};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Profile { nickname: Option<String> }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct User { profile: Profile }
    ///
    /// let profile_lens = lens!(User, profile);
    /// let nickname_lens = option_lens!(Profile, nickname);
    /// let user_nickname = profile_lens.compose_partial(nickname_lens);
    ///
    /// let user = User { profile: Profile { nickname: Some("jd".to_string()) } };
    /// assert_eq!(user_nickname.try_get(&user), Some("jd".to_string()));
    ///
    /// let anonymous = User { profile: Profile { nickname: None } };
    /// assert_eq!(user_nickname.try_get(&anonymous), None);
    /// assert_eq!(user_nickname.set(anonymous.clone(), "x".to_string()), anonymous);
    /// ```
    fn compose_partial<B, P>(
        self,
        other: P,
    ) -> ComposedPartialLens<LensAsPartial<Self, S, A>, P, A>
    where
        Self: Sized,
        P: PartialLens<A, B>,
    {
        ComposedPartialLens::new(LensAsPartial::new(self), other)
    }
}

/// Creates a partial lens for an `Option`-typed struct field.
///
/// Generates an [`OptionFieldLens`](crate::optics::OptionFieldLens)
/// focusing on the named field, present when the field is `Some`.
///
/// # Syntax
///
/// ```text
/// option_lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use focal::optics::PartialLens;
/// use focal::option_lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Search { name: Option<String>, state: Option<String> }
///
/// let state_lens = option_lens!(Search, state);
///
/// let search = Search { name: None, state: Some("FL".to_string()) };
/// assert_eq!(state_lens.try_get(&search), Some("FL".to_string()));
///
/// let moved = state_lens.set(search, "GA".to_string());
/// assert_eq!(moved.state, Some("GA".to_string()));
/// ```
#[macro_export]
macro_rules! option_lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::OptionFieldLens::new(
            |source: &$struct_type| source.$field.as_ref(),
            |mut source: $struct_type, value| {
                source.$field = Some(value);
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::OptionFieldLens::new(
            |source: &$struct_type<$($generic),+>| source.$field.as_ref(),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = Some(value);
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::OptionFieldLens::new(
            |source: &$struct_type| source.$field.as_ref(),
            |mut source: $struct_type, value| {
                source.$field = Some(value);
                source
            },
        )
    };
}
