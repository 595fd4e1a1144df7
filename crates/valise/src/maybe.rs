//! The `Maybe` container: a value that is present or absent.
//!
//! `Maybe<T>` is a closed two-variant value: [`Just`](Maybe::Just) holds
//! exactly one `T`, [`Nothing`](Maybe::Nothing) holds nothing. Absence is an
//! expected outcome, not an error; the combinators short-circuit past it
//! without invoking any downstream callback.
//!
//! Callbacks handed to `Maybe` combinators are assumed non-panicking: the
//! container performs no capture, so a panicking callback propagates. Use
//! [`Outcome`](crate::Outcome) when the computation itself can fail.
//!
//! # Example
//!
//! ```ignore
//! use valise::Maybe;
//!
//! let even = Maybe::Just(4)
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10);
//! assert_eq!(even, Maybe::Just(40));
//! ```

use std::error::Error;

use crate::captured::CapturedError;
use crate::outcome::Outcome;

pub use Maybe::{Just, Nothing};

/// A value of type `T`, or nothing.
///
/// Exactly one variant is active. `Just` never wraps another `Maybe`
/// implicitly; flattening a nested `Maybe<Maybe<T>>` requires an explicit
/// [`flatten`](Maybe::flatten) call.
///
/// Equality is structural: two values are equal iff both are `Nothing`, or
/// both are `Just` with equal payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// The absence of a value.
    Nothing,
}

impl<T> Maybe<T> {
    /// Check whether a value is present.
    #[must_use]
    pub fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    /// Check whether the value is absent.
    #[must_use]
    pub fn is_nothing(&self) -> bool {
        matches!(self, Nothing)
    }

    /// Borrow the payload, preserving the container shape.
    #[must_use]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Just(value) => Just(value),
            Nothing => Nothing,
        }
    }

    /// Map a function over the payload.
    ///
    /// Functor instance. `Nothing` is returned unchanged without invoking
    /// `f`.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Just(value) => Just(f(value)),
            Nothing => Nothing,
        }
    }

    /// Monadic bind.
    ///
    /// `Nothing` propagates without invoking `f`; `Just(x)` yields `f(x)`.
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Just(value) => f(value),
            Nothing => Nothing,
        }
    }

    /// Keep the payload only if it satisfies the predicate.
    ///
    /// `Just(x)` becomes `Nothing` when `predicate(&x)` is false; `Nothing`
    /// is unchanged and the predicate is not invoked.
    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Just(value) if predicate(&value) => Just(value),
            _ => Nothing,
        }
    }

    /// Combine two containers with a binary function.
    ///
    /// Yields `Just` iff both operands are `Just`. Evaluation is eager: both
    /// operands are already-materialized values, and `f` runs only when both
    /// are present.
    pub fn zip_with<U, V, F>(self, other: Maybe<U>, f: F) -> Maybe<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Just(a), Just(b)) => Just(f(a, b)),
            _ => Nothing,
        }
    }

    /// Pair up two containers.
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Extract the payload, or fall back to a default.
    ///
    /// Total; never panics.
    pub fn value_or(self, default: T) -> T {
        match self {
            Just(value) => value,
            Nothing => default,
        }
    }

    /// Extract the payload, or compute a fallback.
    ///
    /// Total; never panics. The supplier runs only on `Nothing`.
    pub fn value_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Just(value) => value,
            Nothing => supplier(),
        }
    }

    /// First present value wins.
    pub fn or(self, alternative: Maybe<T>) -> Maybe<T> {
        match self {
            Just(value) => Just(value),
            Nothing => alternative,
        }
    }

    /// First present value wins; the alternative is computed lazily.
    pub fn or_else<F>(self, supplier: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Just(value) => Just(value),
            Nothing => supplier(),
        }
    }

    /// Promote to an [`Outcome`], attaching `error` when the value is absent.
    pub fn ok_or<E>(self, error: E) -> Outcome<T>
    where
        E: Error + Send + 'static,
    {
        match self {
            Just(value) => Outcome::Success(value),
            Nothing => Outcome::Failure(CapturedError::from_error(error)),
        }
    }

    /// Promote to an [`Outcome`], computing the failure lazily.
    pub fn ok_or_else<E, F>(self, supplier: F) -> Outcome<T>
    where
        E: Error + Send + 'static,
        F: FnOnce() -> E,
    {
        match self {
            Just(value) => Outcome::Success(value),
            Nothing => Outcome::Failure(CapturedError::from_error(supplier())),
        }
    }

    /// Convert into the standard library's `Option`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Just(value) => Some(value),
            Nothing => None,
        }
    }

    /// Iterate over the zero or one contained values by reference.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Remove one level of nesting.
    ///
    /// Nesting is never flattened implicitly; this is the explicit join,
    /// derived from [`bind`](Maybe::bind).
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

impl Maybe<()> {
    /// Succeed with `Just(())` when the condition holds.
    ///
    /// The MonadPlus guard: chain with [`bind`](Maybe::bind) to prune a
    /// computation on a boolean condition.
    #[must_use]
    pub fn guard(condition: bool) -> Maybe<()> {
        if condition {
            Just(())
        } else {
            Nothing
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Just(value),
            None => Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collect an iterator of `Maybe<T>` into a `Maybe` of a collection,
/// stopping at the first `Nothing`.
impl<T, C> FromIterator<Maybe<T>> for Maybe<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Maybe::into_option)
            .collect::<Option<C>>()
            .into()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Just(value) => serializer.serialize_some(value),
            Nothing => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Maybe::from)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_serializes_like_option() {
        assert_eq!(serde_json::to_string(&Just(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Nothing::<i32>).unwrap(), "null");
    }

    #[test]
    fn test_deserializes_like_option() {
        assert_eq!(serde_json::from_str::<Maybe<i32>>("5").unwrap(), Just(5));
        assert_eq!(
            serde_json::from_str::<Maybe<i32>>("null").unwrap(),
            Nothing
        );
    }
}
