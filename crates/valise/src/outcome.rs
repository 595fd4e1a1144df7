//! The `Outcome` container: a success value or a captured failure.
//!
//! [`Outcome::guard`] runs a possibly-panicking computation and converts any
//! unwind into a [`Failure`](Outcome::Failure) carrying a
//! [`CapturedError`]: the original payload, a message, and a backtrace.
//! It is the only place unwinds are caught directly; every combinator that
//! runs caller-supplied code routes it through `guard`, so a panicking
//! selector becomes a `Failure` instead of escaping the algebra.
//!
//! Once a `Failure` enters a chain of `map`/`bind`/`zip_with`, it propagates
//! without invoking any downstream callback; only [`recover`](Outcome::recover)
//! re-enters success. [`value_or_throw`](Outcome::value_or_throw) exits the
//! algebra by resuming the original unwind with the captured payload intact.
//!
//! # Example
//!
//! ```ignore
//! use valise::Outcome;
//!
//! let parsed = Outcome::guard(|| "21".parse::<i32>().unwrap())
//!     .map(|n| n * 2);
//! assert_eq!(parsed.value_or(0), 42);
//! ```

use std::error::Error;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, trace};

use crate::captured::{CapturedError, NoValueError};
use crate::maybe::Maybe;

pub use Outcome::{Failure, Success};

/// A success value of type `T`, or a captured failure.
///
/// Exactly one variant is active. `Outcome` is not `Clone`: the captured
/// payload inside a `Failure` is a unique value, preserved so that
/// [`value_or_throw`](Outcome::value_or_throw) can re-raise it verbatim.
///
/// Equality compares `Success` payloads structurally and `Failure`s by
/// captured payload type and message (never backtrace frames).
///
/// `Outcome<T>` is `Send` whenever `T` is: the captured payload is
/// `Box<dyn Any + Send>`.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed; the failure is captured in full.
    Failure(CapturedError),
}

impl<T> Outcome<T> {
    /// Run a possibly-panicking computation, capturing any unwind.
    ///
    /// A normal return becomes `Success`; an unwind becomes `Failure`
    /// carrying the original payload. Capture is total: building the
    /// `CapturedError` cannot itself panic.
    ///
    /// The thunk is asserted unwind-safe. The algebra never observes the
    /// thunk's captured state after an unwind, so broken invariants cannot
    /// leak back out through this call; callers sharing state with the thunk
    /// through other channels remain responsible for their own discipline,
    /// as with any `catch_unwind` boundary.
    pub fn guard<F>(thunk: F) -> Outcome<T>
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(thunk)) {
            Ok(value) => Success(value),
            Err(payload) => {
                let error = CapturedError::from_panic(payload);
                debug!(error = error.message(), "captured unwind at guard boundary");
                Failure(error)
            }
        }
    }

    /// Construct a failure from a typed error value.
    ///
    /// The value is captured without unwinding and can be recovered later
    /// with [`CapturedError::downcast_ref`]. An already-captured error slots
    /// in directly as `Outcome::Failure(captured)`.
    pub fn failure<E>(error: E) -> Outcome<T>
    where
        E: Error + Send + 'static,
    {
        Failure(CapturedError::from_error(error))
    }

    /// Check whether the computation succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Check whether the computation failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Borrow the success value, if any.
    #[must_use]
    pub fn as_success(&self) -> Maybe<&T> {
        match self {
            Success(value) => Maybe::Just(value),
            Failure(_) => Maybe::Nothing,
        }
    }

    /// Borrow the captured failure, if any.
    #[must_use]
    pub fn as_failure(&self) -> Maybe<&CapturedError> {
        match self {
            Success(_) => Maybe::Nothing,
            Failure(error) => Maybe::Just(error),
        }
    }

    /// Map a function over the success value.
    ///
    /// Functor instance. `Failure` propagates unchanged; the selector runs
    /// under [`guard`](Outcome::guard), so a panicking selector becomes a
    /// `Failure` rather than an escaping unwind.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Outcome::guard(|| f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Monadic bind.
    ///
    /// `Failure` propagates without invoking `f`; `Success(x)` evaluates
    /// `f(x)` under capture; if `f` panics before returning an `Outcome`,
    /// the unwind is captured as a `Failure`.
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Success(value) => match Outcome::guard(|| f(value)) {
                Success(inner) => inner,
                Failure(error) => Failure(error),
            },
            Failure(error) => Failure(error),
        }
    }

    /// Combine two outcomes with a binary function.
    ///
    /// Both `Success` ⇒ the combiner runs under capture; otherwise the first
    /// `Failure` in argument order wins. Evaluation is eager: both operands
    /// are already-materialized values.
    pub fn zip_with<U, V, F>(self, other: Outcome<U>, f: F) -> Outcome<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Success(a), Success(b)) => Outcome::guard(|| f(a, b)),
            (Failure(error), _) => Failure(error),
            (_, Failure(error)) => Failure(error),
        }
    }

    /// Pair up two outcomes.
    pub fn zip<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Keep the success value only if it satisfies the predicate, supplying
    /// the failure otherwise.
    ///
    /// A plain boolean filter has no natural failure to attach, so the
    /// supplier is mandatory. Predicate and supplier both run under capture.
    pub fn filter_or_else<P, E, S>(self, predicate: P, supplier: S) -> Outcome<T>
    where
        P: FnOnce(&T) -> bool,
        E: Error + Send + 'static,
        S: FnOnce() -> E,
    {
        self.bind(|value| {
            if predicate(&value) {
                Success(value)
            } else {
                Outcome::failure(supplier())
            }
        })
    }

    /// Hand a captured failure to a recovery handler.
    ///
    /// `Success` passes through untouched. The handler runs under capture,
    /// so a panicking handler yields a new `Failure` instead of unwinding.
    pub fn recover<F>(self, handler: F) -> Outcome<T>
    where
        F: FnOnce(CapturedError) -> Outcome<T>,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => {
                trace!(error = error.message(), "failure entering recovery handler");
                match Outcome::guard(|| handler(error)) {
                    Success(inner) => inner,
                    Failure(secondary) => Failure(secondary),
                }
            }
        }
    }

    /// Extract the success value, or fall back to a default.
    ///
    /// Total; never panics.
    pub fn value_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Extract the success value, or compute a fallback from the failure.
    ///
    /// Total; never panics. The supplier runs only on `Failure`.
    pub fn value_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce(CapturedError) -> T,
    {
        match self {
            Success(value) => value,
            Failure(error) => supplier(error),
        }
    }

    /// Extract the success value, or resume the original unwind.
    ///
    /// On `Failure` the captured payload is re-raised verbatim via
    /// `std::panic::resume_unwind`, so the panic the caller observes is
    /// identical to the one that was captured, not a new wrapping panic.
    pub fn value_or_throw(self) -> T {
        match self {
            Success(value) => value,
            Failure(error) => error.rethrow(),
        }
    }

    /// Discard the failure, keeping only presence.
    #[must_use]
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Success(value) => Maybe::Just(value),
            Failure(_) => Maybe::Nothing,
        }
    }

    /// Convert into the standard library's `Result`.
    #[must_use]
    pub fn into_result(self) -> Result<T, CapturedError> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Remove one level of nesting.
    ///
    /// The explicit join, derived from [`bind`](Outcome::bind).
    pub fn flatten(self) -> Outcome<T> {
        self.bind(|inner| inner)
    }
}

impl<T> From<Result<T, CapturedError>> for Outcome<T> {
    fn from(result: Result<T, CapturedError>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, CapturedError> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

/// Promote an absent value to a failure, attaching [`NoValueError`] as the
/// default failure.
impl<T> From<Maybe<T>> for Outcome<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.ok_or(NoValueError)
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_maybe().into_option().into_iter()
    }
}

/// Collect an iterator of `Outcome<T>` into an `Outcome` of a collection,
/// stopping at the first `Failure` and returning it with its original error.
impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<C, CapturedError>>()
            .into()
    }
}
