//! Short-circuiting traversal over sequences of containers.
//!
//! Since Rust doesn't have higher-kinded types, these operations are provided
//! as standalone functions, one per container type: `maybe_*` for
//! [`Maybe`] and `outcome_*` for [`Outcome`].
//!
//! All traversals process elements in iteration order and stop at the first
//! `Nothing`/`Failure`; no further elements are pulled from the iterator,
//! so side effects past the short-circuit point never run. The monadic
//! operations take the function first, in the traditional `traverse f xs`
//! order.
//!
//! # Example
//!
//! ```ignore
//! use valise::Maybe::{Just, Nothing};
//! use valise::traverse::maybe_sequence;
//!
//! assert_eq!(maybe_sequence(vec![Just(1), Just(2)]), Just(vec![1, 2]));
//! assert_eq!(maybe_sequence(vec![Just(1), Nothing, Just(2)]), Nothing);
//! ```

use crate::maybe::{Just, Maybe, Nothing};
use crate::outcome::{Failure, Outcome, Success};

// ============================================================
// Sequence: container of a sequence from a sequence of containers
// ============================================================

/// Collect a sequence of `Maybe`s into a `Maybe` of the payloads, in order.
///
/// Stops at the first `Nothing` without pulling further elements.
pub fn maybe_sequence<T, I>(items: I) -> Maybe<Vec<T>>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    let iter = items.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);
    for item in iter {
        match item {
            Just(value) => values.push(value),
            Nothing => return Nothing,
        }
    }
    Just(values)
}

/// Collect a sequence of `Outcome`s into an `Outcome` of the payloads.
///
/// Stops at the first `Failure`, returning it with its original captured
/// error; no further elements are pulled.
pub fn outcome_sequence<T, I>(items: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let iter = items.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);
    for item in iter {
        match item {
            Success(value) => values.push(value),
            Failure(error) => return Failure(error),
        }
    }
    Success(values)
}

// ============================================================
// Traverse: map each element through an effectful function
// ============================================================

/// Map each element through `f`, collecting the results.
///
/// Stops at the first `Nothing`; `f` is not invoked for the remaining
/// elements.
pub fn maybe_traverse<T, U, I, F>(mut f: F, items: I) -> Maybe<Vec<U>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Maybe<U>,
{
    let iter = items.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);
    for item in iter {
        match f(item) {
            Just(value) => values.push(value),
            Nothing => return Nothing,
        }
    }
    Just(values)
}

/// Map each element through `f`, collecting the results.
///
/// Stops at the first `Failure`. Each call to `f` runs under capture, so a
/// panicking step becomes the returned `Failure` rather than an escaping
/// unwind.
pub fn outcome_traverse<T, U, I, F>(mut f: F, items: I) -> Outcome<Vec<U>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Outcome<U>,
{
    let iter = items.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);
    for item in iter {
        match Outcome::guard(|| f(item)) {
            Success(Success(value)) => values.push(value),
            Success(Failure(error)) | Failure(error) => return Failure(error),
        }
    }
    Success(values)
}

// ============================================================
// Fold and reduce
// ============================================================

/// Thread an accumulator through a `Maybe`-returning step.
///
/// Stops at the first `Nothing`, discarding the remaining items.
pub fn maybe_fold<A, T, I, F>(mut step: F, seed: A, items: I) -> Maybe<A>
where
    I: IntoIterator<Item = T>,
    F: FnMut(A, T) -> Maybe<A>,
{
    let mut acc = seed;
    for item in items {
        match step(acc, item) {
            Just(next) => acc = next,
            Nothing => return Nothing,
        }
    }
    Just(acc)
}

/// Thread an accumulator through an `Outcome`-returning step.
///
/// Stops at the first `Failure`. Each step runs under capture.
pub fn outcome_fold<A, T, I, F>(mut step: F, seed: A, items: I) -> Outcome<A>
where
    I: IntoIterator<Item = T>,
    F: FnMut(A, T) -> Outcome<A>,
{
    let mut acc = seed;
    for item in items {
        match Outcome::guard(|| step(acc, item)) {
            Success(Success(next)) => acc = next,
            Success(Failure(error)) | Failure(error) => return Failure(error),
        }
    }
    Success(acc)
}

/// [`maybe_fold`] seeded from the first element.
///
/// # Panics
///
/// Panics if `items` is empty. An empty reduction is a contract violation by
/// the caller, distinct from a data-dependent `Nothing`.
pub fn maybe_reduce<T, I, F>(step: F, items: I) -> Maybe<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> Maybe<T>,
{
    let mut iter = items.into_iter();
    let Some(seed) = iter.next() else {
        panic!("reduce requires a non-empty sequence");
    };
    maybe_fold(step, seed, iter)
}

/// [`outcome_fold`] seeded from the first element.
///
/// # Panics
///
/// Panics if `items` is empty. An empty reduction is a contract violation by
/// the caller, distinct from a data-dependent `Failure`, and is deliberately
/// not captured.
pub fn outcome_reduce<T, I, F>(step: F, items: I) -> Outcome<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> Outcome<T>,
{
    let mut iter = items.into_iter();
    let Some(seed) = iter.next() else {
        panic!("reduce requires a non-empty sequence");
    };
    outcome_fold(step, seed, iter)
}

// ============================================================
// Predicate searches
// ============================================================

/// The first element satisfying the predicate.
///
/// Stops at the first match; the predicate is not invoked for the remaining
/// elements.
pub fn first_where<T, I, P>(items: I, mut predicate: P) -> Maybe<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    for item in items {
        if predicate(&item) {
            return Just(item);
        }
    }
    Nothing
}

/// The last element satisfying the predicate.
pub fn last_where<T, I, P>(items: I, mut predicate: P) -> Maybe<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    let mut found = Nothing;
    for item in items {
        if predicate(&item) {
            found = Just(item);
        }
    }
    found
}

/// The unique element satisfying the predicate.
///
/// Returns `Nothing` both when no element matches **and** when more than one
/// matches: an ambiguous match and no match are deliberately
/// indistinguishable. Stops as soon as a second match is seen.
pub fn single_where<T, I, P>(items: I, mut predicate: P) -> Maybe<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    let mut found = Nothing;
    for item in items {
        if predicate(&item) {
            if found.is_just() {
                return Nothing;
            }
            found = Just(item);
        }
    }
    found
}

/// The first present value in a sequence of `Maybe`s.
///
/// Stops at the first `Just` without pulling further elements.
pub fn maybe_first_just<T, I>(items: I) -> Maybe<T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    for item in items {
        if item.is_just() {
            return item;
        }
    }
    Nothing
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("step failed")]
    struct StepError;

    #[test]
    fn test_maybe_sequence() {
        assert_eq!(
            maybe_sequence(vec![Just(1), Just(2), Just(3)]),
            Just(vec![1, 2, 3])
        );
        assert_eq!(maybe_sequence(vec![Just(1), Nothing, Just(3)]), Nothing);
        assert_eq!(maybe_sequence(Vec::<Maybe<i32>>::new()), Just(vec![]));
    }

    #[test]
    fn test_maybe_sequence_stops_pulling() {
        let mut pulled = 0;
        let iter = [Just(1), Nothing, Just(3)].into_iter().inspect(|_| pulled += 1);
        assert_eq!(maybe_sequence(iter), Nothing);
        assert_eq!(pulled, 2);
    }

    #[test]
    fn test_outcome_sequence() {
        let all = outcome_sequence(vec![Success(1), Success(2)]);
        assert_eq!(all, Success(vec![1, 2]));

        let broken = outcome_sequence(vec![
            Success(1),
            Success(2),
            Outcome::failure(StepError),
        ]);
        assert_eq!(
            broken.as_failure().map(|e| e.message()),
            Just("step failed")
        );
    }

    #[test]
    fn test_maybe_traverse() {
        assert_eq!(
            maybe_traverse(|x: i32| Just(x * 2), vec![1, 2, 3]),
            Just(vec![2, 4, 6])
        );
        assert_eq!(
            maybe_traverse(|x: i32| if x > 2 { Nothing } else { Just(x) }, vec![1, 2, 3]),
            Nothing
        );
    }

    #[test]
    fn test_outcome_traverse_captures_panicking_step() {
        let traversed = outcome_traverse(
            |x: i32| if x == 2 { panic!("bad element") } else { Success(x) },
            vec![1, 2, 3],
        );
        assert_eq!(
            traversed.as_failure().map(|e| e.message()),
            Just("bad element")
        );
    }

    #[test]
    fn test_maybe_fold() {
        let safe_div = |acc: i32, x: i32| if x == 0 { Nothing } else { Just(acc / x) };
        assert_eq!(maybe_fold(safe_div, 100, vec![2, 5]), Just(10));
        assert_eq!(maybe_fold(safe_div, 100, vec![2, 0, 5]), Nothing);
    }

    #[test]
    fn test_maybe_fold_skips_rest_after_nothing() {
        let mut calls = 0;
        let step = |acc: i32, x: i32| {
            calls += 1;
            if x == 0 {
                Nothing
            } else {
                Just(acc + x)
            }
        };
        assert_eq!(maybe_fold(step, 0, vec![1, 0, 2, 3]), Nothing);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_outcome_fold() {
        let checked_sub = |acc: i32, x: i32| {
            if x > acc {
                Outcome::failure(StepError)
            } else {
                Success(acc - x)
            }
        };
        assert_eq!(outcome_fold(checked_sub, 10, vec![3, 4]), Success(3));
        assert!(outcome_fold(checked_sub, 10, vec![3, 9]).is_failure());
    }

    #[test]
    fn test_maybe_reduce() {
        let min = |a: i32, b: i32| Just(a.min(b));
        assert_eq!(maybe_reduce(min, vec![3, 1, 2]), Just(1));
    }

    #[test]
    #[should_panic(expected = "non-empty sequence")]
    fn test_maybe_reduce_empty_is_contract_violation() {
        let _ = maybe_reduce(|a: i32, b: i32| Just(a + b), vec![]);
    }

    #[test]
    #[should_panic(expected = "non-empty sequence")]
    fn test_outcome_reduce_empty_is_contract_violation() {
        let _ = outcome_reduce(|a: i32, b: i32| Success(a + b), vec![]);
    }

    #[test]
    fn test_first_where() {
        assert_eq!(first_where(vec![1, 2, 3, 4], |x| x % 2 == 0), Just(2));
        assert_eq!(first_where(vec![1, 3], |x| x % 2 == 0), Nothing);
    }

    #[test]
    fn test_last_where() {
        assert_eq!(last_where(vec![1, 2, 3, 4], |x| x % 2 == 0), Just(4));
        assert_eq!(last_where(Vec::<i32>::new(), |_| true), Nothing);
    }

    #[test]
    fn test_single_where_unique_match() {
        assert_eq!(single_where(vec![1, 2], |x| *x == 1), Just(1));
    }

    #[test]
    fn test_single_where_conflates_none_and_many() {
        // Ambiguous match and no match both come back absent.
        assert_eq!(single_where(vec![1, 1], |_| true), Nothing);
        assert_eq!(single_where(Vec::<i32>::new(), |_| true), Nothing);
    }

    #[test]
    fn test_maybe_first_just() {
        assert_eq!(maybe_first_just(vec![Nothing, Just(1), Just(2)]), Just(1));
        assert_eq!(maybe_first_just(vec![Nothing, Nothing]), Nothing::<i32>);
    }
}
