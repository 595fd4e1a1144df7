//! Comprehension-shaped adapters.
//!
//! Generator- and query-style host code expects three shapes: a projection
//! (`select`), a restriction (`where`), and a nested binding with a result
//! projection (`select_many`). These adapters give both containers those
//! shapes as free functions, delegating to `map`/`filter`/`bind` and adding
//! no semantics of their own.
//!
//! There is no `outcome_where`: a boolean predicate has no natural failure
//! to attach to an [`Outcome`]. The failure-supplier form lives on the type
//! as [`Outcome::filter_or_else`].

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Projection over a [`Maybe`]; `select` is `map`.
pub fn maybe_select<T, U, F>(source: Maybe<T>, selector: F) -> Maybe<U>
where
    F: FnOnce(T) -> U,
{
    source.map(selector)
}

/// Restriction over a [`Maybe`]; `where` is `filter`.
pub fn maybe_where<T, P>(source: Maybe<T>, predicate: P) -> Maybe<T>
where
    P: FnOnce(&T) -> bool,
{
    source.filter(predicate)
}

/// Nested binding with a result projection over a [`Maybe`].
///
/// `select_many(source, binder, result)` is
/// `source.bind(|x| binder(&x).map(|y| result(x, y)))`: the binder sees each
/// source value, and the result projection combines the source value with
/// the bound one.
pub fn maybe_select_many<T, U, V, B, S>(source: Maybe<T>, binder: B, result: S) -> Maybe<V>
where
    B: FnOnce(&T) -> Maybe<U>,
    S: FnOnce(T, U) -> V,
{
    source.bind(|x| binder(&x).map(|y| result(x, y)))
}

/// Projection over an [`Outcome`]; `select` is `map`, so the selector runs
/// under capture.
pub fn outcome_select<T, U, F>(source: Outcome<T>, selector: F) -> Outcome<U>
where
    F: FnOnce(T) -> U,
{
    source.map(selector)
}

/// Nested binding with a result projection over an [`Outcome`].
///
/// Built on [`Outcome::bind`]/[`Outcome::map`], so binder and result
/// projection both run under capture.
pub fn outcome_select_many<T, U, V, B, S>(source: Outcome<T>, binder: B, result: S) -> Outcome<V>
where
    B: FnOnce(&T) -> Outcome<U>,
    S: FnOnce(T, U) -> V,
{
    source.bind(|x| binder(&x).map(|y| result(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::{Just, Nothing};
    use crate::outcome::Success;

    #[test]
    fn test_maybe_select_is_map() {
        assert_eq!(maybe_select(Just(5), |x| x + 1), Just(6));
        assert_eq!(maybe_select(Nothing::<i32>, |x| x + 1), Nothing);
    }

    #[test]
    fn test_maybe_where_is_filter() {
        assert_eq!(maybe_where(Just(4), |x| x % 2 == 0), Just(4));
        assert_eq!(maybe_where(Just(3), |x| x % 2 == 0), Nothing);
    }

    #[test]
    fn test_maybe_select_many() {
        let lookup = |key: &i32| if *key > 0 { Just(key * 10) } else { Nothing };
        assert_eq!(
            maybe_select_many(Just(3), lookup, |key, found| (key, found)),
            Just((3, 30))
        );
        assert_eq!(
            maybe_select_many(Just(-3), lookup, |key, found| (key, found)),
            Nothing
        );
        assert_eq!(
            maybe_select_many(Nothing::<i32>, lookup, |key, found| (key, found)),
            Nothing
        );
    }

    #[test]
    fn test_select_many_matches_bind_map_expansion() {
        let binder = |x: &i32| Just(x + 1);
        let by_adapter = maybe_select_many(Just(5), binder, |x, y| x * y);
        let by_hand = Just(5).bind(|x| binder(&x).map(|y| x * y));
        assert_eq!(by_adapter, by_hand);
    }

    #[test]
    fn test_outcome_select_runs_under_capture() {
        assert_eq!(outcome_select(Success(5), |x| x + 1), Success(6));

        let captured = outcome_select(Success(5), |_| -> i32 { panic!("projection blew up") });
        assert_eq!(
            captured.as_failure().map(|e| e.message()),
            Just("projection blew up")
        );
    }

    #[test]
    fn test_outcome_select_many() {
        let reciprocal = |x: &i32| {
            if *x == 0 {
                Outcome::guard(|| panic!("division by zero"))
            } else {
                Success(100 / *x)
            }
        };
        assert_eq!(
            outcome_select_many(Success(4), reciprocal, |x, y| x + y),
            Success(29)
        );
        assert!(outcome_select_many(Success(0), reciprocal, |x, y| x + y).is_failure());
    }
}
