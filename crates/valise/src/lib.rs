//! Algebraic value containers.
//!
//! This crate provides two parametric containers and a consistent combinator
//! algebra over them:
//!
//! - [`Maybe<T>`] - a value that is present or absent. Absence is an
//!   expected outcome, not an error.
//! - [`Outcome<T>`] - a success value or a captured failure. A
//!   [`CapturedError`] preserves the original failure's payload, message,
//!   and a backtrace, and can re-raise the failure verbatim.
//!
//! Both containers support `map`, `bind`, filtering, and `zip_with`;
//! short-circuiting traversal over sequences lives in [`traverse`],
//! composition of container-returning functions in [`kleisli`], and
//! comprehension-shaped adapters in [`query`]. Once an absence or failure
//! enters a chain, it propagates without invoking any downstream callback;
//! only `recover`/`or_else` re-enter success.
//!
//! The algebra is pure and synchronous: every container is immutable after
//! construction, callbacks run exactly once on the caller's thread, and the
//! only caught control flow is the unwind boundary inside
//! [`Outcome::guard`]. Precondition violations (an empty `reduce`) panic
//! immediately and are deliberately never captured.
//!
//! # Example
//!
//! ```ignore
//! use valise::{Maybe, Outcome};
//! use valise::traverse::outcome_sequence;
//!
//! let batch = outcome_sequence(vec![
//!     Outcome::guard(|| "1".parse::<i32>().unwrap()),
//!     Outcome::guard(|| "2".parse::<i32>().unwrap()),
//! ]);
//! assert_eq!(batch.value_or(vec![]), vec![1, 2]);
//! ```
//!
//! # Modules
//!
//! - [`maybe`] - the present/absent container
//! - [`outcome`] - the success/captured-failure container
//! - [`captured`] - captured failures and exact re-raise
//! - [`traverse`] - short-circuiting sequence traversal
//! - [`kleisli`] - composition of container-returning functions
//! - [`query`] - comprehension-shaped adapters

#![warn(missing_docs)]

pub mod captured;
pub mod kleisli;
pub mod maybe;
pub mod outcome;
pub mod query;
pub mod traverse;

// Re-export main types
pub use captured::{CapturedError, NoValueError};
pub use maybe::Maybe;
pub use outcome::Outcome;
