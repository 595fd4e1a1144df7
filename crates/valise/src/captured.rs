//! Captured failures with full diagnostic fidelity.
//!
//! A [`CapturedError`] holds everything an unwinding computation left behind:
//! the original payload (the actual boxed value, not a formatted string), a
//! human-readable message, and a backtrace taken at the capture boundary.
//! Because the payload is kept verbatim, [`CapturedError::rethrow`] can
//! resume the original unwind so callers downstream observe a failure that is
//! payload-identical to the one that was captured.
//!
//! # Example
//!
//! ```ignore
//! use valise::Outcome;
//!
//! let outcome: Outcome<i32> = Outcome::guard(|| panic!("boom"));
//! let error = outcome.into_result().unwrap_err();
//! assert_eq!(error.message(), "boom");
//! assert!(error.is::<&str>());
//! ```

use std::any::Any;
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;
use std::panic;

use thiserror::Error;

/// Message used when a panic payload is neither `&str` nor `String`.
const OPAQUE_PAYLOAD: &str = "opaque panic payload";

/// A failure captured from an unwinding computation or a typed error value.
///
/// Three pieces are preserved:
///
/// - the **payload**: the exact boxed value the failure carried, so
///   [`rethrow`](CapturedError::rethrow) reproduces the original failure and
///   [`downcast_ref`](CapturedError::downcast_ref) can recover the typed
///   error;
/// - the **message**: extracted from string payloads or from the error's
///   `Display` output;
/// - a **backtrace**: taken at the capture boundary (capture behind
///   `catch_unwind` cannot observe the unwound frames themselves; enable
///   `RUST_BACKTRACE` to populate it).
///
/// Equality compares payload type and message only; backtraces never
/// participate, so two failures captured at different call sites from the
/// same panic compare equal.
pub struct CapturedError {
    payload: Box<dyn Any + Send + 'static>,
    message: String,
    backtrace: Backtrace,
}

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for CapturedError {}

impl CapturedError {
    /// Capture a raw panic payload, as produced by `std::panic::catch_unwind`.
    ///
    /// Total: message extraction is downcast-based and cannot itself panic.
    /// Payloads that are neither `&str` nor `String` keep their value for
    /// [`downcast_ref`](CapturedError::downcast_ref) but get a fixed
    /// description as their message.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_owned()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            OPAQUE_PAYLOAD.to_owned()
        };
        CapturedError {
            payload,
            message,
            backtrace: Backtrace::capture(),
        }
    }

    /// Capture a typed error value without unwinding.
    ///
    /// The value itself becomes the payload, so it can later be recovered
    /// with [`downcast_ref`](CapturedError::downcast_ref) or re-raised with
    /// [`rethrow`](CapturedError::rethrow).
    #[must_use]
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + 'static,
    {
        let message = error.to_string();
        CapturedError {
            payload: Box::new(error),
            message,
            backtrace: Backtrace::capture(),
        }
    }

    /// The human-readable description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The backtrace taken when the failure was captured.
    #[must_use]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Check whether the payload is a value of type `E`.
    #[must_use]
    pub fn is<E: Any>(&self) -> bool {
        self.payload.as_ref().is::<E>()
    }

    /// Borrow the payload as a value of type `E`, if it is one.
    #[must_use]
    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.payload.as_ref().downcast_ref::<E>()
    }

    /// Take back the raw payload, consuming the capture.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Resume the original unwind with the captured payload.
    ///
    /// The panic observed by the caller carries the exact value that was
    /// captured, not a re-wrapped copy.
    pub fn rethrow(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedError")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl PartialEq for CapturedError {
    fn eq(&self, other: &Self) -> bool {
        // Payload type + message; backtrace frames are never compared.
        self.payload.as_ref().type_id() == other.payload.as_ref().type_id()
            && self.message == other.message
    }
}

impl Eq for CapturedError {}

/// Default failure attached when an absent value is promoted to an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no value present")]
pub struct NoValueError;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("widget {0} missing")]
    struct WidgetError(u32);

    #[test]
    fn test_from_panic_str_message() {
        let error = CapturedError::from_panic(Box::new("boom"));
        assert_eq!(error.message(), "boom");
        assert!(error.is::<&str>());
    }

    #[test]
    fn test_from_panic_string_message() {
        let error = CapturedError::from_panic(Box::new(String::from("kaput")));
        assert_eq!(error.message(), "kaput");
        assert!(error.is::<String>());
    }

    #[test]
    fn test_from_panic_opaque_payload() {
        let error = CapturedError::from_panic(Box::new(17u64));
        assert_eq!(error.message(), OPAQUE_PAYLOAD);
        assert_eq!(error.downcast_ref::<u64>(), Some(&17));
    }

    #[test]
    fn test_from_error_keeps_typed_payload() {
        let error = CapturedError::from_error(WidgetError(3));
        assert_eq!(error.message(), "widget 3 missing");
        assert_eq!(error.downcast_ref::<WidgetError>().map(|e| e.0), Some(3));
    }

    #[test]
    fn test_equality_by_type_and_message() {
        let a = CapturedError::from_panic(Box::new("same"));
        let b = CapturedError::from_panic(Box::new("same"));
        let c = CapturedError::from_panic(Box::new(String::from("same")));
        assert_eq!(a, b);
        assert_ne!(a, c); // same message, different payload type
    }

    #[test]
    fn test_rethrow_resumes_original_payload() {
        let error = CapturedError::from_panic(Box::new("original"));
        let caught = std::panic::catch_unwind(panic::AssertUnwindSafe(move || error.rethrow()));
        let payload = caught.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>().copied(), Some("original"));
    }

    #[test]
    fn test_display_is_message() {
        let error = CapturedError::from_error(WidgetError(9));
        assert_eq!(error.to_string(), "widget 9 missing");
    }
}
