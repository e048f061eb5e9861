//! Failure values returned by tests.

use stillwater::prelude::*;

use super::report::ErrorReport;

/// Why a value was rejected.
///
/// Tests return failures as values; nothing in the engine panics or raises on
/// an ordinary rejection. Only [`Chain::verify`](crate::Chain::verify) turns a
/// failure into an `Err`.
///
/// # Combining Failures
///
/// `Failure` implements `Semigroup`. Combining two failures produces a single
/// message naming both, which is how [`Chain::or`](crate::Chain::or) reports a
/// value that every alternative rejected:
///
/// ```rust
/// use vouch::Failure;
/// use stillwater::prelude::*;
///
/// let combined = Failure::message("must be null").combine(Failure::message("must be a string"));
/// assert_eq!(combined.to_string(), "must be null or must be a string");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Failure {
    /// The chain was evaluated before any test was added to it.
    #[error("no tests configured")]
    NoTests,

    /// A predicate rejected the value.
    #[error("{0}")]
    Message(String),

    /// The structural matcher found one or more mismatches.
    #[error("{0}")]
    Report(ErrorReport),
}

impl Failure {
    /// Creates a message failure.
    pub fn message(message: impl Into<String>) -> Self {
        Failure::Message(message.into())
    }

    /// Returns true for the "no tests configured" configuration error.
    pub fn is_no_tests(&self) -> bool {
        matches!(self, Failure::NoTests)
    }

    /// Returns the message if this is a predicate failure.
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Failure::Message(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the report if this failure came from the structural matcher.
    pub fn as_report(&self) -> Option<&ErrorReport> {
        match self {
            Failure::Report(report) => Some(report),
            _ => None,
        }
    }
}

impl Semigroup for Failure {
    fn combine(self, other: Self) -> Self {
        Failure::Message(format!("{} or {}", self, other))
    }
}

/// The raised form of a failed evaluation.
///
/// Carries the rendered value that was rejected alongside the failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{value} {failure}")]
pub struct VerifyError {
    /// The rejected value, rendered for messages.
    pub value: String,
    /// Why it was rejected.
    pub failure: Failure,
}

// Chains are shared across threads, so their failures must be too.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Failure>();
    assert_sync::<Failure>();
    assert_send::<VerifyError>();
    assert_sync::<VerifyError>();
};
