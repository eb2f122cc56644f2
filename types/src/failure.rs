//! Failure taxonomy for precondition violations.
//!
//! Every check reports exactly one of four kinds. The kind tells the caller
//! what was wrong (an argument, the caller's own state, a missing value, or an
//! out-of-range index); the message says which value and why.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Category of a precondition violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// A caller-supplied argument, or an expression about arguments, is invalid.
    IllegalArgument,
    /// An expression about the calling context's internal state is false.
    IllegalState,
    /// A required value is absent.
    NullReference,
    /// An index or position falls outside its range, or a range ends before it starts.
    IndexOutOfBounds,
}

impl FailureKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IllegalArgument => "illegal argument",
            Self::IllegalState => "illegal state",
            Self::NullReference => "null reference",
            Self::IndexOutOfBounds => "index out of bounds",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed precondition.
///
/// Carries the failure kind and the formatted message, if any. A check invoked
/// without a message template produces an error with no message; its
/// `Display` output then falls back to the kind's label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.kind, .message))]
pub struct PreconditionError {
    kind: FailureKind,
    message: Option<String>,
}

fn describe<'a>(kind: &FailureKind, message: &'a Option<String>) -> &'a str {
    message.as_deref().unwrap_or(kind.as_str())
}

impl PreconditionError {
    #[must_use]
    pub fn new(kind: FailureKind, message: Option<String>) -> Self {
        Self { kind, message }
    }

    #[must_use]
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::new(FailureKind::IllegalArgument, Some(message.into()))
    }

    #[must_use]
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::new(FailureKind::IllegalState, Some(message.into()))
    }

    #[must_use]
    pub fn null_reference(message: impl Into<String>) -> Self {
        Self::new(FailureKind::NullReference, Some(message.into()))
    }

    #[must_use]
    pub fn index_out_of_bounds(message: impl Into<String>) -> Self {
        Self::new(FailureKind::IndexOutOfBounds, Some(message.into()))
    }

    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The formatted message, or `None` when the check had no template.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn into_message(self) -> Option<String> {
        self.message
    }
}
