//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::fmt::Debug;

use precond_core::{FailureKind, PreconditionError};

/// Unwrap a failure and return its kind and message.
pub fn failure<T: Debug>(result: Result<T, PreconditionError>) -> (FailureKind, String) {
    let err = result.expect_err("check should fail");
    (err.kind(), err.message().unwrap_or_default().to_string())
}

/// Assert a failure of `kind` and return its rendered message.
pub fn expect_kind<T: Debug>(
    result: Result<T, PreconditionError>,
    kind: FailureKind,
) -> String {
    let (actual, message) = failure(result);
    assert_eq!(actual, kind, "unexpected failure kind for {message:?}");
    message
}
