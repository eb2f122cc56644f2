//! Free-function checks backed by the default [`Checker`].
//!
//! The default checker is a compile-time constant, so these functions share no
//! runtime state and are safe to call from any thread.

use precond_types::{FormatArg, PreconditionError};

use crate::Checker;

const DEFAULT: Checker = Checker::new();

pub fn check_argument(
    expression: bool,
    template: Option<&str>,
    args: &[FormatArg<'_>],
) -> Result<(), PreconditionError> {
    DEFAULT.check_argument(expression, template, args)
}

pub fn check_state(
    expression: bool,
    template: Option<&str>,
    args: &[FormatArg<'_>],
) -> Result<(), PreconditionError> {
    DEFAULT.check_state(expression, template, args)
}

pub fn check_not_null<T>(
    reference: Option<T>,
    template: Option<&str>,
    args: &[FormatArg<'_>],
) -> Result<T, PreconditionError> {
    DEFAULT.check_not_null(reference, template, args)
}

pub fn check_element_index(index: i64, size: i64) -> Result<i64, PreconditionError> {
    DEFAULT.check_element_index(index, size)
}

pub fn check_element_index_labeled(
    index: i64,
    size: i64,
    description: &str,
) -> Result<i64, PreconditionError> {
    DEFAULT.check_element_index_labeled(index, size, description)
}

pub fn check_position_index(index: i64, size: i64) -> Result<i64, PreconditionError> {
    DEFAULT.check_position_index(index, size)
}

pub fn check_position_index_labeled(
    index: i64,
    size: i64,
    description: &str,
) -> Result<i64, PreconditionError> {
    DEFAULT.check_position_index_labeled(index, size, description)
}

pub fn check_position_indexes(start: i64, end: i64, size: i64) -> Result<(), PreconditionError> {
    DEFAULT.check_position_indexes(start, end, size)
}
