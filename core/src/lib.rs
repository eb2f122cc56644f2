//! Precondition checks for Rust call sites.
//!
//! This crate validates method arguments, object state, presence of values,
//! and index bounds, returning a [`PreconditionError`] tagged with a
//! [`FailureKind`] when a check fails:
//!
//! - **`check_argument`** / **`check_state`**: boolean expressions
//! - **`check_not_null`**: `Option` presence, returning the value
//! - **`check_element_index`** / **`check_position_index`**: `[0, size)` and `[0, size]`
//! - **`check_position_indexes`**: `[start, end)` sub-ranges
//!
//! Free functions use the built-in defaults; build a [`Checker`] (directly or
//! from a [`CheckerConfig`]) to choose the template policy or default labels.

#[macro_use]
mod macros;

mod bounds;
mod checker;
mod checks;

pub use checker::Checker;
pub use checks::{
    check_argument, check_element_index, check_element_index_labeled, check_not_null,
    check_position_index, check_position_index_labeled, check_position_indexes, check_state,
};
pub use precond_config::{CheckerConfig, ConfigError};
pub use precond_types::{FailureKind, FormatArg, Label, PreconditionError, TemplatePolicy};
pub use precond_utils::TemplateError;
