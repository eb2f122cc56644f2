//! Core domain types for precond.
//!
//! This crate contains pure domain types with no IO and minimal dependencies:
//! the failure taxonomy returned by every check, the arguments substituted into
//! message templates, and the validated labels used in index messages.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod arg;
mod failure;
mod label;
mod policy;

pub use arg::FormatArg;
pub use failure::{FailureKind, PreconditionError};
pub use label::{EmptyLabelError, Label};
pub use policy::TemplatePolicy;
