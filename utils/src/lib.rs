//! Shared infrastructure utilities for precond.
//!
//! This crate provides helpers that the checker needs but that don't belong in
//! the domain-pure `precond-types` crate:
//!
//! - **`template`**: printf-style message templates with a mismatch policy

pub mod template;

pub use template::{TemplateError, format_template, render_message};
