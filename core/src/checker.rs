//! The precondition checker.
//!
//! A [`Checker`] is an immutable, caller-owned value. It holds no state that
//! changes between calls: the template policy and default labels are fixed at
//! construction, and every check is a pure function of its arguments.

use precond_config::CheckerConfig;
use precond_types::{FailureKind, FormatArg, Label, PreconditionError, TemplatePolicy};
use precond_utils::render_message;

use crate::bounds::{bad_element_index, bad_position_index, bad_position_indexes};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checker {
    policy: TemplatePolicy,
    element_label: Label,
    position_label: Label,
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker {
    /// Lenient templates, `"Index"` and `"Position"` labels.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            policy: TemplatePolicy::Lenient,
            element_label: Label::ELEMENT,
            position_label: Label::POSITION,
        }
    }

    #[must_use]
    pub fn from_config(config: &CheckerConfig) -> Self {
        Self {
            policy: config.template.policy,
            element_label: config.labels.element.clone(),
            position_label: config.labels.position.clone(),
        }
    }

    pub fn with_policy(mut self, policy: TemplatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_labels(mut self, element: Label, position: Label) -> Self {
        self.element_label = element;
        self.position_label = position;
        self
    }

    #[must_use]
    pub const fn policy(&self) -> TemplatePolicy {
        self.policy
    }

    #[must_use]
    pub fn element_label(&self) -> &Label {
        &self.element_label
    }

    #[must_use]
    pub fn position_label(&self) -> &Label {
        &self.position_label
    }

    /// Fails with [`FailureKind::IllegalArgument`] if `expression` is false.
    pub fn check_argument(
        &self,
        expression: bool,
        template: Option<&str>,
        args: &[FormatArg<'_>],
    ) -> Result<(), PreconditionError> {
        if expression {
            Ok(())
        } else {
            Err(self.failure(FailureKind::IllegalArgument, template, args))
        }
    }

    /// Fails with [`FailureKind::IllegalState`] if `expression` is false.
    pub fn check_state(
        &self,
        expression: bool,
        template: Option<&str>,
        args: &[FormatArg<'_>],
    ) -> Result<(), PreconditionError> {
        if expression {
            Ok(())
        } else {
            Err(self.failure(FailureKind::IllegalState, template, args))
        }
    }

    /// Returns the contained value, or fails with [`FailureKind::NullReference`].
    ///
    /// Only `None` is absent; empty strings and collections pass.
    pub fn check_not_null<T>(
        &self,
        reference: Option<T>,
        template: Option<&str>,
        args: &[FormatArg<'_>],
    ) -> Result<T, PreconditionError> {
        reference.ok_or_else(|| self.failure(FailureKind::NullReference, template, args))
    }

    /// Ensures `0 <= index < size`, describing the index with the configured
    /// element label.
    pub fn check_element_index(&self, index: i64, size: i64) -> Result<i64, PreconditionError> {
        self.check_element_index_labeled(index, size, self.element_label.as_str())
    }

    pub fn check_element_index_labeled(
        &self,
        index: i64,
        size: i64,
        description: &str,
    ) -> Result<i64, PreconditionError> {
        if index < 0 || index >= size {
            return Err(bad_element_index(index, size, description));
        }
        Ok(index)
    }

    /// Ensures `0 <= index <= size`. A position may sit one past the last
    /// element, e.g. an insertion point.
    pub fn check_position_index(&self, index: i64, size: i64) -> Result<i64, PreconditionError> {
        self.check_position_index_labeled(index, size, self.position_label.as_str())
    }

    pub fn check_position_index_labeled(
        &self,
        index: i64,
        size: i64,
        description: &str,
    ) -> Result<i64, PreconditionError> {
        if index < 0 || index > size {
            return Err(bad_position_index(index, size, description));
        }
        Ok(index)
    }

    /// Ensures `[start, end)` is a valid range of a sequence of length `size`.
    pub fn check_position_indexes(
        &self,
        start: i64,
        end: i64,
        size: i64,
    ) -> Result<(), PreconditionError> {
        if start < 0 || end < start || end > size {
            return Err(bad_position_indexes(start, end, size));
        }
        Ok(())
    }

    fn failure(
        &self,
        kind: FailureKind,
        template: Option<&str>,
        args: &[FormatArg<'_>],
    ) -> PreconditionError {
        match render_message(template, args, self.policy) {
            Ok(message) => PreconditionError::new(kind, message),
            Err(err) => PreconditionError::illegal_argument(format!(
                "invalid message template \"{}\": {err}",
                template.unwrap_or_default()
            )),
        }
    }
}
