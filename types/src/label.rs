//! Description labels used in index and position messages.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A description label guaranteed to be non-empty (after trimming).
///
/// Labels name the value being checked in bounds messages, e.g. the
/// `Index` in `"Index (5) must be less than size (5)"`. Validation occurs at
/// construction, so every message built from a `Label` names something.
///
/// # Serde
///
/// Serializes as a plain string. Deserialization fails if the string is
/// empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(Cow<'static, str>);

#[derive(Debug, Error)]
#[error("description label must not be empty")]
pub struct EmptyLabelError;

impl Label {
    pub const ELEMENT: Label = Label::from_static("Index");
    pub const POSITION: Label = Label::from_static("Position");
    pub const START_INDEX: Label = Label::from_static("Start Index");
    pub const END_INDEX: Label = Label::from_static("End Index");

    /// Like [`Label::new`], for `'static` literals. Validates non-emptiness at
    /// compile time when used in a `const`. Does not trim whitespace.
    #[must_use]
    pub const fn from_static(value: &'static str) -> Self {
        assert!(!value.is_empty(), "Label must not be empty");
        Self(Cow::Borrowed(value))
    }

    pub fn new(value: impl Into<String>) -> Result<Self, EmptyLabelError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyLabelError)
        } else {
            Ok(Self(Cow::Owned(value)))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Label {
    type Error = EmptyLabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Label> for String {
    fn from(value: Label) -> Self {
        value.0.into_owned()
    }
}

impl Deref for Label {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
