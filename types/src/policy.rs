use serde::{Deserialize, Serialize};

/// How message templates treat placeholder/argument mismatches.
///
/// ```toml
/// [template]
/// policy = "strict"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplatePolicy {
    /// Unmatched placeholders stay literal and surplus arguments are appended
    /// as `[a, b]`. Formatting never fails.
    #[default]
    Lenient,
    /// Any mismatch is an error, reported by the checker as an illegal argument.
    Strict,
}

impl TemplatePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }

    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}
