//! Arguments substituted into message templates.

use std::fmt;

/// One positional argument for a message template.
///
/// Arguments borrow from the caller, so building them on the success path
/// costs nothing beyond a copy of a reference or a primitive. Rendering only
/// happens once a check has failed.
#[derive(Clone, Copy)]
pub enum FormatArg<'a> {
    /// The absent value, rendered as `null`.
    Null,
    Bool(bool),
    Char(char),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(&'a str),
    /// Any other displayable value. Only `%s` accepts it in strict mode.
    Display(&'a dyn fmt::Display),
}

impl<'a> FormatArg<'a> {
    /// Largest precision `core::fmt` accepts; anything above panics there.
    pub const MAX_PRECISION: usize = u16::MAX as usize;

    /// Wrap an arbitrary `Display` value.
    #[must_use]
    pub fn display(value: &'a dyn fmt::Display) -> Self {
        Self::Display(value)
    }

    /// Render for a `%d`/`%i` directive. Floats are truncated toward zero.
    ///
    /// Returns `None` for non-numeric arguments and non-finite floats.
    #[must_use]
    pub fn render_integer(&self) -> Option<String> {
        match *self {
            Self::Int(value) => Some(value.to_string()),
            Self::Uint(value) => Some(value.to_string()),
            Self::Float(value) if value.is_finite() => {
                let truncated = value.trunc();
                // Avoid printing "-0" for values in (-1, 0).
                if truncated == 0.0 {
                    Some("0".to_string())
                } else {
                    Some(format!("{truncated}"))
                }
            }
            _ => None,
        }
    }

    /// Render for a `%f` directive, optionally with a fixed number of decimals.
    /// Precision is clamped to [`FormatArg::MAX_PRECISION`].
    ///
    /// Returns `None` for non-numeric arguments.
    #[must_use]
    pub fn render_float(&self, precision: Option<usize>) -> Option<String> {
        let value = match *self {
            Self::Int(value) => value as f64,
            Self::Uint(value) => value as f64,
            Self::Float(value) => value,
            _ => return None,
        };
        Some(match precision {
            Some(digits) => {
                let digits = digits.min(Self::MAX_PRECISION);
                format!("{value:.digits$}")
            }
            None => format!("{value}"),
        })
    }
}

impl fmt::Display for FormatArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Char(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Uint(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
            Self::Display(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Debug for FormatArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::Char(value) => f.debug_tuple("Char").field(value).finish(),
            Self::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Self::Uint(value) => f.debug_tuple("Uint").field(value).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Self::Display(value) => f
                .debug_tuple("Display")
                .field(&value.to_string())
                .finish(),
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for FormatArg<'_> {
            fn from(value: $ty) -> Self {
                Self::Int(i64::from(value))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for FormatArg<'_> {
            fn from(value: $ty) -> Self {
                Self::Uint(u64::from(value))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for FormatArg<'_> {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for FormatArg<'_> {
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

impl From<f32> for FormatArg<'_> {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for FormatArg<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FormatArg<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for FormatArg<'_> {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value.as_str())
    }
}

impl<'a, T> From<Option<T>> for FormatArg<'a>
where
    T: Into<FormatArg<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
