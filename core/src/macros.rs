//! Call-site macros for the message-carrying checks.
//!
//! Each macro accepts the checked value alone, or followed by a template and
//! any number of arguments. Arguments are converted with `FormatArg::from`
//! and only evaluated once the check has failed.
//!
//! ```
//! use precond_core::{check_argument, check_not_null};
//!
//! fn connect(host: Option<&str>, port: u32) -> Result<String, precond_core::PreconditionError> {
//!     let host = check_not_null!(host, "host is required")?;
//!     check_argument!(port > 0, "port must be positive but was %d", port)?;
//!     Ok(format!("{host}:{port}"))
//! }
//!
//! assert_eq!(connect(Some("db"), 5432).unwrap(), "db:5432");
//! assert_eq!(
//!     connect(Some("db"), 0).unwrap_err().to_string(),
//!     "port must be positive but was 0"
//! );
//! ```

#[macro_export]
macro_rules! check_argument {
    ($expression:expr $(,)?) => {
        $crate::check_argument($expression, ::core::option::Option::None, &[])
    };
    ($expression:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        if $expression {
            ::core::result::Result::Ok(())
        } else {
            $crate::check_argument(
                false,
                ::core::option::Option::Some($template),
                &[$($crate::FormatArg::from($arg)),*],
            )
        }
    };
}

#[macro_export]
macro_rules! check_state {
    ($expression:expr $(,)?) => {
        $crate::check_state($expression, ::core::option::Option::None, &[])
    };
    ($expression:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        if $expression {
            ::core::result::Result::Ok(())
        } else {
            $crate::check_state(
                false,
                ::core::option::Option::Some($template),
                &[$($crate::FormatArg::from($arg)),*],
            )
        }
    };
}

#[macro_export]
macro_rules! check_not_null {
    ($reference:expr $(,)?) => {
        $crate::check_not_null($reference, ::core::option::Option::None, &[])
    };
    ($reference:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        match $reference {
            ::core::option::Option::Some(value) => ::core::result::Result::Ok(value),
            ::core::option::Option::None => $crate::check_not_null(
                ::core::option::Option::None,
                ::core::option::Option::Some($template),
                &[$($crate::FormatArg::from($arg)),*],
            ),
        }
    };
}
