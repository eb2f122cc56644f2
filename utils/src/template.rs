//! Message template formatting.
//!
//! Templates use printf-style placeholders filled positionally from a slice of
//! [`FormatArg`]s in a single pass:
//!
//! - `%s` - display form of the argument
//! - `%d` / `%i` - integer form (floats truncate toward zero)
//! - `%f` / `%.Nf` - floating form, optionally with `N` decimals
//! - `%%` - a literal percent sign
//!
//! A template with no arguments is returned verbatim, `%` sequences included.
//! What happens on a placeholder/argument mismatch is decided by
//! [`TemplatePolicy`].

use std::iter::Peekable;
use std::str::CharIndices;

use precond_types::{FormatArg, TemplatePolicy};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("no argument for placeholder #{index}")]
    MissingArgument { index: usize },
    #[error("{supplied} arguments supplied but only {used} placeholders")]
    UnusedArguments { used: usize, supplied: usize },
    #[error("unknown directive `{directive}` at offset {offset}")]
    UnknownDirective { directive: String, offset: usize },
    #[error("dangling `%` at offset {offset}")]
    DanglingPercent { offset: usize },
    #[error("argument #{index} is not numeric for `{directive}`")]
    NotNumeric { index: usize, directive: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Display,
    Integer,
    Float(Option<usize>),
}

struct Placeholder {
    conversion: Conversion,
    /// Byte range of the placeholder text, `%` included.
    start: usize,
    end: usize,
}

/// Build the message for a failed check.
///
/// `None` template yields `None`; a template without arguments is used as-is.
pub fn render_message(
    template: Option<&str>,
    args: &[FormatArg<'_>],
    policy: TemplatePolicy,
) -> Result<Option<String>, TemplateError> {
    match template {
        None => Ok(None),
        Some(template) => format_template(template, args, policy).map(Some),
    }
}

/// Substitute `args` into `template`.
///
/// Under [`TemplatePolicy::Lenient`] this never fails: unmatched placeholders
/// stay literal, unknown directives are copied through, non-numeric arguments
/// to `%d`/`%f` use their display form, and surplus arguments are appended as
/// ` [a, b]`. Under [`TemplatePolicy::Strict`] each of those is an error.
pub fn format_template(
    template: &str,
    args: &[FormatArg<'_>],
    policy: TemplatePolicy,
) -> Result<String, TemplateError> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    let mut out = String::with_capacity(template.len() + 16 * args.len());
    let mut chars = template.char_indices().peekable();
    let mut next_arg = 0;

    while let Some((offset, c)) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            None => {
                lenient_or(policy, TemplateError::DanglingPercent { offset })?;
                out.push('%');
            }
            Some((_, '%')) => {
                chars.next();
                out.push('%');
            }
            Some(_) => match parse_placeholder(template, offset, &mut chars) {
                Some(placeholder) => {
                    let text = &template[placeholder.start..placeholder.end];
                    match args.get(next_arg) {
                        Some(arg) => {
                            let rendered =
                                render(arg, next_arg, text, placeholder.conversion, policy)?;
                            out.push_str(&rendered);
                        }
                        None => {
                            lenient_or(policy, TemplateError::MissingArgument { index: next_arg })?;
                            out.push_str(text);
                        }
                    }
                    next_arg += 1;
                }
                None => {
                    let directive = unknown_directive(template, offset);
                    lenient_or(policy, TemplateError::UnknownDirective { directive, offset })?;
                    out.push('%');
                }
            },
        }
    }

    if next_arg < args.len() {
        lenient_or(
            policy,
            TemplateError::UnusedArguments {
                used: next_arg,
                supplied: args.len(),
            },
        )?;
        out.push_str(" [");
        for (i, arg) in args[next_arg..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&arg.to_string());
        }
        out.push(']');
    }

    Ok(out)
}

/// Fail under the strict policy; under the lenient one, note the mismatch and continue.
fn lenient_or(policy: TemplatePolicy, err: TemplateError) -> Result<(), TemplateError> {
    if policy.is_strict() {
        return Err(err);
    }
    tracing::debug!("lenient message template: {err}");
    Ok(())
}

/// Consume a recognized placeholder following the `%` at `start`.
///
/// Leaves the iterator untouched and returns `None` when the text after `%`
/// is not a supported directive.
fn parse_placeholder(
    template: &str,
    start: usize,
    chars: &mut Peekable<CharIndices<'_>>,
) -> Option<Placeholder> {
    let (offset, c) = chars.peek().copied()?;
    let simple = match c {
        's' => Some(Conversion::Display),
        'd' | 'i' => Some(Conversion::Integer),
        'f' => Some(Conversion::Float(None)),
        _ => None,
    };
    if let Some(conversion) = simple {
        chars.next();
        return Some(Placeholder {
            conversion,
            start,
            end: offset + c.len_utf8(),
        });
    }
    if c != '.' {
        return None;
    }

    // `%.Nf`: check the whole directive before consuming anything.
    let rest = &template[offset + 1..];
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || rest.as_bytes().get(digits) != Some(&b'f') {
        return None;
    }
    // Over-long precisions are not directives; `core::fmt` would panic on them.
    let precision: usize = rest[..digits].parse().ok()?;
    if precision > FormatArg::MAX_PRECISION {
        return None;
    }
    // '.', the digits, and 'f' are all single-byte.
    for _ in 0..digits + 2 {
        chars.next();
    }
    Some(Placeholder {
        conversion: Conversion::Float(Some(precision)),
        start,
        end: offset + digits + 2,
    })
}

fn unknown_directive(template: &str, offset: usize) -> String {
    template[offset..].chars().take(2).collect()
}

fn render(
    arg: &FormatArg<'_>,
    index: usize,
    text: &str,
    conversion: Conversion,
    policy: TemplatePolicy,
) -> Result<String, TemplateError> {
    let rendered = match conversion {
        Conversion::Display => return Ok(arg.to_string()),
        Conversion::Integer => arg.render_integer(),
        Conversion::Float(precision) => arg.render_float(precision),
    };
    match rendered {
        Some(rendered) => Ok(rendered),
        None => {
            lenient_or(
                policy,
                TemplateError::NotNumeric {
                    index,
                    directive: text.to_string(),
                },
            )?;
            Ok(arg.to_string())
        }
    }
}
