//! Heterogeneous arguments for shared family constructors
//!
//! One code often serves many call sites with different payloads. Callers pass
//! a list of [`ErrorArg`] values and [`family_error`] sorts them out:
//! text fills the message template, an error becomes the cause, an absent
//! value is skipped. Anything else is a programming error and panics.

use super::codes::ErrorDef;
use super::types::{Cause, QueryError};
use std::borrow::Cow;
use std::error::Error as StdError;

/// A single call-site argument to a family constructor
#[derive(Debug, Clone)]
pub enum ErrorArg {
    /// Interpolated into the next `{}` of the template
    Format(String),
    /// Becomes the cause; the last one supplied wins
    Cause(Cause),
    /// Ignored
    Empty,
    /// Rejected; names the offending type
    Unsupported(&'static str),
}

impl From<&str> for ErrorArg {
    fn from(text: &str) -> Self {
        ErrorArg::Format(text.to_string())
    }
}

impl From<String> for ErrorArg {
    fn from(text: String) -> Self {
        ErrorArg::Format(text)
    }
}

impl From<&String> for ErrorArg {
    fn from(text: &String) -> Self {
        ErrorArg::Format(text.clone())
    }
}

impl From<Cow<'_, str>> for ErrorArg {
    fn from(text: Cow<'_, str>) -> Self {
        ErrorArg::Format(text.into_owned())
    }
}

impl From<QueryError> for ErrorArg {
    fn from(err: QueryError) -> Self {
        ErrorArg::Cause(Cause::from(err))
    }
}

impl From<Cause> for ErrorArg {
    fn from(cause: Cause) -> Self {
        ErrorArg::Cause(cause)
    }
}

impl From<std::io::Error> for ErrorArg {
    fn from(err: std::io::Error) -> Self {
        ErrorArg::Cause(Cause::opaque(err))
    }
}

impl From<Box<dyn StdError + Send + Sync>> for ErrorArg {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        ErrorArg::Cause(Cause::from(err))
    }
}

impl<T: Into<ErrorArg>> From<Option<T>> for ErrorArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(ErrorArg::Empty, Into::into)
    }
}

macro_rules! unsupported_arg {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ErrorArg {
                fn from(_: $ty) -> Self {
                    ErrorArg::Unsupported(std::any::type_name::<$ty>())
                }
            }
        )*
    };
}

unsupported_arg!(f32, f64, i32, i64, u32, u64, usize, bool);

/// Build an [`ErrorArg`] list from mixed values.
///
/// ```
/// use qdiag_core::error_args;
/// let args = error_args!["widgets", None::<String>];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! error_args {
    ($($arg:expr),* $(,)?) => {
        vec![$($crate::error::ErrorArg::from($arg)),*]
    };
}

/// Construct a family error from a template and classified arguments.
///
/// `{}` placeholders are filled in order; unfilled ones render as empty text
/// and surplus format arguments are dropped. Cause arguments are attached in
/// order through [`QueryError::with_cause`], so the last one is the direct
/// cause and earlier ones stay in the chain.
///
/// # Panics
///
/// Panics on an [`ErrorArg::Unsupported`] argument.
#[track_caller]
pub fn family_error<I>(def: &ErrorDef, template: &str, args: I) -> QueryError
where
    I: IntoIterator<Item = ErrorArg>,
{
    let mut values = Vec::new();
    let mut causes = Vec::new();

    for arg in args {
        match arg {
            ErrorArg::Format(text) => values.push(text),
            ErrorArg::Cause(c) => causes.push(c),
            ErrorArg::Empty => {}
            ErrorArg::Unsupported(ty) => {
                panic!("unsupported error argument of type {} for code {}", ty, def.code)
            }
        }
    }

    let err = QueryError::new(def, render(template, &values));
    causes
        .into_iter()
        .fold(err, |err, cause| err.with_cause(cause))
}

fn render(template: &str, values: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut values = values.iter();
    let mut pieces = template.split("{}");

    if let Some(first) = pieces.next() {
        out.push_str(first);
    }
    for piece in pieces {
        if let Some(value) = values.next() {
            out.push_str(value);
        }
        out.push_str(piece);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes::sequence;

    #[test]
    fn test_render_fills_in_order() {
        let values = vec!["a".to_string(), "b".to_string()];
        assert_eq!(render("x {} y {} z", &values), "x a y b z");
    }

    #[test]
    fn test_render_unfilled_and_surplus() {
        assert_eq!(render("Sequence '{}' not found", &[]), "Sequence '' not found");
        let values = vec!["a".to_string(), "b".to_string()];
        assert_eq!(render("only {}", &values), "only a");
        assert_eq!(render("none", &values), "none");
    }

    #[test]
    fn test_classification_scenario() {
        let inner = QueryError::new(&sequence::INVALID_CACHE, "Invalid cache value -6");
        let args = error_args!["widgets", inner.clone(), None::<String>];
        let err = family_error(&sequence::CREATE, "Create failed for sequence '{}'", args);

        assert_eq!(err.message(), "Create failed for sequence 'widgets'");
        assert_eq!(err.cause().and_then(Cause::as_query_error), Some(&inner));
    }

    #[test]
    fn test_last_cause_wins_and_earlier_stay_chained() {
        let first = QueryError::new(&sequence::GENERIC, "first");
        let second = QueryError::new(&sequence::GENERIC, "second");
        let err = family_error(
            &sequence::DROP,
            "Drop failed for sequence '{}'",
            error_args!["s", first, second],
        );
        let cause = err.cause().and_then(Cause::as_query_error).unwrap();
        assert_eq!(cause.message(), "second");
        let messages: Vec<&str> = err.chain().map(|e| e.message()).collect();
        assert_eq!(messages, vec!["Drop failed for sequence 's'", "second", "first"]);
    }

    #[test]
    #[should_panic(expected = "unsupported error argument")]
    #[allow(clippy::approx_constant)]
    fn test_unsupported_argument_panics() {
        let _ = family_error(&sequence::INVALID_RANGE, "Invalid range {}", error_args![3.14_f64]);
    }

    #[test]
    fn test_option_some_is_classified() {
        assert!(matches!(ErrorArg::from(Some("x")), ErrorArg::Format(_)));
        assert!(matches!(ErrorArg::from(None::<QueryError>), ErrorArg::Empty));
        assert!(matches!(ErrorArg::from(true), ErrorArg::Unsupported("bool")));
    }
}
