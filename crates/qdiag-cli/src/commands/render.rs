//! `qdiag render`

use super::parse_code;
use anyhow::{Context, Result};
use qdiag_core::error::{ErrorArg, registry};
use qdiag_core::{EnvelopeOptions, QueryError, SequenceError};

/// Print the envelope of a sample error for `code`
pub fn render(code: &str, args: &[String], options: &EnvelopeOptions) -> Result<()> {
    let err = build(code, args)?;
    let envelope = err.to_envelope(options);
    println!("{}", envelope.to_json_pretty()?);
    Ok(())
}

/// Sequence codes go through their message template; any other registered
/// code takes the arguments as its message
fn build(code: &str, args: &[String]) -> Result<QueryError> {
    let code = parse_code(code)?;
    let def = registry::lookup(code)
        .with_context(|| format!("code {} is not registered", code))?;

    let err = match SequenceError::from_code(code) {
        Some(kind) => kind.error(args.iter().map(ErrorArg::from)),
        None => QueryError::new(def, args.join(" ")),
    };
    Ok(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdiag_core::Severity;

    #[test]
    fn test_build_sequence_error() {
        let err = build("19101", &["orders_seq".to_string()]).unwrap();
        assert_eq!(err.message(), "Create failed for sequence 'orders_seq'");
        assert_eq!(err.key(), "datastore.sequence.create");
    }

    #[test]
    fn test_build_plain_error() {
        let err = build("4999", &["index".to_string(), "hint ignored".to_string()]).unwrap();
        assert_eq!(err.message(), "index hint ignored");
        assert_eq!(err.severity(), Severity::Warning);
    }

    #[test]
    fn test_build_unregistered() {
        assert!(build("15500", &[]).is_err());
    }

    #[test]
    fn test_caller_only_when_requested() {
        let err = build("19106", &["s".to_string()]).unwrap();
        assert!(err.to_envelope(&EnvelopeOptions::default()).caller.is_none());
        assert!(err.to_envelope(&EnvelopeOptions::with_caller()).caller.is_some());
    }
}
