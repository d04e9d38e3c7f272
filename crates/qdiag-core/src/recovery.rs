//! Recovery classification
//!
//! Maps an error's retry hint and severity onto a recovery class for the
//! request boundary. Nothing here retries; the caller decides.

use crate::error::{QueryError, Retry};
use serde::Serialize;

/// Error classification for recovery decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorClass {
    /// May succeed on retry
    Transient,
    /// Will not succeed on retry
    Permanent,
    /// Retryability was never stated, so not retryable
    Unknown,
}

/// Classify an error for recovery.
///
/// An unset hint on an advisory error is permanent: the request already
/// continued past it.
pub fn classify_error(error: &QueryError) -> ErrorClass {
    match error.retry() {
        Retry::Retryable => ErrorClass::Transient,
        Retry::NotRetryable => ErrorClass::Permanent,
        Retry::Unset if error.is_fatal() => ErrorClass::Unknown,
        Retry::Unset => ErrorClass::Permanent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceError;
    use crate::error::codes::{execution, sequence};
    use crate::error_args;
    use std::time::Duration;

    #[test]
    fn test_retry_hint_mapping() {
        assert_eq!(
            classify_error(&QueryError::timeout(Duration::from_secs(5))),
            ErrorClass::Transient
        );
        assert_eq!(
            classify_error(&QueryError::new(&execution::INTERNAL, "x").with_retry(false)),
            ErrorClass::Permanent
        );
        assert_eq!(
            classify_error(&QueryError::new(&sequence::EXHAUSTED, "x")),
            ErrorClass::Unknown
        );
    }

    #[test]
    fn test_advisory_without_hint_is_permanent() {
        let warning = SequenceError::CacheSize.error(error_args!["2"]);
        assert_eq!(classify_error(&warning), ErrorClass::Permanent);
    }

    #[test]
    fn test_unset_hint_is_not_transient() {
        let exhausted = SequenceError::Exhausted.error(error_args!["orders_seq"]);
        assert!(!exhausted.is_retryable());
        assert_ne!(classify_error(&exhausted), ErrorClass::Transient);

        let opted_in = exhausted.with_retry(true);
        assert_eq!(classify_error(&opted_in), ErrorClass::Transient);
    }
}
