//! Core error value and the traits every diagnostic implements

use super::caller::Caller;
use super::codes::{ErrorCode, Namespace};
use super::severity::Severity;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Result type alias for operations that fail with a [`QueryError`]
pub type QueryResult<T> = Result<T, QueryError>;

/// The shape every subsystem error presents to the request boundary.
///
/// - code(): stable numeric identifier
/// - key(): stable dotted identifier for the same condition
/// - severity(): fatal or advisory
/// - message(): fully interpolated text
pub trait Diagnostic: StdError + Send + Sync {
    /// Get the numeric error code
    fn code(&self) -> ErrorCode;

    /// Get the dotted symbolic key
    fn key(&self) -> &str;

    /// Get the severity level
    fn severity(&self) -> Severity;

    /// Get the human-readable message
    fn message(&self) -> &str;

    /// Check whether the condition ends the current operation
    fn is_fatal(&self) -> bool {
        self.severity().is_fatal()
    }

    /// Check if the client should retry
    fn is_retryable(&self) -> bool {
        false
    }

    /// Get the construction site, if captured
    fn caller(&self) -> Option<&Caller> {
        None
    }
}

/// Retry hint carried by an error value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Retry {
    #[default]
    Unset,
    Retryable,
    NotRetryable,
}

impl Retry {
    pub fn is_retryable(self) -> bool {
        matches!(self, Retry::Retryable)
    }

    pub fn is_set(self) -> bool {
        !matches!(self, Retry::Unset)
    }
}

impl From<bool> for Retry {
    fn from(retry: bool) -> Self {
        if retry {
            Retry::Retryable
        } else {
            Retry::NotRetryable
        }
    }
}

/// The single direct cause of an error value
#[derive(Debug, Clone)]
pub enum Cause {
    /// An already classified error
    Error(Box<QueryError>),
    /// A foreign error kept for its text and source chain
    Opaque(Arc<dyn StdError + Send + Sync>),
    /// Structured diagnostic context
    Context(Map<String, Value>),
}

impl Cause {
    /// Keep a foreign error as an opaque cause
    pub fn opaque<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Cause::Opaque(Arc::new(error))
    }

    /// The classified error, if this cause is one
    pub fn as_query_error(&self) -> Option<&QueryError> {
        match self {
            Cause::Error(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    /// The structured context, if this cause is one
    pub fn as_context(&self) -> Option<&Map<String, Value>> {
        match self {
            Cause::Context(map) => Some(map),
            _ => None,
        }
    }

    pub(crate) fn as_source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Cause::Error(err) => Some(err.as_ref() as &(dyn StdError + 'static)),
            Cause::Opaque(err) => Some(err.as_ref() as &(dyn StdError + 'static)),
            Cause::Context(_) => None,
        }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Error(err) => fmt::Display::fmt(err, f),
            Cause::Opaque(err) => fmt::Display::fmt(err, f),
            Cause::Context(map) => {
                let text = serde_json::to_string(map).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cause::Error(a), Cause::Error(b)) => a == b,
            (Cause::Opaque(a), Cause::Opaque(b)) => {
                Arc::ptr_eq(a, b) || a.to_string() == b.to_string()
            }
            (Cause::Context(a), Cause::Context(b)) => a == b,
            _ => false,
        }
    }
}

impl From<QueryError> for Cause {
    fn from(err: QueryError) -> Self {
        Cause::Error(Box::new(err))
    }
}

impl From<Map<String, Value>> for Cause {
    fn from(map: Map<String, Value>) -> Self {
        Cause::Context(map)
    }
}

impl From<Box<dyn StdError + Send + Sync>> for Cause {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        match err.downcast::<QueryError>() {
            Ok(query) => Cause::Error(query),
            Err(other) => Cause::Opaque(Arc::from(other)),
        }
    }
}

/// A classified, enrichable error raised anywhere in the engine.
///
/// Code, key and severity are fixed at construction. Enrichment (cause,
/// context, hints) consumes the value and returns the enriched one.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryError {
    pub(crate) code: ErrorCode,
    pub(crate) key: Cow<'static, str>,
    pub(crate) severity: Severity,
    pub(crate) message: String,
    pub(crate) cause: Option<Cause>,
    pub(crate) reason: Option<Map<String, Value>>,
    pub(crate) retry: Retry,
    pub(crate) user_caused: Option<bool>,
    pub(crate) caller: Option<Caller>,
}

impl QueryError {
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    pub fn reason(&self) -> Option<&Map<String, Value>> {
        self.reason.as_ref()
    }

    pub fn retry(&self) -> Retry {
        self.retry
    }

    pub fn user_caused(&self) -> Option<bool> {
        self.user_caused
    }

    pub fn caller(&self) -> Option<&Caller> {
        self.caller.as_ref()
    }

    pub fn is_fatal(&self) -> bool {
        self.severity.is_fatal()
    }

    pub fn is_retryable(&self) -> bool {
        self.retry.is_retryable()
    }

    /// Namespace whose range holds this code
    pub fn namespace(&self) -> Option<Namespace> {
        Namespace::of(self.code)
    }

    /// Drop the captured call site
    pub fn without_caller(mut self) -> Self {
        self.caller = None;
        self
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.cause, self.message.is_empty()) {
            (Some(cause), false) => write!(f, "{} - cause: {}", self.message, cause),
            (None, false) => f.write_str(&self.message),
            (Some(cause), true) => write!(f, "{}", cause),
            (None, true) => f.write_str("Unspecified error."),
        }
    }
}

impl StdError for QueryError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().and_then(Cause::as_source)
    }
}

impl Diagnostic for QueryError {
    fn code(&self) -> ErrorCode {
        self.code
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn is_retryable(&self) -> bool {
        self.retry.is_retryable()
    }

    fn caller(&self) -> Option<&Caller> {
        self.caller.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes::{execution, sequence};
    use serde_json::json;

    #[test]
    fn test_display_message_only() {
        let err = QueryError::new(&sequence::NOT_FOUND, "Sequence 'a' not found");
        assert_eq!(err.to_string(), "Sequence 'a' not found");
    }

    #[test]
    fn test_display_with_cause() {
        let io = std::io::Error::other("disk gone");
        let err =
            QueryError::new(&execution::INTERNAL, "write failed").with_cause(Cause::opaque(io));
        assert_eq!(err.to_string(), "write failed - cause: disk gone");
    }

    #[test]
    fn test_display_cause_without_message() {
        let inner = QueryError::new(&sequence::EXHAUSTED, "limit reached");
        let err = QueryError::new(&sequence::GENERIC, "").with_cause(inner);
        assert_eq!(err.to_string(), "limit reached");
    }

    #[test]
    fn test_display_unspecified() {
        let err = QueryError::new(&sequence::GENERIC, "");
        assert_eq!(err.to_string(), "Unspecified error.");
    }

    #[test]
    fn test_display_context_cause() {
        let mut map = Map::new();
        map.insert("limit".to_string(), json!(1000));
        let err = QueryError::new(&execution::INTERNAL, "boom").with_cause(Cause::Context(map));
        assert_eq!(err.to_string(), r#"boom - cause: {"limit":1000}"#);
    }

    #[test]
    fn test_source_follows_cause() {
        let inner = QueryError::new(&sequence::EXHAUSTED, "limit reached");
        let err = QueryError::new(&sequence::GENERIC, "outer").with_cause(inner);
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "limit reached");
        assert!(source.downcast_ref::<QueryError>().is_some());

        let bare = QueryError::new(&sequence::GENERIC, "outer");
        assert!(bare.source().is_none());
    }

    #[test]
    fn test_retry_tristate() {
        assert!(!Retry::Unset.is_retryable());
        assert!(!Retry::Unset.is_set());
        assert_eq!(Retry::from(true), Retry::Retryable);
        assert_eq!(Retry::from(false), Retry::NotRetryable);
        assert!(Retry::NotRetryable.is_set());
    }

    #[test]
    fn test_diagnostic_trait_object() {
        let err = QueryError::new(
            &sequence::CACHE_SIZE_WARNING,
            "Cache size (2) below recommended minimum",
        );
        let diag: &dyn Diagnostic = &err;
        assert_eq!(diag.code(), ErrorCode(19115));
        assert_eq!(diag.key(), "datastore.sequence.cache_size");
        assert!(!diag.is_fatal());
        assert!(diag.caller().is_some());
    }
}
