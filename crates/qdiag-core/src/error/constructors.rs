//! Constructor methods for QueryError

use super::caller::Caller;
use super::codes::{
    ErrorCode, ErrorDef, execution, inference, parse, plan, scheduler, service, transaction,
};
use super::registry;
use super::severity::{Severity, default_severity};
use super::types::{Cause, QueryError, Retry};
use serde_json::{Map, Value};
use std::any::Any;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

impl QueryError {
    /// Create an error for `def` with its default severity
    #[track_caller]
    pub fn new(def: &ErrorDef, message: impl Into<String>) -> Self {
        Self::with_severity(def, default_severity(def.code), message)
    }

    /// Create an error for `def` with an explicit severity.
    ///
    /// Every definition-based constructor lands here, so an unregistered
    /// `def` trips the same debug assertion as [`QueryError::from_parts`].
    #[track_caller]
    pub fn with_severity(def: &ErrorDef, severity: Severity, message: impl Into<String>) -> Self {
        debug_assert!(
            registry::is_registered(def.code, def.key),
            "unregistered error code {} ({})",
            def.code,
            def.key
        );
        Self {
            code: def.code,
            key: Cow::Borrowed(def.key),
            severity,
            message: message.into(),
            cause: None,
            reason: None,
            retry: Retry::Unset,
            user_caused: None,
            caller: Some(Caller::capture()),
        }
    }

    /// Create an error from a raw `(code, key)` pair.
    ///
    /// The pair must be registered; an unknown pair is a programming error
    /// and trips a debug assertion.
    #[track_caller]
    pub fn from_parts(
        code: ErrorCode,
        key: &'static str,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        debug_assert!(
            registry::is_registered(code, key),
            "unregistered error code {} ({})",
            code,
            key
        );
        Self {
            code,
            key: Cow::Borrowed(key),
            severity,
            message: message.into(),
            cause: None,
            reason: None,
            retry: Retry::Unset,
            user_caused: None,
            caller: Some(Caller::capture()),
        }
    }

    /// Wrap a lower-level error under `def`.
    ///
    /// An error that already is a `QueryError` comes back unchanged, including
    /// one travelling inside an `anyhow::Error`. Anything else becomes the
    /// opaque cause of a new value described by `def`.
    #[track_caller]
    pub fn wrap<E>(def: &ErrorDef, err: E, message: impl Into<String>) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>> + 'static,
    {
        match classified(err) {
            Ok(existing) => existing,
            Err(foreign) => {
                let mut wrapped = Self::new(def, message);
                wrapped.cause = Some(Cause::Opaque(Arc::from(foreign)));
                wrapped
            }
        }
    }

    // Wrapping families

    /// Internal error (5000)
    #[track_caller]
    pub fn internal<E>(err: E, message: impl Into<String>) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>> + 'static,
    {
        Self::wrap(&execution::INTERNAL, err, message)
    }

    /// Syntax error while parsing (3000)
    #[track_caller]
    pub fn parse_syntax<E>(err: E, message: impl Into<String>) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>> + 'static,
    {
        Self::wrap(&parse::SYNTAX, err, message)
    }

    /// Semantic check failure (3100)
    #[track_caller]
    pub fn semantics<E>(err: E, message: impl Into<String>) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>> + 'static,
    {
        Self::wrap(&parse::SEMANTICS, err, message)
    }

    /// Planner failure (4000)
    #[track_caller]
    pub fn plan<E>(err: E, message: impl Into<String>) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>> + 'static,
    {
        Self::wrap(&plan::PLAN, err, message)
    }

    /// Statement rewrite failure (6500)
    #[track_caller]
    pub fn rewrite<E>(err: E, message: impl Into<String>) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>> + 'static,
    {
        Self::wrap(&scheduler::REWRITE, err, message)
    }

    /// Transaction failure (17099)
    #[track_caller]
    pub fn transaction<E>(err: E, message: impl Into<String>) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>> + 'static,
    {
        Self::wrap(&transaction::TRANSACTION, err, message)
    }

    // Direct constructors

    /// Request exceeded its timeout; clients may retry
    #[track_caller]
    pub fn timeout(timeout: Duration) -> Self {
        let mut err = Self::new(
            &service::TIMEOUT,
            format!("Timeout {:?} exceeded", timeout),
        );
        err.retry = Retry::Retryable;
        err
    }

    /// Write attempted against a read-only server or request
    #[track_caller]
    pub fn readonly(message: impl Into<String>) -> Self {
        Self::new(&service::READONLY, message)
    }

    #[track_caller]
    pub fn not_implemented(feature: impl AsRef<str>) -> Self {
        Self::new(
            &service::NOT_IMPLEMENTED,
            format!("Not yet implemented: {}", feature.as_ref()),
        )
    }

    /// Inference stopped at its time limit; the schema may be incomplete
    #[track_caller]
    pub fn infer_timeout(seconds: u32) -> Self {
        let mut context = Map::new();
        context.insert("infer_timeout".to_string(), Value::from(seconds));
        let mut err = Self::new(
            &inference::TIMEOUT,
            "Stopped after exceeding infer_timeout. Schema may be incomplete.",
        );
        err.cause = Some(Cause::Context(context));
        err
    }

    /// Inference stopped at its size limit; the schema may be incomplete
    #[track_caller]
    pub fn infer_size_limit(max_schema_mb: u32) -> Self {
        let mut context = Map::new();
        context.insert("max_schema_MB".to_string(), Value::from(max_schema_mb));
        let mut err = Self::new(
            &inference::SIZE_LIMIT,
            "Stopped after exceeding max_schema_MB. Schema may be incomplete.",
        );
        err.cause = Some(Cause::Context(context));
        err
    }

    #[track_caller]
    pub fn memory_quota_exceeded() -> Self {
        Self::new(
            &execution::MEMORY_QUOTA_EXCEEDED,
            "Request has exceeded memory quota",
        )
        .with_user_caused(true)
    }
}

/// Split a wrap argument into an existing `QueryError` or a boxed foreign error.
///
/// `anyhow::Error` boxes to its private wrapper type, which never downcasts
/// back to `QueryError`, so it is unpacked through `anyhow`'s own downcast.
fn classified<E>(err: E) -> Result<QueryError, Box<dyn StdError + Send + Sync>>
where
    E: Into<Box<dyn StdError + Send + Sync>> + 'static,
{
    let mut slot = Some(err);
    if let Some(carried) = (&mut slot as &mut dyn Any)
        .downcast_mut::<Option<anyhow::Error>>()
        .and_then(Option::take)
    {
        return carried.downcast::<QueryError>().map_err(Into::into);
    }
    match slot.map(Into::<Box<dyn StdError + Send + Sync>>::into) {
        Some(boxed) => boxed.downcast::<QueryError>().map(|existing| *existing),
        // only the anyhow branch above empties the slot
        None => Err("missing wrapped error".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes::sequence;

    #[test]
    fn test_new_uses_default_severity() {
        let fatal = QueryError::new(&sequence::EXHAUSTED, "Sequence 's' has reached its limit");
        assert_eq!(fatal.severity(), Severity::Exception);
        assert!(fatal.is_fatal());

        let advisory = QueryError::new(
            &sequence::CACHE_SIZE_WARNING,
            "Cache size (1) below recommended minimum",
        );
        assert_eq!(advisory.severity(), Severity::Warning);
    }

    #[test]
    fn test_with_severity_overrides_default() {
        let err = QueryError::with_severity(&sequence::EXHAUSTED, Severity::Notice, "noted");
        assert_eq!(err.severity(), Severity::Notice);
        assert_eq!(err.code(), sequence::EXHAUSTED.code);
    }

    #[test]
    fn test_caller_points_at_call_site() {
        let err = QueryError::new(&sequence::GENERIC, "x");
        let caller = err.caller().unwrap();
        assert_eq!(caller.file(), "constructors");
    }

    #[test]
    fn test_from_parts_registered() {
        let err = QueryError::from_parts(
            ErrorCode(3000),
            "parse.syntax_error",
            Severity::Exception,
            "bad token",
        );
        assert_eq!(err.key(), "parse.syntax_error");
    }

    #[test]
    #[should_panic(expected = "unregistered error code")]
    #[cfg(debug_assertions)]
    fn test_from_parts_unregistered_panics() {
        let _ = QueryError::from_parts(ErrorCode(42), "no.such", Severity::Exception, "x");
    }

    #[test]
    #[should_panic(expected = "unregistered error code")]
    #[cfg(debug_assertions)]
    fn test_new_with_unregistered_def_panics() {
        use crate::error::codes::Namespace;
        let bogus = ErrorDef::new(Namespace::Sequence, 19199, "datastore.sequence.bogus");
        let _ = QueryError::new(&bogus, "x");
    }

    #[test]
    #[should_panic(expected = "unregistered error code")]
    #[cfg(debug_assertions)]
    fn test_wrap_with_out_of_range_def_panics() {
        use crate::error::codes::Namespace;
        let stray = ErrorDef::new(Namespace::Plan, 42, "plan.stray");
        let _ = QueryError::wrap(&stray, "lost connection", "x");
    }

    #[test]
    fn test_wrap_foreign_error() {
        let io = std::io::Error::other("connection reset");
        let err = QueryError::wrap(&parse::SYNTAX, io, "syntax error while parsing");
        assert_eq!(err.code(), parse::SYNTAX.code);
        assert_eq!(err.message(), "syntax error while parsing");
        assert_eq!(err.to_string(), "syntax error while parsing - cause: connection reset");
        assert!(matches!(err.cause(), Some(Cause::Opaque(_))));
    }

    #[test]
    fn test_wrap_preserves_identity() {
        let original = QueryError::new(&sequence::NOT_FOUND, "Sequence 'x' not found")
            .with_reason("bucket", "default");
        let wrapped = QueryError::rewrite(original.clone(), "rewrite failed");
        assert_eq!(wrapped, original);

        let twice = QueryError::internal(QueryError::plan(wrapped, "a"), "b");
        assert_eq!(twice, original);
    }

    #[test]
    fn test_wrap_accepts_plain_strings() {
        let err = QueryError::transaction("lost connection", "commit failed");
        assert_eq!(err.code(), transaction::TRANSACTION.code);
        assert_eq!(err.to_string(), "commit failed - cause: lost connection");
    }

    #[test]
    fn test_timeout_is_retryable() {
        let err = QueryError::timeout(Duration::from_secs(2));
        assert!(err.is_retryable());
        assert_eq!(err.message(), "Timeout 2s exceeded");
        assert_eq!(err.key(), "service.io.request.timeout");
    }

    #[test]
    fn test_infer_timeout_is_warning_with_context() {
        let err = QueryError::infer_timeout(60);
        assert!(!err.is_fatal());
        let context = err.cause().and_then(Cause::as_context).unwrap();
        assert_eq!(context.get("infer_timeout"), Some(&Value::from(60)));
    }

    #[test]
    fn test_memory_quota_is_user_caused() {
        let err = QueryError::memory_quota_exceeded();
        assert_eq!(err.user_caused(), Some(true));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_not_implemented_message() {
        let err = QueryError::not_implemented("window frames");
        assert_eq!(err.message(), "Not yet implemented: window frames");
    }
}
