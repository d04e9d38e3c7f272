//! From trait implementations and extension traits for QueryError conversions

use super::codes::ErrorDef;
use super::types::{QueryError, QueryResult};
use std::error::Error as StdError;

impl From<std::io::Error> for QueryError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        Self::internal(error, "I/O error")
    }
}

impl From<serde_json::Error> for QueryError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        Self::internal(error, "JSON processing error")
    }
}

impl From<anyhow::Error> for QueryError {
    #[track_caller]
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error, "Unexpected error")
    }
}

/// Extension trait for classifying errors in Results
pub trait ResultExt<T> {
    /// Wrap the error under `def`; a `QueryError` passes through unchanged
    fn wrap_err(self, def: &ErrorDef, message: impl Into<String>) -> QueryResult<T>;

    /// Wrap the error under `def`, building the message only on error
    fn wrap_err_with<M, F>(self, def: &ErrorDef, f: F) -> QueryResult<T>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Box<dyn StdError + Send + Sync>> + 'static,
{
    #[track_caller]
    fn wrap_err(self, def: &ErrorDef, message: impl Into<String>) -> QueryResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(QueryError::wrap(def, err, message)),
        }
    }

    #[track_caller]
    fn wrap_err_with<M, F>(self, def: &ErrorDef, f: F) -> QueryResult<T>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(QueryError::wrap(def, err, f())),
        }
    }
}

/// Extension trait for turning a missing value into a QueryError
pub trait OptionExt<T> {
    fn ok_or_query(self, def: &ErrorDef, message: impl Into<String>) -> QueryResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn ok_or_query(self, def: &ErrorDef, message: impl Into<String>) -> QueryResult<T> {
        match self {
            Some(value) => Ok(value),
            None => Err(QueryError::new(def, message)),
        }
    }
}
