//! User-friendly error messages
//!
//! Turns a [`QueryError`] plus its catalog entry into a readable summary with
//! suggested actions, for the operator CLI and admin tooling.

use super::classifiers::{Origin, classify_query_error};
use super::codes::ErrorCode;
use super::types::QueryError;
use crate::catalog::Catalog;

/// Error category for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Request handling and client parameters
    Request,
    /// Statement syntax and semantics
    Syntax,
    /// Query planning and prepared statements
    Planning,
    /// Operator and expression evaluation
    Execution,
    /// Datastore, keyspace and sequence access
    Datastore,
    /// Transaction protocol
    Transaction,
    /// Scheduled tasks and statement rewrite
    Scheduling,
    /// Schema inference
    Inference,
    /// Cluster and service configuration
    Configuration,
    /// Unexpected internal conditions
    Internal,
}

impl ErrorCategory {
    /// Get a user-friendly category name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Request => "Request Error",
            Self::Syntax => "Syntax Error",
            Self::Planning => "Planning Error",
            Self::Execution => "Execution Error",
            Self::Datastore => "Datastore Error",
            Self::Transaction => "Transaction Error",
            Self::Scheduling => "Scheduling Error",
            Self::Inference => "Inference Error",
            Self::Configuration => "Configuration Error",
            Self::Internal => "Internal Error",
        }
    }
}

/// User-friendly error information
#[derive(Debug, Clone)]
pub struct UserFriendlyError {
    pub category: ErrorCategory,
    pub origin: Origin,
    /// Short summary
    pub title: String,
    /// The error's own text
    pub message: String,
    /// Suggested actions
    pub suggestions: Vec<String>,
    /// Whether retrying may succeed
    pub is_recoverable: bool,
    pub code: Option<ErrorCode>,
    pub key: String,
}

impl UserFriendlyError {
    pub fn new(
        category: ErrorCategory,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            origin: Origin::Internal,
            title: title.into(),
            message: message.into(),
            suggestions: Vec::new(),
            is_recoverable: false,
            code: None,
            key: String::new(),
        }
    }

    /// Build from an error value, pulling actions from `catalog`
    pub fn from_error(err: &QueryError, catalog: &dyn Catalog) -> Self {
        let entry = catalog.describe(err.code());
        let (category, origin, title, suggestions) = classify_query_error(err, entry.as_ref());

        UserFriendlyError::new(category, title, err.to_string())
            .with_origin(origin)
            .with_suggestions(suggestions)
            .recoverable(err.is_retryable())
            .with_error_code(err.code(), err.key())
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions.extend(suggestions);
        self
    }

    pub fn recoverable(mut self, is_recoverable: bool) -> Self {
        self.is_recoverable = is_recoverable;
        self
    }

    pub fn with_error_code(mut self, code: ErrorCode, key: impl Into<String>) -> Self {
        self.code = Some(code);
        self.key = key.into();
        self
    }

    /// Format the error for display
    pub fn format_display(&self) -> String {
        let mut output = format!(
            "{}: {}\n\n{}",
            self.category.display_name(),
            self.title,
            self.message
        );

        if let Some(code) = self.code {
            output.push_str(&format!("\n\nCode: {} ({}), origin: {}", code, self.key, self.origin));
        }

        if self.is_recoverable {
            output.push_str("\nThis error is transient; the request may be retried.");
        }

        if !self.suggestions.is_empty() {
            output.push_str("\n\nSuggested actions:");
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("\n  {}. {}", i + 1, suggestion));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::error::codes::sequence;
    use std::time::Duration;

    #[test]
    fn test_from_error_with_catalog() {
        let err = QueryError::new(&sequence::EXHAUSTED, "Sequence 's' has reached its limit");
        let friendly = UserFriendlyError::from_error(&err, StaticCatalog::builtin());

        assert_eq!(friendly.category, ErrorCategory::Datastore);
        assert_eq!(friendly.title, "Sequence [name] has reached its limit");
        assert_eq!(friendly.code, Some(ErrorCode(19111)));
        assert_eq!(friendly.key, "datastore.sequence.exhausted");
        assert!(!friendly.is_recoverable);
        assert_eq!(friendly.suggestions, vec!["Alter the sequence range, or enable cycle."]);
    }

    #[test]
    fn test_timeout_is_recoverable() {
        let err = QueryError::timeout(Duration::from_millis(1500));
        let friendly = UserFriendlyError::from_error(&err, StaticCatalog::builtin());
        assert!(friendly.is_recoverable);
        assert!(friendly.format_display().contains("may be retried"));
    }

    #[test]
    fn test_format_display() {
        let friendly =
            UserFriendlyError::new(ErrorCategory::Syntax, "Bad statement", "syntax error")
                .with_suggestion("Fix the statement")
                .with_error_code(ErrorCode(3000), "parse.syntax_error");
        let text = friendly.format_display();
        assert!(text.starts_with("Syntax Error: Bad statement\n\nsyntax error"));
        assert!(text.contains("Code: 3000 (parse.syntax_error), origin: internal"));
        assert!(text.contains("\n  1. Fix the statement"));
    }
}
