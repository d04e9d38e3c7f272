//! Origin and category classification for operator and user display

use super::codes::Namespace;
use super::types::QueryError;
use super::user_messages::ErrorCategory;
use crate::catalog::{Catalog, CatalogEntry, UserCaused};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who has to act on an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// The caller must correct its input
    User,
    /// A defect or unexpected condition inside the engine
    Internal,
    /// A dependency (datastore, cluster, network) failed
    External,
}

impl Origin {
    /// Classify `err` from its user-caused hint, the catalog, and its namespace
    pub fn of(err: &QueryError, catalog: &dyn Catalog) -> Self {
        classify_origin(err, catalog.describe(err.code()).as_ref())
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Origin::User => "user",
            Origin::Internal => "internal",
            Origin::External => "external",
        })
    }
}

pub(super) fn classify_origin(err: &QueryError, entry: Option<&CatalogEntry>) -> Origin {
    let user = err
        .user_caused()
        .unwrap_or_else(|| entry.is_some_and(|e| e.is_user == UserCaused::Yes));
    if user {
        return Origin::User;
    }

    match err.namespace() {
        Some(Namespace::Datastore | Namespace::SequentialScan | Namespace::Admin) => {
            Origin::External
        }
        _ if err.is_retryable() => Origin::External,
        _ => Origin::Internal,
    }
}

pub(super) fn classify_category(err: &QueryError) -> ErrorCategory {
    match err.namespace() {
        Some(Namespace::Shell | Namespace::Service) => ErrorCategory::Request,
        Some(Namespace::Admin) => ErrorCategory::Configuration,
        Some(Namespace::Parse) => ErrorCategory::Syntax,
        Some(Namespace::Plan) => ErrorCategory::Planning,
        Some(Namespace::Execution) if err.code().get() == 5000 => ErrorCategory::Internal,
        Some(Namespace::Execution) => ErrorCategory::Execution,
        Some(Namespace::Scheduler) => ErrorCategory::Scheduling,
        Some(Namespace::Inference) => ErrorCategory::Inference,
        Some(
            Namespace::Datastore
            | Namespace::SequentialScan
            | Namespace::Dictionary
            | Namespace::VirtualKeyspace
            | Namespace::Sequence,
        ) => ErrorCategory::Datastore,
        Some(Namespace::Transaction) => ErrorCategory::Transaction,
        None => ErrorCategory::Internal,
    }
}

/// Classify an error into (category, origin, title, suggestions)
pub(super) fn classify_query_error(
    err: &QueryError,
    entry: Option<&CatalogEntry>,
) -> (ErrorCategory, Origin, String, Vec<String>) {
    let category = classify_category(err);
    let origin = classify_origin(err, entry);

    let title = match entry {
        Some(entry) if !entry.description.is_empty() => entry.description.clone(),
        _ => format!("{} ({})", category.display_name(), err.key()),
    };

    let mut suggestions: Vec<String> = entry
        .map(|e| {
            e.actions
                .iter()
                .flat_map(|a| a.lines())
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    if suggestions.is_empty() {
        suggestions = match origin {
            _ if err.is_retryable() => vec!["Retry the request".to_string()],
            Origin::User => vec![
                "Check the statement and its parameters".to_string(),
                format!("Run 'qdiag describe {}' for details", err.code()),
            ],
            Origin::External => vec![
                "Check the health of the datastore and cluster nodes".to_string(),
                "Retry once the dependency is available".to_string(),
            ],
            Origin::Internal => vec![
                "Contact support with the request and the server log".to_string(),
            ],
        };
    }

    (category, origin, title, suggestions)
}
