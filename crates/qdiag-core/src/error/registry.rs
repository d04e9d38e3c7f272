//! Frozen taxonomy index
//!
//! The registry is built once from [`TAXONOMY`] on first use and only read
//! afterwards. Verification is a property of the codebase: it runs in tests
//! and as a debug assertion during initialization.

use super::codes::{
    ErrorCode, ErrorDef, Namespace, admin, datastore, dictionary, execution, inference, parse,
    plan, scheduler, seqscan, sequence, service, shell, transaction, virtual_keyspace,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

/// Every registered error definition
pub static TAXONOMY: &[&ErrorDef] = &[
    // shell
    &shell::CONNECTION_REFUSED,
    &shell::UNSUPPORTED_PROTOCOL,
    &shell::NO_SUCH_HOST,
    &shell::NO_CONNECTION,
    &shell::INVALID_URL,
    &shell::FILE_OPEN,
    &shell::FILE_CLOSE,
    &shell::NO_SUCH_COMMAND,
    &shell::OPERATION_TIMEOUT,
    &shell::UNKNOWN,
    // service
    &service::READONLY,
    &service::HTTP_UNSUPPORTED_METHOD,
    &service::NOT_IMPLEMENTED,
    &service::UNRECOGNIZED_VALUE,
    &service::BAD_VALUE,
    &service::MISSING_VALUE,
    &service::MULTIPLE_VALUES,
    &service::UNRECOGNIZED_PARAMETER,
    &service::TYPE_MISMATCH,
    &service::TIMEOUT,
    &service::INVALID_VALUE,
    &service::INVALID_JSON,
    &service::CLIENT_ID,
    &service::MEDIA_TYPE,
    &service::SHUTTING_DOWN,
    &service::SHUT_DOWN,
    &service::UNAVAILABLE,
    &service::REQUEST_ERROR_LIMIT,
    &service::REQUEST_QUEUE_FULL,
    // admin
    &admin::CONNECTION,
    &admin::INVALID_URL,
    &admin::DECODING,
    &admin::ENCODING,
    &admin::UNKNOWN_SETTING,
    &admin::SETTING_TYPE,
    &admin::GET_CLUSTER,
    &admin::NO_SUCH_NODE,
    &admin::AUTH,
    &admin::ENDPOINT,
    &admin::SSL_NOT_ENABLED,
    // parse
    &parse::SYNTAX,
    &parse::INVALID_ESCAPE_SEQUENCE,
    &parse::MISSING_CLOSING_QUOTE,
    &parse::SEMANTICS,
    &parse::JOIN_NEST_NO_JOIN_HINT,
    &parse::MERGE_MISSING_SOURCE,
    &parse::WINDOW_SEMANTIC,
    &parse::ENTERPRISE_FEATURE,
    // plan
    &plan::PLAN,
    &plan::REPREPARE,
    &plan::NO_TERM_NAME,
    &plan::DUPLICATE_ALIAS,
    &plan::SUBQUERY_MISSING_KEYS,
    &plan::NO_SUCH_PREPARED,
    &plan::UNRECOGNIZED_PREPARED,
    &plan::PREPARED_DECODING,
    &plan::NOT_GROUP_KEY_OR_AGG,
    &plan::INDEX_ALREADY_EXISTS,
    &plan::INTERNAL,
    &plan::GSI_TRANSIENT,
    &plan::CBO,
    &plan::INDEX_STAT,
    &plan::GENERIC_WARNING,
    // execution
    &execution::INTERNAL,
    &execution::PANIC,
    &execution::PARAMETER,
    &execution::STATEMENT_STOPPED,
    &execution::EVALUATION,
    &execution::GROUP_UPDATE,
    &execution::DATE_WARNING,
    &execution::INVALID_VALUE,
    &execution::DIVIDE_BY_ZERO,
    &execution::DUPLICATE_FINAL_GROUP,
    &execution::INSERT_KEY,
    &execution::UPSERT_KEY,
    &execution::MISSING_DELETE_ALIAS,
    &execution::UPDATE_MISSING_CLONE,
    &execution::MEMORY_QUOTA_EXCEEDED,
    // scheduler
    &scheduler::SCHEDULER,
    &scheduler::DUPLICATE_TASK,
    &scheduler::TASK_RUNNING,
    &scheduler::TASK_NOT_FOUND,
    &scheduler::REWRITE,
    // inference
    &inference::INVALID_OPTION,
    &inference::OPTION_NOT_NUMERIC,
    &inference::NO_KEYSPACE_DOCUMENTS,
    &inference::NO_SUITABLE_PRIMARY_INDEX,
    &inference::NO_SUITABLE_SECONDARY_INDEX,
    &inference::TIMEOUT,
    &inference::SIZE_LIMIT,
    &inference::NO_DOCUMENTS,
    &inference::CONNECT,
    &inference::INDEX_WARNING,
    // datastore
    &datastore::AUTHORIZATION,
    &datastore::FUNCTION_MISSING,
    &datastore::FUNCTION_DUPLICATE,
    &datastore::FUNCTION_EXECUTION,
    &datastore::SYSTEM_GENERIC,
    &datastore::SYSTEM_KEYSPACE_NOT_FOUND,
    &datastore::CONNECTION,
    &datastore::NAMESPACE_NOT_FOUND,
    &datastore::KEYSPACE_NOT_FOUND,
    &datastore::BULK_GET,
    &datastore::DML,
    &datastore::INDEX_SCAN_TIMEOUT,
    &datastore::INDEX_NOT_FOUND,
    &datastore::WITH_INVALID_OPTION,
    &datastore::WITH_INVALID_VALUE,
    &datastore::INSUFFICIENT_CREDENTIALS,
    // sequential scan
    &seqscan::INDEX_NOT_FOUND,
    &seqscan::NOT_SUPPORTED,
    &seqscan::CONTINUE,
    &seqscan::CREATE,
    &seqscan::TIMEOUT,
    &seqscan::FAILED,
    // transaction
    &transaction::DATASTORE_NOT_SUPPORTED,
    &transaction::STATEMENT_NOT_SUPPORTED,
    &transaction::FUNCTION_NOT_SUPPORTED,
    &transaction::CONTEXT,
    &transaction::OUT_OF_ORDER,
    &transaction::START,
    &transaction::COMMIT,
    &transaction::ROLLBACK,
    &transaction::EXPIRED,
    &transaction::RELEASED,
    &transaction::DUPLICATE_KEY,
    &transaction::QUEUE_FULL,
    &transaction::MEMORY_ALLOCATION,
    &transaction::TRANSACTION,
    // dictionary
    &dictionary::INTERNAL,
    &dictionary::SYSTEM_COLLECTION,
    &dictionary::ENCODING,
    &dictionary::KEYSPACE_MISMATCH,
    // virtual keyspace
    &virtual_keyspace::NOT_SUPPORTED,
    &virtual_keyspace::NOT_IMPLEMENTED,
    &virtual_keyspace::INDEX_NOT_FOUND,
    &virtual_keyspace::SCOPE_NOT_FOUND,
    &virtual_keyspace::KEYSPACE_NOT_FOUND,
    // sequence
    &sequence::NOT_ENABLED,
    &sequence::CREATE,
    &sequence::ALTER,
    &sequence::DROP,
    &sequence::INVALID_RANGE,
    &sequence::INVALID_CACHE,
    &sequence::NOT_FOUND,
    &sequence::GENERIC,
    &sequence::ALREADY_EXISTS,
    &sequence::METAKV,
    &sequence::INVALID_DATA,
    &sequence::EXHAUSTED,
    &sequence::CYCLE,
    &sequence::INVALID_NAME,
    &sequence::READ_ONLY_REQUEST,
    &sequence::CACHE_SIZE_WARNING,
    &sequence::NAME_PARTS,
    &sequence::DROP_ALL,
    &sequence::NO_PREV_VALUE_WARNING,
];

/// A broken taxonomy rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyViolation {
    #[error("code {code} is registered twice ({first} and {second})")]
    DuplicateCode {
        code: ErrorCode,
        first: &'static str,
        second: &'static str,
    },

    #[error("key '{key}' is registered for both {first} and {second}")]
    DuplicateKey {
        key: &'static str,
        first: ErrorCode,
        second: ErrorCode,
    },

    #[error("code {code} has an empty key")]
    EmptyKey { code: ErrorCode },

    #[error("code {code} ({key}) lies outside the {namespace} range {lo}-{hi}")]
    OutOfRange {
        code: ErrorCode,
        key: &'static str,
        namespace: Namespace,
        lo: u32,
        hi: u32,
    },
}

struct Registry {
    by_code: HashMap<ErrorCode, &'static ErrorDef>,
    by_key: HashMap<&'static str, &'static ErrorDef>,
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    debug_assert!(
        verify(TAXONOMY).is_ok(),
        "error taxonomy is inconsistent: {:?}",
        verify(TAXONOMY).err()
    );

    let mut by_code = HashMap::with_capacity(TAXONOMY.len());
    let mut by_key = HashMap::with_capacity(TAXONOMY.len());
    for def in TAXONOMY.iter().copied() {
        by_code.entry(def.code).or_insert(def);
        by_key.entry(def.key).or_insert(def);
    }

    tracing::debug!(codes = by_code.len(), "error taxonomy initialized");
    Registry { by_code, by_key }
});

/// Check uniqueness of codes and keys and range containment for `defs`.
///
/// Every violation is reported, not just the first.
pub fn verify(defs: &[&'static ErrorDef]) -> Result<(), Vec<TaxonomyViolation>> {
    let mut violations = Vec::new();
    let mut codes: HashMap<ErrorCode, &'static str> = HashMap::new();
    let mut keys: HashMap<&'static str, ErrorCode> = HashMap::new();

    for def in defs.iter().copied() {
        if def.key.trim().is_empty() {
            violations.push(TaxonomyViolation::EmptyKey { code: def.code });
        }

        if !def.namespace.contains(def.code) {
            let (lo, hi) = def.namespace.bounds();
            violations.push(TaxonomyViolation::OutOfRange {
                code: def.code,
                key: def.key,
                namespace: def.namespace,
                lo,
                hi,
            });
        }

        if let Some(first) = codes.insert(def.code, def.key) {
            violations.push(TaxonomyViolation::DuplicateCode {
                code: def.code,
                first,
                second: def.key,
            });
        }

        if !def.key.is_empty() {
            if let Some(first) = keys.insert(def.key, def.code) {
                violations.push(TaxonomyViolation::DuplicateKey {
                    key: def.key,
                    first,
                    second: def.code,
                });
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Find the definition registered for `code`
pub fn lookup(code: ErrorCode) -> Option<&'static ErrorDef> {
    REGISTRY.by_code.get(&code).copied()
}

/// Find the definition registered for `key`
pub fn lookup_key(key: &str) -> Option<&'static ErrorDef> {
    REGISTRY.by_key.get(key).copied()
}

/// Resolve a `(code, key)` pair; both halves must name the same definition.
pub fn classify(code: ErrorCode, key: &str) -> Option<&'static ErrorDef> {
    lookup(code).filter(|def| def.key == key)
}

/// Whether `(code, key)` is a registered pair
pub fn is_registered(code: ErrorCode, key: &str) -> bool {
    classify(code, key).is_some()
}

/// Registered definitions in one namespace, in ascending code order
pub fn iter_namespace(namespace: Namespace) -> impl Iterator<Item = &'static ErrorDef> {
    let mut defs: Vec<&'static ErrorDef> = TAXONOMY
        .iter()
        .copied()
        .filter(|def| def.namespace == namespace)
        .collect();
    defs.sort_by_key(|def| def.code);
    defs.into_iter()
}

/// All registered definitions in ascending code order
pub fn all() -> Vec<&'static ErrorDef> {
    let mut defs: Vec<&'static ErrorDef> = TAXONOMY.to_vec();
    defs.sort_by_key(|def| def.code);
    defs
}
