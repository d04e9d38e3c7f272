//! Error value integration tests
//!
//! Identity-preserving wrap, argument classification, chain traversal and
//! the wire envelope, exercised through the public facade.

use qdiag::error::codes::{execution, plan, sequence, transaction};
use qdiag::{
    Cause, Envelope, EnvelopeOptions, QueryError, ResponseDiagnostics, ResultExt, SequenceError,
    Severity, error_args,
};
use serde_json::json;
use std::io;

fn store_read() -> Result<Vec<u8>, io::Error> {
    Err(io::Error::other("connection reset by peer"))
}

fn load_sequence() -> Result<u64, QueryError> {
    let _bytes = store_read().wrap_err(&execution::INTERNAL, "Error reading sequence state")?;
    Ok(0)
}

#[test]
fn test_wrap_preserves_existing_identity() {
    let original = SequenceError::Exhausted.error(error_args!["orders_seq"]);
    let wrapped = QueryError::plan(original.clone(), "Plan error");
    assert_eq!(wrapped, original);
    assert_eq!(wrapped.code(), sequence::EXHAUSTED.code);

    let twice = QueryError::transaction(QueryError::internal(original.clone(), "x"), "y");
    assert_eq!(twice, original);
}

#[test]
fn test_wrap_foreign_error() {
    let err = load_sequence().unwrap_err();
    assert_eq!(err.code(), execution::INTERNAL.code);
    assert_eq!(err.message(), "Error reading sequence state");
    match err.cause() {
        Some(Cause::Opaque(inner)) => assert_eq!(inner.to_string(), "connection reset by peer"),
        other => panic!("unexpected cause {:?}", other),
    }
}

#[test]
fn test_argument_classification() {
    let inner = QueryError::new(&transaction::COMMIT, "commit failed");
    let err = SequenceError::Create.error(error_args!["widgets", inner.clone(), None::<String>]);

    assert_eq!(err.message(), "Create failed for sequence 'widgets'");
    assert_eq!(err.cause().and_then(Cause::as_query_error), Some(&inner));
}

#[test]
fn test_unfilled_placeholder_renders_empty() {
    let err = SequenceError::NotFound.error(error_args![]);
    assert_eq!(err.message(), "Sequence '' not found");
}

#[test]
#[should_panic(expected = "unsupported error argument")]
fn test_unsupported_argument_panics() {
    let _ = SequenceError::InvalidCache.error(error_args![-6_i64]);
}

#[test]
fn test_chain_traversal() {
    let root = io::Error::other("disk full");
    let err = QueryError::new(&plan::PLAN, "planning failed")
        .with_cause(QueryError::internal(root, "write failed"));

    let codes: Vec<_> = err.chain().map(|e| e.code()).collect();
    assert_eq!(codes, vec![plan::PLAN.code, execution::INTERNAL.code]);

    assert_eq!(err.causes().count(), 2);
    assert_eq!(err.root_cause().map(|c| c.to_string()), Some("disk full".to_string()));
    assert_eq!(err.to_string(), "planning failed - cause: write failed - cause: disk full");
}

#[test]
fn test_envelope_round_trip() {
    let err = QueryError::new(&transaction::TRANSACTION, "Transaction failed")
        .with_cause(QueryError::new(&transaction::COMMIT, "commit failed"))
        .with_reason("txid", "7f3a");

    let envelope = err.to_envelope(&EnvelopeOptions::default());
    let text = envelope.to_json().unwrap();
    let decoded: Envelope = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, envelope);
    assert_eq!(decoded.classify(), Some(&transaction::TRANSACTION));

    let rebuilt = decoded.into_error();
    assert_eq!(rebuilt.code(), err.code());
    assert_eq!(rebuilt.key(), err.key());
    assert_eq!(rebuilt.message(), err.message());
    assert_eq!(rebuilt.reason(), err.reason());
    assert_eq!(
        rebuilt.chain().map(|e| e.code()).collect::<Vec<_>>(),
        err.chain().map(|e| e.code()).collect::<Vec<_>>()
    );
}

#[test]
fn test_envelope_omits_caller_by_default() {
    let err = QueryError::readonly("The server or request is read-only");
    let value = serde_json::to_value(err.to_envelope(&EnvelopeOptions::default())).unwrap();
    assert_eq!(
        value,
        json!({
            "_level": "exception",
            "code": 1000,
            "key": "service.io.readonly",
            "message": "The server or request is read-only"
        })
    );
}

#[test]
fn test_response_partitions_by_severity() {
    let mut diagnostics = ResponseDiagnostics::new(EnvelopeOptions::default());
    let warning = SequenceError::CacheSize.error(error_args!["2"]);
    let fatal = QueryError::memory_quota_exceeded();
    diagnostics.extend([&warning, &fatal]);

    assert!(diagnostics.has_errors());
    assert_eq!(diagnostics.errors.len(), 1);
    assert_eq!(diagnostics.warnings.len(), 1);
    assert_eq!(diagnostics.warnings[0].level, Severity::Warning);
}

#[test]
fn test_anyhow_round_trip_keeps_identity() {
    let original = QueryError::not_implemented("window frames");
    let through_anyhow: anyhow::Error = original.clone().into();
    let back: QueryError = through_anyhow.into();
    assert_eq!(back, original);
}
