//! qdiag core library
//!
//! This crate provides the structured diagnostic-error model shared by every
//! subsystem of the query engine: the code taxonomy, the error value with its
//! wrap and chain rules, the client-facing envelope, and the documentation
//! catalog contract consumed by operator tooling.

pub mod catalog;
pub mod config;
pub mod error;
pub mod recovery;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogEntry, CatalogError, JsonCatalog, StaticCatalog, UserCaused};
pub use config::{ConfigError, ConfigLoader, DiagnosticsConfig};
pub use error::{
    Cause, Diagnostic, Envelope, EnvelopeOptions, ErrorArg, ErrorCode, ErrorDef, Namespace,
    QueryError, QueryResult, ResponseDiagnostics, ResultExt, Retry, SequenceError, Severity,
};
pub use recovery::{ErrorClass, classify_error};
