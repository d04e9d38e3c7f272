//! Structured diagnostic errors
//!
//! Every failure raised anywhere in the engine is a [`QueryError`]:
//! - code: a stable numeric identifier, partitioned into subsystem namespaces
//! - key: a stable dotted identifier for the same condition
//! - severity: fatal to the operation or advisory
//! - message: fully interpolated human-readable text
//! - cause / reason: the wrapped error and structured context
//!
//! Values are created at the point of detection, optionally enriched as they
//! cross layers, and serialized once at the request boundary.

mod args;
mod caller;
mod classifiers;
pub mod codes;
mod constructors;
mod context;
mod conversions;
mod envelope;
pub mod registry;
mod sequences;
mod severity;
mod types;
mod user_messages;

// Re-export all public types and traits
pub use args::{ErrorArg, family_error};
pub use caller::Caller;
pub use classifiers::Origin;
pub use codes::{ErrorCode, ErrorDef, Namespace};
pub use context::{Causes, Chain, DISPLACED_CAUSES};
pub use conversions::{OptionExt, ResultExt};
pub use envelope::{
    ContextCause, Envelope, EnvelopeCause, EnvelopeOptions, OpaqueCause, ResponseDiagnostics,
};
pub use registry::TaxonomyViolation;
pub use sequences::SequenceError;
pub use severity::{Severity, default_severity, overrides};
pub use types::{Cause, Diagnostic, QueryError, QueryResult, Retry};
pub use user_messages::{ErrorCategory, UserFriendlyError};
