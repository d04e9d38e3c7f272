//! Client-facing JSON envelope
//!
//! An error is serialized once, at the request boundary. Causes nest
//! recursively under `cause`; structured context travels under `reason`.
//! Retryability is not a wire field: clients match on `code` and `key`.
//!
//! A cause takes one of three disjoint shapes: a nested envelope (it alone
//! carries `_level`), `{"message": text}` for a foreign error, or
//! `{"context": {..}}` for structured context.

use super::caller::Caller;
use super::codes::{ErrorCode, ErrorDef};
use super::registry;
use super::severity::Severity;
use super::types::{Cause, QueryError, Retry};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::sync::Arc;
use thiserror::Error;

/// Serialization switches for the envelope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeOptions {
    /// Emit `caller`; keep off for untrusted clients
    #[serde(default)]
    pub include_caller: bool,
}

impl EnvelopeOptions {
    pub fn with_caller() -> Self {
        Self {
            include_caller: true,
        }
    }
}

/// Wire form of a single error or warning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "_level")]
    pub level: Severity,
    pub code: ErrorCode,
    pub key: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller: Option<Caller>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<Box<EnvelopeCause>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Map<String, Value>>,
}

/// Wire form of a cause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvelopeCause {
    Error(Envelope),
    Opaque(OpaqueCause),
    Context(ContextCause),
}

/// Text of a foreign error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpaqueCause {
    pub message: String,
}

/// Structured context standing in for a cause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextCause {
    pub context: Map<String, Value>,
}

// A foreign cause that only survived as text.
#[derive(Debug, Error)]
#[error("{0}")]
struct DecodedCause(String);

impl Envelope {
    /// The registered definition this envelope names, if `code` and `key`
    /// agree with the taxonomy
    pub fn classify(&self) -> Option<&'static ErrorDef> {
        registry::classify(self.code, &self.key)
    }

    pub fn is_fatal(&self) -> bool {
        self.level.is_fatal()
    }

    /// Rebuild an error value from its wire form
    pub fn into_error(self) -> QueryError {
        let key = match registry::classify(self.code, &self.key) {
            Some(def) => Cow::Borrowed(def.key),
            None => Cow::Owned(self.key),
        };
        QueryError {
            code: self.code,
            key,
            severity: self.level,
            message: self.message,
            cause: self.cause.map(|cause| cause.into_cause()),
            reason: self.reason,
            retry: Retry::Unset,
            user_caused: None,
            caller: self.caller,
        }
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to an indented JSON string
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl EnvelopeCause {
    fn into_cause(self) -> Cause {
        match self {
            EnvelopeCause::Error(envelope) => Cause::from(envelope.into_error()),
            EnvelopeCause::Opaque(opaque) => Cause::Opaque(Arc::new(DecodedCause(opaque.message))),
            EnvelopeCause::Context(cause) => Cause::Context(cause.context),
        }
    }
}

impl QueryError {
    /// Wire form of this error and its whole cause chain
    pub fn to_envelope(&self, options: &EnvelopeOptions) -> Envelope {
        Envelope {
            level: self.severity,
            code: self.code,
            key: self.key.to_string(),
            message: self.message.clone(),
            caller: if options.include_caller {
                self.caller.clone()
            } else {
                None
            },
            cause: self
                .cause
                .as_ref()
                .map(|cause| Box::new(cause.to_envelope(options))),
            reason: self.reason.clone(),
        }
    }
}

impl Cause {
    pub(crate) fn to_envelope(&self, options: &EnvelopeOptions) -> EnvelopeCause {
        match self {
            Cause::Error(err) => EnvelopeCause::Error(err.to_envelope(options)),
            Cause::Opaque(err) => EnvelopeCause::Opaque(OpaqueCause {
                message: err.to_string(),
            }),
            Cause::Context(map) => EnvelopeCause::Context(ContextCause {
                context: map.clone(),
            }),
        }
    }
}

/// Errors and warnings accompanying one response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseDiagnostics {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Envelope>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Envelope>,
    #[serde(skip)]
    options: EnvelopeOptions,
}

impl ResponseDiagnostics {
    pub fn new(options: EnvelopeOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// File `err` under `errors` when fatal, otherwise under `warnings`
    pub fn push(&mut self, err: &QueryError) {
        let envelope = err.to_envelope(&self.options);
        if err.is_fatal() {
            self.errors.push(envelope);
        } else {
            self.warnings.push(envelope);
        }
    }

    pub fn extend<'a>(&mut self, errs: impl IntoIterator<Item = &'a QueryError>) {
        for err in errs {
            self.push(err);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
