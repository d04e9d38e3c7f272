//! Enrichment and cause-chain traversal for QueryError

use super::envelope::EnvelopeOptions;
use super::types::{Cause, QueryError, Retry};
use serde_json::{Map, Value};

/// Reason entry holding causes displaced by [`QueryError::with_cause`]
pub const DISPLACED_CAUSES: &str = "displaced_causes";

impl QueryError {
    /// Attach the direct cause.
    ///
    /// The last cause set wins and the displaced one is never dropped. It
    /// moves beneath the innermost classified error of the new cause when
    /// that error has no cause yet. Otherwise displaced context merges into
    /// `reason`, and anything else is appended in wire form to the
    /// [`DISPLACED_CAUSES`] reason entry.
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        let mut cause = cause.into();
        if let Some(displaced) = self.cause.take() {
            let tail = match &mut cause {
                Cause::Error(inner) => inner.open_tail(),
                _ => None,
            };
            match tail {
                Some(tail) => tail.cause = Some(displaced),
                None => self.keep_displaced(displaced),
            }
        }
        self.cause = Some(cause);
        self
    }

    // Innermost classified error of the chain, if its cause slot is free.
    fn open_tail(&mut self) -> Option<&mut QueryError> {
        if self.cause.is_none() {
            return Some(self);
        }
        match &mut self.cause {
            Some(Cause::Error(inner)) => inner.open_tail(),
            _ => None,
        }
    }

    fn keep_displaced(&mut self, displaced: Cause) {
        let reason = self.reason.get_or_insert_with(Map::new);
        match displaced {
            Cause::Context(context) if context.keys().all(|key| !reason.contains_key(key)) => {
                reason.extend(context);
            }
            other => {
                let wire = serde_json::to_value(other.to_envelope(&EnvelopeOptions::default()))
                    .unwrap_or_else(|_| Value::String(other.to_string()));
                match reason
                    .entry(DISPLACED_CAUSES)
                    .or_insert_with(|| Value::Array(Vec::new()))
                {
                    Value::Array(list) => list.push(wire),
                    slot => {
                        let previous = slot.take();
                        *slot = Value::Array(vec![previous, wire]);
                    }
                }
            }
        }
    }

    /// Merge structured context; later keys overwrite earlier ones
    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.reason.get_or_insert_with(Map::new).extend(context);
        self
    }

    /// Add a single context entry
    pub fn with_reason(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.reason
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_retry(mut self, retry: bool) -> Self {
        self.retry = Retry::from(retry);
        self
    }

    pub fn with_user_caused(mut self, user_caused: bool) -> Self {
        self.user_caused = Some(user_caused);
        self
    }

    /// Classified errors from this one inward
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self),
        }
    }

    /// Every cause from the outermost inward
    pub fn causes(&self) -> Causes<'_> {
        Causes {
            next: self.cause.as_ref(),
        }
    }

    /// The innermost cause, if any
    pub fn root_cause(&self) -> Option<&Cause> {
        self.causes().last()
    }
}

/// Iterator over the classified errors of a cause chain
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a QueryError>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a QueryError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause.as_ref().and_then(Cause::as_query_error);
        Some(current)
    }
}

/// Iterator over every cause of a chain
#[derive(Debug, Clone)]
pub struct Causes<'a> {
    next: Option<&'a Cause>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a Cause;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current
            .as_query_error()
            .and_then(|err| err.cause.as_ref());
        Some(current)
    }
}
