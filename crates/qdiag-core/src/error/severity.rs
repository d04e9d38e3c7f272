//! Severity levels and per-code defaults

use super::codes::{ErrorCode, ErrorDef, execution, inference, plan, sequence, transaction};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// How serious a condition is for the operation that raised it.
///
/// Only [`Severity::Exception`] is fatal; every other level is advisory and
/// travels in the response's `warnings` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Exception,
    Warning,
    Notice,
    Info,
    Log,
    Debug,
}

impl Severity {
    /// Whether the condition ends the current operation
    pub fn is_fatal(self) -> bool {
        matches!(self, Severity::Exception)
    }

    /// Wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Exception => "exception",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Log => "log",
            Severity::Debug => "debug",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exception" | "error" => Ok(Severity::Exception),
            "warning" | "warn" => Ok(Severity::Warning),
            "notice" => Ok(Severity::Notice),
            "info" => Ok(Severity::Info),
            "log" => Ok(Severity::Log),
            "debug" => Ok(Severity::Debug),
            other => Err(format!("unknown severity '{}'", other)),
        }
    }
}

// Codes that are advisory unless a call site says otherwise.
static OVERRIDES: Lazy<HashMap<ErrorCode, Severity>> = Lazy::new(|| {
    let warnings: [&ErrorDef; 9] = [
        &plan::GENERIC_WARNING,
        &plan::GSI_TRANSIENT,
        &execution::DATE_WARNING,
        &execution::DIVIDE_BY_ZERO,
        &inference::TIMEOUT,
        &inference::SIZE_LIMIT,
        &inference::INDEX_WARNING,
        &sequence::CACHE_SIZE_WARNING,
        &sequence::NO_PREV_VALUE_WARNING,
    ];
    warnings
        .into_iter()
        .map(|def| (def.code, Severity::Warning))
        .collect()
});

/// Default severity for `code`: the override if one exists, otherwise
/// [`Severity::Exception`].
pub fn default_severity(code: ErrorCode) -> Severity {
    OVERRIDES.get(&code).copied().unwrap_or_default()
}

/// Codes with a non-default severity, in ascending order
pub fn overrides() -> Vec<(ErrorCode, Severity)> {
    let mut entries: Vec<_> = OVERRIDES.iter().map(|(c, s)| (*c, *s)).collect();
    entries.sort();
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::registry::TAXONOMY;

    #[test]
    fn test_default_is_exception() {
        assert_eq!(default_severity(sequence::EXHAUSTED.code), Severity::Exception);
        assert_eq!(default_severity(ErrorCode(5000)), Severity::Exception);
    }

    #[test]
    fn test_override_yields_warning() {
        assert_eq!(
            default_severity(sequence::CACHE_SIZE_WARNING.code),
            Severity::Warning
        );
        assert_eq!(
            default_severity(sequence::NO_PREV_VALUE_WARNING.code),
            Severity::Warning
        );
    }

    #[test]
    fn test_every_override_is_registered() {
        for (code, _) in overrides() {
            assert!(TAXONOMY.iter().any(|def| def.code == code), "{}", code);
        }
    }

    #[test]
    fn test_only_exception_is_fatal() {
        assert!(Severity::Exception.is_fatal());
        for level in [
            Severity::Warning,
            Severity::Notice,
            Severity::Info,
            Severity::Log,
            Severity::Debug,
        ] {
            assert!(!level.is_fatal());
        }
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
        assert_eq!("EXCEPTION".parse::<Severity>(), Ok(Severity::Exception));
        assert!("fatal".parse::<Severity>().is_err());
    }
}
