//! Catalog entry and its documentation-dump serialization

use crate::error::ErrorCode;
use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Whether a condition is caused by the caller's input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserCaused {
    #[default]
    No,
    Maybe,
    Yes,
}

impl UserCaused {
    pub fn label(self) -> &'static str {
        match self {
            UserCaused::No => "No",
            UserCaused::Maybe => "Possibly",
            UserCaused::Yes => "Yes",
        }
    }
}

/// Operator documentation for one error code
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub code: ErrorCode,
    /// Symbolic constant name, e.g. `E_SEQUENCE_EXHAUSTED`
    pub symbol: String,
    pub description: String,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub applies_to: Vec<String>,
    #[serde(default)]
    pub is_user: UserCaused,
    #[serde(default)]
    pub is_warning: bool,
}

impl CatalogEntry {
    pub fn new(code: u32, symbol: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: ErrorCode(code),
            symbol: symbol.into(),
            description: description.into(),
            causes: Vec::new(),
            actions: Vec::new(),
            applies_to: Vec::new(),
            is_user: UserCaused::No,
            is_warning: false,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }

    pub fn applies_to(mut self, target: impl Into<String>) -> Self {
        self.applies_to.push(target.into());
        self
    }

    pub fn user(mut self, is_user: UserCaused) -> Self {
        self.is_user = is_user;
        self
    }

    pub fn warning(mut self) -> Self {
        self.is_warning = true;
        self
    }

    pub(crate) fn matches(&self, matcher: &Matcher) -> bool {
        matcher.is_match(&self.code.to_string())
            || matcher.is_match(&self.symbol)
            || matcher.is_match(&self.description)
            || self.causes.iter().any(|c| matcher.is_match(c))
            || self.actions.iter().any(|a| matcher.is_match(a))
            || matcher.is_match(&self.applies_to.join(", "))
    }
}

/// Search pattern: a regex when it compiles, plain text otherwise
pub(crate) enum Matcher {
    Regex(Regex),
    Text(String),
}

impl Matcher {
    pub(crate) fn new(pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(re) => Matcher::Regex(re),
            Err(e) => {
                tracing::debug!(
                    pattern,
                    error = %e,
                    "search pattern is not a regex, matching text"
                );
                Matcher::Text(pattern.to_string())
            }
        }
    }

    fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Regex(re) => re.is_match(text),
            Matcher::Text(needle) => text.contains(needle.as_str()),
        }
    }
}

// Multi-line prose becomes an array of lines; single lines stay strings.
fn split_lines(items: &[String]) -> Vec<serde_json::Value> {
    items
        .iter()
        .map(|item| {
            let lines: Vec<&str> = item.split('\n').collect();
            if lines.len() == 1 {
                serde_json::Value::from(item.as_str())
            } else {
                serde_json::Value::from(lines)
            }
        })
        .collect()
}

impl Serialize for CatalogEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("code", &self.code)?;
        map.serialize_entry("description", &self.description)?;
        if !self.causes.is_empty() {
            map.serialize_entry("reason", &split_lines(&self.causes))?;
        }
        if !self.actions.is_empty() {
            map.serialize_entry("user_action", &split_lines(&self.actions))?;
        }
        if self.is_warning {
            map.serialize_entry("warning", &true)?;
        }
        if self.is_user != UserCaused::No {
            map.serialize_entry("user_error", self.is_user.label())?;
        }
        if !self.applies_to.is_empty() {
            map.serialize_entry("applies_to", &self.applies_to.join(", "))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> CatalogEntry {
        CatalogEntry::new(19105, "E_SEQUENCE_INVALID_CACHE", "Invalid cache value [cache]")
            .with_cause("CREATE or ALTER SEQUENCE received a negative cache value.")
            .with_action("Pass a positive integer.\nThe same applies to CACHE <num>.")
            .applies_to("Server")
            .applies_to("SDK")
            .user(UserCaused::Yes)
    }

    #[test]
    fn test_dump_format() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "code": 19105,
                "description": "Invalid cache value [cache]",
                "reason": ["CREATE or ALTER SEQUENCE received a negative cache value."],
                "user_action": [["Pass a positive integer.", "The same applies to CACHE <num>."]],
                "user_error": "Yes",
                "applies_to": "Server, SDK"
            })
        );
    }

    #[test]
    fn test_dump_omits_defaults() {
        let entry = CatalogEntry::new(19107, "E_SEQUENCE", "Error accessing sequence");
        let value = serde_json::to_value(entry).unwrap();
        assert_eq!(value, json!({ "code": 19107, "description": "Error accessing sequence" }));

        let maybe = CatalogEntry::new(1, "X", "x").user(UserCaused::Maybe).warning();
        let value = serde_json::to_value(maybe).unwrap();
        assert_eq!(value["user_error"], json!("Possibly"));
        assert_eq!(value["warning"], json!(true));
    }

    #[test]
    fn test_matches_regex_and_text() {
        let entry = sample();
        assert!(entry.matches(&Matcher::new("^1910[0-9]$")));
        assert!(entry.matches(&Matcher::new("INVALID_CACHE")));
        assert!(entry.matches(&Matcher::new("Server, SDK")));
        assert!(!entry.matches(&Matcher::new("exhausted")));
        // unbalanced bracket is not a regex; falls back to substring
        assert!(entry.matches(&Matcher::new("[cache")));
    }

    #[test]
    fn test_deserialize_input_form() {
        let entry: CatalogEntry = serde_json::from_value(json!({
            "code": 1080,
            "symbol": "E_SERVICE_TIMEOUT",
            "description": "Timeout exceeded",
            "is_user": "maybe"
        }))
        .unwrap();
        assert_eq!(entry.code, ErrorCode(1080));
        assert_eq!(entry.is_user, UserCaused::Maybe);
        assert!(entry.causes.is_empty());
    }
}
