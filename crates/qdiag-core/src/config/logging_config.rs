//! Logging configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log levels accepted in `level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Log formats accepted in `format`
pub const LOG_FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Resolved logging settings for the operator CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggingConfig {
    /// One of [`LOG_LEVELS`]
    pub level: String,
    /// One of [`LOG_FORMATS`]
    pub format: String,
    pub log_file: Option<PathBuf>,
    /// Write to `log_file` instead of stderr
    pub log_to_file: bool,
    pub log_to_console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            log_file: None,
            log_to_file: false,
            log_to_console: true,
        }
    }
}

/// Logging settings named by one configuration source.
///
/// A field left out of the source stays `None` and keeps the value resolved
/// from earlier sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_to_file: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_to_console: Option<bool>,
}

impl LoggingConfig {
    /// Overlay the fields `layer` names. Level and format are matched
    /// case-insensitively.
    pub fn apply(&mut self, layer: LoggingLayer) {
        if let Some(level) = layer.level {
            self.level = level.trim().to_ascii_lowercase();
        }
        if let Some(format) = layer.format {
            self.format = format.trim().to_ascii_lowercase();
        }
        if let Some(path) = layer.log_file {
            self.log_file = Some(path);
        }
        if let Some(log_to_file) = layer.log_to_file {
            self.log_to_file = log_to_file;
        }
        if let Some(log_to_console) = layer.log_to_console {
            self.log_to_console = log_to_console;
        }
    }

    /// Filter directive for the subscriber, scoped to this workspace's crates
    pub fn filter_directive(&self) -> String {
        format!("qdiag={0},qdiag_core={0},qdiag_cli={0}", self.level)
    }
}
