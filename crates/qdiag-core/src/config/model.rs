//! Diagnostics configuration model

use super::logging_config::{LOG_FORMATS, LOG_LEVELS, LoggingConfig, LoggingLayer};
use super::loader::ConfigError;
use crate::catalog::{Catalog, CatalogError, JsonCatalog, StaticCatalog};
use crate::error::EnvelopeOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Envelope settings for the request boundary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnvelopeConfig {
    /// Emit `caller` in envelopes; only for trusted operator endpoints
    pub include_caller: bool,
}

impl EnvelopeConfig {
    pub fn options(&self) -> EnvelopeOptions {
        EnvelopeOptions {
            include_caller: self.include_caller,
        }
    }
}

/// Where error documentation comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogConfig {
    /// JSON catalog file; replaces the builtin catalog when set
    pub path: Option<PathBuf>,
    /// Fall back to the builtin catalog when no file is configured
    pub use_builtin: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            use_builtin: true,
        }
    }
}

impl CatalogConfig {
    /// Open the configured catalog
    pub fn open(&self) -> Result<Box<dyn Catalog>, CatalogError> {
        match &self.path {
            Some(path) => Ok(Box::new(JsonCatalog::load(path)?)),
            None if self.use_builtin => Ok(Box::new(StaticCatalog::builtin().clone())),
            None => Ok(Box::new(StaticCatalog::default())),
        }
    }

}

/// Resolved configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticsConfig {
    pub logging: LoggingConfig,
    pub envelope: EnvelopeConfig,
    pub catalog: CatalogConfig,
}

/// `envelope` section of one source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_caller: Option<bool>,
}

/// `catalog` section of one source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_builtin: Option<bool>,
}

/// Settings named by one configuration source: a config file, the
/// environment or the command line.
///
/// Sections and fields a source leaves out are `None`, so stacking layers
/// only changes what each one actually names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub logging: LoggingLayer,
    pub envelope: EnvelopeLayer,
    pub catalog: CatalogLayer,
}

impl DiagnosticsConfig {
    /// `<config dir>/qdiag/qdiag.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("qdiag").join("qdiag.json"))
    }

    /// Overlay one source's layer onto the resolved configuration
    pub fn apply(&mut self, layer: ConfigLayer) {
        self.logging.apply(layer.logging);
        if let Some(include_caller) = layer.envelope.include_caller {
            self.envelope.include_caller = include_caller;
        }
        if let Some(path) = layer.catalog.path {
            self.catalog.path = Some(path);
        }
        if let Some(use_builtin) = layer.catalog.use_builtin {
            self.catalog.use_builtin = use_builtin;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}', expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log format '{}', expected one of {}",
                self.logging.format,
                LOG_FORMATS.join(", ")
            )));
        }
        if self.logging.log_to_file && self.logging.log_file.is_none() {
            return Err(ConfigError::Invalid(
                "log_to_file is set but log_file is missing".to_string(),
            ));
        }
        Ok(())
    }
}
