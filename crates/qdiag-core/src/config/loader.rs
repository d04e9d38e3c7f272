//! Configuration loading and management

use super::model::{ConfigLayer, DiagnosticsConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix for environment overrides, e.g. `QDIAG_LOG_LEVEL`
pub const ENV_PREFIX: &str = "QDIAG_";

/// Keys accepted from the environment and the command line.
///
/// Environment variables are these keys upper-cased behind [`ENV_PREFIX`].
pub const OVERRIDE_KEYS: [&str; 6] = [
    "log_level",
    "log_format",
    "log_file",
    "include_caller",
    "catalog_path",
    "use_builtin_catalog",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value '{value}' for {key} (from {origin})")]
    InvalidValue {
        key: String,
        value: String,
        origin: &'static str,
    },

    #[error("unknown configuration key '{key}' (from {origin})")]
    UnknownKey { key: String, origin: &'static str },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Source of configuration data
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Configuration from a JSON file
    File(PathBuf),
    /// `QDIAG_*` environment variables
    Environment,
    /// [`OVERRIDE_KEYS`] given on the command line
    CommandLine(HashMap<String, String>),
    /// Reset to the defaults, discarding earlier sources
    Default,
}

/// Configuration loader with support for multiple sources
///
/// Sources apply in the order they were added; later sources win.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    pub fn with_env(self) -> Self {
        self.add_source(ConfigSource::Environment)
    }

    pub fn with_args(self, args: HashMap<String, String>) -> Self {
        self.add_source(ConfigSource::CommandLine(args))
    }

    pub fn with_defaults(self) -> Self {
        self.add_source(ConfigSource::Default)
    }

    /// Load configuration from all sources
    pub fn load(self) -> Result<DiagnosticsConfig, ConfigError> {
        let mut config = DiagnosticsConfig::default();

        for source in &self.sources {
            match self.load_layer(source)? {
                Some(layer) => config.apply(layer),
                None => config = DiagnosticsConfig::default(),
            }
        }
        tracing::debug!(
            level = %config.logging.level,
            include_caller = config.envelope.include_caller,
            catalog = ?config.catalog.path,
            "configuration loaded"
        );

        config.validate()?;
        Ok(config)
    }

    /// The layer `source` contributes; `None` resets to the defaults
    fn load_layer(&self, source: &ConfigSource) -> Result<Option<ConfigLayer>, ConfigError> {
        let layer = match source {
            ConfigSource::File(path) => {
                tracing::debug!("Loading config from file: {}", path.display());
                self.load_from_file(path)?
            }
            ConfigSource::Environment => {
                tracing::debug!("Loading config from environment");
                override_layer("environment", |key| {
                    env::var(format!("{}{}", ENV_PREFIX, key.to_uppercase())).ok()
                })?
            }
            ConfigSource::CommandLine(args) => {
                tracing::debug!("Loading config from command line");
                if let Some(key) = args.keys().find(|key| !OVERRIDE_KEYS.contains(&key.as_str())) {
                    return Err(ConfigError::UnknownKey {
                        key: key.clone(),
                        origin: "command line",
                    });
                }
                override_layer("command line", |key| args.get(key).cloned())?
            }
            ConfigSource::Default => return Ok(None),
        };
        Ok(Some(layer))
    }

    /// A missing file contributes nothing
    fn load_from_file(&self, path: &Path) -> Result<ConfigLayer, ConfigError> {
        if !path.exists() {
            tracing::debug!("Config file {} not found, skipping", path.display());
            return Ok(ConfigLayer::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Build a layer from the [`OVERRIDE_KEYS`] that `lookup` finds
fn override_layer(
    origin: &'static str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ConfigLayer, ConfigError> {
    let parse_bool = |key: &str, value: String| -> Result<bool, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value,
                origin,
            }),
        }
    };

    let mut layer = ConfigLayer::default();
    layer.logging.level = lookup("log_level");
    layer.logging.format = lookup("log_format");
    if let Some(file) = lookup("log_file") {
        layer.logging.log_file = Some(PathBuf::from(file));
        layer.logging.log_to_file = Some(true);
    }
    if let Some(value) = lookup("include_caller") {
        layer.envelope.include_caller = Some(parse_bool("include_caller", value)?);
    }
    layer.catalog.path = lookup("catalog_path").map(PathBuf::from);
    if let Some(value) = lookup("use_builtin_catalog") {
        layer.catalog.use_builtin = Some(parse_bool("use_builtin_catalog", value)?);
    }

    Ok(layer)
}
