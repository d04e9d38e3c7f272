//! Configuration for the diagnostics layer and its operator tooling

pub mod loader;
pub mod logging_config;
pub mod model;

pub use loader::{ConfigError, ConfigLoader, ConfigSource, ENV_PREFIX, OVERRIDE_KEYS};
pub use logging_config::{LoggingConfig, LoggingLayer};
pub use model::{
    CatalogConfig, CatalogLayer, ConfigLayer, DiagnosticsConfig, EnvelopeConfig, EnvelopeLayer,
};
