//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::console::CliConsole;
use crate::{commands, logging};
use anyhow::{Context, Result, bail};
use qdiag_core::catalog::Catalog;
use qdiag_core::config::{ConfigLoader, DiagnosticsConfig};
use std::collections::HashMap;

/// Route CLI commands to their respective handlers
pub fn route(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    logging::init(&config.logging)?;
    tracing::debug!(?config, "configuration resolved");

    let console = CliConsole::new(cli.verbose);

    match cli.command {
        Commands::Describe { code, json } => {
            let catalog = open_catalog(&config, &console)?;
            commands::describe::describe(&console, catalog.as_ref(), &code, json)
        }
        Commands::Search { pattern, json } => {
            let catalog = open_catalog(&config, &console)?;
            commands::search::search(&console, catalog.as_ref(), &pattern, json)
        }
        Commands::List {
            namespace,
            warnings,
        } => commands::list::list(&console, namespace.as_deref(), warnings),
        Commands::Namespaces => commands::namespaces::namespaces(&console),
        Commands::Verify => {
            let catalog = open_catalog(&config, &console)?;
            commands::verify::verify(&console, catalog.as_ref())
        }
        Commands::Render { code, args, caller } => {
            let mut options = config.envelope.options();
            options.include_caller |= caller;
            commands::render::render(&code, &args, &options)
        }
    }
}

/// Defaults, then the config file, then `QDIAG_*`, then command-line flags
fn load_config(cli: &Cli) -> Result<DiagnosticsConfig> {
    let mut loader = ConfigLoader::new().with_defaults();

    match &cli.config {
        Some(path) if !path.exists() => {
            bail!("config file {} does not exist", path.display());
        }
        Some(path) => loader = loader.with_file(path),
        None => {
            if let Some(path) = DiagnosticsConfig::default_path() {
                loader = loader.with_file(path);
            }
        }
    }

    let mut overrides = HashMap::new();
    if let Some(level) = &cli.log_level {
        overrides.insert("log_level".to_string(), level.clone());
    }
    if let Some(catalog) = &cli.catalog {
        overrides.insert("catalog_path".to_string(), catalog.display().to_string());
    }

    loader
        .with_env()
        .with_args(overrides)
        .load()
        .context("loading configuration")
}

fn open_catalog(config: &DiagnosticsConfig, console: &CliConsole) -> Result<Box<dyn Catalog>> {
    if let Some(path) = &config.catalog.path {
        console.info(&format!("Using catalog {}", path.display()));
    }
    config.catalog.open().context("opening error catalog")
}
