//! CLI argument definitions using clap
//!
//! - qdiag describe 19111         # Catalog entry for a code
//! - qdiag search 'cache|cycle'   # Search the catalog
//! - qdiag list --warnings        # Registered codes
//! - qdiag verify                 # Check the taxonomy

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qdiag")]
#[command(about = "Inspect the query engine's error taxonomy and documentation catalog")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults to <config dir>/qdiag/qdiag.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// JSON catalog file to use instead of the builtin catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the registered definition and catalog entry for a code
    Describe {
        /// Numeric error code
        code: String,

        /// Print the entry in the documentation dump format
        #[arg(long)]
        json: bool,
    },

    /// Search catalog entries by regex or text
    Search {
        pattern: String,

        #[arg(long)]
        json: bool,
    },

    /// List registered codes with their key and default severity
    List {
        /// Only codes in this namespace (e.g. sequence, plan, virtual-keyspace)
        #[arg(long, short)]
        namespace: Option<String>,

        /// Only codes that default to an advisory severity
        #[arg(long)]
        warnings: bool,
    },

    /// Show namespace ranges and how many codes each one holds
    Namespaces,

    /// Check the taxonomy, the severity table and catalog coverage
    Verify,

    /// Build a sample error for a code and print its envelope
    Render {
        /// Numeric error code
        code: String,

        /// Format arguments for the code's message template
        args: Vec<String>,

        /// Include the call site in the envelope
        #[arg(long)]
        caller: bool,
    },
}
