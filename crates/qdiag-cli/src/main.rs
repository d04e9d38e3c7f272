//! qdiag operator CLI
//!
//! Inspects the engine's error taxonomy and its documentation catalog:
//!
//! ```bash
//! qdiag describe 19111
//! qdiag search 'cache|cycle' --json
//! qdiag list --namespace sequence --warnings
//! qdiag namespaces
//! qdiag verify
//! qdiag render 19101 orders_seq --caller
//! ```
//!
//! Set `RUST_LOG=debug` (or `--log-level debug`) for verbose logging.

mod args;
mod commands;
mod console;
mod logging;
mod router;

use clap::Parser;
use console::CliConsole;
use std::process::ExitCode;

pub use args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let console = CliConsole::new(cli.verbose);

    match router::route(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console.error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
