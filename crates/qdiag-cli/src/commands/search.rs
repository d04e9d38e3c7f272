//! `qdiag search`

use crate::console::CliConsole;
use anyhow::Result;
use colored::*;
use qdiag_core::catalog::Catalog;

pub fn search(
    console: &CliConsole,
    catalog: &dyn Catalog,
    pattern: &str,
    json: bool,
) -> Result<()> {
    let found = catalog.search(pattern);
    tracing::debug!(pattern, matches = found.len(), "catalog search");

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        console.warn(&format!("No catalog entries match '{}'", pattern));
        return Ok(());
    }

    for entry in &found {
        println!(
            "{:>6}  {:<32} {}",
            entry.code.to_string().bold(),
            entry.symbol.dimmed(),
            entry.description
        );
    }
    console.info(&format!("{} matching entries", found.len()));
    Ok(())
}
