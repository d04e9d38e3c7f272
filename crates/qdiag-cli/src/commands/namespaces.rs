//! `qdiag namespaces`

use crate::console::CliConsole;
use anyhow::Result;
use colored::*;
use qdiag_core::Namespace;
use qdiag_core::error::registry;

pub fn namespaces(console: &CliConsole) -> Result<()> {
    console.print_header("Error code namespaces");
    for ns in Namespace::ALL {
        let (lo, hi) = ns.bounds();
        let count = registry::iter_namespace(ns).count();
        println!(
            "{:<18} {:>6}-{:<6} {}",
            ns.name().bold(),
            lo,
            hi,
            format!("{} codes", count).dimmed()
        );
    }
    Ok(())
}
