//! `qdiag list`

use crate::console::CliConsole;
use anyhow::{Result, anyhow};
use colored::*;
use qdiag_core::error::{ErrorDef, default_severity, registry};
use qdiag_core::{Namespace, Severity};

pub fn list(console: &CliConsole, namespace: Option<&str>, warnings_only: bool) -> Result<()> {
    let namespace = namespace
        .map(|name| name.parse::<Namespace>().map_err(|e| anyhow!(e)))
        .transpose()?;

    let defs = select(namespace, warnings_only);
    if defs.is_empty() {
        console.warn("No registered codes match");
        return Ok(());
    }

    for def in &defs {
        let severity = default_severity(def.code);
        let level = if severity.is_fatal() {
            severity.to_string().normal()
        } else {
            severity.to_string().yellow()
        };
        println!("{:>6}  {:<9}  {}", def.code, level, def.key);
    }
    console.info(&format!("{} codes", defs.len()));
    Ok(())
}

/// Registered definitions in ascending code order
fn select(namespace: Option<Namespace>, warnings_only: bool) -> Vec<&'static ErrorDef> {
    let defs: Vec<&'static ErrorDef> = match namespace {
        Some(ns) => registry::iter_namespace(ns).collect(),
        None => registry::all(),
    };
    defs.into_iter()
        .filter(|def| !warnings_only || default_severity(def.code) != Severity::Exception)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdiag_core::ErrorCode;

    #[test]
    fn test_select_namespace() {
        let defs = select(Some(Namespace::Sequence), false);
        assert_eq!(defs.first().map(|d| d.code), Some(ErrorCode(19100)));
        assert!(defs.iter().all(|d| d.namespace == Namespace::Sequence));
        assert!(defs.windows(2).all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn test_select_warnings() {
        let codes: Vec<_> = select(Some(Namespace::Sequence), true)
            .iter()
            .map(|d| d.code)
            .collect();
        assert_eq!(codes, vec![ErrorCode(19115), ErrorCode(19118)]);
    }

    #[test]
    fn test_unknown_namespace() {
        let console = CliConsole::new(false);
        assert!(list(&console, Some("storage"), false).is_err());
        assert!(list(&console, Some("virtual-keyspace"), false).is_ok());
    }
}
