//! `qdiag verify`
//!
//! Health checks over the taxonomy, the severity table and the catalog, in
//! the style of a doctor command. Any failed check makes the command fail.

use crate::console::CliConsole;
use anyhow::{Result, bail};
use colored::*;
use qdiag_core::catalog::Catalog;
use qdiag_core::error::registry::{self, TAXONOMY};
use qdiag_core::error::{default_severity, overrides};

/// Result of a single check
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

impl CheckResult {
    fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Pass,
            message: message.into(),
            details: Vec::new(),
        }
    }

    fn warn(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warn,
            message: message.into(),
            details: Vec::new(),
        }
    }

    fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Fail,
            message: message.into(),
            details: Vec::new(),
        }
    }

    fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    fn icon(&self) -> ColoredString {
        match self.status {
            CheckStatus::Pass => "✓".green().bold(),
            CheckStatus::Warn => "⚠".yellow().bold(),
            CheckStatus::Fail => "✗".red().bold(),
        }
    }
}

pub fn verify(console: &CliConsole, catalog: &dyn Catalog) -> Result<()> {
    console.print_header("Error taxonomy check");

    let checks = run_checks(catalog);
    let mut failed = 0;
    let mut warned = 0;

    for check in &checks {
        println!("{} {} - {}", check.icon(), check.name.bold(), check.message);
        for detail in &check.details {
            println!("    {} {}", "→".dimmed(), detail.dimmed());
        }
        match check.status {
            CheckStatus::Pass => {}
            CheckStatus::Warn => warned += 1,
            CheckStatus::Fail => failed += 1,
        }
    }

    println!();
    if failed > 0 {
        bail!("{} of {} checks failed", failed, checks.len());
    }
    if warned > 0 {
        console.warn(&format!("{} checks have warnings", warned));
    } else {
        console.success("All checks passed");
    }
    Ok(())
}

pub fn run_checks(catalog: &dyn Catalog) -> Vec<CheckResult> {
    vec![
        check_taxonomy(),
        check_overrides(),
        check_catalog_codes(catalog),
        check_catalog_warnings(catalog),
    ]
}

fn check_taxonomy() -> CheckResult {
    match registry::verify(TAXONOMY) {
        Ok(()) => CheckResult::pass(
            "Taxonomy",
            format!("{} codes, unique and inside their namespaces", TAXONOMY.len()),
        ),
        Err(violations) => CheckResult::fail(
            "Taxonomy",
            format!("{} violations", violations.len()),
        )
        .with_details(violations.iter().map(ToString::to_string).collect()),
    }
}

fn check_overrides() -> CheckResult {
    let unknown: Vec<String> = overrides()
        .into_iter()
        .filter(|(code, _)| registry::lookup(*code).is_none())
        .map(|(code, severity)| format!("{} ({}) is not registered", code, severity))
        .collect();

    if unknown.is_empty() {
        CheckResult::pass(
            "Severity table",
            format!("{} overrides, all registered", overrides().len()),
        )
    } else {
        CheckResult::fail("Severity table", "overrides for unregistered codes")
            .with_details(unknown)
    }
}

fn check_catalog_codes(catalog: &dyn Catalog) -> CheckResult {
    let entries = catalog.entries();
    let stray: Vec<String> = entries
        .iter()
        .filter(|entry| registry::lookup(entry.code).is_none())
        .map(|entry| format!("{} {} is not registered", entry.code, entry.symbol))
        .collect();

    if !stray.is_empty() {
        return CheckResult::warn("Catalog", "entries for unregistered codes").with_details(stray);
    }

    let documented = TAXONOMY
        .iter()
        .filter(|def| catalog.describe(def.code).is_some())
        .count();
    CheckResult::pass(
        "Catalog",
        format!("{} of {} codes documented", documented, TAXONOMY.len()),
    )
}

fn check_catalog_warnings(catalog: &dyn Catalog) -> CheckResult {
    let mismatched: Vec<String> = catalog
        .entries()
        .iter()
        .filter(|entry| registry::lookup(entry.code).is_some())
        .filter(|entry| entry.is_warning == default_severity(entry.code).is_fatal())
        .map(|entry| {
            format!(
                "{} is documented as {} but defaults to {}",
                entry.code,
                if entry.is_warning { "a warning" } else { "an error" },
                default_severity(entry.code)
            )
        })
        .collect();

    if mismatched.is_empty() {
        CheckResult::pass("Catalog severities", "documented severities match the defaults")
    } else {
        CheckResult::fail("Catalog severities", "documented severity disagrees with the defaults")
            .with_details(mismatched)
    }
}
