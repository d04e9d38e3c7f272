//! `qdiag describe`

use super::parse_code;
use crate::console::CliConsole;
use anyhow::{Result, bail};
use qdiag_core::catalog::{Catalog, CatalogEntry, UserCaused};
use qdiag_core::error::{ErrorDef, default_severity, registry};
use qdiag_core::{ErrorCode, Namespace};
use serde_json::Value;

/// Print the definition and documentation for one code
pub fn describe(console: &CliConsole, catalog: &dyn Catalog, code: &str, json: bool) -> Result<()> {
    let code = parse_code(code)?;
    let def = registry::lookup(code);
    let entry = catalog.describe(code);

    if def.is_none() && entry.is_none() {
        bail!("code {} is not registered and has no catalog entry", code);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(code, def, entry.as_ref()))?);
        return Ok(());
    }

    match def {
        Some(def) => console.print_header(&format!("{} {}", def.code, def.key)),
        None => console.print_header(&code.to_string()),
    }
    for (label, value) in fields(code, def, entry.as_ref()) {
        console.print_field(label, &value);
    }
    if def.is_none() {
        console.warn("Documented in the catalog but not registered in the taxonomy");
    }
    if entry.is_none() {
        console.info("No catalog entry for this code");
    }
    Ok(())
}

/// Documentation dump form, with the taxonomy fields added when registered
fn to_json(code: ErrorCode, def: Option<&ErrorDef>, entry: Option<&CatalogEntry>) -> Value {
    let mut value = match entry {
        Some(entry) => serde_json::to_value(entry).unwrap_or_default(),
        None => serde_json::json!({ "code": code }),
    };
    if let (Some(def), Some(map)) = (def, value.as_object_mut()) {
        map.insert("key".to_string(), Value::from(def.key));
        map.insert("namespace".to_string(), Value::from(def.namespace.name()));
        map.insert(
            "severity".to_string(),
            Value::from(default_severity(def.code).as_str()),
        );
    }
    value
}

fn fields(
    code: ErrorCode,
    def: Option<&ErrorDef>,
    entry: Option<&CatalogEntry>,
) -> Vec<(&'static str, String)> {
    let namespace = def
        .map(|d| d.namespace)
        .or_else(|| Namespace::of(code))
        .map(|ns| ns.to_string())
        .unwrap_or_else(|| "unassigned".to_string());

    let mut out = vec![
        ("Namespace", namespace),
        ("Severity", default_severity(code).to_string()),
    ];

    if let Some(entry) = entry {
        out.push(("Symbol", entry.symbol.clone()));
        out.push(("Description", entry.description.clone()));
        out.extend(entry.causes.iter().map(|c| ("Cause", c.replace('\n', " "))));
        out.extend(entry.actions.iter().map(|a| ("Action", a.replace('\n', " "))));
        if entry.is_user != UserCaused::No {
            out.push(("User error", entry.is_user.label().to_string()));
        }
        out.push(("Applies to", entry.applies_to.join(", ")));
    }
    out
}
