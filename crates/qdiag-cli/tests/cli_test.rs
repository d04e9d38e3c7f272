//! End-to-end tests for the qdiag binary

use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn empty_config() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{}}").unwrap();
    file
}

fn qdiag(config: &NamedTempFile, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qdiag"))
        .arg("--config")
        .arg(config.path())
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_describe_json() {
    let config = empty_config();
    let output = qdiag(&config, &["describe", "19111", "--json"]);
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["code"], 19111);
    assert_eq!(value["key"], "datastore.sequence.exhausted");
    assert_eq!(value["severity"], "exception");
}

#[test]
fn test_describe_unknown_code_fails() {
    let config = empty_config();
    let output = qdiag(&config, &["describe", "15500"]);
    assert!(!output.status.success());
}

#[test]
fn test_render_envelope() {
    let config = empty_config();
    let output = qdiag(&config, &["render", "19105", "--", "-6"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let value = stdout_json(&output);
    assert_eq!(value["_level"], "exception");
    assert_eq!(value["key"], "datastore.sequence.cache");
    assert_eq!(value["message"], "Invalid cache value -6");
    assert!(value.get("caller").is_none());
}

#[test]
fn test_render_with_caller_from_config() {
    let mut config = NamedTempFile::new().unwrap();
    write!(config, r#"{{"envelope": {{"include_caller": true}}}}"#).unwrap();

    let output = qdiag(&config, &["render", "19106", "orders"]);
    assert!(output.status.success());
    assert!(stdout_json(&output)["caller"].is_string());
}

#[test]
fn test_verify_builtin() {
    let config = empty_config();
    let output = qdiag(&config, &["verify"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_search_with_catalog_file() {
    let mut catalog = NamedTempFile::new().unwrap();
    write!(
        catalog,
        r#"[{{"code": 19104, "symbol": "E_SEQUENCE_INVALID_RANGE", "description": "Invalid range [min] to [max]"}}]"#
    )
    .unwrap();

    let config = empty_config();
    let path = catalog.path().display().to_string();
    let output = qdiag(&config, &["--catalog", &path, "search", "range", "--json"]);
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["code"], 19104);
}

#[test]
fn test_missing_config_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_qdiag"))
        .args(["--config", "/nonexistent/qdiag.json", "namespaces"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
