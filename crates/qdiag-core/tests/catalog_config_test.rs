//! Catalog and configuration integration tests
//!
//! Loads an operator catalog through the config layer and checks that the
//! user-facing classification consults it.

use qdiag_core::catalog::Catalog;
use qdiag_core::config::ConfigLoader;
use qdiag_core::error::codes::sequence;
use qdiag_core::error::{ErrorCategory, Origin, UserFriendlyError};
use qdiag_core::{ErrorCode, QueryError};
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

const CATALOG: &str = r#"[
    {
        "code": 19111,
        "symbol": "E_SEQUENCE_EXHAUSTED",
        "description": "Sequence [name] has reached its limit",
        "causes": ["The sequence has no CYCLE option and reached MAXVALUE."],
        "actions": ["Restart the sequence.\nOr alter it to cycle."],
        "is_user": "maybe"
    },
    {
        "code": 19105,
        "symbol": "E_SEQUENCE_INVALID_CACHE",
        "description": "Invalid cache value [cache]",
        "is_user": "yes"
    }
]"#;

fn catalog_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    file
}

fn open_catalog(path: &std::path::Path) -> Box<dyn Catalog> {
    let mut args = HashMap::new();
    args.insert("catalog_path".to_string(), path.display().to_string());
    let config = ConfigLoader::new().with_defaults().with_args(args).load().unwrap();
    config.catalog.open().unwrap()
}

#[test]
fn test_configured_catalog_replaces_builtin() {
    let file = catalog_file();
    let catalog = open_catalog(file.path());

    assert_eq!(catalog.entries().len(), 2);
    assert!(catalog.describe(ErrorCode(19100)).is_none());
    assert!(catalog.is_user_error(ErrorCode(19105)));
    assert!(!catalog.is_user_error(ErrorCode(19111)));
    assert!(!catalog.is_system_error(ErrorCode(19111)));
}

#[test]
fn test_search_regex_and_text() {
    let file = catalog_file();
    let catalog = open_catalog(file.path());

    let found: Vec<_> = catalog.search("CYCLE|cache").into_iter().map(|e| e.code).collect();
    assert_eq!(found, vec![ErrorCode(19105), ErrorCode(19111)]);

    // not a valid regex, falls back to substring match
    let found = catalog.search("[cache");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code, ErrorCode(19105));
}

#[test]
fn test_friendly_error_uses_configured_actions() {
    let file = catalog_file();
    let catalog = open_catalog(file.path());

    let err = QueryError::new(&sequence::EXHAUSTED, "Sequence 'orders' has reached its limit");
    let friendly = UserFriendlyError::from_error(&err, catalog.as_ref());
    assert_eq!(friendly.category, ErrorCategory::Datastore);
    assert_eq!(friendly.origin, Origin::Internal);
    assert_eq!(
        friendly.suggestions,
        vec!["Restart the sequence.", "Or alter it to cycle."]
    );

    let err = QueryError::new(&sequence::INVALID_CACHE, "Invalid cache value -6");
    assert!(err.is_user_caused(catalog.as_ref()));
    assert_eq!(Origin::of(&err, catalog.as_ref()), Origin::User);
}
