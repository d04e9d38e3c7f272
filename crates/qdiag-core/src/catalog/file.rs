use super::builtin::StaticCatalog;
use super::entry::CatalogEntry;
use super::Catalog;
use crate::error::ErrorCode;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog {path} documents code {code} more than once")]
    DuplicateCode { path: PathBuf, code: ErrorCode },
}

/// Catalog read from an operator-supplied JSON file.
///
/// The file holds an array of entries:
///
/// ```json
/// [{ "code": 19111, "symbol": "E_SEQUENCE_EXHAUSTED", "description": "...",
///    "causes": ["..."], "actions": ["..."], "is_user": "maybe" }]
/// ```
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
    inner: StaticCatalog,
}

impl JsonCatalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
                path: path.clone(),
                source,
            })?;

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.code) {
                return Err(CatalogError::DuplicateCode {
                    path,
                    code: entry.code,
                });
            }
        }

        tracing::info!(path = %path.display(), entries = entries.len(), "loaded error catalog");
        Ok(Self {
            path,
            inner: StaticCatalog::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Catalog for JsonCatalog {
    fn describe(&self, code: ErrorCode) -> Option<CatalogEntry> {
        self.inner.get(code).cloned()
    }

    fn entries(&self) -> Vec<CatalogEntry> {
        self.inner.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UserCaused;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_catalog() {
        let file = write_catalog(
            r#"[
                {"code": 19111, "symbol": "E_SEQUENCE_EXHAUSTED", "description": "Sequence [name] has reached its limit", "is_user": "maybe"},
                {"code": 1000, "symbol": "E_SERVICE_READONLY", "description": "read-only", "is_user": "yes"}
            ]"#,
        );
        let catalog = JsonCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].code, ErrorCode(1000));
        assert_eq!(
            catalog.describe(ErrorCode(19111)).unwrap().is_user,
            UserCaused::Maybe
        );
        assert!(catalog.is_user_error(ErrorCode(1000)));
    }

    #[test]
    fn test_missing_file() {
        let err = JsonCatalog::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let file = write_catalog("{ not an array");
        let err = JsonCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let file = write_catalog(
            r#"[
                {"code": 1, "symbol": "A", "description": "a"},
                {"code": 1, "symbol": "B", "description": "b"}
            ]"#,
        );
        let err = JsonCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCode { code, .. } if code == ErrorCode(1)));
    }
}
