//! Error documentation catalog
//!
//! The catalog maps codes to operator-facing prose: description, likely
//! causes, and suggested actions. It feeds admin and support tooling and is
//! never consulted on the runtime error path.

mod builtin;
mod entry;
mod file;

pub use builtin::StaticCatalog;
pub use entry::{CatalogEntry, UserCaused};
pub use file::{CatalogError, JsonCatalog};

use crate::error::{ErrorCode, QueryError};
use entry::Matcher;

/// Code → documentation lookup
#[cfg_attr(test, mockall::automock)]
pub trait Catalog: Send + Sync {
    /// Documentation for `code`, if the catalog has any
    fn describe(&self, code: ErrorCode) -> Option<CatalogEntry>;

    /// Every entry in ascending code order
    fn entries(&self) -> Vec<CatalogEntry>;

    /// Entries matching `pattern`, sorted by code.
    ///
    /// The pattern is tried as a regular expression first and as plain text
    /// if it does not compile.
    fn search(&self, pattern: &str) -> Vec<CatalogEntry> {
        let matcher = Matcher::new(pattern);
        let mut found: Vec<CatalogEntry> = self
            .entries()
            .into_iter()
            .filter(|entry| entry.matches(&matcher))
            .collect();
        found.sort_by_key(|entry| entry.code);
        found
    }

    /// The catalog marks `code` as definitely caused by user input
    fn is_user_error(&self, code: ErrorCode) -> bool {
        self.describe(code)
            .is_some_and(|entry| entry.is_user == UserCaused::Yes)
    }

    /// The catalog marks `code` as definitely not caused by user input
    fn is_system_error(&self, code: ErrorCode) -> bool {
        self.describe(code)
            .is_some_and(|entry| entry.is_user == UserCaused::No)
    }
}

impl QueryError {
    /// Whether the caller's input caused this error.
    ///
    /// The value's own hint wins; otherwise the catalog decides.
    pub fn is_user_caused(&self, catalog: &dyn Catalog) -> bool {
        match self.user_caused() {
            Some(hint) => hint,
            None => catalog
                .describe(self.code())
                .is_some_and(|entry| entry.is_user == UserCaused::Yes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes::{execution, sequence};
    use mockall::predicate::eq;

    #[test]
    fn test_is_user_caused_prefers_hint() {
        let mut catalog = MockCatalog::new();
        catalog.expect_describe().never();

        let err = QueryError::new(&execution::INTERNAL, "x").with_user_caused(true);
        assert!(err.is_user_caused(&catalog));
    }

    #[test]
    fn test_is_user_caused_falls_back_to_catalog() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_describe()
            .with(eq(sequence::INVALID_CACHE.code))
            .times(1)
            .returning(|code| {
                let entry = CatalogEntry::new(code.get(), "E_SEQUENCE_INVALID_CACHE", "x");
                Some(entry.user(UserCaused::Yes))
            });

        let err = QueryError::new(&sequence::INVALID_CACHE, "Invalid cache value -6");
        assert!(err.is_user_caused(&catalog));
    }

    #[test]
    fn test_is_user_caused_unknown_code() {
        let mut catalog = MockCatalog::new();
        catalog.expect_describe().returning(|_| None);

        let err = QueryError::new(&execution::INTERNAL, "x");
        assert!(!err.is_user_caused(&catalog));
    }

    #[test]
    fn test_search_is_sorted() {
        let catalog = StaticCatalog::new(vec![
            CatalogEntry::new(
                19111,
                "E_SEQUENCE_EXHAUSTED",
                "Sequence [name] has reached its limit",
            ),
            CatalogEntry::new(19101, "E_SEQUENCE_CREATE", "Create failed for sequence [name]"),
            CatalogEntry::new(1080, "E_SERVICE_TIMEOUT", "Timeout exceeded"),
        ]);
        let codes: Vec<u32> = catalog
            .search("(?i)sequence")
            .iter()
            .map(|e| e.code.get())
            .collect();
        assert_eq!(codes, vec![19101, 19111]);
    }

    #[test]
    fn test_user_and_system_errors() {
        let catalog = StaticCatalog::new(vec![
            CatalogEntry::new(1, "A", "a").user(UserCaused::Yes),
            CatalogEntry::new(2, "B", "b").user(UserCaused::Maybe),
            CatalogEntry::new(3, "C", "c"),
        ]);
        assert!(catalog.is_user_error(ErrorCode(1)));
        assert!(!catalog.is_user_error(ErrorCode(2)));
        assert!(!catalog.is_system_error(ErrorCode(2)));
        assert!(catalog.is_system_error(ErrorCode(3)));
        assert!(!catalog.is_system_error(ErrorCode(4)));
    }
}
