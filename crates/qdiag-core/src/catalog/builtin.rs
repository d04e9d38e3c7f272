use super::entry::{CatalogEntry, UserCaused};
use super::Catalog;
use crate::error::ErrorCode;
use once_cell::sync::Lazy;

/// In-memory catalog, sorted by code
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalog {
    pub fn new(mut entries: Vec<CatalogEntry>) -> Self {
        entries.sort_by_key(|entry| entry.code);
        Self { entries }
    }

    /// Catalog shipped with the library
    pub fn builtin() -> &'static StaticCatalog {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn get(&self, code: ErrorCode) -> Option<&CatalogEntry> {
        self.entries
            .binary_search_by_key(&code, |entry| entry.code)
            .ok()
            .map(|idx| &self.entries[idx])
    }
}

impl Catalog for StaticCatalog {
    fn describe(&self, code: ErrorCode) -> Option<CatalogEntry> {
        self.get(code).cloned()
    }

    fn entries(&self) -> Vec<CatalogEntry> {
        self.entries.clone()
    }
}

static BUILTIN: Lazy<StaticCatalog> = Lazy::new(|| {
    let catalog = StaticCatalog::new(builtin_entries());
    tracing::debug!(entries = catalog.len(), "builtin error catalog loaded");
    catalog
});

fn builtin_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(1000, "E_SERVICE_READONLY", "The server or request is read-only and cannot accept this write statement.")
            .with_cause("A modifying statement was sent with a GET request or with readonly set.")
            .with_action("Send the statement with POST and without the readonly parameter.")
            .user(UserCaused::Yes),
        CatalogEntry::new(1020, "E_SERVICE_NOT_IMPLEMENTED", "Not yet implemented: [feature]")
            .with_cause("The request used a feature this server does not support.")
            .user(UserCaused::Yes),
        CatalogEntry::new(1080, "E_SERVICE_TIMEOUT", "Timeout [duration] exceeded")
            .with_cause("The request ran longer than its timeout setting.")
            .with_action("Retry the request.\nRaise the request timeout if the statement is expected to run long.")
            .user(UserCaused::Maybe),
        CatalogEntry::new(3000, "E_PARSE_SYNTAX", "[message]")
            .with_cause("The statement text could not be parsed.")
            .with_action("Correct the statement near the reported line and column.")
            .user(UserCaused::Yes),
        CatalogEntry::new(5000, "E_INTERNAL", "[message]")
            .with_cause("An unexpected internal condition was detected.")
            .with_action("Contact support with the request and the server log."),
        CatalogEntry::new(5500, "E_MEMORY_QUOTA_EXCEEDED", "Request has exceeded memory quota")
            .with_cause("The statement needed more document memory than its memory_quota allows.")
            .with_action("Raise memory_quota for the request or reduce the size of intermediate results.")
            .user(UserCaused::Yes),
        CatalogEntry::new(7012, "E_INFER_TIMEOUT", "Stopped after exceeding infer_timeout. Schema may be incomplete.")
            .with_cause("Schema inference ran out of time before sampling finished.")
            .with_action("Increase infer_timeout in the INFER options.")
            .user(UserCaused::Maybe)
            .warning(),
        CatalogEntry::new(19100, "E_SEQUENCE_NOT_ENABLED", "Sequence support is not enabled for [bucket]")
            .with_cause("Sequences need the bucket's _system scope and _query collection, which are unavailable.")
            .with_action("Contact support"),
        CatalogEntry::new(19101, "E_SEQUENCE_CREATE", "Create failed for sequence [name]")
            .with_cause("The sequence path failed validation.\nThe bucket or scope does not exist, or the system namespace was used.")
            .with_cause("An option other than start, cache, increment, min, max or cycle was supplied.")
            .with_cause("The sequence document could not be stored.")
            .with_action("Check the reason attached to the error for the underlying condition.")
            .user(UserCaused::Maybe),
        CatalogEntry::new(19102, "E_SEQUENCE_ALTER", "Alter failed for sequence [name]")
            .with_cause("An unknown option or an option value of the wrong type was supplied.")
            .with_cause("The new cache or range values are invalid.")
            .user(UserCaused::Maybe),
        CatalogEntry::new(19103, "E_SEQUENCE_DROP", "Drop failed for sequence [name]")
            .with_cause("Deleting the sequence document from the system scope failed.")
            .with_action("The document may already have been removed externally."),
        CatalogEntry::new(19104, "E_SEQUENCE_INVALID_RANGE", "Invalid range [min] to [max]")
            .with_cause("CREATE or ALTER SEQUENCE received a minimum larger than its maximum.")
            .with_action("Pass min and max such that min <= max.\nThe same applies to MINVALUE and MAXVALUE.")
            .user(UserCaused::Yes),
        CatalogEntry::new(19105, "E_SEQUENCE_INVALID_CACHE", "Invalid cache value [cache]")
            .with_cause("CREATE or ALTER SEQUENCE received a cache value that is not a positive integer.")
            .with_action("Pass a positive integer for cache.\nThe same applies to CACHE <num>.")
            .user(UserCaused::Yes),
        CatalogEntry::new(19106, "E_SEQUENCE_NOT_FOUND", "Sequence [name] not found")
            .user(UserCaused::Yes),
        CatalogEntry::new(19107, "E_SEQUENCE", "Error accessing sequence")
            .with_cause("A sequence missing from the cache could not be loaded from the system scope."),
        CatalogEntry::new(19108, "E_SEQUENCE_ALREADY_EXISTS", "Sequence [name] already exists")
            .with_cause("CREATE SEQUENCE without IF NOT EXISTS named an existing sequence.")
            .with_cause("A restored sequence already exists.")
            .with_action("List system:all_sequences and pick an unused name.")
            .user(UserCaused::Yes),
        CatalogEntry::new(19109, "E_SEQUENCE_METAKV", "Error accessing sequences cache monitor data")
            .with_cause("The cache revision entry could not be registered at startup.")
            .with_action("Check cluster metadata for a conflicting revision entry."),
        CatalogEntry::new(19110, "E_SEQUENCE_INVALID_DATA", "Invalid sequence data")
            .with_cause("The stored sequence document is missing or holds fields of the wrong type."),
        CatalogEntry::new(19111, "E_SEQUENCE_EXHAUSTED", "Sequence [name] has reached its limit")
            .with_cause("A non-cycling sequence moved past its minimum or maximum.")
            .with_action("Alter the sequence range, or enable cycle.")
            .user(UserCaused::Maybe),
        CatalogEntry::new(19112, "E_SEQUENCE_CYCLE", "Cycle failed for sequence [name]"),
        CatalogEntry::new(19113, "E_SEQUENCE_INVALID_NAME", "Invalid sequence name [name]")
            .with_cause("Sequence names must have bucket, scope and name parts.")
            .user(UserCaused::Yes),
        CatalogEntry::new(19114, "E_SEQUENCE_READ_ONLY_REQ", "Sequences cannot be used in read-only requests")
            .with_cause("A sequence operation was sent with a GET request.")
            .with_action("Switch the request method to POST.")
            .user(UserCaused::Yes),
        CatalogEntry::new(19115, "W_SEQUENCE_CACHE_SIZE", "Cache size ([cache]) below recommended minimum")
            .with_cause("The cache option is smaller than the recommended minimum of 10.")
            .user(UserCaused::Yes)
            .warning(),
        CatalogEntry::new(19116, "E_SEQUENCE_NAME_PARTS", "Sequence name resolves to [name] - check query_context?")
            .with_cause("The sequence name does not resolve to a scope."),
        CatalogEntry::new(19117, "E_SEQUENCE_DROP_ALL", "Drop failed for sequences [names]")
            .with_cause("Deleting sequence documents failed while dropping their scope."),
        CatalogEntry::new(19118, "W_SEQUENCE_NO_PREV_VALUE", "Sequence previous value cannot be accessed before next value generation.")
            .with_cause("PREV VALUE was requested before NEXT VALUE was ever evaluated for the sequence.")
            .user(UserCaused::Yes)
            .warning(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::registry;
    use crate::error::{Severity, default_severity};

    #[test]
    fn test_builtin_codes_are_registered() {
        for entry in StaticCatalog::builtin().entries() {
            assert!(registry::lookup(entry.code).is_some(), "{}", entry.code);
        }
    }

    #[test]
    fn test_builtin_warnings_match_severity_overrides() {
        for entry in StaticCatalog::builtin().entries() {
            let advisory = default_severity(entry.code) != Severity::Exception;
            assert_eq!(entry.is_warning, advisory, "{}", entry.code);
        }
    }

    #[test]
    fn test_describe_uses_sorted_lookup() {
        let catalog = StaticCatalog::builtin();
        let entry = catalog.describe(ErrorCode(19111)).unwrap();
        assert_eq!(entry.symbol, "E_SEQUENCE_EXHAUSTED");
        assert!(catalog.describe(ErrorCode(19199)).is_none());
    }

    #[test]
    fn test_every_sequence_code_is_documented() {
        let catalog = StaticCatalog::builtin();
        for def in registry::iter_namespace(crate::error::Namespace::Sequence) {
            assert!(catalog.describe(def.code).is_some(), "{}", def.code);
        }
    }
}
