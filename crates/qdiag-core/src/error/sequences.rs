//! Sequence error family (19100-19199)

use super::args::{ErrorArg, family_error};
use super::codes::{ErrorCode, ErrorDef, sequence};
use super::types::QueryError;

/// Conditions raised by sequence DDL and value generation.
///
/// Every member shares [`family_error`]: call sites pass names, values and an
/// optional underlying error as [`ErrorArg`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceError {
    NotEnabled,
    Create,
    Alter,
    Drop,
    InvalidRange,
    InvalidCache,
    NotFound,
    Generic,
    AlreadyExists,
    Metakv,
    InvalidData,
    Exhausted,
    Cycle,
    InvalidName,
    ReadOnlyRequest,
    CacheSize,
    NameParts,
    DropAll,
    NoPrevValue,
}

impl SequenceError {
    pub const ALL: [SequenceError; 19] = [
        SequenceError::NotEnabled,
        SequenceError::Create,
        SequenceError::Alter,
        SequenceError::Drop,
        SequenceError::InvalidRange,
        SequenceError::InvalidCache,
        SequenceError::NotFound,
        SequenceError::Generic,
        SequenceError::AlreadyExists,
        SequenceError::Metakv,
        SequenceError::InvalidData,
        SequenceError::Exhausted,
        SequenceError::Cycle,
        SequenceError::InvalidName,
        SequenceError::ReadOnlyRequest,
        SequenceError::CacheSize,
        SequenceError::NameParts,
        SequenceError::DropAll,
        SequenceError::NoPrevValue,
    ];

    pub fn def(self) -> &'static ErrorDef {
        match self {
            SequenceError::NotEnabled => &sequence::NOT_ENABLED,
            SequenceError::Create => &sequence::CREATE,
            SequenceError::Alter => &sequence::ALTER,
            SequenceError::Drop => &sequence::DROP,
            SequenceError::InvalidRange => &sequence::INVALID_RANGE,
            SequenceError::InvalidCache => &sequence::INVALID_CACHE,
            SequenceError::NotFound => &sequence::NOT_FOUND,
            SequenceError::Generic => &sequence::GENERIC,
            SequenceError::AlreadyExists => &sequence::ALREADY_EXISTS,
            SequenceError::Metakv => &sequence::METAKV,
            SequenceError::InvalidData => &sequence::INVALID_DATA,
            SequenceError::Exhausted => &sequence::EXHAUSTED,
            SequenceError::Cycle => &sequence::CYCLE,
            SequenceError::InvalidName => &sequence::INVALID_NAME,
            SequenceError::ReadOnlyRequest => &sequence::READ_ONLY_REQUEST,
            SequenceError::CacheSize => &sequence::CACHE_SIZE_WARNING,
            SequenceError::NameParts => &sequence::NAME_PARTS,
            SequenceError::DropAll => &sequence::DROP_ALL,
            SequenceError::NoPrevValue => &sequence::NO_PREV_VALUE_WARNING,
        }
    }

    /// Message template; `{}` marks each format argument
    pub fn template(self) -> &'static str {
        match self {
            SequenceError::NotEnabled => "Sequence support is not enabled for {}",
            SequenceError::Create => "Create failed for sequence '{}'",
            SequenceError::Alter => "Alter failed for sequence '{}'",
            SequenceError::Drop => "Drop failed for sequence '{}'",
            SequenceError::InvalidRange => "Invalid range {}",
            SequenceError::InvalidCache => "Invalid cache value {}",
            SequenceError::NotFound => "Sequence '{}' not found",
            SequenceError::Generic => "Error accessing sequence",
            SequenceError::AlreadyExists => "Sequence '{}' already exists",
            SequenceError::Metakv => "Error accessing sequences cache monitor data",
            SequenceError::InvalidData => "Invalid sequence data",
            SequenceError::Exhausted => "Sequence '{}' has reached its limit",
            SequenceError::Cycle => "Cycle failed for sequence '{}'",
            SequenceError::InvalidName => "Invalid sequence name '{}'",
            SequenceError::ReadOnlyRequest => "Sequences cannot be used in read-only requests",
            SequenceError::CacheSize => "Cache size ({}) below recommended minimum",
            SequenceError::NameParts => "Sequence name resolves to '{}' - check query_context?",
            SequenceError::DropAll => "Drop failed for sequences {}",
            SequenceError::NoPrevValue => {
                "Sequence previous value cannot be accessed before next value generation."
            }
        }
    }

    pub fn from_code(code: ErrorCode) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.def().code == code)
    }

    /// Build the error for this condition from call-site arguments.
    ///
    /// # Panics
    ///
    /// Panics on an [`ErrorArg::Unsupported`] argument.
    #[track_caller]
    pub fn error<I>(self, args: I) -> QueryError
    where
        I: IntoIterator<Item = ErrorArg>,
    {
        family_error(self.def(), self.template(), args)
    }
}

impl From<SequenceError> for ErrorCode {
    fn from(kind: SequenceError) -> Self {
        kind.def().code
    }
}
