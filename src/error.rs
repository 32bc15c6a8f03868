use thiserror::Error;

use crate::types::RecordId;

/// Unified error type for the map.
///
/// Looking up a key that isn't there is never an error; those operations
/// return `Ok(None)` / `Ok(false)`. The variants here are either caller
/// mistakes (`EmptyKey`) or internal faults, which mean the namespace
/// indexes and the record store have drifted apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A namespace index points at a record the store doesn't have.
    #[error("internal library error: index entry points at missing record {0}")]
    MissingRecord(RecordId),
    /// A record and the namespace indexes disagree about one of its keys.
    #[error("internal library error: record {record} is not indexed consistently: {detail}")]
    Unindexed { record: RecordId, detail: String },
    /// `set` was called with a composite key that names no namespace.
    #[error("composite key must name at least one namespace")]
    EmptyKey,
}

impl Error {
    /// True for faults inside the map itself, false for caller errors.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::MissingRecord(_) | Error::Unindexed { .. })
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
