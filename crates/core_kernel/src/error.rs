//! Storage error types
//!
//! This module defines the failure taxonomy shared by every store operation.
//! All three kinds carry the offending entity's kind label and identifier,
//! so callers can map them to transport-level responses without re-deriving
//! context.

use thiserror::Error;

/// Errors that can occur during store operations
///
/// Exactly three failure kinds originate from the storage layer. Anything
/// else (a poisoned lock, an updater changing an entity's id) is a
/// programming error and is treated as fatal rather than translated into
/// this taxonomy.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An operation addressed an identifier with no live entity
    #[error("{kind} not found: {id}")]
    NotFound {
        kind: &'static str,
        id: String,
    },

    /// A create was attempted with an identifier that already exists.
    /// Create never overwrites.
    #[error("{kind} already exists: {id}")]
    DuplicateId {
        kind: &'static str,
        id: String,
    },

    /// An update or delete carried a stale expected version. The expected,
    /// recoverable case under contention; retry-with-fresh-read is the
    /// caller's responsibility.
    #[error("concurrency conflict on {kind} {id}: expected version {expected} but was {actual}")]
    Concurrency {
        kind: &'static str,
        id: String,
        expected: u64,
        actual: u64,
    },
}

impl StorageError {
    /// Creates a NotFound error
    ///
    /// # Arguments
    ///
    /// * `kind` - The entity kind label (e.g. `"Fleet"`)
    /// * `id` - The identifier that was not found
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        StorageError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Creates a DuplicateId error
    pub fn duplicate(kind: &'static str, id: impl Into<String>) -> Self {
        StorageError::DuplicateId {
            kind,
            id: id.into(),
        }
    }

    /// Creates a Concurrency error carrying both the version the caller
    /// expected and the version actually stored
    pub fn conflict(
        kind: &'static str,
        id: impl Into<String>,
        expected: u64,
        actual: u64,
    ) -> Self {
        StorageError::Concurrency {
            kind,
            id: id.into(),
            expected,
            actual,
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }

    /// Returns true if this error indicates a duplicate identifier on create
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StorageError::DuplicateId { .. })
    }

    /// Returns true if this error indicates a version conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, StorageError::Concurrency { .. })
    }

    /// The identifier of the entity the failed operation addressed
    pub fn entity_id(&self) -> &str {
        match self {
            StorageError::NotFound { id, .. }
            | StorageError::DuplicateId { id, .. }
            | StorageError::Concurrency { id, .. } => id,
        }
    }

    /// The kind label of the entity the failed operation addressed
    pub fn entity_kind(&self) -> &'static str {
        match self {
            StorageError::NotFound { kind, .. }
            | StorageError::DuplicateId { kind, .. }
            | StorageError::Concurrency { kind, .. } => kind,
        }
    }
}
