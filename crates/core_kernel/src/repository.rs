//! The repository port
//!
//! This module defines the storage contract that every backing store must
//! honor. The in-memory implementation lives in `infra_memory`; a future
//! database-backed adapter would implement the same trait behind the same
//! seam.
//!
//! # Optimistic locking
//!
//! Callers read an entity (observing its version), compute a replacement,
//! and submit the update with the version they observed. If another caller's
//! update interleaved and advanced the version first, the second update is
//! rejected with [`StorageError::Concurrency`] rather than silently
//! overwriting. The store never retries or merges - retry policy belongs to
//! the caller.
//!
//! # Usage
//!
//! ```rust,ignore
//! let fleet = repo.get_required("f1")?;
//! repo.update("f1", fleet.version(), &|f| {
//!     let mut next = f.clone();
//!     next.state = FleetState::Preparing;
//!     next
//! })?;
//! ```

use crate::entity::Versioned;
use crate::error::StorageError;

/// Storage contract for versioned entities.
///
/// All mutation flows through [`update`](Repository::update) and
/// [`delete`](Repository::delete); values returned by the accessors are
/// snapshots, never live references into the store. The trait is
/// object-safe so implementations can be swapped behind `dyn Repository<T>`.
pub trait Repository<T: Versioned>: Send + Sync {
    /// Inserts a new entity under its own identifier.
    ///
    /// Fails with [`StorageError::DuplicateId`] if an entity already exists
    /// at that id. No version check is performed on create; the entity is
    /// stored with whatever initial version the caller chose.
    fn create(&self, entity: T) -> Result<(), StorageError>;

    /// Returns a snapshot of the entity, or `None` if absent.
    /// The non-failing lookup.
    fn get(&self, id: &str) -> Option<T>;

    /// Returns a snapshot of the entity, or [`StorageError::NotFound`] if
    /// absent.
    fn get_required(&self, id: &str) -> Result<T, StorageError>;

    /// Replaces the entity under `id` with the updater's result, stamped at
    /// `expected_version + 1`.
    ///
    /// Fails with [`StorageError::NotFound`] if absent, or
    /// [`StorageError::Concurrency`] if the stored version differs from
    /// `expected_version`. The updater receives the current entity and
    /// returns the replacement value; the store overwrites the replacement's
    /// version authoritatively, so updaters need not (and cannot usefully)
    /// set it themselves. Returns the stored replacement.
    fn update(
        &self,
        id: &str,
        expected_version: u64,
        updater: &dyn Fn(&T) -> T,
    ) -> Result<T, StorageError>;

    /// Removes the entity under `id`.
    ///
    /// Fails with [`StorageError::NotFound`] if absent. When
    /// `expected_version` is supplied and differs from the stored version,
    /// fails with [`StorageError::Concurrency`] and leaves the entity in
    /// place; `None` deletes unconditionally.
    fn delete(&self, id: &str, expected_version: Option<u64>) -> Result<(), StorageError>;

    /// Removes all entries unconditionally. Administrative/test reset; no
    /// concurrency check.
    fn clear(&self);
}
