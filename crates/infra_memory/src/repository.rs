//! Generic in-memory repository with optimistic locking
//!
//! The store is an id-ordered map behind an `RwLock`. Reads take the shared
//! lock and clone; `update` and `delete` hold the exclusive lock across the
//! whole check-version-then-write sequence, which makes the compare-and-swap
//! atomic with respect to every other operation on the same repository.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use core_kernel::{Repository, StorageError, Versioned};

/// In-memory store implementing the [`Repository`] contract for any
/// [`Versioned`] entity.
///
/// - `create()` fails if the id already exists.
/// - `update()` applies the updater only if the stored version matches the
///   expected version, then stamps the result at `expected + 1`.
/// - `delete()` takes an optional expected version for optimistic delete.
/// - `clear()` removes all entries (administrative/test reset).
///
/// Each instance privately owns its backing map; two repositories never
/// share storage.
#[derive(Debug)]
pub struct InMemoryRepository<T: Versioned> {
    store: RwLock<BTreeMap<String, T>>,
}

impl<T: Versioned> InMemoryRepository<T> {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self {
            store: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.read_store().len()
    }

    /// Returns true if no entities are stored
    pub fn is_empty(&self) -> bool {
        self.read_store().is_empty()
    }

    /// Returns a snapshot of the first entity (in id order) matching the
    /// predicate, or `None`.
    ///
    /// A full scan; callers are expected to use it only where the match set
    /// is bounded by something other than entity count, such as the fixed
    /// resource categories.
    pub fn find_one(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.read_store().values().find(|e| predicate(e)).cloned()
    }

    // A poisoned lock means a writer panicked mid-mutation; the map can no
    // longer be trusted, so this is fatal.
    fn read_store(&self) -> RwLockReadGuard<'_, BTreeMap<String, T>> {
        self.store.read().expect("repository lock poisoned")
    }

    fn write_store(&self) -> RwLockWriteGuard<'_, BTreeMap<String, T>> {
        self.store.write().expect("repository lock poisoned")
    }
}

impl<T: Versioned> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Versioned> Repository<T> for InMemoryRepository<T> {
    fn create(&self, entity: T) -> Result<(), StorageError> {
        let mut store = self.write_store();
        if store.contains_key(entity.id()) {
            return Err(StorageError::duplicate(T::KIND, entity.id()));
        }
        debug!(kind = T::KIND, id = entity.id(), version = entity.version(), "entity created");
        store.insert(entity.id().to_owned(), entity);
        Ok(())
    }

    fn get(&self, id: &str) -> Option<T> {
        self.read_store().get(id).cloned()
    }

    fn get_required(&self, id: &str) -> Result<T, StorageError> {
        self.get(id)
            .ok_or_else(|| StorageError::not_found(T::KIND, id))
    }

    fn update(
        &self,
        id: &str,
        expected_version: u64,
        updater: &dyn Fn(&T) -> T,
    ) -> Result<T, StorageError> {
        let mut store = self.write_store();
        let current = store
            .get(id)
            .ok_or_else(|| StorageError::not_found(T::KIND, id))?;
        if current.version() != expected_version {
            return Err(StorageError::conflict(
                T::KIND,
                id,
                expected_version,
                current.version(),
            ));
        }

        let mut updated = updater(current);
        // The stored key and the stamped version are authoritative,
        // whatever the updater returned.
        updated.set_version(expected_version + 1);
        debug_assert_eq!(updated.id(), id, "updater must not change the entity id");

        debug!(kind = T::KIND, id, version = updated.version(), "entity updated");
        store.insert(id.to_owned(), updated.clone());
        Ok(updated)
    }

    fn delete(&self, id: &str, expected_version: Option<u64>) -> Result<(), StorageError> {
        let mut store = self.write_store();
        let current = store
            .get(id)
            .ok_or_else(|| StorageError::not_found(T::KIND, id))?;
        if let Some(expected) = expected_version {
            if current.version() != expected {
                return Err(StorageError::conflict(T::KIND, id, expected, current.version()));
            }
        }
        store.remove(id);
        debug!(kind = T::KIND, id, "entity deleted");
        Ok(())
    }

    fn clear(&self) {
        let mut store = self.write_store();
        let count = store.len();
        store.clear();
        debug!(kind = T::KIND, count, "repository cleared");
    }
}
