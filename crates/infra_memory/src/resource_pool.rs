//! Resource pool repository
//!
//! Same CRUD and locking contract as the generic store, restricted to
//! [`ResourcePool`], plus lookup by resource category. Category lookup is a
//! linear scan in id order: the category set is fixed at three, so scan cost
//! is bounded by pool count, not request count. A production-scale variant
//! would maintain a type-to-id index on create/delete instead.

use tracing::debug;

use core_kernel::{Repository, StorageError};
use domain_resource::{ResourceAvailability, ResourcePool, ResourceType};

use crate::repository::InMemoryRepository;

/// In-memory store for resource pools
///
/// Wraps the generic repository and adds
/// [`get_by_type`](InMemoryResourcePoolRepository::get_by_type). If two
/// pools ever share a category, the one with the lexicographically smallest
/// id wins the lookup - the scan order is the id order of the backing map.
#[derive(Debug, Default)]
pub struct InMemoryResourcePoolRepository {
    inner: InMemoryRepository<ResourcePool>,
}

impl InMemoryResourcePoolRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self {
            inner: InMemoryRepository::new(),
        }
    }

    /// Returns a snapshot of the pool stocking `resource_type`, or `None`
    /// if no pool of that category exists
    pub fn get_by_type(&self, resource_type: ResourceType) -> Option<ResourcePool> {
        let pool = self.inner.find_one(|p| p.resource_type == resource_type);
        debug!(
            resource_type = %resource_type,
            found = pool.is_some(),
            "pool lookup by type"
        );
        pool
    }

    /// The availability read view for the pool stocking `resource_type`,
    /// or `None` if no pool of that category exists
    pub fn availability(&self, resource_type: ResourceType) -> Option<ResourceAvailability> {
        self.get_by_type(resource_type).map(|p| p.availability())
    }

    /// Number of live pools
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if no pools are stored
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Repository<ResourcePool> for InMemoryResourcePoolRepository {
    fn create(&self, entity: ResourcePool) -> Result<(), StorageError> {
        self.inner.create(entity)
    }

    fn get(&self, id: &str) -> Option<ResourcePool> {
        self.inner.get(id)
    }

    fn get_required(&self, id: &str) -> Result<ResourcePool, StorageError> {
        self.inner.get_required(id)
    }

    fn update(
        &self,
        id: &str,
        expected_version: u64,
        updater: &dyn Fn(&ResourcePool) -> ResourcePool,
    ) -> Result<ResourcePool, StorageError> {
        self.inner.update(id, expected_version, updater)
    }

    fn delete(&self, id: &str, expected_version: Option<u64>) -> Result<(), StorageError> {
        self.inner.delete(id, expected_version)
    }

    fn clear(&self) {
        self.inner.clear()
    }
}
