//! Persistence context
//!
//! The single seam through which the application acquires storage. Each
//! context instance bundles one fresh repository per entity kind; two
//! instances never share state, which is what makes per-test isolation and
//! per-process setup the same code path.

use domain_command::Command;
use domain_fleet::Fleet;

use crate::repository::InMemoryRepository;
use crate::resource_pool::InMemoryResourcePoolRepository;

/// Store for fleet records
pub type FleetRepository = InMemoryRepository<Fleet>;

/// Store for command records
pub type CommandRepository = InMemoryRepository<Command>;

/// Store for resource pools
pub type ResourcePoolRepository = InMemoryResourcePoolRepository;

/// Holds all repositories for one storage instance.
///
/// Create one at application startup, or one per test for an isolated
/// store. In production the in-memory repositories would be swapped for
/// database-backed implementations of the same `Repository` contract.
#[derive(Debug, Default)]
pub struct PersistenceContext {
    pub fleets: FleetRepository,
    pub commands: CommandRepository,
    pub resource_pools: ResourcePoolRepository,
}

impl PersistenceContext {
    /// Returns a new context with empty, disjoint stores
    pub fn new() -> Self {
        Self::default()
    }
}
