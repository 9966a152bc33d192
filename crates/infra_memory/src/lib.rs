//! In-Memory Storage Infrastructure
//!
//! This crate provides the in-memory implementation of the storage contract
//! defined in `core_kernel`: a generic optimistic-locking repository, a
//! specialized resource-pool repository with lookup-by-type, and the
//! persistence context that bundles one fresh repository per entity kind.
//!
//! # Concurrency
//!
//! Every operation is synchronous and in-memory. Each repository guards its
//! backing map with an `RwLock`; the whole check-version-then-write sequence
//! of an update or delete runs under a single write guard, so it is atomic
//! with respect to every other operation. Callers only ever receive cloned
//! snapshots - the backing map is never exposed.
//!
//! # Example
//!
//! ```rust,ignore
//! use core_kernel::Repository;
//! use infra_memory::PersistenceContext;
//!
//! let ctx = PersistenceContext::new();
//! ctx.fleets.create(Fleet::new("f1", "Alpha"))?;
//! ctx.fleets.update("f1", 1, &|f| {
//!     let mut next = f.clone();
//!     next.state = FleetState::Preparing;
//!     next
//! })?;
//! ```

pub mod context;
pub mod repository;
pub mod resource_pool;

pub use context::{CommandRepository, FleetRepository, PersistenceContext, ResourcePoolRepository};
pub use repository::InMemoryRepository;
pub use resource_pool::InMemoryResourcePoolRepository;
