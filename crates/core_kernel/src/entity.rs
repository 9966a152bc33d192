//! The versioned entity contract
//!
//! Every record stored in a repository carries an opaque string identifier
//! and a version counter. Repositories use the version to detect concurrent
//! modification: an update submitted with a stale version is rejected rather
//! than silently overwriting.

use std::fmt;

/// Capability bound for entities stored with optimistic locking.
///
/// Implementors expose their identifier and version; the repository is the
/// only component that calls [`set_version`](Versioned::set_version) - it
/// stamps the authoritative version after a successful update, so entities
/// and updaters never manage the counter themselves.
pub trait Versioned: fmt::Debug + Clone + Send + Sync + 'static {
    /// Entity kind label used in error messages and log events
    /// (e.g. `"Fleet"`).
    const KIND: &'static str;

    /// The opaque unique identifier. Unique among live entities within one
    /// repository instance.
    fn id(&self) -> &str;

    /// The current version counter. Starts at the caller-supplied value
    /// (typically 1) and increases by exactly 1 on every successful update.
    fn version(&self) -> u64;

    /// Overwrites the version counter. Reserved for repository use.
    fn set_version(&mut self, version: u64);
}
