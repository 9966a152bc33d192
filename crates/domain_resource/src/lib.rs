//! Resource Domain
//!
//! Entity types for resource pools: the pool record persisted by the storage
//! layer, the availability read view, and the reservation arithmetic that
//! keeps `reserved <= total`. The storage layer never validates pool
//! amounts - callers enforce the invariant through these methods inside
//! their updaters.

pub mod error;
pub mod pool;

pub use error::ResourceError;
pub use pool::{ResourceAvailability, ResourcePool, ResourceType};
