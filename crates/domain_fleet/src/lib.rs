//! Fleet Domain
//!
//! Entity types for fleets: the fleet record persisted by the storage layer
//! and its lifecycle state enumeration. Which state transitions are legal is
//! decided by the command-handling layer, not here.

pub mod fleet;

pub use fleet::{Fleet, FleetState};
