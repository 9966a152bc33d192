//! Resource domain errors

use thiserror::Error;

use crate::pool::ResourceType;

/// Errors from reservation arithmetic on a resource pool
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A reservation asked for more than is currently available
    #[error("insufficient {resource_type} capacity: requested {requested}, available {available}")]
    InsufficientCapacity {
        resource_type: ResourceType,
        requested: u64,
        available: u64,
    },

    /// A release asked to return more than is currently reserved
    #[error("release underflow on {resource_type}: requested {requested}, reserved {reserved}")]
    ReleaseUnderflow {
        resource_type: ResourceType,
        requested: u64,
        reserved: u64,
    },
}
