//! Resource pool records

use std::fmt;

use serde::{Deserialize, Serialize};

use core_kernel::{prefixed_id, Versioned};

use crate::error::ResourceError;

/// The fixed set of resource categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Fuel,
    HyperdriveCore,
    BattleDroids,
}

impl ResourceType {
    /// Every category, in a stable order. The set is small and fixed;
    /// storage scans rely on that.
    pub const ALL: [ResourceType; 3] = [
        ResourceType::Fuel,
        ResourceType::HyperdriveCore,
        ResourceType::BattleDroids,
    ];

    /// The wire name, as exchanged with the HTTP layer
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Fuel => "FUEL",
            ResourceType::HyperdriveCore => "HYPERDRIVE_CORE",
            ResourceType::BattleDroids => "BATTLE_DROIDS",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource pool record persisted with optimistic locking
///
/// Tracks the total stock of one resource category and the amount currently
/// reserved. The storage layer guarantees atomic version-checked replacement
/// only; `reserved <= total` is kept true by routing all arithmetic through
/// [`reserve`](ResourcePool::reserve) and
/// [`release`](ResourcePool::release) inside updaters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    /// Unique identifier
    pub id: String,
    /// Optimistic-locking version counter
    pub version: u64,
    /// The category this pool stocks
    pub resource_type: ResourceType,
    /// Total stock
    pub total: u64,
    /// Amount currently reserved
    pub reserved: u64,
}

/// Read-only view of resource availability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAvailability {
    pub resource_type: ResourceType,
    pub total: u64,
    pub reserved: u64,
    pub available: u64,
}

impl ResourcePool {
    /// Creates a new pool at version 1 with nothing reserved
    pub fn new(id: impl Into<String>, resource_type: ResourceType, total: u64) -> Self {
        Self {
            id: id.into(),
            version: 1,
            resource_type,
            total,
            reserved: 0,
        }
    }

    /// Mints a fresh pool identifier (`POOL-…`)
    pub fn next_id() -> String {
        prefixed_id("POOL")
    }

    /// Unreserved stock
    pub fn available(&self) -> u64 {
        self.total.saturating_sub(self.reserved)
    }

    /// The availability read view for this pool
    pub fn availability(&self) -> ResourceAvailability {
        ResourceAvailability {
            resource_type: self.resource_type,
            total: self.total,
            reserved: self.reserved,
            available: self.available(),
        }
    }

    /// Reserves `quantity` units, failing without change if fewer are
    /// available
    pub fn reserve(&mut self, quantity: u64) -> Result<(), ResourceError> {
        let available = self.available();
        if quantity > available {
            return Err(ResourceError::InsufficientCapacity {
                resource_type: self.resource_type,
                requested: quantity,
                available,
            });
        }
        self.reserved += quantity;
        Ok(())
    }

    /// Returns `quantity` reserved units to the pool, failing without change
    /// if fewer are reserved
    pub fn release(&mut self, quantity: u64) -> Result<(), ResourceError> {
        if quantity > self.reserved {
            return Err(ResourceError::ReleaseUnderflow {
                resource_type: self.resource_type,
                requested: quantity,
                reserved: self.reserved,
            });
        }
        self.reserved -= quantity;
        Ok(())
    }
}

impl Versioned for ResourcePool {
    const KIND: &'static str = "ResourcePool";

    fn id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn set_version(&mut self, version: u64) {
        self.version = version;
    }
}
