//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities. Fixtures are deterministic
//! so tests stay predictable; use `IdFixtures` when a test needs ids that
//! do not collide across cases.

use domain_command::Command;
use domain_fleet::Fleet;
use domain_resource::{ResourcePool, ResourceType};
use serde_json::json;
use uuid::Uuid;

/// Fixture for fleet test data
pub struct FleetFixtures;

impl FleetFixtures {
    /// The canonical docked fleet used across the suite
    pub fn alpha() -> Fleet {
        Fleet::new("f1", "Alpha")
    }

    /// A second fleet for multi-entity tests
    pub fn bravo() -> Fleet {
        Fleet::new("f2", "Bravo")
    }
}

/// Fixture for command test data
pub struct CommandFixtures;

impl CommandFixtures {
    /// A queued PrepareFleet command targeting the alpha fleet
    pub fn prepare_fleet() -> Command {
        Command::new("c1", "PrepareFleet", json!({ "fleetId": "f1" }))
    }

    /// A queued DeployFleet command with an empty payload
    pub fn deploy_fleet() -> Command {
        Command::new("c2", "DeployFleet", json!({}))
    }
}

/// Fixture for resource pool test data
pub struct PoolFixtures;

impl PoolFixtures {
    /// A fuel pool with plenty of stock
    pub fn fuel() -> ResourcePool {
        ResourcePool::new("pool-fuel", ResourceType::Fuel, 1000)
    }

    /// A small hyperdrive core pool for exhaustion tests
    pub fn hyperdrive_cores() -> ResourcePool {
        ResourcePool::new("pool-core", ResourceType::HyperdriveCore, 8)
    }

    /// A battle droid pool
    pub fn battle_droids() -> ResourcePool {
        ResourcePool::new("pool-droids", ResourceType::BattleDroids, 50)
    }

    /// One pool per category
    pub fn one_per_type() -> Vec<ResourcePool> {
        vec![
            Self::fuel(),
            Self::hyperdrive_cores(),
            Self::battle_droids(),
        ]
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// A fresh id guaranteed not to collide with other fixtures
    pub fn unique() -> String {
        format!("test-{}", Uuid::new_v4())
    }
}
