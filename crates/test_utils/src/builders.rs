//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest.

use domain_command::{Command, CommandStatus};
use domain_fleet::{Fleet, FleetState};
use domain_resource::{ResourcePool, ResourceType};
use serde_json::json;

/// Builder for fleet test data
pub struct FleetBuilder {
    id: String,
    name: String,
    state: FleetState,
    version: u64,
}

impl Default for FleetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FleetBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: "f1".to_string(),
            name: "Alpha".to_string(),
            state: FleetState::Docked,
            version: 1,
        }
    }

    /// Sets the fleet id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the fleet name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the lifecycle state
    pub fn with_state(mut self, state: FleetState) -> Self {
        self.state = state;
        self
    }

    /// Sets the initial version
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Builds the fleet
    pub fn build(self) -> Fleet {
        let mut fleet = Fleet::new(self.id, self.name);
        fleet.state = self.state;
        fleet.version = self.version;
        fleet
    }
}

/// Builder for command test data
pub struct CommandBuilder {
    id: String,
    command_type: String,
    status: CommandStatus,
    payload: serde_json::Value,
    version: u64,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: "c1".to_string(),
            command_type: "PrepareFleet".to_string(),
            status: CommandStatus::Queued,
            payload: json!({}),
            version: 1,
        }
    }

    /// Sets the command id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the command type
    pub fn with_type(mut self, command_type: impl Into<String>) -> Self {
        self.command_type = command_type.into();
        self
    }

    /// Sets the processing status
    pub fn with_status(mut self, status: CommandStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the payload
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// Sets the initial version
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Builds the command
    pub fn build(self) -> Command {
        let mut command = Command::new(self.id, self.command_type, self.payload);
        command.status = self.status;
        command.version = self.version;
        command
    }
}

/// Builder for resource pool test data
pub struct ResourcePoolBuilder {
    id: String,
    resource_type: ResourceType,
    total: u64,
    reserved: u64,
    version: u64,
}

impl Default for ResourcePoolBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourcePoolBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: "pool-fuel".to_string(),
            resource_type: ResourceType::Fuel,
            total: 1000,
            reserved: 0,
            version: 1,
        }
    }

    /// Sets the pool id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the resource category
    pub fn with_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = resource_type;
        self
    }

    /// Sets the total stock
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    /// Sets the reserved amount
    pub fn with_reserved(mut self, reserved: u64) -> Self {
        self.reserved = reserved;
        self
    }

    /// Sets the initial version
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Builds the pool
    pub fn build(self) -> ResourcePool {
        let mut pool = ResourcePool::new(self.id, self.resource_type, self.total);
        pool.reserved = self.reserved;
        pool.version = self.version;
        pool
    }
}
