//! Command records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{prefixed_id, Versioned};

/// Processing status of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandStatus {
    /// Accepted, waiting to be picked up
    Queued,
    /// Currently being processed
    Processing,
    /// Finished successfully
    Succeeded,
    /// Finished with an error
    Failed,
}

impl CommandStatus {
    /// Returns true once the command can no longer change status
    pub fn is_terminal(&self) -> bool {
        matches!(self, CommandStatus::Succeeded | CommandStatus::Failed)
    }
}

/// A command record persisted with optimistic locking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Unique identifier
    pub id: String,
    /// Optimistic-locking version counter
    pub version: u64,
    /// Command kind, e.g. `"PrepareFleet"`
    #[serde(rename = "type")]
    pub command_type: String,
    /// Processing status
    pub status: CommandStatus,
    /// Opaque payload, interpreted by the command processor
    pub payload: serde_json::Value,
    /// Number of processing attempts so far
    pub attempt_count: u32,
    /// When the command was accepted
    pub issued_at: DateTime<Utc>,
}

impl Command {
    /// Creates a new queued command at version 1 with no attempts
    pub fn new(
        id: impl Into<String>,
        command_type: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            version: 1,
            command_type: command_type.into(),
            status: CommandStatus::Queued,
            payload,
            attempt_count: 0,
            issued_at: Utc::now(),
        }
    }

    /// Mints a fresh command identifier (`CMD-…`)
    pub fn next_id() -> String {
        prefixed_id("CMD")
    }

    /// Records one processing attempt
    pub fn record_attempt(&mut self) {
        self.attempt_count += 1;
    }
}

impl Versioned for Command {
    const KIND: &'static str = "Command";

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
