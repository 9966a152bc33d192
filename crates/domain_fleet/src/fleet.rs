//! Fleet records and lifecycle states

use serde::{Deserialize, Serialize};

use core_kernel::{prefixed_id, Versioned};

/// Lifecycle states of a fleet
///
/// Transition legality (e.g. only a `Ready` fleet may deploy) is enforced by
/// the command handlers that submit updates, not by the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FleetState {
    /// At dock, idle
    Docked,
    /// Reserving resources and loading out
    Preparing,
    /// Prepared and awaiting deployment
    Ready,
    /// Deployed into the field
    Deployed,
    /// Engaged in battle
    InBattle,
    /// Battle won
    Victorious,
    /// Battle lost, fleet destroyed
    Destroyed,
    /// Preparation failed (e.g. insufficient resources)
    FailedPreparation,
}

/// A fleet record persisted with optimistic locking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fleet {
    /// Unique identifier
    pub id: String,
    /// Optimistic-locking version counter
    pub version: u64,
    /// Display name
    pub name: String,
    /// Current lifecycle state
    pub state: FleetState,
}

impl Fleet {
    /// Creates a new fleet at version 1, docked
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: 1,
            name: name.into(),
            state: FleetState::Docked,
        }
    }

    /// Mints a fresh fleet identifier (`FLT-…`)
    pub fn next_id() -> String {
        prefixed_id("FLT")
    }
}

impl Versioned for Fleet {
    const KIND: &'static str = "Fleet";

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
