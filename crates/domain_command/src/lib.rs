//! Command Domain
//!
//! Entity types for the command queue: command records with an opaque JSON
//! payload, a processing status, and attempt bookkeeping. Status transition
//! legality is decided by the command processor, not here.

pub mod command;

pub use command::{Command, CommandStatus};
