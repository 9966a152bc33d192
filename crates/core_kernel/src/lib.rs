//! Core Kernel - Foundational contracts for the fleet command system
//!
//! This crate provides the building blocks shared by every domain and
//! infrastructure crate:
//! - The `Versioned` entity contract for optimistically-locked records
//! - The `StorageError` taxonomy used by all store operations
//! - The `Repository` port that any backing store must honor
//! - Prefixed identifier helpers

pub mod entity;
pub mod error;
pub mod identifiers;
pub mod repository;

pub use entity::Versioned;
pub use error::StorageError;
pub use identifiers::prefixed_id;
pub use repository::Repository;
