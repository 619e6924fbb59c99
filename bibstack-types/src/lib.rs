//! Core type definitions for bibstack.
//!
//! This crate defines the fundamental, strategy-agnostic types used
//! throughout the record and grouping layers:
//! - [`Field`], an opaque identifier for one attribute of an entry
//! - [`EntryId`], the entry identifier (UUID v7)
//!
//! Domain-specific structures (entries, author lists, group matchers)
//! belong in their respective crates, not here.

mod field;
mod ids;

pub use field::Field;
pub use ids::EntryId;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("field name must not be empty")]
    EmptyFieldName,
}
