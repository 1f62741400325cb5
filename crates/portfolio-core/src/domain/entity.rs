//! Domain Layer - Core Entity Trait
//!
//! Every content record has an identifier that is unique within its
//! collection and stable across renders.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core trait for all content records
pub trait Entity: Clone {
    /// The type of the record's unique identifier
    type Id: Clone + Eq + Hash + Debug;

    /// Returns the record's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Parse(err.to_string())
    }
}
