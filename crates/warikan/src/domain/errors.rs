//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// Rejected before any repository call (empty name, non-positive amount, ...)
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Delete refused because other records still point at the entity
    #[error("{entity_type} {id} is still referenced by {referenced_by}")]
    ReferentialConstraint {
        entity_type: String,
        id: String,
        referenced_by: String,
    },

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    pub fn referenced<T: AsRef<str>, U: AsRef<str>>(
        entity_type: T,
        id: Uuid,
        referenced_by: U,
    ) -> Self {
        Self::ReferentialConstraint {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
            referenced_by: referenced_by.as_ref().to_string(),
        }
    }
}
