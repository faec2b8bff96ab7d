//! Persistence Layer Error Types
//!
//! Error mapping to domain types

use catalog_domain::errors::{DomainError, NotFoundError};
use thiserror::Error;

/// Errors that can occur during persistence operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Entity not found
    #[error("{entity_type} Not Found using ID {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The configured storage backend has no implementation here
    #[error("Unsupported storage backend: {0}")]
    UnsupportedBackend(String),
}

impl PersistenceError {
    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}

/// Convert persistence errors to domain errors
impl From<PersistenceError> for DomainError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound { entity_type, id } => {
                DomainError::NotFound(NotFoundError::new(id, entity_type))
            }
            PersistenceError::UnsupportedBackend(backend) => {
                DomainError::Validation(catalog_domain::ValidationError::new(format!(
                    "Unsupported storage backend: {backend}"
                )))
            }
        }
    }
}
