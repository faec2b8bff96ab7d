//! Application layer error types
//!
//! These errors represent application-level failures that are suitable
//! for API/UI consumption. They wrap domain errors with additional context.

use catalog_domain::{
    errors::{DomainError, NotFoundError},
    validation::EntityValidationError,
};
use thiserror::Error;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    // === Validation Errors ===

    /// Identifier is not a well-formed UUID
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Entity failed field validation; the field map is kept for callers
    #[error("Validation failed: {}", summarize(.0))]
    EntityValidation(EntityValidationError),

    // === Not Found Errors ===

    #[error(transparent)]
    NotFound(NotFoundError),

    // === Domain Error Wrapper ===

    /// Wrapped domain error
    #[error("Domain error: {0}")]
    Domain(String),
}

impl ApplicationError {
    /// Field messages of a validation failure
    pub fn field_errors(&self) -> Option<&EntityValidationError> {
        match self {
            ApplicationError::EntityValidation(err) => Some(err),
            _ => None,
        }
    }
}

fn summarize(err: &EntityValidationError) -> String {
    err.errors()
        .iter()
        .flat_map(|(_, messages)| messages.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<EntityValidationError> for ApplicationError {
    fn from(err: EntityValidationError) -> Self {
        ApplicationError::EntityValidation(err)
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidUuid(e) => ApplicationError::InvalidIdentifier(e.to_string()),
            DomainError::EntityValidation(e) => ApplicationError::EntityValidation(e),
            DomainError::NotFound(e) => ApplicationError::NotFound(e),
            other => ApplicationError::Domain(other.to_string()),
        }
    }
}
