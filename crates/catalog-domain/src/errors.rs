//! Domain errors for the catalog

use thiserror::Error;

use crate::validation::{EntityValidationError, ValidationError};
use crate::value_objects::InvalidUuidError;

/// Raised by store operations that target an identifier with no record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{entity_type} Not Found using ID {id}")]
pub struct NotFoundError {
    pub entity_type: String,
    pub id: String,
}

impl NotFoundError {
    pub fn new(id: impl ToString, entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }
}

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error(transparent)]
    InvalidUuid(#[from] InvalidUuidError),

    #[error(transparent)]
    EntityValidation(#[from] EntityValidationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity_and_id() {
        let err = NotFoundError::new("b94d0fe4-1645-4b91-83e7-c3378319362f", "Category");
        assert_eq!(
            err.to_string(),
            "Category Not Found using ID b94d0fe4-1645-4b91-83e7-c3378319362f"
        );
    }

    #[test]
    fn test_not_found_converts_to_domain_error() {
        let err: DomainError = NotFoundError::new("123", "Category").into();
        assert!(matches!(err, DomainError::NotFound(ref e) if e.id == "123"));
    }
}
