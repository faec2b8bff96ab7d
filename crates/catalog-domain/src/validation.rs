//! Field-level validation for domain entities
//!
//! Rules are declared with [`ValidatorRules`] and recorded into a
//! [`Notification`]. A notification only turns into an
//! [`EntityValidationError`] when at least one field failed, so an empty
//! aggregate is never raised.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field name to the ordered list of violated rule messages
pub type FieldsErrors = BTreeMap<String, Vec<String>>;

/// Aggregate of every failing field of an entity
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("Validation Error")]
pub struct EntityValidationError {
    errors: FieldsErrors,
}

impl EntityValidationError {
    pub fn errors(&self) -> &FieldsErrors {
        &self.errors
    }

    /// Messages recorded for one field, in rule evaluation order
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Number of distinct fields with errors
    pub fn count(&self) -> usize {
        self.errors.len()
    }

    pub fn into_errors(self) -> FieldsErrors {
        self.errors
    }
}

/// Unstructured, single-message validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Collects field errors while rules are evaluated
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Notification {
    errors: FieldsErrors,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// `Err` with every recorded field, or `Ok` when nothing failed
    pub fn into_result(self) -> Result<(), EntityValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(EntityValidationError {
                errors: self.errors,
            })
        }
    }
}

/// Fluent rule chain for a single field value
///
/// Once a rule fails the remaining rules of the chain are skipped, so a
/// field reports the first violation of each chain.
pub struct ValidatorRules<'a, T: ?Sized> {
    value: Option<&'a T>,
    field: &'a str,
    notification: &'a mut Notification,
    failed: bool,
}

impl<'a, T: ?Sized> ValidatorRules<'a, T> {
    pub fn values(
        value: Option<&'a T>,
        field: &'a str,
        notification: &'a mut Notification,
    ) -> Self {
        Self {
            value,
            field,
            notification,
            failed: false,
        }
    }

    fn check(mut self, valid: impl FnOnce(Option<&'a T>) -> bool, message: impl fmt::Display) -> Self {
        if !self.failed && !valid(self.value) {
            self.notification.add_error(self.field, message.to_string());
            self.failed = true;
        }
        self
    }
}

impl<'a> ValidatorRules<'a, str> {
    pub fn required(self) -> Self {
        let message = format!("{} should not be empty", self.field);
        self.check(|value| value.is_some_and(|v| !v.trim().is_empty()), message)
    }

    /// Absent values pass; length is counted in characters
    pub fn max_length(self, max: usize) -> Self {
        let message = format!(
            "{} must be shorter than or equal to {} characters",
            self.field, max
        );
        self.check(|value| value.map_or(true, |v| v.chars().count() <= max), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_notification_is_ok() {
        assert!(Notification::new().into_result().is_ok());
    }

    #[test]
    fn test_required_rejects_empty_and_missing() {
        let mut notification = Notification::new();
        ValidatorRules::values(Some(""), "name", &mut notification).required();
        ValidatorRules::<str>::values(None, "title", &mut notification).required();

        let err = notification.into_result().unwrap_err();
        assert_eq!(err.count(), 2);
        assert_eq!(err.field("name").unwrap(), ["name should not be empty"]);
        assert_eq!(err.field("title").unwrap(), ["title should not be empty"]);
    }

    #[test]
    fn test_chain_stops_at_first_failure() {
        let mut notification = Notification::new();
        ValidatorRules::values(Some(""), "name", &mut notification)
            .required()
            .max_length(0);

        let err = notification.into_result().unwrap_err();
        assert_eq!(err.field("name").unwrap().len(), 1);
    }

    #[test]
    fn test_max_length_counts_characters() {
        let mut notification = Notification::new();
        ValidatorRules::values(Some("ééé"), "name", &mut notification).max_length(3);
        assert!(!notification.has_errors());

        ValidatorRules::values(Some("abcd"), "name", &mut notification).max_length(3);
        let err = notification.into_result().unwrap_err();
        assert_eq!(
            err.field("name").unwrap(),
            ["name must be shorter than or equal to 3 characters"]
        );
    }

    #[test]
    fn test_messages_keep_rule_order_per_field() {
        let mut notification = Notification::new();
        notification.add_error("name", "first");
        notification.add_error("name", "second");

        let err = notification.into_result().unwrap_err();
        assert_eq!(err.count(), 1);
        assert_eq!(err.field("name").unwrap(), ["first", "second"]);
    }
}
