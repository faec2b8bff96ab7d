//! Value objects representing immutable domain concepts

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Structural equality for immutable values
///
/// Implementors compare by the value of their fields (`PartialEq`), never by
/// identity. [`ValueObject::equals`] additionally accepts an absent or
/// differently typed operand, which is simply unequal.
pub trait ValueObject: PartialEq + Clone + fmt::Debug + 'static {
    fn equals(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|other| other.downcast_ref::<Self>())
            .is_some_and(|other| self == other)
    }
}

/// Raised when an identifier is built from malformed text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidUuidError {
    message: String,
}

impl Default for InvalidUuidError {
    fn default() -> Self {
        Self {
            message: "ID must be a valid UUID".to_string(),
        }
    }
}

/// UUID-based entity identifier
///
/// Accepts any UUID version in its hyphenated 36 character form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uuid {
    id: String,
}

impl Uuid {
    /// Generate a new random (v4) identifier
    pub fn new() -> Self {
        let id = uuid::Uuid::new_v4().to_string();
        debug_assert!(Self::validate(&id).is_ok());
        Self { id }
    }

    /// Build from an existing id, validating its format
    pub fn parse(id: impl Into<String>) -> Result<Self, InvalidUuidError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self { id })
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }

    fn validate(id: &str) -> Result<(), InvalidUuidError> {
        #[cfg(test)]
        validation_probe::record();

        if id.len() != 36 || uuid::Uuid::try_parse(id).is_err() {
            return Err(InvalidUuidError::default());
        }
        Ok(())
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for Uuid {}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl FromStr for Uuid {
    type Err = InvalidUuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Uuid {
    type Error = InvalidUuidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for Uuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id)
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}
