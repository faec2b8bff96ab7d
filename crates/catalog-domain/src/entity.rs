//! Base identity contract shared by every entity

use std::fmt;

use crate::value_objects::ValueObject;

/// An entity addressable by exactly one identifier
///
/// Stores locate records through [`Entity::entity_id`]. Equality of whole
/// entities (where tests assert it) is field-value equality via `PartialEq`.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Identifier value object
    type Id: ValueObject + Eq + fmt::Display + Send + Sync;

    /// Entity type name used in diagnostics such as not-found errors
    const ENTITY_NAME: &'static str;

    fn entity_id(&self) -> &Self::Id;

    /// Plain JSON projection of the entity state
    fn to_json(&self) -> serde_json::Value;
}
