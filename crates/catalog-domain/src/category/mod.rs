//! Category Aggregate Root
//!
//! The catalog's concrete entity. State changes go through the domain
//! methods below; the fields are never assigned from outside.

mod fake;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::validation::{EntityValidationError, Notification, ValidatorRules};
use crate::value_objects::Uuid;

pub use fake::CategoryFakeBuilder;

/// Maximum length of a category name, in characters
pub const NAME_MAX_LENGTH: usize = 255;

/// Full state used to rehydrate a category
///
/// Missing values get defaults: a fresh id, no description, active, now.
#[derive(Debug, Clone, Default)]
pub struct CategoryProps {
    pub category_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Input of [`Category::create`]
#[derive(Debug, Clone, Default)]
pub struct CategoryCreateCommand {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Category Aggregate Root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    category_id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Rehydrate without running the field rules
    pub fn new(props: CategoryProps) -> Self {
        Self {
            category_id: props.category_id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Create a new category, enforcing the field rules
    ///
    /// # Errors
    /// Returns every failing field at once as an [`EntityValidationError`]
    pub fn create(command: CategoryCreateCommand) -> Result<Self, EntityValidationError> {
        let category = Self::new(CategoryProps {
            name: command.name,
            description: command.description,
            is_active: command.is_active,
            ..CategoryProps::default()
        });
        category.validate()?;
        Ok(category)
    }

    /// Start a fake-data builder
    pub fn fake() -> CategoryFakeBuilder {
        CategoryFakeBuilder::a_category()
    }

    /// Rename; the aggregate is left untouched when the new name is invalid
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), EntityValidationError> {
        let name = name.into();
        let mut notification = Notification::new();
        Self::validate_name(Some(name.as_str()), &mut notification);
        notification.into_result()?;

        self.name = name;
        Ok(())
    }

    pub fn change_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn validate(&self) -> Result<(), EntityValidationError> {
        let mut notification = Notification::new();
        Self::validate_name(Some(self.name.as_str()), &mut notification);
        notification.into_result()
    }

    fn validate_name(name: Option<&str>, notification: &mut Notification) {
        ValidatorRules::values(name, "name", notification)
            .required()
            .max_length(NAME_MAX_LENGTH);
    }

    // === Getters ===

    pub fn category_id(&self) -> &Uuid {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Category {
    type Id = Uuid;

    const ENTITY_NAME: &'static str = "Category";

    fn entity_id(&self) -> &Uuid {
        &self.category_id
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "category_id": self.category_id.as_str(),
            "name": self.name,
            "description": self.description,
            "is_active": self.is_active,
            "created_at": self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let category = Category::new(CategoryProps {
            name: "Movie".into(),
            ..Default::default()
        });

        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), None);
        assert!(category.is_active());
        assert!(category.created_at() <= Utc::now());
    }

    #[test]
    fn test_new_keeps_all_values() {
        let id = Uuid::new();
        let created_at = Utc::now();
        let category = Category::new(CategoryProps {
            category_id: Some(id.clone()),
            name: "Movie".into(),
            description: Some("Movie description".into()),
            is_active: Some(false),
            created_at: Some(created_at),
        });

        assert_eq!(category.category_id(), &id);
        assert_eq!(category.description(), Some("Movie description"));
        assert!(!category.is_active());
        assert_eq!(category.created_at(), created_at);
    }

    #[test]
    fn test_create_with_name_and_is_active() {
        let category = Category::create(CategoryCreateCommand {
            name: "Movie".into(),
            is_active: Some(false),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), None);
        assert!(!category.is_active());
    }

    #[test]
    fn test_create_with_empty_name_fails() {
        let err = Category::create(CategoryCreateCommand::default()).unwrap_err();

        assert_eq!(err.count(), 1);
        assert_eq!(err.field("name").unwrap(), ["name should not be empty"]);
    }

    #[test]
    fn test_create_with_too_long_name_fails() {
        let err = Category::create(CategoryCreateCommand {
            name: "t".repeat(256),
            ..Default::default()
        })
        .unwrap_err();

        assert_eq!(
            err.field("name").unwrap(),
            ["name must be shorter than or equal to 255 characters"]
        );
    }

    #[test]
    fn test_change_name() {
        let mut category = Category::fake().with_name("Movie").build();
        category.change_name("Name changed").unwrap();
        assert_eq!(category.name(), "Name changed");
    }

    #[test]
    fn test_change_name_rejects_invalid_and_keeps_state() {
        let mut category = Category::fake().with_name("Movie").build();
        let err = category.change_name("").unwrap_err();

        assert_eq!(err.count(), 1);
        assert_eq!(category.name(), "Movie");
    }

    #[test]
    fn test_change_description() {
        let mut category = Category::fake().build();
        category.change_description(Some("Description".into()));
        assert_eq!(category.description(), Some("Description"));

        category.change_description(None);
        assert_eq!(category.description(), None);
    }

    #[test]
    fn test_activate_and_deactivate() {
        let mut category = Category::fake().deactivate().build();
        assert!(!category.is_active());

        category.activate();
        assert!(category.is_active());

        category.deactivate();
        assert!(!category.is_active());
    }

    #[test]
    fn test_to_json_projection() {
        let category = Category::fake()
            .with_name("Movie")
            .with_description(None)
            .build();
        let json = category.to_json();

        assert_eq!(json["category_id"], category.category_id().as_str());
        assert_eq!(json["name"], "Movie");
        assert!(json["description"].is_null());
        assert_eq!(json["is_active"], true);
    }
}
