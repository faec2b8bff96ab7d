//! Deterministic fake-data builder for categories
//!
//! Used by tests and in-memory fixtures in place of hand-assembled props.

use chrono::{DateTime, Duration, Utc};

use super::{Category, CategoryProps, NAME_MAX_LENGTH};
use crate::value_objects::Uuid;

/// Builds one category or a numbered batch of them
///
/// Batches get names `Category 1..=n` and strictly increasing `created_at`
/// (one second apart), so the last built is the newest.
#[derive(Debug, Clone)]
pub struct CategoryFakeBuilder {
    count: usize,
    category_id: Option<Uuid>,
    name: Option<String>,
    description: Option<Option<String>>,
    is_active: bool,
    created_at: Option<DateTime<Utc>>,
}

impl CategoryFakeBuilder {
    pub fn a_category() -> Self {
        Self::the_categories(1)
    }

    pub fn the_categories(count: usize) -> Self {
        Self {
            count,
            category_id: None,
            name: None,
            description: None,
            is_active: true,
            created_at: None,
        }
    }

    pub fn with_category_id(mut self, id: Uuid) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn activate(mut self) -> Self {
        self.is_active = true;
        self
    }

    pub fn deactivate(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_invalid_name_too_long(mut self) -> Self {
        self.name = Some("a".repeat(NAME_MAX_LENGTH + 1));
        self
    }

    /// Build the first category of the batch
    pub fn build(self) -> Category {
        self.make(0)
    }

    pub fn build_many(self) -> Vec<Category> {
        (0..self.count).map(|index| self.make(index)).collect()
    }

    fn make(&self, index: usize) -> Category {
        let number = index + 1;
        let base = self.created_at.unwrap_or_else(Utc::now);
        let offset = Duration::seconds(i64::try_from(index).unwrap_or_default());

        Category::new(CategoryProps {
            // A fixed id only makes sense for a single category
            category_id: self.category_id.clone().filter(|_| index == 0),
            name: self
                .name
                .clone()
                .unwrap_or_else(|| format!("Category {number}")),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| Some(format!("Description {number}"))),
            is_active: Some(self.is_active),
            created_at: Some(base + offset),
        })
    }
}
