//! Category-related DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_domain::Category;

/// Command to create a new category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Command to change an existing category; absent fields stay untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Category view returned by every use case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl CategoryOutput {
    /// Create from domain aggregate
    pub fn from_domain(category: &Category) -> Self {
        Self {
            id: category.category_id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}
