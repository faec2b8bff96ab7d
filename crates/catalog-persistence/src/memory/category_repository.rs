//! In-memory category repository

use std::cmp::Ordering;

use catalog_domain::{repositories::CategoryFilter, search::SortDirection, Category};

use super::searchable::{InMemorySearchableRepository, SearchStrategy};

/// Category search rules
///
/// - filter: case-insensitive substring of the name
/// - sortable: `name`, `created_at`
/// - default order: newest first
#[derive(Debug, Default, Clone, Copy)]
pub struct CategorySearchStrategy;

impl CategorySearchStrategy {
    pub const SORTABLE_FIELDS: &'static [&'static str] = &["name", "created_at"];
}

impl SearchStrategy<Category> for CategorySearchStrategy {
    type Filter = CategoryFilter;

    fn sortable_fields(&self) -> &[&'static str] {
        Self::SORTABLE_FIELDS
    }

    fn matches(&self, category: &Category, filter: &CategoryFilter) -> bool {
        category
            .name()
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }

    fn compare(&self, field: &str, a: &Category, b: &Category) -> Ordering {
        match field {
            "name" => a.name().cmp(b.name()),
            "created_at" => a.created_at().cmp(&b.created_at()),
            _ => Ordering::Equal,
        }
    }

    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        Some(("created_at", SortDirection::Desc))
    }
}

/// Thread-safe in-memory implementation of `CategoryRepository`
pub type CategoryInMemoryRepository = InMemorySearchableRepository<Category, CategorySearchStrategy>;
