//! Category Application Service
//!
//! Orchestrates category use cases over a `CategoryRepository`.

use std::sync::Arc;

use tracing::info;

use crate::dto::{
    CategoryOutput, CreateCategoryCommand, PaginationOutput, PaginationOutputMapper,
    UpdateCategoryCommand,
};
use crate::errors::{ApplicationError, ApplicationResult};

use catalog_domain::category::CategoryCreateCommand;
use catalog_domain::errors::NotFoundError;
use catalog_domain::repositories::{
    CategoryRepository, CategorySearchParams, Repository, SearchableRepository,
};
use catalog_domain::search::SearchInput;
use catalog_domain::value_objects::Uuid;
use catalog_domain::{Category, Entity};

/// Category Application Service
///
/// Stateless: all mutable state is persisted via the repository. Works with
/// a concrete repository or an `Arc<dyn CategoryRepository>`.
pub struct CategoryService<R: CategoryRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CategoryRepository + ?Sized> CategoryService<R> {
    /// Create a new CategoryService with injected repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create and persist a category
    pub async fn create_category(
        &self,
        cmd: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryOutput> {
        let category = Category::create(CategoryCreateCommand {
            name: cmd.name,
            description: cmd.description,
            is_active: cmd.is_active,
        })?;

        self.repository.insert(&category).await?;

        info!(id = %category.category_id(), "category created");
        Ok(CategoryOutput::from_domain(&category))
    }

    /// Get category by ID
    pub async fn get_category(&self, id: &str) -> ApplicationResult<CategoryOutput> {
        let category = self.find(id).await?;
        Ok(CategoryOutput::from_domain(&category))
    }

    /// Paginated, filtered and sorted category listing
    ///
    /// Malformed paging or sorting input falls back to the defaults.
    pub async fn list_categories(
        &self,
        input: SearchInput,
    ) -> ApplicationResult<PaginationOutput<CategoryOutput>> {
        let params = CategorySearchParams::from_input(&input);
        let result = self.repository.search(&params).await?;

        let items = result
            .items()
            .iter()
            .map(CategoryOutput::from_domain)
            .collect();
        Ok(PaginationOutputMapper::to_output(items, &result))
    }

    /// Apply the provided changes to an existing category
    pub async fn update_category(
        &self,
        cmd: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryOutput> {
        let mut category = self.find(&cmd.id).await?;

        if let Some(name) = cmd.name {
            category.change_name(name)?;
        }
        if cmd.description.is_some() {
            category.change_description(cmd.description);
        }
        match cmd.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        self.repository.update(&category).await?;

        info!(id = %category.category_id(), "category updated");
        Ok(CategoryOutput::from_domain(&category))
    }

    /// Delete a category
    pub async fn delete_category(&self, id: &str) -> ApplicationResult<()> {
        let category_id = Self::parse_id(id)?;

        self.repository.delete(&category_id).await?;

        info!(id = %category_id, "category deleted");
        Ok(())
    }

    async fn find(&self, id: &str) -> ApplicationResult<Category> {
        let category_id = Self::parse_id(id)?;

        self.repository
            .find_by_id(&category_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::NotFound(NotFoundError::new(id, Category::ENTITY_NAME))
            })
    }

    fn parse_id(id: &str) -> ApplicationResult<Uuid> {
        Uuid::parse(id).map_err(|_| ApplicationError::InvalidIdentifier(id.to_string()))
    }
}
