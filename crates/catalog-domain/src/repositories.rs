//! Repository interfaces for data persistence
//!
//! These interfaces define the contracts for data access. Implementations
//! (in-memory or storage-backed) live in infrastructure crates and must be
//! interchangeable behind these traits.

use async_trait::async_trait;

use crate::{
    category::Category,
    entity::Entity,
    errors::DomainResult,
    search::{SearchFilter, SearchParams, SearchResult},
};

/// Generic CRUD contract for one entity type
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Append a new entity; identifier collisions are the caller's concern
    async fn insert(&self, entity: &E) -> DomainResult<()>;

    /// Insert a batch; all entries become visible together
    async fn bulk_insert(&self, entities: &[E]) -> DomainResult<()>;

    /// Replace the stored state of an existing entity
    ///
    /// Fails with `DomainError::NotFound` when the identifier is unknown.
    async fn update(&self, entity: &E) -> DomainResult<()>;

    /// Remove by identifier; fails with `DomainError::NotFound` when unknown
    async fn delete(&self, id: &E::Id) -> DomainResult<()>;

    /// `Ok(None)` when absent, never an error
    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>>;

    /// Every stored entity, in store order
    async fn find_all(&self) -> DomainResult<Vec<E>>;
}

/// Repository that also answers paginated, filtered, sorted searches
#[async_trait]
pub trait SearchableRepository<E: Entity, F: SearchFilter>: Repository<E> {
    /// Field names accepted as `sort`
    fn sortable_fields(&self) -> &[&'static str];

    /// Absence of matches is an empty result, not an error
    async fn search(&self, params: &SearchParams<F>) -> DomainResult<SearchResult<E>>;
}

/// Categories are filtered by a free-text name fragment
pub type CategoryFilter = String;

pub type CategorySearchParams = SearchParams<CategoryFilter>;

pub type CategorySearchResult = SearchResult<Category>;

/// Repository for category aggregates
pub trait CategoryRepository: SearchableRepository<Category, CategoryFilter> {}

impl<T> CategoryRepository for T where T: SearchableRepository<Category, CategoryFilter> + ?Sized {}
