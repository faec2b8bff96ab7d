//! Generic In-Memory Repository
//!
//! Memory backend for tests and development

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use catalog_domain::{entity::Entity, errors::DomainResult, repositories::Repository};

use crate::error::PersistenceError;

/// Thread-safe in-memory implementation of [`Repository`]
///
/// Keeps entities in insertion order behind a `RwLock`. Entities are cloned
/// on the way in and out, so callers never alias stored state; changes only
/// land through [`Repository::update`].
///
/// # Example
///
/// ```ignore
/// use catalog_persistence::memory::InMemoryRepository;
/// use catalog_domain::Category;
///
/// let repo = InMemoryRepository::<Category>::new();
/// ```
#[derive(Debug)]
pub struct InMemoryRepository<E: Entity> {
    items: RwLock<Vec<E>>,
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryRepository<E> {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Create with initial entities (useful for testing)
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Snapshot of the stored entities, in store order
    pub fn items(&self) -> Vec<E> {
        self.items.read().clone()
    }

    /// Get the current count of entities (for testing)
    pub fn count(&self) -> usize {
        self.items.read().len()
    }

    /// Clear all entities (for testing)
    pub fn clear(&self) {
        self.items.write().clear();
    }

    fn not_found(id: &E::Id) -> PersistenceError {
        PersistenceError::not_found(E::ENTITY_NAME, id.to_string())
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn insert(&self, entity: &E) -> DomainResult<()> {
        self.items.write().push(entity.clone());
        debug!(entity = E::ENTITY_NAME, id = %entity.entity_id(), "inserted entity");
        Ok(())
    }

    async fn bulk_insert(&self, entities: &[E]) -> DomainResult<()> {
        self.items.write().extend_from_slice(entities);
        debug!(entity = E::ENTITY_NAME, count = entities.len(), "bulk inserted entities");
        Ok(())
    }

    async fn update(&self, entity: &E) -> DomainResult<()> {
        let id = entity.entity_id();
        let mut items = self.items.write();
        let stored = items
            .iter_mut()
            .find(|item| item.entity_id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        *stored = entity.clone();
        debug!(entity = E::ENTITY_NAME, id = %id, "updated entity");
        Ok(())
    }

    async fn delete(&self, id: &E::Id) -> DomainResult<()> {
        let mut items = self.items.write();
        let index = items
            .iter()
            .position(|item| item.entity_id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        items.remove(index);
        debug!(entity = E::ENTITY_NAME, id = %id, "deleted entity");
        Ok(())
    }

    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        let items = self.items.read();
        Ok(items.iter().find(|item| item.entity_id() == id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        Ok(self.items())
    }
}
