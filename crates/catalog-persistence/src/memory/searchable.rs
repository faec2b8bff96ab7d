//! In-Memory Query Engine
//!
//! Runs `filter → sort → paginate` over a snapshot of an
//! [`InMemoryRepository`]. The entity-specific parts (which entities match a
//! filter, how a field orders) come from a [`SearchStrategy`] injected at
//! construction; the envelope math is shared through [`SearchResult::new`].

use std::cmp::Ordering;

use async_trait::async_trait;
use tracing::{debug, info};

use catalog_domain::{
    entity::Entity,
    errors::DomainResult,
    repositories::{Repository, SearchableRepository},
    search::{SearchFilter, SearchParams, SearchResult, SortDirection},
};

use super::InMemoryRepository;

/// Per-entity search capability
pub trait SearchStrategy<E>: Send + Sync {
    /// Filter type accepted by `search`
    type Filter: SearchFilter;

    /// Field names [`SearchStrategy::compare`] understands
    fn sortable_fields(&self) -> &[&'static str];

    fn matches(&self, entity: &E, filter: &Self::Filter) -> bool;

    /// Ascending order of `a` and `b` on `field`
    ///
    /// Only called with a field listed in `sortable_fields`.
    fn compare(&self, field: &str, a: &E, b: &E) -> Ordering;

    /// Ordering applied when the search names no sort field
    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        None
    }
}

/// In-memory repository answering searches through a [`SearchStrategy`]
#[derive(Debug)]
pub struct InMemorySearchableRepository<E: Entity, S> {
    store: InMemoryRepository<E>,
    strategy: S,
    log_queries: bool,
}

impl<E, S> Default for InMemorySearchableRepository<E, S>
where
    E: Entity,
    S: SearchStrategy<E> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, S> InMemorySearchableRepository<E, S>
where
    E: Entity,
    S: SearchStrategy<E> + Default,
{
    /// Create an empty repository with the strategy's default value
    pub fn new() -> Self {
        Self::with_strategy(S::default())
    }

    /// Create with initial entities (useful for testing)
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            store: InMemoryRepository::with_items(items),
            strategy: S::default(),
            log_queries: false,
        }
    }
}

impl<E, S> InMemorySearchableRepository<E, S>
where
    E: Entity,
    S: SearchStrategy<E>,
{
    pub fn with_strategy(strategy: S) -> Self {
        Self {
            store: InMemoryRepository::new(),
            strategy,
            log_queries: false,
        }
    }

    /// Log every executed search at info level
    pub fn with_query_logging(mut self, enabled: bool) -> Self {
        self.log_queries = enabled;
        self
    }

    /// Underlying store (snapshot, count and clear helpers)
    pub fn store(&self) -> &InMemoryRepository<E> {
        &self.store
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Keep matching entities in their relative order
    ///
    /// Without a filter the input is handed back untouched and the strategy
    /// predicate is never consulted.
    pub fn apply_filter(&self, mut items: Vec<E>, filter: Option<&S::Filter>) -> Vec<E> {
        let Some(filter) = filter else {
            return items;
        };

        items.retain(|item| self.strategy.matches(item, filter));
        items
    }

    /// Stable sort on `sort`, or on the strategy default when `sort` is absent
    ///
    /// An unknown field leaves the input order as is.
    pub fn apply_sort(
        &self,
        mut items: Vec<E>,
        sort: Option<&str>,
        sort_dir: Option<SortDirection>,
    ) -> Vec<E> {
        let (field, direction) = match sort {
            Some(field) => (field, sort_dir.unwrap_or(SortDirection::Asc)),
            None => match self.strategy.default_sort() {
                Some(default) => default,
                None => return items,
            },
        };

        if !self.strategy.sortable_fields().iter().any(|known| *known == field) {
            return items;
        }

        items.sort_by(|a, b| {
            let ordering = self.strategy.compare(field, a, b);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        items
    }

    /// Slice `[(page - 1) * per_page, page * per_page)`; past the end is empty
    pub fn apply_paginate(items: Vec<E>, page: usize, per_page: usize) -> Vec<E> {
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        items.into_iter().skip(offset).take(per_page).collect()
    }
}

#[async_trait]
impl<E, S> Repository<E> for InMemorySearchableRepository<E, S>
where
    E: Entity,
    S: SearchStrategy<E>,
{
    async fn insert(&self, entity: &E) -> DomainResult<()> {
        self.store.insert(entity).await
    }

    async fn bulk_insert(&self, entities: &[E]) -> DomainResult<()> {
        self.store.bulk_insert(entities).await
    }

    async fn update(&self, entity: &E) -> DomainResult<()> {
        self.store.update(entity).await
    }

    async fn delete(&self, id: &E::Id) -> DomainResult<()> {
        self.store.delete(id).await
    }

    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        self.store.find_by_id(id).await
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        self.store.find_all().await
    }
}

#[async_trait]
impl<E, S> SearchableRepository<E, S::Filter> for InMemorySearchableRepository<E, S>
where
    E: Entity,
    S: SearchStrategy<E>,
{
    fn sortable_fields(&self) -> &[&'static str] {
        self.strategy.sortable_fields()
    }

    async fn search(&self, params: &SearchParams<S::Filter>) -> DomainResult<SearchResult<E>> {
        let filtered = self.apply_filter(self.store.items(), params.filter());
        let total = filtered.len();
        let sorted = self.apply_sort(filtered, params.sort(), params.sort_dir());
        let items = Self::apply_paginate(sorted, params.page(), params.per_page());

        if self.log_queries {
            info!(
                entity = E::ENTITY_NAME,
                page = params.page(),
                per_page = params.per_page(),
                sort = ?params.sort(),
                sort_dir = ?params.sort_dir(),
                filter = ?params.filter(),
                total,
                "search executed"
            );
        } else {
            debug!(entity = E::ENTITY_NAME, total, returned = items.len(), "search executed");
        }

        Ok(SearchResult::new(
            items,
            total,
            params.page(),
            params.per_page(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    use catalog_domain::value_objects::Uuid;

    #[derive(Debug, Clone, PartialEq)]
    struct StubEntity {
        entity_id: Uuid,
        name: String,
        price: i64,
    }

    fn stub(name: &str, price: i64) -> StubEntity {
        StubEntity {
            entity_id: Uuid::new(),
            name: name.to_string(),
            price,
        }
    }

    impl Entity for StubEntity {
        type Id = Uuid;

        const ENTITY_NAME: &'static str = "StubEntity";

        fn entity_id(&self) -> &Uuid {
            &self.entity_id
        }

        fn to_json(&self) -> serde_json::Value {
            serde_json::json!({ "name": self.name, "price": self.price })
        }
    }

    /// Filters on name or exact price and counts predicate calls
    #[derive(Debug, Default)]
    struct StubStrategy {
        calls: AtomicUsize,
    }

    impl SearchStrategy<StubEntity> for StubStrategy {
        type Filter = String;

        fn sortable_fields(&self) -> &[&'static str] {
            &["name"]
        }

        fn matches(&self, entity: &StubEntity, filter: &String) -> bool {
            self.calls.fetch_add(1, AtomicOrdering::SeqCst);
            entity.name.to_lowercase().contains(&filter.to_lowercase())
                || entity.price.to_string() == *filter
        }

        fn compare(&self, _field: &str, a: &StubEntity, b: &StubEntity) -> Ordering {
            a.name.cmp(&b.name)
        }
    }

    type StubRepository = InMemorySearchableRepository<StubEntity, StubStrategy>;

    #[test]
    fn test_no_filter_returns_same_vec_without_predicate_calls() {
        let repo = StubRepository::new();
        let items = vec![stub("test", 5)];
        let ptr = items.as_ptr();

        let filtered = repo.apply_filter(items.clone(), None);
        assert_eq!(filtered, items);

        let moved = repo.apply_filter(items, None);
        assert_eq!(moved.as_ptr(), ptr);
        assert_eq!(repo.strategy().calls.load(AtomicOrdering::SeqCst), 0);
    }

    #[test]
    fn test_filter_keeps_relative_order() {
        let repo = StubRepository::new();
        let items = vec![stub("test", 5), stub("a", 15), stub("TEST", 1), stub("fake", 5)];

        let filtered = repo.apply_filter(items.clone(), Some(&"5".to_string()));

        assert_eq!(filtered, vec![items[0].clone(), items[3].clone()]);
        assert_eq!(repo.strategy().calls.load(AtomicOrdering::SeqCst), 4);
    }

    #[test]
    fn test_filter_empty_input() {
        let repo = StubRepository::new();
        assert!(repo.apply_filter(vec![], Some(&"x".to_string())).is_empty());
    }

    #[test]
    fn test_sort_without_default_keeps_order() {
        let repo = StubRepository::new();
        let items = vec![stub("b", 1), stub("a", 2), stub("c", 3)];

        assert_eq!(repo.apply_sort(items.clone(), None, None), items);
    }

    #[test]
    fn test_sort_by_field_both_directions() {
        let repo = StubRepository::new();
        let items = vec![stub("b", 1), stub("a", 2), stub("c", 3)];

        let asc = repo.apply_sort(items.clone(), Some("name"), Some(SortDirection::Asc));
        assert_eq!(asc, vec![items[1].clone(), items[0].clone(), items[2].clone()]);

        let desc = repo.apply_sort(items.clone(), Some("name"), Some(SortDirection::Desc));
        assert_eq!(desc, vec![items[2].clone(), items[0].clone(), items[1].clone()]);
    }

    #[test]
    fn test_sort_unknown_field_is_noop() {
        let repo = StubRepository::new();
        let items = vec![stub("b", 1), stub("a", 2)];

        assert_eq!(
            repo.apply_sort(items.clone(), Some("price"), Some(SortDirection::Desc)),
            items
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let repo = StubRepository::new();
        let items = vec![stub("a", 1), stub("a", 2), stub("a", 3)];

        assert_eq!(
            repo.apply_sort(items.clone(), Some("name"), Some(SortDirection::Desc)),
            items
        );
    }

    #[test]
    fn test_paginate() {
        let items: Vec<_> = (0..5).map(|i| stub(&format!("n{i}"), i)).collect();

        let page = StubRepository::apply_paginate(items.clone(), 2, 2);
        assert_eq!(page, items[2..4].to_vec());

        let last = StubRepository::apply_paginate(items.clone(), 3, 2);
        assert_eq!(last, items[4..].to_vec());

        assert!(StubRepository::apply_paginate(items.clone(), 4, 2).is_empty());
        assert!(StubRepository::apply_paginate(items, usize::MAX, usize::MAX).is_empty());
    }

    #[tokio::test]
    async fn test_search_applies_filter_sort_paginate() {
        let repo = StubRepository::with_items(vec![
            stub("a", 1),
            stub("AAA", 2),
            stub("AaA", 3),
            stub("b", 4),
            stub("e", 5),
        ]);

        let params = SearchParams::new()
            .with_page(1)
            .with_per_page(2)
            .with_sort("name", SortDirection::Asc)
            .with_filter("a".to_string());
        let result = repo.search(&params).await.unwrap();

        let names: Vec<_> = result.items().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["AAA", "AaA"]);
        assert_eq!(result.total(), 3);
        assert_eq!(result.current_page(), 1);
        assert_eq!(result.per_page(), 2);
        assert_eq!(result.last_page(), 2);

        let result = repo.search(&params.clone().with_page(2)).await.unwrap();
        let names: Vec<_> = result.items().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a"]);
    }

    #[tokio::test]
    async fn test_search_page_out_of_range() {
        let repo = StubRepository::with_items(vec![stub("a", 1)]);

        let result = repo
            .search(&SearchParams::new().with_page(10))
            .await
            .unwrap();

        assert!(result.items().is_empty());
        assert_eq!(result.total(), 1);
        assert_eq!(result.current_page(), 10);
        assert_eq!(result.last_page(), 1);
    }

    #[tokio::test]
    async fn test_search_empty_store() {
        let repo = StubRepository::new().with_query_logging(true);

        let result = repo.search(&SearchParams::new()).await.unwrap();

        assert!(result.items().is_empty());
        assert_eq!(result.total(), 0);
        assert_eq!(result.last_page(), 1);
    }
}
