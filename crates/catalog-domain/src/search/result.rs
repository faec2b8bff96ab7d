//! Paginated search envelope

use serde::{Deserialize, Serialize};

/// A page of items plus the pagination metadata of the whole result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<E> {
    items: Vec<E>,
    total: usize,
    current_page: usize,
    per_page: usize,
    last_page: usize,
}

impl<E> SearchResult<E> {
    /// `total` counts the filtered set before pagination
    ///
    /// `last_page` is `ceil(total / per_page)` and never below 1.
    pub fn new(items: Vec<E>, total: usize, current_page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        debug_assert!(items.len() <= per_page);

        Self {
            items,
            total,
            current_page,
            per_page,
            last_page: total.div_ceil(per_page).max(1),
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn last_page(&self) -> usize {
        self.last_page
    }

    /// Map the items while keeping the pagination metadata
    pub fn map<T>(self, f: impl FnMut(E) -> T) -> SearchResult<T> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }
}
