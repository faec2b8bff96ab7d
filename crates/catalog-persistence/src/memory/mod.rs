//! In-Memory Repository Implementations
//!
//! Thread-safe in-memory implementations of domain repository interfaces.
//! Suitable for testing and development.

mod category_repository;
mod repository;
mod searchable;

pub use category_repository::{CategoryInMemoryRepository, CategorySearchStrategy};
pub use repository::InMemoryRepository;
pub use searchable::{InMemorySearchableRepository, SearchStrategy};
