//! Catalog Persistence Layer
//!
//! Infrastructure layer providing repository implementations for domain aggregates.
//! This crate implements the repository interfaces defined in `catalog-domain`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Infrastructure Layer                         │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  memory/                                                        │
//! │  ─────────                                                      │
//! │  InMemoryRepository<E>            CRUD over a locked Vec        │
//! │  InMemorySearchableRepository<E>  filter → sort → paginate      │
//! │  CategoryInMemoryRepository       CategorySearchStrategy        │
//! └─────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ implements
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Domain Layer                              │
//! │  Repository, SearchableRepository, CategoryRepository           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use catalog_persistence::memory::CategoryInMemoryRepository;
//! use catalog_domain::repositories::CategoryRepository;
//! use std::sync::Arc;
//!
//! let repo: Arc<dyn CategoryRepository> = Arc::new(CategoryInMemoryRepository::new());
//!
//! // Or from configuration
//! let repo = catalog_persistence::category_repository(&config.database)?;
//! ```

pub mod error;
pub mod factory;
pub mod memory;

pub use error::PersistenceError;
pub use factory::category_repository;

// Re-export commonly used types
pub use memory::{
    CategoryInMemoryRepository, CategorySearchStrategy, InMemoryRepository,
    InMemorySearchableRepository, SearchStrategy,
};
