//! Catalog Domain Layer
//!
//! Entities, value objects, validation and repository contracts of the
//! catalog service. The domain defines only interfaces for data access; the
//! implementations live in `catalog-persistence`.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Domain Layer                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  value_objects   ValueObject, Uuid                            │
//! │  entity          Entity                                       │
//! │  validation      Notification, ValidatorRules,                │
//! │                  EntityValidationError                        │
//! │  search          SearchInput → SearchParams → SearchResult    │
//! │  repositories    Repository, SearchableRepository,            │
//! │                  CategoryRepository                           │
//! │  category        Category aggregate                           │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod category;
pub mod entity;
pub mod errors;
pub mod repositories;
pub mod search;
pub mod validation;
pub mod value_objects;

pub use category::Category;
pub use entity::Entity;
pub use errors::{DomainError, DomainResult, NotFoundError};
pub use repositories::{CategoryRepository, Repository, SearchableRepository};
pub use search::{SearchInput, SearchParams, SearchResult, SortDirection};
pub use validation::{EntityValidationError, ValidationError};
pub use value_objects::{InvalidUuidError, Uuid, ValueObject};
