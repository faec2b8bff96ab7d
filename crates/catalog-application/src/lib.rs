//! Catalog Application Layer
//!
//! The Application Layer implements use cases by orchestrating domain aggregates
//! through repository contracts. Services are stateless; all mutable state is
//! persisted via repositories.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Application Layer                                │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Services          │ DTOs                                               │
//! │  ─────────         │ ────                                               │
//! │  CategoryService   │ CreateCategoryCommand, UpdateCategoryCommand       │
//! │                    │ CategoryOutput, PaginationOutput                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ depends on
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Layer                                    │
//! │  Category, Value Objects, SearchParams, Repository Traits               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Non-Goals
//!
//! - Domain logic (belongs in Domain Layer)
//! - Storage details (belongs in Infrastructure Layer)
//! - HTTP/CLI handling (belongs in Presentation Layer)

pub mod dto;
pub mod errors;
pub mod services;

// Re-export commonly used types
pub use dto::*;
pub use errors::{ApplicationError, ApplicationResult};
pub use services::*;
