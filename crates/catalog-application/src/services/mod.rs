//! Application layer services
//!
//! These services orchestrate domain aggregates and implement use cases.
//! All services are stateless and use constructor injection for dependencies.

mod category_service;

pub use category_service::CategoryService;
