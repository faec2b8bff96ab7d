//! Data Transfer Objects (DTOs) for layer boundary crossing
//!
//! DTOs prevent domain model leakage to the presentation layer.
//! They provide a stable API contract while allowing domain internals to evolve.

pub mod category;
pub mod pagination;

// Re-export commonly used DTOs
pub use category::*;
pub use pagination::*;
