//! Catalog Configuration
//!
//! Loads [`CatalogConfig`] from an optional TOML file layered under
//! `CATALOG__*` environment variables, and initialises `tracing` output from
//! its logging section. The core crates receive these values explicitly.

pub mod error;
pub mod logging;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use logging::init_logging;
pub use manager::ConfigManager;
pub use types::{CatalogConfig, DatabaseConfig, Dialect, LoggingConfig};
