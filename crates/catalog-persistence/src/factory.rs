//! Repository construction from configuration

use std::sync::Arc;

use catalog_config::{DatabaseConfig, Dialect};
use catalog_domain::repositories::CategoryRepository;
use tracing::{info, warn};

use crate::{error::PersistenceError, memory::CategoryInMemoryRepository};

/// Build the category repository selected by `config.dialect`
pub fn category_repository(
    config: &DatabaseConfig,
) -> Result<Arc<dyn CategoryRepository>, PersistenceError> {
    match config.dialect {
        Dialect::Memory => {
            info!(query_logging = config.logging, "using in-memory category repository");
            Ok(Arc::new(
                CategoryInMemoryRepository::new().with_query_logging(config.logging),
            ))
        }
        other => {
            warn!(dialect = %other, "no category repository for dialect");
            Err(PersistenceError::UnsupportedBackend(other.to_string()))
        }
    }
}
