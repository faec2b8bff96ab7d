//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use tracing::info;

use crate::{
    error::{ConfigError, Result},
    types::{CatalogConfig, Dialect},
};

const DEFAULT_ENV_PREFIX: &str = "CATALOG";

/// Configuration manager
///
/// Values come from the TOML file at `config_path` (when it exists) and are
/// overridden by environment variables such as `CATALOG__DATABASE__DIALECT`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a manager reading `envs/<environment>.toml`
    pub fn new(environment: &str) -> Self {
        Self::with_path(Path::new("envs").join(format!("{environment}.toml")))
    }

    /// Create with custom config path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Override the environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load, merge and validate the configuration
    pub fn load(&self) -> Result<CatalogConfig> {
        let config = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let catalog_config: CatalogConfig = config.try_deserialize()?;
        Self::validate(&catalog_config)?;

        info!(
            path = %self.config_path.display(),
            dialect = %catalog_config.database.dialect,
            "configuration loaded"
        );
        Ok(catalog_config)
    }

    /// Validate a configuration
    pub fn validate(config: &CatalogConfig) -> Result<()> {
        let database = &config.database;
        let host_missing = database
            .host
            .as_deref()
            .map_or(true, |host| host.trim().is_empty());

        if database.dialect == Dialect::Sqlite && host_missing {
            return Err(ConfigError::Validation(
                "Database host is required for the sqlite dialect".to_string(),
            ));
        }
        if config.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Logging level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
