//! Logging initialisation

use tracing::{info, Level};

use crate::{
    error::{ConfigError, Result},
    types::LoggingConfig,
};

/// Parse a level name case-insensitively; unknown names mean INFO
pub fn parse_level(level: &str) -> Level {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global `tracing` subscriber
///
/// Only the first call in a process succeeds; later calls return
/// [`ConfigError::Logging`].
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_level(&config.level);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    info!(%level, "logging initialised");
    Ok(())
}
