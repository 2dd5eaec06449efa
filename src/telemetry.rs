//! Tracing subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LoggingConfig, ValidationError};

/// Installs the global tracing subscriber described by `config`.
///
/// `RUST_LOG`, when set, takes precedence over the configured level. Calling
/// this twice is harmless: the second install is ignored.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ValidationError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
    Ok(())
}
