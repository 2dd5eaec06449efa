//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ASKBOARD` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use askboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.api.base_url);
//! ```

mod api;
mod error;
mod logging;
mod ui;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use ui::UiConfig;

use serde::Deserialize;

use crate::adapters::HttpApiConfig;
use crate::application::{QueryControllerConfig, SignupControllerConfig};

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// API server configuration (base URL, timeout)
    pub api: ApiConfig,

    /// Form behaviour (success indicator, routes, default board)
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ASKBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ASKBOARD__API__BASE_URL=...` -> `api.base_url = ...`
    /// - `ASKBOARD__UI__SUCCESS_FLASH_MILLIS=1500` -> `ui.success_flash_millis = 1500`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ASKBOARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.ui.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Settings for the HTTP API adapter
    pub fn http_api(&self) -> HttpApiConfig {
        HttpApiConfig::new(self.api.base_url.clone()).with_timeout(self.api.timeout())
    }

    /// Settings for the question controller
    pub fn query_controller(&self) -> QueryControllerConfig {
        QueryControllerConfig {
            board: self.ui.default_board.clone(),
            success_flash: self.ui.success_flash(),
        }
    }

    /// Settings for the signup controller
    pub fn signup_controller(&self) -> SignupControllerConfig {
        SignupControllerConfig {
            login_route: self.ui.login_route.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;
    use std::time::Duration;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("ASKBOARD__API__BASE_URL", "http://localhost:5000");
    }

    fn clear_env() {
        env::remove_var("ASKBOARD__API__BASE_URL");
        env::remove_var("ASKBOARD__API__TIMEOUT_SECS");
        env::remove_var("ASKBOARD__UI__SUCCESS_FLASH_MILLIS");
        env::remove_var("ASKBOARD__UI__LOGIN_ROUTE");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("ASKBOARD__API__TIMEOUT_SECS", "10");
        env::set_var("ASKBOARD__UI__SUCCESS_FLASH_MILLIS", "1500");
        env::set_var("ASKBOARD__UI__LOGIN_ROUTE", "/signin");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.http_api().timeout, Duration::from_secs(10));
        assert_eq!(config.query_controller().success_flash, Duration::from_millis(1500));
        assert_eq!(config.signup_controller().login_route, "/signin");
    }

    #[test]
    fn test_missing_base_url_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(AppConfig::load().is_err());
    }
}
