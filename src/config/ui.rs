//! Form behaviour configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Tunables for the question and signup forms
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// How long the success indicator stays visible, in milliseconds
    #[serde(default = "default_success_flash_millis")]
    pub success_flash_millis: u64,

    /// Route to navigate to after signup
    #[serde(default = "default_login_route")]
    pub login_route: String,

    /// Board questions go to until the user picks another
    #[serde(default = "default_board")]
    pub default_board: String,
}

impl UiConfig {
    /// Get the success indicator window as Duration
    pub fn success_flash(&self) -> Duration {
        Duration::from_millis(self.success_flash_millis)
    }

    /// Validate form configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.success_flash_millis == 0 || self.success_flash_millis > 60_000 {
            return Err(ValidationError::InvalidFlashDuration);
        }
        if !self.login_route.starts_with('/') {
            return Err(ValidationError::InvalidLoginRoute);
        }
        if self.default_board.trim().is_empty() {
            return Err(ValidationError::MissingRequired("UI__DEFAULT_BOARD"));
        }
        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            success_flash_millis: default_success_flash_millis(),
            login_route: default_login_route(),
            default_board: default_board(),
        }
    }
}

fn default_success_flash_millis() -> u64 {
    2000
}

fn default_login_route() -> String {
    "/login".to_string()
}

fn default_board() -> String {
    "general".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_config_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.success_flash(), Duration::from_secs(2));
        assert_eq!(config.login_route, "/login");
        assert_eq!(config.default_board, "general");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_relative_route() {
        let config = UiConfig {
            login_route: "login".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidLoginRoute));
    }

    #[test]
    fn test_validation_rejects_zero_flash() {
        let config = UiConfig {
            success_flash_millis: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidFlashDuration));
    }
}
