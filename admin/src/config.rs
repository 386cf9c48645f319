//! Configuration management for the BudayaKu admin core
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with BUDAYAKU_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    /// Current environment (development, production)
    pub environment: String,

    /// Backend API configuration
    pub api: ApiConfig,

    /// Default interface language code ("id" or "en")
    pub language: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend API, without trailing slash
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl AdminConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment =
            std::env::var("BUDAYAKU_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:8000/api/v1")?
            .set_default("api.timeout_seconds", 30)?
            .set_default("language", "id")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (BUDAYAKU_ prefix)
            .add_source(
                Environment::with_prefix("BUDAYAKU")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1".to_string(),
            timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_defaults() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url, "http://localhost:8000/api/v1");
        assert_eq!(api.timeout_seconds, 30);
    }

    // load() reads the real process environment and any config file, so
    // only the shape of the result is asserted, never specific values.
    #[test]
    fn test_load_yields_complete_config() {
        let config = AdminConfig::load().unwrap();
        assert!(!config.environment.is_empty());
        assert!(!config.language.is_empty());
        assert!(!config.api.base_url.is_empty());
    }
}
