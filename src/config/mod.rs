//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. The deployment variables
//! `MONGODB_CONNECTION_STRING`, `DATABASE_NAME`, `COLLECTION_NAME` and `PORT` are
//! read directly. Every other setting is loaded with the `DEV_PROFILES` prefix and
//! nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use dev_profiles::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Serving {} on port {}", config.database.collection, config.server.port);
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;
use std::env;

/// Prefix for nested environment variables (`DEV_PROFILES__SERVER__HOST`).
pub const ENV_PREFIX: &str = "DEV_PROFILES";

pub const MONGODB_CONNECTION_STRING_VAR: &str = "MONGODB_CONNECTION_STRING";
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";
pub const COLLECTION_NAME_VAR: &str = "COLLECTION_NAME";
pub const PORT_VAR: &str = "PORT";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, shutdown)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (MongoDB connection and collection)
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DEV_PROFILES` prefix
    /// 3. Applies the flat deployment variables on top, ignoring empty values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PORT=8080` -> `server.port = 8080`
    /// - `MONGODB_CONNECTION_STRING=...` -> `database.connection_string = ...`
    /// - `DEV_PROFILES__SERVER__SHUTDOWN_GRACE_SECS=5` -> `server.shutdown_grace_secs = 5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// Missing required values are reported by [`AppConfig::validate()`].
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .set_override_option(
                "database.connection_string",
                non_empty_var(MONGODB_CONNECTION_STRING_VAR),
            )?
            .set_override_option("database.name", non_empty_var(DATABASE_NAME_VAR))?
            .set_override_option("database.collection", non_empty_var(COLLECTION_NAME_VAR))?
            .set_override_option("server.port", non_empty_var(PORT_VAR))?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` when a required value is absent or malformed.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var(MONGODB_CONNECTION_STRING_VAR, "mongodb://localhost:27017");
        env::set_var(DATABASE_NAME_VAR, "devdb");
        env::set_var(COLLECTION_NAME_VAR, "developers");
    }

    fn clear_env() {
        env::remove_var(MONGODB_CONNECTION_STRING_VAR);
        env::remove_var(DATABASE_NAME_VAR);
        env::remove_var(COLLECTION_NAME_VAR);
        env::remove_var(PORT_VAR);
        env::remove_var("DEV_PROFILES__SERVER__PORT");
        env::remove_var("DEV_PROFILES__SERVER__ENVIRONMENT");
        env::remove_var("DEV_PROFILES__SERVER__SHUTDOWN_GRACE_SECS");
        env::remove_var("DEV_PROFILES__DATABASE__CONNECT_TIMEOUT_SECS");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.connection_string, "mongodb://localhost:27017");
        assert_eq!(config.database.name, "devdb");
        assert_eq!(config.database.collection, "developers");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.shutdown_grace_secs, 5);
        assert_eq!(config.database.connect_timeout_secs, 10);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn test_missing_required_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(MONGODB_CONNECTION_STRING_VAR, "mongodb://localhost:27017");
        env::set_var(DATABASE_NAME_VAR, "devdb");
        let result = AppConfig::load_validated();
        clear_env();

        match result {
            Err(ConfigError::ValidationFailed(ValidationError::MissingRequired(name))) => {
                assert_eq!(name, COLLECTION_NAME_VAR)
            }
            other => panic!("expected missing COLLECTION_NAME, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_port_uses_default() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();
        env::set_var(PORT_VAR, "");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 8080);
    }

    #[test]
    fn test_custom_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();
        env::set_var(PORT_VAR, "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn test_flat_port_overrides_prefixed_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();
        env::set_var("DEV_PROFILES__SERVER__PORT", "4000");
        env::set_var(PORT_VAR, "5000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 5000);
    }

    #[test]
    fn test_prefixed_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();
        env::set_var("DEV_PROFILES__SERVER__ENVIRONMENT", "production");
        env::set_var("DEV_PROFILES__SERVER__SHUTDOWN_GRACE_SECS", "12");
        env::set_var("DEV_PROFILES__DATABASE__CONNECT_TIMEOUT_SECS", "3");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(config.server.shutdown_grace_secs, 12);
        assert_eq!(config.database.connect_timeout_secs, 3);
    }

    #[test]
    fn test_invalid_port_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();
        env::set_var(PORT_VAR, "not-a-port");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
