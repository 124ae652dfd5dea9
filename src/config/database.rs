//! Database configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection string
    #[serde(default)]
    pub connection_string: String,

    /// Database holding the profile collection
    #[serde(default)]
    pub name: String,

    /// Collection holding one document per profile
    #[serde(default)]
    pub collection: String,

    /// Bound on connecting and on the startup ping, in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Get connect timeout as Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.connection_string.is_empty() {
            return Err(ValidationError::MissingRequired("MONGODB_CONNECTION_STRING"));
        }
        if !self.connection_string.starts_with("mongodb://")
            && !self.connection_string.starts_with("mongodb+srv://")
        {
            return Err(ValidationError::InvalidConnectionString);
        }
        if self.name.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_NAME"));
        }
        if self.collection.is_empty() {
            return Err(ValidationError::MissingRequired("COLLECTION_NAME"));
        }
        if self.connect_timeout_secs == 0 {
            return Err(ValidationError::InvalidConnectTimeout);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection_string: String::new(),
            name: String::new(),
            collection: String::new(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

fn default_connect_timeout() -> u64 {
    10
}
