use crate::{
    ConfigError, ConfigErrorResult, ConfigSection, DEFAULT_DATABASE_FILENAME,
    DEFAULT_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS, MIN_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Database path must not escape the config dir
        if self.path.is_empty() || Path::new(&self.path).is_absolute() || self.path.contains("..")
        {
            return Err(ConfigError::invalid(
                ConfigSection::Database,
                "database.path must be a non-empty relative path and cannot contain '..'",
            ));
        }

        if self.max_connections < MIN_MAX_CONNECTIONS || self.max_connections > MAX_MAX_CONNECTIONS
        {
            return Err(ConfigError::invalid(
                ConfigSection::Database,
                format!(
                    "database.max_connections must be {}-{}, got {}",
                    MIN_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS, self.max_connections
                ),
            ));
        }

        Ok(())
    }
}
