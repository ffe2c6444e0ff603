use std::env;
use thiserror::Error;
use validator::Validate;

pub const DEFAULT_DATABASE_NAME: &str = "pettrack_db";
pub const DEFAULT_FOLLOWUPS_COLLECTION: &str = "followups";
pub const DEFAULT_REWARDS_COLLECTION: &str = "rewards";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("COSMOS_MONGO_URL is required to run the seed")]
    MissingConnectionString,
    #[error("Invalid configuration")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Everything the seeder needs, resolved once at startup.
#[derive(Clone, Validate)]
pub struct Settings {
    #[validate(length(min = 1, message = "Connection string cannot be empty"))]
    pub mongo_url: String,
    #[validate(length(min = 1, message = "Database name cannot be empty"))]
    pub database_name: String,
    #[validate(length(min = 1, message = "Followups collection name cannot be empty"))]
    pub followups_collection: String,
    #[validate(length(min = 1, message = "Rewards collection name cannot be empty"))]
    pub rewards_collection: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source.
    ///
    /// `COSMOS_DB_NAME` falls back to `DATABASE_NAME`, then to `pettrack_db`.
    /// An empty connection string counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_url = lookup("COSMOS_MONGO_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingConnectionString)?;

        let database_name = lookup("COSMOS_DB_NAME")
            .or_else(|| lookup("DATABASE_NAME"))
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        let settings = Self {
            mongo_url,
            database_name,
            followups_collection: lookup("FOLLOWUPS_COLLECTION")
                .unwrap_or_else(|| DEFAULT_FOLLOWUPS_COLLECTION.to_string()),
            rewards_collection: lookup("REWARDS_COLLECTION")
                .unwrap_or_else(|| DEFAULT_REWARDS_COLLECTION.to_string()),
        };

        settings.validate()?;
        Ok(settings)
    }
}

// Hand-written so the connection string (and its credentials) never reaches the logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("mongo_url", &"<redacted>")
            .field("database_name", &self.database_name)
            .field("followups_collection", &self.followups_collection)
            .field("rewards_collection", &self.rewards_collection)
            .finish()
    }
}
