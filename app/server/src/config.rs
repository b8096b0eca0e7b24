use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder value shipped in sample configs.
const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("YouTube API key is missing or not configured")]
    MissingApiKey,
    #[error("max_connections must be at least 1")]
    NoConnections,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub youtube_api_key: String,
}

impl Config {
    pub fn new(database_url: String, youtube_api_key: String) -> Self {
        Self {
            database_url,
            max_connections: 5,
            youtube_api_key,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Reject configurations the server cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let key = self.youtube_api_key.trim();
        if key.is_empty() || key == API_KEY_PLACEHOLDER {
            return Err(ConfigError::MissingApiKey);
        }
        if self.max_connections == 0 {
            return Err(ConfigError::NoConnections);
        }
        Ok(())
    }
}
