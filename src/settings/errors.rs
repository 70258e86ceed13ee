// Standard library
use std::path::PathBuf;

// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("API key not provided in API_KEY or API_KEY_FILE")]
    MissingApiKey,

    #[error("Failed to read API key file {path:?}: {source}")]
    ApiKeyFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("API key file {0:?} is empty")]
    EmptyApiKeyFile(PathBuf),

    #[error("Invalid API key format")]
    InvalidApiKey,

    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),

    #[error("Update interval must be greater than 0, got {0}")]
    InvalidUpdateInterval(u64),

    #[error("No valid DNS zone names provided in ZONES")]
    NoZones,
}
