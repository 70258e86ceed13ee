// 3rd party crates
use thiserror::Error;

/// Custom error type for Bunny DNS API operations.
#[derive(Debug, Error)]
pub enum BunnyError {
    #[error("Invalid API key: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Failed to resolve zone '{zone}': {message}")]
    ResolveFailed { zone: String, message: String },

    /// The search returned no zone, or the zone carries no A record.
    /// Recoverable by provisioning the zone, unlike the transport-class
    /// failures above.
    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("Failed to create zone '{zone}': {message}")]
    CreateFailed { zone: String, message: String },

    #[error("Failed to update DNS record for zone '{zone}': {message}")]
    UpdateFailed { zone: String, message: String },
}
