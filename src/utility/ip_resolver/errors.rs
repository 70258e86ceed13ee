// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpResolutionError {
    #[error("Request to {service} failed: {error}")]
    Request {
        service: String,
        error: reqwest::Error,
    },

    #[error("Unexpected status {status} from {service}")]
    Status {
        service: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid response from {service}: {response:?}")]
    InvalidResponse { service: String, response: String },

    #[error("All IP lookup services failed")]
    ServicesExhausted,
}
