// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;

// Current module imports
use super::constants::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use super::errors::BunnyError;

/// Creates a reqwest client carrying the Bunny API default headers.
pub(super) fn create_reqwest_client(api_key: &str) -> Result<Client, BunnyError> {
    // Create headers.
    let mut headers: HeaderMap = HeaderMap::new();

    // Mark security-sensitive headers with `set_sensitive`.
    let mut access_key: HeaderValue = HeaderValue::from_str(api_key)?;
    access_key.set_sensitive(true);
    headers.insert("AccessKey", access_key);

    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));

    // Build the client.
    let client: Client = Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    Ok(client)
}
