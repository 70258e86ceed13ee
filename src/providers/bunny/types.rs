// 3rd party crates
use reqwest::Client;

/// Client for the Bunny DNS HTTP API.
///
/// Every operation is a single idempotent request/response exchange and the
/// client holds no mutable state, so concurrent callers share it freely.
#[derive(Debug, Clone)]
pub struct Bunny {
    pub(super) client: Client,
    pub(super) base_url: String,
}
