// 3rd party crates
use reqwest::Client;

/// How the address is extracted from a lookup service response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// Multi-line diagnostic trace; the address follows an `ip=` prefix.
    Trace,
    /// The body is the bare address; first line wins.
    Plain,
}

/// A lookup service endpoint paired with its extraction strategy.
#[derive(Debug, Clone)]
pub struct LookupService {
    pub url: String,
    pub extraction: Extraction,
}

/// Determines the current public IP by querying lookup services in order
/// until one succeeds.
pub struct IpResolver {
    pub(super) client: Client,
    pub(super) services: Vec<LookupService>,
}
