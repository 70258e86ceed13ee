// Current module imports
use super::types::Extraction;

/// Per-request timeout for lookup calls.
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Key prefix marking the address line in diagnostic trace responses.
pub const TRACE_IP_PREFIX: &str = "ip=";

/// Ordered list of public IP lookup services. A later entry is consulted
/// only after every earlier one failed.
pub const IP_LOOKUP_SERVICES: [(&str, Extraction); 5] = [
    ("https://1.1.1.1/cdn-cgi/trace", Extraction::Trace),
    ("https://cloudflare.com/cdn-cgi/trace", Extraction::Trace),
    ("https://icanhazip.com/", Extraction::Plain),
    ("https://api.ipify.org", Extraction::Plain),
    ("https://api.my-ip.io/v2/ip.txt", Extraction::Plain),
];
