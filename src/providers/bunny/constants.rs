/// Base endpoint of the Bunny DNS HTTP API.
pub const BUNNY_API_BASE: &str = "https://api.bunny.net";

/// Record type code the provider assigns to "A" records.
pub const RECORD_TYPE_A: i32 = 0;

/// User agent sent with every API request.
pub const USER_AGENT: &str = "bunny-ddns";

/// Per-request timeout for API calls.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Value written to the A record of a freshly provisioned zone. The first
/// poll tick always treats the address as changed and overwrites it.
pub const PLACEHOLDER_RECORD_VALUE: &str = "0.0.0.0";
