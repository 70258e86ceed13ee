//! Public IP discovery.
//!
//! Determines the caller's current public IP by querying an ordered list
//! of external lookup services until one yields a valid address. Services
//! answer either with the bare address or with a multi-line diagnostic
//! trace carrying an `ip=` line; each endpoint is tagged with its
//! extraction strategy. Individual service outages are routine and skipped
//! silently, so no single outage blocks the system.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;
