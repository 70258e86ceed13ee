// 3rd party crates
use thiserror::Error;

// Project imports
use crate::providers::bunny::errors::BunnyError;
use crate::utility::ip_resolver::errors::IpResolutionError;

#[derive(Debug, Error)]
pub enum UpdaterError {
    #[error("Zone setup failed: {0}")]
    ZoneSetup(#[from] BunnyError),

    #[error("Zone registry incomplete: resolved {resolved} of {expected} zones")]
    IncompleteRegistry { resolved: usize, expected: usize },

    #[error("Failed to determine current IP address: {0}")]
    IpResolution(#[from] IpResolutionError),

    #[error("{failed} of {total} zone updates failed")]
    UpdatesFailed { failed: usize, total: usize },
}
