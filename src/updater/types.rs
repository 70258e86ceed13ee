// Standard library
use std::net::IpAddr;

// Project imports
use crate::providers::bunny::types::Bunny;
use crate::settings::types::Settings;
use crate::utility::ip_resolver::types::IpResolver;
use crate::zones::types::Zones;

/// Drives the update loop: resolves zone identifiers at startup, then
/// polls the public IP on an interval and fans out concurrent per-zone
/// record updates whenever the address changes.
pub struct Updater {
    pub(super) settings: Settings,
    pub(super) client: Bunny,
    pub(super) resolver: IpResolver,
    pub(super) zones: Zones,
    /// Last confirmed address. `None` until the first fully successful
    /// update, so the first check always counts as a change.
    pub(super) current_ip: Option<IpAddr>,
}
