/// A managed DNS zone and the identifiers of its A record at the provider.
///
/// Created once during startup resolution (or provisioning) and never
/// mutated; re-resolving a zone replaces the value wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub name: String,
    pub zone_id: String,
    pub record_id: String,
}

/// In-memory registry of resolved zones, keyed by zone name.
///
/// Entries keep insertion order; `names` returns a sorted copy for log
/// output. Populated by the updater during startup resolution, read-only
/// during the polling phase.
#[derive(Debug, Default)]
pub struct Zones {
    pub(super) zones: Vec<Zone>,
}
