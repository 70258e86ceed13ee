// Current module imports
use super::types::{Zone, Zones};

impl Zone {
    /// Builds a zone value. Identifiers are the numeric strings assigned
    /// by the provider.
    pub fn new(
        name: impl Into<String>,
        zone_id: impl Into<String>,
        record_id: impl Into<String>,
    ) -> Self {
        let zone = Self {
            name: name.into(),
            zone_id: zone_id.into(),
            record_id: record_id.into(),
        };

        debug_assert!(!zone.name.is_empty());
        debug_assert!(zone.zone_id.bytes().all(|b| b.is_ascii_digit()) && !zone.zone_id.is_empty());
        debug_assert!(
            zone.record_id.bytes().all(|b| b.is_ascii_digit()) && !zone.record_id.is_empty()
        );

        zone
    }
}

impl Zones {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a zone, replacing any existing entry with the same name.
    pub fn insert(&mut self, zone: Zone) {
        match self.zones.iter_mut().find(|z| z.name == zone.name) {
            Some(existing) => *existing = zone,
            None => self.zones.push(zone),
        }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    /// Zone names sorted alphabetically, for log output.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.zones.iter().map(|zone| zone.name.clone()).collect();
        names.sort();
        names
    }
}
