// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

// Project imports
use crate::providers::bunny::errors::BunnyError;
use crate::providers::bunny::types::Bunny;
use crate::settings::types::Settings;
use crate::utility::ip_resolver::types::IpResolver;
use crate::zones::types::{Zone, Zones};

// Current module imports
use super::errors::UpdaterError;
use super::types::Updater;

impl Updater {
    pub fn new(settings: Settings, client: Bunny, resolver: IpResolver) -> Self {
        Self {
            settings,
            client,
            resolver,
            zones: Zones::new(),
            current_ip: None,
        }
    }

    /// Runs the update loop until a shutdown signal arrives.
    ///
    /// Startup zone resolution is fail-fast; once polling begins, tick
    /// failures are logged and retried on the next interval.
    pub async fn run(
        mut self,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), UpdaterError> {
        self.resolve_zones().await?;

        info!(
            zones = ?self.zones.names(),
            "Managing {} DNS zones, checking every {} seconds",
            self.zones.len(),
            self.settings.update_interval
        );

        let interval = Duration::from_secs(self.settings.update_interval);

        if self.settings.update_on_start {
            if let Err(e) = self.check_and_update().await {
                error!("Update check failed: {}", e);
            }
        }

        loop {
            let tick = async {
                tokio::time::sleep(interval).await;
                if let Err(e) = self.check_and_update().await {
                    error!("Update check failed: {}", e);
                }
            };

            // Racing the whole tick against the shutdown receiver drops
            // an in-flight request promptly instead of awaiting it.
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("Received shutdown signal, stopping update loop");
                    break;
                }
                _ = tick => {}
            }
        }

        Ok(())
    }

    /// Resolves provider identifiers for every configured zone name,
    /// provisioning missing zones when enabled.
    ///
    /// All resolutions run concurrently and are awaited before the
    /// outcome is decided; any failure aborts startup, so a partial
    /// registry is never operated on.
    pub(crate) async fn resolve_zones(&mut self) -> Result<(), UpdaterError> {
        let create_missing = self.settings.create_missing_zones;
        let client = &self.client;

        let mut futures: FuturesUnordered<_> = self
            .settings
            .zone_names
            .iter()
            .map(|name| async move {
                match client.resolve_zone(name).await {
                    Err(BunnyError::ZoneNotFound(_)) if create_missing => {
                        warn!(zone = %name, "Zone not found, creating it");
                        client.create_zone(name).await
                    }
                    result => result,
                }
            })
            .collect();

        let mut resolved: Vec<Zone> = Vec::new();
        let mut first_error: Option<BunnyError> = None;

        while let Some(result) = futures.next().await {
            match result {
                Ok(zone) => resolved.push(zone),
                Err(e) => {
                    error!("Zone resolution failed: {}", e);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }
        drop(futures);

        if let Some(e) = first_error {
            return Err(UpdaterError::ZoneSetup(e));
        }

        for zone in resolved {
            self.zones.insert(zone);
        }

        if self.zones.len() != self.settings.zone_names.len() {
            return Err(UpdaterError::IncompleteRegistry {
                resolved: self.zones.len(),
                expected: self.settings.zone_names.len(),
            });
        }

        Ok(())
    }

    /// One poll tick: resolve the current IP and push record updates when
    /// it differs from the last confirmed address.
    pub(crate) async fn check_and_update(&mut self) -> Result<(), UpdaterError> {
        let ip = self.resolver.resolve().await?;

        if self.current_ip == Some(ip) {
            info!("IP address unchanged, no update needed");
        } else {
            match self.current_ip {
                None => info!(
                    zones = ?self.zones.names(),
                    "Initial IP address detected ({}), updating DNS zones",
                    ip
                ),
                Some(previous) => info!(
                    zones = ?self.zones.names(),
                    "IP address changed ({} => {}), updating DNS zones",
                    previous,
                    ip
                ),
            }

            self.update_zones(ip).await?;
            self.current_ip = Some(ip);
        }

        info!(
            "Running next check in {} seconds",
            self.settings.update_interval
        );

        Ok(())
    }

    /// Fans out record updates for every registered zone concurrently and
    /// drains the whole batch: every update is attempted, and one failed
    /// zone fails the tick so the address is not committed.
    async fn update_zones(&self, ip: IpAddr) -> Result<(), UpdaterError> {
        let client = &self.client;

        let mut futures: FuturesUnordered<_> = self
            .zones
            .iter()
            .map(|zone| async move { (zone, client.update_zone_record(zone, ip).await) })
            .collect();

        let mut failed = 0;

        while let Some((zone, result)) = futures.next().await {
            match result {
                Ok(()) => debug!(zone = %zone.name, "Updated zone record"),
                Err(e) => {
                    error!(zone = %zone.name, "Failed to update zone record: {}", e);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(UpdaterError::UpdatesFailed {
                failed,
                total: self.zones.len(),
            });
        }

        Ok(())
    }
}
