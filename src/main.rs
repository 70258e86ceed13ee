// Standard library
use std::process::ExitCode;

// 3rd party crates
use tokio::signal::ctrl_c;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod providers;
mod settings;
mod updater;
mod utility;
mod zones;

// Project imports
use crate::providers::bunny::types::Bunny;
use crate::settings::types::Settings;
use crate::updater::types::Updater;
use crate::utility::ip_resolver::types::IpResolver;

/// Main entry point for the DDNS client.
///
/// Keeps the A records of the configured Bunny DNS zones pointed at the
/// caller's current public IP: resolves zone identifiers once at startup,
/// then polls the public address on an interval and pushes concurrent
/// per-zone record updates whenever it changes.
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let settings: Settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // setup logging.
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(&settings.log_level)
        .add_directive("hyper_util=error".parse().unwrap())
        .add_directive("hyper=error".parse().unwrap())
        .add_directive("reqwest=error".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();

    info!("⚙️ Settings have been loaded.");

    let client: Bunny = match Bunny::new(&settings.api_key) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to initialize DNS client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Create a broadcast channel for shutdown signal
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

    // Handle Ctrl+C
    tokio::spawn(async move {
        if let Err(e) = ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        info!("Received shutdown signal, initiating graceful shutdown...");
        let _ = shutdown_tx.send(());
    });

    let updater = Updater::new(settings, client, IpResolver::new());

    if let Err(e) = updater.run(shutdown_rx).await {
        error!("Application error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Shutdown complete.");
    ExitCode::SUCCESS
}
