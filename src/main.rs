use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod constants;
mod countdown;
mod notifier;
mod reconciler;
mod scheduler;
mod state;
mod store;
mod web;

use config::Config;
use notifier::StatusNotifier;
use reconciler::ReconciliationLoop;
use scheduler::MaintenanceScheduler;
use store::StateStore;
use web::{start_web_server, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with reduced verbosity
    let env_filter = EnvFilter::from_default_env()
        .add_directive("maintenance_manager=info".parse()?)
        .add_directive("tower_http=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?)
        .add_directive("sqlx=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting Maintenance Window Manager");

    // Load configuration
    let config = Arc::new(Config::load(constants::defaults::CONFIG_PATH).await?);
    info!(
        "Configuration loaded: listening on {}:{}, state database at {}",
        config.host, config.port, config.database_path
    );

    // Initialize persistent state store
    let store = Arc::new(StateStore::new(&config.database_path).await?);

    // Initialize scheduler with whatever state survived the last run
    let scheduler = Arc::new(MaintenanceScheduler::new(store).await);
    info!("Maintenance scheduler initialized");

    // Start webhook notifications if configured
    let notifier = StatusNotifier::new(config.status_webhook_url.clone());
    if notifier.is_enabled() {
        info!(
            "Status notifications enabled with webhook: {}",
            config.status_webhook_url
        );
        notifier.spawn(scheduler.subscribe());
    } else {
        warn!("Status notifications disabled - no webhook URL configured");
        warn!("Set 'status_webhook_url' in config/maintenance.toml to enable them");
    }

    // Start the reconciliation loop driving scheduled transitions
    let reconciler = ReconciliationLoop::new(
        scheduler.clone(),
        Duration::from_secs(config.tick_interval_seconds),
    )
    .start();

    // Run the web server until a shutdown signal arrives
    start_web_server(AppState::new(config, scheduler)).await?;

    // Stop background evaluation before exiting
    reconciler.shutdown().await;
    info!("Shutdown complete");

    Ok(())
}
