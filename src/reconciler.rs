use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::scheduler::MaintenanceScheduler;

/// Background driver for scheduled transitions: one tick per interval, each
/// tick re-evaluating the state against the wall clock. Ticks with nothing to
/// do are no-ops, so the cadence is safe to keep short.
pub struct ReconciliationLoop {
    scheduler: Arc<MaintenanceScheduler>,
    tick_interval: Duration,
}

/// Control handle for a running loop. Dropping the handle stops the loop as
/// well, so an abandoned reconciler cannot keep ticking in the background.
pub struct ReconcilerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ReconciliationLoop {
    pub fn new(scheduler: Arc<MaintenanceScheduler>, tick_interval: Duration) -> Self {
        Self {
            scheduler,
            tick_interval,
        }
    }

    /// Spawn the tick task. The first tick fires immediately, so a window
    /// that elapsed while the process was down is resolved right away.
    pub fn start(self) -> ReconcilerHandle {
        info!(
            "Starting reconciliation loop with {:?} tick interval",
            self.tick_interval
        );

        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.tick_interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        self.scheduler.evaluate_transitions(Utc::now()).await;
                    }
                    _ = shutdown_rx.changed() => {
                        debug!("Reconciliation loop received shutdown signal");
                        break;
                    }
                }
            }
            info!("Reconciliation loop stopped");
        });

        ReconcilerHandle { shutdown, task }
    }
}

impl ReconcilerHandle {
    /// Signal the loop to stop and wait for its task to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.task.await {
            warn!("Reconciliation task ended abnormally: {}", e);
        }
    }
}
