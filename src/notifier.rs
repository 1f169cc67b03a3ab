use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::constants::notifications;
use crate::state::MaintenanceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusEventKind {
    MaintenanceStarted,
    MaintenanceEnded,
    ScheduleUpdated,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusEvent {
    pub timestamp: DateTime<Utc>,
    pub event: StatusEventKind,
    pub state: MaintenanceState,
}

/// Best-effort webhook push for maintenance state changes. An empty webhook
/// URL disables delivery entirely; failures are logged and swallowed so
/// notification problems never affect the state machine.
pub struct StatusNotifier {
    webhook_url: String,
    client: Client,
}

impl StatusNotifier {
    pub fn new(webhook_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(notifications::WEBHOOK_TIMEOUT_SECONDS))
            .build()
            .expect("Failed to create HTTP client for StatusNotifier");

        Self {
            webhook_url,
            client,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.webhook_url.is_empty()
    }

    /// Forward state changes from the scheduler to the configured webhook.
    /// The task runs until the sending side of the channel is dropped.
    pub fn spawn(self, mut updates: watch::Receiver<MaintenanceState>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut previous = updates.borrow_and_update().clone();
            while updates.changed().await.is_ok() {
                let current = updates.borrow_and_update().clone();
                let event = match (previous.is_maintenance_mode, current.is_maintenance_mode) {
                    (false, true) => StatusEventKind::MaintenanceStarted,
                    (true, false) => StatusEventKind::MaintenanceEnded,
                    _ => StatusEventKind::ScheduleUpdated,
                };

                self.send_webhook(&StatusEvent {
                    timestamp: Utc::now(),
                    event,
                    state: current.clone(),
                })
                .await;

                previous = current;
            }
            debug!("Status notifier stopped");
        })
    }

    async fn send_webhook(&self, event: &StatusEvent) {
        if self.webhook_url.is_empty() {
            debug!("No webhook URL configured, skipping status notification");
            return;
        }

        match timeout(
            Duration::from_secs(notifications::WEBHOOK_TIMEOUT_SECONDS),
            self.client.post(&self.webhook_url).json(event).send(),
        )
        .await
        {
            Ok(Ok(response)) => {
                if response.status().is_success() {
                    info!("Status notification sent: {:?}", event.event);
                } else {
                    warn!(
                        "Status webhook returned status {} for {:?}",
                        response.status(),
                        event.event
                    );
                }
            }
            Ok(Err(e)) => {
                warn!("Failed to send status notification for {:?}: {}", event.event, e);
            }
            Err(_) => {
                warn!("Status webhook timeout for {:?}", event.event);
            }
        }
    }
}
