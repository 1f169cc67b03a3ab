use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tracing::{info, warn};

use crate::state::{MaintenanceState, StateUpdate};
use crate::store::StateStore;

/// Owner of the live maintenance state. All writes go through [`apply`] or
/// [`evaluate_transitions`]; readers get point-in-time snapshots and can
/// follow changes through [`subscribe`].
///
/// [`apply`]: MaintenanceScheduler::apply
/// [`evaluate_transitions`]: MaintenanceScheduler::evaluate_transitions
/// [`subscribe`]: MaintenanceScheduler::subscribe
pub struct MaintenanceScheduler {
    state: Arc<RwLock<MaintenanceState>>,
    updates: watch::Sender<MaintenanceState>,
}

impl MaintenanceScheduler {
    pub async fn new(store: Arc<StateStore>) -> Self {
        let initial = store.load().await;
        if initial != MaintenanceState::default() {
            info!(
                "Restored persisted maintenance state: mode={}, start={:?}, end={:?}",
                initial.is_maintenance_mode,
                initial.maintenance_start_time,
                initial.maintenance_end_time
            );
        }

        let (updates, _) = watch::channel(initial.clone());
        Self::spawn_persist_worker(store, updates.subscribe());
        Self {
            state: Arc::new(RwLock::new(initial)),
            updates,
        }
    }

    // Single writer to the store, consuming published snapshots in channel
    // order. The watch channel coalesces bursts, so the store only ever
    // moves forward to a newer snapshot and a slow save never blocks a
    // mutation or a tick. The task ends when the scheduler is dropped.
    fn spawn_persist_worker(
        store: Arc<StateStore>,
        mut updates: watch::Receiver<MaintenanceState>,
    ) {
        tokio::spawn(async move {
            while updates.changed().await.is_ok() {
                let snapshot = updates.borrow_and_update().clone();
                if let Err(e) = store.save(&snapshot).await {
                    warn!("Failed to persist maintenance state: {}", e);
                }
            }
        });
    }

    /// Snapshot of the current state. Served from memory; the store is only
    /// consulted once at construction.
    pub async fn state(&self) -> MaintenanceState {
        self.state.read().await.clone()
    }

    /// Receiver that yields every published state change.
    pub fn subscribe(&self) -> watch::Receiver<MaintenanceState> {
        self.updates.subscribe()
    }

    /// Merge the given fields into the current state, publish the result to
    /// subscribers, and schedule a persist. This is the only mutation entry
    /// point for administrative writes.
    pub async fn apply(&self, update: StateUpdate) -> MaintenanceState {
        let snapshot = {
            let mut state = self.state.write().await;
            state.apply_update(update);
            // Published under the write lock so subscribers and the persist
            // worker observe mutations in the order they were applied.
            self.updates.send_replace(state.clone());
            state.clone()
        };

        info!(
            "Maintenance state updated: mode={}, start={:?}, end={:?}",
            snapshot.is_maintenance_mode,
            snapshot.maintenance_start_time,
            snapshot.maintenance_end_time
        );

        snapshot
    }

    /// Run the scheduled-transition checks against `now` and report whether
    /// anything fired. Called from the reconciliation loop only.
    ///
    /// Activation consumes the start boundary: once mode flips on, the start
    /// time is cleared so a later manual deactivation can never be overridden
    /// by a stale timestamp. Deactivation resets the whole window. A window
    /// whose start and end have both passed fires both edges in one call.
    pub async fn evaluate_transitions(&self, now: DateTime<Utc>) -> bool {
        let mut state = self.state.write().await;
        let mut changed = false;

        if !state.is_maintenance_mode {
            if let Some(start) = state.maintenance_start_time {
                if now >= start {
                    state.is_maintenance_mode = true;
                    state.maintenance_start_time = None;
                    changed = true;
                    info!(
                        "Maintenance mode activated (scheduled start {} reached)",
                        start.to_rfc3339()
                    );
                }
            }
        }

        if state.is_maintenance_mode {
            if let Some(end) = state.maintenance_end_time {
                if now >= end {
                    state.is_maintenance_mode = false;
                    state.maintenance_start_time = None;
                    state.maintenance_end_time = None;
                    changed = true;
                    info!(
                        "Maintenance mode deactivated (scheduled end {} reached)",
                        end.to_rfc3339()
                    );
                }
            }
        }

        if changed {
            self.updates.send_replace(state.clone());
        }
        changed
    }
}
