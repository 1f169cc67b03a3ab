use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single maintenance record shared by the scheduler, the store, and the
/// API surface. Persisted as-is; `#[serde(default)]` keeps old or partial
/// records loadable, and unknown fields are ignored on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceState {
    pub is_maintenance_mode: bool,
    pub maintenance_start_time: Option<DateTime<Utc>>,
    pub maintenance_end_time: Option<DateTime<Utc>>,
    /// Free-text duration hint shown when no precise boundary is known
    pub estimated_time: String,
}

/// Partial write against [`MaintenanceState`]. Boundary fields are doubly
/// optional: the outer `None` leaves the field untouched, `Some(None)` clears
/// it, `Some(Some(t))` sets it.
#[derive(Debug, Clone, Default)]
pub struct StateUpdate {
    pub is_maintenance_mode: Option<bool>,
    pub maintenance_start_time: Option<Option<DateTime<Utc>>>,
    pub maintenance_end_time: Option<Option<DateTime<Utc>>>,
    pub estimated_time: Option<String>,
}

impl StateUpdate {
    /// Force maintenance mode on or off without touching the schedule.
    pub fn force_mode(enabled: bool) -> Self {
        Self {
            is_maintenance_mode: Some(enabled),
            ..Self::default()
        }
    }

    /// Replace the scheduled window with the given boundaries. A boundary
    /// passed as `None` is cleared, so a new window never inherits leftovers
    /// from the previous one.
    pub fn schedule(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self {
            maintenance_start_time: Some(start),
            maintenance_end_time: Some(end),
            ..Self::default()
        }
    }

    /// Remove any scheduled boundaries, leaving the current mode alone.
    pub fn clear_schedule() -> Self {
        Self::schedule(None, None)
    }
}

impl MaintenanceState {
    /// Merge the provided fields into this state. Fields absent from the
    /// update keep their current values.
    pub fn apply_update(&mut self, update: StateUpdate) {
        if let Some(mode) = update.is_maintenance_mode {
            self.is_maintenance_mode = mode;
        }
        if let Some(start) = update.maintenance_start_time {
            self.maintenance_start_time = start;
        }
        if let Some(end) = update.maintenance_end_time {
            self.maintenance_end_time = end;
        }
        if let Some(text) = update.estimated_time {
            self.estimated_time = text;
        }
    }
}
