//! Shared fixtures for integration tests.

// Allow unused code in test fixtures - not every test file uses every helper
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use maintenance_manager::{MaintenanceScheduler, MaintenanceState, StateStore};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// File-backed store in a throwaway directory. The directory must be kept
/// alive for the lifetime of the store.
pub async fn temp_store() -> (TempDir, Arc<StateStore>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = store_at(&dir).await;
    (dir, store)
}

/// Open a store on the database file inside `dir`, creating it on first use.
/// Reusing the same directory simulates a process restart.
pub async fn store_at(dir: &TempDir) -> Arc<StateStore> {
    let path = dir.path().join("state.db");
    let store = StateStore::new(path.to_str().expect("Temp path is not valid UTF-8"))
        .await
        .expect("Failed to initialize state store");
    Arc::new(store)
}

/// Scheduler on a fresh temp store.
pub async fn temp_scheduler() -> (TempDir, Arc<MaintenanceScheduler>) {
    let (dir, store) = temp_store().await;
    let scheduler = Arc::new(MaintenanceScheduler::new(store).await);
    (dir, scheduler)
}

/// Parse an RFC 3339 timestamp for test data.
pub fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("Invalid test timestamp")
        .with_timezone(&Utc)
}

/// Poll the in-memory state until it satisfies `predicate` or the deadline
/// passes.
pub async fn wait_for_state<F>(scheduler: &MaintenanceScheduler, predicate: F) -> MaintenanceState
where
    F: Fn(&MaintenanceState) -> bool,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        let state = scheduler.state().await;
        if predicate(&state) {
            return state;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "State never reached expected shape, last seen: {:?}",
            state
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Poll the persisted record until it satisfies `predicate` or the deadline
/// passes. Persists happen in the background, so tests cannot read the store
/// immediately after a write.
pub async fn wait_for_persisted<F>(store: &StateStore, predicate: F) -> MaintenanceState
where
    F: Fn(&MaintenanceState) -> bool,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        let state = store.load().await;
        if predicate(&state) {
            return state;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "Persisted state never reached expected shape, last seen: {:?}",
            state
        );
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}
