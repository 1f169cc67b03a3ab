//! Integration tests for the reconciliation loop: a real ticker driving real
//! transitions against the wall clock, with short windows and generous
//! polling deadlines to keep the tests fast but stable.

mod common;

use maintenance_manager::{ReconciliationLoop, StateUpdate};
use std::time::Duration;

#[tokio::test]
async fn test_loop_drives_a_scheduled_window_through_both_transitions() {
    let (_dir, scheduler) = common::temp_scheduler().await;
    let now = chrono::Utc::now();
    scheduler
        .apply(StateUpdate::schedule(
            Some(now + chrono::Duration::milliseconds(500)),
            Some(now + chrono::Duration::milliseconds(1500)),
        ))
        .await;

    let handle =
        ReconciliationLoop::new(scheduler.clone(), Duration::from_millis(50)).start();

    common::wait_for_state(&scheduler, |s| s.is_maintenance_mode).await;

    let settled = common::wait_for_state(&scheduler, |s| {
        !s.is_maintenance_mode && s.maintenance_end_time.is_none()
    })
    .await;
    assert_eq!(settled.maintenance_start_time, None);

    handle.shutdown().await;
}

#[tokio::test]
async fn test_first_tick_resolves_a_window_that_elapsed_while_down() {
    let (_dir, scheduler) = common::temp_scheduler().await;
    let now = chrono::Utc::now();
    scheduler
        .apply(StateUpdate::schedule(
            Some(now - chrono::Duration::minutes(10)),
            Some(now - chrono::Duration::minutes(5)),
        ))
        .await;

    // The interval is far longer than the test deadline, so only the
    // immediate first tick can resolve the stale window.
    let handle = ReconciliationLoop::new(scheduler.clone(), Duration::from_secs(3600)).start();

    let settled = common::wait_for_state(&scheduler, |s| {
        s.maintenance_start_time.is_none() && s.maintenance_end_time.is_none()
    })
    .await;
    assert!(!settled.is_maintenance_mode);

    handle.shutdown().await;
}

#[tokio::test]
async fn test_shutdown_stops_evaluation() {
    let (_dir, scheduler) = common::temp_scheduler().await;
    let handle =
        ReconciliationLoop::new(scheduler.clone(), Duration::from_millis(50)).start();
    handle.shutdown().await;

    // A past-due start applied after shutdown must never activate.
    scheduler
        .apply(StateUpdate::schedule(
            Some(chrono::Utc::now() - chrono::Duration::seconds(30)),
            None,
        ))
        .await;
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(!scheduler.state().await.is_maintenance_mode);
}

#[tokio::test]
async fn test_dropping_the_handle_stops_the_loop() {
    let (_dir, scheduler) = common::temp_scheduler().await;
    let handle =
        ReconciliationLoop::new(scheduler.clone(), Duration::from_millis(50)).start();
    drop(handle);

    // Give the detached task time to notice the closed control channel.
    tokio::time::sleep(Duration::from_millis(200)).await;

    scheduler
        .apply(StateUpdate::schedule(
            Some(chrono::Utc::now() - chrono::Duration::seconds(30)),
            None,
        ))
        .await;
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(!scheduler.state().await.is_maintenance_mode);
}
