pub mod config;
pub mod constants;
pub mod countdown;
pub mod notifier;
pub mod reconciler;
pub mod scheduler;
pub mod state;
pub mod store;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use notifier::StatusNotifier;
pub use reconciler::{ReconcilerHandle, ReconciliationLoop};
pub use scheduler::MaintenanceScheduler;
pub use state::{MaintenanceState, StateUpdate};
pub use store::StateStore;
