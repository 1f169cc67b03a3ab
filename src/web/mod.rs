pub mod handlers;
pub mod server;

pub use server::{create_router, start_web_server};

use serde::Serialize;
use std::sync::Arc;

use crate::config::Config;
use crate::scheduler::MaintenanceScheduler;

// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub scheduler: Arc<MaintenanceScheduler>,
}

impl AppState {
    pub fn new(config: Arc<Config>, scheduler: Arc<MaintenanceScheduler>) -> Self {
        Self { config, scheduler }
    }
}

// API response types for the observer surface
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceSummary {
    pub is_maintenance_mode: bool,
    pub maintenance_start_time: Option<String>,
    pub maintenance_end_time: Option<String>,
    pub estimated_time: String,
    /// Countdown to the boundary that matters next: the pending start while
    /// mode is off, the scheduled end while mode is on
    pub countdown: Option<String>,
    pub checked_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BannerView {
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<String>,
}
