// Common types and utilities for API handlers

use axum::{http::StatusCode, response::Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::countdown;
use crate::state::MaintenanceState;
use crate::web::{BannerView, MaintenanceSummary};

// Helper type for API responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<()>>)>;

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

// Query parameters
#[derive(Deserialize)]
pub struct BannerQuery {
    pub message: Option<String>,
}

// State conversion helpers
pub fn summarize_state(state: &MaintenanceState, now: DateTime<Utc>) -> MaintenanceSummary {
    let countdown = if state.is_maintenance_mode {
        state
            .maintenance_end_time
            .map(|end| countdown::project(end, now))
    } else {
        state
            .maintenance_start_time
            .map(|start| countdown::project(start, now))
    };

    MaintenanceSummary {
        is_maintenance_mode: state.is_maintenance_mode,
        maintenance_start_time: state.maintenance_start_time.map(|t| t.to_rfc3339()),
        maintenance_end_time: state.maintenance_end_time.map(|t| t.to_rfc3339()),
        estimated_time: state.estimated_time.clone(),
        countdown,
        checked_at: now.to_rfc3339(),
    }
}

/// Compose the pre-maintenance banner. The banner only exists while mode is
/// off and a start is pending; once maintenance begins it is hidden and the
/// maintenance page itself takes over.
pub fn banner_view(state: &MaintenanceState, message: &str, now: DateTime<Utc>) -> BannerView {
    match state.maintenance_start_time {
        Some(start) if !state.is_maintenance_mode => BannerView {
            visible: true,
            text: Some(format!("{} {}", message, countdown::project(start, now))),
            target_time: Some(start.to_rfc3339()),
        },
        _ => BannerView {
            visible: false,
            text: None,
            target_time: None,
        },
    }
}

/// Parse an RFC 3339 timestamp supplied by an administrative request. This is
/// the only place timestamps enter the system, so the scheduler itself never
/// re-validates them.
pub fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("Invalid {} '{}': {}", field, value, e))
}
