// Administrative maintenance scheduling endpoints

use axum::{extract::State, http::StatusCode, response::Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use super::common::{parse_timestamp, summarize_state, ApiResponse, ApiResult};
use crate::state::StateUpdate;
use crate::web::{AppState, MaintenanceSummary};

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub estimated_time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ModeRequest {
    pub enabled: bool,
}

/// Schedule a maintenance window. The supplied boundaries replace the
/// previous window entirely; an omitted boundary is cleared rather than
/// inherited.
pub async fn schedule_maintenance(
    State(state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> ApiResult<MaintenanceSummary> {
    let start = parse_boundary("start_time", request.start_time.as_deref())?;
    let end = parse_boundary("end_time", request.end_time.as_deref())?;

    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            let message = format!(
                "end_time {} must not be earlier than start_time {}",
                end.to_rfc3339(),
                start.to_rfc3339()
            );
            warn!("Rejected maintenance schedule: {}", message);
            return Err((StatusCode::BAD_REQUEST, Json(ApiResponse::error(message))));
        }
    }

    info!(
        "Maintenance window scheduled: start={:?}, end={:?}",
        request.start_time, request.end_time
    );

    let mut update = StateUpdate::schedule(start, end);
    update.estimated_time = request.estimated_time;

    let applied = state.scheduler.apply(update).await;
    Ok(Json(ApiResponse::success(summarize_state(&applied, Utc::now()))))
}

/// Clear any scheduled window without touching the current mode.
pub async fn clear_maintenance_schedule(
    State(state): State<AppState>,
) -> ApiResult<MaintenanceSummary> {
    info!("Maintenance schedule cleared");

    let applied = state.scheduler.apply(StateUpdate::clear_schedule()).await;
    Ok(Json(ApiResponse::success(summarize_state(&applied, Utc::now()))))
}

/// Force maintenance mode on or off. Scheduled boundaries are left in place,
/// so a pending future start survives a force-off.
pub async fn set_maintenance_mode(
    State(state): State<AppState>,
    Json(request): Json<ModeRequest>,
) -> ApiResult<MaintenanceSummary> {
    info!("Maintenance mode manually set to {}", request.enabled);

    let applied = state
        .scheduler
        .apply(StateUpdate::force_mode(request.enabled))
        .await;
    Ok(Json(ApiResponse::success(summarize_state(&applied, Utc::now()))))
}

// Reject malformed timestamps at the admin boundary with a 400 before any
// state is touched.
fn parse_boundary(
    field: &str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, (StatusCode, Json<ApiResponse<()>>)> {
    match value {
        None => Ok(None),
        Some(raw) => match parse_timestamp(field, raw) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(message) => {
                warn!("Rejected maintenance schedule: {}", message);
                Err((StatusCode::BAD_REQUEST, Json(ApiResponse::error(message))))
            }
        },
    }
}
