// Read-only maintenance status endpoints

use axum::extract::{Query, State};
use axum::response::Json;
use chrono::Utc;

use super::common::{banner_view, summarize_state, ApiResponse, ApiResult, BannerQuery};
use crate::web::{AppState, BannerView, MaintenanceSummary};

/// Current maintenance state with the derived countdown.
pub async fn get_maintenance_status(State(state): State<AppState>) -> ApiResult<MaintenanceSummary> {
    let snapshot = state.scheduler.state().await;
    Ok(Json(ApiResponse::success(summarize_state(
        &snapshot,
        Utc::now(),
    ))))
}

/// Pre-maintenance banner contents for display surfaces. Callers may supply
/// their own message prefix; the configured default is used otherwise.
pub async fn get_maintenance_banner(
    State(state): State<AppState>,
    Query(query): Query<BannerQuery>,
) -> ApiResult<BannerView> {
    let snapshot = state.scheduler.state().await;
    let message = query
        .message
        .unwrap_or_else(|| state.config.banner_message.clone());

    Ok(Json(ApiResponse::success(banner_view(
        &snapshot,
        &message,
        Utc::now(),
    ))))
}
