use crate::web::{handlers, AppState};
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Serve the API until a shutdown signal arrives. Returns once the listener
/// has drained, so callers can tear down background tasks afterwards.
pub async fn start_web_server(state: AppState) -> Result<()> {
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // === OBSERVER ROUTES ===
        .route(
            "/api/maintenance/status",
            get(handlers::get_maintenance_status),
        )
        .route(
            "/api/maintenance/banner",
            get(handlers::get_maintenance_banner),
        )
        // === ADMINISTRATIVE ROUTES ===
        .route(
            "/api/maintenance/schedule",
            post(handlers::schedule_maintenance).delete(handlers::clear_maintenance_schedule),
        )
        .route(
            "/api/maintenance/mode",
            post(handlers::set_maintenance_mode),
        )
        // Add middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
