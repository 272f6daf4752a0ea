/**
 * Router Configuration
 *
 * # Routes
 *
 * - `GET /api/events` - Event stream subscription (session required)
 * - `POST /api/access/scan` - Report an RFID scan (staff session required)
 * - `GET /health` - Liveness and subscriber count
 *
 * Unknown paths return a JSON 404.
 */

use crate::backend::access::handlers::handle_access_scan;
use crate::backend::error::BackendError;
use crate::backend::realtime::broadcast::Broadcaster;
use crate::backend::realtime::subscription::handle_event_stream;
use crate::backend::server::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

/// Body of `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub subscribers: usize,
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/api/events", get(handle_event_stream))
        .route("/api/access/scan", post(handle_access_scan))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health(State(broadcaster): State<Broadcaster>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        subscribers: broadcaster.subscriber_count(),
    })
}

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Not found")
}
