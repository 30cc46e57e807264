use std::time::Duration;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::pkg::server::state::{wait_for_db, AppState};

const DB_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn health_db(State(state): State<AppState>) -> impl IntoResponse {
    match wait_for_db(&state.db_pool, DB_PROBE_TIMEOUT).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "db_ok" }))),
        Err(err) => {
            tracing::warn!("database probe failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "db_down", "error": err.to_string() })),
            )
        }
    }
}
