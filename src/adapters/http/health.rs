//! Liveness endpoint used by the front end to check connectivity.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::domain::foundation::Timestamp;

use super::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: i64,
}

/// GET /api/test - Report that the backend is reachable
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Backend conectado com sucesso!",
        timestamp: Timestamp::now().as_unix_millis(),
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/api/test", get(health))
}
