//! Liveness probe.

use axum::Json;

use crate::models::HealthResponse;

/// `GET /api/health` — reports the relay is up. Does not touch the upstream.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: asfalt_core::version().to_string(),
    })
}
