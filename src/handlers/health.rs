//! Health check handler

use crate::models::HealthResponse;
use axum::response::Json;
use tracing::debug;

/// Liveness check
///
/// GET /api/health
/// Always reports ok; external dependencies are not checked
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Executing health check");

    Json(HealthResponse { ok: true })
}
