//! `GET /health`: liveness plus a probe of the link store.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Reports `healthy` with the number of stored links, or `degraded` with
/// 503 when the store cannot be counted.
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": { "link_store": { "status": "ok", "message": "3 links stored" } }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let link_store = match state.dispatcher.links().link_count().await {
        Ok(count) => CheckStatus::ok(format!("{} links stored", count)),
        Err(e) => {
            tracing::warn!(error = %e, "Link store health probe failed");
            CheckStatus::error(format!("Link store error: {}", e))
        }
    };

    let response = HealthResponse::from_checks(HealthChecks { link_store });

    if response.is_healthy() {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
