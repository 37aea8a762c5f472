use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::{debug, instrument};

#[instrument(name = "root_handler", skip_all)]
pub async fn root_handler(
    cargo_pkg_name: &'static str,
    cargo_pkg_version: &'static str,
) -> impl IntoResponse {
    Json(json!({
        "service": cargo_pkg_name,
        "version": cargo_pkg_version,
        "status": "ok"
    }))
}

/// Liveness probe.
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

/// Readiness probe. The service holds no connections, so being up is being ready.
pub async fn ready_handler() -> impl IntoResponse {
    Json(json!({ "status": "ready" }))
}

#[instrument(name = "not_found_handler", skip_all, fields(uri = %uri))]
pub async fn not_found_handler(uri: axum::http::Uri) -> impl IntoResponse {
    debug!("no route matched");
    (StatusCode::NOT_FOUND, "nothing to see here")
}
