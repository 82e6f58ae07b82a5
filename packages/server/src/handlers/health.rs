use axum::http::StatusCode;

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    operation_id = "healthCheck",
    summary = "Health check",
    responses(
        (status = 200, description = "Service is up", content_type = "text/plain", body = String),
    ),
)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
