use axum::http::StatusCode;

/// `GET /healthz`: process liveness.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz`: readiness. Services that need a deeper check (e.g. a
/// database ping) mount their own handler instead.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
