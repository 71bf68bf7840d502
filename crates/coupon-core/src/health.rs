use axum::http::StatusCode;

/// Handler for `GET /healthz`: process liveness only, never touches storage.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
