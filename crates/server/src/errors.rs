use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Rejection for arguments that fail adaptor-level validation; invalid shapes
/// never reach the operation layer.
#[derive(Debug)]
pub struct ValidationRejection(pub String);

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        let msg = self.0;
        let status = StatusCode::UNPROCESSABLE_ENTITY;
        (status, Json(serde_json::json!({"detail": msg}))).into_response()
    }
}
