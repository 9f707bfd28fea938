//! Error conversions
//!
//! Renders [`AppError`] as an HTTP response (feature-gated on `axum`).

#[cfg(feature = "axum")]
use super::app_error::AppError;

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Error envelope: reason phrase + message
        let body = serde_json::json!({
            "code": self.code(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}
