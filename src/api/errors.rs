use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::warn;
use crate::errors::VelofixError;

impl IntoResponse for VelofixError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            VelofixError::InvalidState(_) => StatusCode::BAD_REQUEST,
            VelofixError::Validation(_) => StatusCode::BAD_REQUEST,
            VelofixError::Configuration(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let class = self.classify();
        warn!(status = status.as_u16(), error_type = class.error_type, error = %self, "Request failed");

        (status, Json(json!({"error": self.to_string(), "type": class.error_type}))).into_response()
    }
}
