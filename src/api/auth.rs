use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
    Json,
};
use serde_json::json;
use subtle::ConstantTimeEq;
use tracing::warn;
use crate::api::AppState;

/// Compares without short-circuiting on the first differing byte.
pub fn token_matches(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}

pub async fn api_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    if let Some(expected_token) = state.api_token.as_deref() {
        let auth_header = request.headers()
            .get("Authorization")
            .and_then(|v| v.to_str().ok());

        match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
            Some(token) if token_matches(token, expected_token) => {}
            Some(_) => {
                warn!(path = %request.uri().path(), "Rejected request with invalid API token");
                return Err((StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid API token"}))));
            }
            None => {
                return Err((StatusCode::UNAUTHORIZED, Json(json!({"error": "Missing Authorization header"}))));
            }
        }
    }

    Ok(next.run(request).await)
}
