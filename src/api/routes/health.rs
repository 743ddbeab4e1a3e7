use axum::Json;
use crate::api::models::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "velofix",
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("VELOFIX_GIT_HASH"),
    })
}
