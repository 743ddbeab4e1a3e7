use axum::{extract::State, Json};
use crate::api::models::MechanicsResponse;
use crate::api::AppState;

pub async fn list_mechanics(State(state): State<AppState>) -> Json<MechanicsResponse> {
    let mechanics = state.roster.mechanics().to_vec();
    let total = mechanics.len();
    Json(MechanicsResponse { mechanics, total })
}
