use axum::{extract::State, Json};
use crate::api::AppState;
use crate::booking::{summarize, BookingContext, BookingRequest, BookingSummary};
use crate::errors::VelofixError;

pub async fn summarize_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<BookingSummary>, VelofixError> {
    let ctx = BookingContext {
        catalog: &state.catalog,
        roster: &state.roster,
        pricing: &state.pricing,
    };
    summarize(&req, &ctx).map(Json)
}
