use axum::{extract::State, Json};
use crate::api::models::QuoteRequest;
use crate::api::AppState;
use crate::diagnostic::check_distinct;
use crate::errors::VelofixError;
use crate::models::Quote;

/// Running estimate for a selection. An empty selection quotes zero.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<Quote>, VelofixError> {
    check_distinct(&req.selected_types)?;
    let mut quote = state.catalog.quote(&req.selected_types)?;
    if req.emergency {
        quote = quote.with_surcharge(state.pricing.emergency_surcharge);
    }
    Ok(Json(quote))
}
