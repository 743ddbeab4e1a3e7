use axum::{extract::State, Json};
use crate::api::models::DiagnoseRequest;
use crate::api::AppState;
use crate::diagnostic::{check_answers_selected, diagnose, Diagnosis};
use crate::errors::VelofixError;

pub async fn create_diagnosis(
    State(state): State<AppState>,
    Json(req): Json<DiagnoseRequest>,
) -> Result<Json<Diagnosis>, VelofixError> {
    check_answers_selected(&req.selected_types, &req.answers)?;
    let mut diagnosis = diagnose(&req.selected_types, &req.answers, &state.catalog, state.ids.as_ref())?;
    if req.emergency {
        diagnosis.quote = diagnosis.quote.with_surcharge(state.pricing.emergency_surcharge);
    }
    Ok(Json(diagnosis))
}
