use axum::{
    extract::{Path, State},
    Json,
};
use crate::api::models::CatalogResponse;
use crate::api::AppState;
use crate::catalog::IssueCatalogEntry;
use crate::errors::VelofixError;
use crate::models::IssueType;

pub async fn list_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    let issues = state.catalog.entries().to_vec();
    let total = issues.len();
    Json(CatalogResponse { issues, total })
}

pub async fn get_catalog_entry(
    State(state): State<AppState>,
    Path(issue_type): Path<String>,
) -> Result<Json<IssueCatalogEntry>, VelofixError> {
    let issue_type: IssueType = issue_type.parse().map_err(VelofixError::Validation)?;
    let entry = state.catalog.require(issue_type)?;
    Ok(Json(entry.clone()))
}
