use serde::{Deserialize, Serialize};
use crate::booking::Mechanic;
use crate::catalog::IssueCatalogEntry;
use crate::diagnostic::AnswerSheet;
use crate::models::IssueType;

#[derive(Deserialize)]
pub struct QuoteRequest {
    pub selected_types: Vec<IssueType>,
    #[serde(default)]
    pub emergency: bool,
}

#[derive(Deserialize)]
pub struct DiagnoseRequest {
    pub selected_types: Vec<IssueType>,
    /// Per selected type, one entry per question: `true`, `false` or `null` for unanswered.
    #[serde(default)]
    pub answers: AnswerSheet,
    #[serde(default)]
    pub emergency: bool,
}

#[derive(Serialize)]
pub struct CatalogResponse {
    pub issues: Vec<IssueCatalogEntry>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct MechanicsResponse {
    pub mechanics: Vec<Mechanic>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub git_hash: Option<&'static str>,
}
