use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::errors::VelofixError;
use crate::models::{IssueType, Quote, Severity};

use super::answers::AnswerSheet;
use super::engine::{diagnose, Diagnosis};
use super::id::IdGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Selection,
    Questions,
    Results,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Questions => "questions",
            Self::Results => "results",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-progress state of one diagnosis flow.
///
/// Transitions borrow the current session and return the next one, so a
/// rejected transition leaves the caller's session untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticSession {
    stage: Stage,
    selected_types: Vec<IssueType>,
    answers: AnswerSheet,
}

impl DiagnosticSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn selected_types(&self) -> &[IssueType] {
        &self.selected_types
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn is_selected(&self, issue_type: IssueType) -> bool {
        self.selected_types.contains(&issue_type)
    }

    /// Add the type if absent, remove it if present.
    ///
    /// Answers of a removed type are kept so re-selecting it restores them.
    pub fn toggle_selection(
        &self,
        catalog: &Catalog,
        issue_type: IssueType,
    ) -> Result<Self, VelofixError> {
        self.expect_stage(Stage::Selection, "change the selection")?;

        let mut next = self.clone();
        if let Some(pos) = next.selected_types.iter().position(|t| *t == issue_type) {
            next.selected_types.remove(pos);
            debug!(issue_type = %issue_type, "Deselected issue");
        } else {
            let entry = catalog.require(issue_type)?;
            next.answers.ensure_slots(issue_type, entry.questions.len());
            next.selected_types.push(issue_type);
            debug!(issue_type = %issue_type, "Selected issue");
        }
        Ok(next)
    }

    pub fn begin_questions(&self) -> Result<Self, VelofixError> {
        self.expect_stage(Stage::Selection, "start the questions")?;
        if self.selected_types.is_empty() {
            return Err(VelofixError::InvalidState(
                "Select at least one issue before continuing".into(),
            ));
        }
        Ok(Self { stage: Stage::Questions, ..self.clone() })
    }

    /// Return to selection, keeping both the selection and recorded answers.
    pub fn back_to_selection(&self) -> Result<Self, VelofixError> {
        self.expect_stage(Stage::Questions, "go back to selection")?;
        Ok(Self { stage: Stage::Selection, ..self.clone() })
    }

    pub fn record_answer(
        &self,
        issue_type: IssueType,
        question_index: usize,
        value: bool,
    ) -> Result<Self, VelofixError> {
        self.expect_stage(Stage::Questions, "answer questions")?;
        if !self.is_selected(issue_type) {
            return Err(VelofixError::InvalidState(format!(
                "Issue type '{}' is not selected",
                issue_type
            )));
        }
        let mut next = self.clone();
        next.answers.set(issue_type, question_index, value)?;
        debug!(issue_type = %issue_type, question_index, value, "Recorded answer");
        Ok(next)
    }

    /// Running estimate for the current selection, valid in every stage.
    pub fn running_quote(&self, catalog: &Catalog) -> Result<Quote, VelofixError> {
        catalog.quote(&self.selected_types)
    }

    /// Severity the type would get if the diagnosis were finalized now.
    pub fn current_severity(&self, issue_type: IssueType) -> Severity {
        self.answers.severity(issue_type)
    }

    /// Produce the diagnosis and move to the results stage.
    pub fn finalize(
        &self,
        catalog: &Catalog,
        ids: &dyn IdGenerator,
    ) -> Result<(Self, Diagnosis), VelofixError> {
        if self.stage == Stage::Results {
            return Err(VelofixError::InvalidState(
                "Diagnosis already finalized; reset to start a new one".into(),
            ));
        }
        let diagnosis = diagnose(&self.selected_types, &self.answers, catalog, ids)?;
        let next = Self { stage: Stage::Results, ..self.clone() };
        Ok((next, diagnosis))
    }

    /// Fresh, empty session in the selection stage.
    pub fn reset(&self) -> Self {
        Self::new()
    }

    fn expect_stage(&self, expected: Stage, action: &str) -> Result<(), VelofixError> {
        if self.stage != expected {
            return Err(VelofixError::InvalidState(format!(
                "Cannot {} during the {} stage",
                action, self.stage
            )));
        }
        Ok(())
    }
}
