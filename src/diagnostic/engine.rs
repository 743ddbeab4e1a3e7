use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::errors::VelofixError;
use crate::models::{DetectedIssue, IssueType, Quote};

use super::answers::AnswerSheet;
use super::id::IdGenerator;

/// Finalized output of one diagnosis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub issues: Vec<DetectedIssue>,
    pub quote: Quote,
}

/// Turn selected issue types and their answers into priced, severity-scored issues.
///
/// Output follows selection order. Answers held for types that are not
/// selected are ignored.
pub fn generate_diagnosis(
    selected: &[IssueType],
    answers: &AnswerSheet,
    catalog: &Catalog,
    ids: &dyn IdGenerator,
) -> Result<Vec<DetectedIssue>, VelofixError> {
    check_selection(selected)?;

    // Resolve every entry before minting ids so a bad selection produces nothing.
    let mut resolved = Vec::with_capacity(selected.len());
    for &issue_type in selected {
        let entry = catalog.require(issue_type)?;
        let slots = answers.slots(issue_type);
        if slots.len() > entry.questions.len() {
            return Err(VelofixError::InvalidState(format!(
                "{} answers given for '{}' but it has {} questions",
                slots.len(),
                issue_type,
                entry.questions.len()
            )));
        }
        resolved.push(entry);
    }

    let issues: Vec<DetectedIssue> = resolved
        .into_iter()
        .map(|entry| {
            let severity = answers.severity(entry.issue_type);
            debug!(
                issue_type = %entry.issue_type,
                positive_answers = answers.positive_count(entry.issue_type),
                severity = %severity,
                "Scored issue"
            );
            DetectedIssue {
                id: ids.next_id(entry.issue_type),
                issue_type: entry.issue_type,
                description: format!("{} detected through diagnostic", entry.label),
                severity,
                estimated_cost: entry.estimated_cost,
                estimated_time: entry.estimated_time,
            }
        })
        .collect();

    Ok(issues)
}

/// [`generate_diagnosis`] plus the aggregate quote for the same selection.
pub fn diagnose(
    selected: &[IssueType],
    answers: &AnswerSheet,
    catalog: &Catalog,
    ids: &dyn IdGenerator,
) -> Result<Diagnosis, VelofixError> {
    let issues = generate_diagnosis(selected, answers, catalog, ids)?;
    let quote = catalog.quote(selected)?;
    info!(
        issues = issues.len(),
        total_cost = quote.total_cost,
        total_time = quote.total_time,
        "Diagnosis generated"
    );
    Ok(Diagnosis { issues, quote })
}

fn check_selection(selected: &[IssueType]) -> Result<(), VelofixError> {
    if selected.is_empty() {
        return Err(VelofixError::InvalidState(
            "Select at least one issue before requesting a diagnosis".into(),
        ));
    }
    check_distinct(selected)
}

/// A selection is a set: each issue type may appear once.
pub fn check_distinct(selected: &[IssueType]) -> Result<(), VelofixError> {
    for (i, issue_type) in selected.iter().enumerate() {
        if selected[..i].contains(issue_type) {
            return Err(VelofixError::InvalidState(format!(
                "Issue type '{}' selected more than once",
                issue_type
            )));
        }
    }
    Ok(())
}

/// Reject answers for types outside the selection. Used when a caller submits
/// a whole answer sheet at once instead of recording answers one by one.
pub fn check_answers_selected(
    selected: &[IssueType],
    answers: &AnswerSheet,
) -> Result<(), VelofixError> {
    match answers.types().find(|t| !selected.contains(t)) {
        Some(stray) => Err(VelofixError::InvalidState(format!(
            "Answers given for '{}' which is not selected",
            stray
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::id::SequentialIdGenerator;
    use crate::models::Severity;

    #[test]
    fn test_empty_selection_is_invalid_state() {
        let ids = SequentialIdGenerator::default();
        let err = generate_diagnosis(&[], &AnswerSheet::new(), &Catalog::reference(), &ids).unwrap_err();
        assert!(matches!(err, VelofixError::InvalidState(_)));
    }

    #[test]
    fn test_duplicate_selection_rejected() {
        let ids = SequentialIdGenerator::default();
        let result = generate_diagnosis(
            &[IssueType::FlatTire, IssueType::FlatTire],
            &AnswerSheet::new(),
            &Catalog::reference(),
            &ids,
        );
        assert!(matches!(result, Err(VelofixError::InvalidState(_))));
    }

    #[test]
    fn test_missing_catalog_entry_produces_nothing() {
        let ids = SequentialIdGenerator::default();
        let result = generate_diagnosis(
            &[IssueType::FlatTire, IssueType::Other],
            &AnswerSheet::new(),
            &Catalog::reference(),
            &ids,
        );
        assert!(matches!(result, Err(VelofixError::Configuration(_))));
        // No id was consumed by the failed run
        assert_eq!(ids.next_id(IssueType::FlatTire), "issue-1");
    }

    #[test]
    fn test_too_many_answers_rejected() {
        let ids = SequentialIdGenerator::default();
        let answers = AnswerSheet::new()
            .with_answers(IssueType::FlatTire, vec![Some(true); 4]);
        let result = generate_diagnosis(&[IssueType::FlatTire], &answers, &Catalog::reference(), &ids);
        assert!(matches!(result, Err(VelofixError::InvalidState(_))));
    }

    #[test]
    fn test_issue_fields_copied_from_catalog() {
        let ids = SequentialIdGenerator::default();
        let answers = AnswerSheet::new()
            .with_answers(IssueType::BrakeIssue, vec![Some(true), Some(true), Some(true)]);
        let issues = generate_diagnosis(&[IssueType::BrakeIssue], &answers, &Catalog::reference(), &ids).unwrap();
        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.id, "issue-1");
        assert_eq!(issue.description, "Brake Problems detected through diagnostic");
        assert_eq!(issue.severity, Severity::High);
        assert_eq!((issue.estimated_cost, issue.estimated_time), (45, 30));
    }

    #[test]
    fn test_answers_for_unselected_types_ignored() {
        let ids = SequentialIdGenerator::default();
        let answers = AnswerSheet::new()
            .with_answers(IssueType::GearIssue, vec![Some(true), Some(true), Some(true)]);
        let issues = generate_diagnosis(&[IssueType::FlatTire], &answers, &Catalog::reference(), &ids).unwrap();
        assert_eq!(issues[0].severity, Severity::Low);
    }

    #[test]
    fn test_check_answers_selected() {
        let answers = AnswerSheet::new().with_answers(IssueType::GearIssue, vec![Some(true)]);
        assert!(check_answers_selected(&[IssueType::GearIssue], &answers).is_ok());
        assert!(check_answers_selected(&[IssueType::FlatTire], &answers).is_err());
    }

    #[test]
    fn test_diagnose_includes_quote() {
        let ids = SequentialIdGenerator::default();
        let diagnosis = diagnose(
            &[IssueType::ChainProblem, IssueType::GearIssue],
            &AnswerSheet::new(),
            &Catalog::reference(),
            &ids,
        )
        .unwrap();
        assert_eq!(diagnosis.quote, Quote::new(90, 60));
        assert_eq!(diagnosis.issues.len(), 2);
    }
}
