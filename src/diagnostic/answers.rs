use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::VelofixError;
use crate::models::{IssueType, Severity};

/// Yes/no answers per issue type, one slot per catalog question.
///
/// `None` means unanswered, which is not the same as "no" but counts the same
/// toward severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    slots: BTreeMap<IssueType, Vec<Option<bool>>>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self, issue_type: IssueType) -> &[Option<bool>] {
        self.slots.get(&issue_type).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn types(&self) -> impl Iterator<Item = IssueType> + '_ {
        self.slots.keys().copied()
    }

    /// Allocates `question_count` unanswered slots unless the type already has some.
    pub fn ensure_slots(&mut self, issue_type: IssueType, question_count: usize) {
        self.slots
            .entry(issue_type)
            .or_insert_with(|| vec![None; question_count]);
    }

    pub fn set(
        &mut self,
        issue_type: IssueType,
        question_index: usize,
        value: bool,
    ) -> Result<(), VelofixError> {
        let slots = self.slots.get_mut(&issue_type).ok_or_else(|| {
            VelofixError::InvalidState(format!("No questions open for issue type '{}'", issue_type))
        })?;
        let count = slots.len();
        let slot = slots.get_mut(question_index).ok_or_else(|| {
            VelofixError::InvalidState(format!(
                "Question index {} out of range for '{}' ({} questions)",
                question_index, issue_type, count
            ))
        })?;
        *slot = Some(value);
        Ok(())
    }

    /// Builder-style insert of a full answer vector, mostly for callers that
    /// supply every answer at once.
    pub fn with_answers(mut self, issue_type: IssueType, answers: Vec<Option<bool>>) -> Self {
        self.slots.insert(issue_type, answers);
        self
    }

    pub fn positive_count(&self, issue_type: IssueType) -> usize {
        count_positive(self.slots(issue_type))
    }

    pub fn severity(&self, issue_type: IssueType) -> Severity {
        Severity::from_positive_answers(self.positive_count(issue_type))
    }
}

/// Number of answers that are explicitly "yes".
pub fn count_positive(answers: &[Option<bool>]) -> usize {
    answers.iter().filter(|a| **a == Some(true)).count()
}
