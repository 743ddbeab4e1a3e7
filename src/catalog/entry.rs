use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::VelofixError;
use crate::models::{IssueType, Quote};

/// Static metadata for one issue type: what to ask and what it costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCatalogEntry {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub label: String,
    pub questions: Vec<String>,
    pub estimated_cost: u32,
    /// Minutes.
    pub estimated_time: u32,
}

/// Ordered set of catalog entries, at most one per issue type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    entries: Vec<IssueCatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<IssueCatalogEntry>) -> Result<Self, VelofixError> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.label.trim().is_empty() {
                return Err(VelofixError::Configuration(format!(
                    "Catalog entry '{}' has an empty label",
                    entry.issue_type
                )));
            }
            if entries[..i].iter().any(|e| e.issue_type == entry.issue_type) {
                return Err(VelofixError::Configuration(format!(
                    "Duplicate catalog entry for issue type '{}'",
                    entry.issue_type
                )));
            }
        }
        debug!(entries = entries.len(), "Catalog built");
        Ok(Self { entries })
    }

    pub(super) fn from_entries_unchecked(entries: Vec<IssueCatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[IssueCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, issue_type: IssueType) -> Option<&IssueCatalogEntry> {
        self.entries.iter().find(|e| e.issue_type == issue_type)
    }

    /// Like [`Catalog::get`], but a missing entry is a configuration error.
    pub fn require(&self, issue_type: IssueType) -> Result<&IssueCatalogEntry, VelofixError> {
        self.get(issue_type).ok_or_else(|| {
            VelofixError::Configuration(format!(
                "No catalog entry for issue type '{}'",
                issue_type
            ))
        })
    }

    /// Sums base cost and time over the given types.
    ///
    /// Severity and answers play no part, so every stage of a diagnosis
    /// reports the same totals for the same selection.
    pub fn quote(&self, issue_types: &[IssueType]) -> Result<Quote, VelofixError> {
        let mut total_cost: u32 = 0;
        let mut total_time: u32 = 0;
        for &issue_type in issue_types {
            let entry = self.require(issue_type)?;
            total_cost = total_cost.saturating_add(entry.estimated_cost);
            total_time = total_time.saturating_add(entry.estimated_time);
        }
        Ok(Quote::new(total_cost, total_time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(issue_type: IssueType, cost: u32, time: u32) -> IssueCatalogEntry {
        IssueCatalogEntry {
            issue_type,
            label: format!("{} label", issue_type),
            questions: vec!["q1".into(), "q2".into()],
            estimated_cost: cost,
            estimated_time: time,
        }
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let result = Catalog::new(vec![
            entry(IssueType::FlatTire, 10, 5),
            entry(IssueType::FlatTire, 20, 5),
        ]);
        assert!(matches!(result, Err(VelofixError::Configuration(_))));
    }

    #[test]
    fn test_empty_label_rejected() {
        let mut e = entry(IssueType::Other, 10, 5);
        e.label = "  ".into();
        assert!(Catalog::new(vec![e]).is_err());
    }

    #[test]
    fn test_require_missing_is_configuration_error() {
        let catalog = Catalog::new(vec![entry(IssueType::FlatTire, 10, 5)]).unwrap();
        let err = catalog.require(IssueType::Other).unwrap_err();
        assert!(matches!(err, VelofixError::Configuration(_)));
    }

    #[test]
    fn test_quote_sums_entries() {
        let catalog = Catalog::new(vec![
            entry(IssueType::FlatTire, 10, 5),
            entry(IssueType::GearIssue, 30, 25),
        ])
        .unwrap();
        let quote = catalog.quote(&[IssueType::GearIssue, IssueType::FlatTire]).unwrap();
        assert_eq!(quote, Quote::new(40, 30));
    }

    #[test]
    fn test_quote_empty_selection_is_zero() {
        let catalog = Catalog::new(vec![entry(IssueType::FlatTire, 10, 5)]).unwrap();
        assert_eq!(catalog.quote(&[]).unwrap(), Quote::default());
    }

    #[test]
    fn test_quote_saturates() {
        let catalog = Catalog::new(vec![
            entry(IssueType::FlatTire, u32::MAX, 1),
            entry(IssueType::Other, 5, 1),
        ])
        .unwrap();
        let quote = catalog.quote(&[IssueType::FlatTire, IssueType::Other]).unwrap();
        assert_eq!(quote.total_cost, u32::MAX);
    }
}
