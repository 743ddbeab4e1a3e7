use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Bicycle fault category a user can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    FlatTire,
    BrakeIssue,
    ChainProblem,
    GearIssue,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 5] = [
        IssueType::FlatTire,
        IssueType::BrakeIssue,
        IssueType::ChainProblem,
        IssueType::GearIssue,
        IssueType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FlatTire => "flat_tire",
            Self::BrakeIssue => "brake_issue",
            Self::ChainProblem => "chain_problem",
            Self::GearIssue => "gear_issue",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        IssueType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown issue type '{}'. Expected one of: flat_tire, brake_issue, chain_problem, gear_issue, other",
                    s
                )
            })
    }
}

/// Repair priority derived from the number of "yes" answers for an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Two or more affirmative answers is high, exactly one is medium, none is low.
    pub fn from_positive_answers(count: usize) -> Self {
        match count {
            0 => Severity::Low,
            1 => Severity::Medium,
            _ => Severity::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Badge text shown next to an issue, e.g. "High Priority".
    pub fn priority_label(&self) -> &'static str {
        match self {
            Severity::High => "High Priority",
            Severity::Medium => "Medium Priority",
            Severity::Low => "Low Priority",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A priced issue produced when a diagnosis is finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedIssue {
    pub id: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub description: String,
    pub severity: Severity,
    /// Catalog base cost, not adjusted by severity.
    pub estimated_cost: u32,
    /// Catalog base time in minutes.
    pub estimated_time: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_type_from_str() {
        assert_eq!("flat_tire".parse::<IssueType>().unwrap(), IssueType::FlatTire);
        assert_eq!("Brake-Issue".parse::<IssueType>().unwrap(), IssueType::BrakeIssue);
        assert!("puncture".parse::<IssueType>().is_err());
    }

    #[test]
    fn test_issue_type_serde_snake_case() {
        let json = serde_json::to_string(&IssueType::ChainProblem).unwrap();
        assert_eq!(json, "\"chain_problem\"");
        let parsed: IssueType = serde_json::from_str("\"gear_issue\"").unwrap();
        assert_eq!(parsed, IssueType::GearIssue);
    }

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(Severity::from_positive_answers(0), Severity::Low);
        assert_eq!(Severity::from_positive_answers(1), Severity::Medium);
        assert_eq!(Severity::from_positive_answers(2), Severity::High);
        assert_eq!(Severity::from_positive_answers(7), Severity::High);
    }

    #[test]
    fn test_priority_label() {
        assert_eq!(Severity::Medium.priority_label(), "Medium Priority");
    }

    #[test]
    fn test_detected_issue_type_field_name() {
        let issue = DetectedIssue {
            id: "issue-1".into(),
            issue_type: IssueType::FlatTire,
            description: "Flat Tire detected through diagnostic".into(),
            severity: Severity::Low,
            estimated_cost: 25,
            estimated_time: 15,
        };
        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["type"], "flat_tire");
        assert_eq!(value["severity"], "low");
        assert_eq!(value["estimated_cost"], 25);
    }
}
