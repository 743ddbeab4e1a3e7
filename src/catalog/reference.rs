use crate::models::IssueType;

use super::entry::{Catalog, IssueCatalogEntry};

pub struct IssueSeed {
    pub issue_type: IssueType,
    pub label: &'static str,
    pub questions: &'static [&'static str],
    pub estimated_cost: u32,
    pub estimated_time: u32,
}

/// Built-in catalog used when no catalog file is configured.
pub static REFERENCE_ISSUES: &[IssueSeed] = &[
    IssueSeed {
        issue_type: IssueType::FlatTire,
        label: "Flat Tire",
        questions: &[
            "Is the tire completely flat?",
            "Can you see any visible punctures?",
            "Is it the front or rear tire?",
        ],
        estimated_cost: 25,
        estimated_time: 15,
    },
    IssueSeed {
        issue_type: IssueType::BrakeIssue,
        label: "Brake Problems",
        questions: &[
            "Are the brakes making noise?",
            "Do the brakes feel spongy?",
            "Is it hard to stop?",
        ],
        estimated_cost: 45,
        estimated_time: 30,
    },
    IssueSeed {
        issue_type: IssueType::ChainProblem,
        label: "Chain Issues",
        questions: &[
            "Is the chain slipping?",
            "Is the chain making noise?",
            "Has the chain come off?",
        ],
        estimated_cost: 35,
        estimated_time: 20,
    },
    IssueSeed {
        issue_type: IssueType::GearIssue,
        label: "Gear Problems",
        questions: &[
            "Are gears not shifting smoothly?",
            "Is the bike stuck in one gear?",
            "Are you hearing grinding noises?",
        ],
        estimated_cost: 55,
        estimated_time: 40,
    },
];

impl IssueSeed {
    fn to_entry(&self) -> IssueCatalogEntry {
        IssueCatalogEntry {
            issue_type: self.issue_type,
            label: self.label.to_string(),
            questions: self.questions.iter().map(|q| q.to_string()).collect(),
            estimated_cost: self.estimated_cost,
            estimated_time: self.estimated_time,
        }
    }
}

impl Catalog {
    pub fn reference() -> Self {
        // Seeds are unique by construction, so skip `Catalog::new` validation.
        Self::from_seeds(REFERENCE_ISSUES)
    }

    fn from_seeds(seeds: &[IssueSeed]) -> Self {
        let entries = seeds.iter().map(IssueSeed::to_entry).collect();
        Self::from_entries_unchecked(entries)
    }
}
