use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::PricingConfig;
use crate::errors::VelofixError;
use crate::models::{DetectedIssue, Quote};

use super::mechanic::{Mechanic, Roster};
use super::slot::TimeSlot;

pub const EMERGENCY_FEE_LABEL: &str = "Emergency fee";

/// Everything a customer confirms before a booking is handed off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub location: String,
    #[serde(default)]
    pub time_slot: Option<TimeSlot>,
    #[serde(default)]
    pub emergency: bool,
    /// Required unless `emergency`; emergencies go to whoever is free first.
    #[serde(default)]
    pub mechanic_id: Option<String>,
    pub issues: Vec<DetectedIssue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub description: String,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub location: String,
    /// `None` only for emergencies, which are dispatched as soon as possible.
    pub time_slot: Option<TimeSlot>,
    pub emergency: bool,
    pub mechanic_id: Option<String>,
    pub mechanic: Option<Mechanic>,
    pub lines: Vec<SummaryLine>,
    pub quote: Quote,
}

/// Everything `summarize` checks a request against.
#[derive(Debug, Clone, Copy)]
pub struct BookingContext<'a> {
    pub catalog: &'a Catalog,
    pub roster: &'a Roster,
    pub pricing: &'a PricingConfig,
}

/// Price a confirmed booking. Totals come from the issues themselves, not the
/// catalog, so a summary stays stable if the catalog changes afterwards.
/// Issues whose price no longer matches the catalog are logged.
pub fn summarize(
    request: &BookingRequest,
    ctx: &BookingContext<'_>,
) -> Result<BookingSummary, VelofixError> {
    let location = request.location.trim();
    if location.is_empty() {
        return Err(VelofixError::Validation("Service location is required".into()));
    }
    if request.time_slot.is_none() && !request.emergency {
        return Err(VelofixError::Validation(
            "Pick a time slot or mark the booking as an emergency".into(),
        ));
    }
    if request.issues.is_empty() {
        return Err(VelofixError::Validation("A booking needs at least one diagnosed issue".into()));
    }

    let mechanic = match request.mechanic_id.as_deref().filter(|id| !id.trim().is_empty()) {
        Some(id) => Some(ctx.roster.assign(id)?.clone()),
        None if request.emergency => None,
        None => {
            return Err(VelofixError::Validation(
                "Choose a mechanic or mark the booking as an emergency".into(),
            ));
        }
    };

    for issue in &request.issues {
        if has_price_drift(issue, ctx.catalog) {
            warn!(
                issue_id = %issue.id,
                issue_type = %issue.issue_type,
                estimated_cost = issue.estimated_cost,
                estimated_time = issue.estimated_time,
                "Issue price differs from the current catalog"
            );
        }
    }

    let mut lines: Vec<SummaryLine> = request
        .issues
        .iter()
        .map(|issue| SummaryLine {
            description: issue.description.clone(),
            amount: issue.estimated_cost,
        })
        .collect();

    let (total_cost, total_time) = request.issues.iter().fold((0u32, 0u32), |(cost, time), issue| {
        (
            cost.saturating_add(issue.estimated_cost),
            time.saturating_add(issue.estimated_time),
        )
    });
    let mut quote = Quote::new(total_cost, total_time);

    if request.emergency {
        lines.push(SummaryLine {
            description: EMERGENCY_FEE_LABEL.to_string(),
            amount: ctx.pricing.emergency_surcharge,
        });
        quote = quote.with_surcharge(ctx.pricing.emergency_surcharge);
    }

    info!(
        issues = request.issues.len(),
        emergency = request.emergency,
        mechanic = mechanic.as_ref().map(|m| m.id.as_str()).unwrap_or("first available"),
        grand_total = quote.grand_total(),
        "Booking summarized"
    );

    Ok(BookingSummary {
        location: location.to_string(),
        time_slot: request.time_slot,
        emergency: request.emergency,
        mechanic_id: mechanic.as_ref().map(|m| m.id.clone()),
        mechanic,
        lines,
        quote,
    })
}

/// True when the catalog prices the issue's type differently, or no longer has it.
pub fn has_price_drift(issue: &DetectedIssue, catalog: &Catalog) -> bool {
    match catalog.get(issue.issue_type) {
        Some(entry) => {
            entry.estimated_cost != issue.estimated_cost
                || entry.estimated_time != issue.estimated_time
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IssueType, Severity};

    fn issue(issue_type: IssueType, cost: u32, time: u32) -> DetectedIssue {
        DetectedIssue {
            id: format!("issue-{}", issue_type),
            issue_type,
            description: format!("{} detected through diagnostic", issue_type),
            severity: Severity::Low,
            estimated_cost: cost,
            estimated_time: time,
        }
    }

    fn request() -> BookingRequest {
        BookingRequest {
            location: " 123 Broadway, New York ".into(),
            time_slot: Some(TimeSlot::WithinOneHour),
            emergency: false,
            mechanic_id: Some("mech-2".into()),
            issues: vec![issue(IssueType::FlatTire, 25, 15), issue(IssueType::BrakeIssue, 45, 30)],
        }
    }

    fn summarize_with(req: &BookingRequest, pricing: PricingConfig) -> Result<BookingSummary, VelofixError> {
        let catalog = Catalog::reference();
        let roster = Roster::reference();
        summarize(req, &BookingContext { catalog: &catalog, roster: &roster, pricing: &pricing })
    }

    #[test]
    fn test_summary_totals() {
        let summary = summarize_with(&request(), PricingConfig::default()).unwrap();
        assert_eq!(summary.location, "123 Broadway, New York");
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.quote, Quote::new(70, 45));
        assert_eq!(summary.quote.grand_total(), 70);
        assert_eq!(summary.mechanic_id.as_deref(), Some("mech-2"));
        let mechanic = summary.mechanic.unwrap();
        assert_eq!(mechanic.name, "Sarah Chen");
        assert_eq!(mechanic.rating, 4.8);
    }

    #[test]
    fn test_unknown_mechanic_rejected() {
        let mut req = request();
        req.mechanic_id = Some("mech-42".into());
        let err = summarize_with(&req, PricingConfig::default()).unwrap_err();
        assert!(matches!(err, VelofixError::Validation(_)));
    }

    #[test]
    fn test_mechanic_required_unless_emergency() {
        let mut req = request();
        req.mechanic_id = None;
        let err = summarize_with(&req, PricingConfig::default()).unwrap_err();
        assert!(matches!(err, VelofixError::Validation(_)));

        req.mechanic_id = Some("  ".into());
        assert!(summarize_with(&req, PricingConfig::default()).is_err());

        req.emergency = true;
        req.mechanic_id = None;
        let summary = summarize_with(&req, PricingConfig::default()).unwrap();
        assert!(summary.mechanic.is_none());
        assert!(summary.mechanic_id.is_none());
    }

    #[test]
    fn test_price_drift_detection() {
        let catalog = Catalog::reference();
        assert!(!has_price_drift(&issue(IssueType::FlatTire, 25, 15), &catalog));
        assert!(has_price_drift(&issue(IssueType::FlatTire, 5, 15), &catalog));
        assert!(has_price_drift(&issue(IssueType::BrakeIssue, 45, 10), &catalog));
        assert!(has_price_drift(&issue(IssueType::Other, 10, 10), &catalog));
    }

    #[test]
    fn test_drifted_price_still_charged_as_given() {
        let mut req = request();
        req.issues = vec![issue(IssueType::FlatTire, 5, 15)];
        let summary = summarize_with(&req, PricingConfig::default()).unwrap();
        assert_eq!(summary.quote.total_cost, 5);
    }

    #[test]
    fn test_emergency_adds_fee_line() {
        let mut req = request();
        req.emergency = true;
        req.time_slot = None;
        let summary = summarize_with(&req, PricingConfig { emergency_surcharge: 20 }).unwrap();
        let last = summary.lines.last().unwrap();
        assert_eq!(last.description, EMERGENCY_FEE_LABEL);
        assert_eq!(last.amount, 20);
        assert_eq!(summary.quote.grand_total(), 90);
        assert_eq!(summary.quote.total_time, 45);
    }

    #[test]
    fn test_blank_location_rejected() {
        let mut req = request();
        req.location = "   ".into();
        let err = summarize_with(&req, PricingConfig::default()).unwrap_err();
        assert!(matches!(err, VelofixError::Validation(_)));
    }

    #[test]
    fn test_slot_required_unless_emergency() {
        let mut req = request();
        req.time_slot = None;
        assert!(summarize_with(&req, PricingConfig::default()).is_err());
    }

    #[test]
    fn test_no_issues_rejected() {
        let mut req = request();
        req.issues.clear();
        assert!(summarize_with(&req, PricingConfig::default()).is_err());
    }
}
