use console::style;

use crate::booking::Roster;
use crate::catalog::Catalog;
use crate::diagnostic::{DiagnosticSession, Diagnosis};
use crate::models::{IssueType, Quote, Severity};
use crate::repl::commands::{COMMAND_HELP, CommandHelp};
use crate::utils::formatting::{format_cost, format_minutes};

/// Render a colored severity badge, e.g. "High Priority" in red.
pub fn render_severity_badge(severity: &Severity) -> String {
    let label = severity.priority_label();
    match severity {
        Severity::High => style(label).red().bold().to_string(),
        Severity::Medium => style(label).yellow().bold().to_string(),
        Severity::Low => style(label).green().to_string(),
    }
}

/// Catalog listing with a checkbox per entry.
pub fn render_catalog(catalog: &Catalog, selected: &[IssueType]) -> String {
    let mut lines = vec![format!("{}", style("Issue catalog").cyan().bold())];
    for entry in catalog.entries() {
        let mark = if selected.contains(&entry.issue_type) {
            style("[x]").green().to_string()
        } else {
            "[ ]".to_string()
        };
        lines.push(format!(
            "  {} {:<16} {}  {} • {}",
            mark,
            entry.label,
            style(entry.issue_type).dim(),
            format_cost(entry.estimated_cost),
            format_minutes(entry.estimated_time),
        ));
    }
    lines.join("\n")
}

/// Mechanic roster with rating, specialties and availability.
pub fn render_mechanics(roster: &Roster) -> String {
    let mut lines = vec![format!("{}", style("Mechanics").cyan().bold())];
    for mechanic in roster.mechanics() {
        let availability = if mechanic.is_available {
            style("available").green().to_string()
        } else {
            style("busy").dim().to_string()
        };
        lines.push(format!(
            "  {:<8} {:<18} ★ {:.1}  {}  {}",
            mechanic.id,
            mechanic.name,
            mechanic.rating,
            availability,
            style(mechanic.specialties.join(", ")).dim(),
        ));
    }
    lines.join("\n")
}

/// Every question for every selected type, numbered from 1, with current answers.
pub fn render_questions(catalog: &Catalog, session: &DiagnosticSession) -> String {
    let mut lines = Vec::new();
    for &issue_type in session.selected_types() {
        let Some(entry) = catalog.get(issue_type) else {
            continue;
        };
        lines.push(format!(
            "\n{} {}",
            style(&entry.label).white().bold(),
            style(format!("({})", issue_type)).dim(),
        ));
        let answers = session.answers().slots(issue_type);
        for (i, question) in entry.questions.iter().enumerate() {
            let answer = match answers.get(i).copied().flatten() {
                Some(true) => style("yes").green().to_string(),
                Some(false) => style("no").red().to_string(),
                None => style("-").dim().to_string(),
            };
            lines.push(format!("  {}. {:<40} {}", i + 1, question, answer));
        }
    }
    lines.join("\n")
}

pub fn render_quote(quote: &Quote) -> String {
    let mut out = format!(
        "Total estimate: {} • {}",
        style(format_cost(quote.grand_total())).bold(),
        format_minutes(quote.total_time),
    );
    if quote.surcharge > 0 {
        out.push_str(&format!(
            "\n  {} {} + {} emergency fee",
            style("incl.").dim(),
            format_cost(quote.total_cost),
            format_cost(quote.surcharge),
        ));
    }
    out
}

pub fn render_diagnosis(diagnosis: &Diagnosis) -> String {
    let mut lines = vec![format!("{} Diagnosis complete", style("✓").green().bold())];
    for issue in &diagnosis.issues {
        lines.push(format!(
            "  {:<48} {:<24} {} • {}",
            issue.description,
            render_severity_badge(&issue.severity),
            format_cost(issue.estimated_cost),
            format_minutes(issue.estimated_time),
        ));
    }
    lines.push(String::new());
    lines.push(render_quote(&diagnosis.quote));
    lines.join("\n")
}

/// Help for one command, or the full command table.
pub fn render_help(command: Option<&str>) -> String {
    match command {
        Some(name) => match COMMAND_HELP.iter().find(|h| h.name == name) {
            Some(help) => render_command_help(help),
            None => format!("Unknown command: {}", name),
        },
        None => COMMAND_HELP
            .iter()
            .map(|h| format!("  {:<34} {}", style(h.usage).cyan(), h.description))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_command_help(help: &CommandHelp) -> String {
    format!("{}\n  {}", style(help.usage).cyan().bold(), help.description)
}

pub fn render_error(message: &str) -> String {
    format!("{} {}", style("✗").red().bold(), style(message).red())
}
