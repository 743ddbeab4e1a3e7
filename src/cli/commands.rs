use clap::{Parser, Subcommand, Args};

use crate::models::IssueType;

#[derive(Parser)]
#[command(name = "velofix", version, about = "Bike repair diagnostics and service estimates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the issue catalog with base prices and questions
    Catalog(CatalogArgs),
    /// List mechanics available for booking
    Mechanics(MechanicsArgs),
    /// Estimate cost and time for a set of issues
    Quote(QuoteArgs),
    /// Score issues from yes/no answers and print the diagnosis
    Diagnose(DiagnoseArgs),
    /// Walk through a diagnosis interactively
    Wizard,
    /// Start the HTTP REST API server
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct CatalogArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct MechanicsArgs {
    /// Only show mechanics taking new bookings
    #[arg(long)]
    pub available: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct QuoteArgs {
    /// Issue type (flat_tire, brake_issue, chain_problem, gear_issue, other); repeatable
    #[arg(short, long = "issue", required = true)]
    pub issues: Vec<IssueType>,

    /// Add the emergency surcharge
    #[arg(long)]
    pub emergency: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct DiagnoseArgs {
    /// Issue type; repeatable, order is kept in the output
    #[arg(short, long = "issue", required = true)]
    pub issues: Vec<IssueType>,

    /// Answer as <type>:<question index>=<yes|no>, e.g. brake_issue:0=yes
    #[arg(short, long = "answer", value_parser = parse_answer_arg)]
    pub answers: Vec<AnswerArg>,

    /// Add the emergency surcharge to the total
    #[arg(long)]
    pub emergency: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerArg {
    pub issue_type: IssueType,
    pub index: usize,
    pub value: bool,
}

pub fn parse_answer_arg(raw: &str) -> Result<AnswerArg, String> {
    let (target, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("Expected <type>:<index>=<yes|no>, got '{}'", raw))?;
    let (issue_type, index) = target
        .split_once(':')
        .ok_or_else(|| format!("Expected <type>:<index>=<yes|no>, got '{}'", raw))?;

    let issue_type: IssueType = issue_type.parse()?;
    let index: usize = index
        .trim()
        .parse()
        .map_err(|_| format!("Invalid question index: {}", index))?;
    let value = parse_yes_no(value)?;

    Ok(AnswerArg { issue_type, index, value })
}

pub fn parse_yes_no(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        other => Err(format!("Expected yes or no, got '{}'", other)),
    }
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port (overrides server.port)
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
