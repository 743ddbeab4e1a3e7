use crate::cli::commands::parse_yes_no;
use crate::models::IssueType;

/// All slash commands supported by the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Catalog,
    Select {
        issue_types: Vec<IssueType>,
    },
    Questions,
    Answer {
        issue_type: IssueType,
        /// Zero-based; users type the 1-based number shown next to the question.
        question_index: usize,
        value: bool,
    },
    Back,
    Quote,
    Diagnose {
        emergency: bool,
    },
    Reset,
    Mechanics,
    Version,
    Clear,
    Help {
        command: Option<String>,
    },
    Exit,
}

/// Description of a command for help display.
pub struct CommandHelp {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "catalog",
        usage: "/catalog",
        description: "List issue types with base price and time; selected ones are checked",
    },
    CommandHelp {
        name: "select",
        usage: "/select <type> [<type>...]",
        description: "Toggle issue types on or off, e.g. /select flat_tire brake_issue",
    },
    CommandHelp {
        name: "questions",
        usage: "/questions",
        description: "Continue to the follow-up questions for the selected issues",
    },
    CommandHelp {
        name: "answer",
        usage: "/answer <type> <number> yes|no",
        description: "Answer a follow-up question, e.g. /answer brake_issue 2 yes",
    },
    CommandHelp {
        name: "back",
        usage: "/back",
        description: "Return to issue selection, keeping your answers",
    },
    CommandHelp {
        name: "quote",
        usage: "/quote",
        description: "Show the running cost and time estimate",
    },
    CommandHelp {
        name: "diagnose",
        usage: "/diagnose [--emergency]",
        description: "Finalize the diagnosis and show priorities and the total estimate",
    },
    CommandHelp {
        name: "reset",
        usage: "/reset",
        description: "Discard the current diagnosis and start over",
    },
    CommandHelp {
        name: "mechanics",
        usage: "/mechanics",
        description: "List mechanics with rating and specialties",
    },
    CommandHelp {
        name: "version",
        usage: "/version",
        description: "Show version and build info",
    },
    CommandHelp {
        name: "clear",
        usage: "/clear",
        description: "Clear the terminal screen",
    },
    CommandHelp {
        name: "help",
        usage: "/help [command]",
        description: "Show help for all or a specific command",
    },
    CommandHelp {
        name: "exit",
        usage: "/exit",
        description: "Quit the wizard",
    },
];

/// All command names for tab completion.
pub static COMMAND_NAMES: &[&str] = &[
    "/catalog",
    "/select",
    "/questions",
    "/answer",
    "/back",
    "/quote",
    "/diagnose",
    "/reset",
    "/mechanics",
    "/version",
    "/clear",
    "/help",
    "/exit",
];

/// Parse a raw input line into a SlashCommand, or return an error message.
pub fn parse_command(input: &str) -> Result<SlashCommand, String> {
    let input = input.trim();
    if !input.starts_with('/') {
        return Err("Commands must start with /. Type /help for available commands.".into());
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.is_empty() {
        return Err("Empty command".into());
    }

    let cmd = parts[0];
    let args = &parts[1..];

    match cmd {
        "/catalog" | "/list" => Ok(SlashCommand::Catalog),
        "/select" | "/toggle" => parse_select(args),
        "/questions" | "/next" => Ok(SlashCommand::Questions),
        "/answer" | "/a" => parse_answer(args),
        "/back" => Ok(SlashCommand::Back),
        "/quote" => Ok(SlashCommand::Quote),
        "/diagnose" => parse_diagnose(args),
        "/reset" => Ok(SlashCommand::Reset),
        "/mechanics" => Ok(SlashCommand::Mechanics),
        "/version" => Ok(SlashCommand::Version),
        "/clear" => Ok(SlashCommand::Clear),
        "/help" => Ok(SlashCommand::Help {
            command: args.first().map(|s| s.trim_start_matches('/').to_string()),
        }),
        "/exit" | "/quit" | "/q" => Ok(SlashCommand::Exit),
        other => Err(format!("Unknown command: {}. Type /help for available commands.", other)),
    }
}

fn parse_select(args: &[&str]) -> Result<SlashCommand, String> {
    if args.is_empty() {
        return Err("Usage: /select <type> [<type>...]".into());
    }
    let issue_types = args
        .iter()
        .map(|a| a.parse::<IssueType>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SlashCommand::Select { issue_types })
}

fn parse_answer(args: &[&str]) -> Result<SlashCommand, String> {
    let [issue_type, number, value] = args else {
        return Err("Usage: /answer <type> <number> yes|no".into());
    };
    let issue_type: IssueType = issue_type.parse()?;
    let number: usize = number
        .parse()
        .map_err(|_| format!("Invalid question number: {}", number))?;
    if number == 0 {
        return Err("Question numbers start at 1".into());
    }
    let value = parse_yes_no(value)?;
    Ok(SlashCommand::Answer {
        issue_type,
        question_index: number - 1,
        value,
    })
}

fn parse_diagnose(args: &[&str]) -> Result<SlashCommand, String> {
    let mut emergency = false;
    for arg in args {
        match *arg {
            "--emergency" | "-e" => emergency = true,
            other => return Err(format!("Unknown flag for /diagnose: {}", other)),
        }
    }
    Ok(SlashCommand::Diagnose { emergency })
}
