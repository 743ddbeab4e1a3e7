use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::models::IssueType;
use crate::repl::commands::COMMAND_NAMES;

#[derive(Default)]
pub struct ReplHelper;

impl Helper for ReplHelper {}
impl Validator for ReplHelper {}
impl Highlighter for ReplHelper {}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let trimmed = line.trim();
        if !trimmed.starts_with('/') || trimmed.contains(' ') {
            return None;
        }
        for name in COMMAND_NAMES {
            if name.starts_with(trimmed) && *name != trimmed {
                return Some(name[trimmed.len()..].to_string());
            }
        }
        None
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(complete_line(&line[..pos]))
    }
}

/// Candidates for the word ending at the end of `prefix`.
fn complete_line(prefix: &str) -> (usize, Vec<Pair>) {
    let pos = prefix.len();
    let trimmed = prefix.trim_start();

    if !trimmed.starts_with('/') {
        return (0, vec![]);
    }

    // Past the command name: complete arguments
    if let Some(space_idx) = trimmed.find(' ') {
        let cmd = &trimmed[..space_idx];
        let rest = &trimmed[space_idx..];
        let word = rest.rsplit(' ').next().unwrap_or("");
        let word_start = pos - word.len();
        let arg_position = rest.split_whitespace().count() - usize::from(!word.is_empty());

        let issue_names: Vec<&str> = IssueType::ALL.iter().map(|t| t.as_str()).collect();
        let options: Vec<&str> = match (cmd, arg_position) {
            ("/select", _) => issue_names,
            ("/answer", 0) => issue_names,
            ("/answer", 2) => vec!["yes", "no"],
            ("/diagnose", _) => vec!["--emergency"],
            ("/help", 0) => COMMAND_NAMES.iter().map(|n| n.trim_start_matches('/')).collect(),
            _ => vec![],
        };

        let matches: Vec<Pair> = options
            .into_iter()
            .filter(|o| o.starts_with(word))
            .map(|o| Pair {
                display: o.to_string(),
                replacement: o.to_string(),
            })
            .collect();

        return (word_start, matches);
    }

    // Complete command names
    let start = pos - trimmed.len();
    let matches: Vec<Pair> = COMMAND_NAMES
        .iter()
        .filter(|name| name.starts_with(trimmed))
        .map(|name| Pair {
            display: name.to_string(),
            replacement: name.to_string(),
        })
        .collect();

    (start, matches)
}
