use std::sync::Arc;

use console::{style, Term};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use tracing::debug;

use crate::booking::Roster;
use crate::catalog::Catalog;
use crate::config::PricingConfig;
use crate::diagnostic::{DiagnosticSession, IdGenerator};
use crate::errors::VelofixError;
use crate::repl::commands::{self, SlashCommand};
use crate::repl::completer::ReplHelper;
use crate::repl::renderer;

/// What the read loop should do after a command ran.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive diagnosis wizard: selection, then questions, then results.
pub struct ReplSession {
    catalog: Catalog,
    roster: Roster,
    pricing: PricingConfig,
    ids: Arc<dyn IdGenerator>,
    session: DiagnosticSession,
}

impl ReplSession {
    pub fn new(catalog: Catalog, pricing: PricingConfig, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            catalog,
            roster: Roster::reference(),
            pricing,
            ids,
            session: DiagnosticSession::new(),
        }
    }

    pub fn session(&self) -> &DiagnosticSession {
        &self.session
    }

    /// Blocking read-eval-print loop. Returns when the user exits or closes input.
    pub fn run(mut self) -> Result<(), VelofixError> {
        let config = Config::builder()
            .auto_add_history(true)
            .build();
        let mut editor: Editor<ReplHelper, DefaultHistory> = Editor::with_config(config)
            .map_err(|e| VelofixError::Internal(format!("Failed to initialize wizard: {}", e)))?;
        editor.set_helper(Some(ReplHelper));

        println!(
            "{} Bike diagnostic wizard. Select the issues you're experiencing, then /questions. Type /help for commands.\n",
            style("velofix").cyan().bold()
        );
        println!("{}", renderer::render_catalog(&self.catalog, self.session.selected_types()));

        loop {
            let prompt = format!("velofix [{}]> ", self.session.stage());
            match editor.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match commands::parse_command(&line) {
                        Ok(cmd) => {
                            let (flow, output) = self.execute(cmd);
                            if !output.is_empty() {
                                println!("{}", output);
                            }
                            if flow == Flow::Exit {
                                break;
                            }
                        }
                        Err(msg) => println!("{}", renderer::render_error(&msg)),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => {
                    return Err(VelofixError::Internal(format!("Readline error: {}", e)));
                }
            }
        }

        Ok(())
    }

    /// Apply one command to the wizard state and return the text to print.
    ///
    /// A failed transition prints the error and keeps the previous state.
    pub fn execute(&mut self, cmd: SlashCommand) -> (Flow, String) {
        debug!(command = ?cmd, stage = %self.session.stage(), "Wizard command");
        match self.apply(cmd) {
            Ok(result) => result,
            Err(e) => (Flow::Continue, renderer::render_error(&e.to_string())),
        }
    }

    fn apply(&mut self, cmd: SlashCommand) -> Result<(Flow, String), VelofixError> {
        let output = match cmd {
            SlashCommand::Catalog => {
                renderer::render_catalog(&self.catalog, self.session.selected_types())
            }
            SlashCommand::Select { issue_types } => {
                let mut next = self.session.clone();
                for issue_type in issue_types {
                    next = next.toggle_selection(&self.catalog, issue_type)?;
                }
                let quote = next.running_quote(&self.catalog)?;
                self.session = next;
                format!(
                    "{}\n\n{}",
                    renderer::render_catalog(&self.catalog, self.session.selected_types()),
                    renderer::render_quote(&quote)
                )
            }
            SlashCommand::Questions => {
                self.session = self.session.begin_questions()?;
                format!(
                    "{}\n\nAnswer with /answer <type> <number> yes|no, then /diagnose.",
                    renderer::render_questions(&self.catalog, &self.session)
                )
            }
            SlashCommand::Answer { issue_type, question_index, value } => {
                self.session = self.session.record_answer(issue_type, question_index, value)?;
                renderer::render_questions(&self.catalog, &self.session)
            }
            SlashCommand::Back => {
                self.session = self.session.back_to_selection()?;
                renderer::render_catalog(&self.catalog, self.session.selected_types())
            }
            SlashCommand::Quote => {
                renderer::render_quote(&self.session.running_quote(&self.catalog)?)
            }
            SlashCommand::Diagnose { emergency } => {
                let (next, mut diagnosis) = self.session.finalize(&self.catalog, self.ids.as_ref())?;
                if emergency {
                    diagnosis.quote = diagnosis.quote.with_surcharge(self.pricing.emergency_surcharge);
                }
                self.session = next;
                format!(
                    "{}\n\nType /reset to diagnose another bike.",
                    renderer::render_diagnosis(&diagnosis)
                )
            }
            SlashCommand::Reset => {
                self.session = self.session.reset();
                renderer::render_catalog(&self.catalog, self.session.selected_types())
            }
            SlashCommand::Mechanics => renderer::render_mechanics(&self.roster),
            SlashCommand::Version => format!(
                "velofix {} (built {}, commit {})",
                env!("CARGO_PKG_VERSION"),
                option_env!("VELOFIX_BUILD_TIMESTAMP").unwrap_or("unknown"),
                option_env!("VELOFIX_GIT_HASH").unwrap_or("unknown"),
            ),
            SlashCommand::Clear => {
                Term::stdout().clear_screen()?;
                String::new()
            }
            SlashCommand::Help { command } => renderer::render_help(command.as_deref()),
            SlashCommand::Exit => return Ok((Flow::Exit, String::new())),
        };

        Ok((Flow::Continue, output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::{SequentialIdGenerator, Stage};
    use crate::models::IssueType;

    fn wizard() -> ReplSession {
        console::set_colors_enabled(false);
        ReplSession::new(
            Catalog::reference(),
            PricingConfig::default(),
            Arc::new(SequentialIdGenerator::default()),
        )
    }

    fn run(w: &mut ReplSession, line: &str) -> (Flow, String) {
        let cmd = commands::parse_command(line).unwrap();
        w.execute(cmd)
    }

    #[test]
    fn test_full_walkthrough() {
        let mut w = wizard();
        let (_, out) = run(&mut w, "/select flat_tire brake_issue");
        assert!(out.contains("$70 • 45 min"));

        run(&mut w, "/questions");
        assert_eq!(w.session().stage(), Stage::Questions);
        run(&mut w, "/answer brake_issue 1 yes");
        run(&mut w, "/answer brake_issue 3 yes");

        let (_, out) = run(&mut w, "/diagnose --emergency");
        assert_eq!(w.session().stage(), Stage::Results);
        assert!(out.contains("High Priority"));
        assert!(out.contains("$90"));
    }

    #[test]
    fn test_failed_select_keeps_previous_selection() {
        let mut w = wizard();
        run(&mut w, "/select gear_issue");
        let (flow, out) = run(&mut w, "/select flat_tire other");
        assert_eq!(flow, Flow::Continue);
        assert!(out.contains("Configuration error"));
        assert_eq!(w.session().selected_types(), &[IssueType::GearIssue]);
    }

    #[test]
    fn test_questions_without_selection_errors() {
        let mut w = wizard();
        let (_, out) = run(&mut w, "/questions");
        assert!(out.contains("Invalid state"));
        assert_eq!(w.session().stage(), Stage::Selection);
    }

    #[test]
    fn test_reset_after_results() {
        let mut w = wizard();
        run(&mut w, "/select chain_problem");
        run(&mut w, "/diagnose");
        let (_, out) = run(&mut w, "/diagnose");
        assert!(out.contains("already finalized"));
        run(&mut w, "/reset");
        assert_eq!(w.session(), &DiagnosticSession::new());
    }

    #[test]
    fn test_mechanics_listed_in_any_stage() {
        let mut w = wizard();
        run(&mut w, "/select flat_tire");
        run(&mut w, "/questions");
        let (_, out) = run(&mut w, "/mechanics");
        assert!(out.contains("Sarah Chen"));
        assert_eq!(w.session().stage(), Stage::Questions);
    }

    #[test]
    fn test_exit() {
        let mut w = wizard();
        assert_eq!(run(&mut w, "/exit").0, Flow::Exit);
    }
}
