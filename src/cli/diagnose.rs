use tracing::debug;

use crate::catalog::resolve_catalog;
use crate::cli::commands::DiagnoseArgs;
use crate::config::VelofixConfig;
use crate::diagnostic::{check_distinct, generator_for, DiagnosticSession};
use crate::errors::VelofixError;
use crate::repl::renderer;

/// Runs the same session transitions the wizard does, with all input taken from flags.
pub async fn handle_diagnose(args: DiagnoseArgs, config: &VelofixConfig) -> Result<(), VelofixError> {
    let catalog = resolve_catalog(config).await?;
    let ids = generator_for(config.id_strategy());

    // Toggling a repeated type would deselect it again
    check_distinct(&args.issues)?;

    let mut session = DiagnosticSession::new();
    for issue_type in &args.issues {
        session = session.toggle_selection(&catalog, *issue_type)?;
    }
    session = session.begin_questions()?;
    for answer in &args.answers {
        session = session.record_answer(answer.issue_type, answer.index, answer.value)?;
    }
    debug!(answers = args.answers.len(), "Answers applied");

    let (_, mut diagnosis) = session.finalize(&catalog, ids.as_ref())?;
    if args.emergency {
        diagnosis.quote = diagnosis.quote.with_surcharge(config.pricing().emergency_surcharge);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&diagnosis)?);
    } else {
        println!("{}", renderer::render_diagnosis(&diagnosis));
    }
    Ok(())
}
