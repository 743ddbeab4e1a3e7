use crate::catalog::resolve_catalog;
use crate::cli::commands::QuoteArgs;
use crate::config::VelofixConfig;
use crate::diagnostic::check_distinct;
use crate::errors::VelofixError;
use crate::repl::renderer;

pub async fn handle_quote(args: QuoteArgs, config: &VelofixConfig) -> Result<(), VelofixError> {
    let catalog = resolve_catalog(config).await?;
    check_distinct(&args.issues)?;

    let mut quote = catalog.quote(&args.issues)?;
    if args.emergency {
        quote = quote.with_surcharge(config.pricing().emergency_surcharge);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        println!("{}", renderer::render_quote(&quote));
    }
    Ok(())
}
