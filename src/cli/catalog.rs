use crate::catalog::resolve_catalog;
use crate::cli::commands::CatalogArgs;
use crate::config::VelofixConfig;
use crate::errors::VelofixError;
use crate::repl::renderer;

pub async fn handle_catalog(args: CatalogArgs, config: &VelofixConfig) -> Result<(), VelofixError> {
    let catalog = resolve_catalog(config).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.entries())?);
    } else {
        println!("{}", renderer::render_catalog(&catalog, &[]));
    }
    Ok(())
}
