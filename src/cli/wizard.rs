use crate::catalog::resolve_catalog;
use crate::config::VelofixConfig;
use crate::diagnostic::generator_for;
use crate::errors::VelofixError;
use crate::repl::ReplSession;

pub async fn handle_wizard(config: &VelofixConfig) -> Result<(), VelofixError> {
    let catalog = resolve_catalog(config).await?;
    let session = ReplSession::new(catalog, config.pricing(), generator_for(config.id_strategy()));

    // The line editor blocks, so keep it off the async workers
    tokio::task::spawn_blocking(move || session.run())
        .await
        .map_err(|e| VelofixError::Internal(format!("Wizard task failed: {}", e)))?
}
