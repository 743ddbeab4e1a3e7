use crate::cli::commands::ServeArgs;
use crate::config::VelofixConfig;
use crate::errors::VelofixError;
use crate::api;
use tracing::info;

pub async fn handle_serve(args: ServeArgs, config: &VelofixConfig) -> Result<(), VelofixError> {
    let host = args.host.as_deref().unwrap_or_else(|| config.host()).to_string();
    let port = args.port.unwrap_or_else(|| config.port());
    info!(host = %host, port, "Starting API server");

    let state = api::create_app_state(config).await?;
    if state.api_token.is_none() {
        info!("No API token configured; endpoints are unauthenticated");
    }
    let app = api::build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| VelofixError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
