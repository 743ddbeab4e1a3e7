pub mod routes;
pub mod models;
pub mod errors;
pub mod auth;

use std::sync::Arc;
use axum::{middleware, routing::{get, post}, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use crate::booking::Roster;
use crate::catalog::{resolve_catalog, Catalog};
use crate::config::{PricingConfig, VelofixConfig};
use crate::diagnostic::{generator_for, IdGenerator};
use crate::errors::VelofixError;

/// Read-only state shared by all requests. Every diagnosis is computed from
/// the request body alone.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub roster: Arc<Roster>,
    pub pricing: PricingConfig,
    pub ids: Arc<dyn IdGenerator>,
    pub api_token: Option<String>,
}

impl AppState {
    pub fn new(catalog: Catalog, pricing: PricingConfig, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            roster: Arc::new(Roster::reference()),
            pricing,
            ids,
            api_token: None,
        }
    }

    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = Arc::new(roster);
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }
}

pub async fn create_app_state(config: &VelofixConfig) -> Result<AppState, VelofixError> {
    let catalog = resolve_catalog(config).await?;
    let strategy = config.id_strategy();
    info!(entries = catalog.len(), id_strategy = %strategy, "API state ready");
    Ok(AppState {
        catalog: Arc::new(catalog),
        roster: Arc::new(Roster::reference()),
        pricing: config.pricing(),
        ids: generator_for(strategy),
        api_token: config.api_token(),
    })
}

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/catalog", get(routes::catalog::list_catalog))
        .route("/api/catalog/:issue_type", get(routes::catalog::get_catalog_entry))
        .route("/api/mechanics", get(routes::mechanics::list_mechanics))
        .route("/api/quote", post(routes::quote::create_quote))
        .route("/api/diagnose", post(routes::diagnose::create_diagnosis))
        .route("/api/bookings/summary", post(routes::bookings::summarize_booking))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::api_auth_middleware));

    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
