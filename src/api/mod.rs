pub mod routes;
pub mod errors;

use std::sync::Arc;
use axum::Router;
use tower_http::trace::TraceLayer;
use crate::catalog::Catalog;
use crate::config::{LoadPolicy, TestlensConfig};
use crate::errors::TestlensError;
use crate::insights::InsightRequester;

/// Read-only per-process state. Every request recomputes from disk.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub policy: LoadPolicy,
    pub insights: Arc<InsightRequester>,
}

impl AppState {
    pub fn new(catalog: Catalog, policy: LoadPolicy, insights: InsightRequester) -> Self {
        Self { catalog, policy, insights: Arc::new(insights) }
    }
}

/// Build state from configuration. Fails when no API key can be resolved.
pub fn create_app_state(config: &TestlensConfig) -> Result<AppState, TestlensError> {
    let insights = InsightRequester::from_config(&config.llm)?;
    Ok(AppState::new(Catalog::new(&config.data), config.data.on_error, insights))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/projects", axum::routing::get(routes::projects::list_projects))
        .route("/api/projects/:project/report", axum::routing::get(routes::reports::get_report))
        .route("/api/projects/:project/insights", axum::routing::post(routes::insights::generate_insights))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
