pub mod health;
pub mod projects;
pub mod reports;
pub mod insights;

use crate::api::AppState;
use crate::errors::TestlensError;
use crate::reporting::{assemble_report, ProjectReport};

/// Assemble a report off the async runtime; file loading is blocking IO.
pub(crate) async fn load_report(state: &AppState, project: String) -> Result<ProjectReport, TestlensError> {
    let catalog = state.catalog.clone();
    let policy = state.policy;
    tokio::task::spawn_blocking(move || assemble_report(&catalog, &project, policy))
        .await
        .map_err(|e| TestlensError::Internal(format!("Report task failed: {}", e)))?
}
