use axum::{
    extract::{Path, State},
    Json,
};
use crate::api::AppState;
use crate::errors::TestlensError;
use crate::reporting::ProjectReport;
use super::load_report;

pub async fn get_report(
    State(state): State<AppState>,
    Path(project): Path<String>,
) -> Result<Json<ProjectReport>, TestlensError> {
    load_report(&state, project).await.map(Json)
}
