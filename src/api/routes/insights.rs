use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use crate::api::AppState;
use crate::errors::TestlensError;
use crate::reporting::{InsightInput, NO_STATUS_COLUMN};
use super::load_report;
use tracing::info;

pub async fn generate_insights(
    State(state): State<AppState>,
    Path(project): Path<String>,
) -> Result<(StatusCode, Json<Value>), TestlensError> {
    let report = load_report(&state, project.clone()).await?;

    let data = match report.insight_input() {
        InsightInput::Ready(data) => data,
        InsightInput::NoStatusColumn => {
            return Ok((
                StatusCode::OK,
                Json(json!({"project": project, "skipped": true, "reason": NO_STATUS_COLUMN})),
            ));
        }
        InsightInput::NoFiles | InsightInput::NoData => {
            return Ok((
                StatusCode::NOT_FOUND,
                Json(json!({"project": project, "error": "No data available for insights."})),
            ));
        }
    };

    info!(project = %project, rows = data.len(), "Requesting insights");
    let insights = state.insights.generate(data).await;
    Ok((StatusCode::OK, Json(json!({"project": project, "insights": insights}))))
}
