use axum::{extract::State, Json};
use serde_json::{json, Value};
use crate::api::AppState;

pub async fn list_projects(State(state): State<AppState>) -> Json<Value> {
    let projects = state.catalog.projects();
    if projects.is_empty() {
        return Json(json!({
            "projects": [],
            "warning": "No projects found in the data folder.",
        }));
    }
    Json(json!({ "projects": projects }))
}
