use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use crate::errors::TestlensError;

impl IntoResponse for TestlensError {
    fn into_response(self) -> axum::response::Response {
        let class = self.classify();
        let status = match &self {
            TestlensError::Config(_) | TestlensError::InvalidProject(_) => StatusCode::BAD_REQUEST,
            _ if class.input_error => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({"error": self.to_string(), "error_type": class.error_type}))).into_response()
    }
}
