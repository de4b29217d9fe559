use axum::{Router, extract::State, http::StatusCode, response::Json as ResponseJson, routing::get};
use services::services::database_validator::{DatabaseValidator, ValidationResult};

use crate::{AppState, error::ApiError};

/// GET /api/health
/// 503 while the schema is incomplete.
pub async fn health(
    State(state): State<AppState>,
) -> Result<(StatusCode, ResponseJson<ValidationResult>), ApiError> {
    let result = DatabaseValidator::new(state.db().pool.clone()).validate().await?;
    let status = if result.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    Ok((status, ResponseJson(result)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
