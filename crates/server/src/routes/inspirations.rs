use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::{get, patch},
};
use db::models::custom_inspiration::{
    CreateCustomInspiration, CustomInspiration, UpdateCustomInspiration,
};
use services::services::inspirations::InspirationService;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

/// GET /api/inspirations
pub async fn list_inspirations(
    State(state): State<AppState>,
) -> Result<ResponseJson<Vec<CustomInspiration>>, ApiError> {
    let inspirations = InspirationService::list(&state.db().pool).await?;
    Ok(ResponseJson(inspirations))
}

/// POST /api/inspirations
pub async fn create_inspiration(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateCustomInspiration>,
) -> Result<(StatusCode, ResponseJson<CustomInspiration>), ApiError> {
    let inspiration = InspirationService::create(&state.db().pool, payload).await?;
    Ok((StatusCode::CREATED, ResponseJson(inspiration)))
}

/// PATCH /api/inspirations/{id}
pub async fn update_inspiration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    axum::Json(payload): axum::Json<UpdateCustomInspiration>,
) -> Result<ResponseJson<CustomInspiration>, ApiError> {
    let inspiration = InspirationService::update(&state.db().pool, id, payload).await?;
    Ok(ResponseJson(inspiration))
}

/// DELETE /api/inspirations/{id}
pub async fn delete_inspiration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    InspirationService::delete(&state.db().pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/inspirations", get(list_inspirations).post(create_inspiration))
        .route(
            "/inspirations/{id}",
            patch(update_inspiration).delete(delete_inspiration),
        )
}
