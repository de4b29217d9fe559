use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::{get, put},
};
use db::models::journal_entry::{CreateJournalEntry, JournalEntry};
use services::services::journal::{JournalService, JournalStats};
use uuid::Uuid;

use crate::{AppState, error::ApiError};

/// GET /api/journal
pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<ResponseJson<Vec<JournalEntry>>, ApiError> {
    let entries = JournalService::list(&state.db().pool).await?;
    Ok(ResponseJson(entries))
}

/// POST /api/journal
pub async fn create_entry(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateJournalEntry>,
) -> Result<(StatusCode, ResponseJson<JournalEntry>), ApiError> {
    let entry = JournalService::create(&state.db().pool, &payload).await?;
    Ok((StatusCode::CREATED, ResponseJson(entry)))
}

/// PUT /api/journal/{id}
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    axum::Json(payload): axum::Json<CreateJournalEntry>,
) -> Result<ResponseJson<JournalEntry>, ApiError> {
    let entry = JournalService::update(&state.db().pool, id, &payload).await?;
    Ok(ResponseJson(entry))
}

/// DELETE /api/journal/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    JournalService::delete(&state.db().pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/journal/stats
/// Streak and most common mood across every entry.
pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<ResponseJson<JournalStats>, ApiError> {
    let stats = JournalService::stats(&state.db().pool).await?;
    Ok(ResponseJson(stats))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/journal", get(list_entries).post(create_entry))
        .route("/journal/stats", get(get_stats))
        .route("/journal/{id}", put(update_entry).delete(delete_entry))
}
