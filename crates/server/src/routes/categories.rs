use axum::{Router, extract::State, response::Json as ResponseJson, routing::get};
use db::models::category::Category;

use crate::{AppState, error::ApiError};

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<ResponseJson<Vec<Category>>, ApiError> {
    let categories = Category::find_all(&state.db().pool).await?;
    Ok(ResponseJson(categories))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/categories", get(list_categories))
}
