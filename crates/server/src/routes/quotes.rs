use axum::{
    Router,
    extract::{Query, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::quote::{Quote, QuoteFilter};
use services::services::{content::ContentService, content_stores::QuoteSource};

use super::listing::{ListParams, QuotesResponse, trimmed};
use crate::{AppState, error::ApiError};

/// GET /api/quotes
/// Newest-first by default; `random=true` switches to the seeded shuffle.
pub async fn list_quotes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<ResponseJson<QuotesResponse<Quote>>, ApiError> {
    let filter = QuoteFilter {
        search: params.search(),
        // A non-numeric category id is ignored rather than rejected.
        category_id: trimmed(params.category_id.as_deref()).and_then(|raw| raw.parse().ok()),
        qcategory: trimmed(params.qcategory.as_deref()).map(str::to_string),
    };
    let query = params.to_query(filter)?;

    let service = ContentService::new(QuoteSource::new(state.db().pool.clone()));
    let page = service.list(&query).await.map_err(ApiError::fetch("quotes"))?;

    Ok(ResponseJson(page.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/quotes", get(list_quotes))
}
