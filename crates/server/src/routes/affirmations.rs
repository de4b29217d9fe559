//! "I" and "You" affirmation listings.

use axum::{
    Router,
    extract::{Query, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::affirmation::{AffirmationFilter, IAffirmation, YouAffirmation};
use services::services::{
    content::ContentService,
    content_stores::{IAffirmationSource, YouAffirmationSource},
};

use super::listing::{AffirmationsResponse, ListParams, trimmed};
use crate::{AppState, error::ApiError};

fn affirmation_filter(params: &ListParams) -> AffirmationFilter {
    AffirmationFilter {
        search: params.search(),
        category: trimmed(params.icategory.as_deref()).map(str::to_string),
    }
}

/// GET /api/affirmations
pub async fn list_i_affirmations(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<ResponseJson<AffirmationsResponse<IAffirmation>>, ApiError> {
    let query = params.to_query(affirmation_filter(&params))?;
    let service = ContentService::new(IAffirmationSource::new(state.db().pool.clone()));
    let page = service
        .list(&query)
        .await
        .map_err(ApiError::fetch("affirmations"))?;

    Ok(ResponseJson(page.into()))
}

/// GET /api/you-affirmations
pub async fn list_you_affirmations(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<ResponseJson<AffirmationsResponse<YouAffirmation>>, ApiError> {
    let query = params.to_query(affirmation_filter(&params))?;
    let service = ContentService::new(YouAffirmationSource::new(state.db().pool.clone()));
    let page = service
        .list(&query)
        .await
        .map_err(ApiError::fetch("affirmations"))?;

    Ok(ResponseJson(page.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/affirmations", get(list_i_affirmations))
        .route("/you-affirmations", get(list_you_affirmations))
}
