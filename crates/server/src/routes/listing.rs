//! Query-string handling shared by the paginated content listings.

use serde::{Deserialize, Serialize};
use services::services::{
    content::{ContentPage, ListQuery},
    sampler::parse_seed,
};
use ts_rs::TS;

use crate::error::ApiError;

pub const DEFAULT_LIMIT: usize = 25;

/// Raw listing parameters.
///
/// Kept as strings so that a malformed value produces our own 400 body
/// instead of the extractor's rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub search: Option<String>,
    pub random: Option<String>,
    pub random_seed: Option<String>,
    pub category_id: Option<String>,
    pub qcategory: Option<String>,
    pub icategory: Option<String>,
}

impl ListParams {
    pub fn to_query<F>(&self, filter: F) -> Result<ListQuery<F>, ApiError> {
        let limit = parse_count(self.limit.as_deref(), "limit", DEFAULT_LIMIT)?;
        if limit == 0 {
            return Err(ApiError::BadRequest(
                "limit must be a positive integer".to_string(),
            ));
        }
        let offset = parse_count(self.offset.as_deref(), "offset", 0)?;

        Ok(ListQuery {
            filter,
            offset,
            limit,
            random: self.random.as_deref() == Some("true"),
            random_seed: self.random_seed.as_deref().and_then(parse_seed),
        })
    }

    /// Search text, or `None` when blank.
    pub fn search(&self) -> Option<String> {
        self.search.clone().filter(|search| !search.trim().is_empty())
    }
}

fn parse_count(raw: Option<&str>, name: &str, default: usize) -> Result<usize, ApiError> {
    match trimmed(raw) {
        None => Ok(default),
        Some(value) => value.parse::<usize>().map_err(|_| {
            ApiError::BadRequest(format!("{name} must be a non-negative integer"))
        }),
    }
}

/// The trimmed value, or `None` when absent or blank.
pub fn trimmed(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct QuotesResponse<T> {
    pub quotes: Vec<T>,
    pub has_more: bool,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u32>,
}

impl<T> From<ContentPage<T>> for QuotesResponse<T> {
    fn from(page: ContentPage<T>) -> Self {
        Self {
            quotes: page.items,
            has_more: page.has_more,
            total: page.total,
            random_seed: page.random_seed,
        }
    }
}

#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct AffirmationsResponse<T> {
    pub affirmations: Vec<T>,
    pub has_more: bool,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u32>,
}

impl<T> From<ContentPage<T>> for AffirmationsResponse<T> {
    fn from(page: ContentPage<T>) -> Self {
        Self {
            affirmations: page.items,
            has_more: page.has_more,
            total: page.total,
            random_seed: page.random_seed,
        }
    }
}
