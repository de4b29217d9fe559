//! Generic listing over a content collection (quotes, affirmations, ...).
//!
//! Every collection supports the same two modes: newest-first pagination and
//! seeded random pagination. The store behind a collection only has to answer
//! the few queries in [`ContentSource`]; ordering, slicing and the `has_more`
//! bookkeeping live here once.

use std::{collections::HashMap, hash::Hash};

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use super::sampler::sample_page;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Record store backing one content collection.
#[async_trait]
pub trait ContentSource: Send + Sync {
    type Id: Clone + Eq + Hash + Send + Sync;
    type Record: Send;
    type Filter: Send + Sync;

    /// Collection name used in logs and error messages.
    fn name(&self) -> &'static str;

    fn record_id(record: &Self::Record) -> Self::Id;

    /// Every id matching `filter`, in a stable order.
    async fn candidate_ids(&self, filter: &Self::Filter) -> Result<Vec<Self::Id>, ContentError>;

    /// Records for `ids` in any order; unknown ids are skipped.
    async fn records_by_ids(&self, ids: &[Self::Id]) -> Result<Vec<Self::Record>, ContentError>;

    /// Newest-first page and the total number of matches.
    async fn newest_page(
        &self,
        filter: &Self::Filter,
        offset: usize,
        limit: usize,
    ) -> Result<(Vec<Self::Record>, usize), ContentError>;
}

/// One listing request: filter, page window and shuffle settings.
#[derive(Debug, Clone)]
pub struct ListQuery<F> {
    pub filter: F,
    pub offset: usize,
    pub limit: usize,
    pub random: bool,
    /// Ignored unless `random` is set; `None` draws a time-derived seed.
    pub random_seed: Option<i64>,
}

/// One page of records plus the metadata the listing endpoints return.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentPage<R> {
    pub items: Vec<R>,
    pub has_more: bool,
    pub total: usize,
    /// Seed the page was shuffled with, for random listings.
    pub random_seed: Option<u32>,
}

impl<R> ContentPage<R> {
    pub fn map<T>(self, f: impl FnMut(R) -> T) -> ContentPage<T> {
        ContentPage {
            items: self.items.into_iter().map(f).collect(),
            has_more: self.has_more,
            total: self.total,
            random_seed: self.random_seed,
        }
    }
}

/// Pages through the collection behind a [`ContentSource`].
pub struct ContentService<S> {
    source: S,
}

impl<S: ContentSource> ContentService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Newest-first page, or a seeded random page when `query.random` is set.
    pub async fn list(
        &self,
        query: &ListQuery<S::Filter>,
    ) -> Result<ContentPage<S::Record>, ContentError> {
        if query.random {
            self.list_random(query).await
        } else {
            self.list_newest(query).await
        }
    }

    async fn list_newest(
        &self,
        query: &ListQuery<S::Filter>,
    ) -> Result<ContentPage<S::Record>, ContentError> {
        let (items, total) = self
            .source
            .newest_page(&query.filter, query.offset, query.limit)
            .await?;

        Ok(ContentPage {
            items,
            has_more: total > 0 && query.offset.saturating_add(query.limit) < total,
            total,
            random_seed: None,
        })
    }

    async fn list_random(
        &self,
        query: &ListQuery<S::Filter>,
    ) -> Result<ContentPage<S::Record>, ContentError> {
        let all_ids = self.source.candidate_ids(&query.filter).await?;
        let page = sample_page(&all_ids, query.random_seed, query.offset, query.limit);

        debug!(
            collection = self.source.name(),
            total = page.total,
            offset = query.offset,
            limit = query.limit,
            seed = page.seed,
            "Sampled random page"
        );

        if page.ids.is_empty() {
            return Ok(ContentPage {
                items: Vec::new(),
                has_more: false,
                total: page.total,
                random_seed: Some(page.seed),
            });
        }

        let records = self.source.records_by_ids(&page.ids).await?;
        let mut by_id: HashMap<S::Id, S::Record> = records
            .into_iter()
            .map(|record| (S::record_id(&record), record))
            .collect();
        let items = page.ids.iter().filter_map(|id| by_id.remove(id)).collect();

        Ok(ContentPage {
            items,
            has_more: page.has_more,
            total: page.total,
            random_seed: Some(page.seed),
        })
    }
}
