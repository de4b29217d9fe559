//! SQLite-backed [`ContentSource`] implementations.

use async_trait::async_trait;
use db::models::{
    affirmation::{AffirmationFilter, IAffirmation, YouAffirmation},
    quote::{Quote, QuoteFilter},
};
use sqlx::SqlitePool;

use super::content::{ContentError, ContentSource};

fn as_sql_range(offset: usize, limit: usize) -> (i64, i64) {
    let clamp = |value: usize| i64::try_from(value).unwrap_or(i64::MAX);
    (clamp(offset), clamp(limit))
}

fn as_total(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

/// Active rows of the `quotes` table.
#[derive(Clone)]
pub struct QuoteSource {
    pool: SqlitePool,
}

impl QuoteSource {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentSource for QuoteSource {
    type Id = i64;
    type Record = Quote;
    type Filter = QuoteFilter;

    fn name(&self) -> &'static str {
        "quotes"
    }

    fn record_id(record: &Quote) -> i64 {
        record.quoteid
    }

    async fn candidate_ids(&self, filter: &QuoteFilter) -> Result<Vec<i64>, ContentError> {
        Ok(Quote::find_ids(&self.pool, filter).await?)
    }

    async fn records_by_ids(&self, ids: &[i64]) -> Result<Vec<Quote>, ContentError> {
        Ok(Quote::find_by_ids(&self.pool, ids).await?)
    }

    async fn newest_page(
        &self,
        filter: &QuoteFilter,
        offset: usize,
        limit: usize,
    ) -> Result<(Vec<Quote>, usize), ContentError> {
        let (offset, limit) = as_sql_range(offset, limit);
        let (quotes, count) = Quote::find_newest(&self.pool, filter, offset, limit).await?;
        Ok((quotes, as_total(count)))
    }
}

/// "I" affirmations, read through `i_affirmations_view`.
#[derive(Clone)]
pub struct IAffirmationSource {
    pool: SqlitePool,
}

impl IAffirmationSource {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentSource for IAffirmationSource {
    type Id = i64;
    type Record = IAffirmation;
    type Filter = AffirmationFilter;

    fn name(&self) -> &'static str {
        "affirmations"
    }

    fn record_id(record: &IAffirmation) -> i64 {
        record.iaffid
    }

    async fn candidate_ids(&self, filter: &AffirmationFilter) -> Result<Vec<i64>, ContentError> {
        Ok(IAffirmation::find_ids(&self.pool, filter).await?)
    }

    async fn records_by_ids(&self, ids: &[i64]) -> Result<Vec<IAffirmation>, ContentError> {
        Ok(IAffirmation::find_by_ids(&self.pool, ids).await?)
    }

    async fn newest_page(
        &self,
        filter: &AffirmationFilter,
        offset: usize,
        limit: usize,
    ) -> Result<(Vec<IAffirmation>, usize), ContentError> {
        let (offset, limit) = as_sql_range(offset, limit);
        let (rows, count) = IAffirmation::find_newest(&self.pool, filter, offset, limit).await?;
        Ok((rows, as_total(count)))
    }
}

/// "You" affirmations, read through `u_affirmations_view`.
#[derive(Clone)]
pub struct YouAffirmationSource {
    pool: SqlitePool,
}

impl YouAffirmationSource {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentSource for YouAffirmationSource {
    type Id = i64;
    type Record = YouAffirmation;
    type Filter = AffirmationFilter;

    fn name(&self) -> &'static str {
        "you-affirmations"
    }

    fn record_id(record: &YouAffirmation) -> i64 {
        record.uaffid
    }

    async fn candidate_ids(&self, filter: &AffirmationFilter) -> Result<Vec<i64>, ContentError> {
        Ok(YouAffirmation::find_ids(&self.pool, filter).await?)
    }

    async fn records_by_ids(&self, ids: &[i64]) -> Result<Vec<YouAffirmation>, ContentError> {
        Ok(YouAffirmation::find_by_ids(&self.pool, ids).await?)
    }

    async fn newest_page(
        &self,
        filter: &AffirmationFilter,
        offset: usize,
        limit: usize,
    ) -> Result<(Vec<YouAffirmation>, usize), ContentError> {
        let (offset, limit) = as_sql_range(offset, limit);
        let (rows, count) = YouAffirmation::find_newest(&self.pool, filter, offset, limit).await?;
        Ok((rows, as_total(count)))
    }
}
