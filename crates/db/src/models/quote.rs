use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use ts_rs::TS;

use super::ID_LOOKUP_CHUNK;

const QUOTE_COLUMNS: &str = "quoteid, categoryid, subcategoryid, quotetext, author, qcategory, \
     likes_count, flag_count, quotenumber, tags, is_active, created_at, updated_at";

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Quote {
    pub quoteid: i64,
    pub categoryid: Option<i64>,
    pub subcategoryid: Option<i64>,
    pub quotetext: String,
    pub author: Option<String>,
    pub qcategory: Option<String>,
    pub likes_count: i64,
    pub flag_count: i64,
    pub quotenumber: Option<i64>,
    pub tags: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
pub struct CreateQuote {
    pub quotetext: String,
    pub author: Option<String>,
    pub categoryid: Option<i64>,
    pub qcategory: Option<String>,
    pub tags: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Filters shared by the id query, the page query and the count query.
#[derive(Debug, Clone, Default)]
pub struct QuoteFilter {
    /// Case-insensitive substring of the quote text or author.
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub qcategory: Option<String>,
}

impl QuoteFilter {
    fn push_conditions(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        builder.push(" WHERE is_active = 1");

        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            builder
                .push(" AND (quotetext LIKE ")
                .push_bind(pattern.clone())
                .push(" OR author LIKE ")
                .push_bind(pattern)
                .push(")");
        }

        if let Some(category_id) = self.category_id {
            builder.push(" AND categoryid = ").push_bind(category_id);
        }

        if let Some(qcategory) = self.qcategory.as_deref().filter(|s| !s.is_empty()) {
            builder.push(" AND qcategory = ").push_bind(qcategory.to_string());
        }
    }
}

impl Quote {
    /// Ids of every active quote matching `filter`, in primary key order.
    pub async fn find_ids(pool: &SqlitePool, filter: &QuoteFilter) -> Result<Vec<i64>, sqlx::Error> {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT quoteid FROM quotes");
        filter.push_conditions(&mut builder);
        builder.push(" ORDER BY quoteid ASC");

        builder.build_query_scalar::<i64>().fetch_all(pool).await
    }

    /// Unordered lookup; ids with no matching row are skipped.
    ///
    /// Ids are bound [`ID_LOOKUP_CHUNK`] at a time to stay under SQLite's
    /// host parameter limit.
    pub async fn find_by_ids(pool: &SqlitePool, ids: &[i64]) -> Result<Vec<Self>, sqlx::Error> {
        let mut quotes = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(ID_LOOKUP_CHUNK) {
            let mut builder = QueryBuilder::<Sqlite>::new(format!(
                "SELECT {QUOTE_COLUMNS} FROM quotes WHERE quoteid IN ("
            ));
            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            quotes.extend(builder.build_query_as::<Quote>().fetch_all(pool).await?);
        }
        Ok(quotes)
    }

    /// Newest-first page plus the total number of matching quotes.
    pub async fn find_newest(
        pool: &SqlitePool,
        filter: &QuoteFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Self>, i64), sqlx::Error> {
        let mut builder =
            QueryBuilder::<Sqlite>::new(format!("SELECT {QUOTE_COLUMNS} FROM quotes"));
        filter.push_conditions(&mut builder);
        builder
            .push(" ORDER BY created_at DESC, quoteid DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);
        let quotes = builder.build_query_as::<Quote>().fetch_all(pool).await?;

        let mut count = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM quotes");
        filter.push_conditions(&mut count);
        let total = count.build_query_scalar::<i64>().fetch_one(pool).await?;

        Ok((quotes, total))
    }

    pub async fn create(pool: &SqlitePool, data: &CreateQuote) -> Result<Self, sqlx::Error> {
        let sql = format!(
            "INSERT INTO quotes (quotetext, author, categoryid, qcategory, tags, is_active)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {QUOTE_COLUMNS}"
        );
        sqlx::query_as::<_, Quote>(&sql)
            .bind(&data.quotetext)
            .bind(&data.author)
            .bind(data.categoryid)
            .bind(&data.qcategory)
            .bind(&data.tags)
            .bind(data.is_active)
            .fetch_one(pool)
            .await
    }
}
