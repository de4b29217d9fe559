//! "I" and "You" affirmations.
//!
//! Both collections have the same shape and differ only in table and column
//! names, so the queries are written once against an [`AffirmationTable`]
//! descriptor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool, sqlite::SqliteRow};
use ts_rs::TS;

use super::ID_LOOKUP_CHUNK;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct IAffirmation {
    pub iaffid: i64,
    pub quotetext: String,
    pub icategoryid: Option<i64>,
    pub icategoryname: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct YouAffirmation {
    pub uaffid: i64,
    pub quotetext: String,
    pub ucategoryid: Option<i64>,
    pub ucategoryname: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct AffirmationFilter {
    /// Case-insensitive substring of the affirmation text.
    pub search: Option<String>,
    /// Exact category name.
    pub category: Option<String>,
}

struct AffirmationTable {
    view: &'static str,
    table: &'static str,
    category_table: &'static str,
    id: &'static str,
    category_id: &'static str,
    category_name: &'static str,
}

const I_AFFIRMATIONS: AffirmationTable = AffirmationTable {
    view: "i_affirmations_view",
    table: "i_affirmations",
    category_table: "i_categories",
    id: "iaffid",
    category_id: "icategoryid",
    category_name: "icategoryname",
};

const YOU_AFFIRMATIONS: AffirmationTable = AffirmationTable {
    view: "u_affirmations_view",
    table: "u_affirmations",
    category_table: "u_categories",
    id: "uaffid",
    category_id: "ucategoryid",
    category_name: "ucategoryname",
};

impl AffirmationTable {
    fn columns(&self) -> String {
        format!(
            "{}, quotetext, {}, {}, created_at",
            self.id, self.category_id, self.category_name
        )
    }

    fn push_conditions(&self, builder: &mut QueryBuilder<'_, Sqlite>, filter: &AffirmationFilter) {
        builder.push(" WHERE 1 = 1");

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            builder
                .push(" AND quotetext LIKE ")
                .push_bind(format!("%{search}%"));
        }

        if let Some(category) = filter.category.as_deref().filter(|s| !s.is_empty()) {
            builder
                .push(format!(" AND {} = ", self.category_name))
                .push_bind(category.to_string());
        }
    }

    async fn find_ids(
        &self,
        pool: &SqlitePool,
        filter: &AffirmationFilter,
    ) -> Result<Vec<i64>, sqlx::Error> {
        let mut builder = QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM {}", self.id, self.view));
        self.push_conditions(&mut builder, filter);
        builder.push(format!(" ORDER BY {} ASC", self.id));

        builder.build_query_scalar::<i64>().fetch_all(pool).await
    }

    async fn find_by_ids<T>(&self, pool: &SqlitePool, ids: &[i64]) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let mut rows = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(ID_LOOKUP_CHUNK) {
            let mut builder = QueryBuilder::<Sqlite>::new(format!(
                "SELECT {} FROM {} WHERE {} IN (",
                self.columns(),
                self.view,
                self.id
            ));
            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            rows.extend(builder.build_query_as::<T>().fetch_all(pool).await?);
        }
        Ok(rows)
    }

    async fn find_newest<T>(
        &self,
        pool: &SqlitePool,
        filter: &AffirmationFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<T>, i64), sqlx::Error>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let mut builder =
            QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM {}", self.columns(), self.view));
        self.push_conditions(&mut builder, filter);
        builder
            .push(format!(" ORDER BY created_at DESC, {} DESC LIMIT ", self.id))
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);
        let rows = builder.build_query_as::<T>().fetch_all(pool).await?;

        let mut count = QueryBuilder::<Sqlite>::new(format!("SELECT COUNT(*) FROM {}", self.view));
        self.push_conditions(&mut count, filter);
        let total = count.build_query_scalar::<i64>().fetch_one(pool).await?;

        Ok((rows, total))
    }

    /// Insert an affirmation, creating its category on first use. Returns the new id.
    async fn create(
        &self,
        pool: &SqlitePool,
        quotetext: &str,
        category: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let category_id = match category {
            Some(name) => {
                let sql = format!(
                    "INSERT INTO {table} ({name_col}) VALUES ($1)
                     ON CONFLICT({name_col}) DO UPDATE SET {name_col} = excluded.{name_col}
                     RETURNING {id_col}",
                    table = self.category_table,
                    name_col = self.category_name,
                    id_col = self.category_id,
                );
                Some(
                    sqlx::query_scalar::<_, i64>(&sql)
                        .bind(name)
                        .fetch_one(&mut *tx)
                        .await?,
                )
            }
            None => None,
        };

        let sql = format!(
            "INSERT INTO {} (quotetext, {}) VALUES ($1, $2) RETURNING {}",
            self.table, self.category_id, self.id
        );
        let id = sqlx::query_scalar::<_, i64>(&sql)
            .bind(quotetext)
            .bind(category_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(id)
    }
}

impl IAffirmation {
    pub async fn find_ids(
        pool: &SqlitePool,
        filter: &AffirmationFilter,
    ) -> Result<Vec<i64>, sqlx::Error> {
        I_AFFIRMATIONS.find_ids(pool, filter).await
    }

    pub async fn find_by_ids(pool: &SqlitePool, ids: &[i64]) -> Result<Vec<Self>, sqlx::Error> {
        I_AFFIRMATIONS.find_by_ids(pool, ids).await
    }

    pub async fn find_newest(
        pool: &SqlitePool,
        filter: &AffirmationFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Self>, i64), sqlx::Error> {
        I_AFFIRMATIONS.find_newest(pool, filter, offset, limit).await
    }

    pub async fn create(
        pool: &SqlitePool,
        quotetext: &str,
        category: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        I_AFFIRMATIONS.create(pool, quotetext, category).await
    }
}

impl YouAffirmation {
    pub async fn find_ids(
        pool: &SqlitePool,
        filter: &AffirmationFilter,
    ) -> Result<Vec<i64>, sqlx::Error> {
        YOU_AFFIRMATIONS.find_ids(pool, filter).await
    }

    pub async fn find_by_ids(pool: &SqlitePool, ids: &[i64]) -> Result<Vec<Self>, sqlx::Error> {
        YOU_AFFIRMATIONS.find_by_ids(pool, ids).await
    }

    pub async fn find_newest(
        pool: &SqlitePool,
        filter: &AffirmationFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Self>, i64), sqlx::Error> {
        YOU_AFFIRMATIONS.find_newest(pool, filter, offset, limit).await
    }

    pub async fn create(
        pool: &SqlitePool,
        quotetext: &str,
        category: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        YOU_AFFIRMATIONS.create(pool, quotetext, category).await
    }
}
