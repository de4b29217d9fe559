use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;

/// Quote category, as shown in the category chips.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Category {
    pub categoryid: i64,
    pub categoryname: String,
    pub calltype: Option<String>,
    #[serde(rename = "CategoryIDString")]
    pub categoryidstring: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Category {
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            r#"SELECT categoryid, categoryname, calltype, categoryidstring, created_at
               FROM categories
               ORDER BY categoryid ASC"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        categoryname: &str,
        calltype: Option<&str>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            r#"INSERT INTO categories (categoryname, calltype)
               VALUES ($1, $2)
               RETURNING categoryid, categoryname, calltype, categoryidstring, created_at"#,
        )
        .bind(categoryname)
        .bind(calltype)
        .fetch_one(pool)
        .await
    }
}
