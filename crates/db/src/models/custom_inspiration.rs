use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// A user's own think / feel / do card.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct CustomInspiration {
    pub id: Uuid,
    pub think: String,
    pub author: Option<String>,
    pub feel: Option<String>,
    #[serde(rename = "do")]
    pub action: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct CreateCustomInspiration {
    pub think: String,
    pub author: Option<String>,
    pub feel: Option<String>,
    #[serde(rename = "do")]
    pub action: String,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct UpdateCustomInspiration {
    pub think: Option<String>,
    pub author: Option<String>,
    pub feel: Option<String>,
    #[serde(rename = "do")]
    pub action: Option<String>,
}

impl UpdateCustomInspiration {
    /// The stored card with this patch laid over it.
    pub fn apply_to(self, current: &CustomInspiration) -> CreateCustomInspiration {
        CreateCustomInspiration {
            think: self.think.unwrap_or_else(|| current.think.clone()),
            author: self.author.or_else(|| current.author.clone()),
            feel: self.feel.or_else(|| current.feel.clone()),
            action: self.action.unwrap_or_else(|| current.action.clone()),
        }
    }
}

impl CustomInspiration {
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, CustomInspiration>(
            r#"SELECT id, think, author, feel, action, created_at, updated_at
               FROM custom_inspirations
               ORDER BY created_at DESC, rowid DESC"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, CustomInspiration>(
            r#"SELECT id, think, author, feel, action, created_at, updated_at
               FROM custom_inspirations
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateCustomInspiration,
    ) -> Result<Self, sqlx::Error> {
        let now = Utc::now();
        sqlx::query_as::<_, CustomInspiration>(
            r#"INSERT INTO custom_inspirations (id, think, author, feel, action, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $6)
               RETURNING id, think, author, feel, action, created_at, updated_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.think)
        .bind(&data.author)
        .bind(&data.feel)
        .bind(&data.action)
        .bind(now)
        .fetch_one(pool)
        .await
    }

    /// Replaces every editable field. Returns `None` when no inspiration has this id.
    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &CreateCustomInspiration,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, CustomInspiration>(
            r#"UPDATE custom_inspirations
               SET think = $2, author = $3, feel = $4, action = $5, updated_at = $6
               WHERE id = $1
               RETURNING id, think, author, feel, action, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&data.think)
        .bind(&data.author)
        .bind(&data.feel)
        .bind(&data.action)
        .bind(Utc::now())
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM custom_inspirations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
