use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, Type, types::Json};
use strum_macros::{Display, EnumIter, EnumString};
use ts_rs::TS;
use uuid::Uuid;

#[derive(
    Debug,
    Clone,
    Copy,
    Type,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    TS,
    EnumString,
    EnumIter,
    Display,
)]
#[sqlx(type_name = "mood", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mood {
    Amazing,
    Good,
    Okay,
    Challenging,
    Difficult,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct JournalEntry {
    pub id: Uuid,
    #[serde(rename = "date")]
    pub entry_date: NaiveDate,
    pub mood: Mood,
    #[sqlx(json)]
    pub gratitude: Vec<String>,
    pub highlights: Option<String>,
    pub reflection: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for both create and update; an update replaces every field.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateJournalEntry {
    pub date: NaiveDate,
    pub mood: Mood,
    #[serde(default)]
    pub gratitude: Vec<String>,
    pub highlights: Option<String>,
    pub reflection: Option<String>,
}

impl JournalEntry {
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, JournalEntry>(
            r#"SELECT id, entry_date, mood, gratitude, highlights, reflection, created_at, updated_at
               FROM journal_entries
               ORDER BY entry_date DESC, created_at DESC"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, JournalEntry>(
            r#"SELECT id, entry_date, mood, gratitude, highlights, reflection, created_at, updated_at
               FROM journal_entries
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, data: &CreateJournalEntry) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        sqlx::query_as::<_, JournalEntry>(
            r#"INSERT INTO journal_entries
                   (id, entry_date, mood, gratitude, highlights, reflection, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
               RETURNING id, entry_date, mood, gratitude, highlights, reflection, created_at, updated_at"#,
        )
        .bind(id)
        .bind(data.date)
        .bind(data.mood)
        .bind(Json(&data.gratitude))
        .bind(&data.highlights)
        .bind(&data.reflection)
        .bind(now)
        .fetch_one(pool)
        .await
    }

    /// Returns `None` when no entry has this id.
    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &CreateJournalEntry,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, JournalEntry>(
            r#"UPDATE journal_entries
               SET entry_date = $2, mood = $3, gratitude = $4, highlights = $5, reflection = $6,
                   updated_at = $7
               WHERE id = $1
               RETURNING id, entry_date, mood, gratitude, highlights, reflection, created_at, updated_at"#,
        )
        .bind(id)
        .bind(data.date)
        .bind(data.mood)
        .bind(Json(&data.gratitude))
        .bind(&data.highlights)
        .bind(&data.reflection)
        .bind(Utc::now())
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM journal_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
