//! Journal entries and the summary statistics shown above the timeline.

use std::collections::HashMap;

use db::models::journal_entry::{CreateJournalEntry, JournalEntry, Mood};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::info;
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("journal entry not found: {0}")]
    NotFound(Uuid),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct JournalStats {
    pub total_entries: usize,
    pub streak: u32,
    pub most_common_mood: Option<Mood>,
}

impl JournalStats {
    pub fn from_entries(entries: &[JournalEntry]) -> Self {
        Self {
            total_entries: entries.len(),
            streak: calculate_streak(entries),
            most_common_mood: most_common_mood(entries),
        }
    }
}

/// Number of consecutive days, counting back from the most recent entry.
///
/// Two entries on the same day end the streak, as does any gap.
pub fn calculate_streak(entries: &[JournalEntry]) -> u32 {
    let mut dates: Vec<_> = entries.iter().map(|entry| entry.entry_date).collect();
    if dates.is_empty() {
        return 0;
    }
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 1;
    for pair in dates.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Most frequent mood; ties go to the mood declared first.
pub fn most_common_mood(entries: &[JournalEntry]) -> Option<Mood> {
    if entries.is_empty() {
        return None;
    }

    let mut counts: HashMap<Mood, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.mood).or_default() += 1;
    }

    let mut best: Option<(Mood, usize)> = None;
    for mood in Mood::iter() {
        let count = counts.get(&mood).copied().unwrap_or(0);
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((mood, count));
        }
    }
    best.map(|(mood, _)| mood)
}

pub struct JournalService;

impl JournalService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<JournalEntry>, JournalError> {
        Ok(JournalEntry::find_all(pool).await?)
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateJournalEntry,
    ) -> Result<JournalEntry, JournalError> {
        let entry = JournalEntry::create(pool, data).await?;
        info!(entry_id = %entry.id, mood = %entry.mood, "Journal entry created");
        Ok(entry)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &CreateJournalEntry,
    ) -> Result<JournalEntry, JournalError> {
        JournalEntry::update(pool, id, data)
            .await?
            .ok_or(JournalError::NotFound(id))
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), JournalError> {
        if JournalEntry::delete(pool, id).await? == 0 {
            return Err(JournalError::NotFound(id));
        }
        info!(entry_id = %id, "Journal entry deleted");
        Ok(())
    }

    pub async fn stats(pool: &SqlitePool) -> Result<JournalStats, JournalError> {
        let entries = JournalEntry::find_all(pool).await?;
        Ok(JournalStats::from_entries(&entries))
    }
}
