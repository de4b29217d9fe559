//! The user's own "think / feel / do" inspiration cards.

use db::models::custom_inspiration::{
    CreateCustomInspiration, CustomInspiration, UpdateCustomInspiration,
};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum InspirationError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("inspiration not found: {0}")]
    NotFound(Uuid),
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Trim every field; `think` and `do` must stay non-blank, blank optional
/// fields are stored as absent.
fn normalize(data: CreateCustomInspiration) -> Result<CreateCustomInspiration, InspirationError> {
    let required = |value: String, name: &'static str| {
        let value = value.trim().to_string();
        if value.is_empty() {
            Err(InspirationError::MissingField(name))
        } else {
            Ok(value)
        }
    };
    let optional = |value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    Ok(CreateCustomInspiration {
        think: required(data.think, "think")?,
        author: optional(data.author),
        feel: optional(data.feel),
        action: required(data.action, "do")?,
    })
}

pub struct InspirationService;

impl InspirationService {
    /// Newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<CustomInspiration>, InspirationError> {
        Ok(CustomInspiration::find_all(pool).await?)
    }

    pub async fn create(
        pool: &SqlitePool,
        data: CreateCustomInspiration,
    ) -> Result<CustomInspiration, InspirationError> {
        let data = normalize(data)?;
        let inspiration = CustomInspiration::create(pool, &data).await?;
        info!(inspiration_id = %inspiration.id, "Inspiration created");
        Ok(inspiration)
    }

    /// Apply a partial update. A blank `author` or `feel` clears that field.
    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        patch: UpdateCustomInspiration,
    ) -> Result<CustomInspiration, InspirationError> {
        let current = CustomInspiration::find_by_id(pool, id)
            .await?
            .ok_or(InspirationError::NotFound(id))?;
        let data = normalize(patch.apply_to(&current))?;

        CustomInspiration::update(pool, id, &data)
            .await?
            .ok_or(InspirationError::NotFound(id))
    }

    /// Removing an id that does not exist is not an error.
    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), InspirationError> {
        if CustomInspiration::delete(pool, id).await? == 0 {
            debug!(inspiration_id = %id, "No inspiration to delete");
        } else {
            info!(inspiration_id = %id, "Inspiration deleted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use db::DBService;

    use super::*;

    fn card(think: &str, author: Option<&str>, action: &str) -> CreateCustomInspiration {
        CreateCustomInspiration {
            think: think.to_string(),
            author: author.map(str::to_string),
            feel: None,
            action: action.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_trims_and_drops_blank_optionals() {
        let db = DBService::new_in_memory().await.unwrap();
        let created = InspirationService::create(
            &db.pool,
            card("  Small sparks become bonfires  ", Some("   "), " Ten focused minutes "),
        )
        .await
        .unwrap();

        assert_eq!(created.think, "Small sparks become bonfires");
        assert_eq!(created.action, "Ten focused minutes");
        assert!(created.author.is_none());
    }

    #[tokio::test]
    async fn test_create_requires_think_and_do() {
        let db = DBService::new_in_memory().await.unwrap();
        assert!(matches!(
            InspirationService::create(&db.pool, card("  ", None, "Act")).await,
            Err(InspirationError::MissingField("think"))
        ));
        assert!(matches!(
            InspirationService::create(&db.pool, card("Think", None, "")).await,
            Err(InspirationError::MissingField("do"))
        ));
        assert!(InspirationService::list(&db.pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_and_clears() {
        let db = DBService::new_in_memory().await.unwrap();
        let created = InspirationService::create(
            &db.pool,
            card("Lead with generosity", Some("Mentor"), "Send one message"),
        )
        .await
        .unwrap();

        let patch = UpdateCustomInspiration {
            author: Some(String::new()),
            feel: Some(" Open-hearted ".to_string()),
            ..Default::default()
        };
        let updated = InspirationService::update(&db.pool, created.id, patch).await.unwrap();
        assert_eq!(updated.think, "Lead with generosity");
        assert!(updated.author.is_none());
        assert_eq!(updated.feel.as_deref(), Some("Open-hearted"));

        let blank_think = UpdateCustomInspiration {
            think: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            InspirationService::update(&db.pool, created.id, blank_think).await,
            Err(InspirationError::MissingField("think"))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_but_delete_is_quiet() {
        let db = DBService::new_in_memory().await.unwrap();
        let missing = Uuid::new_v4();
        assert!(matches!(
            InspirationService::update(&db.pool, missing, UpdateCustomInspiration::default()).await,
            Err(InspirationError::NotFound(id)) if id == missing
        ));
        assert!(InspirationService::delete(&db.pool, missing).await.is_ok());

        let created = InspirationService::create(&db.pool, card("Think", None, "Do"))
            .await
            .unwrap();
        InspirationService::delete(&db.pool, created.id).await.unwrap();
        assert!(InspirationService::list(&db.pool).await.unwrap().is_empty());
    }
}
