//! Startup and health-check validation of the SQLite schema.

use serde::Serialize;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info, warn};
use ts_rs::TS;

/// Tables and views the listing and journal endpoints query.
pub const REQUIRED_OBJECTS: &[&str] = &[
    "categories",
    "quotes",
    "i_affirmations_view",
    "u_affirmations_view",
    "journal_entries",
    "custom_inspirations",
];

#[derive(Debug, Error)]
pub enum DatabaseValidationError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Inspects `sqlite_master` and the migrations table of a pool.
pub struct DatabaseValidator {
    pool: SqlitePool,
}

impl DatabaseValidator {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Report migration state and any missing tables or views.
    pub async fn validate(&self) -> Result<ValidationResult, DatabaseValidationError> {
        if !self.object_exists("_sqlx_migrations").await? {
            warn!("Database not initialized - _sqlx_migrations table does not exist");
            return Ok(ValidationResult {
                is_initialized: false,
                migrations_applied: 0,
                latest_migration: None,
                missing_objects: REQUIRED_OBJECTS.iter().map(|s| s.to_string()).collect(),
            });
        }

        let migrations_applied =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = 1")
                .fetch_one(&self.pool)
                .await?;

        let latest_migration = sqlx::query_scalar::<_, String>(
            "SELECT description FROM _sqlx_migrations WHERE success = 1 ORDER BY version DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        let missing_objects = self.missing_objects(REQUIRED_OBJECTS).await?;
        if !missing_objects.is_empty() {
            warn!(missing = ?missing_objects, "Database is missing required tables or views");
        }

        info!(
            migrations_applied = migrations_applied,
            latest_migration = ?latest_migration,
            "Database validation complete"
        );

        Ok(ValidationResult {
            is_initialized: true,
            migrations_applied: usize::try_from(migrations_applied).unwrap_or(0),
            latest_migration,
            missing_objects,
        })
    }

    /// Names from `required` that are neither a table nor a view.
    pub async fn missing_objects(
        &self,
        required: &[&str],
    ) -> Result<Vec<String>, DatabaseValidationError> {
        let mut missing = Vec::new();
        for name in required {
            if !self.object_exists(name).await? {
                missing.push(name.to_string());
            }
        }
        Ok(missing)
    }

    async fn object_exists(&self, name: &str) -> Result<bool, DatabaseValidationError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }
}

/// Outcome of [`DatabaseValidator::validate`], also served by the health endpoint.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_initialized: bool,
    pub migrations_applied: usize,
    pub latest_migration: Option<String>,
    pub missing_objects: Vec<String>,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        self.is_initialized && self.missing_objects.is_empty()
    }

    pub fn summary(&self) -> String {
        if !self.is_initialized {
            "Database not initialized - migrations need to be run".to_string()
        } else if !self.missing_objects.is_empty() {
            format!("Database missing: {}", self.missing_objects.join(", "))
        } else {
            format!("Database OK - {} migrations applied", self.migrations_applied)
        }
    }
}
