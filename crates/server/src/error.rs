use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use services::services::{
    content::ContentError, database_validator::DatabaseValidationError,
    inspirations::InspirationError, journal::JournalError,
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to fetch {collection}")]
    Fetch {
        collection: &'static str,
        #[source]
        source: ContentError,
    },
    #[error(transparent)]
    Journal(#[from] JournalError),
    #[error(transparent)]
    Inspiration(#[from] InspirationError),
    #[error(transparent)]
    DatabaseValidation(#[from] DatabaseValidationError),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn fetch(collection: &'static str) -> impl FnOnce(ContentError) -> Self {
        move |source| Self::Fetch { collection, source }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Inspiration(InspirationError::MissingField(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Journal(JournalError::NotFound(_))
            | Self::Inspiration(InspirationError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Fetch { .. }
            | Self::Journal(_)
            | Self::Inspiration(_)
            | Self::DatabaseValidation(_)
            | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Fetch { collection, source } => {
                error!(collection, error = %source, "Error fetching collection");
                format!("Failed to fetch {collection}")
            }
            Self::BadRequest(message) => message.clone(),
            Self::Journal(JournalError::NotFound(_))
            | Self::Inspiration(InspirationError::NotFound(_) | InspirationError::MissingField(_)) => {
                self.to_string()
            }
            other => {
                error!(error = %other, "Internal server error");
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
