// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

// endregion: --- Imports

// region:    --- Timestamp Error
#[derive(Error, Debug)]
pub enum TimestampError {
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),

    #[error("year {0} is outside 0000-9999")]
    YearOutOfRange(i32),
}
// endregion: --- Timestamp Error

// region:    --- Fixture Error
/// Failure to turn a fixture file into listings. Always fails the whole read.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fixture must contain a top-level array of listing records")]
    NotAnArray,

    #[error("fixture record #{index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("duplicate listing_id in fixture: {0}")]
    DuplicateListingId(String),
}
// endregion: --- Fixture Error

// region:    --- Store Error
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored listing {listing_id} is corrupt: {reason}")]
    CorruptRow { listing_id: String, reason: String },
}
// endregion: --- Store Error

// region:    --- Api Error
/// Errors surfaced by the HTTP layer, rendered as `{"detail": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Store(e) = &self {
            error!("{:<12} --> store failure: {}", "Handler", e);
        }
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}
// endregion: --- Api Error
