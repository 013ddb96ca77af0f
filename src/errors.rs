use crate::mood_log::MAX_ENTRIES;
use axum::http::StatusCode;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize entries: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A mutation that was applied in memory but not fully kept.
#[derive(Debug, Error)]
pub enum SaveWarning {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("entry for {0} is older than the {max} most recent days and was not kept", max = MAX_ENTRIES)]
    NotRetained(NaiveDate),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<crate::models::UnknownMood> for AppError {
    fn from(err: crate::models::UnknownMood) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
