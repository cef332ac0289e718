// ABOUTME: Shared API error type and HTTP response mapping
// ABOUTME: Translates store results into status codes and error bodies

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use taskdeck_tasks::storage::StorageError;

/// Errors surfaced by request handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("task not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            // 404s carry no body, matching the rest of the task API
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                ResponseJson(json!({ "error": message })),
            )
                .into_response(),
            ApiError::Storage(err) => {
                error!("Storage error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ResponseJson(json!({ "error": "Database error" })),
                )
                    .into_response()
            }
        }
    }
}
