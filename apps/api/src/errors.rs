use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use resume_contract::{
    ErrorBody, PingFailure, INVALID_DATA_MESSAGE, INVALID_ID_MESSAGE, NOT_FOUND_MESSAGE,
    PAYLOAD_TOO_LARGE_MESSAGE, PING_FAILED_MESSAGE, SERVER_ERROR_MESSAGE,
};
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid data: {0}")]
    InvalidInput(String),

    /// Ids the backing store cannot key on, such as ones containing NUL.
    #[error("Invalid id")]
    InvalidId,

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// /api/pingdb reports failures with its own `{ok: false}` body.
    #[error("Storage ping failed: {0}")]
    PingFailed(StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            AppError::InvalidInput(reason) => {
                tracing::debug!("Rejected resume payload: {reason}");
                (StatusCode::BAD_REQUEST, INVALID_DATA_MESSAGE)
            }
            AppError::InvalidId => (StatusCode::BAD_REQUEST, INVALID_ID_MESSAGE),
            AppError::PayloadTooLarge => {
                (StatusCode::PAYLOAD_TOO_LARGE, PAYLOAD_TOO_LARGE_MESSAGE)
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
            }
            AppError::PingFailed(e) => {
                tracing::error!("Ping failed: {e}");
                let body = Json(PingFailure {
                    ok: false,
                    error: PING_FAILED_MESSAGE.to_string(),
                });
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }
        };

        let body = Json(ErrorBody {
            error: message.to_string(),
        });

        (status, body).into_response()
    }
}
