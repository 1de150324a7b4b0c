use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::log::LogError;

/// Errors surfaced by the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request payload")]
    InvalidPayload(#[source] serde_json::Error),

    #[error(transparent)]
    Log(#[from] LogError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Log(LogError::OutOfRange { .. }) => StatusCode::NOT_FOUND,
        };

        (status, self.to_string()).into_response()
    }
}
