use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::transcribe::TranscribeError;

/// Errors surfaced to HTTP clients as a status plus `detail` payload
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Transcription provider is not configured")]
    TranscriberUnavailable,
    #[error("Audio file too large (max 25MB)")]
    AudioTooLarge,
    #[error("Result ID not found")]
    NotFound,
    #[error("Invalid upload: {0}")]
    BadUpload(String),
    #[error(transparent)]
    Transcribe(#[from] TranscribeError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::TranscriberUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::AudioTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadUpload(_) => StatusCode::BAD_REQUEST,
            ApiError::Transcribe(e) => match e {
                TranscribeError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                TranscribeError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                TranscribeError::Auth(_) => StatusCode::UNAUTHORIZED,
                TranscribeError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(%self, "request failed");
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
