//! HTTP error response conversion
//!
//! Domain errors from the db, storage, and processing crates converge on
//! `AppError`, whose `ErrorMetadata` drives the status code and the
//! client-facing body. Internal diagnostics (subprocess stderr, SDK
//! errors) are logged here and never serialized into responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clipdock_core::{AppError, ErrorMetadata, LogLevel};
use clipdock_storage::StorageError;
use serde::Serialize;

use crate::ingest::IngestError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rules prevent implementing the axum trait for the core type).
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

fn log_error(error: &AppError) {
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, code = error.error_code(), "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, code = error.error_code(), "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, code = error.error_code(), "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(&self.0);

        let body = Json(ErrorResponse {
            error: self.0.client_message(),
        });

        (status, body).into_response()
    }
}

// Convert domain errors to HttpAppError (impl for the local wrapper avoids
// orphan rule issues).

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::InvalidKey(key) => AppError::BadRequest(format!("Invalid key: {}", key)),
            other => AppError::Storage(other.to_string()),
        };
        HttpAppError(app)
    }
}

impl From<IngestError> for HttpAppError {
    fn from(err: IngestError) -> Self {
        let app = match err {
            IngestError::NotFound(id) => AppError::NotFound(format!("Video {} not found", id)),
            IngestError::Forbidden => {
                AppError::Forbidden("You are not allowed to upload to this video".to_string())
            }
            IngestError::UnsupportedMedia(ct) => AppError::UnsupportedMedia(format!(
                "Unsupported media type '{}', expected video/mp4",
                ct
            )),
            IngestError::Stage(e) => AppError::Internal(format!("Staging failed: {}", e)),
            IngestError::Probe(e) => AppError::Internal(format!("Stream inspection failed: {}", e)),
            IngestError::Rewrite(e) => {
                AppError::Internal(format!("Fast-start rewrite failed: {}", e))
            }
            IngestError::Publish(e) => AppError::Storage(e.to_string()),
            IngestError::Store(e) => e,
        };
        HttpAppError(app)
    }
}
