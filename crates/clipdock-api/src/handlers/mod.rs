pub mod health;
pub mod thumbnails;
pub mod videos;

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use clipdock_core::AppError;

/// Map a multipart read failure, keeping the body-limit case distinct so
/// oversized uploads answer 413 instead of a generic 400.
pub(crate) fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Upload exceeds the configured size limit".to_string())
    } else {
        AppError::BadRequest(format!("Failed to read multipart form: {}", err))
    }
}
