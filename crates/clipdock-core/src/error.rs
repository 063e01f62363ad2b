//! Error types module
//!
//! All request-terminal failures are unified under the `AppError` enum.
//! Each variant self-describes its HTTP presentation through the
//! `ErrorMetadata` trait so the API layer never match-maps status codes
//! by hand.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for client mistakes worth noticing
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "NOT_FOUND")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".to_string()),
            other => AppError::Database(other.to_string()),
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::Unauthorized(_) => 401,
            AppError::Forbidden(_) => 403,
            AppError::NotFound(_) => 404,
            AppError::UnsupportedMedia(_) | AppError::BadRequest(_) => 400,
            AppError::PayloadTooLarge(_) => 413,
            AppError::Database(_) | AppError::Storage(_) | AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::UnsupportedMedia(_) => "UNSUPPORTED_MEDIA",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            // Client-caused errors carry their message through unchanged.
            AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::UnsupportedMedia(msg)
            | AppError::BadRequest(msg)
            | AppError::PayloadTooLarge(msg) => msg.clone(),
            // Server-side failures get a generic message; details stay in logs.
            AppError::Database(_) => "Database operation failed".to_string(),
            AppError::Storage(_) => "Storage operation failed".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    fn is_sensitive(&self) -> bool {
        matches!(
            self,
            AppError::Database(_) | AppError::Storage(_) | AppError::Internal(_)
        )
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::Unauthorized(_)
            | AppError::NotFound(_)
            | AppError::BadRequest(_)
            | AppError::PayloadTooLarge(_) => LogLevel::Debug,
            AppError::Forbidden(_) | AppError::UnsupportedMedia(_) => LogLevel::Warn,
            AppError::Database(_) | AppError::Storage(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Unauthorized("no token".into()).http_status_code(),
            401
        );
        assert_eq!(
            AppError::Forbidden("not the owner".into()).http_status_code(),
            403
        );
        assert_eq!(AppError::NotFound("video".into()).http_status_code(), 404);
        assert_eq!(
            AppError::UnsupportedMedia("video/avi".into()).http_status_code(),
            400
        );
        assert_eq!(
            AppError::PayloadTooLarge("11MB upload".into()).http_status_code(),
            413
        );
        assert_eq!(AppError::Storage("s3 down".into()).http_status_code(), 500);
    }

    #[test]
    fn test_sensitive_errors_hide_details() {
        let err = AppError::Database("connection refused to 10.0.0.5".into());
        assert!(err.is_sensitive());
        assert!(!err.client_message().contains("10.0.0.5"));
    }

    #[test]
    fn test_client_errors_keep_message() {
        let err = AppError::Forbidden("You can't upload to this video".into());
        assert_eq!(err.client_message(), "You can't upload to this video");
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(
            AppError::BadRequest("bad id".into()).log_level(),
            LogLevel::Debug
        );
        assert_eq!(
            AppError::Internal("boom".into()).log_level(),
            LogLevel::Error
        );
    }
}
