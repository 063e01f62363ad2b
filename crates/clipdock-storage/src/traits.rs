//! Storage abstraction trait
//!
//! All storage backends must implement this trait. A failed transfer is
//! never reported as success; retry policy belongs to callers.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Backends are key-addressed: callers choose the key (see `keys`), the
/// backend stores the object under it and can report the public URL.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Stream the contents of a local file to the store under `key`,
    /// recording `content_type` as the object's declared media type.
    async fn put_file(&self, key: &str, content_type: &str, path: &Path) -> StorageResult<()>;

    /// Store an in-memory payload under `key`.
    async fn put_bytes(&self, key: &str, content_type: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Public URL for the object stored under `key`.
    fn url_for(&self, key: &str) -> String;
}
