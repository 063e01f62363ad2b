//! Clipdock Storage Library
//!
//! Storage abstraction and implementations for published media. The
//! `Storage` trait hides the backend (S3 or local filesystem) from the
//! rest of the application; object keys are generated centrally in the
//! `keys` module so every backend uses the same layout.
//!
//! Keys are relative paths (`landscape/<token>.mp4`); they must not contain
//! `..` or a leading `/`.

pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

pub use keys::{random_asset_name, random_object_key};
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
