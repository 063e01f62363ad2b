//! Application state shared across handlers.

use crate::ingest::VideoIngestor;
use clipdock_core::Config;
use clipdock_db::VideoRepository;
use clipdock_storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub videos: VideoRepository,
    /// Local asset store for thumbnails, served alongside the API.
    pub asset_storage: Arc<dyn Storage>,
    pub ingestor: VideoIngestor,
}
