//! Video ingestion orchestrator
//!
//! Sequences the full pipeline for one upload: resolve and authorize the
//! record, stage the payload to disk, classify geometry, remux for fast
//! start, publish to object storage, and record the resulting URL. The two
//! scratch files live in this function's scope, so their deletion guards
//! run on every exit path, success or failure. The record is only mutated
//! after a successful publish.

use clipdock_core::models::Video;
use clipdock_core::AppError;
use clipdock_db::VideoRepository;
use clipdock_processing::{
    stage_upload, MediaTools, ProbeError, RewriteError, StageError,
};
use clipdock_storage::{random_object_key, Storage, StorageError};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

const VIDEO_MP4: &str = "video/mp4";

/// Terminal failure of one ingestion request, tagged with the originating
/// stage.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Video {0} not found")]
    NotFound(Uuid),

    #[error("Uploader does not own the video")]
    Forbidden,

    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("Staging failed: {0}")]
    Stage(#[from] StageError),

    #[error("Probe failed: {0}")]
    Probe(#[from] ProbeError),

    #[error("Rewrite failed: {0}")]
    Rewrite(#[from] RewriteError),

    #[error("Publish failed: {0}")]
    Publish(#[from] StorageError),

    #[error("Metadata store failed: {0}")]
    Store(#[source] AppError),
}

/// Strip MIME parameters and normalize: `video/mp4; codecs=avc1` becomes
/// `video/mp4`.
pub(crate) fn media_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

#[derive(Clone)]
pub struct VideoIngestor {
    videos: VideoRepository,
    storage: Arc<dyn Storage>,
    tools: Arc<dyn MediaTools>,
}

impl VideoIngestor {
    pub fn new(
        videos: VideoRepository,
        storage: Arc<dyn Storage>,
        tools: Arc<dyn MediaTools>,
    ) -> Self {
        Self {
            videos,
            storage,
            tools,
        }
    }

    /// Run the pipeline for one upload and return the updated record.
    #[tracing::instrument(skip(self, payload), fields(payload_bytes = payload.len()))]
    pub async fn ingest(
        &self,
        video_id: Uuid,
        owner_id: Uuid,
        content_type: &str,
        payload: &[u8],
    ) -> Result<Video, IngestError> {
        let result = self.run(video_id, owner_id, content_type, payload).await;

        if let Err(e) = &result {
            match e {
                IngestError::NotFound(_)
                | IngestError::Forbidden
                | IngestError::UnsupportedMedia(_) => {
                    tracing::debug!(%video_id, error = %e, "Upload rejected");
                }
                _ => tracing::error!(%video_id, error = %e, "Video ingestion failed"),
            }
        }

        result
    }

    async fn run(
        &self,
        video_id: Uuid,
        owner_id: Uuid,
        content_type: &str,
        payload: &[u8],
    ) -> Result<Video, IngestError> {
        // Record resolution and all validation happen before any disk I/O.
        let mut video = self
            .videos
            .get(video_id)
            .await
            .map_err(IngestError::Store)?
            .ok_or(IngestError::NotFound(video_id))?;

        if video.user_id != owner_id {
            return Err(IngestError::Forbidden);
        }

        let media_type = media_essence(content_type);
        if media_type != VIDEO_MP4 {
            return Err(IngestError::UnsupportedMedia(media_type));
        }

        // Scratch files are owned by this scope; the guards remove them on
        // every return below, including the early error returns.
        let staged = stage_upload(payload).await?;

        let dims = self.tools.probe(staged.path()).await?;
        let class = dims.geometry();

        let remuxed = self.tools.remux(staged.path()).await?;

        let key = random_object_key(class.as_str(), "mp4")?;
        self.storage
            .put_file(&key, VIDEO_MP4, remuxed.path())
            .await?;

        video.video_url = Some(self.storage.url_for(&key));
        self.videos
            .update(&video)
            .await
            .map_err(IngestError::Store)?;

        tracing::info!(
            %video_id,
            geometry = %class,
            key = %key,
            width = dims.width,
            height = dims.height,
            "Video ingested"
        );

        Ok(video)
    }
}
