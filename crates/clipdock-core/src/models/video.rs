//! Video domain model
//!
//! A video record exists before any media is attached to it. `video_url`
//! and `thumbnail_url` stay null until the corresponding upload succeeds;
//! a successful re-upload overwrites the previous value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Video {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub description: Option<String>,
    pub user_id: Uuid,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
}

/// Parameters for creating a new video record
#[derive(Debug, Clone, Deserialize)]
pub struct NewVideo {
    pub title: String,
    pub description: Option<String>,
    pub user_id: Uuid,
}

/// API representation of a video record
#[derive(Debug, Clone, Serialize)]
pub struct VideoResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub description: Option<String>,
    pub user_id: Uuid,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        VideoResponse {
            id: video.id,
            created_at: video.created_at,
            updated_at: video.updated_at,
            title: video.title,
            description: video.description,
            user_id: video.user_id,
            thumbnail_url: video.thumbnail_url,
            video_url: video.video_url,
        }
    }
}
