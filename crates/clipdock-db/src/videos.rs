//! Video repository
//!
//! CRUD over the `videos` table. Returns clean domain models; callers never
//! see sqlx types.

use chrono::Utc;
use clipdock_core::models::{NewVideo, Video};
use clipdock_core::AppError;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Clone)]
pub struct VideoRepository {
    pool: SqlitePool,
}

impl VideoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_video: NewVideo) -> Result<Video, AppError> {
        let now = Utc::now();
        let video = Video {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            title: new_video.title,
            description: new_video.description,
            user_id: new_video.user_id,
            thumbnail_url: None,
            video_url: None,
        };

        sqlx::query(
            r#"
            INSERT INTO videos (id, created_at, updated_at, title, description, user_id, thumbnail_url, video_url)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(video.id)
        .bind(video.created_at)
        .bind(video.updated_at)
        .bind(&video.title)
        .bind(&video.description)
        .bind(video.user_id)
        .bind(&video.thumbnail_url)
        .bind(&video.video_url)
        .execute(&self.pool)
        .await?;

        Ok(video)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, created_at, updated_at, title, description, user_id, thumbnail_url, video_url
            FROM videos
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(video)
    }

    /// Persist the mutable fields of a record. `updated_at` is refreshed here.
    pub async fn update(&self, video: &Video) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE videos
            SET updated_at = ?, title = ?, description = ?, thumbnail_url = ?, video_url = ?
            WHERE id = ?
            "#,
        )
        .bind(Utc::now())
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_url)
        .bind(&video.video_url)
        .bind(video.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Video {} not found", video.id)));
        }

        Ok(())
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Video>, AppError> {
        let videos = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, created_at, updated_at, title, description, user_id, thumbnail_url, video_url
            FROM videos
            WHERE user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(videos)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM videos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Video {} not found", id)));
        }

        Ok(())
    }
}
