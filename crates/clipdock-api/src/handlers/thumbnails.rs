//! Thumbnail upload handler
//!
//! Single-stage path: no transcoding, the image is written straight to the
//! asset store under a random name and the record's thumbnail URL updated.
//! A failed random-name draw aborts the request like any other error.

use crate::auth;
use crate::error::HttpAppError;
use crate::ingest::media_essence;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    http::HeaderMap,
    Json,
};
use clipdock_core::models::VideoResponse;
use clipdock_core::AppError;
use clipdock_storage::random_asset_name;
use uuid::Uuid;

pub async fn upload_thumbnail(
    State(state): State<AppState>,
    Path(video_id): Path<Uuid>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let token = auth::bearer_token(&headers)?;
    let user_id = auth::verify_token(token, &state.config.jwt_secret)?;

    let mut video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video_id)))?;

    if video.user_id != user_id {
        return Err(
            AppError::Forbidden("You are not allowed to modify this video".to_string()).into(),
        );
    }

    let mut payload = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(super::multipart_error)?
    {
        if field.name() == Some("thumbnail") {
            content_type = field.content_type().map(|s| s.to_string());
            let data = field.bytes().await.map_err(super::multipart_error)?;
            payload = Some(data);
        }
    }

    let payload = payload
        .ok_or_else(|| AppError::BadRequest("Missing 'thumbnail' form field".to_string()))?;

    let media_type = media_essence(content_type.as_deref().unwrap_or(""));
    let ext = match media_type.as_str() {
        "image/jpeg" => "jpeg",
        "image/png" => "png",
        other => {
            return Err(AppError::UnsupportedMedia(format!(
                "Unsupported thumbnail type '{}', expected image/jpeg or image/png",
                other
            ))
            .into())
        }
    };

    let name = random_asset_name(ext)?;
    state
        .asset_storage
        .put_bytes(&name, &media_type, payload.to_vec())
        .await?;

    video.thumbnail_url = Some(state.asset_storage.url_for(&name));
    state.videos.update(&video).await?;

    tracing::info!(%video_id, name = %name, "Thumbnail stored");

    Ok(Json(video.into()))
}
