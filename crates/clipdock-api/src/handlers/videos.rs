//! Video upload handler
//!
//! Accepts a multipart `video` field, authenticates the uploader, and hands
//! the payload to the ingestion orchestrator. All pipeline failures map to
//! status codes through `HttpAppError`.

use crate::auth;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    http::HeaderMap,
    Json,
};
use bytes::Bytes;
use clipdock_core::models::VideoResponse;
use clipdock_core::AppError;
use uuid::Uuid;

pub async fn upload_video(
    State(state): State<AppState>,
    Path(video_id): Path<Uuid>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let token = auth::bearer_token(&headers)?;
    let user_id = auth::verify_token(token, &state.config.jwt_secret)?;

    let mut payload: Option<Bytes> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(super::multipart_error)?
    {
        if field.name() == Some("video") {
            content_type = field.content_type().map(|s| s.to_string());
            let data = field.bytes().await.map_err(super::multipart_error)?;
            payload = Some(data);
        }
    }

    let payload = payload
        .ok_or_else(|| AppError::BadRequest("Missing 'video' form field".to_string()))?;
    let content_type =
        content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    let video = state
        .ingestor
        .ingest(video_id, user_id, &content_type, &payload)
        .await?;

    Ok(Json(video.into()))
}
