//! Shared setup for router-level tests.
//!
//! Spins up the full application router against an in-memory database and a
//! temp-directory asset store. The media tool paths point at the real
//! binaries but none of these tests reach the transcoding stage.

use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use chrono::Duration;
use clipdock_api::{auth, AppState, VideoIngestor};
use clipdock_core::models::NewVideo;
use clipdock_core::Config;
use clipdock_db::VideoRepository;
use clipdock_processing::FfmpegTools;
use clipdock_storage::{LocalStorage, Storage};
use std::sync::Arc;
use tempfile::TempDir;
use uuid::Uuid;

pub const JWT_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub router: Router,
    pub videos: VideoRepository,
    // Held so the asset directory outlives the test.
    _assets_dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let assets_dir = TempDir::new().unwrap();

    let pool = clipdock_db::connect("sqlite::memory:").await.unwrap();
    clipdock_db::run_migrations(&pool).await.unwrap();
    let videos = VideoRepository::new(pool);

    let asset_storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(
            assets_dir.path().to_path_buf(),
            "http://localhost/assets".to_string(),
        )
        .await
        .unwrap(),
    );

    let tools = Arc::new(FfmpegTools::new("ffmpeg".to_string(), "ffprobe".to_string()));
    let ingestor = VideoIngestor::new(videos.clone(), asset_storage.clone(), tools);

    let config = Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        jwt_secret: JWT_SECRET.to_string(),
        database_url: "sqlite::memory:".to_string(),
        s3_bucket: None,
        s3_region: "us-east-1".to_string(),
        s3_endpoint: None,
        s3_distribution: None,
        assets_root: assets_dir.path().to_string_lossy().into_owned(),
        assets_base_url: "http://localhost/assets".to_string(),
        ffmpeg_path: "ffmpeg".to_string(),
        ffprobe_path: "ffprobe".to_string(),
        max_video_upload_mb: 64,
        max_thumbnail_upload_mb: 1,
    };

    let state = AppState {
        config,
        videos: videos.clone(),
        asset_storage,
        ingestor,
    };

    TestApp {
        router: clipdock_api::router(state),
        videos,
        _assets_dir: assets_dir,
    }
}

impl TestApp {
    pub async fn seed_video(&self, user_id: Uuid) -> Uuid {
        self.videos
            .create(NewVideo {
                title: "Test clip".to_string(),
                description: None,
                user_id,
            })
            .await
            .unwrap()
            .id
    }
}

pub fn token_for(user_id: Uuid) -> String {
    auth::issue_token(user_id, JWT_SECRET, Duration::hours(1)).unwrap()
}

const BOUNDARY: &str = "clipdock-test-boundary";

/// Build a single-field multipart body.
pub fn multipart_body(field: &str, content_type: &str, payload: &[u8]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"upload.bin\"\r\n",
            field
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    (
        format!("multipart/form-data; boundary={}", BOUNDARY),
        body,
    )
}

pub fn multipart_request(
    uri: &str,
    token: Option<&str>,
    field: &str,
    content_type: &str,
    payload: &[u8],
) -> Request<Body> {
    let (mime, body) = multipart_body(field, content_type, payload);
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, mime);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body)).unwrap()
}
