use clipdock_api::{router, AppState, VideoIngestor};
use clipdock_core::Config;
use clipdock_db::VideoRepository;
use clipdock_processing::FfmpegTools;
use clipdock_storage::{LocalStorage, S3Storage, Storage};
use std::path::Path;
use std::sync::Arc;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    clipdock_api::telemetry::init();

    let config = Config::from_env()?;

    let pool = clipdock_db::connect(&config.database_url).await?;
    clipdock_db::run_migrations(&pool).await?;
    let videos = VideoRepository::new(pool);

    // Published videos go to S3 when a bucket is configured; otherwise a
    // local directory stands in for development.
    let video_storage: Arc<dyn Storage> = match &config.s3_bucket {
        Some(bucket) => Arc::new(
            S3Storage::new(
                bucket.clone(),
                config.s3_region.clone(),
                config.s3_endpoint.clone(),
                config.s3_distribution.clone(),
            )
            .await?,
        ),
        None => Arc::new(
            LocalStorage::new(
                Path::new(&config.assets_root).join("videos"),
                format!("{}/videos", config.assets_base_url.trim_end_matches('/')),
            )
            .await?,
        ),
    };

    let asset_storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(config.assets_root.clone(), config.assets_base_url.clone()).await?,
    );

    let tools = Arc::new(FfmpegTools::new(
        config.ffmpeg_path.clone(),
        config.ffprobe_path.clone(),
    ));
    let ingestor = VideoIngestor::new(videos.clone(), video_storage, tools);

    let port = config.server_port;
    let state = AppState {
        config,
        videos,
        asset_storage,
        ingestor,
    };

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "clipdock-api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
