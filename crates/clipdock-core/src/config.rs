//! Configuration module
//!
//! All ambient configuration (ports, secrets, bucket names, tool paths) is
//! read from the process environment exactly once at startup and passed
//! into the application explicitly. Nothing reads `env::var` mid-request.

use std::env;

use anyhow::{bail, Context};

const DEFAULT_PORT: u16 = 8091;
const DEFAULT_MAX_VIDEO_UPLOAD_MB: usize = 1024;
const DEFAULT_MAX_THUMBNAIL_UPLOAD_MB: usize = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    // Auth
    pub jwt_secret: String,
    // Metadata store
    pub database_url: String,
    // Object storage for published videos
    pub s3_bucket: Option<String>,
    pub s3_region: String,
    pub s3_endpoint: Option<String>,
    /// Distribution prefix (e.g. a CloudFront domain) used to compose the
    /// canonical access URL of a published video.
    pub s3_distribution: Option<String>,
    // Local asset storage for thumbnails
    pub assets_root: String,
    pub assets_base_url: String,
    // External media tools
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    // Upload limits
    pub max_video_upload_mb: usize,
    pub max_thumbnail_upload_mb: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let cors_origins = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let config = Config {
            server_port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            environment,
            cors_origins,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://clipdock.db".to_string()),
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .unwrap_or_else(|_| "us-east-1".to_string()),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            s3_distribution: env::var("S3_CF_DISTRIBUTION").ok(),
            assets_root: env::var("ASSETS_ROOT").unwrap_or_else(|_| "./assets".to_string()),
            assets_base_url: env::var("ASSETS_BASE_URL").unwrap_or_else(|_| "assets".to_string()),
            ffmpeg_path: env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string()),
            ffprobe_path: env::var("FFPROBE_PATH").unwrap_or_else(|_| "ffprobe".to_string()),
            max_video_upload_mb: env::var("MAX_VIDEO_UPLOAD_MB")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(DEFAULT_MAX_VIDEO_UPLOAD_MB),
            max_thumbnail_upload_mb: env::var("MAX_THUMBNAIL_UPLOAD_MB")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(DEFAULT_MAX_THUMBNAIL_UPLOAD_MB),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < 16 {
            bail!("JWT_SECRET must be at least 16 characters");
        }
        if self.is_production() && self.s3_bucket.is_none() {
            bail!("S3_BUCKET must be set in production");
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn max_video_upload_bytes(&self) -> usize {
        self.max_video_upload_mb * 1024 * 1024
    }

    pub fn max_thumbnail_upload_bytes(&self) -> usize {
        self.max_thumbnail_upload_mb * 1024 * 1024
    }
}
