use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::retry::{RetryConfig, RetryMode};
use aws_config::BehaviorVersion;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::path::Path;

/// S3 storage implementation
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
    bucket: String,
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
    distribution_base: Option<String>,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    /// * `distribution_base` - Optional CDN/distribution prefix used for public URLs
    ///   (e.g., a CloudFront domain) instead of the raw bucket URL
    pub async fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
        distribution_base: Option<String>,
    ) -> StorageResult<Self> {
        let region_provider =
            RegionProviderChain::first_try(aws_config::Region::new(region.clone()));

        let retry_config = RetryConfig::standard()
            .with_max_attempts(5)
            .with_retry_mode(RetryMode::Adaptive);

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .retry_config(retry_config.clone())
            .load()
            .await;

        let client = if let Some(ref endpoint) = endpoint_url {
            // S3-compatible providers need an explicit endpoint and
            // path-style addressing.
            let mut s3_config_builder = aws_sdk_s3::config::Builder::from(&config)
                .endpoint_url(endpoint)
                .retry_config(retry_config);
            s3_config_builder = s3_config_builder.force_path_style(true);
            Client::from_conf(s3_config_builder.build())
        } else {
            Client::new(&config)
        };

        Ok(S3Storage {
            client,
            bucket,
            region,
            endpoint_url,
            distribution_base,
        })
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn put_file(&self, key: &str, content_type: &str, path: &Path) -> StorageResult<()> {
        let start = std::time::Instant::now();

        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| StorageError::UploadFailed(format!("Failed to open source: {}", e)))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 upload failed"
                );
                StorageError::UploadFailed(e.to_string())
            })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(())
    }

    async fn put_bytes(&self, key: &str, content_type: &str, data: Vec<u8>) -> StorageResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, bucket = %self.bucket, key = %key, "S3 upload failed");
                StorageError::UploadFailed(e.to_string())
            })?;

        Ok(())
    }

    /// Public URL for an object.
    ///
    /// Prefers the configured distribution prefix; falls back to the custom
    /// endpoint (path-style) or the standard AWS S3 URL format.
    fn url_for(&self, key: &str) -> String {
        if let Some(ref base) = self.distribution_base {
            return format!("{}/{}", base.trim_end_matches('/'), key);
        }
        if let Some(ref endpoint) = self.endpoint_url {
            return format!("{}/{}/{}", endpoint.trim_end_matches('/'), self.bucket, key);
        }
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, key
        )
    }
}
