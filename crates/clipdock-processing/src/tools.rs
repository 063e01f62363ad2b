//! External media tool invocation
//!
//! The `MediaTools` trait is the only seam through which the application
//! touches ffprobe/ffmpeg, so the ingestion flow can be exercised in tests
//! without the tools installed.

use crate::error::{ProbeError, RewriteError};
use crate::faststart;
use crate::probe::{self, StreamDimensions};
use crate::staging::ScratchPath;
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Capability trait for media inspection and remuxing.
#[async_trait]
pub trait MediaTools: Send + Sync {
    /// Inspect the container at `path` and report the first video stream's
    /// pixel dimensions.
    async fn probe(&self, path: &Path) -> Result<StreamDimensions, ProbeError>;

    /// Rewrite the container at `src` with front-loaded metadata, stream
    /// content copied verbatim. Returns the deletion guard of the output
    /// file; the source file is untouched and no longer needed afterwards.
    async fn remux(&self, src: &Path) -> Result<ScratchPath, RewriteError>;
}

/// Subprocess-backed implementation over ffprobe and ffmpeg.
#[derive(Clone)]
pub struct FfmpegTools {
    ffmpeg_path: String,
    ffprobe_path: String,
}

impl FfmpegTools {
    pub fn new(ffmpeg_path: String, ffprobe_path: String) -> Self {
        Self {
            ffmpeg_path,
            ffprobe_path,
        }
    }
}

impl Default for FfmpegTools {
    fn default() -> Self {
        Self::new("ffmpeg".to_string(), "ffprobe".to_string())
    }
}

#[async_trait]
impl MediaTools for FfmpegTools {
    #[tracing::instrument(skip(self), fields(tool = %self.ffprobe_path))]
    async fn probe(&self, path: &Path) -> Result<StreamDimensions, ProbeError> {
        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "error", "-print_format", "json", "-show_streams"])
            .arg(path)
            .output()
            .await?;

        if !output.status.success() {
            return Err(ProbeError::Failed {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        probe::parse_ffprobe_output(&output.stdout)
    }

    #[tracing::instrument(skip(self), fields(tool = %self.ffmpeg_path))]
    async fn remux(&self, src: &Path) -> Result<ScratchPath, RewriteError> {
        faststart::validate_source(src)?;

        // The guard is created before the subprocess runs so a half-written
        // output is removed even on failure.
        let out = ScratchPath::new(faststart::output_path(src));

        let output = Command::new(&self.ffmpeg_path)
            .arg("-i")
            .arg(src)
            .args(["-c", "copy", "-movflags", "faststart", "-f", "mp4", "-y"])
            .arg(out.path())
            .output()
            .await?;

        if !output.status.success() {
            return Err(RewriteError::Failed {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(out)
    }
}
