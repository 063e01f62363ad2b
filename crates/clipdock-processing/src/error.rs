//! Pipeline stage errors
//!
//! One enum per stage so callers can surface the originating stage without
//! string matching. Subprocess diagnostics (stderr) stay inside the error
//! for server-side logging; they are never meant for clients.

use thiserror::Error;

/// Staging an upload to local disk failed.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Failed to create staging file: {0}")]
    Create(std::io::Error),

    #[error("Failed to write upload to staging file: {0}")]
    Write(std::io::Error),
}

/// Probing stream metadata failed.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to run ffprobe: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("ffprobe exited with failure: {stderr}")]
    Failed { stderr: String },

    #[error("Failed to parse ffprobe output: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No video stream with dimensions found")]
    NoVideoStream,

    #[error("Video stream reports zero height")]
    ZeroHeight,
}

/// Rewriting the container for fast start failed.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("Invalid remux source: {0}")]
    InvalidSource(String),

    #[error("Failed to run ffmpeg: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("ffmpeg exited with failure: {stderr}")]
    Failed { stderr: String },
}
