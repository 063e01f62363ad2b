//! Clipdock Processing Library
//!
//! The video ingestion pipeline stages: staging an upload to local disk,
//! probing stream geometry, and remuxing for fast-start playback. External
//! tool invocation (ffprobe/ffmpeg) is kept behind the `MediaTools` trait
//! so callers stay tool-agnostic.

pub mod error;
pub mod faststart;
pub mod probe;
pub mod staging;
pub mod tools;

pub use error::{ProbeError, RewriteError, StageError};
pub use probe::{GeometryClass, StreamDimensions};
pub use staging::{stage_upload, ScratchPath};
pub use tools::{FfmpegTools, MediaTools};
