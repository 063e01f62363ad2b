//! Fast-start remux planning
//!
//! A fast-start MP4 carries its metadata atom ahead of the media data so
//! playback can begin before the whole file downloads. The rewrite is a
//! stream copy; sample data is never re-encoded. This module validates the
//! source and derives the output path; the subprocess invocation itself
//! lives in `tools`.

use crate::error::RewriteError;
use std::path::{Path, PathBuf};

const FAST_START_SUFFIX: &str = ".faststart.mp4";

/// Validate a remux source before invoking anything: the path must be
/// non-empty, name an existing file, and carry an `.mp4` extension.
pub fn validate_source(src: &Path) -> Result<(), RewriteError> {
    if src.as_os_str().is_empty() {
        return Err(RewriteError::InvalidSource("empty source path".to_string()));
    }

    let has_mp4_ext = src
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("mp4"));
    if !has_mp4_ext {
        return Err(RewriteError::InvalidSource(format!(
            "expected an .mp4 source, got {}",
            src.display()
        )));
    }

    if !src.is_file() {
        return Err(RewriteError::InvalidSource(format!(
            "source does not exist: {}",
            src.display()
        )));
    }

    Ok(())
}

/// Sibling path the rewritten file is produced at.
pub fn output_path(src: &Path) -> PathBuf {
    let mut out = src.as_os_str().to_owned();
    out.push(FAST_START_SUFFIX);
    PathBuf::from(out)
}
