//! Upload staging
//!
//! Persists an inbound upload to a uniquely named temp file before any
//! further processing. Ownership of the file is explicit: the returned
//! `ScratchPath` guard deletes it when dropped, on every exit path of the
//! request. Cleanup failures are logged, never raised, so they cannot mask
//! the error that ended the request.

use crate::error::StageError;
use std::path::{Path, PathBuf};

/// A temp file path that is removed when the guard is dropped.
#[derive(Debug)]
pub struct ScratchPath {
    path: PathBuf,
}

impl ScratchPath {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchPath {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove scratch file"
                );
            }
        }
    }
}

/// Stage an uploaded payload on local disk.
///
/// Creates a uniquely named `.mp4` temp file, writes the full payload, and
/// returns the deletion guard. The caller owns the file for the rest of the
/// request.
pub async fn stage_upload(payload: &[u8]) -> Result<ScratchPath, StageError> {
    let staged = tempfile::Builder::new()
        .prefix("clipdock-upload-")
        .suffix(".mp4")
        .tempfile()
        .map_err(StageError::Create)?;

    // Detach from NamedTempFile so deletion is owned by ScratchPath.
    let (_file, path) = staged.keep().map_err(|e| StageError::Create(e.error))?;
    let guard = ScratchPath::new(path);

    tokio::fs::write(guard.path(), payload)
        .await
        .map_err(StageError::Write)?;

    Ok(guard)
}
