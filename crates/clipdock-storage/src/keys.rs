//! Random object key generation
//!
//! Keys embed a 32-byte token from the OS random source, which makes
//! collisions negligible without any coordination between requests. A
//! failed draw from the OS source is an error, never silently skipped.

use crate::traits::{StorageError, StorageResult};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::TryRngCore;

const TOKEN_BYTES: usize = 32;

fn random_token() -> StorageResult<[u8; TOKEN_BYTES]> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| StorageError::KeyGeneration(e.to_string()))?;
    Ok(bytes)
}

/// Generate a namespaced object key: `<prefix>/<hex token>.<ext>`.
pub fn random_object_key(prefix: &str, ext: &str) -> StorageResult<String> {
    let token = random_token()?;
    Ok(format!("{}/{}.{}", prefix, hex::encode(token), ext))
}

/// Generate a flat asset file name: `<base64url token>.<ext>`.
pub fn random_asset_name(ext: &str) -> StorageResult<String> {
    let token = random_token()?;
    Ok(format!("{}.{}", URL_SAFE_NO_PAD.encode(token), ext))
}
