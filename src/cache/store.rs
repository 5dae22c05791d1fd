// Cache store for reading and writing mirrored artifacts.
// Handles pretty JSON serialization and atomic filesystem writes.

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::Result;

/// Check if a cache file exists.
pub async fn exists(path: &Path) -> Result<bool> {
    Ok(fs::try_exists(path).await?)
}

/// Read and parse a cached JSON file, ignoring surrounding whitespace.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(contents.trim())?)
}

/// Write data to cache as pretty-printed JSON.
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    write_atomic(path, json.as_bytes()).await
}

/// Create any missing parent directories of `path`.
pub async fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    Ok(())
}

async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent(path).await?;

    // Presence of the final file marks it authoritative, so never expose a partial write
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);
    fs::rename(&temp_path, path).await?;

    Ok(())
}
