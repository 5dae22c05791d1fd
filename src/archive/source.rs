// Transport abstraction over the remote archive.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::Result;

/// Outcome of a remote read that reached the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// The archive served the artifact.
    Found(String),
    /// The archive answered with a non-success status.
    NotFound(StatusCode),
}

/// Read-only access to archive artifacts by path relative to the archive root.
#[async_trait]
pub trait ArchiveSource: Send + Sync {
    async fn fetch_text(&self, path: &str) -> Result<Fetched>;
}
