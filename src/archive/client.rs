// Live timing archive HTTP client.
// Issues GET requests against the static archive and classifies responses.

use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::error::{MirrorError, Result};

use super::source::{ArchiveSource, Fetched};

const CLIENT_USER_AGENT: &str = concat!("livetiming-cache/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one archive root.
pub struct ArchiveClient {
    client: Client,
    base_url: String,
}

impl ArchiveClient {
    /// Create a client for the archive rooted at `base_url` (which must end in `/`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(MirrorError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Full URL for an archive-relative path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ArchiveSource for ArchiveClient {
    async fn fetch_text(&self, path: &str) -> Result<Fetched> {
        let url = self.url_for(path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::OK => Ok(Fetched::Found(response.text().await?)),
            status => {
                debug!(%url, %status, "archive returned non-success status");
                Ok(Fetched::NotFound(status))
            }
        }
    }
}
