// Season index resolution.
// Serves the catalog from the local cache, fetching and persisting it on a miss.

use serde_json::Value;
use tracing::{debug, info};

use crate::archive::{ArchiveSource, Catalog, Fetched};
use crate::cache::{self, CacheLayout};
use crate::error::Result;

use super::Mirror;

/// Result of looking up a season index.
#[derive(Debug, Clone)]
pub enum IndexLookup {
    Found(Catalog),
    /// The archive has no index for this location.
    NotFound,
}

impl IndexLookup {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            IndexLookup::Found(catalog) => Some(catalog),
            IndexLookup::NotFound => None,
        }
    }

    /// True when there is a catalog with at least one meeting.
    pub fn has_meetings(&self) -> bool {
        self.catalog().is_some_and(Catalog::has_meetings)
    }
}

impl<S: ArchiveSource + ?Sized + 'static> Mirror<S> {
    /// Return the catalog for `location`, from cache when present.
    pub async fn resolve_index(&self, location: &str) -> Result<IndexLookup> {
        let local = self.layout.index_path(location)?;

        if cache::exists(&local).await? {
            debug!(path = %local.display(), "index cache hit");
            let value: Value = cache::read_json(&local).await?;
            return Ok(IndexLookup::Found(Catalog::from_value(value)?));
        }

        let remote = CacheLayout::index_remote(location);
        let body = match self.source.fetch_text(&remote).await? {
            Fetched::Found(body) => body,
            Fetched::NotFound(status) => {
                info!(%location, %status, "season index not available");
                return Ok(IndexLookup::NotFound);
            }
        };

        let value: Value = serde_json::from_str(body.trim_start_matches('\u{feff}'))?;
        cache::write_json(&local, &value).await?;
        debug!(path = %local.display(), "index cached");

        Ok(IndexLookup::Found(Catalog::from_value(value)?))
    }
}
