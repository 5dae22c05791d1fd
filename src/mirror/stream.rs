// Per-session stream caching.
// Fetches a stream once, parses it into records and persists the result.

use tracing::{debug, warn};

use crate::archive::{ArchiveSource, Fetched};
use crate::cache::{self, CacheLayout};
use crate::error::{MirrorError, Result};
use crate::parser::parse_stream;
use crate::streams::StreamDescriptor;

use super::Mirror;
use super::report::{StreamOutcome, StreamTally};

impl<S: ArchiveSource + ?Sized + 'static> Mirror<S> {
    /// Ensure one stream of one session is cached locally.
    ///
    /// An existing local file is never refetched. Streams the archive does
    /// not serve are skipped without writing anything.
    pub async fn cache_stream(
        &self,
        session_path: &str,
        stream: &StreamDescriptor,
    ) -> Result<StreamOutcome> {
        let local = self.layout.stream_path(session_path, stream)?;

        if cache::exists(&local).await? {
            return Ok(StreamOutcome::Cached);
        }

        let Some(_claim) = self.inflight.claim(&local) else {
            debug!(path = %local.display(), "fetch already in flight");
            return Ok(StreamOutcome::InFlight);
        };

        // The previous holder may have finished between the check and the claim
        if cache::exists(&local).await? {
            return Ok(StreamOutcome::Cached);
        }

        cache::ensure_parent(&local).await?;

        let remote = CacheLayout::stream_remote(session_path, stream);
        let body = match self.source.fetch_text(&remote).await {
            Ok(Fetched::Found(body)) => body,
            Ok(Fetched::NotFound(status)) => {
                debug!(stream = %stream.name, %remote, %status, "stream unavailable");
                return Ok(StreamOutcome::Unavailable);
            }
            Err(MirrorError::Http(e)) => {
                warn!(stream = %stream.name, %remote, error = %e, "stream request failed");
                return Ok(StreamOutcome::Unavailable);
            }
            Err(e) => return Err(e),
        };

        let records = parse_stream(&body)?;
        cache::write_json(&local, &records).await?;
        debug!(
            stream = %stream.name,
            path = %local.display(),
            records = records.len(),
            "stream cached"
        );

        Ok(StreamOutcome::Written {
            records: records.len(),
        })
    }

    /// Cache every configured stream of a session, in order.
    ///
    /// Stops at the first fatal error; streams already written stay cached.
    pub async fn cache_session(&self, session_path: &str) -> Result<StreamTally> {
        let mut tally = StreamTally::default();
        for stream in self.streams.iter() {
            let outcome = self.cache_stream(session_path, stream).await?;
            tally.record(outcome);
        }
        Ok(tally)
    }
}
