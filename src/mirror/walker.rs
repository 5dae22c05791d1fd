// Catalog walk orchestration.
// Runs each session as a bounded task and joins them all before returning.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::archive::ArchiveSource;
use crate::error::{MirrorError, Result};

use super::Mirror;
use super::report::{SessionFailure, StreamTally, WalkReport};
use super::sessions::enumerate_sessions;

/// How a walk ended.
#[derive(Debug)]
pub enum WalkOutcome {
    Completed(WalkReport),
    /// The season has no index or an index without meetings.
    NoMeetings,
}

impl<S: ArchiveSource + ?Sized + 'static> Mirror<S> {
    /// Mirror every stream of every session listed for `year`.
    ///
    /// Session failures do not cancel other sessions; once all have finished
    /// the walk fails if any session did.
    pub async fn walk_catalog(&self, year: u32) -> Result<WalkOutcome> {
        let lookup = self.resolve_index(&year.to_string()).await?;
        if !lookup.has_meetings() {
            info!(year, "no meetings in season index");
            return Ok(WalkOutcome::NoMeetings);
        }

        let sessions = enumerate_sessions(&lookup);
        let mut report = WalkReport::new(year, sessions.len());
        info!(
            year,
            sessions = sessions.len(),
            streams = self.streams.len(),
            "walking catalog"
        );

        let permits = Arc::new(Semaphore::new(self.max_concurrent_sessions));
        let mut tasks: JoinSet<(String, Result<StreamTally>)> = JoinSet::new();

        for session in sessions {
            let mirror = self.clone();
            let permits = Arc::clone(&permits);
            tasks.spawn(async move {
                let result = match permits.acquire_owned().await {
                    Ok(_permit) => mirror.cache_session(&session).await,
                    Err(e) => Err(MirrorError::Task(e.to_string())),
                };
                (session, result)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((_, Ok(tally))) => report.streams.merge(&tally),
                Ok((session, Err(e))) => {
                    warn!(%session, error = %e, "session failed");
                    report.failures.push(SessionFailure {
                        session,
                        error: e.to_string(),
                    });
                }
                Err(e) => {
                    warn!(error = %e, "session task did not complete");
                    report.failures.push(SessionFailure {
                        session: String::from("<unknown>"),
                        error: MirrorError::Task(e.to_string()).to_string(),
                    });
                }
            }
        }

        report.finish();
        info!(
            year,
            written = report.streams.written,
            cached = report.streams.cached,
            unavailable = report.streams.unavailable,
            fetched = report.streams.fetched(),
            failed = report.failures.len(),
            elapsed_ms = report.elapsed_ms(),
            "catalog walk finished"
        );

        if let Some(first) = report.failures.first() {
            return Err(MirrorError::Walk {
                failed: report.failures.len(),
                total: report.sessions,
                first: format!("{}: {}", first.session, first.error),
            });
        }

        Ok(WalkOutcome::Completed(report))
    }
}
