// Outcome tracking for a catalog walk.

use chrono::{DateTime, Utc};

/// What happened to one (session, stream) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOutcome {
    /// A local artifact already existed; nothing was fetched.
    Cached,
    /// Fetched, parsed and written.
    Written { records: usize },
    /// The archive does not serve this stream for the session.
    Unavailable,
    /// Another task is already fetching the same artifact.
    InFlight,
}

/// Counts of stream outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamTally {
    pub written: usize,
    pub records: usize,
    pub cached: usize,
    pub unavailable: usize,
    pub in_flight: usize,
}

impl StreamTally {
    pub fn record(&mut self, outcome: StreamOutcome) {
        match outcome {
            StreamOutcome::Cached => self.cached += 1,
            StreamOutcome::Written { records } => {
                self.written += 1;
                self.records += records;
            }
            StreamOutcome::Unavailable => self.unavailable += 1,
            StreamOutcome::InFlight => self.in_flight += 1,
        }
    }

    pub fn merge(&mut self, other: &StreamTally) {
        self.written += other.written;
        self.records += other.records;
        self.cached += other.cached;
        self.unavailable += other.unavailable;
        self.in_flight += other.in_flight;
    }

    /// Number of remote reads issued.
    pub fn fetched(&self) -> usize {
        self.written + self.unavailable
    }
}

/// A session whose processing stopped on a fatal error.
#[derive(Debug, Clone)]
pub struct SessionFailure {
    pub session: String,
    pub error: String,
}

/// Summary of a completed walk.
#[derive(Debug, Clone)]
pub struct WalkReport {
    pub year: u32,
    pub sessions: usize,
    pub streams: StreamTally,
    pub failures: Vec<SessionFailure>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl WalkReport {
    pub fn new(year: u32, sessions: usize) -> Self {
        let now = Utc::now();
        Self {
            year,
            sessions,
            streams: StreamTally::default(),
            failures: Vec::new(),
            started_at: now,
            finished_at: now,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Utc::now();
    }

    pub fn elapsed_ms(&self) -> i64 {
        self.finished_at
            .signed_duration_since(self.started_at)
            .num_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_outcomes() {
        let mut tally = StreamTally::default();
        tally.record(StreamOutcome::Written { records: 10 });
        tally.record(StreamOutcome::Written { records: 5 });
        tally.record(StreamOutcome::Cached);
        tally.record(StreamOutcome::Unavailable);
        tally.record(StreamOutcome::InFlight);

        assert_eq!(tally.written, 2);
        assert_eq!(tally.records, 15);
        assert_eq!(tally.cached, 1);
        assert_eq!(tally.unavailable, 1);
        assert_eq!(tally.in_flight, 1);
        assert_eq!(tally.fetched(), 3);
    }

    #[test]
    fn test_merge() {
        let mut a = StreamTally::default();
        a.record(StreamOutcome::Cached);
        let mut b = StreamTally::default();
        b.record(StreamOutcome::Written { records: 3 });

        a.merge(&b);
        assert_eq!(a.cached, 1);
        assert_eq!(a.written, 1);
        assert_eq!(a.records, 3);
    }

    #[test]
    fn test_report_timing() {
        let mut report = WalkReport::new(2024, 3);
        report.started_at = Utc::now() - chrono::Duration::seconds(2);
        report.finish();

        assert!(report.elapsed_ms() >= 2000);
        assert!(report.failures.is_empty());
    }
}
