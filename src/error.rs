// Error types for the live timing cache.
// Covers transport, JSON, filesystem and walk-level failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed payload on line {line} at {timestamp}: {source}")]
    MalformedPayload {
        line: usize,
        timestamp: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session path escapes the data directory: {0}")]
    UnsafePath(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Session task failed: {0}")]
    Task(String),

    #[error("{failed} of {total} sessions failed, first failure: {first}")]
    Walk {
        failed: usize,
        total: usize,
        first: String,
    },
}

pub type Result<T> = std::result::Result<T, MirrorError>;
