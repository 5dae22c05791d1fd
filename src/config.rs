// Runtime configuration for the archive mirror.
// Reads overrides from the environment on top of built-in defaults.

use std::path::PathBuf;

use crate::error::{MirrorError, Result};
use crate::streams::StreamSet;

pub const DEFAULT_BASE_URL: &str = "https://livetiming.formula1.com/static/";
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_CONCURRENCY: usize = 4;

const BASE_URL_VAR: &str = "LIVETIMING_BASE_URL";
const DATA_DIR_VAR: &str = "LIVETIMING_DATA_DIR";
const CONCURRENCY_VAR: &str = "LIVETIMING_CONCURRENCY";

/// Settings for one catalog walk.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Archive root, always ending in `/`.
    pub base_url: String,
    /// Local cache root mirroring the archive hierarchy.
    pub data_dir: PathBuf,
    /// Upper bound on sessions processed at once.
    pub max_concurrent_sessions: usize,
    /// Streams mirrored for every session.
    pub streams: StreamSet,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            max_concurrent_sessions: DEFAULT_CONCURRENCY,
            streams: StreamSet::default(),
        }
    }
}

impl MirrorConfig {
    /// Build a config from `LIVETIMING_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.base_url = normalize_base_url(url.trim());
        }

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir.trim());
        }

        if let Some(raw) = lookup(CONCURRENCY_VAR) {
            config.max_concurrent_sessions = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(MirrorError::Config(format!(
                        "{} must be a positive integer, got {:?}",
                        CONCURRENCY_VAR, raw
                    )));
                }
            };
        }

        Ok(config)
    }
}

fn normalize_base_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
