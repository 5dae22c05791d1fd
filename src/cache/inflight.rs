// Tracks canonical paths currently being fetched.
// Prevents two tasks in one walk from fetching the same artifact.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared set of paths with a fetch in progress.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    paths: Arc<Mutex<HashSet<PathBuf>>>,
}

/// Claim on one path; released on drop.
#[derive(Debug)]
pub struct InFlightGuard {
    paths: Arc<Mutex<HashSet<PathBuf>>>,
    path: PathBuf,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `path`, or return None if another task already holds it.
    pub fn claim(&self, path: &Path) -> Option<InFlightGuard> {
        let mut paths = self.paths.lock().unwrap_or_else(|e| e.into_inner());
        if !paths.insert(path.to_path_buf()) {
            return None;
        }
        Some(InFlightGuard {
            paths: Arc::clone(&self.paths),
            path: path.to_path_buf(),
        })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.paths
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_is_exclusive_until_dropped() {
        let inflight = InFlight::new();
        let path = Path::new("data/2024/Index.json");

        let guard = inflight.claim(path).unwrap();
        assert!(inflight.claim(path).is_none());

        drop(guard);
        assert!(inflight.claim(path).is_some());
    }

    #[test]
    fn test_distinct_paths_do_not_conflict() {
        let inflight = InFlight::new();
        let _a = inflight.claim(Path::new("a.json")).unwrap();
        assert!(inflight.claim(Path::new("b.json")).is_some());
    }
}
