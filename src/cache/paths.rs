// Cache path utilities.
// Constructs local paths that mirror the archive hierarchy.

use std::path::{Component, Path, PathBuf};

use crate::error::{MirrorError, Result};
use crate::streams::StreamDescriptor;

const INDEX_FILE: &str = "Index.json";

/// Canonical local layout rooted at the data directory.
#[derive(Debug, Clone)]
pub struct CacheLayout {
    root: PathBuf,
}

impl CacheLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Archive-relative path of a season index.
    pub fn index_remote(location: &str) -> String {
        format!("{}/{}", location, INDEX_FILE)
    }

    /// Local path of a season index: `<root>/<location>/Index.json`.
    pub fn index_path(&self, location: &str) -> Result<PathBuf> {
        let relative = Self::index_remote(location);
        self.resolve(&relative)
    }

    /// Archive-relative path of a session stream.
    pub fn stream_remote(session_path: &str, stream: &StreamDescriptor) -> String {
        format!("{}{}", session_path, stream.wire_file)
    }

    /// Local path of a parsed stream: `<root>/<session path><local file>`.
    pub fn stream_path(&self, session_path: &str, stream: &StreamDescriptor) -> Result<PathBuf> {
        let relative = format!("{}{}", session_path, stream.local_file());
        self.resolve(&relative)
    }

    fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let path = Path::new(relative);
        let safe = path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !safe {
            return Err(MirrorError::UnsafePath(relative.to_string()));
        }
        Ok(self.root.join(path))
    }
}
