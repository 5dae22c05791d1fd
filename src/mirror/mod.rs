// Catalog mirroring pipeline.
// Resolves a season index, enumerates its sessions and caches every stream per session.

pub mod index;
pub mod report;
pub mod sessions;
pub mod stream;
pub mod walker;

use std::sync::Arc;

use crate::archive::ArchiveSource;
use crate::cache::{CacheLayout, InFlight};
use crate::config::MirrorConfig;
use crate::streams::StreamSet;

pub use walker::WalkOutcome;

/// Shared context for one mirror run: archive access, local layout and stream set.
pub struct Mirror<S: ?Sized> {
    source: Arc<S>,
    layout: CacheLayout,
    streams: StreamSet,
    inflight: InFlight,
    max_concurrent_sessions: usize,
}

impl<S: ArchiveSource + 'static> Mirror<S> {
    pub fn new(source: S, config: &MirrorConfig) -> Self {
        Self::from_shared(Arc::new(source), config)
    }
}

impl<S: ArchiveSource + ?Sized + 'static> Mirror<S> {
    pub fn from_shared(source: Arc<S>, config: &MirrorConfig) -> Self {
        Self {
            source,
            layout: CacheLayout::new(config.data_dir.clone()),
            streams: config.streams.clone(),
            inflight: InFlight::new(),
            max_concurrent_sessions: config.max_concurrent_sessions.max(1),
        }
    }
}

impl<S: ?Sized> Clone for Mirror<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            layout: self.layout.clone(),
            streams: self.streams.clone(),
            inflight: self.inflight.clone(),
            max_concurrent_sessions: self.max_concurrent_sessions,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::path::Path;
    use std::sync::Arc;

    use crate::archive::memory::MemoryArchive;
    use crate::config::MirrorConfig;
    use crate::streams::{StreamDescriptor, StreamSet};

    use super::Mirror;

    pub const RACE: &str = "2024/2024-03-02_Bahrain_Grand_Prix/2024-03-02_Race/";
    pub const QUALI: &str = "2024/2024-03-02_Bahrain_Grand_Prix/2024-03-01_Qualifying/";

    pub const INDEX_BODY: &str = r#"{"Year":2024,"Meetings":[{"Key":1229,"Name":"Bahrain Grand Prix","Sessions":[{"Key":9468,"Name":"Qualifying","Path":"2024/2024-03-02_Bahrain_Grand_Prix/2024-03-01_Qualifying/"},{"Key":9469,"Name":"Cancelled"},{"Key":9472,"Name":"Race","Path":"2024/2024-03-02_Bahrain_Grand_Prix/2024-03-02_Race/"}]}]}"#;

    pub fn test_config(root: &Path) -> MirrorConfig {
        MirrorConfig {
            data_dir: root.to_path_buf(),
            streams: StreamSet::new(vec![
                StreamDescriptor::named("TrackStatus"),
                StreamDescriptor::named("WeatherData"),
            ]),
            ..MirrorConfig::default()
        }
    }

    pub fn mirror(archive: MemoryArchive, root: &Path) -> (Mirror<MemoryArchive>, Arc<MemoryArchive>) {
        let archive = Arc::new(archive);
        let mirror = Mirror::from_shared(Arc::clone(&archive), &test_config(root));
        (mirror, archive)
    }
}
