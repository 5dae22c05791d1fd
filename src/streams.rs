// Stream descriptors for per-session telemetry channels.
// Maps logical stream names to their archive wire filenames.

use std::sync::Arc;

const WIRE_SUFFIX: &str = ".jsonStream";
const LOCAL_SUFFIX: &str = ".json";

/// Streams published under every session in the archive.
const SESSION_STREAMS: &[&str] = &[
    "SessionInfo",
    "ArchiveStatus",
    "TrackStatus",
    "ExtrapolatedClock",
    "Position.z",
    "CarData.z",
    "AudioStreams",
    "DriverList",
    "TimingDataF1",
    "SPFeed",
    "TimingAppData",
    "TimingData",
    "TopThree",
    "LapSeries",
    "TimingStats",
    "SessionStatus",
    "TyreStintSeries",
    "Heartbeat",
    "WeatherData",
    "WeatherDataSeries",
    "TlaRcm",
    "RaceControlMessages",
    "TeamRadio",
    "DriverScore",
    "CurrentTyres",
    "PitLaneTimeCollection",
];

/// A named stream and the file it is published as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDescriptor {
    pub name: String,
    pub wire_file: String,
}

impl StreamDescriptor {
    pub fn new(name: impl Into<String>, wire_file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wire_file: wire_file.into(),
        }
    }

    /// Descriptor whose wire file is `<name>.jsonStream`.
    pub fn named(name: &str) -> Self {
        Self::new(name, format!("{}{}", name, WIRE_SUFFIX))
    }

    /// Local filename: the wire filename with its stream extension swapped for plain JSON.
    pub fn local_file(&self) -> String {
        match self.wire_file.strip_suffix(WIRE_SUFFIX) {
            Some(stem) => format!("{}{}", stem, LOCAL_SUFFIX),
            None => self.wire_file.clone(),
        }
    }
}

/// Immutable, cheaply cloneable set of streams to mirror for each session.
#[derive(Debug, Clone)]
pub struct StreamSet {
    streams: Arc<[StreamDescriptor]>,
}

impl StreamSet {
    pub fn new(streams: Vec<StreamDescriptor>) -> Self {
        Self {
            streams: streams.into(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &StreamDescriptor> {
        self.streams.iter()
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }
}

impl Default for StreamSet {
    fn default() -> Self {
        Self::new(SESSION_STREAMS.iter().map(|name| StreamDescriptor::named(name)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_file_swaps_extension() {
        let timing = StreamDescriptor::named("TimingData");
        assert_eq!(timing.wire_file, "TimingData.jsonStream");
        assert_eq!(timing.local_file(), "TimingData.json");

        let position = StreamDescriptor::named("Position.z");
        assert_eq!(position.local_file(), "Position.z.json");
    }

    #[test]
    fn test_local_file_without_stream_suffix() {
        let plain = StreamDescriptor::new("Raw", "Raw.txt");
        assert_eq!(plain.local_file(), "Raw.txt");
    }

    #[test]
    fn test_default_set() {
        let set = StreamSet::default();
        assert_eq!(set.len(), 26);

        let names: Vec<&str> = set.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"SessionInfo"));
        assert_eq!(names.last(), Some(&"PitLaneTimeCollection"));
        assert!(names.contains(&"WeatherData"));
    }
}
