// Stream body parser.
// Splits a raw `.jsonStream` body into timestamped records.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{MirrorError, Result};

const LINE_DELIMITER: &str = "\r\n";
const BYTE_ORDER_MARK: char = '\u{feff}';

static TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}:\d{2}:\d{2}\.\d{3}").expect("valid timestamp pattern"));

/// Payload following a timestamp.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Nothing followed the timestamp.
    Empty,
    Json(Value),
}

/// One line of a stream: session-relative timestamp plus payload.
///
/// On disk a record is a single-entry object `{"<timestamp>": <payload>}`,
/// with the empty payload written as `""`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub timestamp: String,
    pub payload: Payload,
}

impl Record {
    pub fn new(timestamp: impl Into<String>, payload: Payload) -> Self {
        Self {
            timestamp: timestamp.into(),
            payload,
        }
    }
}

/// Parse a raw stream body into records, preserving line order.
///
/// A line without a timestamp becomes a record whose timestamp is the whole
/// line and whose payload is empty. Text after the timestamp that is not
/// valid JSON is an error.
pub fn parse_stream(raw: &str) -> Result<Vec<Record>> {
    let body = raw.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
    body.split(LINE_DELIMITER)
        .enumerate()
        .map(|(i, line)| parse_line(i + 1, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Result<Record> {
    let Some(found) = TIMESTAMP.find(line) else {
        return Ok(Record::new(line, Payload::Empty));
    };

    let timestamp = found.as_str();
    let remainder = &line[found.end()..];
    if remainder.is_empty() {
        return Ok(Record::new(timestamp, Payload::Empty));
    }

    let value = serde_json::from_str(remainder).map_err(|source| MirrorError::MalformedPayload {
        line: line_no,
        timestamp: timestamp.to_string(),
        source,
    })?;
    Ok(Record::new(timestamp, Payload::Json(value)))
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match &self.payload {
            Payload::Empty => map.serialize_entry(&self.timestamp, "")?,
            Payload::Json(value) => map.serialize_entry(&self.timestamp, value)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a single-entry object keyed by timestamp")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Record, A::Error> {
        let Some((timestamp, value)) = map.next_entry::<String, Value>()? else {
            return Err(de::Error::invalid_length(0, &self));
        };
        if map.next_key::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(2, &self));
        }

        let payload = match value {
            Value::String(s) if s.is_empty() => Payload::Empty,
            other => Payload::Json(other),
        };
        Ok(Record { timestamp, payload })
    }
}
