// Archive catalog types.
// Typed view over the season index; unknown fields are ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// Season-level index listing meetings in archive order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(rename = "Meetings", default)]
    pub meetings: Vec<Meeting>,
}

/// A race weekend or test event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meeting {
    #[serde(rename = "Sessions", default)]
    pub sessions: Vec<Session>,
}

/// One timed session within a meeting.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Session {
    /// Archive-relative directory of the session, e.g. `2024/2024-03-02_Bahrain_Grand_Prix/2024-03-02_Race/`.
    #[serde(rename = "Path", default)]
    pub path: Option<String>,
}

impl Catalog {
    /// Typed view of a raw index document.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn has_meetings(&self) -> bool {
        !self.meetings.is_empty()
    }
}

impl Session {
    /// The session path if present and non-empty.
    pub fn valid_path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }
}
