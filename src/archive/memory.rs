// In-memory archive used by tests to simulate remote responses.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::Result;

use super::source::{ArchiveSource, Fetched};

/// Serves canned bodies by path and records every request made.
#[derive(Debug, Default)]
pub struct MemoryArchive {
    bodies: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, body: &str) -> Self {
        self.bodies.insert(path.to_string(), body.to_string());
        self
    }

    /// Paths requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ArchiveSource for MemoryArchive {
    async fn fetch_text(&self, path: &str) -> Result<Fetched> {
        self.requests.lock().unwrap().push(path.to_string());
        Ok(match self.bodies.get(path) {
            Some(body) => Fetched::Found(body.clone()),
            None => Fetched::NotFound(StatusCode::FORBIDDEN),
        })
    }
}
