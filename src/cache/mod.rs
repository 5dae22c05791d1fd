// Cache module for the local archive mirror.
// Stores the season index and parsed stream files under a data root.

pub mod inflight;
pub mod paths;
pub mod store;

pub use inflight::InFlight;
pub use paths::CacheLayout;
pub use store::{ensure_parent, exists, read_json, write_json};
