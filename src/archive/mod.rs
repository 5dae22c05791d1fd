// Live timing archive module.
// Provides the transport seam, HTTP client and catalog types for the remote archive.

pub mod client;
pub mod source;
pub mod types;

#[cfg(test)]
pub mod memory;

pub use client::ArchiveClient;
pub use source::{ArchiveSource, Fetched};
pub use types::Catalog;
