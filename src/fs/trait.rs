//! FileSystem trait definition

use anyhow::Result;
use std::path::Path;

/// Abstraction over file reads so imports can run against in-memory files
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file as raw bytes. Failures are `ImportError::Io`.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;
}
