use super::FileSystem;
use crate::error::ImportError;
use anyhow::Result;
use std::fs;
use std::path::Path;

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|source| {
            ImportError::Io {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }
}
