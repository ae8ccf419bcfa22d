use super::FileSystem;
use crate::error::ImportError;
use anyhow::Result;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, Vec<u8>>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            root: PathBuf::from("/mock"),
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.add_bytes(path, content.as_bytes());
    }

    pub fn add_bytes(&self, path: impl AsRef<Path>, content: &[u8]) {
        let path = self.normalize_path(path.as_ref());
        self.files.write().unwrap().insert(path, content.to_vec());
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files.read().unwrap().contains_key(&path)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .cloned()
            .ok_or_else(|| {
                ImportError::Io {
                    path: path.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file() {
        let fs = MockFileSystem::new();
        fs.add_file("hops.xml", "<HOPS/>");

        assert!(fs.exists(Path::new("/mock/hops.xml")));
        assert!(fs.exists(Path::new("hops.xml")));
    }

    #[test]
    fn test_read_bytes() {
        let fs = MockFileSystem::new();
        fs.add_bytes("latin1.xml", &[0x3c, 0xe9, 0x3e]);

        let content = fs.read_bytes(Path::new("latin1.xml")).unwrap();
        assert_eq!(content, vec![0x3c, 0xe9, 0x3e]);
    }

    #[test]
    fn test_missing_file() {
        let fs = MockFileSystem::new();
        let err = fs.read_bytes(Path::new("missing.xml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ImportError>(),
            Some(ImportError::Io { .. })
        ));
    }
}
