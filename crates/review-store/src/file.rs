//! Directory-backed blob store.
//!
//! Each key maps to `<root>/<key>.json`. Writes go to a temp file that is
//! synced and then renamed over the target, so readers only ever observe a
//! complete previous or complete new value.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::backend::BlobStore;
use crate::error::{Result, StoreError};

#[derive(Debug, Clone)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path holding the value for `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io {
                operation: "read",
                path,
                source: e,
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.root).map_err(|e| StoreError::Io {
            operation: "create directory",
            path: self.root.clone(),
            source: e,
        })?;

        let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(value.as_bytes())
            .map_err(|e| StoreError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &path).map_err(|e| StoreError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote blob");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io {
                operation: "remove",
                path,
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_then_read() {
        let dir = tempdir().unwrap();
        let mut store = FileBlobStore::new(dir.path().join("nested"));

        store.write("coding", "{}").unwrap();

        assert_eq!(store.read("coding").unwrap().as_deref(), Some("{}"));
        assert!(dir.path().join("nested/coding.json").exists());
        assert!(!dir.path().join("nested/coding.json.tmp").exists());
    }

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileBlobStore::new(dir.path());
        assert_eq!(store.read("absent").unwrap(), None);
    }

    #[test]
    fn rejects_path_like_keys() {
        let store = FileBlobStore::new("/tmp");
        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(
                store.path_for(key),
                Err(StoreError::InvalidKey { .. })
            ));
        }
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = FileBlobStore::new(dir.path());
        store.write("coding", "{}").unwrap();
        store.remove("coding").unwrap();
        store.remove("coding").unwrap();
        assert_eq!(store.read("coding").unwrap(), None);
    }
}
