//! Key-value blob backends.
//!
//! The coding store only needs to read, write and remove one string value
//! under one key. Anything that can do that (an in-memory map, a directory
//! of files, browser storage behind a binding) can back it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::Result;

/// Minimal durable key-value contract.
pub trait BlobStore {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key` in a single write.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<B: BlobStore + ?Sized> BlobStore for Box<B> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-process backend. Clones share the same underlying map, so a clone
/// handed to a second store instance sees everything the first one wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing any validation (useful for simulating
    /// corrupt state).
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.into(), value.into());
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let mut first = MemoryBlobStore::new();
        let second = first.clone();
        first.write("k", "v").unwrap();
        assert_eq!(second.read("k").unwrap().as_deref(), Some("v"));
        first.remove("k").unwrap();
        assert_eq!(second.read("k").unwrap(), None);
    }

    #[test]
    fn removing_absent_key_is_ok() {
        let mut store = MemoryBlobStore::new();
        assert!(store.remove("missing").is_ok());
    }
}
