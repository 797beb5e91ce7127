//! Storage backends
//!
//! A backend stores one JSON document per collection. Repositories read
//! the whole document when opened and rewrite it on every change.

use crate::error::{BookingError, BookingResult};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::debug;

pub trait Storage {
    /// Contents of `collection`, or `None` if it was never written
    fn read(&self, collection: &str) -> BookingResult<Option<String>>;

    /// Replace the contents of `collection`
    fn write(&self, collection: &str, contents: &str) -> BookingResult<()>;
}

/// One `<collection>.json` file per collection inside a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonDirStorage {
    root: PathBuf,
}

impl JsonDirStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.json"))
    }
}

impl Storage for JsonDirStorage {
    fn read(&self, collection: &str) -> BookingResult<Option<String>> {
        let path = self.path_for(collection);
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), bytes = text.len(), "Loaded collection");
                Ok(Some(text))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(BookingError::Io { path, source }),
        }
    }

    fn write(&self, collection: &str, contents: &str) -> BookingResult<()> {
        fs::create_dir_all(&self.root).map_err(|source| BookingError::Io {
            path: self.root.clone(),
            source,
        })?;

        let path = self.path_for(collection);
        fs::write(&path, contents).map_err(|source| BookingError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = contents.len(), "Saved collection");
        Ok(())
    }
}

/// In-memory backend; clones share the same collections
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    collections: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, collection: &str) -> BookingResult<Option<String>> {
        Ok(self.collections.borrow().get(collection).cloned())
    }

    fn write(&self, collection: &str, contents: &str) -> BookingResult<()> {
        self.collections
            .borrow_mut()
            .insert(collection.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clones_share_state() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.write("hotels", "[]").unwrap();
        assert_eq!(b.read("hotels").unwrap().as_deref(), Some("[]"));
        assert_eq!(b.read("customers").unwrap(), None);
    }

    #[test]
    fn test_dir_path() {
        let storage = JsonDirStorage::new("data");
        assert_eq!(storage.path_for("hotels"), Path::new("data/hotels.json"));
    }
}
