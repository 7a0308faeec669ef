//! An in-memory [`Filesystem`] for tests and dry runs.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use precache_common::ContentHash;

use crate::error::FsError;
use crate::filesystem::Filesystem;

#[derive(Debug, Clone)]
struct Entry {
    path: String,
    contents: String,
}

/// A snapshot of files held in memory.
///
/// Listings are returned in insertion order, which lets callers check that
/// downstream output does not depend on enumeration order. Hashes default to
/// the [`ContentHash`] of the contents and can be overridden per file.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    entries: RwLock<Vec<Entry>>,
    hashes: RwLock<HashMap<String, String>>,
}

impl MemoryFilesystem {
    /// Creates an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a file.
    pub fn with_file(self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(path.into(), contents.into());
        self
    }

    /// Adds a file whose hash is reported as `hash` instead of being computed.
    pub fn with_hashed_file(
        self,
        path: impl Into<String>,
        contents: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        let path = path.into();
        self.write_hashes().insert(path.clone(), hash.into());
        self.insert(path, contents.into());
        self
    }

    /// Returns the contents of a file, if present.
    pub fn get(&self, path: &str) -> Option<String> {
        self.read_entries()
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.contents.clone())
    }

    /// Number of files held.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    /// Whether the filesystem holds no files.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&self, path: String, contents: String) {
        let mut entries = self.write_entries();
        match entries.iter_mut().find(|e| e.path == path) {
            Some(entry) => entry.contents = contents,
            None => entries.push(Entry { path, contents }),
        }
    }

    fn read_entries(&self) -> RwLockReadGuard<'_, Vec<Entry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, Vec<Entry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_hashes(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.hashes.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn lookup(&self, file: &str) -> Result<String, FsError> {
        self.get(file).ok_or_else(|| FsError::NotFound {
            path: file.to_string(),
        })
    }
}

impl Filesystem for MemoryFilesystem {
    fn list(&self, dir: &str) -> Result<Vec<String>, FsError> {
        let prefix = if dir.ends_with('/') {
            dir.to_string()
        } else {
            format!("{dir}/")
        };
        Ok(self
            .read_entries()
            .iter()
            .filter(|e| e.path.starts_with(&prefix))
            .map(|e| e.path.clone())
            .collect())
    }

    fn read(&self, file: &str) -> Result<String, FsError> {
        self.lookup(file)
    }

    fn hash(&self, file: &str) -> Result<String, FsError> {
        let contents = self.lookup(file)?;
        let hashes = self.hashes.read().unwrap_or_else(PoisonError::into_inner);
        Ok(match hashes.get(file) {
            Some(hash) => hash.clone(),
            None => ContentHash::from_bytes(contents.as_bytes()).to_string(),
        })
    }

    fn write(&self, file: &str, contents: &str) -> Result<(), FsError> {
        self.insert(file.to_string(), contents.to_string());
        Ok(())
    }
}
