//! The filesystem abstraction consumed by the manifest generator.

use std::sync::Arc;

use crate::error::FsError;

/// Read/write access to a snapshot of deployed files.
///
/// Paths are `/`-rooted and `/`-separated (`/assets/logo.svg`) regardless of
/// the host platform. A listing must be complete and stable for the duration
/// of one generation run.
///
/// Implementations must be `Sync`: the generator lists files for several
/// asset groups in parallel.
pub trait Filesystem: Send + Sync {
    /// Lists every file (not directory) below `dir`, recursively.
    fn list(&self, dir: &str) -> Result<Vec<String>, FsError>;

    /// Reads a file as UTF-8 text.
    fn read(&self, file: &str) -> Result<String, FsError>;

    /// Returns an opaque content hash, stable for identical contents.
    fn hash(&self, file: &str) -> Result<String, FsError>;

    /// Writes a file, replacing any previous contents.
    fn write(&self, file: &str, contents: &str) -> Result<(), FsError>;
}

impl<T: Filesystem + ?Sized> Filesystem for &T {
    fn list(&self, dir: &str) -> Result<Vec<String>, FsError> {
        (**self).list(dir)
    }

    fn read(&self, file: &str) -> Result<String, FsError> {
        (**self).read(file)
    }

    fn hash(&self, file: &str) -> Result<String, FsError> {
        (**self).hash(file)
    }

    fn write(&self, file: &str, contents: &str) -> Result<(), FsError> {
        (**self).write(file, contents)
    }
}

impl<T: Filesystem + ?Sized> Filesystem for Arc<T> {
    fn list(&self, dir: &str) -> Result<Vec<String>, FsError> {
        (**self).list(dir)
    }

    fn read(&self, file: &str) -> Result<String, FsError> {
        (**self).read(file)
    }

    fn hash(&self, file: &str) -> Result<String, FsError> {
        (**self).hash(file)
    }

    fn write(&self, file: &str, contents: &str) -> Result<(), FsError> {
        (**self).write(file, contents)
    }
}
