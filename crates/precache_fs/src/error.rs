//! Error types for filesystem operations.

use std::path::PathBuf;

/// Errors raised by a [`Filesystem`](crate::Filesystem) implementation.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// An I/O error occurred while reading or writing a file.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The requested file does not exist.
    #[error("file not found: {path}")]
    NotFound {
        /// The path as requested by the caller.
        path: String,
    },

    /// Directory traversal failed part-way through.
    #[error("failed to list {root}: {reason}")]
    Walk {
        /// The directory being listed.
        root: PathBuf,
        /// Description of the traversal failure.
        reason: String,
    },

    /// The path escapes the filesystem root (e.g. via `..`).
    #[error("path escapes the filesystem root: {path}")]
    OutsideRoot {
        /// The offending path.
        path: String,
    },

    /// A file read as text is not valid UTF-8.
    #[error("file is not valid UTF-8: {path}")]
    InvalidUtf8 {
        /// The offending path.
        path: String,
    },
}

impl FsError {
    /// Maps an I/O error, folding `NotFound` into [`FsError::NotFound`].
    pub fn from_io(requested: &str, path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            FsError::NotFound {
                path: requested.to_string(),
            }
        } else {
            FsError::Io { path, source }
        }
    }
}
