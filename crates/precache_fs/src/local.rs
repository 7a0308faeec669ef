//! A [`Filesystem`] backed by a directory on disk.

use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use precache_common::ContentHash;
use walkdir::WalkDir;

use crate::error::FsError;
use crate::filesystem::Filesystem;

/// Exposes a build output directory as `/`-rooted paths.
///
/// `/main.js` resolves to `<root>/main.js`. Paths containing `..` are
/// rejected with [`FsError::OutsideRoot`].
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Creates a filesystem rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory all paths resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, file: &str) -> Result<PathBuf, FsError> {
        let mut path = self.root.clone();
        for part in file.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    return Err(FsError::OutsideRoot {
                        path: file.to_string(),
                    })
                }
                _ => path.push(part),
            }
        }
        Ok(path)
    }

    fn to_url(&self, path: &Path) -> Result<String, FsError> {
        let rel = path
            .strip_prefix(&self.root)
            .map_err(|_| FsError::OutsideRoot {
                path: path.display().to_string(),
            })?;
        let mut url = String::new();
        for component in rel.components() {
            url.push('/');
            url.push_str(&component.as_os_str().to_string_lossy());
        }
        Ok(url)
    }
}

impl Filesystem for LocalFilesystem {
    fn list(&self, dir: &str) -> Result<Vec<String>, FsError> {
        let base = self.resolve(dir)?;
        if !base.is_dir() {
            return Err(FsError::NotFound {
                path: dir.to_string(),
            });
        }

        // Symlinked files and directories are listed under the link's own path.
        let mut files = Vec::new();
        for entry in WalkDir::new(&base).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| FsError::Walk {
                root: base.clone(),
                reason: e.to_string(),
            })?;
            if entry.file_type().is_file() {
                files.push(self.to_url(entry.path())?);
            }
        }
        files.sort();

        tracing::debug!(dir, count = files.len(), "listed files");
        Ok(files)
    }

    fn read(&self, file: &str) -> Result<String, FsError> {
        let path = self.resolve(file)?;
        let bytes = fs::read(&path).map_err(|e| FsError::from_io(file, path, e))?;
        String::from_utf8(bytes).map_err(|_| FsError::InvalidUtf8 {
            path: file.to_string(),
        })
    }

    fn hash(&self, file: &str) -> Result<String, FsError> {
        let path = self.resolve(file)?;
        let handle = fs::File::open(&path).map_err(|e| FsError::from_io(file, path.clone(), e))?;
        let hash = ContentHash::from_reader(BufReader::new(handle))
            .map_err(|e| FsError::from_io(file, path, e))?;
        Ok(hash.to_string())
    }

    fn write(&self, file: &str, contents: &str) -> Result<(), FsError> {
        let path = self.resolve(file)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| FsError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(&path, contents).map_err(|e| FsError::Io { path, source: e })?;
        tracing::debug!(file, bytes = contents.len(), "wrote file");
        Ok(())
    }
}
