//! In-memory document storage for testing.
//!
//! Provides [`InMemoryFileSystem`], a thread-safe in-memory implementation
//! of the [`super::FileSystem`] trait. Ideal for unit tests where real
//! file I/O is undesirable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{MyMoneyError, Result};

/// Virtual documents directory reported by the in-memory backend.
const DOCUMENTS_DIR: &str = "/documents";

/// Thread-safe in-memory document storage.
///
/// Paths are virtual; nothing touches the real filesystem. The documents
/// directory is always `/documents`.
#[derive(Debug, Default)]
pub struct InMemoryFileSystem {
    /// All files behind a single mutex for thread-safe interior mutability.
    files: Mutex<HashMap<PathBuf, String>>,
}

impl InMemoryFileSystem {
    /// Creates a new empty in-memory filesystem.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the inner lock and applies a closure.
    fn with_lock<R>(&self, f: impl FnOnce(&mut HashMap<PathBuf, String>) -> R) -> Result<R> {
        let mut files = self.files.lock().map_err(|err| lock_error(&err))?;
        Ok(f(&mut files))
    }
}

/// Wraps a mutex poison error.
fn lock_error<T>(err: &std::sync::PoisonError<T>) -> MyMoneyError {
    MyMoneyError::Storage(err.to_string().into())
}

impl super::FileSystem for InMemoryFileSystem {
    #[inline]
    fn documents_dir(&self) -> Result<PathBuf> {
        Ok(PathBuf::from(DOCUMENTS_DIR))
    }

    #[inline]
    fn write_text(&self, path: &Path, contents: &str) -> Result<()> {
        self.with_lock(|files| {
            let _old = files.insert(path.to_path_buf(), contents.to_owned());
        })
    }

    #[inline]
    fn read_text(&self, path: &Path) -> Result<String> {
        self.with_lock(|files| files.get(path).cloned())?
            .ok_or_else(|| MyMoneyError::Storage(format!("no such file: {}", path.display()).into()))
    }

    #[inline]
    fn list_directory(&self, path: &Path) -> Result<Vec<String>> {
        self.with_lock(|files| {
            files
                .keys()
                .filter(|stored| stored.parent() == Some(path))
                .filter_map(|stored| {
                    stored
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                })
                .collect()
        })
    }

    #[inline]
    fn delete_file(&self, path: &Path) -> Result<()> {
        let removed = self.with_lock(|files| files.remove(path))?;
        match removed {
            Some(_contents) => Ok(()),
            None => Err(MyMoneyError::Storage(
                format!("no such file: {}", path.display()).into(),
            )),
        }
    }
}
