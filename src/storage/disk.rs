//! Disk-backed document storage.
//!
//! Stores backup documents as plain files under a configurable directory
//! (default: the platform data dir + `mymoney/`, e.g.
//! `~/.local/share/mymoney/` on Linux).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MyMoneyError, Result};

/// Application folder name inside the platform data directory.
const APP_DIR: &str = "mymoney";

/// File-backed document storage rooted at a single directory.
///
/// Writes are atomic: content goes to a `.tmp` sibling first and is then
/// renamed over the target, so a crashed write never leaves a truncated
/// document behind.
#[derive(Debug)]
pub struct DiskFileStorage {
    /// Root directory containing all documents.
    root: PathBuf,
}

impl DiskFileStorage {
    /// Creates disk storage rooted at the given directory, creating the
    /// directory (and parents) if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    #[inline]
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root).map_err(storage_io_error)?;
        Ok(Self { root })
    }

    /// Returns the default platform-specific documents directory for this
    /// application.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be
    /// determined.
    #[inline]
    pub fn default_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|data_path| data_path.join(APP_DIR))
            .ok_or_else(|| {
                MyMoneyError::Storage("could not determine platform data directory".into())
            })
    }
}

/// Wraps an I/O error into a [`MyMoneyError::Storage`].
fn storage_io_error(err: std::io::Error) -> MyMoneyError {
    MyMoneyError::Storage(Box::new(err))
}

impl super::FileSystem for DiskFileStorage {
    #[inline]
    fn documents_dir(&self) -> Result<PathBuf> {
        Ok(self.root.clone())
    }

    #[inline]
    fn write_text(&self, path: &Path, contents: &str) -> Result<()> {
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents).map_err(storage_io_error)?;
        fs::rename(&tmp_path, path).map_err(storage_io_error)?;
        Ok(())
    }

    #[inline]
    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(storage_io_error)
    }

    #[inline]
    fn list_directory(&self, path: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry_result in fs::read_dir(path).map_err(storage_io_error)? {
            let entry = entry_result.map_err(storage_io_error)?;
            let file_type = entry.file_type().map_err(storage_io_error)?;
            if file_type.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    #[inline]
    fn delete_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(storage_io_error)
    }
}
