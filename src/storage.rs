//! Pluggable filesystem and share-sheet collaborators.
//!
//! The backup codec never touches the platform directly: it goes through
//! the [`FileSystem`] trait for document storage and the [`ShareSheet`]
//! trait for handing a finished backup to the platform share mechanism.
//! [`DiskFileStorage`] is the production backend; [`InMemoryFileSystem`]
//! backs tests and previews.

use std::path::{Path, PathBuf};

use crate::error::Result;

#[cfg(feature = "storage-file")]
mod disk;
mod memory;

#[cfg(feature = "storage-file")]
pub use disk::DiskFileStorage;
pub use memory::InMemoryFileSystem;

/// Text-file storage for backup documents.
///
/// Each call is atomic at single-file granularity: a write either fully
/// succeeds or leaves no partial content visible to subsequent reads.
pub trait FileSystem: core::fmt::Debug + Send + Sync {
    /// Returns the private per-app documents directory, creating nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be resolved.
    fn documents_dir(&self) -> Result<PathBuf>;

    /// Writes a UTF-8 text file, replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_text(&self, path: &Path, contents: &str) -> Result<()>;

    /// Reads a UTF-8 text file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read.
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Returns the file names (not paths) inside a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be enumerated.
    fn list_directory(&self, path: &Path) -> Result<Vec<String>>;

    /// Deletes a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be removed.
    fn delete_file(&self, path: &Path) -> Result<()>;
}

/// Platform share mechanism for handing a backup file to another app.
pub trait ShareSheet: core::fmt::Debug + Send + Sync {
    /// Offers the file at `path` to the platform share sheet.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform refuses or the share sheet is
    /// unavailable. Callers treat this as non-fatal; the file itself is
    /// unaffected.
    fn share(&self, path: &Path, mime_type: &str) -> Result<()>;
}
