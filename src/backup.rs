//! Backup codec: self-describing JSON backup documents.
//!
//! A backup is a single pretty-printed JSON envelope holding `metadata`
//! (producing app, version, export instant, data version, item counts) and
//! `data` (the full [`AppState`]). Export serializes from the typed model;
//! import deliberately does NOT deserialize into it. The document is
//! walked as untyped JSON and every record is re-validated through
//! [`crate::validate`], so a hand-edited or half-corrupted backup restores
//! whatever is still usable.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::Result;
use crate::models::AppState;
use crate::storage::FileSystem;

mod export;
mod import;

pub use export::{export_backup, share_backup};
pub use import::{import_backup, validate_backup_data};

/// Application name stamped into every backup and required on import.
pub const APP_NAME: &str = "MyMoney";

/// Data version written by the current exporter.
pub const DATA_VERSION: u32 = 5;

/// Oldest data version accepted on import.
///
/// Versions 1 through [`DATA_VERSION`] are all read identically. There is
/// no migration logic; older documents are simply revalidated field by
/// field.
pub const MIN_DATA_VERSION: u32 = 1;

/// File name prefix of backup documents.
pub const BACKUP_PREFIX: &str = "mymoney_backup_";

/// File name prefix of exported report files.
pub const REPORT_PREFIX: &str = "mymoney_report_";

/// MIME type used when handing a backup to the share sheet.
pub(crate) const BACKUP_MIME: &str = "application/json";

/// Per-collection record counts stored in the backup metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCounts {
    /// Number of transactions.
    pub transactions: usize,
    /// Number of budgets.
    pub budgets: usize,
    /// Number of savings goals.
    pub savings: usize,
    /// Number of notes.
    pub notes: usize,
    /// Number of savings history entries.
    pub savings_transactions: usize,
}

impl ItemCounts {
    /// Counts the collections of the given state.
    #[inline]
    #[must_use]
    pub fn of(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.len(),
            budgets: state.budgets.len(),
            savings: state.savings.len(),
            notes: state.notes.len(),
            savings_transactions: state.savings_transactions.len(),
        }
    }
}

/// Metadata block of a backup envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupMetadata {
    /// Producing application name ([`APP_NAME`]).
    pub app_name: String,
    /// Producing application version.
    pub version: String,
    /// Export instant (ISO-8601, millisecond precision).
    pub export_date: String,
    /// Schema revision of the `data` block.
    pub data_version: u32,
    /// Record counts at export time.
    pub item_counts: ItemCounts,
}

/// The complete backup document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupEnvelope {
    /// Self-description of the document.
    pub metadata: BackupMetadata,
    /// The exported application state.
    pub data: AppState,
}

/// Builds the file name for a backup exported at the clock's current
/// instant: `mymoney_backup_<YYYY-MM-DD_HH-MM-SS>.json` (UTC, whole
/// seconds).
pub(crate) fn backup_file_name(clock: &dyn Clock) -> String {
    format!("{BACKUP_PREFIX}{}.json", clock.now().format("%Y-%m-%d_%H-%M-%S"))
}

/// Lists backup and report files in the documents directory, most recent
/// first.
///
/// Only names starting with [`BACKUP_PREFIX`] or [`REPORT_PREFIX`] are
/// returned. The timestamp embedded in the names sorts chronologically, so
/// plain descending name order is newest-first.
///
/// # Errors
///
/// Returns an error if the documents directory cannot be resolved or
/// enumerated.
pub fn list_backups(fs: &dyn FileSystem) -> Result<Vec<String>> {
    let dir = fs.documents_dir()?;
    let mut names: Vec<String> = fs
        .list_directory(&dir)?
        .into_iter()
        .filter(|name| name.starts_with(BACKUP_PREFIX) || name.starts_with(REPORT_PREFIX))
        .collect();
    names.sort_unstable();
    names.reverse();
    Ok(names)
}

/// Deletes a single backup (or report) file by name from the documents
/// directory.
///
/// Never propagates an error past this boundary: failures are logged and
/// reported as `false`. Names containing path separators are refused:
/// this deletes documents, not arbitrary paths.
pub fn delete_backup(fs: &dyn FileSystem, name: &str) -> bool {
    if name.contains('/') || name.contains('\\') {
        tracing::warn!(name, "refusing to delete outside the documents directory");
        return false;
    }
    let path = match fs.documents_dir() {
        Ok(dir) => dir.join(name),
        Err(err) => {
            tracing::warn!(error = %err, "could not resolve documents directory");
            return false;
        }
    };
    match fs.delete_file(&path) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, name, "failed to delete backup");
            false
        }
    }
}
