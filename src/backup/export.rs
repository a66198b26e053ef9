//! Backup export: state → envelope → documents directory.

use std::path::{Path, PathBuf};

use crate::clock::Clock;
use crate::error::Result;
use crate::models::AppState;
use crate::storage::{FileSystem, ShareSheet};

use super::{BACKUP_MIME, BackupEnvelope, BackupMetadata, DATA_VERSION, ItemCounts};

/// Exports the full application state as a timestamped backup document in
/// the documents directory, returning the path of the written file.
///
/// The document is pretty-printed (2-space indentation) so users can read
/// and hand-edit their own backups.
///
/// # Errors
///
/// Returns an error if the documents directory is unavailable or the file
/// cannot be written. No partial file is left behind on failure.
pub fn export_backup(fs: &dyn FileSystem, clock: &dyn Clock, state: &AppState) -> Result<PathBuf> {
    let envelope = BackupEnvelope {
        metadata: BackupMetadata {
            app_name: super::APP_NAME.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            export_date: clock.iso_instant(),
            data_version: DATA_VERSION,
            item_counts: ItemCounts::of(state),
        },
        data: state.clone(),
    };
    let document = serde_json::to_string_pretty(&envelope)?;
    let dir = fs.documents_dir()?;
    let path = dir.join(super::backup_file_name(clock));
    fs.write_text(&path, &document)?;
    tracing::debug!(path = %path.display(), "exported backup");
    Ok(path)
}

/// Hands an exported backup file to the platform share sheet.
///
/// Failure is non-fatal: it is logged and reported as `false`, and the
/// file itself is unaffected.
pub fn share_backup(sheet: &dyn ShareSheet, path: &Path) -> bool {
    match sheet.share(path, BACKUP_MIME) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, path = %path.display(), "share sheet failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::DateTime;
    use serde_json::Value;

    use super::*;
    use crate::clock::FixedClock;
    use crate::error::MyMoneyError;
    use crate::models::{Note, NoteId, NoteKind, Savings, SavingsId, Transaction, TransactionId, TransactionKind};
    use crate::storage::InMemoryFileSystem;

    /// Clock pinned to 2024-02-01T00:00:00Z.
    fn clock() -> FixedClock {
        FixedClock::new(DateTime::from_timestamp(1_706_745_600, 0).unwrap())
    }

    /// Builds a transaction with the given id and amount.
    fn tx(id: &str, kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            id: TransactionId::new(id.to_owned()),
            amount,
            kind,
            category: "Misc".to_owned(),
            description: String::new(),
            date: "2024-01-01".to_owned(),
            created_at: "2024-01-01T00:00:00.000Z".to_owned(),
        }
    }

    /// Builds a minimal note.
    fn note(id: &str) -> Note {
        Note {
            id: NoteId::new(id.to_owned()),
            title: "Title".to_owned(),
            content: String::new(),
            kind: NoteKind::General,
            mood: None,
            financial_impact: None,
            amount: None,
            category: None,
            tags: Vec::new(),
            related_transaction_ids: Vec::new(),
            related_savings_ids: Vec::new(),
            related_budget_ids: Vec::new(),
            date: "2024-01-01".to_owned(),
            created_at: "2024-01-01T00:00:00.000Z".to_owned(),
            updated_at: "2024-01-01T00:00:00.000Z".to_owned(),
        }
    }

    /// Builds a minimal savings goal.
    fn goal(id: &str) -> Savings {
        Savings {
            id: SavingsId::new(id.to_owned()),
            name: "Goal".to_owned(),
            target: 100.0,
            current: 0.0,
            deadline: None,
            description: String::new(),
            category: "general".to_owned(),
            priority: "medium".to_owned(),
            icon: "savings".to_owned(),
            created_at: "2024-01-01T00:00:00.000Z".to_owned(),
        }
    }

    /// Sample state: 3 transactions, 0 budgets, 1 saving, 2 notes.
    fn sample_state() -> AppState {
        AppState {
            transactions: vec![
                tx("t-1", TransactionKind::Income, 1000.0),
                tx("t-2", TransactionKind::Expense, 200.0),
                tx("t-3", TransactionKind::Expense, 100.0),
            ],
            savings: vec![goal("s-1")],
            notes: vec![note("n-1"), note("n-2")],
            ..AppState::default()
        }
    }

    #[test]
    fn export_writes_timestamped_file() {
        let fs = InMemoryFileSystem::new();
        let path = export_backup(&fs, &clock(), &sample_state()).unwrap();
        assert_eq!(
            path,
            PathBuf::from("/documents/mymoney_backup_2024-02-01_00-00-00.json")
        );
        assert!(fs.read_text(&path).is_ok());
    }

    #[test]
    fn export_stamps_metadata() {
        let fs = InMemoryFileSystem::new();
        let path = export_backup(&fs, &clock(), &sample_state()).unwrap();
        let document: Value = serde_json::from_str(&fs.read_text(&path).unwrap()).unwrap();
        let metadata = document.get("metadata").unwrap();
        assert_eq!(
            metadata.get("appName").and_then(Value::as_str),
            Some("MyMoney")
        );
        assert_eq!(
            metadata.get("exportDate").and_then(Value::as_str),
            Some("2024-02-01T00:00:00.000Z")
        );
        assert_eq!(metadata.get("dataVersion").and_then(Value::as_i64), Some(5));
    }

    #[test]
    fn export_counts_every_collection() {
        let fs = InMemoryFileSystem::new();
        let path = export_backup(&fs, &clock(), &sample_state()).unwrap();
        let document: Value = serde_json::from_str(&fs.read_text(&path).unwrap()).unwrap();
        let counts = document
            .get("metadata")
            .and_then(|metadata| metadata.get("itemCounts"))
            .unwrap();
        assert_eq!(counts.get("transactions").and_then(Value::as_u64), Some(3));
        assert_eq!(counts.get("budgets").and_then(Value::as_u64), Some(0));
        assert_eq!(counts.get("savings").and_then(Value::as_u64), Some(1));
        assert_eq!(counts.get("notes").and_then(Value::as_u64), Some(2));
        assert_eq!(
            counts.get("savingsTransactions").and_then(Value::as_u64),
            Some(0)
        );
    }

    #[test]
    fn export_is_pretty_printed() {
        let fs = InMemoryFileSystem::new();
        let path = export_backup(&fs, &clock(), &AppState::new()).unwrap();
        let document = fs.read_text(&path).unwrap();
        assert!(document.starts_with("{\n  \"metadata\""));
    }

    /// Share sheet test double recording every call.
    #[derive(Debug, Default)]
    struct RecordingShareSheet {
        /// Recorded `(path, mime)` pairs.
        calls: Mutex<Vec<(PathBuf, String)>>,
        /// Whether the next call should fail.
        fail: bool,
    }

    impl ShareSheet for RecordingShareSheet {
        fn share(&self, path: &Path, mime_type: &str) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push((path.to_path_buf(), mime_type.to_owned()));
            if self.fail {
                return Err(MyMoneyError::Storage("share sheet unavailable".into()));
            }
            Ok(())
        }
    }

    #[test]
    fn share_backup_passes_json_mime() {
        let sheet = RecordingShareSheet::default();
        let path = Path::new("/documents/mymoney_backup_2024-02-01_00-00-00.json");
        assert!(share_backup(&sheet, path));
        let calls = sheet.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, "application/json");
    }

    #[test]
    fn share_backup_failure_is_nonfatal() {
        let sheet = RecordingShareSheet {
            fail: true,
            ..RecordingShareSheet::default()
        };
        let path = Path::new("/documents/mymoney_backup_2024-02-01_00-00-00.json");
        assert!(!share_backup(&sheet, path));
    }
}
