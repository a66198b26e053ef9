//! Backup import: documents directory → validated state.
//!
//! The import pipeline is a sequence of structural checks, each with its
//! own error, followed by a per-record validation pass that never fails
//! the import: invalid records are dropped, valid siblings survive.

use std::path::Path;

use serde_json::{Map, Value};

use crate::clock::Clock;
use crate::error::{MyMoneyError, Result};
use crate::models::AppState;
use crate::storage::FileSystem;
use crate::validate;

use super::{APP_NAME, DATA_VERSION, MIN_DATA_VERSION};

/// Imports a backup document from storage.
///
/// Pipeline: read → parse → envelope shape → provenance → data version →
/// per-record validation → total recomputation. Totals stored in the file
/// are discarded; the returned state carries freshly computed ones.
///
/// # Errors
///
/// - [`MyMoneyError::Read`] if the file cannot be read.
/// - [`MyMoneyError::Json`] if the contents are not valid JSON.
/// - [`MyMoneyError::Format`] if `metadata` or `data` is missing.
/// - [`MyMoneyError::Provenance`] if the document was produced by another
///   application.
/// - [`MyMoneyError::Version`] if the data version is unsupported.
///
/// Individual invalid records are never an error: they are dropped and
/// the rest of the collection is kept, in order.
pub fn import_backup(fs: &dyn FileSystem, clock: &dyn Clock, path: &Path) -> Result<AppState> {
    let raw = fs
        .read_text(path)
        .map_err(|err| MyMoneyError::Read(Box::new(err)))?;
    let document: Value = serde_json::from_str(&raw)?;
    let root = document
        .as_object()
        .ok_or(MyMoneyError::Format("backup is not a JSON object"))?;
    let metadata = root
        .get("metadata")
        .ok_or(MyMoneyError::Format("missing metadata"))?;
    let data = root.get("data").ok_or(MyMoneyError::Format("missing data"))?;
    check_provenance(metadata)?;
    check_version(metadata)?;

    let mut state = sanitize_data(data, clock);
    state.recompute_totals();
    tracing::debug!(
        path = %path.display(),
        transactions = state.transactions.len(),
        budgets = state.budgets.len(),
        savings = state.savings.len(),
        notes = state.notes.len(),
        "imported backup"
    );
    Ok(state)
}

/// Revalidates an already-parsed state object that arrived from somewhere
/// other than a backup file (e.g. pasted JSON).
///
/// Runs the same per-record validation and total recomputation as
/// [`import_backup`], without any envelope checks.
///
/// # Errors
///
/// Returns [`MyMoneyError::Format`] if `data` is not a JSON object. Every
/// other malformation is handled per record or per collection.
pub fn validate_backup_data(data: &Value, clock: &dyn Clock) -> Result<AppState> {
    if !data.is_object() {
        return Err(MyMoneyError::Format("backup data is not a JSON object"));
    }
    let mut state = sanitize_data(data, clock);
    state.recompute_totals();
    Ok(state)
}

/// Checks that the document claims to come from this application.
fn check_provenance(metadata: &Value) -> Result<()> {
    let found = metadata.get("appName").and_then(Value::as_str);
    if found == Some(APP_NAME) {
        Ok(())
    } else {
        Err(MyMoneyError::Provenance {
            found: found.map(str::to_owned),
        })
    }
}

/// Checks that the document's data version is within the supported range.
///
/// An absent (or non-numeric) `dataVersion` is treated as version 1;
/// the first exporters did not write one.
fn check_version(metadata: &Value) -> Result<()> {
    let found = metadata
        .get("dataVersion")
        .and_then(Value::as_i64)
        .unwrap_or(1);
    if (i64::from(MIN_DATA_VERSION)..=i64::from(DATA_VERSION)).contains(&found) {
        Ok(())
    } else {
        Err(MyMoneyError::Version { found })
    }
}

/// Runs every collection of a raw data object through the validator.
///
/// Collections that are missing or not array-shaped restore as empty.
/// Totals are left zeroed; callers recompute them.
fn sanitize_data(data: &Value, clock: &dyn Clock) -> AppState {
    let empty = Map::new();
    let obj = data.as_object().unwrap_or(&empty);
    AppState {
        transactions: sanitize_collection("transactions", obj.get("transactions"), |item| {
            validate::transaction(item, clock)
        }),
        budgets: sanitize_collection("budgets", obj.get("budgets"), |item| {
            validate::budget(item, clock)
        }),
        savings: sanitize_collection("savings", obj.get("savings"), |item| {
            validate::savings(item, clock)
        }),
        savings_transactions: sanitize_collection(
            "savingsTransactions",
            obj.get("savingsTransactions"),
            |item| validate::savings_transaction(item, clock),
        ),
        notes: sanitize_collection("notes", obj.get("notes"), |item| validate::note(item, clock)),
        ..AppState::default()
    }
}

/// Maps every element of an array through the validator, keeping accepted
/// entities in order and logging how many were dropped.
fn sanitize_collection<T, F: FnMut(&Value) -> Option<T>>(
    kind: &'static str,
    value: Option<&Value>,
    mut accept: F,
) -> Vec<T> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        if let Some(entity) = accept(item) {
            kept.push(entity);
        }
    }
    let dropped = items.len() - kept.len();
    if dropped > 0 {
        tracing::debug!(kind, dropped, "discarded invalid records during restore");
    }
    kept
}
