//! Error types for the MyMoney core library.

/// All errors that can occur when validating or persisting MyMoney data.
///
/// The import pipeline surfaces one variant per failure stage: reading the
/// file, parsing the JSON, checking the envelope structure, checking the
/// producing application, and checking the data version. Per-record
/// validation failures are never errors; invalid records are silently
/// dropped by the validator instead.
#[derive(Debug, thiserror::Error)]
pub enum MyMoneyError {
    /// Backup file could not be read from storage.
    #[error("failed to read backup: {0}")]
    Read(Box<dyn core::error::Error + Send + Sync>),

    /// Backup contents are not well-formed JSON, or serialization failed.
    #[error("malformed backup JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Document parsed but is not shaped like a backup envelope.
    #[error("invalid backup format: {0}")]
    Format(&'static str),

    /// Backup was produced by a different application.
    #[error("backup does not belong to this application (appName: {found:?})")]
    Provenance {
        /// The `appName` found in the document's metadata, if any.
        found: Option<String>,
    },

    /// Backup data version lies outside the supported range.
    #[error("unsupported backup data version {found}")]
    Version {
        /// The `dataVersion` found in the document's metadata.
        found: i64,
    },

    /// Storage backend failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn core::error::Error + Send + Sync>),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, MyMoneyError>;
