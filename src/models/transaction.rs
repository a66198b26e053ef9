//! Income/expense transaction model.

use serde::{Deserialize, Serialize};

use super::{TransactionId, TransactionKind};

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Amount of money moved (>= 0).
    pub amount: f64,
    /// Whether money came in or went out.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// User-chosen category label.
    pub category: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Transaction date (`YYYY-MM-DD`).
    pub date: String,
    /// Creation timestamp (ISO-8601 instant).
    pub created_at: String,
}
