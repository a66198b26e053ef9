//! Savings goal history entry model.

use serde::{Deserialize, Serialize};

use super::{SavingsId, SavingsTransactionId, SavingsTransactionKind};

/// One deposit/withdrawal in a savings goal's history.
///
/// `previous_balance`/`new_balance` are a snapshot taken when the entry was
/// recorded. They are kept exactly as stored and never re-derived from the
/// parent [`super::Savings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsTransaction {
    /// Unique identifier.
    pub id: SavingsTransactionId,
    /// The savings goal this entry belongs to.
    pub savings_id: SavingsId,
    /// What kind of balance change this entry records.
    #[serde(rename = "type")]
    pub kind: SavingsTransactionKind,
    /// Amount moved (>= 0).
    pub amount: f64,
    /// Entry date (`YYYY-MM-DD`).
    pub date: String,
    /// Free-text note.
    #[serde(default)]
    pub note: String,
    /// Goal balance before the change (>= 0).
    pub previous_balance: f64,
    /// Goal balance after the change (>= 0).
    pub new_balance: f64,
    /// Creation timestamp (ISO-8601 instant).
    pub created_at: String,
}
