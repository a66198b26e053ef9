//! Aggregate application state.

use serde::{Deserialize, Serialize};

use super::{Budget, Note, Savings, SavingsTransaction, Transaction, TransactionKind};

/// Everything the app persists: the five entity collections plus derived
/// totals.
///
/// The totals are a convenience for display. They are never authoritative:
/// any code that loads an `AppState` from outside the process must call
/// [`AppState::recompute_totals`] and discard whatever totals came with the
/// data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// All income/expense transactions, in insertion order.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// All budgets.
    #[serde(default)]
    pub budgets: Vec<Budget>,
    /// All savings goals.
    #[serde(default)]
    pub savings: Vec<Savings>,
    /// All savings goal history entries.
    #[serde(default)]
    pub savings_transactions: Vec<SavingsTransaction>,
    /// All notes.
    #[serde(default)]
    pub notes: Vec<Note>,
    /// Sum of all income transaction amounts (derived).
    #[serde(default)]
    pub total_income: f64,
    /// Sum of all expense transaction amounts (derived).
    #[serde(default)]
    pub total_expense: f64,
    /// `total_income - total_expense` (derived).
    #[serde(default)]
    pub balance: f64,
}

impl AppState {
    /// Creates an empty state with zeroed totals.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes `total_income`, `total_expense` and `balance` as a fold
    /// over the transaction collection, overwriting whatever was there.
    pub fn recompute_totals(&mut self) {
        let mut income = 0.0_f64;
        let mut expense = 0.0_f64;
        for tx in &self.transactions {
            match tx.kind {
                TransactionKind::Income => income += tx.amount,
                TransactionKind::Expense => expense += tx.amount,
            }
        }
        self.total_income = income;
        self.total_expense = expense;
        self.balance = income - expense;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;

    /// Builds a transaction with the given id, kind and amount.
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

    #[test]
    fn empty_state_has_zero_totals() {
        let mut state = AppState::new();
        state.recompute_totals();
        assert!(state.total_income.abs() < f64::EPSILON);
        assert!(state.total_expense.abs() < f64::EPSILON);
        assert!(state.balance.abs() < f64::EPSILON);
    }

    #[test]
    fn totals_fold_over_transactions() {
        let mut state = AppState {
            transactions: vec![
                tx("t-1", TransactionKind::Income, 1000.0),
                tx("t-2", TransactionKind::Expense, 250.0),
                tx("t-3", TransactionKind::Expense, 50.0),
                tx("t-4", TransactionKind::Income, 100.0),
            ],
            ..AppState::default()
        };
        state.recompute_totals();
        assert!((state.total_income - 1100.0).abs() < f64::EPSILON);
        assert!((state.total_expense - 300.0).abs() < f64::EPSILON);
        assert!((state.balance - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn recompute_overwrites_stale_totals() {
        let mut state = AppState {
            transactions: vec![tx("t-1", TransactionKind::Income, 10.0)],
            total_income: 9999.0,
            total_expense: 9999.0,
            balance: -9999.0,
            ..AppState::default()
        };
        state.recompute_totals();
        assert!((state.total_income - 10.0).abs() < f64::EPSILON);
        assert!(state.total_expense.abs() < f64::EPSILON);
        assert!((state.balance - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serialize_uses_camel_case_totals() {
        let state = AppState::new();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains(r#""totalIncome""#));
        assert!(json.contains(r#""totalExpense""#));
        assert!(json.contains(r#""savingsTransactions""#));
    }

    #[test]
    fn deserialize_tolerates_missing_collections() {
        let state: AppState = serde_json::from_str("{}").unwrap();
        assert!(state.transactions.is_empty());
        assert!(state.notes.is_empty());
        assert!(state.balance.abs() < f64::EPSILON);
    }
}
