//! Data models for MyMoney entities.
//!
//! This module contains strongly-typed representations of all MyMoney
//! entities, newtype ID wrappers, enumeration types for constrained
//! values, and the [`AppState`] aggregate.

mod app_state;
mod budget;
mod enums;
mod ids;
mod note;
mod savings;
mod savings_transaction;
mod transaction;

pub use app_state::AppState;
pub use budget::Budget;
pub use enums::{
    BudgetPeriod, FinancialImpact, NoteKind, NoteMood, SavingsTransactionKind, TransactionKind,
};
pub use ids::{BudgetId, NoteId, SavingsId, SavingsTransactionId, TransactionId};
pub use note::Note;
pub use savings::Savings;
pub use savings_transaction::SavingsTransaction;
pub use transaction::Transaction;
