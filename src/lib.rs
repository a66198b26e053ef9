//! Core library for the MyMoney personal finance tracker.
//!
//! This crate holds the app's validated data model (transactions, budgets,
//! savings goals with history, notes) and the backup codec that exports
//! the whole state as a self-describing JSON document and restores it with
//! every record revalidated. UI concerns live elsewhere; this core only
//! accepts, validates, rejects, or passes data through.
//!
//! ```
//! use mymoney_rs::backup;
//! use mymoney_rs::clock::SystemClock;
//! use mymoney_rs::models::AppState;
//! use mymoney_rs::storage::InMemoryFileSystem;
//!
//! let fs = InMemoryFileSystem::new();
//! let path = backup::export_backup(&fs, &SystemClock, &AppState::new())?;
//! let restored = backup::import_backup(&fs, &SystemClock, &path)?;
//! assert!(restored.transactions.is_empty());
//! # Ok::<(), mymoney_rs::error::MyMoneyError>(())
//! ```

pub mod backup;
pub mod clock;
pub mod error;
pub mod format;
pub mod models;
pub mod storage;
pub mod validate;
